use shared::domain::{
    ParagraphKind, PersonalData, Profile, ProfileId, Speech, SpeechContent, SpeechEntry,
    SpeechMeta, SpeechParagraph,
};

mod cache_tests;
mod search_tests;

pub(crate) fn sample_profile(display_name: &str) -> Profile {
    let mut parts = display_name.splitn(2, ' ');
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.next().unwrap_or_default().to_string();
    Profile {
        id: ProfileId::from_display_name(display_name),
        personal: PersonalData {
            first_name,
            last_name,
            gender: Some("female".into()),
            birthyear: Some(1970),
            ..PersonalData::default()
        },
        party: Some("SPD".into()),
        speeches: vec![sample_speech(display_name)],
        ..Profile::default()
    }
}

pub(crate) fn sample_speech(name: &str) -> Speech {
    Speech {
        meta: SpeechMeta {
            date: "2019-05-09".into(),
            name: name.into(),
            topic: "klimaschutz".into(),
            party: "SPD".into(),
        },
        content: SpeechContent {
            entries: vec![SpeechEntry {
                speaker: name.into(),
                is_speaker: true,
                paragraphs: vec![SpeechParagraph {
                    kind: ParagraphKind::Speech,
                    text: "Sehr geehrte Damen und Herren,".into(),
                }],
            }],
        },
        analysis: Default::default(),
    }
}
