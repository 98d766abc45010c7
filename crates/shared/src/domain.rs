use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized identifier of a deputy profile: the display name lowercased
/// with spaces replaced by hyphens. Doubles as the path segment of the
/// profile endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn from_display_name(name: &str) -> Self {
        Self(name.trim().to_lowercase().replace(' ', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full profile of a deputy as served by the backend. The `id` field is not
/// part of the wire payload; the client stamps it after a fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: ProfileId,
    pub personal: PersonalData,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub speeches: Vec<Speech>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub sidejobs: Vec<Sidejob>,
    #[serde(default)]
    pub committees: Vec<Committee>,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.personal.first_name, self.personal.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalData {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birthyear: Option<u16>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub picture: Picture,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// A single plenary speech together with its sentiment annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Speech {
    pub meta: SpeechMeta,
    pub content: SpeechContent,
    #[serde(default)]
    pub analysis: SpeechAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechMeta {
    pub date: String,
    pub name: String,
    pub topic: String,
    pub party: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechContent {
    #[serde(default)]
    pub entries: Vec<SpeechEntry>,
}

/// Subsequent paragraphs attributed to one person at the lectern or in the
/// hall. `is_speaker` marks the deputy the speech belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechEntry {
    pub speaker: String,
    pub is_speaker: bool,
    #[serde(default)]
    pub paragraphs: Vec<SpeechParagraph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechParagraph {
    #[serde(rename = "type_of_paragraph")]
    pub kind: ParagraphKind,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    Speech,
    Comment,
}

impl SpeechParagraph {
    pub fn is_comment(&self) -> bool {
        self.kind == ParagraphKind::Comment
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    #[serde(default)]
    pub polarity: f64,
    #[serde(default)]
    pub subjectivity: f64,
    #[serde(default)]
    pub number_of_comments: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub date: String,
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        !self.answers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub date: String,
    pub title: String,
    pub vote: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sidejob {
    pub job: String,
    pub job_category: String,
    pub organization: String,
    #[serde(default)]
    pub date: Option<SidejobDates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidejobDates {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Committee {
    #[serde(default)]
    pub name: Option<String>,
}

/// Which sub-view the personal-activity screen shows. Transient UI state,
/// never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalContent {
    #[default]
    Overview,
    Speeches,
    Questions,
    Votes,
    Sidejobs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_id_normalizes_display_names() {
        let id = ProfileId::from_display_name("Angela Merkel");
        assert_eq!(id.as_str(), "angela-merkel");

        let id = ProfileId::from_display_name("  Karl-Heinz Müller ");
        assert_eq!(id.as_str(), "karl-heinz-müller");
    }

    #[test]
    fn deserializes_profile_without_id_field() {
        let raw = serde_json::json!({
            "personal": {
                "first_name": "Anna",
                "last_name": "Muller",
                "gender": "female",
                "birthyear": 1970,
                "picture": { "url": "https://example.org/anna.jpg" },
                "location": { "state": "Berlin" }
            },
            "party": "SPD",
            "speeches": [],
            "questions": [
                { "date": "2019-01-01", "category": "Umwelt", "url": "https://example.org/q", "answers": [{}] }
            ],
            "votes": [],
            "sidejobs": [],
            "committees": [{ "name": "Ausschuss für Umwelt" }]
        });

        let profile: Profile = serde_json::from_value(raw).expect("profile");
        assert_eq!(profile.id, ProfileId::default());
        assert_eq!(profile.display_name(), "Anna Muller");
        assert_eq!(profile.personal.location.state.as_deref(), Some("Berlin"));
        assert!(profile.questions[0].is_answered());
        assert_eq!(profile.committees.len(), 1);
    }

    #[test]
    fn paragraph_kind_uses_wire_tag() {
        let raw = serde_json::json!({
            "type_of_paragraph": "comment",
            "text": "(Beifall bei der SPD)"
        });
        let paragraph: SpeechParagraph = serde_json::from_value(raw).expect("paragraph");
        assert!(paragraph.is_comment());

        let raw = serde_json::json!({
            "type_of_paragraph": "speech",
            "text": "Sehr geehrte Damen und Herren,"
        });
        let paragraph: SpeechParagraph = serde_json::from_value(raw).expect("paragraph");
        assert_eq!(paragraph.kind, ParagraphKind::Speech);
    }
}
