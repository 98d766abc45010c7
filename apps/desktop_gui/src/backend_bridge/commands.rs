//! Backend commands queued from UI to backend worker.

use shared::domain::PersonalContent;

pub enum BackendCommand {
    LoadDeputies,
    ResolveProfile { name: String },
    SelectSpeech { index: usize },
    ClearSpeech,
    SetPersonalContent { content: PersonalContent },
}
