//! UI/backend events and error modeling for the desktop controller.

use shared::domain::{PersonalContent, Profile, Speech};

pub enum UiEvent {
    DeputiesLoaded(Vec<String>),
    StartupFailed(String),
    ProfileResolved(Box<Profile>),
    ProfileNotFound { query: String },
    SpeechChanged(Option<Box<Speech>>),
    PersonalContentChanged(PersonalContent),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Search,
    General,
}

/// Maps a startup failure to the message shown on the welcome screen.
pub fn classify_startup_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("timed out")
        || lower.contains("connection refused")
        || lower.contains("dns")
        || lower.contains("error sending request")
    {
        "Der Server ist nicht erreichbar.".to_string()
    } else {
        format!("Fehler beim Laden der Daten: {message}")
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("error sending request")
            || message_lower.contains("unreachable")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("missing")
            || message_lower.contains("out of range")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Netzwerk",
        UiErrorCategory::Validation => "Validierung",
        UiErrorCategory::Unknown => "Unerwartet",
    }
}
