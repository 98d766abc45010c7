use shared::domain::{PersonalContent, Profile, ProfileId, Speech};

use crate::cache::ProfileCache;

/// The five state transitions the application performs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetProfile(Option<Profile>),
    SetSpeech(Option<Speech>),
    SetDeputies(Vec<String>),
    SetPersonalContent(PersonalContent),
    CacheProfile(Profile),
}

/// Complete application state. Each field is one slice owned by exactly
/// one reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub profile: Option<Profile>,
    pub speech: Option<Speech>,
    pub deputies: Vec<String>,
    pub cache: ProfileCache,
    pub personal_content: PersonalContent,
}

fn profile_slice(state: Option<Profile>, action: &Action) -> Option<Profile> {
    match action {
        Action::SetProfile(profile) => profile.clone(),
        _ => state,
    }
}

fn speech_slice(state: Option<Speech>, action: &Action) -> Option<Speech> {
    match action {
        Action::SetSpeech(speech) => speech.clone(),
        _ => state,
    }
}

fn deputies_slice(state: Vec<String>, action: &Action) -> Vec<String> {
    match action {
        Action::SetDeputies(deputies) => deputies.clone(),
        _ => state,
    }
}

fn cache_slice(state: ProfileCache, action: &Action) -> ProfileCache {
    match action {
        Action::CacheProfile(profile) => {
            let mut next = state;
            next.insert(profile.clone());
            next
        }
        _ => state,
    }
}

fn personal_content_slice(state: PersonalContent, action: &Action) -> PersonalContent {
    match action {
        Action::SetPersonalContent(content) => *content,
        _ => state,
    }
}

/// Routes the action through every slice reducer and assembles the next
/// state. Slices not addressed by the action pass through unchanged.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        profile: profile_slice(state.profile, action),
        speech: speech_slice(state.speech, action),
        deputies: deputies_slice(state.deputies, action),
        cache: cache_slice(state.cache, action),
        personal_content: personal_content_slice(state.personal_content, action),
    }
}

/// Accessor wrapper over [`AppState`] that hides the dispatch mechanism.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
    }

    /// Replaces the current profile wholesale. With `cache_it` the profile
    /// is additionally appended to the bounded cache.
    pub fn set_profile(&mut self, profile: Option<Profile>, cache_it: bool) {
        let cached = if cache_it { profile.clone() } else { None };
        self.dispatch(Action::SetProfile(profile));
        if let Some(profile) = cached {
            self.dispatch(Action::CacheProfile(profile));
        }
    }

    pub fn set_speech(&mut self, speech: Speech) {
        self.dispatch(Action::SetSpeech(Some(speech)));
    }

    pub fn clear_speech(&mut self) {
        self.dispatch(Action::SetSpeech(None));
    }

    pub fn set_deputies(&mut self, deputies: Vec<String>) {
        self.dispatch(Action::SetDeputies(deputies));
    }

    pub fn set_personal_content(&mut self, content: PersonalContent) {
        self.dispatch(Action::SetPersonalContent(content));
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.state.profile.as_ref()
    }

    pub fn speech(&self) -> Option<&Speech> {
        self.state.speech.as_ref()
    }

    pub fn deputies(&self) -> &[String] {
        &self.state.deputies
    }

    pub fn personal_content(&self) -> PersonalContent {
        self.state.personal_content
    }

    pub fn find_profile_in_cache(&self, id: &ProfileId) -> Option<&Profile> {
        self.state.cache.find(id)
    }

    pub fn cache_len(&self) -> usize {
        self.state.cache.len()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
