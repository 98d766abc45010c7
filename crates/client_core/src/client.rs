use std::sync::Arc;

use anyhow::Result;
use shared::domain::{PersonalContent, Profile, ProfileId, Speech};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{api::DeputiesApi, store::Store};

/// Outcome of a profile resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(Profile),
    /// Carries the attempted query so screens can key their message to it.
    NotFound { query: String },
}

#[derive(Debug, Error)]
pub enum SpeechSelectionError {
    #[error("no profile selected")]
    NoProfileSelected,
    #[error("speech index {index} out of range ({available} available)")]
    OutOfRange { index: usize, available: usize },
}

/// Cache-aware client over the deputies backend. Owns the application
/// store; all state mutation funnels through its dispatch.
pub struct DeputyClient {
    api: Arc<dyn DeputiesApi>,
    store: Mutex<Store>,
}

impl DeputyClient {
    pub fn new(api: Arc<dyn DeputiesApi>) -> Self {
        Self {
            api,
            store: Mutex::new(Store::new()),
        }
    }

    /// Returns the deputies list, fetching it from the backend only when
    /// the store does not hold it yet.
    pub async fn load_deputies(&self) -> Result<Vec<String>> {
        {
            let store = self.store.lock().await;
            if !store.deputies().is_empty() {
                return Ok(store.deputies().to_vec());
            }
        }

        let names = self.api.fetch_deputies().await?;
        info!(count = names.len(), "deputies list fetched");
        let mut store = self.store.lock().await;
        store.set_deputies(names.clone());
        Ok(names)
    }

    /// Resolves a display name to a profile: cache first, network on miss.
    ///
    /// Entering a new profile context resets the personal-content selector
    /// and the current speech. A cache hit becomes the current profile
    /// without re-caching or touching the network; a backend miss leaves
    /// the current profile untouched.
    pub async fn resolve_profile(&self, display_name: &str) -> Result<ProfileLookup> {
        let id = ProfileId::from_display_name(display_name);

        {
            let mut store = self.store.lock().await;
            store.set_personal_content(PersonalContent::Overview);
            store.clear_speech();
            if let Some(hit) = store.find_profile_in_cache(&id).cloned() {
                debug!(profile = %id, "profile cache hit");
                store.set_profile(Some(hit.clone()), false);
                return Ok(ProfileLookup::Found(hit));
            }
        }

        debug!(profile = %id, "profile cache miss, fetching");
        match self.api.fetch_profile(&id).await? {
            None => Ok(ProfileLookup::NotFound {
                query: display_name.to_string(),
            }),
            Some(profile) => {
                let mut store = self.store.lock().await;
                store.set_profile(Some(profile.clone()), true);
                Ok(ProfileLookup::Found(profile))
            }
        }
    }

    /// Makes the indexed speech of the current profile the current speech.
    pub async fn select_speech(&self, index: usize) -> Result<Speech, SpeechSelectionError> {
        let mut store = self.store.lock().await;
        let speech = {
            let profile = store
                .profile()
                .ok_or(SpeechSelectionError::NoProfileSelected)?;
            profile
                .speeches
                .get(index)
                .cloned()
                .ok_or(SpeechSelectionError::OutOfRange {
                    index,
                    available: profile.speeches.len(),
                })?
        };
        store.set_speech(speech.clone());
        Ok(speech)
    }

    pub async fn clear_speech(&self) {
        self.store.lock().await.clear_speech();
    }

    pub async fn set_personal_content(&self, content: PersonalContent) {
        self.store.lock().await.set_personal_content(content);
    }

    pub async fn personal_content(&self) -> PersonalContent {
        self.store.lock().await.personal_content()
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.store.lock().await.profile().cloned()
    }

    pub async fn speech(&self) -> Option<Speech> {
        self.store.lock().await.speech().cloned()
    }

    pub async fn deputies(&self) -> Vec<String> {
        self.store.lock().await.deputies().to_vec()
    }

    pub async fn cached_profile(&self, id: &ProfileId) -> Option<Profile> {
        self.store.lock().await.find_profile_in_cache(id).cloned()
    }
}
