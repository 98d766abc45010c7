//! Client-side core of the MeinBundestag desktop app: application state
//! with pure reducers, the bounded profile cache, local name search, and
//! the HTTP data access used to resolve deputies and their profiles.

pub mod api;
pub mod cache;
pub mod client;
pub mod search;
pub mod store;

pub use api::{load_settings, DeputiesApi, HttpApi, Settings, DEFAULT_API_URL};
pub use cache::{ProfileCache, CACHE_SIZE};
pub use client::{DeputyClient, ProfileLookup, SpeechSelectionError};
pub use search::{find_suggestions, MAX_SUGGESTIONS};
pub use store::{Action, AppState, Store};

#[cfg(test)]
mod tests;
