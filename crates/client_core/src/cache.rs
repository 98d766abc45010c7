use std::collections::VecDeque;

use shared::domain::{Profile, ProfileId};

/// Maximum number of profiles kept in memory.
pub const CACHE_SIZE: usize = 10;

/// Bounded FIFO cache of previously fetched profiles.
///
/// Eviction is strictly first-in-first-out: a lookup hit does not promote
/// the entry, and inserting the same id twice creates two independent
/// entries. Lookups return the structurally-first match, so a duplicate
/// only becomes visible once the earlier copy has been evicted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileCache {
    entries: VecDeque<Profile>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the profile, evicting the oldest entry once the capacity
    /// would be exceeded.
    pub fn insert(&mut self, profile: Profile) {
        self.entries.push_back(profile);
        if self.entries.len() > CACHE_SIZE {
            self.entries.pop_front();
        }
    }

    pub fn find(&self, id: &ProfileId) -> Option<&Profile> {
        self.entries.iter().find(|profile| &profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
