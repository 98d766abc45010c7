use shared::domain::ProfileId;

use super::sample_profile;
use crate::cache::{ProfileCache, CACHE_SIZE};

#[test]
fn never_exceeds_capacity() {
    let mut cache = ProfileCache::new();
    for i in 0..25 {
        cache.insert(sample_profile(&format!("Deputy Nr{i}")));
        assert!(cache.len() <= CACHE_SIZE);
    }
    assert_eq!(cache.len(), CACHE_SIZE);
}

#[test]
fn eleventh_insert_evicts_the_first() {
    let mut cache = ProfileCache::new();
    for i in 0..=CACHE_SIZE {
        cache.insert(sample_profile(&format!("Deputy Nr{i}")));
    }

    let first = ProfileId::from_display_name("Deputy Nr0");
    let second = ProfileId::from_display_name("Deputy Nr1");
    let last = ProfileId::from_display_name(&format!("Deputy Nr{CACHE_SIZE}"));
    assert!(cache.find(&first).is_none());
    assert!(cache.find(&second).is_some());
    assert!(cache.find(&last).is_some());
}

#[test]
fn duplicate_ids_resolve_to_the_first_entry() {
    let mut cache = ProfileCache::new();
    let mut older = sample_profile("Anna Muller");
    older.party = Some("SPD".into());
    let mut newer = sample_profile("Anna Muller");
    newer.party = Some("CDU".into());

    cache.insert(older);
    cache.insert(newer);
    assert_eq!(cache.len(), 2);

    let hit = cache
        .find(&ProfileId::from_display_name("Anna Muller"))
        .expect("cached");
    assert_eq!(hit.party.as_deref(), Some("SPD"));
}

#[test]
fn evicting_a_duplicate_exposes_the_later_copy() {
    let mut cache = ProfileCache::new();
    let mut older = sample_profile("Anna Muller");
    older.party = Some("SPD".into());
    cache.insert(older);

    // Fill the rest of the window, then one more to push the first copy out.
    for i in 1..CACHE_SIZE {
        cache.insert(sample_profile(&format!("Deputy Nr{i}")));
    }
    let mut newer = sample_profile("Anna Muller");
    newer.party = Some("CDU".into());
    cache.insert(newer);

    let hit = cache
        .find(&ProfileId::from_display_name("Anna Muller"))
        .expect("cached");
    assert_eq!(hit.party.as_deref(), Some("CDU"));
}

#[test]
fn lookup_misses_on_unknown_id() {
    let mut cache = ProfileCache::new();
    cache.insert(sample_profile("Anna Muller"));
    assert!(cache
        .find(&ProfileId::from_display_name("Bob Alt"))
        .is_none());
}
