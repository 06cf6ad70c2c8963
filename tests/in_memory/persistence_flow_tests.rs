//! Store-backed registry integration tests.

use std::sync::Arc;

use super::helpers::{AnnouncementSource, EventCounter, registry};
use rstest::rstest;
use vnc_registry::server_profile::{
    DefaultServerRegistry,
    adapters::{StoredProfileFactory, memory::InMemoryProfileStore},
    domain::{ConnectionOptions, ConnectionTarget, ProfileName, ProfileRecord},
    ports::ProfileStore,
    services::{ProfilePersistenceService, ServerRegistry},
};
use mockable::DefaultClock;

fn saved(name: &str, target: &str) -> ProfileRecord {
    ProfileRecord::new(
        ProfileName::new(name).expect("valid name"),
        ConnectionTarget::parse(target).expect("valid target"),
        ConnectionOptions::new().with_remember_password(true),
    )
}

#[rstest]
fn startup_restore_coexists_with_discovered_servers(registry: DefaultServerRegistry) {
    let source = AnnouncementSource::new(registry.clone());
    source.announce("Office", "192.168.1.20:0");
    let store = Arc::new(InMemoryProfileStore::with_records([
        saved("Office", "office.example.org:1"),
        saved("Home", "home.example.org::5905"),
    ]));
    let events = EventCounter::attach(&registry);
    let service = ProfilePersistenceService::new(store, registry.clone());

    let restored = service.restore().expect("restore should succeed");

    let names: Vec<&str> = restored
        .iter()
        .map(|profile| profile.name().as_str())
        .collect();
    assert_eq!(names, ["Office_1", "Home"]);
    assert_eq!(registry.len(), 3);
    assert_eq!(events.count(), 2);
    assert!(
        registry
            .find_by_name("Home")
            .expect("home restored")
            .options()
            .remember_password()
    );
}

#[rstest]
fn saving_after_edits_writes_current_settings(registry: DefaultServerRegistry) {
    let store = Arc::new(InMemoryProfileStore::new());
    let service = ProfilePersistenceService::new(Arc::clone(&store), registry.clone());
    let profile = registry.create("Kiosk").expect("create should succeed");
    profile.set_options(ConnectionOptions::new().with_view_only(true).with_fullscreen(true));

    assert_eq!(service.persist().expect("persist should succeed"), 1);

    let records = store.load().expect("load should succeed");
    let record = records.first().expect("one record saved");
    assert_eq!(record.name.as_str(), "Kiosk");
    assert!(record.options.view_only());
    assert!(record.options.fullscreen());
}

#[rstest]
fn removed_profiles_are_dropped_from_the_next_save(registry: DefaultServerRegistry) {
    let store = Arc::new(InMemoryProfileStore::with_records([
        saved("Office", "office.example.org:1"),
        saved("Home", "home.example.org:2"),
    ]));
    let service = ProfilePersistenceService::new(Arc::clone(&store), registry.clone());
    service.restore().expect("restore should succeed");

    assert!(registry.remove_by_name("Office").is_some());
    service.persist().expect("persist should succeed");

    let records = store.load().expect("load should succeed");
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, ["Home"]);
}

/// Runs one application launch: optional discovery, restore, save.
fn launch(store: &Arc<InMemoryProfileStore>, discover_first: bool) {
    let registry: DefaultServerRegistry =
        ServerRegistry::new(Arc::new(StoredProfileFactory::new(Arc::new(DefaultClock))));
    let source = AnnouncementSource::new(registry.clone());
    let service = ProfilePersistenceService::new(Arc::clone(store), registry);

    if discover_first {
        source.announce("Office", "192.168.1.20:0");
    }
    service.restore().expect("restore should succeed");
    if !discover_first {
        source.announce("Office", "192.168.1.20:0");
    }
    service.persist().expect("persist should succeed");
}

#[test]
fn repeated_launches_leave_the_store_unchanged() {
    let initial = vec![
        saved("Office", "office.example.org:1"),
        saved("Home", "home.example.org::5905"),
    ];
    let store = Arc::new(InMemoryProfileStore::with_records(initial.clone()));

    for _ in 0..3 {
        launch(&store, false);
        assert_eq!(store.load().expect("load should succeed"), initial);
    }
}

#[test]
fn discovered_servers_never_reach_the_store() {
    let store = Arc::new(InMemoryProfileStore::with_records([
        saved("Office", "office.example.org:1"),
        saved("Home", "home.example.org::5905"),
    ]));

    launch(&store, true);
    let after_first = store.load().expect("load should succeed");
    for _ in 0..3 {
        launch(&store, true);
        assert_eq!(store.load().expect("load should succeed"), after_first);
    }

    assert_eq!(after_first.len(), 2);
    assert!(
        after_first
            .iter()
            .all(|record| record.target.host() != "192.168.1.20")
    );
}
