//! Discovery-driven registry integration tests.

use super::helpers::{AnnouncementSource, EventCounter, registry};
use rstest::rstest;
use vnc_registry::server_profile::DefaultServerRegistry;

#[rstest]
fn announcements_with_the_same_name_get_distinct_profiles(registry: DefaultServerRegistry) {
    let source = AnnouncementSource::new(registry.clone());

    let first = source.announce("Studio Mac", "10.0.0.5:0");
    let second = source.announce("Studio Mac", "10.0.0.6:0");

    assert_eq!(first.name().as_str(), "Studio Mac");
    assert_eq!(second.name().as_str(), "Studio Mac_1");
    assert_eq!(
        registry
            .find_by_name("Studio Mac_1")
            .expect("second announcement registered")
            .target()
            .host(),
        "10.0.0.6"
    );
}

#[rstest]
fn withdrawal_removes_only_the_announced_profile(registry: DefaultServerRegistry) {
    let saved = registry.create("Render Node").expect("create should succeed");
    let source = AnnouncementSource::new(registry.clone());
    source.announce("Render Node", "render.local:1");
    let events = EventCounter::attach(&registry);

    assert!(source.withdraw("Render Node_1"));
    assert!(!source.withdraw("Render Node_1"));

    let remaining = registry
        .find_by_name("Render Node")
        .expect("saved profile remains");
    assert_eq!(remaining.id(), saved.id());
    assert_eq!(registry.len(), 1);
    assert_eq!(events.count(), 1);
}

#[rstest]
fn listeners_see_every_structural_change(registry: DefaultServerRegistry) {
    let events = EventCounter::attach(&registry);
    let source = AnnouncementSource::new(registry.clone());

    source.announce("Alpha", "alpha.local");
    source.announce("Bravo", "bravo.local");
    assert!(source.withdraw("Alpha"));
    assert!(registry.remove_by_name("Missing").is_none());

    assert_eq!(events.count(), 3);
    assert_eq!(
        registry
            .find_at_index(0)
            .expect("one profile remains")
            .name()
            .as_str(),
        "Bravo"
    );
}
