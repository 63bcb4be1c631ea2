use std::path::PathBuf;
use std::sync::Arc;

use nav_core::instruction_filter::sanitize_banner;
use parking_lot::Mutex;
use services::{NavUiConfig, ProgressFeed, load_route_progress};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/three_legs.json")
}

#[test]
fn fixture_progress_flows_through_feed_until_unsubscribed() {
    let progress = load_route_progress(&fixture(), 0, 0).unwrap();
    assert_eq!(progress.route.legs.len(), 3);

    let feed = ProgressFeed::new("progress");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = feed.subscribe(move |p| sink.lock().push(p.position()));

    feed.publish(&progress.at(0, 1));
    feed.publish(&progress.at(1, 0));
    subscription.unsubscribe();
    feed.publish(&progress.at(2, 0));

    assert_eq!(*seen.lock(), vec![(0, 1), (1, 0)]);
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn fixture_banner_sanitizes_with_default_config() {
    let progress = load_route_progress(&fixture(), 0, 0).unwrap();
    let config = NavUiConfig::default();
    let banner = progress
        .route
        .step(0, 1)
        .and_then(|step| step.last_banner())
        .expect("fixture step 1 carries a banner");

    let clean = sanitize_banner(banner, &config.sanitizer);
    assert_eq!(clean.primary.text.as_deref(), Some("Zhongshan Rd"));
    assert_eq!(clean.primary.components.len(), 1);
}
