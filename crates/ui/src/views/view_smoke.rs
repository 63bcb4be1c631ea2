use nav_core::model::{NavigationStatus, RoadName};
use services::NavUiConfig;

use crate::views::test_harness::{ViewKind, setup_view_harness};
use crate::vm::SECTION_HEADER_HEIGHT;

#[tokio::test(flavor = "current_thread")]
async fn step_list_renders_sanitized_rows_and_leg_headers() {
    let mut harness = setup_view_harness(ViewKind::Steps, NavUiConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Zhongshan Rd"), "{html}");
    assert!(!html.contains("中山路"), "{html}");
    assert!(html.contains("Continue onto Nanjing Rd"));
    assert!(!html.contains("Arrive at Museum"));
    assert!(html.contains("Museum and Pier"));
    assert!(html.contains("Ferry, via Riverside Dr and Quay St"));
    assert!(html.contains("maneuver-turn-left"));
    assert!(html.contains("540 m"));
}

#[tokio::test(flavor = "current_thread")]
async fn later_leg_headers_are_sized_and_current_leg_has_none() {
    let mut harness = setup_view_harness(ViewKind::Steps, NavUiConfig::default());
    harness.rebuild();
    let html = harness.render();

    let sized = format!("height: {SECTION_HEADER_HEIGHT}px");
    assert_eq!(html.matches(sized.as_str()).count(), 2, "{html}");
    assert_eq!(html.matches("step-section-header").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn step_list_follows_published_progress() {
    let mut harness = setup_view_harness(ViewKind::Steps, NavUiConfig::default());
    harness.rebuild();
    assert!(harness.render().contains("Zhongshan Rd"));

    let advanced = harness.progress.at(1, 0);
    assert_eq!(harness.progress_feed.publish(&advanced), 1);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("Zhongshan Rd"), "{html}");
    assert!(!html.contains("Head south on Bund Ave"), "{html}");
    assert!(html.contains("Turn right onto Quay St"));
}

#[tokio::test(flavor = "current_thread")]
async fn unmounting_releases_feed_subscriptions() {
    let mut harness = setup_view_harness(ViewKind::Steps, NavUiConfig::default());
    harness.rebuild();
    assert_eq!(harness.progress_feed.subscriber_count(), 1);

    let feed = harness.progress_feed.clone();
    drop(harness);
    assert_eq!(feed.subscriber_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn road_banner_uses_configured_locale() {
    let config = NavUiConfig {
        locale: "zh".parse().expect("locale"),
        ..NavUiConfig::default()
    };
    let mut harness = setup_view_harness(ViewKind::Road, config);
    harness.rebuild();
    assert!(harness.render().contains("中山路"));
}

#[tokio::test(flavor = "current_thread")]
async fn road_banner_follows_status_feed() {
    let mut harness = setup_view_harness(ViewKind::Road, NavUiConfig::default());
    harness.rebuild();
    assert!(harness.render().contains("Zhongshan Rd"));

    harness
        .status_feed
        .publish(&NavigationStatus::new(vec![RoadName::new("Bund Ave", "en")]));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Bund Ave"), "{html}");
    assert!(!html.contains("Zhongshan Rd"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn route_line_page_renders_expressions() {
    let mut harness = setup_view_harness(ViewKind::RouteLine, NavUiConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("interpolate"));
    assert!(html.contains("zoom"));
    assert!(html.contains("line-progress"));
    assert!(html.contains("rgba(47, 122, 248, 1)"), "{html}");
}
