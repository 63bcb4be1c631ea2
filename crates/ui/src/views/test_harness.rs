use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use nav_core::model::{
    Component as InstructionComponent, ManeuverDirection, ManeuverType, NavigationStatus,
    RoadName, Route, RouteLeg, RouteProgress, RouteStep, VisualInstruction,
    VisualInstructionBanner, Waypoint,
};
use services::{NavUiConfig, ProgressFeed, StatusFeed};

use crate::context::{UiApp, build_app_context};
use crate::views::{CurrentRoadBanner, RouteLineStyleView, StepListView};

#[derive(Clone)]
struct TestApp {
    config: Arc<NavUiConfig>,
    progress_feed: ProgressFeed,
    status_feed: StatusFeed,
    progress: RouteProgress,
    status: NavigationStatus,
}

impl UiApp for TestApp {
    fn config(&self) -> Arc<NavUiConfig> {
        Arc::clone(&self.config)
    }

    fn progress_feed(&self) -> ProgressFeed {
        self.progress_feed.clone()
    }

    fn status_feed(&self) -> StatusFeed {
        self.status_feed.clone()
    }

    fn current_progress(&self) -> RouteProgress {
        self.progress.clone()
    }

    fn current_status(&self) -> NavigationStatus {
        self.status.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Steps,
    Road,
    RouteLine,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Steps => rsx! { StepListView {} },
        ViewKind::Road => rsx! { CurrentRoadBanner {} },
        ViewKind::RouteLine => rsx! { RouteLineStyleView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress_feed: ProgressFeed,
    pub status_feed: StatusFeed,
    pub progress: RouteProgress,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn turn_banner() -> VisualInstructionBanner {
    VisualInstructionBanner::new(
        540.0,
        VisualInstruction::new(
            Some("中山路 / Zhongshan Rd".to_owned()),
            vec![
                InstructionComponent::text("中山路"),
                InstructionComponent::text("/"),
                InstructionComponent::text("Zhongshan Rd"),
            ],
        )
        .with_maneuver(ManeuverType::Turn, Some(ManeuverDirection::Left)),
    )
}

/// Hotel → Museum → Pier → Ferry.
pub fn sample_route() -> Route {
    Route::new(vec![
        RouteLeg::new(
            "Zhongshan Rd, Nanjing Rd",
            vec![
                RouteStep::new("Head east", 220.0),
                RouteStep::new("Turn left", 540.0).with_banner(turn_banner()),
                RouteStep::new("Continue onto Nanjing Rd", 1_300.0),
                RouteStep::new("Arrive at Museum", 0.0),
            ],
        )
        .with_waypoints(Some(Waypoint::named("Hotel")), Some(Waypoint::named("Museum"))),
        RouteLeg::new(
            "Bund Ave",
            vec![
                RouteStep::new("Head south on Bund Ave", 400.0),
                RouteStep::new("Arrive at Pier", 0.0),
            ],
        )
        .with_waypoints(Some(Waypoint::named("Museum")), Some(Waypoint::named("Pier"))),
        RouteLeg::new(
            "Riverside Dr, Quay St",
            vec![
                RouteStep::new("Head west on Riverside Dr", 900.0),
                RouteStep::new("Turn right onto Quay St", 150.0),
                RouteStep::new("Arrive at Ferry", 0.0),
            ],
        )
        .with_waypoints(Some(Waypoint::named("Pier")), Some(Waypoint::named("Ferry"))),
    ])
}

pub fn sample_status() -> NavigationStatus {
    NavigationStatus::new(vec![
        RoadName::new("Zhongshan Rd", "en"),
        RoadName::delimiter(),
        RoadName::new("中山路", "zh"),
    ])
}

pub fn setup_view_harness(view: ViewKind, config: NavUiConfig) -> ViewHarness {
    let progress = RouteProgress::new(sample_route(), 0, 0);
    let progress_feed = ProgressFeed::new("progress");
    let status_feed = StatusFeed::new("status");

    let app = Arc::new(TestApp {
        config: Arc::new(config),
        progress_feed: progress_feed.clone(),
        status_feed: status_feed.clone(),
        progress: progress.clone(),
        status: sample_status(),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        progress_feed,
        status_feed,
        progress,
    }
}
