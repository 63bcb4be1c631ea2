use std::sync::Arc;

use nav_core::model::{NavigationStatus, RouteProgress};
use services::{LocalizedStrings, NavUiConfig, ProgressFeed, StatusFeed};

/// What the navigation host provides to the UI.
pub trait UiApp: Send + Sync {
    fn config(&self) -> Arc<NavUiConfig>;

    fn progress_feed(&self) -> ProgressFeed;
    fn status_feed(&self) -> StatusFeed;

    /// Latest progress snapshot, used to seed a freshly mounted view.
    fn current_progress(&self) -> RouteProgress;
    fn current_status(&self) -> NavigationStatus;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    config: Arc<NavUiConfig>,
    strings: Arc<LocalizedStrings>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let config = app.config();
        let strings = Arc::new(config.localized_strings());
        Self {
            app: Arc::clone(app),
            config,
            strings,
        }
    }

    #[must_use]
    pub fn config(&self) -> Arc<NavUiConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn strings(&self) -> Arc<LocalizedStrings> {
        Arc::clone(&self.strings)
    }

    #[must_use]
    pub fn progress_feed(&self) -> ProgressFeed {
        self.app.progress_feed()
    }

    #[must_use]
    pub fn status_feed(&self) -> StatusFeed {
        self.app.status_feed()
    }

    #[must_use]
    pub fn current_progress(&self) -> RouteProgress {
        self.app.current_progress()
    }

    #[must_use]
    pub fn current_status(&self) -> NavigationStatus {
        self.app.current_status()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
