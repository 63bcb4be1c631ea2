/// Version of the navigation UI layer, reported alongside engine diagnostics.
pub const NAVIGATION_UI_VERSION: &str = env!("CARGO_PKG_VERSION");

