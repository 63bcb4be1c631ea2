#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod strings;

pub use config::{GradientStop, NavUiConfig};
pub use error::{ConfigError, FixtureError};
pub use feed::{Feed, ProgressFeed, StatusFeed, Subscription};
pub use fixtures::{load_route_progress, parse_route_progress};
pub use strings::LocalizedStrings;
