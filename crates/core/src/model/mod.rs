mod instruction;
mod locale;
mod progress;
mod road;
mod route;

pub use instruction::{
    Component, DrivingSide, ImageRepresentation, ManeuverDirection, ManeuverType,
    ShieldRepresentation, TextRepresentation, VisualInstruction, VisualInstructionBanner,
};
pub use locale::{Locale, LocaleError};
pub use progress::RouteProgress;
pub use road::{NAME_DELIMITER, NavigationStatus, RoadName, RoadShield};
pub use route::{Route, RouteLeg, RouteStep, Waypoint};
