mod feed_hook;
mod road;
mod steps;
mod style;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use feed_hook::use_feed;
pub use road::CurrentRoadBanner;
pub use steps::StepListView;
pub use style::RouteLineStyleView;
