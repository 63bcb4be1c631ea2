use serde::{Deserialize, Serialize};

use crate::model::route::{Route, RouteLeg};

/// Snapshot of the user's position along an active route.
///
/// Computed by the navigation engine; presentation code only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    pub route: Route,
    pub leg_index: usize,
    /// Index of the current step within the current leg.
    pub step_index: usize,
}

impl RouteProgress {
    #[must_use]
    pub fn new(route: Route, leg_index: usize, step_index: usize) -> Self {
        Self {
            route,
            leg_index,
            step_index,
        }
    }

    /// Same route, different position.
    #[must_use]
    pub fn at(&self, leg_index: usize, step_index: usize) -> Self {
        Self::new(self.route.clone(), leg_index, step_index)
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.leg_index, self.step_index)
    }

    #[must_use]
    pub fn current_leg(&self) -> Option<&RouteLeg> {
        self.route.leg(self.leg_index)
    }

    /// True when no legs follow the current one.
    #[must_use]
    pub fn is_final_leg(&self) -> bool {
        self.leg_index.saturating_add(1) >= self.route.legs.len()
    }

    /// Legs after the current one, paired with their route index.
    pub fn upcoming_legs(&self) -> impl Iterator<Item = (usize, &RouteLeg)> {
        self.route
            .legs
            .iter()
            .enumerate()
            .skip(self.leg_index.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::RouteStep;

    fn route(legs: usize) -> Route {
        Route::new(
            (0..legs)
                .map(|i| RouteLeg::new(format!("leg {i}"), vec![RouteStep::new("go", 10.0)]))
                .collect(),
        )
    }

    #[test]
    fn final_leg_is_the_last_leg() {
        assert!(!RouteProgress::new(route(3), 1, 0).is_final_leg());
        assert!(RouteProgress::new(route(3), 2, 0).is_final_leg());
        assert!(RouteProgress::new(route(1), 0, 0).is_final_leg());
    }

    #[test]
    fn out_of_range_leg_index_is_final() {
        let progress = RouteProgress::new(route(2), usize::MAX, 0);
        assert!(progress.is_final_leg());
        assert_eq!(progress.upcoming_legs().count(), 0);
    }

    #[test]
    fn upcoming_legs_keep_route_indices() {
        let progress = RouteProgress::new(route(4), 1, 0);
        let indices: Vec<_> = progress.upcoming_legs().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![2, 3]);
    }
}
