use serde::{Deserialize, Serialize};

use crate::model::instruction::{ManeuverDirection, ManeuverType, VisualInstructionBanner};

//
// ─── WAYPOINT ─────────────────────────────────────────────────────────────────
//

/// A named stop at either end of a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(default)]
    pub name: Option<String>,
}

impl Waypoint {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the name when it is present and not blank.
    #[must_use]
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

//
// ─── STEP ─────────────────────────────────────────────────────────────────────
//

/// One maneuver-level segment of a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Plain-text instruction as delivered by the navigation engine.
    #[serde(default)]
    pub instructions: String,
    /// Length of the step in meters.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub maneuver_type: Option<ManeuverType>,
    #[serde(default)]
    pub maneuver_direction: Option<ManeuverDirection>,
    /// Banners shown while travelling along the step, in display order.
    #[serde(default)]
    pub instructions_displayed_along_step: Vec<VisualInstructionBanner>,
}

impl RouteStep {
    #[must_use]
    pub fn new(instructions: impl Into<String>, distance: f64) -> Self {
        Self {
            instructions: instructions.into(),
            distance,
            maneuver_type: None,
            maneuver_direction: None,
            instructions_displayed_along_step: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_banner(mut self, banner: VisualInstructionBanner) -> Self {
        self.instructions_displayed_along_step.push(banner);
        self
    }

    /// The banner shown last along this step, which describes the upcoming maneuver.
    #[must_use]
    pub fn last_banner(&self) -> Option<&VisualInstructionBanner> {
        self.instructions_displayed_along_step.last()
    }
}

//
// ─── LEG ──────────────────────────────────────────────────────────────────────
//

/// A source-to-waypoint segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Composite name of the major ways, separated by `", "`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: Option<Waypoint>,
    #[serde(default)]
    pub destination: Option<Waypoint>,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<RouteStep>) -> Self {
        Self {
            name: name.into(),
            source: None,
            destination: None,
            steps,
        }
    }

    #[must_use]
    pub fn with_waypoints(mut self, source: Option<Waypoint>, destination: Option<Waypoint>) -> Self {
        self.source = source;
        self.destination = destination;
        self
    }

    /// Steps that carry a displayable instruction: every step except the arrival step.
    #[must_use]
    pub fn displayable_steps(&self) -> &[RouteStep] {
        match self.steps.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// The major ways making up the leg name.
    pub fn major_ways(&self) -> impl Iterator<Item = &str> {
        self.name.split(", ")
    }
}

//
// ─── ROUTE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

impl Route {
    #[must_use]
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }

    #[must_use]
    pub fn leg(&self, leg_index: usize) -> Option<&RouteLeg> {
        self.legs.get(leg_index)
    }

    #[must_use]
    pub fn step(&self, leg_index: usize, step_index: usize) -> Option<&RouteStep> {
        self.leg(leg_index)?.steps.get(step_index)
    }

    /// Returns true when `(leg_index, step_index)` addresses an existing step.
    #[must_use]
    pub fn contains_step(&self, leg_index: usize, step_index: usize) -> bool {
        self.step(leg_index, step_index).is_some()
    }
}
