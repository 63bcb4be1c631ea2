//! Sectioned list of the steps still ahead on the route.
//!
//! The first section holds the remaining steps of the current leg; every
//! later leg gets a section of its own. The arrival step of a leg carries no
//! instruction and is never listed.

use nav_core::instruction_filter::ScriptFilter;
use nav_core::model::{RouteLeg, RouteProgress, RouteStep};
use services::LocalizedStrings;
use services::strings::{
    LEG_MAJOR_WAYS_FORMAT, WAYPOINT_DESTINATION_VIA_WAYPOINTS_FORMAT,
    WAYPOINT_SOURCE_DESTINATION_FORMAT,
};

use super::cell::{CellFactory, RowKind};
use super::step_row_vm::{StepRowVm, map_step_row};

/// Height of every step row, in points.
pub const ROW_HEIGHT: f32 = 96.0;
/// Height of a leg header, in points. The current leg has no header.
pub const SECTION_HEADER_HEIGHT: f32 = 28.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildOutcome {
    Unchanged,
    /// Sections were recomputed; the surface must reload.
    Changed,
}

impl RebuildOutcome {
    #[must_use]
    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }
}

/// A tapped row resolved to a step on the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSelection {
    pub leg_index: usize,
    pub step_index: usize,
}

/// Steps of one leg shown under a single header.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSection {
    leg_index: usize,
    steps: Vec<RouteStep>,
}

impl StepSection {
    #[must_use]
    pub fn leg_index(&self) -> usize {
        self.leg_index
    }

    #[must_use]
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

pub struct StepListVm {
    progress: RouteProgress,
    sections: Vec<StepSection>,
    /// `(leg_index, step_index)` the sections were built for; `None` until the first rebuild.
    synced: Option<(usize, usize)>,
    filter: ScriptFilter,
}

impl StepListVm {
    /// Creates a stale view-model; call [`Self::rebuild`] before drawing.
    #[must_use]
    pub fn new(progress: RouteProgress, filter: ScriptFilter) -> Self {
        Self {
            progress,
            sections: Vec::new(),
            synced: None,
            filter,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &RouteProgress {
        &self.progress
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.synced != Some(self.progress.position())
    }

    /// Replaces the held progress with a fresh snapshot and rebuilds if it moved.
    pub fn update_progress(&mut self, progress: RouteProgress) -> RebuildOutcome {
        self.progress = progress;
        self.rebuild()
    }

    /// Recomputes the sections unless they already match the current position.
    pub fn rebuild(&mut self) -> RebuildOutcome {
        let position = self.progress.position();
        if self.synced == Some(position) {
            return RebuildOutcome::Unchanged;
        }

        let (leg_index, step_index) = position;
        self.sections.clear();

        if let Some(leg) = self.progress.current_leg() {
            let remaining: Vec<RouteStep> = leg
                .displayable_steps()
                .iter()
                .skip(step_index.saturating_add(1))
                .cloned()
                .collect();
            if !remaining.is_empty() {
                self.sections.push(StepSection {
                    leg_index,
                    steps: remaining,
                });
            }
        }

        if !self.progress.is_final_leg() {
            let upcoming: Vec<StepSection> = self
                .progress
                .upcoming_legs()
                .map(|(index, leg)| StepSection {
                    leg_index: index,
                    steps: leg.displayable_steps().to_vec(),
                })
                .collect();
            self.sections.extend(upcoming);
        }

        self.synced = Some(position);
        log::debug!(
            "step list rebuilt for leg {leg_index} step {step_index}: {} sections",
            self.sections.len()
        );
        RebuildOutcome::Changed
    }

    #[must_use]
    pub fn sections(&self) -> &[StepSection] {
        &self.sections
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, StepSection::len)
    }

    #[must_use]
    pub fn step_at(&self, section: usize, row: usize) -> Option<&RouteStep> {
        self.sections.get(section)?.steps.get(row)
    }

    /// True when `section` lists the remainder of the leg being travelled.
    #[must_use]
    pub fn is_current_leg_section(&self, section: usize) -> bool {
        self.sections
            .get(section)
            .is_some_and(|s| s.leg_index == self.progress.leg_index)
    }

    /// Maps a tapped row back to its step on the route.
    ///
    /// Rows of the current leg start after the current step, so row `n`
    /// is step `n + step_index + 1`; rows of later legs are the step index
    /// itself. Rows that resolve outside the route are ignored.
    #[must_use]
    pub fn resolve_step(&self, section: usize, row: usize) -> Option<StepSelection> {
        let entry = self.sections.get(section)?;
        if row >= entry.len() {
            return None;
        }

        let leg_index = entry.leg_index;
        let step_index = self.absolute_step_index(entry, row);

        self.progress
            .route
            .contains_step(leg_index, step_index)
            .then_some(StepSelection {
                leg_index,
                step_index,
            })
    }

    fn absolute_step_index(&self, entry: &StepSection, row: usize) -> usize {
        if entry.leg_index == self.progress.leg_index {
            row + self.progress.step_index + 1
        } else {
            row
        }
    }

    /// Resolves a tap, logging ignored selections.
    #[must_use]
    pub fn select(&self, section: usize, row: usize) -> Option<StepSelection> {
        let selection = self.resolve_step(section, row);
        if selection.is_none() {
            log::debug!("ignoring tap on section {section} row {row}");
        }
        selection
    }

    /// Header for a later leg; `None` for the current leg.
    #[must_use]
    pub fn title_for_header(&self, section: usize, strings: &LocalizedStrings) -> Option<String> {
        if self.is_current_leg_section(section) {
            return None;
        }
        let leg = self.progress.route.leg(self.sections.get(section)?.leg_index)?;
        Some(leg_title(leg, strings))
    }

    #[must_use]
    pub fn header_height(&self, section: usize) -> f32 {
        if self.is_current_leg_section(section) {
            0.0
        } else {
            SECTION_HEADER_HEIGHT
        }
    }

    #[must_use]
    pub fn row(&self, section: usize, row: usize) -> Option<StepRowVm> {
        let entry = self.sections.get(section)?;
        let step = entry.steps.get(row)?;
        let step_index = self.absolute_step_index(entry, row);
        let is_last = row + 1 == entry.len();
        Some(map_step_row(step, entry.leg_index, step_index, is_last, &self.filter))
    }

    /// Hands the row at `(section, row)` to `factory` as a typed cell.
    pub fn build_cell<F: CellFactory>(&self, section: usize, row: usize, factory: &F) -> Option<F::Cell> {
        let vm = self.row(section, row)?;
        let kind = if vm.separator_hidden {
            RowKind::SectionEnd
        } else {
            RowKind::Step
        };
        Some(factory.make_cell(kind, &vm))
    }
}

fn leg_title(leg: &RouteLeg, strings: &LocalizedStrings) -> String {
    let source = leg.source.as_ref().and_then(|wp| wp.non_empty_name());
    let destination = leg.destination.as_ref().and_then(|wp| wp.non_empty_name());
    let major_ways: Vec<&str> = leg.major_ways().collect();

    match (source, destination) {
        (_, Some(destination)) if major_ways.len() > 1 => {
            let summary = strings.format(LEG_MAJOR_WAYS_FORMAT, &[major_ways[0], major_ways[1]]);
            strings.format(
                WAYPOINT_DESTINATION_VIA_WAYPOINTS_FORMAT,
                &[destination, summary.as_str()],
            )
        }
        (Some(source), Some(destination)) => {
            strings.format(WAYPOINT_SOURCE_DESTINATION_FORMAT, &[source, destination])
        }
        _ => leg.name.clone(),
    }
}
