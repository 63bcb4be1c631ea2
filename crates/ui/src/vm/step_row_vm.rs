use nav_core::instruction_filter::{ScriptFilter, sanitize_banner};
use nav_core::model::{ManeuverDirection, ManeuverType, RouteStep};

use super::distance_fmt::format_distance;

/// UI-ready representation of one upcoming step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRowVm {
    pub leg_index: usize,
    pub step_index: usize,
    pub primary_text: String,
    pub secondary_text: Option<String>,
    /// CSS hook such as `maneuver-turn-left`.
    pub maneuver_class: String,
    pub distance_label: String,
    pub separator_hidden: bool,
}

/// Map a route step into a row, sanitizing the banner shown last along it.
#[must_use]
pub fn map_step_row(
    step: &RouteStep,
    leg_index: usize,
    step_index: usize,
    is_last_in_section: bool,
    filter: &ScriptFilter,
) -> StepRowVm {
    let banner = step.last_banner().map(|banner| sanitize_banner(banner, filter));

    let primary_text = banner
        .as_ref()
        .and_then(|banner| banner.primary.text.clone())
        .unwrap_or_else(|| step.instructions.clone());
    let secondary_text = banner
        .as_ref()
        .and_then(|banner| banner.secondary.as_ref())
        .and_then(|secondary| secondary.text.clone());

    let maneuver_type = banner
        .as_ref()
        .and_then(|banner| banner.primary.maneuver_type)
        .or(step.maneuver_type);
    let maneuver_direction = banner
        .as_ref()
        .and_then(|banner| banner.primary.maneuver_direction)
        .or(step.maneuver_direction);

    StepRowVm {
        leg_index,
        step_index,
        primary_text,
        secondary_text,
        maneuver_class: maneuver_class(maneuver_type, maneuver_direction),
        distance_label: format_distance(step.distance),
        separator_hidden: is_last_in_section,
    }
}

fn maneuver_class(kind: Option<ManeuverType>, direction: Option<ManeuverDirection>) -> String {
    match (kind, direction) {
        (Some(kind), Some(direction)) => format!("maneuver-{}-{}", kind.as_str(), direction.as_str()),
        (Some(kind), None) => format!("maneuver-{}", kind.as_str()),
        (None, Some(direction)) => format!("maneuver-{}", direction.as_str()),
        (None, None) => "maneuver".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::model::{Component, VisualInstruction, VisualInstructionBanner};

    #[test]
    fn row_uses_sanitized_banner_text() {
        let banner = VisualInstructionBanner::new(
            300.0,
            VisualInstruction::new(
                Some("中山路 / Zhongshan Rd".to_owned()),
                vec![
                    Component::text("中山路"),
                    Component::text("/"),
                    Component::text("Zhongshan Rd"),
                ],
            )
            .with_maneuver(ManeuverType::Turn, Some(ManeuverDirection::Left)),
        )
        .with_secondary(VisualInstruction::new(
            Some("toward Bund".to_owned()),
            vec![Component::text("toward Bund")],
        ));
        let step = RouteStep::new("Turn left", 1_340.0).with_banner(banner);

        let row = map_step_row(&step, 0, 3, false, &ScriptFilter::default());
        assert_eq!(row.primary_text, "Zhongshan Rd");
        assert_eq!(row.secondary_text.as_deref(), Some("toward Bund"));
        assert_eq!(row.maneuver_class, "maneuver-turn-left");
        assert_eq!(row.distance_label, "1.3 km");
        assert!(!row.separator_hidden);
    }

    #[test]
    fn row_without_banner_falls_back_to_step_text() {
        let mut step = RouteStep::new("Head north", 40.0);
        step.maneuver_type = Some(ManeuverType::Depart);
        let row = map_step_row(&step, 1, 0, true, &ScriptFilter::default());
        assert_eq!(row.primary_text, "Head north");
        assert_eq!(row.secondary_text, None);
        assert_eq!(row.maneuver_class, "maneuver-depart");
        assert!(row.separator_hidden);
    }
}
