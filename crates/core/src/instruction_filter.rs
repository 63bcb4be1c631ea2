//! Strips glyphs the banner fonts cannot draw from visual instructions.
//!
//! Engine banners for multilingual roads carry the same name in several
//! scripts, separated by a `/` text component. The banner keeps only the
//! components free of excluded scripts.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::model::{Component, NAME_DELIMITER, VisualInstruction, VisualInstructionBanner};

/// Named inclusive range of Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    #[must_use]
    pub fn new(name: impl Into<String>, range: RangeInclusive<u32>) -> Self {
        Self {
            name: name.into(),
            start: *range.start(),
            end: *range.end(),
        }
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        (self.start..=self.end).contains(&u32::from(ch))
    }
}

/// Rules deciding which text components are removed from a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptFilter {
    /// A text component equal to this is dropped.
    pub delimiter: String,
    /// A non-empty text component containing any of these is dropped.
    pub ranges: Vec<ScriptRange>,
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self {
            delimiter: NAME_DELIMITER.to_owned(),
            ranges: default_excluded_ranges(),
        }
    }
}

/// Han ideographs and Tamil.
#[must_use]
pub fn default_excluded_ranges() -> Vec<ScriptRange> {
    vec![
        ScriptRange::new("han-ext-a", 0x3400..=0x4DBF),
        ScriptRange::new("han", 0x4E00..=0x9FFF),
        ScriptRange::new("han-compat", 0xF900..=0xFAFF),
        ScriptRange::new("han-ext-b+", 0x2_0000..=0x2_FA1F),
        ScriptRange::new("tamil", 0x0B80..=0x0BFF),
        ScriptRange::new("tamil-supplement", 0x1_1FC0..=0x1_1FFF),
    ]
}

impl ScriptFilter {
    #[must_use]
    pub fn is_excluded(&self, ch: char) -> bool {
        self.ranges.iter().any(|range| range.contains(ch))
    }

    #[must_use]
    pub fn contains_excluded(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_excluded(ch))
    }

    fn keeps(&self, component: &Component) -> bool {
        let Some(text) = component.as_text() else {
            return true;
        };
        if text == self.delimiter {
            return false;
        }
        text.is_empty() || !self.contains_excluded(text)
    }
}

/// Filters every instruction slot of `banner`.
#[must_use]
pub fn sanitize_banner(
    banner: &VisualInstructionBanner,
    filter: &ScriptFilter,
) -> VisualInstructionBanner {
    VisualInstructionBanner {
        distance_along_step: banner.distance_along_step,
        primary: sanitize_instruction(&banner.primary, filter),
        secondary: banner.secondary.as_ref().map(|i| sanitize_instruction(i, filter)),
        tertiary: banner.tertiary.as_ref().map(|i| sanitize_instruction(i, filter)),
        quaternary: banner.quaternary.as_ref().map(|i| sanitize_instruction(i, filter)),
        driving_side: banner.driving_side,
    }
}

/// Drops excluded text components and re-derives the summary text.
///
/// The summary becomes the first surviving component when that component is
/// text; otherwise the original summary is kept.
#[must_use]
pub fn sanitize_instruction(
    instruction: &VisualInstruction,
    filter: &ScriptFilter,
) -> VisualInstruction {
    let components: Vec<Component> = instruction
        .components
        .iter()
        .filter(|component| filter.keeps(component))
        .cloned()
        .collect();

    let text = components
        .first()
        .and_then(Component::as_text)
        .map(str::to_owned)
        .or_else(|| instruction.text.clone());

    VisualInstruction {
        text,
        maneuver_type: instruction.maneuver_type,
        maneuver_direction: instruction.maneuver_direction,
        components,
    }
}
