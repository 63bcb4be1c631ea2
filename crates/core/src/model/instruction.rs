use serde::{Deserialize, Serialize};
use url::Url;

//
// ─── MANEUVER ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverType {
    Depart,
    Turn,
    Continue,
    PassNameChange,
    Merge,
    TakeOnRamp,
    TakeOffRamp,
    ReachFork,
    ReachEnd,
    UseLane,
    TakeRoundabout,
    TakeRotary,
    TurnAtRoundabout,
    ExitRoundabout,
    ExitRotary,
    Heed,
    Arrive,
}

impl ManeuverType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Depart => "depart",
            Self::Turn => "turn",
            Self::Continue => "continue",
            Self::PassNameChange => "new-name",
            Self::Merge => "merge",
            Self::TakeOnRamp => "on-ramp",
            Self::TakeOffRamp => "off-ramp",
            Self::ReachFork => "fork",
            Self::ReachEnd => "end-of-road",
            Self::UseLane => "use-lane",
            Self::TakeRoundabout => "roundabout",
            Self::TakeRotary => "rotary",
            Self::TurnAtRoundabout => "roundabout-turn",
            Self::ExitRoundabout => "exit-roundabout",
            Self::ExitRotary => "exit-rotary",
            Self::Heed => "notification",
            Self::Arrive => "arrive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverDirection {
    SharpRight,
    Right,
    SlightRight,
    StraightAhead,
    SlightLeft,
    Left,
    SharpLeft,
    UTurn,
}

impl ManeuverDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SharpRight => "sharp-right",
            Self::Right => "right",
            Self::SlightRight => "slight-right",
            Self::StraightAhead => "straight",
            Self::SlightLeft => "slight-left",
            Self::Left => "left",
            Self::SharpLeft => "sharp-left",
            Self::UTurn => "uturn",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingSide {
    Left,
    #[default]
    Right,
}

//
// ─── COMPONENTS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRepresentation {
    pub text: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub abbreviation_priority: Option<i32>,
}

impl TextRepresentation {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            abbreviation: None,
            abbreviation_priority: None,
        }
    }
}

/// Route shield badge served from a sprite endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldRepresentation {
    pub base_url: Url,
    pub name: String,
    pub text_color: String,
    /// Route number drawn on the badge.
    pub text: String,
}

/// Image sources for a shield component. Either, neither, or both may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRepresentation {
    #[serde(default)]
    pub image_base_url: Option<Url>,
    #[serde(default)]
    pub shield: Option<ShieldRepresentation>,
}

impl ImageRepresentation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_base_url.is_none() && self.shield.is_none()
    }
}

/// One typed piece of a visual instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Text {
        text: TextRepresentation,
    },
    Delimiter {
        text: TextRepresentation,
    },
    Image {
        image: ImageRepresentation,
        alternative_text: TextRepresentation,
    },
    Exit {
        text: TextRepresentation,
    },
    ExitCode {
        text: TextRepresentation,
    },
    Lane {
        indications: Vec<String>,
        is_usable: bool,
    },
    GuidanceView {
        #[serde(default)]
        image_url: Option<Url>,
        alternative_text: TextRepresentation,
    },
}

impl Component {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: TextRepresentation::new(text),
        }
    }

    #[must_use]
    pub fn delimiter(text: impl Into<String>) -> Self {
        Self::Delimiter {
            text: TextRepresentation::new(text),
        }
    }

    /// The text of a `Text` component; `None` for every other kind.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text.text.as_str()),
            _ => None,
        }
    }
}

//
// ─── INSTRUCTIONS ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualInstruction {
    /// Plain-text summary of the components.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub maneuver_type: Option<ManeuverType>,
    #[serde(default)]
    pub maneuver_direction: Option<ManeuverDirection>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl VisualInstruction {
    #[must_use]
    pub fn new(text: Option<String>, components: Vec<Component>) -> Self {
        Self {
            text,
            maneuver_type: None,
            maneuver_direction: None,
            components,
        }
    }

    #[must_use]
    pub fn with_maneuver(
        mut self,
        maneuver_type: ManeuverType,
        maneuver_direction: Option<ManeuverDirection>,
    ) -> Self {
        self.maneuver_type = Some(maneuver_type);
        self.maneuver_direction = maneuver_direction;
        self
    }
}

/// Banner with up to four instruction slots.
///
/// `primary` is required: upstream never produces a banner without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualInstructionBanner {
    /// Distance from the end of the step at which the banner appears, in meters.
    pub distance_along_step: f64,
    pub primary: VisualInstruction,
    #[serde(default)]
    pub secondary: Option<VisualInstruction>,
    #[serde(default)]
    pub tertiary: Option<VisualInstruction>,
    #[serde(default)]
    pub quaternary: Option<VisualInstruction>,
    #[serde(default)]
    pub driving_side: DrivingSide,
}

impl VisualInstructionBanner {
    #[must_use]
    pub fn new(distance_along_step: f64, primary: VisualInstruction) -> Self {
        Self {
            distance_along_step,
            primary,
            secondary: None,
            tertiary: None,
            quaternary: None,
            driving_side: DrivingSide::default(),
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: VisualInstruction) -> Self {
        self.secondary = Some(secondary);
        self
    }
}
