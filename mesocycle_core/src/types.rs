//! Core domain types for the mesocycle planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Planner inputs (raw and normalized) and recommended defaults
//! - Week/day calendar structure and week objectives
//! - Workout sessions, blocks and items
//! - Strength profiles, day types and endurance workout types

use serde::{Deserialize, Serialize};

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum from a
/// single label table so the three never disagree.
macro_rules! labeled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable label used in exports and on the command line
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!(
                    "Unknown {}: '{}' (expected one of: {})",
                    stringify!($name),
                    s,
                    [$($label),+].join(", ")
                ))
            }
        }
    };
}

pub(crate) use labeled_enum;

// ============================================================================
// Planner Inputs
// ============================================================================

/// Training focus of the mesocycle
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Strength,
    Endurance,
    Mixed,
}

labeled_enum!(Focus {
    Strength => "strength",
    Endurance => "endurance",
    Mixed => "mixed",
});

/// Self-reported training level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

labeled_enum!(Level {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

/// Strength sub-profile selecting the exercise catalog
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthProfile {
    Bodybuilding,
    Powerlifting,
    #[default]
    Balanced,
    EnduranceSupport,
}

labeled_enum!(StrengthProfile {
    Bodybuilding => "bodybuilding",
    Powerlifting => "powerlifting",
    Balanced => "balanced",
    EnduranceSupport => "endurance-support",
});

impl StrengthProfile {
    /// Human readable name used in workout titles
    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthProfile::Bodybuilding => "Bodybuilding",
            StrengthProfile::Powerlifting => "Powerlifting",
            StrengthProfile::Balanced => "Balanced Strength",
            StrengthProfile::EnduranceSupport => "Endurance Support",
        }
    }
}

/// Un-normalized user input, as typed into a form or passed on the command line
///
/// Numeric fields are floats so that malformed values (NaN, infinities,
/// fractions) can reach `normalize_inputs`, which coerces them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawInputs {
    pub focus: Focus,
    pub mixed_bias: Option<f64>,
    pub mesocycle_weeks: f64,
    pub level: Level,
    pub sessions_per_week: f64,
    pub strength_profile: Option<StrengthProfile>,
}

/// Normalized planner configuration
///
/// Invariant: `mixed_bias` is `Some` iff `focus == Focus::Mixed`. Only
/// `normalize_inputs` constructs values that the generator relies on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerInputs {
    pub focus: Focus,
    pub mixed_bias: Option<u8>,
    pub mesocycle_weeks: u32,
    pub level: Level,
    pub sessions_per_week: u32,
    pub auto_deload: bool,
    pub strength_profile: StrengthProfile,
}

impl From<&PlannerInputs> for RawInputs {
    fn from(inputs: &PlannerInputs) -> Self {
        RawInputs {
            focus: inputs.focus,
            mixed_bias: inputs.mixed_bias.map(f64::from),
            mesocycle_weeks: f64::from(inputs.mesocycle_weeks),
            level: inputs.level,
            sessions_per_week: f64::from(inputs.sessions_per_week),
            strength_profile: Some(inputs.strength_profile),
        }
    }
}

/// Level/focus-driven starting values for a new plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendedDefaults {
    pub mesocycle_weeks: u32,
    pub sessions_per_week: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_bias: Option<u8>,
}

// ============================================================================
// Calendar Types
// ============================================================================

/// Display category of a calendar day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Strength,
    Endurance,
    Mixed,
    Rest,
    Recovery,
    Deload,
}

labeled_enum!(SessionType {
    Strength => "strength",
    Endurance => "endurance",
    Mixed => "mixed",
    Rest => "rest",
    Recovery => "recovery",
    Deload => "deload",
});

/// Periodization objective of a week
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeekObjective {
    Build,
    Push,
    Deload,
    Taper,
}

labeled_enum!(WeekObjective {
    Build => "build",
    Push => "push",
    Deload => "deload",
    Taper => "taper",
});

impl WeekObjective {
    /// Deload and taper weeks are both reduced-load weeks
    pub fn is_reduced_load(&self) -> bool {
        matches!(self, WeekObjective::Deload | WeekObjective::Taper)
    }
}

/// Underlying training discipline of a session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Strength,
    Endurance,
}

labeled_enum!(Discipline {
    Strength => "strength",
    Endurance => "endurance",
});

/// Weekday labels, Monday first
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One calendar day of a week
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub week_index: u32,
    /// 1 = Monday .. 7 = Sunday
    pub day_index: u32,
    pub date_label: String,
    pub session_type: SessionType,
    /// 1..=5
    pub effort: u8,
    pub is_training_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutSession>,
}

/// Per-week aggregate counts
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct WeekSummary {
    pub strength_sessions: u32,
    pub endurance_sessions: u32,
    pub mixed_sessions: u32,
    pub deload_sessions: u32,
    pub rest_days: u32,
    /// Mean effort over all seven days, rounded to one decimal
    pub avg_effort: f64,
}

/// One week of the mesocycle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    pub week_index: u32,
    pub objective: WeekObjective,
    pub is_deload_week: bool,
    pub target_session_count: u32,
    pub planned_session_count: u32,
    pub days: Vec<DayPlan>,
    pub summary: WeekSummary,
}

impl WeekPlan {
    /// Training days that carry a workout, in calendar order
    pub fn workout_days(&self) -> impl Iterator<Item = (&DayPlan, &WorkoutSession)> + '_ {
        self.days
            .iter()
            .filter_map(|day| day.workout.as_ref().map(|workout| (day, workout)))
    }
}

/// A fully generated mesocycle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramOutput {
    pub inputs: PlannerInputs,
    pub weeks: Vec<WeekPlan>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Strength day type; the "2" variants rotate exercise selection forward
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayType {
    A,
    B,
    C,
    A2,
    B2,
    C2,
}

labeled_enum!(DayType {
    A => "A",
    B => "B",
    C => "C",
    A2 => "A2",
    B2 => "B2",
    C2 => "C2",
});

impl DayType {
    /// Rotation order within a week
    pub const ROTATION: [DayType; 6] = [
        DayType::A,
        DayType::B,
        DayType::C,
        DayType::A2,
        DayType::B2,
        DayType::C2,
    ];

    /// The template day this type draws its exercises from
    pub fn base(&self) -> BaseDay {
        match self {
            DayType::A | DayType::A2 => BaseDay::A,
            DayType::B | DayType::B2 => BaseDay::B,
            DayType::C | DayType::C2 => BaseDay::C,
        }
    }

    /// Offset added to the weekly rotation index
    pub fn variant_offset(&self) -> usize {
        match self {
            DayType::A | DayType::B | DayType::C => 0,
            DayType::A2 | DayType::B2 | DayType::C2 => 1,
        }
    }
}

/// Template day shared by a day type and its "2" variant
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BaseDay {
    A,
    B,
    C,
}

/// Endurance workout subtype
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EnduranceWorkoutType {
    Easy,
    LongEasy,
    Tempo,
    Interval,
}

labeled_enum!(EnduranceWorkoutType {
    Easy => "easy",
    LongEasy => "long-easy",
    Tempo => "tempo",
    Interval => "interval",
});

impl EnduranceWorkoutType {
    /// Tempo and interval sessions count as hard cardio
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            EnduranceWorkoutType::Tempo | EnduranceWorkoutType::Interval
        )
    }

    /// Heart-rate zones for easy work, perceived exertion for hard work
    pub fn target_mode(&self) -> TargetMode {
        if self.is_hard() {
            TargetMode::Rpe
        } else {
            TargetMode::Zone
        }
    }
}

/// How endurance intensity is prescribed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    Zone,
    Rpe,
}

labeled_enum!(TargetMode {
    Zone => "zone",
    Rpe => "rpe",
});

/// Flag set on strength items reduced because of nearby hard cardio
pub const COLLISION_FLAG: &str = "cardio-collision-adjusted";

/// A single exercise line within a block
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutItem {
    pub slot: String,
    pub name: String,
    pub prescription: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

impl WorkoutItem {
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// A titled group of items (warm-up, main lifts, ...)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutBlock {
    pub title: String,
    pub items: Vec<WorkoutItem>,
}

/// Kind-specific session attributes
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutDetail {
    Strength {
        day_type: DayType,
        strength_profile: StrengthProfile,
    },
    Endurance {
        workout_type: EnduranceWorkoutType,
        target_mode: TargetMode,
        target_value: String,
    },
}

/// A prescribed workout for one training day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSession {
    pub title: String,
    pub objective: WeekObjective,
    pub detail: WorkoutDetail,
    pub blocks: Vec<WorkoutBlock>,
}

impl WorkoutSession {
    pub fn kind(&self) -> Discipline {
        match self.detail {
            WorkoutDetail::Strength { .. } => Discipline::Strength,
            WorkoutDetail::Endurance { .. } => Discipline::Endurance,
        }
    }

    /// Workout subtype label ("strength" for strength sessions)
    pub fn workout_type(&self) -> &'static str {
        match &self.detail {
            WorkoutDetail::Strength { .. } => "strength",
            WorkoutDetail::Endurance { workout_type, .. } => workout_type.as_str(),
        }
    }

    pub fn day_type(&self) -> Option<DayType> {
        match self.detail {
            WorkoutDetail::Strength { day_type, .. } => Some(day_type),
            WorkoutDetail::Endurance { .. } => None,
        }
    }

    pub fn strength_profile(&self) -> Option<StrengthProfile> {
        match self.detail {
            WorkoutDetail::Strength {
                strength_profile, ..
            } => Some(strength_profile),
            WorkoutDetail::Endurance { .. } => None,
        }
    }

    pub fn target_mode(&self) -> Option<TargetMode> {
        match self.detail {
            WorkoutDetail::Strength { .. } => None,
            WorkoutDetail::Endurance { target_mode, .. } => Some(target_mode),
        }
    }

    pub fn target_value(&self) -> Option<&str> {
        match &self.detail {
            WorkoutDetail::Strength { .. } => None,
            WorkoutDetail::Endurance { target_value, .. } => Some(target_value.as_str()),
        }
    }

    /// The headline item: first item of the main block, falling back to the
    /// first item of the session
    pub fn main_item(&self) -> Option<&WorkoutItem> {
        self.blocks
            .get(1)
            .or_else(|| self.blocks.first())
            .and_then(|block| block.items.first())
    }

    /// All items across blocks, paired with their block
    pub fn items(&self) -> impl Iterator<Item = (&WorkoutBlock, &WorkoutItem)> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| block.items.iter().map(move |item| (block, item)))
    }

    /// Number of items carrying the cardio-collision flag
    pub fn collision_adjustments(&self) -> usize {
        self.items()
            .filter(|(_, item)| item.has_flag(COLLISION_FLAG))
            .count()
    }
}
