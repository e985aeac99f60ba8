//! Strength prescriptions: the objective/role table, the cardio-collision
//! reduction and the display-string parser used by exports.
//!
//! Prescriptions render as `"<sets>x<reps> @ <rir> RIR"`, e.g. `4x6-8 @ 2 RIR`.

use crate::WeekObjective;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a slot is a main lift (S1-S3) or accessory work (S4-S6)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Main,
    Accessory,
}

impl SlotRole {
    /// Role of a zero-based slot index
    pub fn for_slot(slot: usize) -> Self {
        if slot < 3 {
            SlotRole::Main
        } else {
            SlotRole::Accessory
        }
    }

    /// Lowest set count a collision reduction may leave
    fn min_sets(&self) -> u32 {
        match self {
            SlotRole::Main => 2,
            SlotRole::Accessory => 1,
        }
    }
}

/// A sets x reps @ RIR prescription
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: &'static str,
    pub rir: u32,
}

impl Prescription {
    /// Table-driven prescription for a week objective and slot role
    pub fn for_slot(objective: WeekObjective, role: SlotRole) -> Self {
        let (sets, reps, rir) = match (objective, role) {
            (WeekObjective::Build, SlotRole::Main) => (4, "6-8", 2),
            (WeekObjective::Build, SlotRole::Accessory) => (3, "10-12", 2),
            (WeekObjective::Push, SlotRole::Main) => (4, "4-6", 1),
            (WeekObjective::Push, SlotRole::Accessory) => (3, "8-10", 1),
            (WeekObjective::Deload, SlotRole::Main) => (2, "5", 4),
            (WeekObjective::Deload, SlotRole::Accessory) => (2, "8", 4),
            (WeekObjective::Taper, SlotRole::Main) => (2, "3", 3),
            (WeekObjective::Taper, SlotRole::Accessory) => (1, "8", 4),
        };
        Prescription { sets, reps, rir }
    }

    /// Reduced prescription for lower-body work next to hard cardio:
    /// one set fewer (never below the role's floor) and one more rep in reserve
    pub fn reduced_for_collision(&self, role: SlotRole) -> Self {
        Prescription {
            sets: self.sets.saturating_sub(1).max(role.min_sets()),
            reps: self.reps,
            rir: self.rir + 1,
        }
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {} RIR", self.sets, self.reps, self.rir)
    }
}

/// Sets/reps/RIR fields extracted from a prescription string
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPrescription {
    pub sets: String,
    pub reps: String,
    pub rir: String,
}

/// Parse a `"<sets>x<reps> @ <rir> RIR"` string
///
/// Returns `None` for anything else (endurance prescriptions, warm-ups).
/// Never panics.
pub fn parse_prescription(value: &str) -> Option<ParsedPrescription> {
    let (volume, intensity) = value.split_once(" @ ")?;
    let (sets, reps) = volume.split_once(|c: char| c == 'x' || c == 'X')?;
    let (rir, unit) = intensity.split_once(' ')?;

    let is_number = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let is_rep_range =
        |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '-');

    if !is_number(sets) || !is_rep_range(reps) || !is_number(rir) {
        return None;
    }
    if !unit.eq_ignore_ascii_case("RIR") {
        return None;
    }

    Some(ParsedPrescription {
        sets: sets.to_string(),
        reps: reps.to_string(),
        rir: rir.to_string(),
    })
}
