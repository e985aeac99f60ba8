//! Template library of strength exercises and endurance workouts.
//!
//! Strength templates are keyed by profile and base day (A/B/C); each holds
//! six slot lists (S1..S6) that the generator rotates through week by week.
//! Endurance templates describe the warm-up, main set and cool-down of each
//! workout subtype.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default library - built once and shared by reference
static DEFAULT_LIBRARY: Lazy<TemplateLibrary> = Lazy::new(build_default_library);

/// Slot identifiers, in prescription order
pub const SLOT_IDS: [&str; 6] = ["S1", "S2", "S3", "S4", "S5", "S6"];

/// Exercise lists for one profile/base-day combination
#[derive(Clone, Debug)]
pub struct StrengthDayTemplate {
    /// Short description of the day's emphasis, used in titles
    pub emphasis: &'static str,
    /// Candidate exercises per slot (S1..S6)
    pub slots: [&'static [&'static str]; 6],
}

/// Fixed description of an endurance workout subtype
#[derive(Clone, Debug)]
pub struct EnduranceTemplate {
    pub title: &'static str,
    pub target_value: &'static str,
    pub warm_up: &'static str,
    pub main_name: &'static str,
    pub main_set: &'static str,
    pub cool_down: &'static str,
}

/// The complete template library
#[derive(Clone, Debug)]
pub struct TemplateLibrary {
    pub strength: HashMap<(StrengthProfile, BaseDay), StrengthDayTemplate>,
    pub endurance: HashMap<EnduranceWorkoutType, EnduranceTemplate>,
}

/// Get a reference to the cached default library
pub fn default_library() -> &'static TemplateLibrary {
    &DEFAULT_LIBRARY
}

fn build_default_library() -> TemplateLibrary {
    let mut strength = HashMap::new();

    // ========================================================================
    // Balanced
    // ========================================================================

    strength.insert(
        (StrengthProfile::Balanced, BaseDay::A),
        StrengthDayTemplate {
            emphasis: "Squat + Press",
            slots: [
                &["Back Squat", "Front Squat", "Safety Bar Squat"],
                &["Bench Press", "Incline Bench Press", "Dumbbell Bench Press"],
                &["Chest-Supported Row", "Seated Cable Row", "One-Arm Dumbbell Row"],
                &["Walking Lunge", "Leg Press", "Step-Up"],
                &["Lateral Raise", "Triceps Pushdown", "Cable Fly"],
                &["Plank", "Dead Bug", "Pallof Press"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Balanced, BaseDay::B),
        StrengthDayTemplate {
            emphasis: "Hinge + Pull",
            slots: [
                &["Romanian Deadlift", "Trap Bar Deadlift", "Good Morning"],
                &["Pull-Up", "Lat Pulldown", "Neutral-Grip Pull-Up"],
                &["Overhead Press", "Push Press", "Seated Dumbbell Press"],
                &["Hip Thrust", "Nordic Curl", "Back Extension"],
                &["Hammer Curl", "Face Pull", "Rear Delt Fly"],
                &["Side Plank", "Suitcase Carry", "Hanging Knee Raise"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Balanced, BaseDay::C),
        StrengthDayTemplate {
            emphasis: "Full Body",
            slots: [
                &["Deadlift", "Front Squat", "Sumo Deadlift"],
                &["Incline Dumbbell Press", "Weighted Dip", "Close-Grip Bench Press"],
                &["Barbell Row", "Pendlay Row", "T-Bar Row"],
                &["Bulgarian Split Squat", "Reverse Lunge", "Goblet Squat"],
                &["Farmer Carry", "Cable Curl", "Overhead Triceps Extension"],
                &["Med Ball Slam", "Box Jump", "Ab Wheel Rollout"],
            ],
        },
    );

    // ========================================================================
    // Powerlifting
    // ========================================================================

    strength.insert(
        (StrengthProfile::Powerlifting, BaseDay::A),
        StrengthDayTemplate {
            emphasis: "Squat + Bench",
            slots: [
                &["Competition Back Squat", "Pause Squat", "Pin Squat"],
                &["Competition Bench Press", "Larsen Press", "Spoto Press"],
                &["Barbell Row", "Chest-Supported Row"],
                &["Leg Press", "Belt Squat"],
                &["Triceps Pushdown", "JM Press"],
                &["Weighted Plank", "Ab Wheel Rollout"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Powerlifting, BaseDay::B),
        StrengthDayTemplate {
            emphasis: "Deadlift + Bench Variation",
            slots: [
                &["Competition Deadlift", "Deficit Deadlift", "Block Pull"],
                &["Close-Grip Bench Press", "Floor Press"],
                &["Weighted Pull-Up", "Lat Pulldown"],
                &["Romanian Deadlift", "Back Extension"],
                &["Face Pull", "Dumbbell Curl"],
                &["Hanging Leg Raise", "Suitcase Carry"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Powerlifting, BaseDay::C),
        StrengthDayTemplate {
            emphasis: "Squat Variation + Volume Bench",
            slots: [
                &["Tempo Squat", "High-Bar Squat", "Box Squat"],
                &["Touch-and-Go Bench Press", "Paused Bench Press"],
                &["Overhead Press", "Pendlay Row"],
                &["Walking Lunge", "Leg Curl"],
                &["Lateral Raise", "Rear Delt Fly"],
                &["Box Jump", "Broad Jump"],
            ],
        },
    );

    // ========================================================================
    // Bodybuilding
    // ========================================================================

    strength.insert(
        (StrengthProfile::Bodybuilding, BaseDay::A),
        StrengthDayTemplate {
            emphasis: "Quads + Push",
            slots: [
                &["Hack Squat", "High-Bar Squat", "Leg Press"],
                &["Incline Dumbbell Press", "Machine Chest Press", "Flat Dumbbell Press"],
                &["Seated Dumbbell Press", "Machine Shoulder Press"],
                &["Leg Extension", "Walking Lunge"],
                &["Lateral Raise", "Overhead Cable Extension"],
                &["Cable Crunch", "Hanging Leg Raise"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Bodybuilding, BaseDay::B),
        StrengthDayTemplate {
            emphasis: "Hamstrings + Pull",
            slots: [
                &["Romanian Deadlift", "Stiff-Leg Deadlift"],
                &["Lat Pulldown", "Pull-Up"],
                &["Chest-Supported Row", "Seated Cable Row"],
                &["Lying Leg Curl", "Seated Leg Curl"],
                &["Incline Dumbbell Curl", "Preacher Curl"],
                &["Ab Wheel Rollout", "Decline Crunch"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::Bodybuilding, BaseDay::C),
        StrengthDayTemplate {
            emphasis: "Full Body Pump",
            slots: [
                &["Smith Machine Squat", "Bulgarian Split Squat"],
                &["Dip", "Flat Barbell Bench Press"],
                &["T-Bar Row", "One-Arm Dumbbell Row"],
                &["Hip Thrust", "Standing Calf Raise"],
                &["Rear Delt Fly", "Cable Curl"],
                &["Pallof Press", "Dead Bug"],
            ],
        },
    );

    // ========================================================================
    // Endurance support
    // ========================================================================

    strength.insert(
        (StrengthProfile::EnduranceSupport, BaseDay::A),
        StrengthDayTemplate {
            emphasis: "Single-Leg Strength",
            slots: [
                &["Bulgarian Split Squat", "Step-Up", "Reverse Lunge"],
                &["Push-Up", "Dumbbell Bench Press"],
                &["Single-Arm Dumbbell Row", "Inverted Row"],
                &["Single-Leg Calf Raise", "Tibialis Raise"],
                &["Band Pull-Apart", "Face Pull"],
                &["Dead Bug", "Pallof Press"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::EnduranceSupport, BaseDay::B),
        StrengthDayTemplate {
            emphasis: "Posterior Chain",
            slots: [
                &["Trap Bar Deadlift", "Single-Leg Romanian Deadlift"],
                &["Pull-Up", "Lat Pulldown"],
                &["Half-Kneeling Landmine Press", "Overhead Press"],
                &["Nordic Curl", "Single-Leg Glute Bridge"],
                &["Face Pull", "Cable External Rotation"],
                &["Side Plank", "Suitcase Carry"],
            ],
        },
    );
    strength.insert(
        (StrengthProfile::EnduranceSupport, BaseDay::C),
        StrengthDayTemplate {
            emphasis: "Resilience + Elasticity",
            slots: [
                &["Goblet Squat", "Front Squat"],
                &["Incline Dumbbell Press", "Push-Up"],
                &["Chest-Supported Row", "Seated Cable Row"],
                &["Lateral Lunge", "Step-Down"],
                &["Farmer Carry", "Band Pull-Apart"],
                &["Pogo Hops", "Box Jump"],
            ],
        },
    );

    // ========================================================================
    // Endurance workouts
    // ========================================================================

    let mut endurance = HashMap::new();

    endurance.insert(
        EnduranceWorkoutType::Easy,
        EnduranceTemplate {
            title: "Easy Aerobic",
            target_value: "Zone 2",
            warm_up: "10 min Zone 1",
            main_name: "Steady aerobic work",
            main_set: "30-40 min Zone 2",
            cool_down: "5-10 min Zone 1",
        },
    );
    endurance.insert(
        EnduranceWorkoutType::LongEasy,
        EnduranceTemplate {
            title: "Long Easy",
            target_value: "Zone 2",
            warm_up: "10 min Zone 1",
            main_name: "Long steady aerobic work",
            main_set: "60-90 min Zone 2",
            cool_down: "10 min Zone 1",
        },
    );
    endurance.insert(
        EnduranceWorkoutType::Tempo,
        EnduranceTemplate {
            title: "Tempo",
            target_value: "RPE 7",
            warm_up: "15 min Zone 1-2 + 4 strides",
            main_name: "Tempo repeats",
            main_set: "3x10 min @ RPE 7, 3 min easy between",
            cool_down: "10 min Zone 1",
        },
    );
    endurance.insert(
        EnduranceWorkoutType::Interval,
        EnduranceTemplate {
            title: "VO2 Intervals",
            target_value: "RPE 8-9",
            warm_up: "15 min Zone 1-2 + 3 pickups",
            main_name: "VO2 max intervals",
            main_set: "5x3 min @ RPE 8-9, 3 min easy between",
            cool_down: "10 min Zone 1",
        },
    );

    TemplateLibrary {
        strength,
        endurance,
    }
}

impl TemplateLibrary {
    pub fn strength_day(
        &self,
        profile: StrengthProfile,
        base: BaseDay,
    ) -> Option<&StrengthDayTemplate> {
        self.strength.get(&(profile, base))
    }

    pub fn endurance_workout(&self, kind: EnduranceWorkoutType) -> Option<&EnduranceTemplate> {
        self.endurance.get(&kind)
    }

    /// Pick the exercise for a slot, rotating one step per week
    ///
    /// The "2" day-type variants start one step further along the list so
    /// that A and A2 in the same week use different exercises.
    pub fn pick_exercise(
        &self,
        profile: StrengthProfile,
        day_type: DayType,
        slot: usize,
        week_index: u32,
    ) -> Option<&'static str> {
        let options = self.strength_day(profile, day_type.base())?.slots.get(slot)?;
        if options.is_empty() {
            return None;
        }
        let index = (week_index.saturating_sub(1) as usize + day_type.variant_offset())
            % options.len();
        Some(options[index])
    }

    /// Validate the library for completeness
    ///
    /// Returns a list of problems. An empty list means the library is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for profile in StrengthProfile::ALL {
            for base in [BaseDay::A, BaseDay::B, BaseDay::C] {
                match self.strength_day(*profile, base) {
                    None => errors.push(format!(
                        "Profile '{}' has no template for day {:?}",
                        profile, base
                    )),
                    Some(template) => {
                        for (slot, options) in SLOT_IDS.iter().zip(template.slots.iter()) {
                            if options.is_empty() {
                                errors.push(format!(
                                    "Profile '{}' day {:?} slot {} has no exercises",
                                    profile, base, slot
                                ));
                            }
                            if options.iter().any(|name| name.trim().is_empty()) {
                                errors.push(format!(
                                    "Profile '{}' day {:?} slot {} has an empty exercise name",
                                    profile, base, slot
                                ));
                            }
                        }
                    }
                }
            }
        }

        for kind in EnduranceWorkoutType::ALL {
            match self.endurance_workout(*kind) {
                None => errors.push(format!("No endurance template for '{}'", kind)),
                Some(template) => {
                    if template.main_set.is_empty() {
                        errors.push(format!("Endurance template '{}' has no main set", kind));
                    }
                }
            }
        }

        errors
    }
}
