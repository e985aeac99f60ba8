//! Workout builders for strength and endurance training days.
//!
//! Strength sessions draw their exercises from the template library and take
//! their loading from the prescription table. Endurance sessions are fixed
//! warm-up / main set / cool-down descriptors.

use crate::catalog::{TemplateLibrary, SLOT_IDS};
use crate::prescription::{Prescription, SlotRole};
use crate::types::*;

/// Lower-body slots that take the cardio-collision reduction (S1, S4)
const LOWER_BODY_SLOTS: [usize; 2] = [0, 3];

/// Everything needed to build one strength session
#[derive(Clone, Copy, Debug)]
pub struct StrengthRequest {
    pub profile: StrengthProfile,
    pub day_type: DayType,
    pub week_index: u32,
    pub objective: WeekObjective,
    /// A hard endurance session lands on this day or the next one
    pub near_hard_cardio: bool,
}

/// Pick the endurance subtype for the `order`-th (1-based) of `total`
/// endurance sessions in a week
pub fn endurance_workout_type(
    objective: WeekObjective,
    order: u32,
    total: u32,
) -> EnduranceWorkoutType {
    let odd = order % 2 == 1;
    match objective {
        WeekObjective::Deload | WeekObjective::Taper => EnduranceWorkoutType::Easy,
        WeekObjective::Push => {
            if odd {
                EnduranceWorkoutType::Tempo
            } else {
                EnduranceWorkoutType::Interval
            }
        }
        WeekObjective::Build => {
            if total >= 3 && order == total {
                EnduranceWorkoutType::LongEasy
            } else if odd {
                EnduranceWorkoutType::Easy
            } else {
                EnduranceWorkoutType::Tempo
            }
        }
    }
}

/// Build an endurance session from its template
pub fn build_endurance_session(
    library: &TemplateLibrary,
    kind: EnduranceWorkoutType,
    objective: WeekObjective,
) -> WorkoutSession {
    let Some(template) = library.endurance_workout(kind) else {
        tracing::warn!("No endurance template for '{}', emitting empty session", kind);
        return WorkoutSession {
            title: kind.as_str().to_string(),
            objective,
            detail: WorkoutDetail::Endurance {
                workout_type: kind,
                target_mode: kind.target_mode(),
                target_value: String::new(),
            },
            blocks: Vec::new(),
        };
    };

    let blocks = vec![
        single_item_block("Warm-up", "E1", "Warm-up", template.warm_up),
        single_item_block("Main Set", "E2", template.main_name, template.main_set),
        single_item_block("Cool-down", "E3", "Cool-down", template.cool_down),
    ];

    WorkoutSession {
        title: template.title.to_string(),
        objective,
        detail: WorkoutDetail::Endurance {
            workout_type: kind,
            target_mode: kind.target_mode(),
            target_value: template.target_value.to_string(),
        },
        blocks,
    }
}

/// Build a strength session
///
/// Blocks: warm-up, main lifts (S1-S3), accessories (S4-S5) and a
/// trunk/power finisher (S6). The finisher is dropped for endurance-support
/// athletes in reduced-load weeks.
pub fn build_strength_session(library: &TemplateLibrary, req: &StrengthRequest) -> WorkoutSession {
    let emphasis = library
        .strength_day(req.profile, req.day_type.base())
        .map(|t| t.emphasis)
        .unwrap_or("Strength");

    let include_finisher =
        !(req.objective.is_reduced_load() && req.profile == StrengthProfile::EnduranceSupport);

    let mut blocks = vec![single_item_block(
        "Warm-up",
        "W1",
        "General warm-up + ramp-up sets",
        "8-10 min easy + 2-3 ramp sets",
    )];

    let mut groups = vec![("Main Lifts", 0..3), ("Accessories", 3..5)];
    if include_finisher {
        groups.push(("Trunk / Power", 5..6));
    }

    for (title, slots) in groups {
        let items: Vec<WorkoutItem> = slots
            .filter_map(|slot| strength_item(library, req, slot))
            .collect();
        if !items.is_empty() {
            blocks.push(WorkoutBlock {
                title: title.to_string(),
                items,
            });
        }
    }

    WorkoutSession {
        title: format!(
            "{} {} - {}",
            req.profile.display_name(),
            req.day_type,
            emphasis
        ),
        objective: req.objective,
        detail: WorkoutDetail::Strength {
            day_type: req.day_type,
            strength_profile: req.profile,
        },
        blocks,
    }
}

fn strength_item(
    library: &TemplateLibrary,
    req: &StrengthRequest,
    slot: usize,
) -> Option<WorkoutItem> {
    let name = library.pick_exercise(req.profile, req.day_type, slot, req.week_index)?;
    let role = SlotRole::for_slot(slot);
    let base = Prescription::for_slot(req.objective, role);

    let (prescription, flags) = if req.near_hard_cardio && LOWER_BODY_SLOTS.contains(&slot) {
        (
            base.reduced_for_collision(role),
            vec![COLLISION_FLAG.to_string()],
        )
    } else {
        (base, Vec::new())
    };

    Some(WorkoutItem {
        slot: SLOT_IDS[slot].to_string(),
        name: name.to_string(),
        prescription: prescription.to_string(),
        flags,
    })
}

fn single_item_block(title: &str, slot: &str, name: &str, prescription: &str) -> WorkoutBlock {
    WorkoutBlock {
        title: title.to_string(),
        items: vec![WorkoutItem {
            slot: slot.to_string(),
            name: name.to_string(),
            prescription: prescription.to_string(),
            flags: Vec::new(),
        }],
    }
}
