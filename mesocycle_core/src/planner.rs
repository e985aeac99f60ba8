//! Mesocycle generator.
//!
//! Turns normalized planner inputs into a week-by-week calendar:
//! - Periodization: deload/taper placement and per-week objectives
//! - Session placement on fixed weekday templates
//! - Discipline split for mixed focus
//! - Workout selection and cardio-collision adjustment
//!
//! Every function here is pure; the same inputs always produce the same plan.

use crate::catalog::{default_library, TemplateLibrary};
use crate::session::{
    build_endurance_session, build_strength_session, endurance_workout_type, StrengthRequest,
};
use crate::types::*;
use std::collections::{BTreeSet, HashSet};

const MIN_WEEKS: i64 = 4;
const MAX_WEEKS: i64 = 12;
const MIN_SESSIONS: i64 = 2;
const MAX_SESSIONS: i64 = 6;
const DEFAULT_MIXED_BIAS: u8 = 50;

/// Round half up, matching how form inputs have always been rounded
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to an integer, mapping NaN and infinities to 0
fn to_int(value: f64) -> i64 {
    if value.is_finite() {
        round_half_up(value) as i64
    } else {
        0
    }
}

/// Normalize raw inputs into a valid planner configuration
///
/// Normalization is total: out-of-range values are clamped and non-finite
/// values are treated as 0 before clamping, so this never fails.
pub fn normalize_inputs(raw: &RawInputs) -> PlannerInputs {
    let mixed_bias = match raw.focus {
        Focus::Mixed => Some(
            raw.mixed_bias
                .map(|bias| to_int(bias).clamp(0, 100) as u8)
                .unwrap_or(DEFAULT_MIXED_BIAS),
        ),
        Focus::Strength | Focus::Endurance => None,
    };

    PlannerInputs {
        focus: raw.focus,
        mixed_bias,
        mesocycle_weeks: to_int(raw.mesocycle_weeks).clamp(MIN_WEEKS, MAX_WEEKS) as u32,
        level: raw.level,
        sessions_per_week: to_int(raw.sessions_per_week).clamp(MIN_SESSIONS, MAX_SESSIONS) as u32,
        auto_deload: true,
        strength_profile: raw.strength_profile.unwrap_or_default(),
    }
}

/// Recommended starting values for a level and focus
pub fn recommended_defaults(level: Level, focus: Focus) -> RecommendedDefaults {
    let mixed_bias = (focus == Focus::Mixed).then_some(DEFAULT_MIXED_BIAS);

    let (mesocycle_weeks, sessions_per_week) = match (level, focus) {
        (Level::Advanced, Focus::Mixed) => (8, 4),
        (Level::Advanced, _) => (10, 5),
        (Level::Intermediate, _) => (8, 4),
        (Level::Beginner, _) => (6, 3),
    };

    RecommendedDefaults {
        mesocycle_weeks,
        sessions_per_week,
        mixed_bias,
    }
}

/// Weeks scheduled as deloads, ascending
///
/// - up to 6 weeks: final week only
/// - 7 to 9 weeks: the middle week and the final week
/// - 10 or more: weeks 4, 8 and the final week
pub fn deload_weeks(week_count: u32) -> Vec<u32> {
    let weeks: BTreeSet<u32> = match week_count {
        0..=6 => [week_count].into(),
        7..=9 => [(week_count + 1) / 2, week_count].into(),
        _ => [4, 8, week_count].into(),
    };

    weeks.into_iter().filter(|week| *week <= week_count).collect()
}

/// Objective of a week; the final week is always a taper
pub fn week_objective(week_index: u32, deload_weeks: &[u32], week_count: u32) -> WeekObjective {
    if week_index == week_count {
        WeekObjective::Taper
    } else if deload_weeks.contains(&week_index) {
        WeekObjective::Deload
    } else if deload_weeks.contains(&(week_index + 1)) || week_index + 1 == week_count {
        WeekObjective::Push
    } else {
        WeekObjective::Build
    }
}

/// Sessions actually planned in a week; reduced-load weeks drop one session
pub fn planned_session_count(objective: WeekObjective, sessions_per_week: u32) -> u32 {
    if objective.is_reduced_load() {
        sessions_per_week.saturating_sub(1).max(2)
    } else {
        sessions_per_week
    }
}

/// Weekday indexes (1 = Mon) used for a given session count
pub fn training_days(session_count: u32) -> &'static [u32] {
    match session_count {
        0..=2 => &[2, 5],
        3 => &[1, 3, 5],
        4 => &[1, 2, 4, 5],
        5 => &[1, 2, 3, 5, 6],
        _ => &[1, 2, 3, 4, 5, 6],
    }
}

/// Split a mixed week into strength and endurance sessions
///
/// `mixed_bias` is the endurance share in percent. Sessions alternate,
/// starting with strength unless endurance outnumbers it; once one type is
/// exhausted the rest are filled with the other.
pub fn allocate_mixed_sessions(session_count: u32, mixed_bias: u8) -> Vec<Discipline> {
    let endurance = (round_half_up(f64::from(mixed_bias) / 100.0 * f64::from(session_count))
        as u32)
        .min(session_count);
    let mut remaining_endurance = endurance;
    let mut remaining_strength = session_count - endurance;

    let mut next = if remaining_strength >= remaining_endurance {
        Discipline::Strength
    } else {
        Discipline::Endurance
    };

    let mut sequence = Vec::with_capacity(session_count as usize);
    while remaining_strength > 0 || remaining_endurance > 0 {
        let pick = match next {
            Discipline::Strength if remaining_strength > 0 => Discipline::Strength,
            Discipline::Endurance if remaining_endurance > 0 => Discipline::Endurance,
            _ if remaining_strength > 0 => Discipline::Strength,
            _ => Discipline::Endurance,
        };

        match pick {
            Discipline::Strength => remaining_strength -= 1,
            Discipline::Endurance => remaining_endurance -= 1,
        }
        next = match pick {
            Discipline::Strength => Discipline::Endurance,
            Discipline::Endurance => Discipline::Strength,
        };
        sequence.push(pick);
    }

    sequence
}

/// Effort (1-5) of the `order`-th (1-based) of `total` sessions in a week
pub fn training_effort(objective: WeekObjective, order: u32, total: u32) -> u8 {
    match objective {
        WeekObjective::Taper if order == total => 1,
        WeekObjective::Deload | WeekObjective::Taper => 2,
        WeekObjective::Push if order == total.div_ceil(2) => 5,
        WeekObjective::Push => 4,
        WeekObjective::Build => 3,
    }
}

/// Generate a complete mesocycle
///
/// Inputs are normalized first, so any `RawInputs` is accepted.
pub fn generate_program(raw: &RawInputs) -> ProgramOutput {
    let inputs = normalize_inputs(raw);
    let library = default_library();
    let deloads = if inputs.auto_deload {
        deload_weeks(inputs.mesocycle_weeks)
    } else {
        Vec::new()
    };

    let weeks: Vec<WeekPlan> = (1..=inputs.mesocycle_weeks)
        .map(|week_index| build_week(&inputs, library, week_index, &deloads))
        .collect();

    tracing::info!(
        "Generated {}-week {} mesocycle ({} sessions/week, deloads at {:?})",
        inputs.mesocycle_weeks,
        inputs.focus,
        inputs.sessions_per_week,
        deloads
    );

    ProgramOutput { inputs, weeks }
}

/// A training slot placed on the calendar before workouts are built
struct PlacedSession {
    day_index: u32,
    order: u32,
    discipline: Discipline,
    endurance: Option<EnduranceWorkoutType>,
}

fn build_week(
    inputs: &PlannerInputs,
    library: &TemplateLibrary,
    week_index: u32,
    deloads: &[u32],
) -> WeekPlan {
    let objective = week_objective(week_index, deloads, inputs.mesocycle_weeks);
    let is_deload_week = objective.is_reduced_load();
    let planned = planned_session_count(objective, inputs.sessions_per_week);

    let disciplines = match inputs.focus {
        Focus::Strength => vec![Discipline::Strength; planned as usize],
        Focus::Endurance => vec![Discipline::Endurance; planned as usize],
        Focus::Mixed => {
            allocate_mixed_sessions(planned, inputs.mixed_bias.unwrap_or(DEFAULT_MIXED_BIAS))
        }
    };
    let endurance_total = disciplines
        .iter()
        .filter(|d| **d == Discipline::Endurance)
        .count() as u32;

    // First pass: place sessions and pick endurance subtypes
    let mut endurance_order = 0;
    let placed: Vec<PlacedSession> = training_days(planned)
        .iter()
        .zip(&disciplines)
        .enumerate()
        .map(|(idx, (day_index, discipline))| {
            let endurance = match discipline {
                Discipline::Endurance => {
                    endurance_order += 1;
                    Some(endurance_workout_type(objective, endurance_order, endurance_total))
                }
                Discipline::Strength => None,
            };
            PlacedSession {
                day_index: *day_index,
                order: idx as u32 + 1,
                discipline: *discipline,
                endurance,
            }
        })
        .collect();

    let hard_cardio_days: HashSet<u32> = placed
        .iter()
        .filter(|s| s.endurance.is_some_and(|kind| kind.is_hard()))
        .map(|s| s.day_index)
        .collect();

    // Second pass: build the seven days
    let mut strength_order = 0;
    let mut days = Vec::with_capacity(DAY_LABELS.len());
    for (idx, label) in DAY_LABELS.iter().enumerate() {
        let day_index = idx as u32 + 1;

        let Some(session) = placed.iter().find(|s| s.day_index == day_index) else {
            days.push(DayPlan {
                week_index,
                day_index,
                date_label: label.to_string(),
                session_type: SessionType::Rest,
                effort: 1,
                is_training_day: false,
                workout: None,
            });
            continue;
        };

        let workout = match session.endurance {
            Some(kind) => build_endurance_session(library, kind, objective),
            None => {
                let day_type = DayType::ROTATION[strength_order % DayType::ROTATION.len()];
                strength_order += 1;
                let near_hard_cardio = hard_cardio_days.contains(&day_index)
                    || hard_cardio_days.contains(&(day_index + 1));
                build_strength_session(
                    library,
                    &StrengthRequest {
                        profile: inputs.strength_profile,
                        day_type,
                        week_index,
                        objective,
                        near_hard_cardio,
                    },
                )
            }
        };

        let session_type = if is_deload_week {
            SessionType::Deload
        } else {
            match session.discipline {
                Discipline::Strength => SessionType::Strength,
                Discipline::Endurance => SessionType::Endurance,
            }
        };

        days.push(DayPlan {
            week_index,
            day_index,
            date_label: label.to_string(),
            session_type,
            effort: training_effort(objective, session.order, planned),
            is_training_day: true,
            workout: Some(workout),
        });
    }

    tracing::debug!(
        "Week {}: {} with {} of {} sessions ({} hard cardio days)",
        week_index,
        objective,
        planned,
        inputs.sessions_per_week,
        hard_cardio_days.len()
    );

    WeekPlan {
        week_index,
        objective,
        is_deload_week,
        target_session_count: inputs.sessions_per_week,
        planned_session_count: planned,
        summary: summarize(&days),
        days,
    }
}

fn summarize(days: &[DayPlan]) -> WeekSummary {
    let count = |kinds: &[SessionType]| {
        days.iter()
            .filter(|day| kinds.contains(&day.session_type))
            .count() as u32
    };

    let avg_effort = if days.is_empty() {
        0.0
    } else {
        let total: u32 = days.iter().map(|day| u32::from(day.effort)).sum();
        (f64::from(total) / days.len() as f64 * 10.0).round() / 10.0
    };

    WeekSummary {
        strength_sessions: count(&[SessionType::Strength]),
        endurance_sessions: count(&[SessionType::Endurance]),
        mixed_sessions: count(&[SessionType::Mixed]),
        deload_sessions: count(&[SessionType::Deload]),
        rest_days: count(&[SessionType::Rest, SessionType::Recovery]),
        avg_effort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prescription::parse_prescription;

    fn raw(focus: Focus, weeks: f64, sessions: f64, profile: StrengthProfile) -> RawInputs {
        RawInputs {
            focus,
            mixed_bias: None,
            mesocycle_weeks: weeks,
            level: Level::Intermediate,
            sessions_per_week: sessions,
            strength_profile: Some(profile),
        }
    }

    fn mixed(bias: f64, weeks: f64, sessions: f64, profile: StrengthProfile) -> RawInputs {
        RawInputs {
            mixed_bias: Some(bias),
            ..raw(Focus::Mixed, weeks, sessions, profile)
        }
    }

    #[test]
    fn test_recommended_defaults() {
        assert_eq!(
            recommended_defaults(Level::Advanced, Focus::Mixed),
            RecommendedDefaults {
                mesocycle_weeks: 8,
                sessions_per_week: 4,
                mixed_bias: Some(50)
            }
        );
        assert_eq!(
            recommended_defaults(Level::Advanced, Focus::Strength),
            RecommendedDefaults {
                mesocycle_weeks: 10,
                sessions_per_week: 5,
                mixed_bias: None
            }
        );
        let intermediate = recommended_defaults(Level::Intermediate, Focus::Mixed);
        assert_eq!((intermediate.mesocycle_weeks, intermediate.mixed_bias), (8, Some(50)));
        let beginner = recommended_defaults(Level::Beginner, Focus::Endurance);
        assert_eq!((beginner.mesocycle_weeks, beginner.sessions_per_week), (6, 3));
        assert_eq!(beginner.mixed_bias, None);
    }

    #[test]
    fn test_normalize_clamps_out_of_range_values() {
        let normalized = normalize_inputs(&mixed(200.0, 13.0, 1.0, StrengthProfile::Balanced));
        assert_eq!(normalized.mesocycle_weeks, 12);
        assert_eq!(normalized.sessions_per_week, 2);
        assert_eq!(normalized.mixed_bias, Some(100));
        assert!(normalized.auto_deload);
    }

    #[test]
    fn test_normalize_coerces_non_finite_values() {
        let input = mixed(f64::NAN, f64::INFINITY, f64::NAN, StrengthProfile::Balanced);
        let normalized = normalize_inputs(&input);
        assert_eq!(normalized.mesocycle_weeks, 4);
        assert_eq!(normalized.sessions_per_week, 2);
        assert_eq!(normalized.mixed_bias, Some(0));
    }

    #[test]
    fn test_normalize_mixed_bias_presence() {
        let mut input = raw(Focus::Mixed, 8.0, 4.0, StrengthProfile::Balanced);
        assert_eq!(normalize_inputs(&input).mixed_bias, Some(50));

        input.focus = Focus::Strength;
        input.mixed_bias = Some(30.0);
        assert_eq!(normalize_inputs(&input).mixed_bias, None);
    }

    #[test]
    fn test_normalize_rounds_and_defaults_profile() {
        let mut input = raw(Focus::Endurance, 7.5, 3.4, StrengthProfile::Powerlifting);
        input.strength_profile = None;
        let normalized = normalize_inputs(&input);
        assert_eq!(normalized.mesocycle_weeks, 8);
        assert_eq!(normalized.sessions_per_week, 3);
        assert_eq!(normalized.strength_profile, StrengthProfile::Balanced);
    }

    #[test]
    fn test_deload_weeks() {
        assert_eq!(deload_weeks(4), vec![4]);
        assert_eq!(deload_weeks(6), vec![6]);
        assert_eq!(deload_weeks(7), vec![4, 7]);
        assert_eq!(deload_weeks(8), vec![4, 8]);
        assert_eq!(deload_weeks(9), vec![5, 9]);
        assert_eq!(deload_weeks(10), vec![4, 8, 10]);
        assert_eq!(deload_weeks(12), vec![4, 8, 12]);
    }

    #[test]
    fn test_week_objectives_for_eight_weeks() {
        let deloads = deload_weeks(8);
        let objectives: Vec<_> = (1..=8).map(|w| week_objective(w, &deloads, 8)).collect();
        use WeekObjective::*;
        assert_eq!(
            objectives,
            vec![Build, Build, Push, Deload, Build, Build, Push, Taper]
        );
    }

    #[test]
    fn test_allocate_mixed_sessions() {
        use Discipline::*;
        assert_eq!(allocate_mixed_sessions(4, 50), vec![Strength, Endurance, Strength, Endurance]);
        assert_eq!(allocate_mixed_sessions(4, 75), vec![Endurance, Strength, Endurance, Endurance]);
        assert_eq!(allocate_mixed_sessions(3, 50), vec![Endurance, Strength, Endurance]);
        assert_eq!(allocate_mixed_sessions(3, 0), vec![Strength, Strength, Strength]);
        assert_eq!(allocate_mixed_sessions(2, 100), vec![Endurance, Endurance]);
    }

    #[test]
    fn test_training_effort() {
        assert_eq!(training_effort(WeekObjective::Build, 2, 4), 3);
        assert_eq!(training_effort(WeekObjective::Push, 2, 4), 5);
        assert_eq!(training_effort(WeekObjective::Push, 3, 5), 5);
        assert_eq!(training_effort(WeekObjective::Push, 1, 5), 4);
        assert_eq!(training_effort(WeekObjective::Deload, 3, 3), 2);
        assert_eq!(training_effort(WeekObjective::Taper, 2, 3), 2);
        assert_eq!(training_effort(WeekObjective::Taper, 3, 3), 1);
    }

    #[test]
    fn test_every_week_has_seven_days() {
        crate::logging::init_test();

        for weeks in 4..=12 {
            for sessions in 2..=6 {
                let input = raw(
                    Focus::Strength,
                    weeks as f64,
                    sessions as f64,
                    StrengthProfile::Balanced,
                );
                let program = generate_program(&input);
                assert_eq!(program.weeks.len(), normalize_inputs(&input).mesocycle_weeks as usize);
                for (idx, week) in program.weeks.iter().enumerate() {
                    assert_eq!(week.week_index, idx as u32 + 1);
                    assert_eq!(week.days.len(), 7);
                    let training = week.days.iter().filter(|d| d.is_training_day).count();
                    assert_eq!(training as u32, week.planned_session_count);
                }
                let last = program.weeks.last().unwrap();
                assert_eq!(last.objective, WeekObjective::Taper);
                assert!(last.is_deload_week);
            }
        }
    }

    #[test]
    fn test_eight_week_deload_and_taper() {
        let program = generate_program(&raw(Focus::Endurance, 8.0, 4.0, StrengthProfile::Balanced));
        assert_eq!(program.weeks[3].objective, WeekObjective::Deload);
        assert!(program.weeks[3].is_deload_week);
        assert_eq!(program.weeks[3].planned_session_count, 3);
        assert_eq!(program.weeks[3].target_session_count, 4);
        assert_eq!(program.weeks[7].objective, WeekObjective::Taper);
        assert!(program.weeks[7].is_deload_week);
    }

    #[test]
    fn test_mixed_bias_favours_endurance() {
        let program = generate_program(&mixed(75.0, 4.0, 4.0, StrengthProfile::Balanced));
        for week in program.weeks.iter().filter(|w| !w.is_deload_week) {
            assert!(week.summary.endurance_sessions > week.summary.strength_sessions);
        }
    }

    #[test]
    fn test_endurance_support_profile_selection() {
        let program =
            generate_program(&raw(Focus::Strength, 4.0, 3.0, StrengthProfile::EnduranceSupport));
        let library = default_library();

        for (day, workout) in program.weeks[0].workout_days() {
            assert_eq!(workout.strength_profile(), Some(StrengthProfile::EnduranceSupport));
            let day_type = workout.day_type().unwrap();
            let expected = library
                .pick_exercise(StrengthProfile::EnduranceSupport, day_type, 0, 1)
                .unwrap();
            let main = workout.main_item().unwrap();
            assert_eq!(main.name, expected, "day {}", day.date_label);
            assert!(main.prescription.contains("RIR"));
        }

        let first = program.weeks[0].workout_days().next().unwrap().1;
        assert_eq!(first.main_item().unwrap().name, "Bulgarian Split Squat");
    }

    #[test]
    fn test_endurance_target_modes() {
        let program = generate_program(&raw(Focus::Endurance, 8.0, 4.0, StrengthProfile::Balanced));

        let build_week = &program.weeks[0];
        assert!(build_week
            .workout_days()
            .any(|(_, w)| w.target_mode() == Some(TargetMode::Zone)));

        let push_week = &program.weeks[2];
        let interval = push_week
            .workout_days()
            .find(|(_, w)| w.workout_type() == "interval")
            .map(|(_, w)| w)
            .unwrap();
        assert_eq!(interval.target_mode(), Some(TargetMode::Rpe));

        for (_, workout) in program.weeks[3].workout_days() {
            assert_eq!(workout.workout_type(), "easy");
        }
    }

    #[test]
    fn test_collision_adjustment_near_hard_cardio() {
        let program = generate_program(&mixed(50.0, 8.0, 4.0, StrengthProfile::EnduranceSupport));
        let mut adjusted_days = 0;

        for week in &program.weeks {
            let hard_days: Vec<u32> = week
                .workout_days()
                .filter(|(_, w)| w.target_mode() == Some(TargetMode::Rpe))
                .map(|(d, _)| d.day_index)
                .collect();

            for (day, workout) in week.workout_days() {
                let Some(_) = workout.day_type() else { continue };
                let near = hard_days.contains(&day.day_index)
                    || hard_days.contains(&(day.day_index + 1));
                assert_eq!(
                    workout.collision_adjustments() > 0,
                    near,
                    "week {} {}",
                    week.week_index,
                    day.date_label
                );

                if near {
                    adjusted_days += 1;
                    let s1 = workout.main_item().unwrap();
                    assert!(s1.has_flag(COLLISION_FLAG));
                    let parsed = parse_prescription(&s1.prescription).unwrap();
                    let base = crate::prescription::Prescription::for_slot(
                        week.objective,
                        crate::prescription::SlotRole::Main,
                    );
                    assert!(parsed.sets.parse::<u32>().unwrap() < base.sets);
                    assert_eq!(parsed.rir.parse::<u32>().unwrap(), base.rir + 1);
                }
            }
        }

        assert!(adjusted_days > 0);
        let push_week = &program.weeks[2];
        assert!(push_week.workout_days().any(|(_, w)| w.collision_adjustments() > 0));
    }

    #[test]
    fn test_beginner_strength_scenario() {
        let input = RawInputs {
            level: Level::Beginner,
            ..raw(Focus::Strength, 6.0, 3.0, StrengthProfile::Balanced)
        };
        let program = generate_program(&input);

        assert_eq!(program.weeks.len(), 6);
        assert_eq!(program.weeks[5].objective, WeekObjective::Taper);
        assert!(program.weeks[5].is_deload_week);

        for week in &program.weeks[..5] {
            let labels: Vec<_> = week.workout_days().map(|(d, _)| d.date_label.as_str()).collect();
            assert_eq!(labels, vec!["Mon", "Wed", "Fri"]);
            let day_types: Vec<_> = week.workout_days().filter_map(|(_, w)| w.day_type()).collect();
            assert_eq!(day_types, vec![DayType::A, DayType::B, DayType::C]);
            assert!(week
                .days
                .iter()
                .filter(|d| d.is_training_day)
                .all(|d| d.session_type == SessionType::Strength));
        }

        let taper = &program.weeks[5];
        let labels: Vec<_> = taper.workout_days().map(|(d, _)| d.date_label.as_str()).collect();
        assert_eq!(labels, vec!["Tue", "Fri"]);
        assert!(taper.workout_days().all(|(d, _)| d.session_type == SessionType::Deload));
        assert_eq!(taper.days[4].effort, 1);
    }

    #[test]
    fn test_day_type_rotation_uses_variants() {
        let program =
            generate_program(&raw(Focus::Strength, 8.0, 5.0, StrengthProfile::Powerlifting));
        let day_types: Vec<_> = program.weeks[0]
            .workout_days()
            .filter_map(|(_, w)| w.day_type())
            .collect();
        assert_eq!(day_types, vec![DayType::A, DayType::B, DayType::C, DayType::A2, DayType::B2]);
    }

    #[test]
    fn test_week_summary() {
        let program = generate_program(&raw(Focus::Strength, 6.0, 3.0, StrengthProfile::Balanced));
        let week = &program.weeks[0];
        assert_eq!(week.summary.strength_sessions, 3);
        assert_eq!(week.summary.rest_days, 4);
        // (3 * 3 + 4 * 1) / 7 = 1.857..
        assert_eq!(week.summary.avg_effort, 1.9);

        let taper = &program.weeks[5];
        assert_eq!(taper.summary.strength_sessions, 0);
        assert_eq!(taper.summary.deload_sessions, 2);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let input = mixed(60.0, 10.0, 5.0, StrengthProfile::Bodybuilding);
        assert_eq!(generate_program(&input), generate_program(&input));
    }

    #[test]
    fn test_regenerating_from_normalized_inputs() {
        let first = generate_program(&mixed(62.4, 10.6, 4.5, StrengthProfile::Bodybuilding));
        let raw_again = RawInputs::from(&first.inputs);
        assert_eq!(raw_again.mesocycle_weeks, 11.0);
        assert_eq!(raw_again.sessions_per_week, 5.0);
        assert_eq!(raw_again.mixed_bias, Some(62.0));

        assert_eq!(normalize_inputs(&raw_again), first.inputs);
        assert_eq!(generate_program(&raw_again), first);
    }
}
