//! Export model mapping.
//!
//! Projects a generated program into flat row collections that the workbook
//! and document builders consume. Mapping is pure: the only outside input is
//! the export timestamp, which reaches overview metadata and file names but
//! never program content.

use crate::prescription::parse_prescription;
use crate::types::{labeled_enum, *};
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Options
// ============================================================================

/// Which weeks to export
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    #[default]
    All,
    Selected,
}

labeled_enum!(ExportScope {
    All => "all",
    Selected => "selected",
});

/// Whether per-exercise rows are exported
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExportDetail {
    CalendarOnly,
    #[default]
    Full,
}

labeled_enum!(ExportDetail {
    CalendarOnly => "calendar-only",
    Full => "full",
});

/// Document layout density
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PdfMode {
    #[default]
    Compact,
    Detailed,
}

labeled_enum!(PdfMode {
    Compact => "compact",
    Detailed => "detailed",
});

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

labeled_enum!(PaperSize {
    Letter => "letter",
    A4 => "a4",
});

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
    #[default]
    Auto,
}

labeled_enum!(Orientation {
    Portrait => "portrait",
    Landscape => "landscape",
    Auto => "auto",
});

/// Options for a single export
///
/// The mapper reads `scope`, `selected_weeks` and `detail`; the layout fields
/// are carried through for the document builder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportOptions {
    pub scope: ExportScope,
    /// Only meaningful with `ExportScope::Selected`
    pub selected_weeks: Option<Vec<u32>>,
    pub detail: ExportDetail,
    pub pdf_mode: PdfMode,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub grayscale: bool,
    pub ink_saver: bool,
    pub include_legend: bool,
    pub include_progression_chart: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scope: ExportScope::All,
            selected_weeks: None,
            detail: ExportDetail::Full,
            pdf_mode: PdfMode::Compact,
            paper_size: PaperSize::Letter,
            orientation: Orientation::Auto,
            grayscale: false,
            ink_saver: false,
            include_legend: true,
            include_progression_chart: true,
        }
    }
}

// ============================================================================
// Rows
// ============================================================================

/// A row kind with a fixed column set
pub trait TabularRow {
    const HEADERS: &'static [&'static str];

    /// Cell values in `HEADERS` order
    fn cells(&self) -> Vec<String>;
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewRow {
    pub key: String,
    pub value: String,
}

impl TabularRow for OverviewRow {
    const HEADERS: &'static [&'static str] = &["Key", "Value"];

    fn cells(&self) -> Vec<String> {
        vec![self.key.clone(), self.value.clone()]
    }
}

/// One week of the calendar, one text cell per weekday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarRow {
    pub week: u32,
    pub objective: WeekObjective,
    pub days: [String; 7],
}

impl TabularRow for CalendarRow {
    const HEADERS: &'static [&'static str] =
        &["Week", "Objective", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.week.to_string(), self.objective.to_string()];
        cells.extend(self.days.iter().cloned());
        cells
    }
}

/// One exercise item with its week/day/session context
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutRow {
    pub week: u32,
    pub day: String,
    pub session_title: String,
    pub session_type: String,
    pub week_objective: WeekObjective,
    pub day_type: String,
    pub block: String,
    pub slot: String,
    pub exercise: String,
    pub prescription: String,
    pub sets: String,
    pub reps: String,
    pub rir: String,
    pub target_mode: String,
    pub target_value: String,
    pub flags: String,
    pub notes: String,
}

impl TabularRow for WorkoutRow {
    const HEADERS: &'static [&'static str] = &[
        "Week",
        "Day",
        "Session Title",
        "Session Type",
        "Week Objective",
        "Day Type",
        "Block",
        "Slot",
        "Exercise",
        "Prescription",
        "Sets",
        "Reps",
        "RIR",
        "Target Mode",
        "Target Value",
        "Flags",
        "Notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.week.to_string(),
            self.day.clone(),
            self.session_title.clone(),
            self.session_type.clone(),
            self.week_objective.to_string(),
            self.day_type.clone(),
            self.block.clone(),
            self.slot.clone(),
            self.exercise.clone(),
            self.prescription.clone(),
            self.sets.clone(),
            self.reps.clone(),
            self.rir.clone(),
            self.target_mode.clone(),
            self.target_value.clone(),
            self.flags.clone(),
            self.notes.clone(),
        ]
    }
}

/// Printable tracker row with blank columns for logging actual work
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRow {
    pub week: u32,
    pub week_objective: WeekObjective,
    pub effort: u8,
    pub day_label: String,
    pub session_title: String,
    pub exercise: String,
    pub prescription: String,
}

impl TabularRow for SessionRow {
    const HEADERS: &'static [&'static str] = &[
        "Week",
        "Week Objective",
        "Effort",
        "Day Label",
        "Session Type",
        "Exercise",
        "Prescription",
        "Actual Reps",
        "Weight",
        "Notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.week.to_string(),
            self.week_objective.to_string(),
            self.effort.to_string(),
            self.day_label.clone(),
            self.session_title.clone(),
            self.exercise.clone(),
            self.prescription.clone(),
            String::new(),
            String::new(),
            String::new(),
        ]
    }
}

/// Per-week load summary
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionRow {
    pub week: u32,
    pub objective: WeekObjective,
    pub is_deload_week: bool,
    pub planned_sessions: u32,
    pub strength_sessions: u32,
    pub endurance_sessions: u32,
    pub mixed_sessions: u32,
    pub rest_days: u32,
    pub avg_effort: f64,
    /// Endurance workouts prescribed by RPE (tempo and intervals)
    pub hard_endurance_sessions: u32,
    /// Items flagged as cardio-collision adjusted
    pub collision_adjustments: u32,
}

impl TabularRow for ProgressionRow {
    const HEADERS: &'static [&'static str] = &[
        "Week",
        "Objective",
        "Is Deload Week",
        "Planned Sessions",
        "Strength Sessions",
        "Endurance Sessions",
        "Mixed Sessions",
        "Rest Days",
        "Avg Effort",
        "Hard Endurance Sessions",
        "Collision Adjustments",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.week.to_string(),
            self.objective.to_string(),
            if self.is_deload_week { "yes" } else { "no" }.to_string(),
            self.planned_sessions.to_string(),
            self.strength_sessions.to_string(),
            self.endurance_sessions.to_string(),
            self.mixed_sessions.to_string(),
            self.rest_days.to_string(),
            self.avg_effort.to_string(),
            self.hard_endurance_sessions.to_string(),
            self.collision_adjustments.to_string(),
        ]
    }
}

// ============================================================================
// Model
// ============================================================================

/// Everything a format builder needs for one export
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportModel {
    pub program: ProgramOutput,
    pub options: ExportOptions,
    pub exported_at: DateTime<Utc>,
    pub filtered_weeks: Vec<WeekPlan>,
    pub overview: Vec<OverviewRow>,
    pub session_rows: Vec<SessionRow>,
    pub calendar_rows: Vec<CalendarRow>,
    pub workout_rows: Vec<WorkoutRow>,
    pub progression_rows: Vec<ProgressionRow>,
}

/// Deduplicated, sorted week selection as requested (may contain
/// out-of-range weeks)
fn requested_weeks(options: &ExportOptions) -> Option<BTreeSet<u32>> {
    match options.scope {
        ExportScope::All => None,
        ExportScope::Selected => options
            .selected_weeks
            .as_ref()
            .map(|weeks| weeks.iter().copied().collect()),
    }
}

/// Weeks included in the export
///
/// A selected scope without a week list exports everything; an explicit empty
/// list exports nothing. Callers reject the latter with `validate_selection`.
pub fn select_weeks(program: &ProgramOutput, options: &ExportOptions) -> Vec<WeekPlan> {
    match requested_weeks(options) {
        None => program.weeks.clone(),
        Some(selected) => program
            .weeks
            .iter()
            .filter(|week| selected.contains(&week.week_index))
            .cloned()
            .collect(),
    }
}

/// Check a week selection before exporting
///
/// Returns the weeks that will be exported. A selected-scope export that
/// resolves to no existing week is rejected.
pub fn validate_selection(program: &ProgramOutput, options: &ExportOptions) -> Result<Vec<u32>> {
    let weeks: Vec<u32> = select_weeks(program, options)
        .iter()
        .map(|week| week.week_index)
        .collect();

    if weeks.is_empty() {
        return Err(Error::Export(format!(
            "Select at least one week between 1 and {} to export",
            program.weeks.len()
        )));
    }

    Ok(weeks)
}

/// Map a program into an export model
///
/// `now` defaults to the current time and is only used for the "Exported At"
/// overview entry and derived file names.
pub fn map_program_to_export_model(
    program: &ProgramOutput,
    options: &ExportOptions,
    now: Option<DateTime<Utc>>,
) -> ExportModel {
    let exported_at = now.unwrap_or_else(Utc::now);
    let filtered_weeks = select_weeks(program, options);
    let full_detail = options.detail == ExportDetail::Full;

    tracing::debug!(
        "Mapping {} of {} weeks for export ({})",
        filtered_weeks.len(),
        program.weeks.len(),
        options.detail
    );

    ExportModel {
        overview: overview_rows(&program.inputs, &filtered_weeks, exported_at),
        session_rows: if full_detail {
            session_rows(&filtered_weeks)
        } else {
            Vec::new()
        },
        calendar_rows: calendar_rows(&filtered_weeks),
        workout_rows: if full_detail {
            workout_rows(&filtered_weeks)
        } else {
            Vec::new()
        },
        progression_rows: progression_rows(&filtered_weeks),
        program: program.clone(),
        options: options.clone(),
        exported_at,
        filtered_weeks,
    }
}

/// ISO-8601 timestamp with millisecond precision, e.g. 2024-03-01T09:30:00.000Z
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `mesocycle-<focus>-<profile>-<YYYY-MM-DD>` with the given extension
pub fn export_file_name(inputs: &PlannerInputs, exported_at: DateTime<Utc>, ext: &str) -> String {
    format!(
        "mesocycle-{}-{}-{}.{}",
        inputs.focus,
        inputs.strength_profile,
        exported_at.format("%Y-%m-%d"),
        ext
    )
}

fn overview_rows(
    inputs: &PlannerInputs,
    weeks: &[WeekPlan],
    exported_at: DateTime<Utc>,
) -> Vec<OverviewRow> {
    let total_sessions: u32 = weeks.iter().map(|w| w.planned_session_count).sum();
    let total_strength: u32 = weeks.iter().map(|w| w.summary.strength_sessions).sum();
    let total_endurance: u32 = weeks.iter().map(|w| w.summary.endurance_sessions).sum();
    let deload_weeks = weeks.iter().filter(|w| w.is_deload_week).count();
    let average_effort = if weeks.is_empty() {
        "0.00".to_string()
    } else {
        let sum: f64 = weeks.iter().map(|w| w.summary.avg_effort).sum();
        format!("{:.2}", sum / weeks.len() as f64)
    };

    let rows = [
        ("Program Focus", inputs.focus.to_string()),
        ("Strength Profile", inputs.strength_profile.to_string()),
        ("Initial Level", inputs.level.to_string()),
        ("Mesocycle Length (weeks)", inputs.mesocycle_weeks.to_string()),
        ("Sessions / Week", inputs.sessions_per_week.to_string()),
        (
            "Mixed Bias (%)",
            inputs.mixed_bias.map(|b| b.to_string()).unwrap_or_default(),
        ),
        ("Auto Deload", inputs.auto_deload.to_string()),
        ("Exported At", format_timestamp(exported_at)),
        ("Total Sessions", total_sessions.to_string()),
        ("Total Strength Sessions", total_strength.to_string()),
        ("Total Endurance Sessions", total_endurance.to_string()),
        ("Total Deload Weeks", deload_weeks.to_string()),
        ("Average Weekly Effort", average_effort),
    ];

    rows.into_iter()
        .map(|(key, value)| OverviewRow {
            key: key.to_string(),
            value,
        })
        .collect()
}

/// Calendar cell: headline, category and effort on separate lines
fn calendar_cell(day: &DayPlan) -> String {
    let headline = day
        .workout
        .as_ref()
        .map(|w| w.title.clone())
        .unwrap_or_else(|| day.session_type.to_string());
    format!("{}\n{}\nEffort: {}/5", headline, day.session_type, day.effort)
}

fn calendar_rows(weeks: &[WeekPlan]) -> Vec<CalendarRow> {
    weeks
        .iter()
        .map(|week| {
            let mut days: [String; 7] = Default::default();
            for day in &week.days {
                if let Some(cell) = days.get_mut(day.day_index as usize - 1) {
                    *cell = calendar_cell(day);
                }
            }
            CalendarRow {
                week: week.week_index,
                objective: week.objective,
                days,
            }
        })
        .collect()
}

fn workout_rows(weeks: &[WeekPlan]) -> Vec<WorkoutRow> {
    let mut rows = Vec::new();

    for week in weeks {
        for (day, workout) in week.workout_days() {
            for (block, item) in workout.items() {
                let parsed = parse_prescription(&item.prescription).unwrap_or_default();
                rows.push(WorkoutRow {
                    week: week.week_index,
                    day: day.date_label.clone(),
                    session_title: workout.title.clone(),
                    session_type: workout.kind().to_string(),
                    week_objective: week.objective,
                    day_type: workout.day_type().map(|d| d.to_string()).unwrap_or_default(),
                    block: block.title.clone(),
                    slot: item.slot.clone(),
                    exercise: item.name.clone(),
                    prescription: item.prescription.clone(),
                    sets: parsed.sets,
                    reps: parsed.reps,
                    rir: parsed.rir,
                    target_mode: workout.target_mode().map(|m| m.to_string()).unwrap_or_default(),
                    target_value: workout.target_value().unwrap_or_default().to_string(),
                    flags: item.flags.join(", "),
                    notes: String::new(),
                });
            }
        }
    }

    rows
}

fn session_rows(weeks: &[WeekPlan]) -> Vec<SessionRow> {
    let mut rows = Vec::new();

    for week in weeks {
        for (day, workout) in week.workout_days() {
            for (_, item) in workout.items() {
                rows.push(SessionRow {
                    week: week.week_index,
                    week_objective: week.objective,
                    effort: day.effort,
                    day_label: day.date_label.clone(),
                    session_title: workout.title.clone(),
                    exercise: item.name.clone(),
                    prescription: item.prescription.clone(),
                });
            }
        }
    }

    rows
}

fn progression_rows(weeks: &[WeekPlan]) -> Vec<ProgressionRow> {
    weeks
        .iter()
        .map(|week| {
            let hard_endurance_sessions = week
                .workout_days()
                .filter(|(_, w)| w.target_mode() == Some(TargetMode::Rpe))
                .count() as u32;
            let collision_adjustments: usize = week
                .workout_days()
                .map(|(_, w)| w.collision_adjustments())
                .sum();

            ProgressionRow {
                week: week.week_index,
                objective: week.objective,
                is_deload_week: week.is_deload_week,
                planned_sessions: week.planned_session_count,
                strength_sessions: week.summary.strength_sessions,
                endurance_sessions: week.summary.endurance_sessions,
                mixed_sessions: week.summary.mixed_sessions,
                rest_days: week.summary.rest_days,
                avg_effort: week.summary.avg_effort,
                hard_endurance_sessions,
                collision_adjustments: collision_adjustments as u32,
            }
        })
        .collect()
}
