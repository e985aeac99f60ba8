//! Spreadsheet workbook builder and CSV sink.
//!
//! `build_workbook` lays the export model out as named sheets of string
//! cells. Binary spreadsheet encoding happens elsewhere; `write_csv_sheets`
//! is the built-in sink and writes one CSV file per sheet.

use crate::export::{
    CalendarRow, ExportDetail, ExportModel, OverviewRow, ProgressionRow, SessionRow, TabularRow,
    WorkoutRow,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const OVERVIEW_SHEET: &str = "Overview";
pub const CALENDAR_SHEET: &str = "Calendar";
pub const WORKOUTS_SHEET: &str = "Workouts";
pub const PROGRESSION_SHEET: &str = "Progression";
pub const TRACKER_SHEET: &str = "Sessions Tracker";

const TRACKER_HEADERS: [&str; 5] = ["Exercise", "Prescription", "Actual Reps", "Weight", "Notes"];
const TRACKER_WIDTHS: [u16; 5] = [28, 18, 12, 12, 25];

/// A named grid of cells
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column widths in characters; empty means auto
    pub column_widths: Vec<u16>,
    /// Indexes into `rows` that start a new printed page
    pub page_breaks: Vec<usize>,
}

impl Sheet {
    fn from_rows<R: TabularRow>(name: &str, rows: &[R]) -> Self {
        Sheet {
            name: name.to_string(),
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(R::cells).collect(),
            column_widths: Vec::new(),
            page_breaks: Vec::new(),
        }
    }

    /// File-system friendly sheet name, e.g. `sessions-tracker`
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

/// Lay an export model out as a workbook
///
/// Overview, Calendar and Progression are always present. Workouts and the
/// printable Sessions Tracker are only built for full-detail exports.
pub fn build_workbook(model: &ExportModel) -> Workbook {
    let full_detail = model.options.detail == ExportDetail::Full;

    let mut sheets = vec![
        Sheet::from_rows::<OverviewRow>(OVERVIEW_SHEET, &model.overview),
        Sheet::from_rows::<CalendarRow>(CALENDAR_SHEET, &model.calendar_rows),
    ];
    if full_detail {
        sheets.push(Sheet::from_rows::<WorkoutRow>(WORKOUTS_SHEET, &model.workout_rows));
    }
    sheets.push(Sheet::from_rows::<ProgressionRow>(
        PROGRESSION_SHEET,
        &model.progression_rows,
    ));
    if full_detail {
        sheets.push(tracker_sheet(model));
    }

    tracing::debug!(
        "Built workbook with sheets {:?}",
        sheets.iter().map(|s| &s.name).collect::<Vec<_>>()
    );

    Workbook { sheets }
}

fn padded(first: String) -> Vec<String> {
    let mut row = vec![String::new(); TRACKER_HEADERS.len()];
    row[0] = first;
    row
}

/// Printable tracker: a header row per week and per training day, exercise
/// rows with blank columns to fill in, and a page break before every week
/// after the first
fn tracker_sheet(model: &ExportModel) -> Sheet {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut page_breaks = Vec::new();
    let mut current: Option<(u32, &str)> = None;

    for session in &model.session_rows {
        if current.map(|(week, _)| week) != Some(session.week) {
            if current.is_some() {
                rows.push(padded(String::new()));
                rows.push(padded(String::new()));
                page_breaks.push(rows.len());
            }
            rows.push(padded(week_header(model, session)));
        }
        if current != Some((session.week, session.day_label.as_str())) {
            rows.push(padded(format!("{} - {}", session.day_label, session.session_title)));
            current = Some((session.week, session.day_label.as_str()));
        }

        let mut cells = session.cells();
        // drop the week/day context columns; the header rows carry them
        rows.push(cells.split_off(SessionRow::HEADERS.len() - TRACKER_HEADERS.len()));
    }

    if current.is_some() {
        rows.push(padded(String::new()));
        rows.push(padded(String::new()));
    }

    Sheet {
        name: TRACKER_SHEET.to_string(),
        headers: TRACKER_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
        column_widths: TRACKER_WIDTHS.to_vec(),
        page_breaks,
    }
}

fn week_header(model: &ExportModel, session: &SessionRow) -> String {
    let avg_effort = model
        .filtered_weeks
        .iter()
        .find(|week| week.week_index == session.week)
        .map(|week| week.summary.avg_effort)
        .unwrap_or_default();

    format!(
        "Week {} - {} (Effort: {}/5)",
        session.week,
        session.week_objective,
        avg_effort.round()
    )
}

/// Write every sheet to `<dir>/<sheet-slug>.csv`, creating `dir` if needed
///
/// Each file is flushed and synced before the next one is written. Returns
/// the written paths in sheet order.
pub fn write_csv_sheets(workbook: &Workbook, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let path = dir.join(format!("{}.csv", sheet.slug()));
        let file = File::create(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(file);

        writer.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        let file = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        file.sync_all()?;

        tracing::debug!("Wrote {} rows to {:?}", sheet.rows.len(), path);
        written.push(path);
    }

    tracing::info!("Wrote {} sheets to {:?}", written.len(), dir);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{map_program_to_export_model, ExportOptions, ExportScope};
    use crate::planner::generate_program;
    use crate::types::*;
    use chrono::{TimeZone, Utc};

    fn export(options: &ExportOptions) -> ExportModel {
        let program = generate_program(&RawInputs {
            focus: Focus::Strength,
            mixed_bias: None,
            mesocycle_weeks: 4.0,
            level: Level::Beginner,
            sessions_per_week: 3.0,
            strength_profile: Some(StrengthProfile::Balanced),
        });
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        map_program_to_export_model(&program, options, Some(now))
    }

    #[test]
    fn test_full_detail_sheets() {
        let workbook = build_workbook(&export(&ExportOptions::default()));
        assert_eq!(
            workbook.sheet_names(),
            vec!["Overview", "Calendar", "Workouts", "Progression", "Sessions Tracker"]
        );

        let workouts = workbook.sheet(WORKOUTS_SHEET).unwrap();
        assert_eq!(workouts.headers.len(), WorkoutRow::HEADERS.len());
        assert!(workouts.rows.iter().all(|r| r.len() == workouts.headers.len()));
    }

    #[test]
    fn test_calendar_only_sheets() {
        let options = ExportOptions {
            detail: ExportDetail::CalendarOnly,
            ..ExportOptions::default()
        };
        let workbook = build_workbook(&export(&options));
        assert_eq!(workbook.sheet_names(), vec!["Overview", "Calendar", "Progression"]);
    }

    #[test]
    fn test_tracker_layout() {
        let model = export(&ExportOptions::default());
        let workbook = build_workbook(&model);
        let tracker = workbook.sheet(TRACKER_SHEET).unwrap();

        assert_eq!(tracker.headers, TRACKER_HEADERS.to_vec());
        assert_eq!(tracker.rows[0][0], "Week 1 - build (Effort: 2/5)");
        assert!(tracker.rows[1][0].starts_with("Mon - Balanced Strength A"));
        assert!(tracker.rows.iter().all(|r| r.len() == TRACKER_HEADERS.len()));

        // 4 weeks -> breaks before weeks 2, 3 and 4
        assert_eq!(tracker.page_breaks.len(), 3);
        for idx in &tracker.page_breaks {
            assert!(tracker.rows[*idx][0].starts_with("Week "));
        }

        let exercise = &tracker.rows[2];
        assert_eq!(exercise[0], "General warm-up + ramp-up sets");
        assert_eq!(&exercise[2..], &[String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_tracker_follows_selection() {
        let options = ExportOptions {
            scope: ExportScope::Selected,
            selected_weeks: Some(vec![3]),
            ..ExportOptions::default()
        };
        let workbook = build_workbook(&export(&options));
        let tracker = workbook.sheet(TRACKER_SHEET).unwrap();
        assert!(tracker.rows[0][0].starts_with("Week 3 - push"));
        assert!(tracker.page_breaks.is_empty());
    }

    #[test]
    fn test_sheet_slug() {
        let sheet = Sheet {
            name: TRACKER_SHEET.to_string(),
            ..Sheet::default()
        };
        assert_eq!(sheet.slug(), "sessions-tracker");
    }

    #[test]
    fn test_write_csv_sheets() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out_dir = temp_dir.path().join("export");
        let workbook = build_workbook(&export(&ExportOptions::default()));

        let written = write_csv_sheets(&workbook, &out_dir).unwrap();
        assert_eq!(written.len(), 5);
        assert!(out_dir.join("overview.csv").exists());
        assert!(out_dir.join("sessions-tracker.csv").exists());

        let mut reader = csv::Reader::from_path(out_dir.join("progression.csv")).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), ProgressionRow::HEADERS.len());
        assert_eq!(&headers[6], "Mixed Sessions");
        assert_eq!(reader.records().count(), 4);
    }
}
