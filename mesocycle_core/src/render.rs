//! Paginated document render model.
//!
//! Builds a page-by-page description of a printable program: cover, one
//! overview page per week, optional per-session checklists and a progression
//! summary. The model is plain data; turning it into PDF bytes is left to a
//! serializer outside this crate.

use crate::export::{
    ExportDetail, ExportModel, ExportOptions, OverviewRow, Orientation, PaperSize, PdfMode,
    ProgressionRow,
};
use crate::types::*;
use serde::{Deserialize, Serialize};

const COVER_TITLE: &str = "Mesocycle Program";

/// Layout options for the document builder
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: PdfMode,
    pub detail: ExportDetail,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub grayscale: bool,
    pub ink_saver: bool,
    pub include_legend: bool,
    pub include_progression_chart: bool,
}

impl From<&ExportOptions> for RenderOptions {
    fn from(options: &ExportOptions) -> Self {
        Self {
            mode: options.pdf_mode,
            detail: options.detail,
            paper_size: options.paper_size,
            orientation: options.orientation,
            grayscale: options.grayscale,
            ink_saver: options.ink_saver,
            include_legend: options.include_legend,
            include_progression_chart: options.include_progression_chart,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&ExportOptions::default())
    }
}

/// Page dimensions in PostScript points
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

impl PageSize {
    /// Dimensions for a paper size; landscape swaps width and height
    pub fn for_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (width, height) = match paper {
            PaperSize::Letter => (612, 792),
            PaperSize::A4 => (595, 842),
        };
        match orientation {
            Orientation::Landscape => PageSize {
                width: height,
                height: width,
            },
            Orientation::Portrait | Orientation::Auto => PageSize { width, height },
        }
    }
}

/// Resolve `auto` orientation: compact layouts print landscape, detailed
/// layouts portrait. Explicit orientations are returned unchanged.
pub fn resolve_orientation(mode: PdfMode, orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::Portrait | Orientation::Landscape => orientation,
        Orientation::Auto => match mode {
            PdfMode::Compact => Orientation::Landscape,
            PdfMode::Detailed => Orientation::Portrait,
        },
    }
}

/// Colors used by the serializer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderTheme {
    /// Solid fill behind table headers; `None` prints outlines only
    pub header_fill: Option<String>,
    pub header_text: String,
    /// Cell fill for effort 1..=5
    pub effort_fills: [String; 5],
}

const COLOR_EFFORT_FILLS: [&str; 5] = ["#E8F5E9", "#C8E6C9", "#FFF59D", "#FFCC80", "#EF9A9A"];
const GRAY_EFFORT_FILLS: [&str; 5] = ["#F7F7F7", "#E6E6E6", "#CCCCCC", "#B3B3B3", "#999999"];

impl RenderTheme {
    pub fn for_options(grayscale: bool, ink_saver: bool) -> Self {
        let fills = if grayscale {
            GRAY_EFFORT_FILLS
        } else {
            COLOR_EFFORT_FILLS
        };

        let (header_fill, header_text) = match (ink_saver, grayscale) {
            (true, _) => (None, "#000000"),
            (false, true) => (Some("#404040"), "#FFFFFF"),
            (false, false) => (Some("#1F4E79"), "#FFFFFF"),
        };

        RenderTheme {
            header_fill: header_fill.map(str::to_string),
            header_text: header_text.to_string(),
            effort_fills: fills.map(str::to_string),
        }
    }

    /// Fill for an effort rating, clamped into 1..=5
    pub fn effort_fill(&self, effort: u8) -> &str {
        let idx = usize::from(effort.clamp(1, 5)) - 1;
        &self.effort_fills[idx]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub fill: String,
}

/// One weekday cell on a week overview page
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayCell {
    pub label: String,
    pub title: String,
    pub session_type: SessionType,
    pub effort: u8,
    /// Prescription of the session's headline item
    pub main_prescription: Option<String>,
    pub fill: String,
}

/// A checklist line on a session detail page
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistRow {
    pub block: String,
    pub slot: String,
    pub exercise: String,
    pub prescription: String,
    pub flags: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartBar {
    pub week: u32,
    pub avg_effort: f64,
    /// Bar length as a fraction of the full scale (avg / 5)
    pub ratio: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Cover {
        overview: Vec<OverviewRow>,
        usage_notes: Vec<String>,
        legend: Option<Vec<LegendEntry>>,
    },
    WeekOverview {
        week: u32,
        objective: WeekObjective,
        days: Vec<DayCell>,
    },
    SessionDetail {
        week: u32,
        day_label: String,
        effort: u8,
        checklist: Vec<ChecklistRow>,
    },
    ProgressionSummary {
        rows: Vec<ProgressionRow>,
        chart: Vec<ChartBar>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderPage {
    pub title: String,
    pub subtitle: Option<String>,
    /// `None` on the cover, 1-based on every following page
    pub page_number: Option<u32>,
    pub content: PageContent,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderModel {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub page_size: PageSize,
    pub theme: RenderTheme,
    /// Number of numbered pages (everything after the cover)
    pub page_count: u32,
    pub pages: Vec<RenderPage>,
}

/// Build the document render model for an export
pub fn build_render_model(model: &ExportModel, options: &RenderOptions) -> RenderModel {
    let orientation = resolve_orientation(options.mode, options.orientation);
    let theme = RenderTheme::for_options(options.grayscale, options.ink_saver);

    let mut pages = vec![cover_page(model, options, &theme)];

    pages.extend(model.filtered_weeks.iter().map(|week| week_page(week, &theme)));

    // A calendar-only model carries no workout rows; never print sessions for it
    let full_detail =
        options.detail == ExportDetail::Full && model.options.detail == ExportDetail::Full;
    if options.mode == PdfMode::Detailed && full_detail {
        for week in &model.filtered_weeks {
            pages.extend(
                week.workout_days()
                    .map(|(day, workout)| session_page(week, day, workout)),
            );
        }
    }

    if options.include_progression_chart {
        pages.push(progression_page(&model.progression_rows));
    }

    let page_count = pages.len() as u32 - 1;
    for (idx, page) in pages.iter_mut().enumerate().skip(1) {
        page.page_number = Some(idx as u32);
    }

    tracing::debug!(
        "Built {} document pages ({}, {} {})",
        pages.len(),
        options.mode,
        options.paper_size,
        orientation
    );

    RenderModel {
        paper_size: options.paper_size,
        orientation,
        page_size: PageSize::for_paper(options.paper_size, orientation),
        theme,
        page_count,
        pages,
    }
}

fn cover_page(model: &ExportModel, options: &RenderOptions, theme: &RenderTheme) -> RenderPage {
    let inputs = &model.program.inputs;

    let usage_notes = vec![
        "Effort is rated 1 (easy) to 5 (hardest) for each day.".to_string(),
        "Strength work is written as sets x reps @ reps in reserve (RIR).".to_string(),
        "Lower-body lifts marked cardio-collision-adjusted are reduced next to hard cardio."
            .to_string(),
        "Deload and taper weeks drop one session; keep them easy.".to_string(),
    ];

    let legend = options.include_legend.then(|| {
        (1..=5u8)
            .map(|effort| LegendEntry {
                label: format!("Effort {}/5", effort),
                fill: theme.effort_fill(effort).to_string(),
            })
            .collect()
    });

    RenderPage {
        title: COVER_TITLE.to_string(),
        subtitle: Some(format!(
            "{} | {} | {}",
            inputs.focus, inputs.level, inputs.strength_profile
        )),
        page_number: None,
        content: PageContent::Cover {
            overview: model.overview.clone(),
            usage_notes,
            legend,
        },
    }
}

fn week_page(week: &WeekPlan, theme: &RenderTheme) -> RenderPage {
    let days = week
        .days
        .iter()
        .map(|day| DayCell {
            label: day.date_label.clone(),
            title: day
                .workout
                .as_ref()
                .map(|w| w.title.clone())
                .unwrap_or_else(|| day.session_type.to_string()),
            session_type: day.session_type,
            effort: day.effort,
            main_prescription: day
                .workout
                .as_ref()
                .and_then(|w| w.main_item())
                .map(|item| item.prescription.clone()),
            fill: theme.effort_fill(day.effort).to_string(),
        })
        .collect();

    RenderPage {
        title: format!("Week {} Calendar", week.week_index),
        subtitle: Some(format!("Objective: {}", week.objective)),
        page_number: None,
        content: PageContent::WeekOverview {
            week: week.week_index,
            objective: week.objective,
            days,
        },
    }
}

fn session_page(week: &WeekPlan, day: &DayPlan, workout: &WorkoutSession) -> RenderPage {
    let checklist = workout
        .items()
        .map(|(block, item)| ChecklistRow {
            block: block.title.clone(),
            slot: item.slot.clone(),
            exercise: item.name.clone(),
            prescription: item.prescription.clone(),
            flags: item.flags.clone(),
        })
        .collect();

    RenderPage {
        title: format!("Week {} {}", week.week_index, day.date_label),
        subtitle: Some(workout.title.clone()),
        page_number: None,
        content: PageContent::SessionDetail {
            week: week.week_index,
            day_label: day.date_label.clone(),
            effort: day.effort,
            checklist,
        },
    }
}

fn progression_page(rows: &[ProgressionRow]) -> RenderPage {
    let chart = rows
        .iter()
        .map(|row| ChartBar {
            week: row.week,
            avg_effort: row.avg_effort,
            ratio: (row.avg_effort / 5.0).clamp(0.0, 1.0),
        })
        .collect();

    RenderPage {
        title: "Progression Summary".to_string(),
        subtitle: Some("Average effort by week".to_string()),
        page_number: None,
        content: PageContent::ProgressionSummary {
            rows: rows.to_vec(),
            chart,
        },
    }
}
