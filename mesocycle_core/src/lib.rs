#![forbid(unsafe_code)]

//! Core domain model and business logic for the mesocycle planner.
//!
//! This crate provides:
//! - Domain types (inputs, weeks, days, workouts)
//! - The exercise and endurance template library
//! - The deterministic mesocycle generator
//! - Export mapping into flat rows, workbook sheets and a document render model
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod prescription;
pub mod session;
pub mod planner;
pub mod export;
pub mod render;
pub mod workbook;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{default_library, TemplateLibrary};
pub use config::Config;
pub use planner::{generate_program, normalize_inputs, recommended_defaults};
pub use export::{
    export_file_name, map_program_to_export_model, validate_selection, ExportDetail,
    ExportModel, ExportOptions, ExportScope, Orientation, PaperSize, PdfMode,
};
pub use render::{build_render_model, RenderModel, RenderOptions};
pub use workbook::{build_workbook, write_csv_sheets, Workbook};
