use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mesocycle_core::config::PlannerConfig;
use mesocycle_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mesocycle")]
#[command(about = "Deterministic mesocycle training program generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show recommended defaults for a level and focus
    Defaults {
        #[arg(long)]
        level: Option<Level>,

        #[arg(long)]
        focus: Option<Focus>,
    },

    /// Generate a mesocycle and print it
    Generate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Print the full program as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a mesocycle and export it
    Export {
        #[command(flatten)]
        plan: PlanArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Export only these weeks (comma separated, e.g. 1,2,5)
        #[arg(long = "select", value_delimiter = ',')]
        selected_weeks: Option<Vec<u32>>,

        /// calendar-only or full
        #[arg(long)]
        detail: Option<ExportDetail>,

        /// compact or detailed document layout
        #[arg(long)]
        pdf_mode: Option<PdfMode>,

        /// letter or a4
        #[arg(long)]
        paper: Option<PaperSize>,

        /// portrait, landscape or auto
        #[arg(long)]
        orientation: Option<Orientation>,

        #[arg(long)]
        grayscale: bool,

        #[arg(long)]
        ink_saver: bool,

        /// Leave the effort legend off the cover page
        #[arg(long)]
        no_legend: bool,

        /// Leave out the progression summary page
        #[arg(long)]
        no_chart: bool,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Export timestamp (RFC 3339), defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },
}

/// Planner inputs; unset values come from the config file, then from the
/// recommended defaults for the level and focus
#[derive(Args, Clone, Debug, Default)]
struct PlanArgs {
    #[arg(long)]
    focus: Option<Focus>,

    #[arg(long)]
    level: Option<Level>,

    /// Mesocycle length in weeks (4-12)
    #[arg(long = "weeks")]
    mesocycle_weeks: Option<f64>,

    /// Training sessions per week (2-6)
    #[arg(long)]
    sessions: Option<f64>,

    /// Endurance share in percent for mixed focus
    #[arg(long)]
    bias: Option<f64>,

    #[arg(long)]
    profile: Option<StrengthProfile>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    /// One CSV per workbook sheet
    Workbook,
    /// Paginated document render model as JSON
    Document,
}

fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}

fn main() -> Result<()> {
    mesocycle_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let errors = default_library().validate();
    if !errors.is_empty() {
        eprintln!("Template library validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid template library".into()));
    }

    match cli.command {
        Commands::Defaults { level, focus } => cmd_defaults(
            level.or(config.planner.level).unwrap_or_default(),
            focus.or(config.planner.focus).unwrap_or(Focus::Strength),
        ),
        Commands::Generate { plan, json } => cmd_generate(&plan, &config.planner, json),
        Commands::Export {
            plan,
            format,
            selected_weeks,
            detail,
            pdf_mode,
            paper,
            orientation,
            grayscale,
            ink_saver,
            no_legend,
            no_chart,
            out_dir,
            now,
        } => {
            let mut options = config.export.to_options();
            if let Some(weeks) = selected_weeks {
                options.scope = ExportScope::Selected;
                options.selected_weeks = Some(weeks);
            }
            options.detail = detail.unwrap_or(options.detail);
            options.pdf_mode = pdf_mode.unwrap_or(options.pdf_mode);
            options.paper_size = paper.unwrap_or(options.paper_size);
            options.orientation = orientation.unwrap_or(options.orientation);
            options.grayscale |= grayscale;
            options.ink_saver |= ink_saver;
            options.include_legend &= !no_legend;
            options.include_progression_chart &= !no_chart;

            let out_dir = out_dir.unwrap_or_else(|| config.export.output_dir.clone());
            cmd_export(&plan, &config.planner, format, &options, &out_dir, now)
        }
    }
}

/// Merge command-line inputs over config over recommended defaults
fn resolve_inputs(plan: &PlanArgs, planner: &PlannerConfig) -> RawInputs {
    let focus = plan.focus.or(planner.focus).unwrap_or(Focus::Strength);
    let level = plan.level.or(planner.level).unwrap_or_default();
    let defaults = recommended_defaults(level, focus);

    RawInputs {
        focus,
        mixed_bias: plan
            .bias
            .or(planner.mixed_bias.map(f64::from))
            .or(defaults.mixed_bias.map(f64::from)),
        mesocycle_weeks: plan
            .mesocycle_weeks
            .or(planner.weeks.map(f64::from))
            .unwrap_or(f64::from(defaults.mesocycle_weeks)),
        level,
        sessions_per_week: plan
            .sessions
            .or(planner.sessions.map(f64::from))
            .unwrap_or(f64::from(defaults.sessions_per_week)),
        strength_profile: plan.profile.or(planner.profile),
    }
}

fn cmd_defaults(level: Level, focus: Focus) -> Result<()> {
    let defaults = recommended_defaults(level, focus);

    println!("Recommended defaults ({} / {})", level, focus);
    println!("  Mesocycle length: {} weeks", defaults.mesocycle_weeks);
    println!("  Sessions / week:  {}", defaults.sessions_per_week);
    if let Some(bias) = defaults.mixed_bias {
        println!("  Mixed bias:       {}% endurance", bias);
    }

    Ok(())
}

fn cmd_generate(plan: &PlanArgs, planner: &PlannerConfig, json: bool) -> Result<()> {
    let program = generate_program(&resolve_inputs(plan, planner));

    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(());
    }

    display_program(&program);
    Ok(())
}

fn cmd_export(
    plan: &PlanArgs,
    planner: &PlannerConfig,
    format: ExportFormat,
    options: &ExportOptions,
    out_dir: &Path,
    now: Option<DateTime<Utc>>,
) -> Result<()> {
    let inputs = resolve_inputs(plan, planner);
    tracing::debug!(
        ?inputs,
        ?format,
        ?options,
        out_dir = %out_dir.display(),
        "Resolved export request"
    );

    let program = generate_program(&inputs);
    let weeks = validate_selection(&program, options)?;
    let model = map_program_to_export_model(&program, options, now);

    match format {
        ExportFormat::Workbook => {
            let file_name = export_file_name(&program.inputs, model.exported_at, "xlsx");
            let dir = out_dir.join(Path::new(&file_name).with_extension(""));
            let workbook = build_workbook(&model);
            let written = write_csv_sheets(&workbook, &dir)?;

            println!("✓ Exported {} weeks as {} sheets", weeks.len(), written.len());
            for path in written {
                println!("  {}", path.display());
            }
        }
        ExportFormat::Document => {
            let render = build_render_model(&model, &RenderOptions::from(options));
            let path = out_dir.join(export_file_name(&program.inputs, model.exported_at, "json"));
            std::fs::create_dir_all(out_dir)?;
            std::fs::write(&path, serde_json::to_string_pretty(&render)?)?;

            println!(
                "✓ Exported {} weeks as a {}-page document",
                weeks.len(),
                render.pages.len()
            );
            println!("  {}", path.display());
        }
    }

    Ok(())
}

fn display_program(program: &ProgramOutput) {
    let inputs = &program.inputs;

    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {}-WEEK {} MESOCYCLE",
        inputs.mesocycle_weeks,
        inputs.focus.as_str().to_uppercase()
    );
    println!("╰─────────────────────────────────────────╯");
    println!(
        "  {} | {} | {} sessions/week",
        inputs.level,
        inputs.strength_profile.display_name(),
        inputs.sessions_per_week
    );
    if let Some(bias) = inputs.mixed_bias {
        println!("  Mixed bias: {}% endurance", bias);
    }

    for week in &program.weeks {
        println!();
        println!(
            "Week {} ({}) - {} sessions, avg effort {:.1}",
            week.week_index, week.objective, week.planned_session_count, week.summary.avg_effort
        );
        for (day, workout) in week.workout_days() {
            println!(
                "  {}  {:<9} {}  [effort {}]",
                day.date_label,
                day.session_type.as_str(),
                workout.title,
                day.effort
            );
            if let Some(item) = workout.main_item() {
                println!("       → {}: {}", item.name, item.prescription);
            }
        }
    }

    println!();
}
