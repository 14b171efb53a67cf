use aw_app::{AppResult, CurveVariable, RunOptions, RunRequest, project_service, query, run_service};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "aw-cli")]
#[command(about = "abwave CLI - alpha/beta-wave flow split for horizontal gravel packs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
    },
    /// List cases in a project
    Cases {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
    },
    /// Solve every model and dune-height ratio of a case
    Run {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
        /// Case ID to solve
        case_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a case
    Runs {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
        /// Case ID to list runs for
        case_id: String,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export one model's curve from a run as CSV
    ExportCurve {
        /// Path to the project file (YAML or JSON)
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Transport model (e.g. Oroskar, "SGS alt", Hang)
        model: String,
        /// Variable name (e.g. pump_rate, beta_dp, transport_velocity)
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Cases { project_path } => cmd_cases(&project_path),
        Commands::Run {
            project_path,
            case_id,
            no_cache,
        } => cmd_run(&project_path, &case_id, !no_cache),
        Commands::Runs {
            project_path,
            case_id,
        } => cmd_runs(&project_path, &case_id),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::ExportCurve {
            project_path,
            run_id,
            model,
            variable,
            output,
        } => cmd_export_curve(&project_path, &run_id, &model, &variable, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_cases(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let cases = project_service::list_cases(&project);

    if cases.is_empty() {
        println!("No cases found in project");
    } else {
        println!("Cases in project:");
        for case in cases {
            println!(
                "  {} - {} ({} ratios, {:.2} ppa; models: {})",
                case.id,
                case.name,
                case.ratio_count,
                case.loading_ppa,
                case.models.join(", ")
            );
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, case_id: &str, use_cache: bool) -> AppResult<()> {
    println!("Solving case: {}", case_id);

    let request = RunRequest {
        project_path,
        case_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Run completed: {}", response.run_id);
    }
    debug!(elapsed_s = response.elapsed_s, "run finished");

    println!();
    println!(
        "{:<18} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}  {}",
        "model", "h/D", "v_t ft/s", "q_oh", "q_ws", "q_pump", "dp_oh", "dp_beta", "dp_wp", "status"
    );
    for record in &response.records {
        let r = &record.result;
        println!(
            "{:<18} {:>6.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.2} {:>9.2} {:>9.2}  {}",
            record.model,
            record.dune_height_ratio,
            r.transport_velocity,
            r.openhole_rate,
            r.washpipe_screen_rate,
            r.pump_rate,
            r.openhole_dp,
            r.beta_dp,
            r.washpipe_dp,
            r.status
        );
    }

    if response.manifest.non_converged > 0 {
        println!(
            "\n{} of {} points did not converge",
            response.manifest.non_converged, response.manifest.point_count
        );
    }
    Ok(())
}

fn cmd_runs(project_path: &Path, case_id: &str) -> AppResult<()> {
    let runs = run_service::list_runs(project_path, case_id)?;

    if runs.is_empty() {
        println!("No cached runs found for case: {}", case_id);
    } else {
        println!("Cached runs for case '{}':", case_id);
        for manifest in runs {
            println!(
                "  {} ({}, solver {})",
                manifest.run_id, manifest.timestamp, manifest.solver_version
            );
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, records) = run_service::load_run(project_path, run_id)?;
    let summary = query::get_run_summary(&records)?;

    println!("\nRun Summary:");
    println!("  Case: {} ({})", manifest.case_name, manifest.case_id);
    println!("  Created: {}", manifest.timestamp);
    println!("  Points: {}", summary.point_count);
    println!(
        "  Dune-height ratios: {:.3} - {:.3}",
        summary.ratio_range.0, summary.ratio_range.1
    );
    println!("  Not converged: {}", summary.non_converged);

    println!("\nModels:");
    for model in summary.models {
        println!("  {}", model);
    }

    println!("\nVariables:");
    for variable in CurveVariable::ALL {
        println!("  {}", variable);
    }

    Ok(())
}

fn cmd_export_curve(
    project_path: &Path,
    run_id: &str,
    model: &str,
    variable: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let variable: CurveVariable = variable.parse()?;
    let (_manifest, records) = run_service::load_run(project_path, run_id)?;
    let series = query::extract_curve(&records, model, variable)?;
    let csv = query::curve_to_csv(variable, &series);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
