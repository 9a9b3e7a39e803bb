mod error;
mod experiment;

use std::path::{Path, PathBuf};

use ak_core::{micropascal_seconds_of, relative_error};
use ak_gases::{Gas, gas_table, lookup, sutherland_viscosity};
use ak_kernel::{
    Analysis, AnalysisRequest, ApparatusGeometry, DiameterModel, analyze, evenly_spaced,
    ideal_samples,
};
use ak_results::{RunStore, build_record};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};
use crate::experiment::{DEFAULT_TEMPERATURE_K, ExperimentFile};

/// Viscosity error above which `verify` fails [%].
const VERIFY_LIMIT_PCT: f64 = 0.1;

#[derive(Parser)]
#[command(name = "ak-cli")]
#[command(about = "AeroKinetic CLI - Capillary viscometry analysis", long_about = None)]
struct Cli {
    /// Log kernel diagnostics (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the gases in the reference table
    Gases,
    /// Analyze a recorded pressure trace
    Analyze {
        /// Path to the experiment file (YAML, or an exported run JSON)
        experiment_path: PathBuf,
        /// Gas identifier (overrides the file)
        #[arg(long)]
        gas: Option<String>,
        /// Run temperature in kelvin (overrides the file)
        #[arg(long)]
        temperature: Option<f64>,
        /// Diameter model: kinetic or hard-sphere
        #[arg(long, default_value = "kinetic")]
        model: DiameterModel,
        /// Directory to export the run into
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Regenerate a noise-free reference run and check the analysis recovers it
    Verify {
        #[arg(long, default_value = "N2")]
        gas: String,
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE_K)]
        temperature: f64,
        /// Number of samples
        #[arg(long, default_value_t = 20)]
        points: usize,
        /// Run length in seconds
        #[arg(long, default_value_t = 300.0)]
        duration: f64,
        /// Initial reservoir pressure in pascal
        #[arg(long, default_value_t = 100_000.0)]
        initial_pressure: f64,
    },
    /// List exported runs for a gas
    Runs {
        /// Directory holding exported runs
        store_dir: PathBuf,
        /// Gas identifier
        gas: String,
    },
    /// Show an exported run
    ShowRun {
        /// Directory holding exported runs
        store_dir: PathBuf,
        /// Run ID (file name without extension)
        run_id: String,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Gases => cmd_gases(),
        Commands::Analyze {
            experiment_path,
            gas,
            temperature,
            model,
            export,
        } => cmd_analyze(
            &experiment_path,
            gas.as_deref(),
            temperature,
            model,
            export.as_deref(),
        ),
        Commands::Verify {
            gas,
            temperature,
            points,
            duration,
            initial_pressure,
        } => cmd_verify(&gas, temperature, points, duration, initial_pressure),
        Commands::Runs { store_dir, gas } => cmd_runs(&store_dir, &gas),
        Commands::ShowRun { store_dir, run_id } => cmd_show_run(&store_dir, &run_id),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cmd_gases() -> CliResult<()> {
    println!("Reference gases (viscosity at 298.15 K):");
    for props in gas_table() {
        println!(
            "  {:<4} {:<15} M = {:.4} g/mol  mu = {:.2} uPa.s  C = {:.0} K",
            props.key(),
            props.name,
            props.molar_mass * 1e3,
            micropascal_seconds_of(props.reference_viscosity_quantity()),
            props.sutherland_constant
        );
    }
    Ok(())
}

fn cmd_analyze(
    experiment_path: &Path,
    gas: Option<&str>,
    temperature: Option<f64>,
    model: DiameterModel,
    export: Option<&Path>,
) -> CliResult<()> {
    let experiment = ExperimentFile::load(experiment_path)?.resolve(gas, temperature)?;
    println!(
        "Analyzing {} flow data: {} samples at {:.2} K",
        experiment.gas.name,
        experiment.samples.len(),
        experiment.temperature_k
    );

    let request = AnalysisRequest::new(
        &experiment.samples,
        experiment.gas,
        experiment.temperature_k,
    )
    .with_geometry(experiment.geometry)
    .with_model(model);
    let analysis = analyze(&request)?;
    print_analysis(&analysis, model);

    let expected = sutherland_viscosity(experiment.gas, experiment.temperature_k)?;
    println!(
        "  Expected viscosity:   {:.2} uPa.s (Sutherland)",
        expected * 1e6
    );
    println!(
        "  Deviation:            {:.2}%",
        relative_error(analysis.result.viscosity, expected) * 100.0
    );

    if let Some(dir) = export {
        let store = RunStore::new(dir.to_path_buf())?;
        let record = build_record(&request, &analysis.result, chrono::Utc::now());
        let run_id = store.save_run(&record)?;
        info!(%run_id, dir = %dir.display(), "run exported");
        println!("✓ Exported run {} to {}", run_id, dir.display());
    }
    Ok(())
}

fn cmd_verify(
    gas: &str,
    temperature_k: f64,
    points: usize,
    duration: f64,
    initial_pressure: f64,
) -> CliResult<()> {
    let props = lookup(gas)?;
    let geometry = ApparatusGeometry::default();
    let expected = sutherland_viscosity(props, temperature_k)?;

    let times = evenly_spaced(duration, points)?;
    let samples = ideal_samples(&geometry, expected, initial_pressure, &times)?;
    println!(
        "Verifying {} at {:.2} K with {} noise-free samples",
        props.name, temperature_k, points
    );

    let request = AnalysisRequest::new(&samples, props, temperature_k).with_geometry(geometry);
    let analysis = analyze(&request)?;
    print_analysis(&analysis, request.model);

    let error_pct = relative_error(analysis.result.viscosity, expected) * 100.0;
    println!("  Reference viscosity:  {:.2} uPa.s", expected * 1e6);
    println!("  Error:                {:.4}%", error_pct);

    if error_pct < VERIFY_LIMIT_PCT {
        info!(gas = props.key(), error_pct, "verification passed");
        println!("✓ Verification successful");
        Ok(())
    } else {
        warn!(gas = props.key(), error_pct, limit_pct = VERIFY_LIMIT_PCT, "verification failed");
        Err(CliError::VerificationFailed {
            error_pct,
            limit_pct: VERIFY_LIMIT_PCT,
        })
    }
}

fn print_analysis(analysis: &Analysis, model: DiameterModel) {
    let result = &analysis.result;
    match result.r_squared_percent() {
        Some(pct) => println!("  Linear fit R^2:       {:.5} ({:.3}%)", result.r_squared, pct),
        None => println!("  Linear fit R^2:       undefined (constant pressure)"),
    }
    println!("  Slope (1/P vs t):     {:.4e} 1/(Pa.s)", analysis.fit.slope);
    println!(
        "  Viscosity:            {:.2} uPa.s",
        result.viscosity_micropascal_seconds()
    );
    println!(
        "  Molecular diameter:   {:.3} nm ({})",
        result.diameter_nanometres(),
        model.key()
    );
}

fn cmd_runs(store_dir: &Path, gas: &str) -> CliResult<()> {
    let key = lookup(gas)?.key();
    let store = RunStore::new(store_dir.to_path_buf())?;
    let runs = store.list_runs(key)?;

    if runs.is_empty() {
        println!("No exported runs found for gas: {}", key);
    } else {
        println!("Exported runs for '{}':", key);
        for run_id in runs {
            let record = store.load_run(&run_id)?;
            println!(
                "  {} ({}, {} uPa.s)",
                run_id, record.timestamp, record.calculated_results.viscosity_upa_s
            );
        }
    }
    Ok(())
}

fn cmd_show_run(store_dir: &Path, run_id: &str) -> CliResult<()> {
    let store = RunStore::new(store_dir.to_path_buf())?;
    let record = store.load_run(run_id)?;
    let gas: Gas = record.gas.parse()?;

    println!("Run {}", run_id);
    println!("  Recorded:     {}", record.timestamp);
    println!("  Gas:          {} ({})", gas.display_name(), gas.key());
    println!("  Temperature:  {:.2} K", record.temperature_k);
    println!(
        "  Apparatus:    V = {:e} m^3, L = {} m, R_CAP = {:e} m",
        record.apparatus_constants.reservoir_volume,
        record.apparatus_constants.capillary_length,
        record.apparatus_constants.capillary_radius
    );
    println!("  Samples:      {}", record.raw_data.len());
    println!(
        "  Viscosity:    {} uPa.s",
        record.calculated_results.viscosity_upa_s
    );
    println!("  Diameter:     {} nm", record.calculated_results.diameter_nm);
    match record.calculated_results.r_squared {
        Some(r2) => println!("  R^2:          {:.5}", r2),
        None => println!("  R^2:          undefined"),
    }
    Ok(())
}
