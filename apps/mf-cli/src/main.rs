mod config;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use config::{CliConfig, FrictionOverrides};
use error::CliResult;
use mf_chart::{ReynoldsGrid, operating_point, tabulate};
use mf_core::units::{kgpm3, m, mps, pas};
use mf_friction::{
    Estimate, FrictionSettings, Method, PipeSection, checked_factor_to_roughness,
    checked_roughness_to_factor, factor_to_roughness, friction_factor_with, roughness_to_factor,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "MoodyFlow CLI - Darcy friction factors and Moody chart data", long_about = None)]
struct Cli {
    /// Optional YAML config with `friction` and `chart` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
struct SolverArgs {
    /// Colebrook convergence tolerance
    #[arg(long)]
    tolerance: Option<f64>,
    /// Colebrook iteration ceiling
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Laminar/turbulent transition Reynolds number
    #[arg(long)]
    threshold: Option<f64>,
}

impl From<SolverArgs> for FrictionOverrides {
    fn from(a: SolverArgs) -> Self {
        FrictionOverrides {
            tolerance: a.tolerance,
            max_iterations: a.max_iterations,
            transition_reynolds: a.threshold,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the friction factor for one (Re, e/D) pair
    Factor {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Relative roughness e/D
        #[arg(long, default_value_t = 0.0)]
        rr: f64,
        /// Correlation: colebrook, haaland, laminar or auto
        #[arg(long, default_value_t = Method::Auto)]
        method: Method,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Tabulate the full Moody chart
    Chart {
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Highlighted curve and guide lines for one operating point
    Point {
        #[arg(long)]
        re: f64,
        #[arg(long, default_value_t = 0.0)]
        rr: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Convert between e/D and friction factor in the fully rough limit
    #[command(subcommand)]
    Convert(ConvertCommands),
    /// Darcy-Weisbach pressure drop for a straight pipe (SI units)
    Pipe {
        /// Length (m)
        #[arg(long)]
        length: f64,
        /// Inner diameter (m)
        #[arg(long)]
        diameter: f64,
        /// Absolute wall roughness (m)
        #[arg(long, default_value_t = 0.0)]
        roughness: f64,
        /// Sum of minor loss coefficients
        #[arg(long, default_value_t = 0.0)]
        k_minor: f64,
        /// Density (kg/m³)
        #[arg(long)]
        density: f64,
        /// Mean velocity (m/s)
        #[arg(long)]
        velocity: f64,
        /// Dynamic viscosity (Pa·s)
        #[arg(long)]
        viscosity: f64,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Subcommand)]
enum ConvertCommands {
    /// Relative roughness -> friction factor
    RoughnessToFactor {
        value: f64,
        /// Fail instead of returning the smooth-pipe sentinel
        #[arg(long)]
        strict: bool,
    },
    /// Friction factor -> relative roughness
    FactorToRoughness {
        value: f64,
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Factor {
            re,
            rr,
            method,
            json,
            solver,
        } => cmd_factor(&config, re, rr, method, json, solver),
        Commands::Chart {
            format,
            output,
            solver,
        } => cmd_chart(&config, format, output.as_deref(), solver),
        Commands::Point {
            re,
            rr,
            format,
            output,
            solver,
        } => cmd_point(&config, re, rr, format, output.as_deref(), solver),
        Commands::Convert(conv) => cmd_convert(conv),
        Commands::Pipe {
            length,
            diameter,
            roughness,
            k_minor,
            density,
            velocity,
            viscosity,
            solver,
        } => {
            let settings = config.friction_with(solver.into())?;
            let pipe = PipeSection::new(m(length), m(diameter), m(roughness), k_minor);
            cmd_pipe(&pipe, density, velocity, viscosity, &settings)
        }
    }
}

fn report(estimate: &Estimate) {
    if let Some(diag) = &estimate.diagnostic {
        warn!("{diag}");
    }
}

fn cmd_factor(
    config: &CliConfig,
    re: f64,
    rr: f64,
    method: Method,
    json: bool,
    solver: SolverArgs,
) -> CliResult<()> {
    let settings = config.friction_with(solver.into())?;

    let (regime, estimate) = if method == Method::Auto {
        let r = friction_factor_with(re, rr, &settings)?;
        (Some(r.regime), r.estimate)
    } else {
        (None, method.correlation(&settings).estimate(re, rr)?)
    };
    report(&estimate);

    if json {
        let out = serde_json::json!({
            "method": method,
            "reynolds": re,
            "relative_roughness": rr,
            "regime": regime,
            "friction_factor": estimate.factor,
            "diagnostic": estimate.diagnostic,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match regime {
            Some(regime) => println!("f = {:.6} ({method}, {regime:?})", estimate.factor),
            None => println!("f = {:.6} ({method})", estimate.factor),
        }
    }
    Ok(())
}

fn write_output(body: &str, output: Option<&Path>, what: &str) -> CliResult<()> {
    if let Some(path) = output {
        std::fs::write(path, body)?;
        info!("exported {what} to {}", path.display());
    } else {
        print!("{body}");
    }
    Ok(())
}

fn cmd_chart(
    config: &CliConfig,
    format: OutputFormat,
    output: Option<&Path>,
    solver: SolverArgs,
) -> CliResult<()> {
    let settings = config.friction_with(solver.into())?;
    let chart = tabulate(&config.chart, &settings)?;

    let flagged: usize = chart.turbulent.iter().map(|c| c.flagged_points).sum();
    if flagged > 0 {
        warn!("{flagged} chart points hit the iteration budget; values may be inaccurate");
    }

    let body = match format {
        OutputFormat::Csv => chart.to_csv(),
        OutputFormat::Json => chart.to_json()?,
    };
    write_output(&body, output, "Moody chart")
}

fn cmd_point(
    config: &CliConfig,
    re: f64,
    rr: f64,
    format: OutputFormat,
    output: Option<&Path>,
    solver: SolverArgs,
) -> CliResult<()> {
    let settings = config.friction_with(solver.into())?;
    let grid = ReynoldsGrid::from_settings(&config.chart)?;
    let overlay = operating_point(re, rr, &grid, &settings)?;
    if let Some(diag) = &overlay.diagnostic {
        warn!("{diag}");
    }

    let body = match format {
        OutputFormat::Csv => overlay.to_csv(),
        OutputFormat::Json => overlay.to_json()?,
    };
    write_output(&body, output, "operating point")
}

fn cmd_convert(conv: ConvertCommands) -> CliResult<()> {
    match conv {
        ConvertCommands::RoughnessToFactor { value, strict } => {
            let f = if strict {
                checked_roughness_to_factor(value)?
            } else {
                roughness_to_factor(value)
            };
            println!("{f}");
        }
        ConvertCommands::FactorToRoughness { value, strict } => {
            let rr = if strict {
                checked_factor_to_roughness(value)?
            } else {
                factor_to_roughness(value)
            };
            println!("{rr}");
        }
    }
    Ok(())
}

fn cmd_pipe(
    pipe: &PipeSection,
    density: f64,
    velocity: f64,
    viscosity: f64,
    settings: &FrictionSettings,
) -> CliResult<()> {
    let flow = pipe.evaluate(kgpm3(density), mps(velocity), pas(viscosity), settings)?;

    println!("Re     = {:.1}", flow.reynolds);
    println!("e/D    = {:.3e}", flow.relative_roughness);
    match &flow.friction {
        Some(friction) => {
            report(&friction.estimate);
            println!(
                "f      = {:.6} ({:?})",
                friction.estimate.factor, friction.regime
            );
        }
        None => println!("f      = - (no flow)"),
    }
    println!("dp     = {:.3} Pa", flow.pressure_drop.value);
    Ok(())
}
