use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use training_core::config::OutputFormat;
use training_core::dispatch::workout_kinds;
use training_core::*;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print a report for each package (default)
    Report {
        /// Package as CODE:v1,v2,... (repeatable; replaces configured packages)
        #[arg(short, long = "package", value_name = "PACKAGE")]
        packages: Vec<SensorPackage>,

        /// Print reports as JSON lines
        #[arg(long)]
        json: bool,

        /// Skip packages that fail to dispatch instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// List known workout codes and their fields
    Types,
}

fn main() -> ExitCode {
    // Reports own stdout; keep logging quiet unless asked
    training_core::logging::init_with_level("warn");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Report {
            packages,
            json,
            keep_going,
        }) => cmd_report(packages, json, keep_going, &config),
        Some(Commands::Types) => {
            cmd_types();
            Ok(())
        }
        None => cmd_report(Vec::new(), false, false, &config),
    }
}

fn cmd_report(
    packages: Vec<SensorPackage>,
    json: bool,
    keep_going: bool,
    config: &Config,
) -> Result<()> {
    let packages = if packages.is_empty() {
        config.packages_or_samples()
    } else {
        packages
    };

    let policy = if keep_going {
        ErrorPolicy::Skip
    } else {
        config.batch.on_error
    };
    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    tracing::debug!(
        "Reporting {} packages (policy {:?}, format {:?})",
        packages.len(),
        policy,
        format
    );
    let outcome = run_batch(&packages, policy)?;

    for report in &outcome.reports {
        match format {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
        }
    }

    for (index, error) in &outcome.failures {
        eprintln!("Skipped package #{} ({}): {}", index, packages[*index], error);
    }

    Ok(())
}

fn cmd_types() {
    for kind in workout_kinds() {
        println!(
            "{}  {:<14} {}",
            kind.code,
            kind.name,
            kind.fields.join(", ")
        );
    }
}
