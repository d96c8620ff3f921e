//! Helios command-line interface.
//!
//! Interactive question/answer session or batch sweeps from TOML job files:
//! ```sh
//! helios-cli interactive
//! helios-cli run sweep.toml
//! helios-cli validate sweep.toml
//! helios-cli materials
//! ```

mod config;
mod interactive;
mod runner;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "helios-cli")]
#[command(about = "Helios: Photoelectric Effect Simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Question/answer session in the terminal (the default mode).
    Interactive {
        /// Material catalog JSON file (embedded table when omitted).
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Run a wavelength sweep from a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file without running the sweep.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display the material work-function catalog.
    Materials {
        /// Material catalog JSON file (embedded table when omitted).
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive { catalog: None }) {
        Commands::Interactive { catalog } => interactive::run_session(catalog.as_deref()),
        Commands::Run { config, output } => {
            println!("Helios Photoelectric Simulator");
            println!("==============================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let result = runner::run_sweep(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            // CSV sweep table (default on)
            if job.output.save_csv {
                let csv_path = out_dir.join("sweep.csv");
                runner::write_sweep_csv(&result, &csv_path, &job)?;
            }

            // JSON sweep table (optional)
            if job.output.save_json {
                let json_path = out_dir.join("sweep.json");
                runner::write_sweep_json(&result.rows, &json_path)?;
            }

            println!("Sweep complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let catalog = runner::resolve_catalog(job.sweep.catalog.as_deref().map(Path::new))?;
            runner::validate_job(&job, &catalog)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Materials { catalog } => {
            let catalog = runner::resolve_catalog(catalog.as_deref())?;
            println!("Available materials:");
            println!();
            for material in catalog.sorted_materials() {
                println!(
                    "  {:<3} {:<12} Φ = {:.2} eV",
                    material.symbol, material.name, material.work_function_ev
                );
            }
            Ok(())
        }
    }
}
