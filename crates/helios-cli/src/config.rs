//! TOML configuration deserialisation for sweep jobs.

use helios_core::current::CurrentParams;
use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub sweep: SweepConfig,
    #[serde(default)]
    pub current: CurrentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sweep parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    pub wavelengths: WavelengthSpec,
    /// Intensity fraction in [0, 1]. Default: 1.0.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Material symbol (e.g. "Cs"), resolved against the catalog.
    pub material: String,
    /// Path to a catalog JSON file. The embedded table is used when absent.
    pub catalog: Option<String>,
}

fn default_intensity() -> f64 {
    1.0
}

/// Wavelength specification: either a range or explicit list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WavelengthSpec {
    Range {
        range: [f64; 2],
        points: usize,
    },
    List {
        values: Vec<f64>,
    },
}

/// Ampere-conversion parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct CurrentConfig {
    /// Optical power (W) at a current fraction of 1.0 (default: 1 mW).
    #[serde(default = "default_max_power_w")]
    pub max_power_w: f64,
    /// Electrons per absorbed photon (default: 1.0).
    #[serde(default = "default_quantum_efficiency")]
    pub quantum_efficiency: f64,
}

impl CurrentConfig {
    pub fn to_params(&self) -> CurrentParams {
        CurrentParams {
            max_power_w: self.max_power_w,
            quantum_efficiency: self.quantum_efficiency,
        }
    }
}

impl Default for CurrentConfig {
    fn default() -> Self {
        Self {
            max_power_w: default_max_power_w(),
            quantum_efficiency: default_quantum_efficiency(),
        }
    }
}

fn default_max_power_w() -> f64 {
    1e-3
}
fn default_quantum_efficiency() -> f64 {
    1.0
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the sweep as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save the sweep as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
