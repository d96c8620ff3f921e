//! Sweep runner: ties together the catalog, the job configuration, and the
//! engine.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use helios_core::pipeline;
use helios_core::types::{ComputationInput, ComputationResult};
use helios_materials::{Material, MaterialCatalog};

use crate::config::{JobConfig, WavelengthSpec};

/// Results from one sweep run.
pub struct SweepOutput {
    pub material: Material,
    pub rows: Vec<SweepRow>,
}

/// One evaluated wavelength.
#[derive(Debug, Serialize)]
pub struct SweepRow {
    pub wavelength_nm: f64,
    #[serde(flatten)]
    pub result: ComputationResult,
}

/// Load the catalog named by the job, or the embedded table when absent.
///
/// A load failure is fatal to the caller: there is no fallback to an empty
/// catalog.
pub fn resolve_catalog(path: Option<&Path>) -> Result<MaterialCatalog> {
    match path {
        Some(path) => MaterialCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => MaterialCatalog::embedded().context("embedded catalog failed to load"),
    }
}

/// Semantic validation of a parsed job. Returns the resolved material.
///
/// Every check here runs before the engine sees a single value; the engine
/// itself never validates.
pub fn validate_job(job: &JobConfig, catalog: &MaterialCatalog) -> Result<Material> {
    if !(0.0..=1.0).contains(&job.sweep.intensity) {
        anyhow::bail!(
            "intensity must be a fraction in [0, 1], got {}",
            job.sweep.intensity
        );
    }
    if !(job.current.max_power_w > 0.0) {
        anyhow::bail!("max_power_w must be positive, got {}", job.current.max_power_w);
    }
    if !(job.current.quantum_efficiency >= 0.0) {
        anyhow::bail!(
            "quantum_efficiency must be non-negative, got {}",
            job.current.quantum_efficiency
        );
    }
    wavelength_grid(&job.sweep.wavelengths)?;

    let material = catalog
        .get(&job.sweep.material)
        .with_context(|| format!("material '{}' is not in the catalog", job.sweep.material))?;
    Ok(material.clone())
}

/// Build the wavelength grid for a sweep.
pub fn wavelength_grid(spec: &WavelengthSpec) -> Result<Vec<f64>> {
    let grid = match spec {
        WavelengthSpec::Range { range, points } => {
            if *points == 0 {
                anyhow::bail!("a range sweep needs at least one point");
            }
            let start = range[0];
            let end = range[1];
            (0..*points)
                .map(|i| start + (end - start) * i as f64 / (*points - 1).max(1) as f64)
                .collect::<Vec<_>>()
        }
        WavelengthSpec::List { values } => values.clone(),
    };

    if grid.is_empty() {
        anyhow::bail!("no wavelengths to sweep");
    }
    if let Some(bad) = grid.iter().find(|wl| !(**wl > 0.0)) {
        anyhow::bail!("wavelengths must be positive, got {}", bad);
    }
    Ok(grid)
}

/// Run a full sweep from a parsed job configuration.
pub fn run_sweep(job: &JobConfig) -> Result<SweepOutput> {
    let catalog = resolve_catalog(job.sweep.catalog.as_deref().map(Path::new))?;
    let material = validate_job(job, &catalog)?;
    let wavelengths = wavelength_grid(&job.sweep.wavelengths)?;
    let params = job.current.to_params();

    println!(
        "  Sweep: {} ({}), Φ={} eV, intensity={:.0}%, {} wavelengths",
        material.name,
        material.symbol,
        material.work_function_ev,
        job.sweep.intensity * 100.0,
        wavelengths.len()
    );

    let mut rows = Vec::with_capacity(wavelengths.len());
    for (wi, &wavelength_nm) in wavelengths.iter().enumerate() {
        let input = ComputationInput {
            wavelength_nm,
            intensity_fraction: job.sweep.intensity,
            material: material.clone(),
        };
        let result = pipeline::evaluate(&input, &params);

        if (wi + 1) % 10 == 0 || wi == 0 || wi == wavelengths.len() - 1 {
            match result.current_amperes {
                Some(amperes) => println!(
                    "  [{}/{}] λ={:.1} nm: E={:.3} eV, k={:.3} eV, I={:.3e} A",
                    wi + 1,
                    wavelengths.len(),
                    wavelength_nm,
                    result.photon_energy_ev,
                    result.kinetic_energy_ev,
                    amperes
                ),
                None => println!(
                    "  [{}/{}] λ={:.1} nm: E={:.3} eV, no emission",
                    wi + 1,
                    wavelengths.len(),
                    wavelength_nm,
                    result.photon_energy_ev
                ),
            }
        }

        rows.push(SweepRow {
            wavelength_nm,
            result,
        });
    }

    Ok(SweepOutput { material, rows })
}

/// Write sweep rows to a CSV file with a metadata header.
pub fn write_sweep_csv(output: &SweepOutput, path: &Path, job: &JobConfig) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;

    // Metadata header
    writeln!(file, "# Helios Photoelectric Sweep")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        file,
        "# material: {} ({}), phi_eV={}",
        output.material.name, output.material.symbol, output.material.work_function_ev
    )?;
    writeln!(file, "# intensity: {}", job.sweep.intensity)?;
    writeln!(
        file,
        "# max_power_w: {}, quantum_efficiency: {}",
        job.current.max_power_w, job.current.quantum_efficiency
    )?;
    writeln!(file, "#")?;
    writeln!(
        file,
        "wavelength_nm,photon_energy_ev,kinetic_energy_ev,emits,current_fraction,current_amperes"
    )?;

    for row in &output.rows {
        let result = &row.result;
        // Absent current values stay empty cells, never zero.
        let fraction = result
            .current_fraction
            .map(|f| format!("{:.6}", f))
            .unwrap_or_default();
        let amperes = result
            .current_amperes
            .map(|a| format!("{:.6e}", a))
            .unwrap_or_default();
        writeln!(
            file,
            "{:.2},{:.6},{:.6},{},{},{}",
            row.wavelength_nm,
            result.photon_energy_ev,
            result.kinetic_energy_ev,
            result.emits,
            fraction,
            amperes
        )?;
    }

    println!("Sweep written to: {}", path.display());
    Ok(())
}

/// Write sweep rows to a JSON file.
pub fn write_sweep_json(rows: &[SweepRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Sweep (JSON) written to: {}", path.display());
    Ok(())
}
