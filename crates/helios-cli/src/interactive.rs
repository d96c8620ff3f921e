//! Interactive terminal session: prompt for the inputs, evaluate once, and
//! print every observable quantity.
//!
//! All validation happens here, at the prompt. Invalid entries re-prompt
//! until the user types an acceptable value, so the engine only ever sees
//! a positive wavelength and an intensity fraction in [0, 1].

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use helios_core::current::CurrentParams;
use helios_core::pipeline;
use helios_core::types::{ComputationInput, ComputationResult};
use helios_materials::{Material, MaterialCatalog};

use crate::runner;

/// Run one question/answer session against stdin.
pub fn run_session(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = runner::resolve_catalog(catalog_path)?;
    let stdin = io::stdin();
    session(&mut stdin.lock(), &catalog)
}

fn session(reader: &mut impl BufRead, catalog: &MaterialCatalog) -> Result<()> {
    println!("--- PHOTOELECTRIC EFFECT SIMULATOR ---");

    let intensity_fraction = prompt_intensity(reader)?;
    let wavelength_nm = prompt_wavelength(reader)?;
    let material = prompt_material(reader, catalog)?.clone();

    println!("Selected: {} ({})", material.name, material.symbol);
    println!();

    let input = ComputationInput {
        wavelength_nm: f64::from(wavelength_nm),
        intensity_fraction,
        material,
    };
    let result = pipeline::evaluate(&input, &CurrentParams::default());
    render_result(&result);
    Ok(())
}

fn render_result(result: &ComputationResult) {
    println!(
        "Photon: {:.2} eV | Threshold: {} eV",
        result.photon_energy_ev, result.work_function_ev
    );

    if result.emits {
        println!("Electrons are emitted!");
        println!("Kinetic energy: {:.2} eV", result.kinetic_energy_ev);
        match (result.current_fraction, result.current_amperes) {
            (Some(fraction), Some(amperes)) => {
                println!("Estimated current fraction: {:.4}", fraction);
                println!("Estimated current: {:.3e} A", amperes);
            }
            // The singular point of the fraction model: not zero current.
            _ => println!("Estimated current: indeterminate (division by zero)"),
        }
    } else {
        println!("No electron emission!");
    }
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Intensity percentage in [0, 100], returned as a fraction in [0, 1].
fn prompt_intensity(reader: &mut impl BufRead) -> Result<f64> {
    loop {
        let Some(line) = prompt_line(reader, "Light intensity as a percentage (0-100): ")? else {
            anyhow::bail!("input ended before a valid intensity was entered");
        };
        match line.parse::<f64>() {
            Ok(percent) if (0.0..=100.0).contains(&percent) => return Ok(percent / 100.0),
            Ok(_) => println!("Please enter a value between 0 and 100."),
            Err(_) => println!("Invalid input. Enter a number."),
        }
    }
}

/// Wavelength as a positive integer number of nanometres.
fn prompt_wavelength(reader: &mut impl BufRead) -> Result<u32> {
    loop {
        let Some(line) = prompt_line(reader, "Wavelength (nm): ")? else {
            anyhow::bail!("input ended before a valid wavelength was entered");
        };
        match line.parse::<u32>() {
            Ok(wavelength) if wavelength > 0 => return Ok(wavelength),
            _ => println!("Please enter a positive whole number of nanometres."),
        }
    }
}

/// Numbered menu over the sorted catalog. The chosen index is mapped back
/// to a symbol before the catalog lookup.
fn prompt_material<'a>(
    reader: &mut impl BufRead,
    catalog: &'a MaterialCatalog,
) -> Result<&'a Material> {
    let materials = catalog.sorted_materials();

    println!("Select the target material:");
    for (i, material) in materials.iter().enumerate() {
        println!("{}. {} ({})", i + 1, material.name, material.symbol);
    }

    loop {
        let Some(line) = prompt_line(reader, "Material number: ")? else {
            anyhow::bail!("input ended before a material was selected");
        };
        match line.parse::<usize>() {
            Ok(choice) if (1..=materials.len()).contains(&choice) => {
                let symbol = &materials[choice - 1].symbol;
                return Ok(catalog.get(symbol)?);
            }
            _ => println!("Please enter a number between 1 and {}.", materials.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    #[test]
    fn intensity_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n150\n75\n");
        let fraction = prompt_intensity(&mut input).unwrap();
        assert_relative_eq!(fraction, 0.75);
    }

    #[test]
    fn wavelength_rejects_zero_and_negatives() {
        let mut input = Cursor::new("0\n-5\n3.5\n400\n");
        assert_eq!(prompt_wavelength(&mut input).unwrap(), 400);
    }

    #[test]
    fn material_menu_maps_index_to_symbol() {
        let catalog = MaterialCatalog::embedded().unwrap();
        // Out-of-range first, then the third entry of the sorted menu (Au).
        let mut input = Cursor::new("99\n3\n");
        let material = prompt_material(&mut input, &catalog).unwrap();
        assert_eq!(material.symbol, "Au");
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut input = Cursor::new("nonsense\n");
        assert!(prompt_intensity(&mut input).is_err());
    }

    #[test]
    fn full_session_runs_to_completion() {
        let catalog = MaterialCatalog::embedded().unwrap();
        // 100% intensity, 400 nm, then Caesium by menu position.
        let position = catalog
            .sorted_materials()
            .iter()
            .position(|m| m.symbol == "Cs")
            .unwrap()
            + 1;
        let script = format!("100\n400\n{position}\n");
        let mut input = Cursor::new(script);
        session(&mut input, &catalog).unwrap();
    }
}
