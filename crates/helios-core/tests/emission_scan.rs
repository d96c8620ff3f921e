//! Integration test: full pipeline against the embedded material catalog.
//!
//! Sweeps the visible range for a low and a high work-function metal and
//! checks that the emission onset sits exactly at the threshold wavelength
//! λ_c = 1240 / Φ, with the current stages only active past the onset.

use approx::assert_relative_eq;
use helios_core::current::CurrentParams;
use helios_core::pipeline::evaluate;
use helios_core::types::ComputationInput;
use helios_materials::MaterialCatalog;

#[test]
fn caesium_emits_across_most_of_the_visible_range() {
    let catalog = MaterialCatalog::embedded().expect("embedded catalog must load");
    let caesium = catalog.get("Cs").expect("Cs is in the embedded table");
    let threshold_nm = 1240.0 / caesium.work_function_ev;
    let params = CurrentParams::default();

    for step in 0..=60 {
        let wavelength_nm = 200.0 + 10.0 * step as f64;
        let input = ComputationInput {
            wavelength_nm,
            intensity_fraction: 1.0,
            material: caesium.clone(),
        };
        let result = evaluate(&input, &params);

        assert_eq!(
            result.emits,
            wavelength_nm < threshold_nm,
            "emission at λ={} nm must flip exactly at λ_c={:.1} nm",
            wavelength_nm,
            threshold_nm
        );

        if result.emits {
            let fraction = result
                .current_fraction
                .expect("fraction is defined whenever k > 0");
            assert!(
                (0.0..=1.0).contains(&fraction),
                "fraction {} out of range at λ={} nm",
                fraction,
                wavelength_nm
            );
            assert!(result.current_amperes.unwrap() >= 0.0);
        } else {
            assert_eq!(result.current_fraction, None);
            assert_eq!(result.current_amperes, None);
        }
    }
}

#[test]
fn platinum_never_emits_in_the_visible_range() {
    let catalog = MaterialCatalog::embedded().unwrap();
    let platinum = catalog.get("Pt").unwrap();
    let params = CurrentParams::default();

    // Φ = 5.65 eV puts the threshold at ~219 nm, below the visible range.
    for step in 0..=40 {
        let wavelength_nm = 400.0 + 10.0 * step as f64;
        let input = ComputationInput {
            wavelength_nm,
            intensity_fraction: 1.0,
            material: platinum.clone(),
        };
        let result = evaluate(&input, &params);

        assert!(!result.emits, "Pt must not emit at λ={} nm", wavelength_nm);
        assert!(result.kinetic_energy_ev < 0.0);
        assert_eq!(result.current_amperes, None);
    }
}

#[test]
fn kinetic_energy_decreases_with_wavelength() {
    let catalog = MaterialCatalog::embedded().unwrap();
    let sodium = catalog.get("Na").unwrap();
    let params = CurrentParams::default();

    let mut previous = f64::INFINITY;
    for step in 0..=30 {
        let wavelength_nm = 250.0 + 5.0 * step as f64;
        let input = ComputationInput {
            wavelength_nm,
            intensity_fraction: 0.8,
            material: sodium.clone(),
        };
        let result = evaluate(&input, &params);

        eprintln!(
            "λ={:.0} nm: E={:.3} eV, k={:.3} eV, emits={}",
            wavelength_nm, result.photon_energy_ev, result.kinetic_energy_ev, result.emits
        );

        assert!(
            result.kinetic_energy_ev < previous,
            "kinetic energy must fall as the wavelength grows"
        );
        previous = result.kinetic_energy_ev;

        assert_relative_eq!(
            result.kinetic_energy_ev,
            result.photon_energy_ev - sodium.work_function_ev,
            max_relative = 1e-12
        );
    }
}
