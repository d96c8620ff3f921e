//! Photocurrent estimation: normalized fraction and ampere magnitude.
//!
//! The fraction is a heuristic saturation curve, not a physically derived
//! quantum-yield law: it approaches the intensity fraction as the kinetic
//! energy grows and is damped near zero kinetic energy. The exact formula
//! is part of the model's contract and must be preserved as-is.

use serde::{Deserialize, Serialize};

/// Elementary charge in coulombs. Doubles as the eV → J conversion factor.
pub const ELEMENTARY_CHARGE_COULOMBS: f64 = 1.602176634e-19;

/// Parameters for the ampere conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentParams {
    /// Optical power (W) corresponding to a current fraction of 1.0.
    pub max_power_w: f64,
    /// Electrons emitted per absorbed photon, as a linear scale factor.
    pub quantum_efficiency: f64,
}

impl Default for CurrentParams {
    fn default() -> Self {
        Self {
            max_power_w: 1e-3,
            quantum_efficiency: 1.0,
        }
    }
}

/// Normalized current fraction in [0, 1]:
/// f · k / (k + 0.5) for intensity fraction f and kinetic energy k (eV).
///
/// Returns `None` exactly when the divisor k + 0.5 is zero: the model is
/// undefined at k = −0.5 eV, and that indeterminate state must reach the
/// caller as a distinct outcome rather than as zero or NaN.
///
/// Callers must not invoke this when there is no emission (k ≤ 0); that
/// branch belongs to the caller, not to the model.
pub fn current_fraction(intensity_fraction: f64, kinetic_energy_ev: f64) -> Option<f64> {
    let divisor = kinetic_energy_ev + 0.5;
    if divisor == 0.0 {
        return None;
    }
    Some(intensity_fraction * kinetic_energy_ev / divisor)
}

/// Approximate photocurrent in amperes for a given current fraction and
/// photon energy.
///
/// Non-positive fractions yield 0.0. Otherwise the fraction scales
/// `params.max_power_w` into an optical power, the photon energy converts
/// that power into a photon arrival rate, and each photon contributes one
/// elementary charge scaled by the quantum efficiency. An illustrative
/// approximation, not a measured quantity; the literal constants keep the
/// output reproducible.
pub fn current_amperes(fraction: f64, photon_energy_ev: f64, params: &CurrentParams) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    let photon_energy_j = photon_energy_ev * ELEMENTARY_CHARGE_COULOMBS;
    let optical_power_w = fraction * params.max_power_w;
    let photons_per_second = optical_power_w / photon_energy_j;
    photons_per_second * ELEMENTARY_CHARGE_COULOMBS * params.quantum_efficiency
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fraction_follows_saturation_formula() {
        let fraction = current_fraction(1.0, 1.0).unwrap();
        assert_relative_eq!(fraction, 1.0 / 1.5, max_relative = 1e-12);

        let fraction = current_fraction(0.25, 2.0).unwrap();
        assert_relative_eq!(fraction, 0.25 * 2.0 / 2.5, max_relative = 1e-12);
    }

    #[test]
    fn fraction_is_indeterminate_at_singular_point() {
        assert_eq!(current_fraction(0.5, -0.5), None);
        assert_eq!(current_fraction(1.0, -0.5), None);
    }

    #[test]
    fn fraction_approaches_intensity_for_large_kinetic_energy() {
        for &intensity in &[0.2, 0.5, 1.0] {
            let fraction = current_fraction(intensity, 1e9).unwrap();
            assert_relative_eq!(fraction, intensity, max_relative = 1e-8);
        }
    }

    #[test]
    fn non_positive_fraction_yields_zero_current() {
        let params = CurrentParams::default();
        assert_eq!(current_amperes(0.0, 3.1, &params), 0.0);
        assert_eq!(current_amperes(-0.3, 3.1, &params), 0.0);
    }

    #[test]
    fn ampere_conversion_is_reproducible() {
        let params = CurrentParams::default();
        let fraction = 0.6667;
        let photon_energy_ev = 3.1;

        let photon_energy_j = photon_energy_ev * 1.602176634e-19;
        let expected = fraction * 1e-3 / photon_energy_j * 1.602176634e-19;

        assert_relative_eq!(
            current_amperes(fraction, photon_energy_ev, &params),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn current_is_strictly_increasing_in_fraction() {
        let params = CurrentParams::default();
        let fractions = [0.1, 0.25, 0.5, 0.75, 1.0];
        for pair in fractions.windows(2) {
            assert!(
                current_amperes(pair[1], 3.1, &params) > current_amperes(pair[0], 3.1, &params),
                "current must grow with the fraction ({} vs {})",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn quantum_efficiency_scales_linearly() {
        let unit = CurrentParams::default();
        let half = CurrentParams {
            quantum_efficiency: 0.5,
            ..CurrentParams::default()
        };
        assert_relative_eq!(
            current_amperes(0.4, 3.1, &half),
            0.5 * current_amperes(0.4, 3.1, &unit),
            max_relative = 1e-12
        );
    }
}
