//! Emission decision and electron kinetic energy.

use serde::{Deserialize, Serialize};

/// Outcome of comparing a photon energy against a work function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    /// Whether electrons are emitted.
    pub emits: bool,
    /// Excess energy E − Φ in eV. Computed in both branches; negative or
    /// zero when there is no emission.
    pub kinetic_energy_ev: f64,
}

/// Evaluate the emission condition for a photon energy and work function.
///
/// `emits` uses the strict inequality k > 0: a photon exactly at the
/// threshold (k == 0) does not emit.
pub fn evaluate_emission(photon_energy_ev: f64, work_function_ev: f64) -> Emission {
    let kinetic_energy_ev = photon_energy_ev - work_function_ev;
    Emission {
        emits: kinetic_energy_ev > 0.0,
        kinetic_energy_ev,
    }
}
