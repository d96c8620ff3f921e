//! The full evaluation pipeline.
//!
//! Stateless and single-shot: energy → emission → fraction → current, in
//! that order, short-circuiting after the emission step when no electrons
//! are emitted. There is no persistent state between requests.

use crate::current::{current_amperes, current_fraction, CurrentParams};
use crate::emission::evaluate_emission;
use crate::photon::photon_energy_ev;
use crate::types::{ComputationInput, ComputationResult};

/// Evaluate one request.
///
/// The current fraction is only computed when electrons are emitted; a
/// `None` fraction on an emitting result marks the indeterminate singular
/// point of the fraction model, which adapters must render distinctly from
/// zero current. The ampere estimate is never derived from an undefined
/// fraction.
pub fn evaluate(input: &ComputationInput, params: &CurrentParams) -> ComputationResult {
    let photon_energy_ev = photon_energy_ev(input.wavelength_nm);
    let emission = evaluate_emission(photon_energy_ev, input.material.work_function_ev);

    let (fraction, amperes) = if emission.emits {
        match current_fraction(input.intensity_fraction, emission.kinetic_energy_ev) {
            Some(fraction) => (
                Some(fraction),
                Some(current_amperes(fraction, photon_energy_ev, params)),
            ),
            None => (None, None),
        }
    } else {
        (None, None)
    };

    ComputationResult {
        photon_energy_ev,
        work_function_ev: input.material.work_function_ev,
        emits: emission.emits,
        kinetic_energy_ev: emission.kinetic_energy_ev,
        current_fraction: fraction,
        current_amperes: amperes,
    }
}
