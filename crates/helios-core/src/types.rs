//! Request and result containers shared with the presentation adapters.
//!
//! Both types are transient: created per user request, owned solely by the
//! caller, and discarded after rendering. The engine performs no formatting;
//! every field is a raw value for the adapter to display.

use helios_materials::Material;
use serde::{Deserialize, Serialize};

/// One evaluation request.
///
/// Adapters validate before constructing this: `wavelength_nm > 0` and
/// `intensity_fraction` in [0, 1]. Invalid values never reach the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationInput {
    /// Wavelength of the incident light (nm).
    pub wavelength_nm: f64,
    /// Light intensity as a fraction in [0, 1].
    pub intensity_fraction: f64,
    /// Target material, resolved from the catalog.
    pub material: Material,
}

/// Every observable quantity of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationResult {
    /// Photon energy E (eV).
    pub photon_energy_ev: f64,
    /// Work function Φ of the selected material (eV).
    pub work_function_ev: f64,
    /// Whether electrons are emitted (strict k > 0).
    pub emits: bool,
    /// Kinetic energy k = E − Φ (eV), negative or zero when `emits` is false.
    pub kinetic_energy_ev: f64,
    /// Normalized current fraction in [0, 1]. `None` when not computed
    /// (no emission) or indeterminate (k = −0.5 eV singular point).
    pub current_fraction: Option<f64>,
    /// Approximate current in amperes. `Some` only when `current_fraction`
    /// is `Some`.
    pub current_amperes: Option<f64>,
}
