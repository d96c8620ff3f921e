//! # Helios Core
//!
//! The numerical backbone of the Helios framework: pure functions that turn
//! a wavelength, an intensity fraction, and a material work function into
//! the observable quantities of the photoelectric effect.
//!
//! ## Architecture
//!
//! Every computation is a stateless, constant-time function; the only shared
//! data is the read-only material catalog owned by the caller. A request
//! flows through [`pipeline::evaluate`] in a fixed order:
//!
//! photon energy → emission → current fraction → current magnitude,
//!
//! short-circuiting after the emission step when no electrons are emitted.
//!
//! ## Modules
//!
//! - [`types`] — Request/result containers shared with the adapters.
//! - [`photon`] — Wavelength (nm) to photon energy (eV) conversion.
//! - [`emission`] — Emission decision and kinetic energy.
//! - [`current`] — Normalized current fraction and ampere estimate.
//! - [`pipeline`] — The full request pipeline.

pub mod current;
pub mod emission;
pub mod photon;
pub mod pipeline;
pub mod types;
