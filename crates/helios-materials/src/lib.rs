//! # Helios Materials
//!
//! Work-function data for the Helios framework. A [`catalog::MaterialCatalog`]
//! maps chemical symbols to [`catalog::Material`] entries, each carrying the
//! minimum photon energy (eV) needed to liberate an electron from that
//! surface.
//!
//! ## Data sources
//!
//! A default table of common photocathode metals is embedded at compile time
//! ([`catalog::MaterialCatalog::embedded`]). External JSON files in the same
//! record shape can be loaded with [`catalog::MaterialCatalog::from_path`].
//!
//! The catalog is loaded once per process and never mutated afterwards, so it
//! can be shared freely across callers.

pub mod catalog;

pub use catalog::{CatalogError, Material, MaterialCatalog};
