//! Material catalog: symbol-keyed work-function table.
//!
//! The on-disk format is a single JSON object keyed by chemical symbol,
//! one record per material:
//!
//! ```json
//! { "Cs": { "name": "Caesium", "phi_eV": 2.1 } }
//! ```
//!
//! `nombre` is accepted as an alias of `name` for compatibility with the
//! Spanish-keyed data files this format originated from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default work-function table, embedded at compile time.
const EMBEDDED_CATALOG: &str = include_str!("data/work_functions.json");

/// Errors from catalog loading and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is malformed: {0}")]
    Malformed(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

/// A photocathode material with its work function.
///
/// Immutable once loaded; the work function is the minimum photon energy
/// (eV) needed to liberate an electron from this surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Chemical symbol, unique within a catalog (e.g. "Cs").
    pub symbol: String,
    /// Display name (e.g. "Caesium").
    pub name: String,
    /// Work function Φ in electron-volts.
    pub work_function_ev: f64,
}

/// JSON record shape: the symbol lives in the key, not the record.
#[derive(Debug, Deserialize)]
struct RawMaterial {
    #[serde(alias = "nombre")]
    name: String,
    #[serde(rename = "phi_eV")]
    work_function_ev: f64,
}

/// An immutable mapping from chemical symbol to [`Material`].
///
/// Loaded once per process invocation. Lookup order is unspecified; use
/// [`MaterialCatalog::sorted_materials`] for presentation.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: HashMap<String, Material>,
}

impl MaterialCatalog {
    /// Load the embedded default table.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, RawMaterial> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        if raw.is_empty() {
            return Err(CatalogError::Malformed(
                "catalog contains no materials".into(),
            ));
        }

        let mut materials = HashMap::with_capacity(raw.len());
        for (symbol, record) in raw {
            if !record.work_function_ev.is_finite() || record.work_function_ev < 0.0 {
                return Err(CatalogError::Malformed(format!(
                    "material '{}' has invalid work function {}",
                    symbol, record.work_function_ev
                )));
            }
            materials.insert(
                symbol.clone(),
                Material {
                    symbol,
                    name: record.name,
                    work_function_ev: record.work_function_ev,
                },
            );
        }

        Ok(Self { materials })
    }

    /// Look up a material by chemical symbol.
    pub fn get(&self, symbol: &str) -> Result<&Material, CatalogError> {
        self.materials
            .get(symbol)
            .ok_or_else(|| CatalogError::UnknownMaterial(symbol.to_string()))
    }

    /// All materials, sorted alphabetically by symbol.
    ///
    /// Presentation adapters use this for numbered menus and dropdowns; the
    /// catalog itself guarantees no ordering.
    pub fn sorted_materials(&self) -> Vec<&Material> {
        let mut materials: Vec<&Material> = self.materials.values().collect();
        materials.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = MaterialCatalog::embedded().expect("embedded table must parse");
        assert_eq!(catalog.len(), 15);

        let caesium = catalog.get("Cs").unwrap();
        assert_eq!(caesium.name, "Caesium");
        assert_relative_eq!(caesium.work_function_ev, 2.1);
    }

    #[test]
    fn nombre_is_accepted_as_name_alias() {
        let catalog = MaterialCatalog::from_json_str(
            r#"{ "Cs": { "nombre": "Cesio", "phi_eV": 2.1 } }"#,
        )
        .unwrap();
        assert_eq!(catalog.get("Cs").unwrap().name, "Cesio");
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let catalog = MaterialCatalog::embedded().unwrap();
        let err = catalog.get("Unobtainium").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownMaterial(s) if s == "Unobtainium"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = MaterialCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn missing_work_function_field_is_rejected() {
        let err =
            MaterialCatalog::from_json_str(r#"{ "Cs": { "name": "Caesium" } }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn negative_work_function_is_rejected() {
        let err = MaterialCatalog::from_json_str(
            r#"{ "Cs": { "name": "Caesium", "phi_eV": -2.1 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = MaterialCatalog::from_json_str("{}").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = MaterialCatalog::from_path(Path::new("/nonexistent/elements.json")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn sorted_materials_is_alphabetical_by_symbol() {
        let catalog = MaterialCatalog::embedded().unwrap();
        let symbols: Vec<&str> = catalog
            .sorted_materials()
            .iter()
            .map(|m| m.symbol.as_str())
            .collect();
        let mut expected = symbols.clone();
        expected.sort_unstable();
        assert_eq!(symbols, expected);
        assert_eq!(symbols.first(), Some(&"Ag"));
    }
}
