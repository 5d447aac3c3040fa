use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::types::HueEntry;
use crate::utils::validation::normalize_hex;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate hue name: {0}")]
    DuplicateHue(String),

    #[error("Duplicate value key '{key}' in hue '{hue}'")]
    DuplicateValueKey { hue: String, key: String },

    #[error("Invalid hex '{hex}' for '{value}' in hue '{hue}'")]
    InvalidHex {
        hue: String,
        value: String,
        hex: String,
    },

    #[error("Grouped color in hue '{0}' has no name")]
    UnnamedGroupColor(String),

    #[error("Value '{key}' in hue '{hue}' has an empty name")]
    EmptyValueName { hue: String, key: String },

    #[error("Group in hue '{0}' has an empty title")]
    EmptyGroupTitle(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub hues: Vec<HueEntry>,
}

/// The named-color catalog: hues in display order, unique by name
#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
    hues: Vec<HueEntry>,

    /// Index: hue name -> index in hues vec
    name_to_index: HashMap<String, usize>,
}

impl ColorCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/material_colors.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for hue in data.hues {
            catalog.add_hue(hue)?;
        }

        debug!(hues = catalog.len(), "Loaded color catalog");
        Ok(catalog)
    }

    /// Add a hue to the end of the catalog, normalizing its hex values.
    ///
    /// # Errors
    ///
    /// Fails if the hue name is already present, a direct key repeats, a hex is
    /// not a 6-digit RGB hex, a value resolves to an empty name, or a group has
    /// an empty title or an unnamed color.
    pub fn add_hue(&mut self, mut hue: HueEntry) -> Result<(), CatalogError> {
        if self.name_to_index.contains_key(&hue.name) {
            return Err(CatalogError::DuplicateHue(hue.name));
        }

        if let Some(selector) = hue.selector.as_mut() {
            for (field, hex) in [("light", &mut selector.light), ("dark", &mut selector.dark)] {
                if let Some(hex) = hex {
                    *hex = normalize_or_err(&hue.name, field, hex)?;
                }
            }
        }

        let mut keys = HashSet::new();
        for direct in &mut hue.values {
            if !keys.insert(direct.key.clone()) {
                return Err(CatalogError::DuplicateValueKey {
                    hue: hue.name.clone(),
                    key: direct.key.clone(),
                });
            }
            let name = direct.value.name.as_deref().unwrap_or(&direct.key);
            if name.is_empty() {
                return Err(CatalogError::EmptyValueName {
                    hue: hue.name.clone(),
                    key: direct.key.clone(),
                });
            }
            direct.value.hex = normalize_or_err(&hue.name, &direct.key, &direct.value.hex)?;
        }

        for group in &mut hue.groups {
            if group.title.as_deref() == Some("") {
                return Err(CatalogError::EmptyGroupTitle(hue.name.clone()));
            }
            for color in &mut group.colors {
                let Some(name) = color.name.as_deref().filter(|n| !n.is_empty()) else {
                    return Err(CatalogError::UnnamedGroupColor(hue.name.clone()));
                };
                color.hex = normalize_or_err(&hue.name, name, &color.hex)?;
            }
        }

        self.name_to_index.insert(hue.name.clone(), self.hues.len());
        self.hues.push(hue);
        Ok(())
    }

    /// Get a hue by name
    pub fn get(&self, name: &str) -> Option<&HueEntry> {
        self.name_to_index.get(name).map(|&idx| &self.hues[idx])
    }

    /// All hues in catalog order
    pub fn hues(&self) -> &[HueEntry] {
        &self.hues
    }

    /// Hue names in catalog order
    pub fn hue_names(&self) -> impl Iterator<Item = &str> {
        self.hues.iter().map(|h| h.name.as_str())
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            hues: self.hues.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of hues in catalog
    pub fn len(&self) -> usize {
        self.hues.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }
}

fn normalize_or_err(hue: &str, value: &str, hex: &str) -> Result<String, CatalogError> {
    normalize_hex(hex).ok_or_else(|| CatalogError::InvalidHex {
        hue: hue.to_string(),
        value: value.to_string(),
        hex: hex.to_string(),
    })
}
