//! Named-color catalog storage and indexing.
//!
//! The catalog is an ordered list of hues, each with direct values keyed by
//! name and titled groups of named colors. An embedded catalog is compiled
//! into the binary, but custom catalogs can also be loaded from JSON files.
//!
//! ## Embedded Catalog
//!
//! The default catalog is the Material Design palette: 19 hues with shades
//! `50`..`900`, an `accent` group (`a100`..`a700`) on the chromatic hues, and a
//! `monochrome` hue holding black and white.
//!
//! ## Example
//!
//! ```rust
//! use swatch_solver::{CatalogIndex, ColorCatalog};
//!
//! let catalog = ColorCatalog::load_embedded().unwrap();
//! let index = CatalogIndex::build(&catalog);
//!
//! let found = index.find_by_hex("#F44336");
//! assert_eq!(found[0].hue_name, "red");
//! assert_eq!(found[0].value_name, "500");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use swatch_solver::ColorCatalog;
//! use std::path::Path;
//!
//! let catalog = ColorCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = ColorCatalog::load_from_file(Path::new("my_palette.json")).unwrap();
//! ```

pub mod index;
pub mod store;
