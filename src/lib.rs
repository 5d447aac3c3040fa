//! # swatch-solver
//!
//! A library for looking up colors in a named palette and rendering them as text.
//!
//! Given a color typed or pasted by a user (`#2196f3`, `rgb(33, 150, 243)`,
//! `rgba(33, 150, 243, 0.5)`), `swatch-solver` finds where it lives in a catalog
//! of named colors such as the Material Design palette, or the closest entries
//! when it is not there, and renders the result through user-defined templates
//! like `$HUE $VALUE` -> `Light Blue 500`.
//!
//! ## Features
//!
//! - **Exact matching**: Every catalog entry sharing a hex, case-insensitively
//! - **Nearest matching**: The closest entries by straight-line RGB distance
//! - **Templates**: `$HUE`, `$VALUE`, `$ALPHA` placeholders with casing and separator transforms
//! - **Color parsing**: Hex, `rgb()`, `rgba()`, and CSS basic color names
//!
//! ## Example
//!
//! ```rust
//! use swatch_solver::{CatalogIndex, ColorCatalog, MatchingEngine};
//! use swatch_solver::format::{render, FormatTemplate};
//! use swatch_solver::parsing::color::parse_color;
//!
//! // Build the index once and share it
//! let catalog = ColorCatalog::load_embedded().unwrap();
//! let index = CatalogIndex::build(&catalog);
//!
//! let query = parse_color("#03A9F4").unwrap();
//! let data = MatchingEngine::new(&index).format_data(&query);
//!
//! let template = FormatTemplate::new("$HUE $VALUE").with_transform("Xx");
//! assert_eq!(render(&template, &data), "Light Blue 500");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage and the searchable index
//! - [`core`]: Core data types for colors, hues, and records
//! - [`matching`]: Exact-then-nearest resolution and RGB distance
//! - [`format`]: Template rendering and transforms
//! - [`parsing`]: Parsing user color text
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod format;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::index::CatalogIndex;
pub use catalog::store::ColorCatalog;
pub use crate::core::record::{ColorQuery, SearchableRecord};
pub use crate::core::types::*;
pub use matching::engine::{MatchOutcome, MatchResult, MatchingEngine};
