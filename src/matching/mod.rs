//! Resolving colors against the catalog.
//!
//! This module provides the matching flow that sits on top of the index:
//!
//! - [`MatchingEngine`]: Main entry point for resolving a color query
//! - [`MatchOutcome`]: Exact records, or nearest suggestions with distances
//! - [`rgb_distance`]: The distance used to rank suggestions
//!
//! ## Matching Algorithm
//!
//! 1. **Exact match**: every record whose hex equals the query's (case-insensitive)
//! 2. **Nearest match**: when nothing matches exactly, the closest records by
//!    straight-line distance in 0-255 RGB space, ties in catalog order
//!
//! Alpha never takes part in matching; it rides along on the outcome so the
//! chosen record can be formatted with it.
//!
//! ## Example
//!
//! ```rust
//! use swatch_solver::{CatalogIndex, ColorCatalog, MatchingEngine};
//! use swatch_solver::parsing::color::parse_color;
//!
//! let catalog = ColorCatalog::load_embedded().unwrap();
//! let index = CatalogIndex::build(&catalog);
//! let query = parse_color("rgb(244, 67, 54)").unwrap();
//!
//! let outcome = MatchingEngine::new(&index).resolve(&query);
//! for m in &outcome.matches {
//!     println!("{} ({:.1})", m.record, m.distance);
//! }
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`MatchOutcome`]: engine::MatchOutcome
//! [`rgb_distance`]: distance::rgb_distance

pub mod distance;
pub mod engine;
