//! Core data types for palette lookup.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Rgb`]: An 8-bit RGB triplet with hex conversion
//! - [`ColorValue`], [`HueEntry`], [`ColorGroup`]: The nested catalog shape
//! - [`HueMember`]: A leaf color of a hue, either direct or grouped
//! - [`SearchableRecord`]: The flattened unit the index searches
//! - [`ColorQuery`]: An ad-hoc color to match against the catalog
//!
//! ## Catalog Shape
//!
//! A hue carries direct values keyed by name and titled groups of named colors:
//!
//! | Hue | Direct values | Groups |
//! |-----|---------------|--------|
//! | red | 50 .. 900     | accent: a100, a200, a400, a700 |
//! | brown | 50 .. 900   | (none) |
//!
//! Both shapes flatten into the same [`SearchableRecord`].
//!
//! [`Rgb`]: types::Rgb
//! [`ColorValue`]: types::ColorValue
//! [`HueEntry`]: types::HueEntry
//! [`ColorGroup`]: types::ColorGroup
//! [`HueMember`]: types::HueMember
//! [`SearchableRecord`]: record::SearchableRecord
//! [`ColorQuery`]: record::ColorQuery

pub mod record;
pub mod types;
