//! Rendering colors into user-defined text templates.
//!
//! - [`template`]: [`FormatTemplate`], [`FormatData`], and [`render`]
//! - [`transform`]: The casing/separator spec applied to `$HUE` and `$VALUE`
//! - [`config`]: The ordered [`TemplateSet`] a caller offers to users
//!
//! ## Placeholders
//!
//! | Placeholder | Replaced with |
//! |-------------|---------------|
//! | `$HUE`      | Transformed hue name |
//! | `$VALUE`    | Transformed value name, prefixed by its group (`accent-a100`) |
//! | `$ALPHA`    | Alpha as an integer percentage (`50`), `100` when absent or zero |
//!
//! ## Example
//!
//! ```rust
//! use swatch_solver::format::{render, FormatData, FormatTemplate};
//!
//! let template = FormatTemplate::new("$HUE-$VALUE").with_transform("dX");
//! let data = FormatData::new("light blue", "a100");
//! assert_eq!(render(&template, &data), "LIGHTBLUE-A100");
//! ```
//!
//! [`FormatTemplate`]: template::FormatTemplate
//! [`FormatData`]: template::FormatData
//! [`render`]: template::render
//! [`TemplateSet`]: config::TemplateSet

pub mod config;
pub mod template;
pub mod transform;

pub use config::{TemplateError, TemplateSet};
pub use template::{render, FormatData, FormatTemplate};
pub use transform::{sentence_case, Transform};
