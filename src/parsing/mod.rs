//! Parsers for turning user color text into queries.
//!
//! ## Supported Formats
//!
//! | Format | Example | Alpha |
//! |--------|---------|-------|
//! | Hex    | `#f44336`, `f44336`, `#f43` | opaque |
//! | Hex with alpha | `#f4433680`, `#f438` | from the last digit pair |
//! | `rgb()` | `rgb(244, 67, 54)` | opaque |
//! | `rgba()` | `rgba(244, 67, 54, 0.5)`, `rgba(244, 67, 54, 50%)` | given |
//! | Named  | `orange`, `navy` | opaque |
//!
//! ## Example
//!
//! ```rust
//! use swatch_solver::parsing::color::parse_color;
//!
//! let query = parse_color("#2196F3").unwrap();
//! assert_eq!(query.hex(), "#2196f3");
//! assert_eq!(query.alpha, None);
//! ```

pub mod color;
