use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::record::ColorQuery;
use crate::core::types::Rgb;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Empty color input")]
    Empty,

    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Invalid rgb()/rgba() color: {0}")]
    InvalidRgb(String),

    #[error("Alpha out of range [0, 1]: {0}")]
    InvalidAlpha(String),

    #[error("Unrecognized color: {0}")]
    Unknown(String),
}

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").expect("valid regex")
});

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*(%?)\s*\)$",
    )
    .expect("valid regex")
});

/// CSS basic color keywords
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
];

/// Parse user color text into a query.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional),
/// `rgb(r, g, b)`, `rgba(r, g, b, a)` with `a` in `[0, 1]` or a percentage, and
/// CSS basic color names. Formats without an alpha channel leave
/// [`ColorQuery::alpha`] unset, which reads as fully opaque.
///
/// # Errors
///
/// Returns a [`ColorParseError`] describing why the text is not a color.
///
/// # Examples
///
/// ```
/// use swatch_solver::parsing::color::parse_color;
///
/// let query = parse_color("rgba(33, 150, 243, 0.5)").unwrap();
/// assert_eq!(query.hex(), "#2196f3");
/// assert_eq!(query.alpha, Some(0.5));
///
/// assert!(parse_color("not a color").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<ColorQuery, ColorParseError> {
    let color = input.trim();
    if color.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let lower = color.to_ascii_lowercase();

    if let Some(caps) = HEX_RE.captures(&lower) {
        return parse_hex_digits(&caps[1])
            .ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
    }

    if let Some(caps) = RGB_RE.captures(&lower) {
        let rgb = parse_channels(&caps[1], &caps[2], &caps[3])
            .ok_or_else(|| ColorParseError::InvalidRgb(input.to_string()))?;
        return Ok(ColorQuery::new(rgb));
    }

    if let Some(caps) = RGBA_RE.captures(&lower) {
        let rgb = parse_channels(&caps[1], &caps[2], &caps[3])
            .ok_or_else(|| ColorParseError::InvalidRgb(input.to_string()))?;
        let alpha = parse_alpha(&caps[4], !caps[5].is_empty())
            .ok_or_else(|| ColorParseError::InvalidAlpha(input.to_string()))?;
        return Ok(ColorQuery::new(rgb).with_alpha(alpha));
    }

    if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Ok(ColorQuery::new(*rgb));
    }

    if lower.starts_with('#') {
        return Err(ColorParseError::InvalidHex(input.to_string()));
    }
    if lower.starts_with("rgb") {
        return Err(ColorParseError::InvalidRgb(input.to_string()));
    }
    Err(ColorParseError::Unknown(input.to_string()))
}

/// Whether `input` parses as a color
pub fn is_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

fn parse_hex_digits(digits: &str) -> Option<ColorQuery> {
    // Expand shorthand: "f80" -> "ff8800"
    let expanded: String = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let rgb = Rgb::from_hex(&expanded[0..6])?;
    let query = ColorQuery::new(rgb);
    if expanded.len() == 8 {
        let a = u8::from_str_radix(&expanded[6..8], 16).ok()?;
        return Some(query.with_alpha(f64::from(a) / 255.0));
    }
    Some(query)
}

fn parse_channels(r: &str, g: &str, b: &str) -> Option<Rgb> {
    Some(Rgb::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?))
}

fn parse_alpha(value: &str, percent: bool) -> Option<f64> {
    let value: f64 = value.parse().ok()?;
    let alpha = if percent { value / 100.0 } else { value };
    (0.0..=1.0).contains(&alpha).then_some(alpha)
}
