//! Centralized validation and helper functions.

/// Number of hex digits in an RGB color (`rrggbb`).
pub const HEX_DIGITS: usize = 6;

/// Validate that a string is a 6-digit RGB hex color, with or without a leading `#`.
///
/// # Examples
///
/// ```
/// use swatch_solver::utils::validation::is_valid_hex;
///
/// assert!(is_valid_hex("#f44336"));
/// assert!(is_valid_hex("F44336"));
/// assert!(!is_valid_hex("#f4433")); // 5 digits
/// assert!(!is_valid_hex("#f4433g"));
/// ```
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a hex color to lowercase `#rrggbb`.
/// Returns None if the input is not a valid 6-digit hex color.
#[must_use]
pub fn normalize_hex(s: &str) -> Option<String> {
    if !is_valid_hex(s) {
        return None;
    }
    let digits = s.strip_prefix('#').unwrap_or(s);
    Some(format!("#{}", digits.to_ascii_lowercase()))
}

/// Convert an optional alpha in `[0, 1]` to the integer percentage used in templates.
///
/// Absent and zero alphas both render as `"100"`.
#[must_use]
pub fn alpha_percent(alpha: Option<f64>) -> String {
    match alpha {
        Some(a) if a != 0.0 => {
            #[allow(clippy::cast_possible_truncation)] // alpha is bounded to [0, 1]
            let pct = (a * 100.0).round() as i64;
            pct.to_string()
        }
        _ => "100".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#000000"));
        assert!(is_valid_hex("ffffff"));
        assert!(is_valid_hex("#AbCdEf"));

        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
        assert!(!is_valid_hex("#fff"));
        assert!(!is_valid_hex("##ffffff"));
        assert!(!is_valid_hex("#ffffff00"));
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("F44336"), Some("#f44336".to_string()));
        assert_eq!(normalize_hex("#E91E63"), Some("#e91e63".to_string()));
        assert_eq!(normalize_hex("not-a-hex"), None);
    }

    #[test]
    fn test_alpha_percent() {
        assert_eq!(alpha_percent(None), "100");
        assert_eq!(alpha_percent(Some(0.0)), "100");
        assert_eq!(alpha_percent(Some(0.5)), "50");
        assert_eq!(alpha_percent(Some(1.0)), "100");
        assert_eq!(alpha_percent(Some(0.255)), "26");
        assert_eq!(alpha_percent(Some(0.004)), "0");
    }
}
