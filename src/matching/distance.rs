use crate::core::types::Rgb;

/// Straight-line distance between two colors in raw 0-255 RGB space.
///
/// This is not a perceptual metric; rankings depend on it exactly.
#[must_use]
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}
