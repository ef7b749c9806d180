//! Brightness extraction.
//!
//! Luma uses the BT.709 weights on gamma-encoded samples; no linearisation
//! is applied, so the result is an approximation of perceived lightness.

/// Luma units for a full-scale white pixel (`255 * 10_000`).
pub const LUMA_SCALE: u32 = 255 * 10_000;

/// Luminance BT.709 en unités entières : `R*2126 + G*7152 + B*722`.
///
/// A one-sample pixel is treated as gray (`g * 10_000`), so both layouts
/// share [`LUMA_SCALE`]. Summing units keeps box averages exact.
///
/// # Example
/// ```
/// use ink_ascii::luminance::{luma_units, LUMA_SCALE};
/// assert_eq!(luma_units(&[255, 255, 255]), LUMA_SCALE);
/// assert_eq!(luma_units(&[255]), LUMA_SCALE);
/// assert_eq!(luma_units(&[0, 0, 0]), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn luma_units(pixel: &[u8]) -> u32 {
    match *pixel {
        [g] => u32::from(g) * 10_000,
        [r, g, b] => u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722,
        _ => panic!("pixel de {} canaux non supporté", pixel.len()),
    }
}

/// Mean brightness in `[0, 1]` of `count` pixels whose luma units sum to `sum`.
#[inline(always)]
#[must_use]
pub fn units_to_brightness(sum: u64, count: u64) -> f32 {
    (sum as f64 / (count.max(1) as f64 * f64::from(LUMA_SCALE))) as f32
}

/// Brightness of a single pixel, in `[0, 1]`.
///
/// # Example
/// ```
/// use ink_ascii::luminance::brightness;
/// assert_eq!(brightness(&[255]), 1.0);
/// assert_eq!(brightness(&[0, 0, 0]), 0.0);
/// assert!((brightness(&[255, 0, 0]) - 0.2126).abs() < 1e-6);
/// ```
#[inline(always)]
#[must_use]
pub fn brightness(pixel: &[u8]) -> f32 {
    units_to_brightness(u64::from(luma_units(pixel)), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_sample_over_255() {
        for g in [0u8, 1, 64, 128, 254, 255] {
            let expected = f32::from(g) / 255.0;
            assert!((brightness(&[g]) - expected).abs() < 1e-6, "g={g}");
        }
    }

    #[test]
    fn rgb_weights_sum_to_one() {
        assert!((brightness(&[0, 255, 0]) - 0.7152).abs() < 1e-6);
        assert!((brightness(&[0, 0, 255]) - 0.0722).abs() < 1e-6);
        assert_eq!(brightness(&[255, 255, 255]), 1.0);
    }

    #[test]
    fn gray_rgb_triplet_matches_gray_sample() {
        for g in [0u8, 17, 128, 255] {
            assert_eq!(luma_units(&[g, g, g]), luma_units(&[g]));
        }
    }

    #[test]
    fn averaging_constant_units_is_exact() {
        let unit = u64::from(luma_units(&[37, 200, 91]));
        for n in [1u64, 3, 7, 1000] {
            assert_eq!(units_to_brightness(unit * n, n), units_to_brightness(unit, 1));
        }
    }

    #[test]
    #[should_panic(expected = "canaux")]
    fn rgba_is_rejected() {
        let _ = luma_units(&[0, 0, 0, 255]);
    }
}
