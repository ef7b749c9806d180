//! Box-filter resampling of a pixel buffer onto a character grid.
//!
//! Every output cell is the mean brightness of its source rectangle. Bands
//! use `floor` for the start and `ceil` for the end, so consecutive bands
//! abut or overlap by one pixel and no source row or column is skipped.

use std::ops::Range;

use ink_core::frame::PixelBuffer;
use rayon::prelude::*;

use crate::luminance::{luma_units, units_to_brightness};

/// Clamp a requested width to `[1, source_width]`. No upscaling.
///
/// # Example
/// ```
/// use ink_ascii::resample::effective_width;
/// assert_eq!(effective_width(120, 40), 40);
/// assert_eq!(effective_width(0, 40), 1);
/// assert_eq!(effective_width(16, 40), 16);
/// ```
#[inline]
#[must_use]
pub fn effective_width(requested: u32, source_width: u32) -> u32 {
    requested.min(source_width).max(1)
}

/// Output grid size for a source image.
///
/// `height = max(1, round(src_h * (width / src_w) * aspect_ratio))`, with
/// `width` from [`effective_width`].
///
/// # Example
/// ```
/// use ink_ascii::resample::output_dimensions;
/// assert_eq!(output_dimensions(200, 100, 100, 0.5), (100, 25));
/// assert_eq!(output_dimensions(10, 1, 10, 0.5), (10, 1));
/// ```
#[must_use]
pub fn output_dimensions(
    source_width: u32,
    source_height: u32,
    requested_width: u32,
    aspect_ratio: f32,
) -> (u32, u32) {
    let width = effective_width(requested_width, source_width);
    let scale = f64::from(width) / f64::from(source_width.max(1));
    let height = (f64::from(source_height) * scale * f64::from(aspect_ratio)).round();
    let height = if height.is_finite() && height >= 1.0 {
        height.min(f64::from(u32::MAX)) as u32
    } else {
        1
    };
    (width, height)
}

/// Source band `[start, end)` covered by output index `index`.
///
/// Always non-empty and within `[0, source_len]` when `source_len > 0`.
///
/// # Example
/// ```
/// use ink_ascii::resample::band;
/// assert_eq!(band(0, 10, 4), 0..3);
/// assert_eq!(band(1, 10, 4), 2..5);
/// assert_eq!(band(3, 10, 4), 7..10);
/// ```
#[inline]
#[must_use]
pub fn band(index: u32, source_len: u32, output_len: u32) -> Range<u32> {
    let src = u64::from(source_len);
    let out = u64::from(output_len.max(1));
    let i = u64::from(index);

    let start = (i * src / out).min(src);
    let end = ((i + 1) * src).div_ceil(out).min(src);
    let end = end.max(start + 1).min(src);
    // Only reachable when index is past the last band.
    let start = start.min(end.saturating_sub(1));

    start as u32..end as u32
}

/// Mean brightness of every cell of an `out_w × out_h` grid, row-major.
///
/// Rows are computed in parallel; each cell reads only the immutable
/// source and writes only its own slot.
///
/// # Example
/// ```
/// use ink_core::frame::{Channels, PixelBuffer};
/// use ink_ascii::resample::resample;
/// let buf = PixelBuffer::new(2, 1, Channels::Gray, vec![0, 255]).unwrap();
/// assert_eq!(resample(&buf, 1, 1), vec![0.5]);
/// ```
#[must_use]
pub fn resample(buf: &PixelBuffer, out_w: u32, out_h: u32) -> Vec<f32> {
    if out_w == 0 || out_h == 0 {
        return Vec::new();
    }

    let columns: Vec<Range<u32>> = (0..out_w).map(|ox| band(ox, buf.width(), out_w)).collect();
    let mut cells = vec![0.0f32; out_w as usize * out_h as usize];

    cells
        .par_chunks_mut(out_w as usize)
        .enumerate()
        .for_each(|(oy, row)| {
            let rows = band(oy as u32, buf.height(), out_h);
            for (slot, cols) in row.iter_mut().zip(&columns) {
                *slot = cell_mean(buf, rows.clone(), cols.clone());
            }
        });

    cells
}

/// Mean brightness over `rows × cols` of `buf`.
#[inline]
fn cell_mean(buf: &PixelBuffer, rows: Range<u32>, cols: Range<u32>) -> f32 {
    let n = buf.channels().count();
    let mut sum = 0u64;
    let mut count = 0u64;
    for y in rows {
        let line = buf.row(y);
        let span = &line[cols.start as usize * n..cols.end as usize * n];
        for px in span.chunks_exact(n) {
            sum += u64::from(luma_units(px));
            count += 1;
        }
    }
    units_to_brightness(sum, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_core::frame::Channels;

    fn assert_covering(source_len: u32, output_len: u32) {
        let mut covered = vec![false; source_len as usize];
        let mut prev: Option<Range<u32>> = None;
        for i in 0..output_len {
            let b = band(i, source_len, output_len);
            assert!(b.start < b.end, "bande vide {i} ({source_len}/{output_len})");
            assert!(b.end <= source_len);
            if let Some(p) = prev {
                assert!(p.end >= b.start, "trou entre {p:?} et {b:?}");
                assert!(p.start <= b.start, "bandes non monotones");
            }
            for s in b.clone() {
                covered[s as usize] = true;
            }
            prev = Some(b);
        }
        assert!(covered.iter().all(|&c| c), "{source_len}/{output_len}");
    }

    #[test]
    fn bands_cover_source_without_gaps() {
        for src in 1..=40 {
            for out in 1..=src {
                assert_covering(src, out);
            }
        }
        assert_covering(1080, 120);
        assert_covering(1920, 7);
    }

    #[test]
    fn bands_survive_upsampled_grids() {
        // More output cells than source pixels: every band still holds a pixel.
        for src in 1..=5 {
            for out in src..=12 {
                assert_covering(src, out);
            }
        }
    }

    #[test]
    fn integral_ratio_bands_do_not_overlap() {
        assert_eq!(band(0, 8, 4), 0..2);
        assert_eq!(band(1, 8, 4), 2..4);
        assert_eq!(band(3, 8, 4), 6..8);
    }

    #[test]
    fn height_follows_aspect_ratio() {
        assert_eq!(output_dimensions(100, 100, 100, 0.5), (100, 50));
        assert_eq!(output_dimensions(100, 100, 50, 0.5), (50, 25));
        assert_eq!(output_dimensions(100, 100, 50, 1.0), (50, 50));
        assert_eq!(output_dimensions(3, 3, 3, 0.5), (3, 2));
    }

    #[test]
    fn width_is_never_upscaled() {
        assert_eq!(output_dimensions(8, 8, 120, 0.5), (8, 4));
        assert_eq!(output_dimensions(1, 1, 500, 0.5), (1, 1));
    }

    #[test]
    fn height_never_zero() {
        assert_eq!(output_dimensions(1000, 1, 10, 0.5), (10, 1));
    }

    #[test]
    fn uniform_image_resamples_to_constant() {
        let buf = PixelBuffer::filled(37, 23, Channels::Rgb, 77).unwrap();
        let expected = crate::luminance::brightness(&[77, 77, 77]);
        for (w, h) in [(1, 1), (5, 3), (37, 23), (10, 9)] {
            let cells = resample(&buf, w, h);
            assert_eq!(cells.len(), (w * h) as usize);
            assert!(cells.iter().all(|&c| c == expected), "{w}×{h}");
        }
    }

    #[test]
    fn box_filter_averages_stripes() {
        // Alternating black/white columns: point sampling would alias to
        // pure black or white, the box filter must give mid-gray.
        let data: Vec<u8> = (0..8 * 4).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
        let buf = PixelBuffer::new(8, 4, Channels::Gray, data).unwrap();
        let cells = resample(&buf, 4, 2);
        assert!(cells.iter().all(|&c| (c - 0.5).abs() < 1e-6), "{cells:?}");
    }

    #[test]
    fn quadrants_are_kept_apart() {
        #[rustfmt::skip]
        let data = vec![
            255, 255, 0, 0,
            255, 255, 0, 0,
            0, 0, 255, 255,
            0, 0, 255, 255,
        ];
        let buf = PixelBuffer::new(4, 4, Channels::Gray, data).unwrap();
        assert_eq!(resample(&buf, 2, 2), vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_grid_is_empty() {
        let buf = PixelBuffer::filled(4, 4, Channels::Gray, 0).unwrap();
        assert!(resample(&buf, 0, 3).is_empty());
    }
}
