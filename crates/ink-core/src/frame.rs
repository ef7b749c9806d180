use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Nombre de canaux par pixel demandés au décodeur. L'alpha n'est jamais lu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Channels {
    /// One 8-bit luma sample per pixel.
    #[default]
    Gray,
    /// Three 8-bit samples per pixel, R G B.
    Rgb,
}

impl Channels {
    /// Samples per pixel (1 or 3).
    ///
    /// # Example
    /// ```
    /// use ink_core::frame::Channels;
    /// assert_eq!(Channels::Gray.count(), 1);
    /// assert_eq!(Channels::Rgb.count(), 3);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
        }
    }
}

/// Buffer de pixels immuable, row-major, de haut en bas.
///
/// `data.len() == width * height * channels.count()` is checked at
/// construction; an out-of-range [`pixel`](Self::pixel) access panics.
///
/// # Example
/// ```
/// use ink_core::frame::{Channels, PixelBuffer};
/// let buf = PixelBuffer::new(2, 1, Channels::Rgb, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(buf.pixel(1, 0), &[4, 5, 6]);
/// ```
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: Channels,
}

impl PixelBuffer {
    /// Wrap decoded samples.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if either dimension is zero or if
    /// `data` does not hold exactly `width * height` pixels.
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * channels.count();
        if width == 0 || height == 0 || data.len() != expected {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Uniform buffer, every sample set to `value`. Handy for tests and benches.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if either dimension is zero.
    pub fn filled(
        width: u32,
        height: u32,
        channels: Channels,
        value: u8,
    ) -> Result<Self, CoreError> {
        let len = width as usize * height as usize * channels.count();
        Self::new(width, height, channels, vec![value; len])
    }

    /// Width in pixels.
    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline(always)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    #[inline(always)]
    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw samples.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Samples of row `y`.
    #[inline(always)]
    #[must_use]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * self.channels.count();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Samples of pixel (x, y): one byte for gray, three for RGB.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let n = self.channels.count();
        let idx = (y as usize * self.width as usize + x as usize) * n;
        &self.data[idx..idx + n]
    }
}

/// Grille de sortie texte : `height` lignes de exactement `width` glyphes.
///
/// # Example
/// ```
/// use ink_core::frame::OutputGrid;
/// let mut grid = OutputGrid::new(3, 2, '.');
/// grid.set(1, 0, '#');
/// assert_eq!(grid.to_string(), ".#.\n...\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputGrid {
    cells: Vec<char>,
    width: u32,
    height: u32,
}

impl OutputGrid {
    /// Grid filled with `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: char) -> Self {
        Self {
            cells: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build from row-major cells.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<char>) -> Result<Self, CoreError> {
        if cells.len() != width as usize * height as usize {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Empty 0×0 grid.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, 0, ' ')
    }

    /// Width in characters.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in lines.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the cell at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Cell at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact(0) panics; a zero-width grid has no rows to yield.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Rows as owned strings, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for OutputGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                f.write_fmt(format_args!("{ch}"))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffer_rejects_wrong_length() {
        let err = PixelBuffer::new(2, 2, Channels::Rgb, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidDimensions {
                width: 2,
                height: 2
            }
        ));
    }

    #[test]
    fn pixel_buffer_rejects_zero_dimension() {
        assert!(PixelBuffer::new(0, 4, Channels::Gray, vec![]).is_err());
        assert!(PixelBuffer::filled(4, 0, Channels::Gray, 0).is_err());
    }

    #[test]
    fn gray_pixel_is_single_sample() {
        let buf = PixelBuffer::new(2, 2, Channels::Gray, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(buf.pixel(0, 1), &[30]);
        assert_eq!(buf.row(1), &[30, 40]);
    }

    #[test]
    #[should_panic(expected = "out of")]
    fn pixel_out_of_range_panics() {
        let buf = PixelBuffer::filled(1, 1, Channels::Gray, 0).unwrap();
        let _ = buf.pixel(0, 1);
    }

    #[test]
    fn grid_display_terminates_every_line() {
        let grid = OutputGrid::from_cells(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        assert_eq!(grid.to_string(), "ab\ncd\n");
        assert_eq!(grid.lines(), vec!["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(OutputGrid::empty().to_string(), "");
    }
}
