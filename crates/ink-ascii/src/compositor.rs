use ink_core::config::RenderConfig;
use ink_core::error::CoreError;
use ink_core::frame::{OutputGrid, PixelBuffer};

use crate::quantize::Quantizer;
use crate::resample::{output_dimensions, resample};

/// Converter orchestre extraction → rééchantillonnage → quantification.
///
/// Holds everything fixed for a conversion: gradient, inversion, width and
/// aspect correction.
///
/// # Example
/// ```
/// use ink_core::config::RenderConfig;
/// use ink_core::frame::{Channels, PixelBuffer};
/// use ink_ascii::compositor::Converter;
///
/// let config = RenderConfig { output_width: 4, ..RenderConfig::default() };
/// let converter = Converter::new(&config).unwrap();
/// let buf = PixelBuffer::filled(8, 8, Channels::Gray, 255).unwrap();
/// let grid = converter.convert(&buf).unwrap();
/// assert_eq!((grid.width(), grid.height()), (4, 2));
/// assert_eq!(grid.to_string(), "    \n    \n");
/// ```
#[derive(Clone, Debug)]
pub struct Converter {
    quantizer: Quantizer,
    output_width: u32,
    aspect_ratio: f32,
}

impl Converter {
    /// Build a converter from a render config.
    ///
    /// # Errors
    /// [`CoreError::InvalidConfig`] if the charset is empty.
    pub fn new(config: &RenderConfig) -> Result<Self, CoreError> {
        Ok(Self {
            quantizer: Quantizer::new(config.gradient()?, config.invert),
            output_width: config.output_width,
            aspect_ratio: config.aspect_ratio,
        })
    }

    /// The quantizer in use.
    #[must_use]
    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// Grid size this converter produces for `buf`.
    #[must_use]
    pub fn dimensions_for(&self, buf: &PixelBuffer) -> (u32, u32) {
        output_dimensions(buf.width(), buf.height(), self.output_width, self.aspect_ratio)
    }

    /// Convert a whole buffer. The grid is complete before it is returned.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if the resampled cells do not fill
    /// the computed grid.
    pub fn convert(&self, buf: &PixelBuffer) -> Result<OutputGrid, CoreError> {
        let (w, h) = self.dimensions_for(buf);
        if w < self.output_width {
            log::info!(
                "Largeur demandée {} plafonnée à la largeur source {w}",
                self.output_width
            );
        }
        log::debug!(
            "Conversion {}×{} → {w}×{h} ({} glyphes)",
            buf.width(),
            buf.height(),
            self.quantizer.gradient().len()
        );

        let cells = resample(buf, w, h)
            .into_iter()
            .map(|b| self.quantizer.glyph(b))
            .collect();
        OutputGrid::from_cells(w, h, cells)
    }
}
