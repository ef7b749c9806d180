use std::path::Path;

use ink_core::error::CoreError;
use ink_core::frame::{Channels, PixelBuffer};
use ink_core::traits::PixelSource;

/// Source de pixels lue depuis un fichier image (PNG, JPEG, BMP, GIF).
///
/// Seule la première frame d'un GIF animé est lue.
///
/// # Example
/// ```no_run
/// use ink_core::frame::Channels;
/// use ink_core::traits::PixelSource;
/// use ink_source::image::ImageFileSource;
/// use std::path::Path;
/// let buf = ImageFileSource.load(Path::new("test.png"), Channels::Gray).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileSource;

impl PixelSource for ImageFileSource {
    fn load(&self, path: &Path, channels: Channels) -> Result<PixelBuffer, CoreError> {
        load_pixels(path, channels)
    }
}

/// Décode `path` en un buffer de `channels` canaux.
///
/// # Errors
/// [`CoreError::DecodeFailure`] if the file cannot be opened or decoded, or
/// decodes to a zero-sized image.
///
/// # Example
/// ```no_run
/// use ink_core::frame::Channels;
/// use ink_source::image::load_pixels;
/// use std::path::Path;
/// let buf = load_pixels(Path::new("test.png"), Channels::Rgb).unwrap();
/// ```
pub fn load_pixels(path: &Path, channels: Channels) -> Result<PixelBuffer, CoreError> {
    let img = image::open(path).map_err(|e| CoreError::DecodeFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (width, height, data) = match channels {
        Channels::Gray => {
            let luma = img.to_luma8();
            let (w, h) = luma.dimensions();
            (w, h, luma.into_raw())
        }
        Channels::Rgb => {
            let rgb = img.to_rgb8();
            let (w, h) = rgb.dimensions();
            (w, h, rgb.into_raw())
        }
    };

    if width == 0 || height == 0 {
        return Err(CoreError::DecodeFailure {
            path: path.to_path_buf(),
            reason: format!("image vide ({width}×{height})"),
        });
    }

    log::debug!(
        "Image {} décodée : {width}×{height}, {:?}",
        path.display(),
        channels
    );

    PixelBuffer::new(width, height, channels, data).map_err(|e| CoreError::DecodeFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
