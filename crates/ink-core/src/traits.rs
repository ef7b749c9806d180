use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::frame::{Channels, PixelBuffer};

/// Fournit des pixels décodés au pipeline.
///
/// Implémenté par : `ImageFileSource`.
///
/// # Example
/// ```
/// use ink_core::traits::PixelSource;
/// use ink_core::frame::{Channels, PixelBuffer};
/// use ink_core::CoreError;
/// use std::path::Path;
///
/// struct Flat;
/// impl PixelSource for Flat {
///     fn load(&self, _path: &Path, channels: Channels) -> Result<PixelBuffer, CoreError> {
///         PixelBuffer::filled(4, 4, channels, 128)
///     }
/// }
/// let buf = Flat.load(Path::new("any"), Channels::Gray).unwrap();
/// assert_eq!(buf.width(), 4);
/// ```
pub trait PixelSource {
    /// Decode the whole file, or fail before any rendering starts.
    ///
    /// # Errors
    /// [`CoreError::DecodeFailure`] when the file is not a decodable,
    /// non-empty image.
    fn load(&self, path: &Path, channels: Channels) -> Result<PixelBuffer, CoreError>;
}

/// Capacité de synthèse vocale de la plateforme.
///
/// Une implémentation est choisie au démarrage ; le pipeline d'image ne
/// l'utilise jamais.
pub trait Speaker {
    /// Speak `text` aloud, blocking until the backend exits.
    ///
    /// # Errors
    /// [`CoreError::Speech`] if the backend cannot be found or fails.
    fn speak(&self, text: &str) -> Result<(), CoreError>;

    /// Full path of the backend executable, if installed.
    fn locate_executable(&self) -> Option<PathBuf>;
}
