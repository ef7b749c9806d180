use std::path::{Path, PathBuf};

use ink_core::error::CoreError;

/// Résout un nom de fichier parmi plusieurs répertoires candidats.
///
/// Order: the path as given, each configured directory, the current
/// directory, the executable's directory, then `<exe dir>/../assets`.
///
/// # Example
/// ```
/// use ink_source::locate::ResourceLocator;
/// let locator = ResourceLocator::new(vec![]).without_defaults();
/// assert!(locator.resolve("surely-missing.png").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResourceLocator {
    dirs: Vec<PathBuf>,
    use_defaults: bool,
}

impl ResourceLocator {
    /// Locator searching `dirs` before the default locations.
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            use_defaults: true,
        }
    }

    /// Only search the path as given and the configured directories.
    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Candidate paths for `name`, in search order.
    #[must_use]
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let requested = Path::new(name);
        let mut out = vec![requested.to_path_buf()];
        if requested.is_absolute() {
            return out;
        }

        out.extend(self.dirs.iter().map(|d| d.join(requested)));

        if self.use_defaults {
            if let Ok(cwd) = std::env::current_dir() {
                out.push(cwd.join(requested));
            }
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(Path::to_path_buf))
            {
                out.push(exe_dir.join(requested));
                out.push(exe_dir.join("..").join("assets").join(requested));
            }
        }

        out.dedup();
        out
    }

    /// First candidate that is an existing file.
    ///
    /// # Errors
    /// [`CoreError::ResourceNotFound`] listing every attempted location.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, CoreError> {
        let searched = self.candidates(name);
        for candidate in &searched {
            if candidate.is_file() {
                log::debug!("Ressource {name} trouvée : {}", candidate.display());
                return Ok(candidate.clone());
            }
        }
        Err(CoreError::ResourceNotFound {
            name: name.to_string(),
            searched,
        })
    }
}
