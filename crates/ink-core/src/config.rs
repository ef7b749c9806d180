use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_STANDARD, Gradient, named_charset};
use crate::error::CoreError;
use crate::frame::Channels;

/// Largeur de sortie par défaut, en caractères.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 120;

/// Largeur maximale acceptée depuis la config.
pub const MAX_OUTPUT_WIDTH: u32 = 4096;

/// Ratio largeur/hauteur d'une cellule de terminal (≈ deux fois plus haute que large).
pub const DEFAULT_ASPECT_RATIO: f32 = 0.5;

/// Configuration d'une conversion. Fixée pour toute la durée d'un rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ink_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.output_width, 120);
/// assert!(!config.invert);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Largeur demandée en caractères. Plafonnée à la largeur source au rendu.
    pub output_width: u32,
    /// Inverser la correspondance luminance → densité (pour fond sombre).
    pub invert: bool,
    /// Correction d'aspect des cellules texte (largeur / hauteur).
    pub aspect_ratio: f32,
    /// Charset ordonné du plus clairsemé au plus dense.
    pub charset: String,
    /// Canaux demandés au décodeur.
    pub channels: Channels,
    /// Répertoires supplémentaires pour la résolution des chemins d'image.
    pub search_dirs: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            invert: false,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            charset: CHARSET_STANDARD.to_string(),
            channels: Channels::Gray,
            search_dirs: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.output_width = self.output_width.clamp(1, MAX_OUTPUT_WIDTH);
        self.aspect_ratio = if self.aspect_ratio.is_finite() {
            self.aspect_ratio.clamp(0.1, 4.0)
        } else {
            DEFAULT_ASPECT_RATIO
        };
        if self.charset.is_empty() {
            log::warn!("Charset vide, utilisation du charset standard.");
            self.charset = CHARSET_STANDARD.to_string();
        }
    }

    /// Build the gradient for this config.
    ///
    /// # Errors
    /// [`CoreError::InvalidConfig`] if the charset is empty.
    pub fn gradient(&self) -> Result<Gradient, CoreError> {
        Gradient::new(&self.charset)
    }

    /// Apply a charset given either by built-in name or as a literal ramp.
    ///
    /// # Example
    /// ```
    /// use ink_core::config::RenderConfig;
    /// let mut config = RenderConfig::default();
    /// config.set_charset("compact");
    /// assert_eq!(config.charset, " .:-=+*#%@");
    /// config.set_charset(" xX");
    /// assert_eq!(config.charset, " xX");
    /// ```
    pub fn set_charset(&mut self, spec: &str) {
        if let Some(named) = named_charset(spec) {
            self.charset = named.to_string();
        } else if spec.is_empty() {
            log::warn!("Charset vide ignoré.");
        } else {
            self.charset = spec.to_string();
        }
    }
}

/// Parse a requested output width.
///
/// # Errors
/// [`CoreError::InvalidConfig`] if `raw` is not a positive integer.
///
/// # Example
/// ```
/// use ink_core::config::parse_output_width;
/// assert_eq!(parse_output_width(" 80 ").unwrap(), 80);
/// assert!(parse_output_width("0").is_err());
/// assert!(parse_output_width("wide").is_err());
/// ```
pub fn parse_output_width(raw: &str) -> Result<u32, CoreError> {
    match raw.trim().parse::<i64>() {
        Ok(w) if w > 0 => u32::try_from(w)
            .map_err(|_| CoreError::InvalidConfig(format!("largeur hors limites : {raw}"))),
        Ok(w) => Err(CoreError::InvalidConfig(format!(
            "largeur non positive : {w}"
        ))),
        Err(e) => Err(CoreError::InvalidConfig(format!(
            "largeur illisible '{raw}' : {e}"
        ))),
    }
}

/// Like [`parse_output_width`], but recovers with [`DEFAULT_OUTPUT_WIDTH`]
/// and a warning instead of failing.
///
/// # Example
/// ```
/// use ink_core::config::{width_or_default, DEFAULT_OUTPUT_WIDTH};
/// assert_eq!(width_or_default("64"), 64);
/// assert_eq!(width_or_default("-3"), DEFAULT_OUTPUT_WIDTH);
/// ```
#[must_use]
pub fn width_or_default(raw: &str) -> u32 {
    parse_output_width(raw).unwrap_or_else(|e| {
        log::warn!("{e}; utilisation de la largeur par défaut {DEFAULT_OUTPUT_WIDTH}.");
        DEFAULT_OUTPUT_WIDTH
    })
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    output_width: Option<u32>,
    invert: Option<bool>,
    aspect_ratio: Option<f32>,
    charset: Option<String>,
    channels: Option<Channels>,
    search_dirs: Option<Vec<PathBuf>>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ink_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.output_width {
            config.output_width = v;
        }
        if let Some(v) = r.invert {
            config.invert = v;
        }
        if let Some(v) = r.aspect_ratio {
            config.aspect_ratio = v;
        }
        if let Some(v) = r.charset {
            config.set_charset(&v);
        }
        if let Some(v) = r.channels {
            config.channels = v;
        }
        if let Some(v) = r.search_dirs {
            config.search_dirs = v;
        }
    }

    config.clamp_all();
    Ok(config)
}
