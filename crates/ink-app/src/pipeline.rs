use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ink_ascii::compositor::Converter;
use ink_ascii::render::render;
use ink_core::config::{RenderConfig, load_config, width_or_default};
use ink_core::frame::Channels;
use ink_core::traits::PixelSource;
use ink_source::locate::ResourceLocator;

use crate::cli::RenderArgs;

/// Fichier de config lu implicitement s'il existe.
const DEFAULT_CONFIG_FILE: &str = "inkgrid.toml";

/// Resolve config: file (explicit or implicit), then CLI overrides.
///
/// # Errors
/// Returns an error if a config file exists but cannot be parsed.
pub fn resolve_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) if path.exists() => load_config(path)?,
        Some(path) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            RenderConfig::default()
        }
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                log::info!("Config implicite {DEFAULT_CONFIG_FILE}");
                load_config(implicit)?
            } else {
                RenderConfig::default()
            }
        }
    };

    apply_overrides(&mut config, args);
    Ok(config)
}

/// Appliquer les overrides CLI sur la config chargée.
pub fn apply_overrides(config: &mut RenderConfig, args: &RenderArgs) {
    if let Some(raw) = args.width_flag.as_deref().or(args.width.as_deref()) {
        config.output_width = width_or_default(raw);
    }
    if args.invert {
        config.invert = true;
    }
    if args.rgb {
        config.channels = Channels::Rgb;
    }
    if let Some(ref charset) = args.charset {
        config.set_charset(charset);
    }
    if let Some(aspect) = args.aspect {
        config.aspect_ratio = aspect;
    }
    config.search_dirs.extend(args.search_dirs.iter().cloned());
    config.clamp_all();
}

/// Localise, décode, convertit puis écrit l'image sur `out`.
///
/// Nothing is written unless the image was located and fully decoded.
///
/// # Errors
/// Returns an error if the image argument is missing, the file cannot be
/// located or decoded, or writing fails.
pub fn run_render<W: Write>(
    args: &RenderArgs,
    source: &dyn PixelSource,
    out: &mut W,
) -> Result<()> {
    let requested = args
        .image
        .as_deref()
        .context("Aucune image spécifiée. Usage : inkgrid <IMAGE> [WIDTH] [--invert]")?;

    let config = resolve_config(args)?;
    let path = locate(requested, &config.search_dirs)?;

    let pixels = source.load(&path, config.channels)?;
    log::info!(
        "{} : {}×{} px, largeur demandée {}",
        path.display(),
        pixels.width(),
        pixels.height(),
        config.output_width
    );

    let converter = Converter::new(&config)?;
    let grid = converter.convert(&pixels)?;

    render(&grid, out).context("Écriture de la sortie impossible")?;
    Ok(())
}

fn locate(requested: &Path, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    let locator = ResourceLocator::new(search_dirs.to_vec());
    Ok(locator.resolve(&requested.to_string_lossy())?)
}
