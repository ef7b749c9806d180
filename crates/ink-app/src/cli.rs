use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ink_ascii::shapes::MAX_SHAPE_EXTENT;

/// Rayon max : le cercle fait `4r + 1` colonnes.
const MAX_RADIUS: i64 = (MAX_SHAPE_EXTENT as i64 - 1) / 4;
/// Facteur d'agrandissement max d'un motif.
const MAX_STAMP_SCALE: i64 = 256;

/// inkgrid — convertit une image en art texte.
#[derive(Parser, Debug)]
#[command(name = "inkgrid", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Arguments of the default (image rendering) command.
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: Option<PathBuf>,

    /// Largeur de sortie en caractères. Une valeur invalide est remplacée par le défaut.
    #[arg(allow_negative_numbers = true)]
    pub width: Option<String>,

    /// Largeur de sortie (prioritaire sur la forme positionnelle).
    #[arg(long = "width", value_name = "N", allow_hyphen_values = true)]
    pub width_flag: Option<String>,

    /// Inverser la correspondance luminance → densité (fond sombre).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Décoder en RGB et pondérer la luminance (sinon niveaux de gris).
    #[arg(long, default_value_t = false)]
    pub rgb: bool,

    /// Charset : standard, compact, blocks, minimal, ou une rampe littérale.
    #[arg(long)]
    pub charset: Option<String>,

    /// Ratio largeur/hauteur d'une cellule texte.
    #[arg(long)]
    pub aspect: Option<f32>,

    /// Répertoire supplémentaire où chercher l'image (répétable).
    #[arg(long = "search-dir", value_name = "DIR")]
    pub search_dirs: Vec<PathBuf>,

    /// Fichier de configuration TOML. Défaut : ./inkgrid.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Écrit un nombre en toutes lettres.
    Words {
        #[arg(allow_negative_numbers = true)]
        number: i64,
        /// Prononcer le résultat.
        #[arg(long, default_value_t = false)]
        speak: bool,
    },
    /// Épelle un mot lettre par lettre.
    Spell {
        word: String,
        /// Séparateur entre les lettres.
        #[arg(long, default_value = " ")]
        sep: String,
        /// Garder la casse d'origine.
        #[arg(long, default_value_t = false)]
        keep_case: bool,
        /// Prononcer l'épellation.
        #[arg(long, default_value_t = false)]
        speak: bool,
    },
    /// Prononce un texte via la synthèse vocale de la plateforme.
    Say {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Dessine un carré.
    Square {
        #[arg(value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_SHAPE_EXTENT)))]
        size: u32,
        #[arg(long, default_value_t = '#')]
        glyph: char,
        /// Contour seulement.
        #[arg(long, default_value_t = false)]
        hollow: bool,
    },
    /// Dessine un cercle (étiré ×2 horizontalement).
    Circle {
        #[arg(value_parser = clap::value_parser!(u32).range(..=MAX_RADIUS))]
        radius: u32,
        #[arg(long, default_value_t = 'o')]
        glyph: char,
        /// Disque plein plutôt que contour.
        #[arg(long, default_value_t = false)]
        filled: bool,
    },
    /// Tamponne un motif intégré : heart, smiley.
    Stamp {
        pattern: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_STAMP_SCALE))]
        scale_x: u32,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_STAMP_SCALE))]
        scale_y: u32,
        #[arg(long, default_value_t = '#')]
        on: char,
        #[arg(long, default_value_t = ' ')]
        off: char,
    },
}
