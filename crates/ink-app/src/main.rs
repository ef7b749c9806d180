use std::io::{BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use ink_source::image::ImageFileSource;
use ink_speech::platform_speaker;

pub mod cli;
pub mod commands;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // 3. Sous-commande texte, ou rendu d'image par défaut
    if let Some(ref command) = cli.command {
        let speaker = platform_speaker();
        if let Some(exe) = speaker.locate_executable() {
            log::debug!("Synthèse vocale disponible : {}", exe.display());
        }
        commands::run_command(command, speaker.as_ref(), &mut out)?;
    } else {
        pipeline::run_render(&cli.render, &ImageFileSource, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
