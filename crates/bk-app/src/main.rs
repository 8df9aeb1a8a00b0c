use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bk_ascii::converter::BrickArtConverter;
use bk_core::config::{BrickProfile, load_profile};
use clap::Parser;

pub mod cli;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger le profil puis appliquer les overrides CLI
    let profile = resolve_profile(&cli)?;
    let mut converter = BrickArtConverter::from_profile(&profile);
    converter.configure(&cli.overrides());

    if cli.list {
        println!("{}", output::format_supported(&converter.supported_characters()));
        return Ok(());
    }

    // 4. Texte : arguments, sinon entrée standard
    let texts = if cli.text.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Impossible de lire l'entrée standard")?;
        output::input_lines(&input)
    } else {
        vec![cli.text.join(" ")]
    };
    if texts.is_empty() {
        anyhow::bail!("Aucun texte à convertir. Passez-le en argument ou sur l'entrée standard.");
    }

    // 5. Convertir et écrire
    let blocks: Vec<String> = texts
        .iter()
        .map(|text| output::format_art(&converter.convert(text), cli.format))
        .collect();
    println!("{}", blocks.join("\n\n"));

    Ok(())
}

/// Resolve profile: explicit --config must exist, the implicit default is optional.
fn resolve_profile(cli: &cli::Cli) -> Result<BrickProfile> {
    if let Some(ref path) = cli.config {
        return load_profile(path);
    }
    let default = Path::new(cli::DEFAULT_PROFILE);
    if default.exists() {
        load_profile(default)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli::DEFAULT_PROFILE
        );
        Ok(BrickProfile::default())
    }
}
