use std::path::PathBuf;

use bk_core::config::ConfigPatch;
use clap::{Parser, ValueEnum};

/// Profil lu automatiquement s'il existe dans le répertoire courant.
pub const DEFAULT_PROFILE: &str = "brickart.toml";

/// brickart — Text to brick-art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Texte à convertir. Lu sur l'entrée standard (une œuvre par ligne) si absent.
    pub text: Vec<String>,

    /// Profil TOML ([brick] + [glyphs]). Défaut : ./brickart.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Caractères par bit du glyphe.
    #[arg(long)]
    pub pixel_width: Option<usize>,

    /// Espace entre les caractères (arrondi à l'entier le plus proche).
    #[arg(long)]
    pub char_spacing: Option<f64>,

    /// Nombre de lignes de sortie.
    #[arg(long)]
    pub rows: Option<usize>,

    /// Symbole des pixels pleins.
    #[arg(long)]
    pub fill: Option<char>,

    /// Symbole des pixels vides.
    #[arg(long)]
    pub empty: Option<char>,

    /// Format de sortie.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Lister les caractères supportés et quitter.
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output format of the converted grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain rows joined by newlines.
    Text,
    /// Array literal of template strings.
    Template,
    /// Array literal of double-quoted strings.
    Quoted,
}

impl Cli {
    /// Command-line overrides, applied on top of the profile.
    #[must_use]
    pub fn overrides(&self) -> ConfigPatch {
        ConfigPatch {
            pixel_width: self.pixel_width,
            char_spacing: self.char_spacing,
            target_rows: self.rows,
            fill_char: self.fill,
            empty_char: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_map_to_patch_fields() {
        let cli = Cli::try_parse_from([
            "brickart",
            "--rows",
            "9",
            "--fill",
            "#",
            "--char-spacing",
            "1.5",
            "HELLO",
        ])
        .unwrap();
        let patch = cli.overrides();
        assert_eq!(patch.target_rows, Some(9));
        assert_eq!(patch.fill_char, Some('#'));
        assert_eq!(patch.char_spacing, Some(1.5));
        assert_eq!(patch.pixel_width, None);
        assert_eq!(cli.text, ["HELLO"]);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn no_flags_means_empty_patch() {
        let cli = Cli::try_parse_from(["brickart", "--format", "quoted"]).unwrap();
        assert!(cli.overrides().is_empty());
        assert!(cli.text.is_empty());
        assert_eq!(cli.format, OutputFormat::Quoted);
    }

    #[test]
    fn multi_char_fill_is_rejected() {
        assert!(Cli::try_parse_from(["brickart", "--fill", "##", "A"]).is_err());
    }
}
