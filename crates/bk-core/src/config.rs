use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::glyph::Glyph;

/// Configuration complète de la conversion texte → briques.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use bk_core::config::BrickConfig;
/// let config = BrickConfig::default();
/// assert_eq!(config.target_rows, 12);
/// assert_eq!(config.spacing_width(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrickConfig {
    /// Caractères de sortie par bit du glyphe (≥ 1).
    pub pixel_width: usize,
    /// Espace entre deux caractères, arrondi à l'entier le plus proche à l'insertion.
    pub char_spacing: f64,
    /// Nombre de lignes de la grille de sortie (≥ 1).
    pub target_rows: usize,
    /// Symbole des bits à 1.
    pub fill_char: char,
    /// Symbole des bits à 0.
    pub empty_char: char,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            pixel_width: 2,
            char_spacing: 2.5,
            target_rows: 12,
            fill_char: '_',
            empty_char: ' ',
        }
    }
}

impl BrickConfig {
    /// Raise numeric fields to their lower bounds. No upper bound: large
    /// values are honoured exactly.
    /// Called after every merge so a conversion never sees an invalid value.
    pub fn clamp_all(&mut self) {
        self.pixel_width = self.pixel_width.max(1);
        self.target_rows = self.target_rows.max(1);
        if !self.char_spacing.is_finite() || self.char_spacing < 0.0 {
            self.char_spacing = 0.0;
        }
    }

    /// Number of literal spaces inserted between two characters.
    ///
    /// `char_spacing` rounded half away from zero: 2.5 gives 3, 2.4 gives 2.
    ///
    /// # Example
    /// ```
    /// use bk_core::config::BrickConfig;
    /// let config = BrickConfig { char_spacing: 1.4, ..BrickConfig::default() };
    /// assert_eq!(config.spacing_width(), 1);
    /// ```
    #[must_use]
    pub fn spacing_width(&self) -> usize {
        if self.char_spacing.is_finite() && self.char_spacing > 0.0 {
            self.char_spacing.round() as usize
        } else {
            0
        }
    }

    /// Merge every field set in `patch`, then clamp.
    ///
    /// # Example
    /// ```
    /// use bk_core::config::{BrickConfig, ConfigPatch};
    /// let mut config = BrickConfig::default();
    /// config.apply(&ConfigPatch::default().target_rows(0).fill_char('#'));
    /// assert_eq!(config.target_rows, 1);
    /// assert_eq!(config.fill_char, '#');
    /// assert_eq!(config.pixel_width, 2);
    /// ```
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(v) = patch.pixel_width {
            self.pixel_width = v;
        }
        if let Some(v) = patch.char_spacing {
            self.char_spacing = v;
        }
        if let Some(v) = patch.target_rows {
            self.target_rows = v;
        }
        if let Some(v) = patch.fill_char {
            self.fill_char = v;
        }
        if let Some(v) = patch.empty_char {
            self.empty_char = v;
        }
        self.clamp_all();
    }

    /// Copy of `self` with `patch` merged in.
    #[must_use]
    pub fn patched(&self, patch: &ConfigPatch) -> Self {
        let mut config = self.clone();
        config.apply(patch);
        config
    }
}

/// Surcharge partielle de [`BrickConfig`] : tous les champs sont optionnels.
///
/// Sert à la fois de section `[brick]` TOML, d'argument à `configure` et
/// de porteur des options de la ligne de commande.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ConfigPatch {
    pub pixel_width: Option<usize>,
    pub char_spacing: Option<f64>,
    pub target_rows: Option<usize>,
    pub fill_char: Option<char>,
    pub empty_char: Option<char>,
}

impl ConfigPatch {
    #[must_use]
    pub fn pixel_width(mut self, v: usize) -> Self {
        self.pixel_width = Some(v);
        self
    }

    #[must_use]
    pub fn char_spacing(mut self, v: f64) -> Self {
        self.char_spacing = Some(v);
        self
    }

    #[must_use]
    pub fn target_rows(mut self, v: usize) -> Self {
        self.target_rows = Some(v);
        self
    }

    #[must_use]
    pub fn fill_char(mut self, v: char) -> Self {
        self.fill_char = Some(v);
        self
    }

    #[must_use]
    pub fn empty_char(mut self, v: char) -> Self {
        self.empty_char = Some(v);
        self
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Profil chargé depuis un fichier : configuration + glyphes personnalisés.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrickProfile {
    /// Merged and clamped configuration.
    pub config: BrickConfig,
    /// Validated custom glyphs, sorted by character.
    pub glyphs: Vec<(char, Glyph)>,
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ProfileFile {
    brick: Option<ConfigPatch>,
    #[serde(default)]
    glyphs: BTreeMap<String, Vec<String>>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if a custom
/// glyph is malformed.
///
/// # Example
/// ```no_run
/// use bk_core::config::load_profile;
/// use std::path::Path;
/// let profile = load_profile(Path::new("brickart.toml")).unwrap();
/// ```
pub fn load_profile(path: &Path) -> Result<BrickProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let profile = parse_profile(&content)
        .with_context(|| format!("Profil invalide dans {}", path.display()))?;

    log::info!(
        "Profil chargé depuis {} ({} glyphe(s) personnalisé(s))",
        path.display(),
        profile.glyphs.len()
    );
    Ok(profile)
}

/// Parse a profile from TOML text.
///
/// ```toml
/// [brick]
/// pixel_width = 3
/// fill_char = "#"
///
/// [glyphs]
/// "♥" = ["01010", "11111", "11111", "01110", "00100", "00000", "00000"]
/// ```
///
/// # Errors
/// Returns an error on invalid TOML, on a glyph key that is not exactly one
/// character, or on a malformed glyph bitmap.
///
/// # Example
/// ```
/// use bk_core::config::parse_profile;
/// let profile = parse_profile("[brick]\ntarget_rows = 14\n").unwrap();
/// assert_eq!(profile.config.target_rows, 14);
/// assert!(profile.glyphs.is_empty());
/// ```
pub fn parse_profile(content: &str) -> Result<BrickProfile> {
    let file: ProfileFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = BrickConfig::default();
    if let Some(patch) = file.brick {
        config.apply(&patch);
    }

    let mut glyphs = Vec::with_capacity(file.glyphs.len());
    for (key, rows) in &file.glyphs {
        let mut chars = key.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(CoreError::Config(format!(
                    "clé de glyphe {key:?} : un seul caractère attendu"
                ))
                .into());
            }
        };
        let glyph = Glyph::parse(rows).with_context(|| format!("Glyphe {key:?}"))?;
        glyphs.push((ch, glyph));
    }

    Ok(BrickProfile { config, glyphs })
}
