use bk_core::config::{BrickConfig, BrickProfile, ConfigPatch};
use bk_core::error::CoreError;
use bk_core::glyph::{GLYPH_ROWS, Glyph, GlyphTable};
use bk_core::grid::BrickArt;

use crate::expand::expand_rows;
use crate::scale::scale_row_into;

/// Convertisseur texte → briques.
///
/// Owns its configuration and its own copy of the glyph table, so custom
/// glyphs added to one converter never leak into another.
///
/// # Example
/// ```
/// use bk_ascii::converter::BrickArtConverter;
/// let converter = BrickArtConverter::default();
/// let art = converter.convert("HI");
/// assert_eq!(art.height(), 12);
/// assert_eq!(art.rows()[0], "__      __     ______  ");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BrickArtConverter {
    config: BrickConfig,
    glyphs: GlyphTable,
}

impl BrickArtConverter {
    /// Converter over the built-in font.
    #[must_use]
    pub fn new(config: BrickConfig) -> Self {
        Self::with_glyphs(config, GlyphTable::builtin())
    }

    /// Converter over a caller-supplied table.
    #[must_use]
    pub fn with_glyphs(mut config: BrickConfig, glyphs: GlyphTable) -> Self {
        config.clamp_all();
        Self { config, glyphs }
    }

    /// Converter over the built-in font plus the profile's custom glyphs.
    #[must_use]
    pub fn from_profile(profile: &BrickProfile) -> Self {
        let mut converter = Self::new(profile.config.clone());
        for &(ch, glyph) in &profile.glyphs {
            converter.insert_glyph(ch, glyph);
        }
        converter
    }

    #[must_use]
    pub fn config(&self) -> &BrickConfig {
        &self.config
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Merge `patch` into this converter's configuration. Never fails:
    /// out-of-range values are clamped.
    ///
    /// # Example
    /// ```
    /// use bk_ascii::converter::BrickArtConverter;
    /// use bk_core::config::ConfigPatch;
    /// let mut converter = BrickArtConverter::default();
    /// let art = converter
    ///     .configure(&ConfigPatch::default().target_rows(7).pixel_width(1))
    ///     .convert("A");
    /// assert_eq!(art.rows()[0], " ### ".replace('#', "_"));
    /// ```
    pub fn configure(&mut self, patch: &ConfigPatch) -> &mut Self {
        self.config.apply(patch);
        log::debug!("Configuration mise à jour : {:?}", self.config);
        self
    }

    /// Value-style variant of [`BrickArtConverter::configure`].
    #[must_use]
    pub fn with_patch(mut self, patch: &ConfigPatch) -> Self {
        self.configure(patch);
        self
    }

    /// Validate and register a custom glyph for `ch`.
    ///
    /// ASCII letters are stored uppercase, like every lookup.
    ///
    /// # Errors
    /// `CoreError::GlyphRowCount` unless `rows` has exactly 7 entries,
    /// `CoreError::GlyphRowContent` unless each row is exactly 5 `0`/`1`
    /// characters. On error the table is left untouched.
    ///
    /// # Example
    /// ```
    /// use bk_ascii::converter::BrickArtConverter;
    /// let mut converter = BrickArtConverter::default();
    /// converter
    ///     .add_glyph('♥', &["01010", "11111", "11111", "01110", "00100", "00000", "00000"])
    ///     .unwrap();
    /// assert!(converter.is_supported('♥'));
    /// assert!(converter.add_glyph('x', &["0101"; 7]).is_err());
    /// ```
    pub fn add_glyph<S: AsRef<str>>(
        &mut self,
        ch: char,
        rows: &[S],
    ) -> Result<&mut Self, CoreError> {
        let glyph = Glyph::parse(rows)?;
        Ok(self.insert_glyph(ch, glyph))
    }

    /// Register an already-validated glyph.
    pub fn insert_glyph(&mut self, ch: char, glyph: Glyph) -> &mut Self {
        if self.glyphs.insert(ch, glyph).is_some() {
            log::debug!("Glyphe {ch:?} remplacé");
        } else {
            log::debug!("Glyphe {ch:?} ajouté");
        }
        self
    }

    /// Whether `ch` has its own glyph (ASCII letters case-insensitive).
    #[must_use]
    pub fn is_supported(&self, ch: char) -> bool {
        self.glyphs.contains(ch)
    }

    /// Current table keys, sorted.
    #[must_use]
    pub fn supported_characters(&self) -> Vec<char> {
        self.glyphs.characters()
    }

    /// Convert `text` into a rectangular brick grid. Never fails.
    ///
    /// Iterates by `char`, so astral-plane symbols count as one character.
    /// With `target_rows < 7` the grid keeps all 7 glyph rows.
    #[must_use]
    pub fn convert(&self, text: &str) -> BrickArt {
        let glyphs: Vec<&Glyph> = text.chars().map(|ch| self.glyphs.resolve(ch)).collect();
        let base = self.base_rows(&glyphs);
        let rows = expand_rows(&base, self.config.target_rows);
        let art = BrickArt::from_rows(rows);
        log::debug!(
            "{} caractère(s) → {}×{}",
            glyphs.len(),
            art.width(),
            art.height()
        );
        art
    }

    /// [`BrickArtConverter::convert`] joined by newlines.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        self.convert(text).render()
    }

    /// The 7 rows of the whole text at one height unit.
    fn base_rows(&self, glyphs: &[&Glyph]) -> Vec<String> {
        let BrickConfig {
            pixel_width,
            fill_char,
            empty_char,
            ..
        } = self.config;
        let gap = " ".repeat(self.config.spacing_width());

        (0..GLYPH_ROWS)
            .map(|r| {
                let mut line = String::new();
                for (i, glyph) in glyphs.iter().enumerate() {
                    if i > 0 {
                        line.push_str(&gap);
                    }
                    scale_row_into(&mut line, glyph.row(r), pixel_width, fill_char, empty_char);
                }
                line
            })
            .collect()
    }
}

/// Conversion ponctuelle avec la police intégrée.
///
/// # Example
/// ```
/// use bk_ascii::converter::quick_convert;
/// use bk_core::config::ConfigPatch;
/// let art = quick_convert("OK", &ConfigPatch::default().target_rows(10));
/// assert_eq!(art.height(), 10);
/// ```
#[must_use]
pub fn quick_convert(text: &str, patch: &ConfigPatch) -> BrickArt {
    BrickArtConverter::default().with_patch(patch).convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::scale_row;
    use bk_core::font::DEFAULT_GLYPH;
    use bk_core::glyph::GLYPH_COLS;

    const HEART: [&str; 7] = [
        "01010", "11111", "11111", "01110", "00100", "00000", "00000",
    ];

    #[test]
    fn hi_with_default_config() {
        let art = BrickArtConverter::default().convert("HI");
        assert_eq!(art.height(), 12);

        let h = scale_row(0b10001, 2, '_', ' ');
        let i = scale_row(0b01110, 2, '_', ' ');
        assert_eq!(art.rows()[0], format!("{h}   {i}"));
        assert_eq!(art.width(), 2 * GLYPH_COLS * 2 + 3);

        // La barre de H (ligne 3) occupe une seule ligne de sortie à 12 lignes.
        let bar = format!("{}   {}", "_".repeat(10), scale_row(0b00100, 2, '_', ' '));
        assert_eq!(art.rows().iter().filter(|r| **r == bar).count(), 1);
    }

    #[test]
    fn lowercase_letters_render_like_uppercase() {
        let converter = BrickArtConverter::default();
        assert_eq!(converter.convert("hello"), converter.convert("HELLO"));
    }

    #[test]
    fn row_count_matches_target() {
        let mut converter = BrickArtConverter::default();
        for target in 1..=40 {
            converter.configure(&ConfigPatch::default().target_rows(target));
            let art = converter.convert("LOADING");
            assert_eq!(art.height(), target.max(GLYPH_ROWS), "cible {target}");
        }
    }

    #[test]
    fn rows_share_one_width() {
        let converter = BrickArtConverter::default();
        for text in ["", "A", "HELLO WORLD", "a★b", "😀é?", "   "] {
            let art = converter.convert(text);
            let width = art.width();
            assert!(art.rows().iter().all(|r| r.chars().count() == width), "{text:?}");
        }
    }

    #[test]
    fn large_sizes_are_not_truncated() {
        let art = quick_convert(
            "AB",
            &ConfigPatch::default()
                .target_rows(2000)
                .pixel_width(100)
                .char_spacing(100.0),
        );
        assert_eq!(art.height(), 2000);
        assert_eq!(art.width(), 2 * GLYPH_COLS * 100 + 100);
    }

    #[test]
    fn width_is_glyphs_plus_gaps() {
        for pixel_width in 1..=4 {
            for spacing in [0.0, 1.0, 2.5, 4.4] {
                let converter = BrickArtConverter::new(BrickConfig {
                    pixel_width,
                    char_spacing: spacing,
                    ..BrickConfig::default()
                });
                let gap = converter.config().spacing_width();
                assert_eq!(converter.convert("W").width(), GLYPH_COLS * pixel_width);
                assert_eq!(
                    converter.convert("WWW").width(),
                    3 * GLYPH_COLS * pixel_width + 2 * gap
                );
            }
        }
    }

    #[test]
    fn fractional_spacing_is_rounded() {
        let text = "II";
        let art = |spacing: f64| {
            BrickArtConverter::default()
                .with_patch(&ConfigPatch::default().char_spacing(spacing).pixel_width(1))
                .convert(text)
        };
        assert_eq!(art(2.5).rows()[0], " ###     ### ".replace('#', "_"));
        assert_eq!(art(2.4).width(), 12);
        assert_eq!(art(0.49).width(), 10);
    }

    #[test]
    fn empty_text_gives_blank_rows() {
        let art = BrickArtConverter::default().convert("");
        assert_eq!(art.height(), 12);
        assert!(art.rows().iter().all(String::is_empty));

        let short = BrickArtConverter::default()
            .with_patch(&ConfigPatch::default().target_rows(3))
            .convert("");
        assert_eq!(short.height(), GLYPH_ROWS);
    }

    #[test]
    fn unknown_character_uses_default_glyph() {
        let converter = BrickArtConverter::default()
            .with_patch(&ConfigPatch::default().target_rows(7));
        let art = converter.convert("★");
        let expected: Vec<String> = DEFAULT_GLYPH
            .rows()
            .iter()
            .map(|&bits| scale_row(bits, 2, '_', ' '))
            .collect();
        assert_eq!(art.rows(), expected.as_slice());
        assert_eq!(art.rows()[2], "__  __  __");
        assert_eq!(converter.convert("★"), converter.convert("\u{1F600}"));
    }

    #[test]
    fn astral_symbols_are_one_character() {
        let converter = BrickArtConverter::default();
        assert_eq!(
            converter.convert("😀A").width(),
            converter.convert("?A").width()
        );
    }

    #[test]
    fn custom_symbols_fill_the_grid() {
        let converter = BrickArtConverter::default().with_patch(
            &ConfigPatch::default()
                .fill_char('█')
                .empty_char('.')
                .char_spacing(0.0)
                .target_rows(7)
                .pixel_width(1),
        );
        let art = converter.convert("T");
        assert_eq!(art.rows()[0], "█████");
        assert_eq!(art.rows()[1], "..█..");
    }

    #[test]
    fn add_glyph_registers_and_chains() {
        let mut converter = BrickArtConverter::default();
        assert!(!converter.is_supported('♥'));
        let art = converter
            .add_glyph('♥', &HEART)
            .unwrap()
            .configure(&ConfigPatch::default().target_rows(7).pixel_width(1))
            .convert("♥");
        assert_eq!(art.rows()[0], " _ _ ");
        assert!(converter.supported_characters().contains(&'♥'));
    }

    #[test]
    fn add_glyph_rejects_malformed_bitmaps_atomically() {
        let mut converter = BrickArtConverter::default();
        let before = converter.supported_characters();

        assert!(matches!(
            converter.add_glyph('♥', &HEART[..6]),
            Err(CoreError::GlyphRowCount { found: 6, .. })
        ));
        let mut eight = HEART.to_vec();
        eight.push("00000");
        assert!(matches!(
            converter.add_glyph('♥', &eight),
            Err(CoreError::GlyphRowCount { found: 8, .. })
        ));
        let mut short_row = HEART;
        short_row[4] = "0010";
        assert!(matches!(
            converter.add_glyph('♥', &short_row),
            Err(CoreError::GlyphRowContent { row: 4, .. })
        ));
        let mut bad_digit = HEART;
        bad_digit[0] = "0101x";
        assert!(matches!(
            converter.add_glyph('A', &bad_digit),
            Err(CoreError::GlyphRowContent { row: 0, .. })
        ));

        assert_eq!(converter.supported_characters(), before);
        assert_eq!(
            converter.convert("A"),
            BrickArtConverter::default().convert("A")
        );
    }

    #[test]
    fn instances_do_not_share_glyphs() {
        let mut a = BrickArtConverter::default();
        let b = BrickArtConverter::default();
        a.add_glyph('a', &HEART).unwrap();
        assert!(a.is_supported('A'));
        assert_ne!(a.convert("A"), b.convert("A"));
        assert!(!b.is_supported('♥'));
    }

    #[test]
    fn support_check_folds_letters_only() {
        let converter = BrickArtConverter::default();
        for ch in 'a'..='z' {
            assert_eq!(
                converter.is_supported(ch),
                converter.is_supported(ch.to_ascii_uppercase())
            );
        }
        assert!(converter.is_supported('7'));
        assert!(!converter.is_supported('é'));
        assert!(!converter.is_supported('★'));
    }

    #[test]
    fn from_profile_applies_config_and_glyphs() {
        let profile = bk_core::config::parse_profile(
            "[brick]\ntarget_rows = 7\n[glyphs]\n\"♥\" = [\"01010\", \"11111\", \"11111\", \"01110\", \"00100\", \"00000\", \"00000\"]\n",
        )
        .unwrap();
        let converter = BrickArtConverter::from_profile(&profile);
        assert_eq!(converter.config().target_rows, 7);
        assert!(converter.is_supported('♥'));
    }

    #[test]
    fn quick_convert_matches_converter() {
        let patch = ConfigPatch::default().pixel_width(3);
        assert_eq!(
            quick_convert("GO!", &patch),
            BrickArtConverter::default().with_patch(&patch).convert("GO!")
        );
    }
}
