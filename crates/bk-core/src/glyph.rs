use std::collections::HashMap;

use crate::error::CoreError;
use crate::font::{DEFAULT_GLYPH, builtin_glyphs};

/// Nombre de lignes d'un glyphe.
pub const GLYPH_ROWS: usize = 7;
/// Nombre de colonnes d'un glyphe.
pub const GLYPH_COLS: usize = 5;

const ROW_MASK: u8 = (1 << GLYPH_COLS) - 1;

/// Bitmap 5×7 d'un caractère.
///
/// Each row is a 5-bit mask, most significant bit = leftmost column.
/// A `Glyph` is always well-formed: the only ways to build one are the
/// masking `from_bits` and the validating `parse`.
///
/// # Example
/// ```
/// use bk_core::glyph::Glyph;
/// let bar = Glyph::parse(&["11111"; 7]).unwrap();
/// assert!(bar.bit(0, 0));
/// assert_eq!(bar.row(6), 0b11111);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    /// Build a glyph from packed rows. Bits above the fifth column are dropped.
    #[must_use]
    pub const fn from_bits(mut rows: [u8; GLYPH_ROWS]) -> Self {
        let mut i = 0;
        while i < GLYPH_ROWS {
            rows[i] &= ROW_MASK;
            i += 1;
        }
        Self { rows }
    }

    /// Parse a textual bitmap: exactly 7 rows of exactly 5 `0`/`1` characters.
    ///
    /// # Errors
    /// `CoreError::GlyphRowCount` if the row count is not 7,
    /// `CoreError::GlyphRowContent` for the first malformed row.
    ///
    /// # Example
    /// ```
    /// use bk_core::glyph::Glyph;
    /// use bk_core::CoreError;
    /// let short = Glyph::parse(&["10101"; 6]);
    /// assert!(matches!(short, Err(CoreError::GlyphRowCount { found: 6, .. })));
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, CoreError> {
        if rows.len() != GLYPH_ROWS {
            return Err(CoreError::GlyphRowCount {
                expected: GLYPH_ROWS,
                found: rows.len(),
            });
        }

        let mut packed = [0u8; GLYPH_ROWS];
        for (index, (slot, row)) in packed.iter_mut().zip(rows).enumerate() {
            let row = row.as_ref();
            let well_formed =
                row.len() == GLYPH_COLS && row.bytes().all(|b| b == b'0' || b == b'1');
            if !well_formed {
                return Err(CoreError::GlyphRowContent {
                    row: index,
                    content: row.to_string(),
                    expected: GLYPH_COLS,
                });
            }
            *slot = row.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0'));
        }
        Ok(Self { rows: packed })
    }

    /// Packed rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.rows
    }

    /// Packed row `r`. Panics if `r >= GLYPH_ROWS`.
    #[inline]
    #[must_use]
    pub fn row(&self, r: usize) -> u8 {
        self.rows[r]
    }

    /// Pixel at (`row`, `col`), column 0 on the left.
    #[inline]
    #[must_use]
    pub fn bit(&self, row: usize, col: usize) -> bool {
        debug_assert!(col < GLYPH_COLS, "column out of bounds");
        (self.rows[row] >> (GLYPH_COLS - 1 - col)) & 1 == 1
    }

    /// Textual form, the inverse of [`Glyph::parse`].
    ///
    /// # Example
    /// ```
    /// use bk_core::font::DEFAULT_GLYPH;
    /// assert_eq!(DEFAULT_GLYPH.to_strings()[2], "10101");
    /// ```
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format!("{row:0width$b}", width = GLYPH_COLS))
            .collect()
    }
}

/// Table caractère → glyphe, propre à chaque convertisseur.
///
/// ASCII letters are folded to uppercase on every access; every other
/// character, digits and non-ASCII included, is matched as-is.
///
/// # Example
/// ```
/// use bk_core::glyph::GlyphTable;
/// use bk_core::font::DEFAULT_GLYPH;
/// let table = GlyphTable::builtin();
/// assert_eq!(table.resolve('h'), table.resolve('H'));
/// assert_eq!(table.resolve('★'), &DEFAULT_GLYPH);
/// ```
#[derive(Clone, Debug)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphTable {
    /// Fresh copy of the built-in font.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            glyphs: builtin_glyphs().iter().copied().collect(),
            fallback: DEFAULT_GLYPH,
        }
    }

    /// Table with no entries; every character resolves to the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
            fallback: DEFAULT_GLYPH,
        }
    }

    /// Lookup key for `ch`: `a..=z` become `A..=Z`, nothing else changes.
    #[inline]
    #[must_use]
    pub fn fold_key(ch: char) -> char {
        if ch.is_ascii_lowercase() {
            ch.to_ascii_uppercase()
        } else {
            ch
        }
    }

    /// Table hit only.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&Self::fold_key(ch))
    }

    /// Glyph for `ch`, falling back to the table's default glyph. Never fails.
    #[must_use]
    pub fn resolve(&self, ch: char) -> &Glyph {
        if let Some(glyph) = self.lookup(ch) {
            return glyph;
        }
        log::trace!("Caractère non supporté {ch:?}, glyphe par défaut");
        &self.fallback
    }

    /// Insert or replace the glyph for `ch` (folded). Returns the previous one.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(Self::fold_key(ch), glyph)
    }

    /// Whether `ch` has its own entry, with the same folding as [`GlyphTable::resolve`].
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&Self::fold_key(ch))
    }

    /// Current keys, sorted by code point.
    #[must_use]
    pub fn characters(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.glyphs.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// The glyph used for characters without an entry.
    #[must_use]
    pub fn fallback(&self) -> &Glyph {
        &self.fallback
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::builtin()
    }
}
