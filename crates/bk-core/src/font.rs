//! Police bitmap 5×7 intégrée.
//!
//! Chaque ligne est un masque 5 bits, MSB = colonne de gauche.

use crate::glyph::Glyph;

/// Glyphe de repli pour tout caractère absent de la table : un cadre barré.
pub const DEFAULT_GLYPH: Glyph = g([
    0b11111, 0b10001, 0b10101, 0b10001, 0b10101, 0b10001, 0b11111,
]);

const fn g(rows: [u8; 7]) -> Glyph {
    Glyph::from_bits(rows)
}

/// Built-in glyph table. Letters are stored uppercase only.
static BUILTIN: &[(char, Glyph)] = &[
    // === Espace ===
    (' ', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),

    // === Lettres A–Z ===
    ('A', g([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', g([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', g([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110])),
    ('E', g([0b11111, 0b10000, 0b10000, 0b11111, 0b10000, 0b10000, 0b11111])),
    ('F', g([0b11111, 0b10000, 0b10000, 0b11111, 0b10000, 0b10000, 0b10000])),
    ('G', g([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110])),
    ('H', g([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', g([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', g([0b00011, 0b00001, 0b00001, 0b00001, 0b10001, 0b10001, 0b11110])),
    ('K', g([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', g([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', g([0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001])),
    ('N', g([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001])),
    ('O', g([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('Q', g([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', g([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', g([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', g([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111])),
    ('V', g([0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100])),
    ('W', g([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001])),
    ('X', g([0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001])),
    ('Y', g([0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('Z', g([0b11111, 0b00010, 0b00100, 0b00100, 0b01000, 0b10000, 0b11111])),

    // === Chiffres 0–9 ===
    ('0', g([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', g([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('2', g([0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111])),
    ('3', g([0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('4', g([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', g([0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110])),
    ('6', g([0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110])),
    ('7', g([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000])),
    ('8', g([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110])),
    ('9', g([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110])),

    // === Ponctuation et symboles ===
    ('!', g([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('@', g([0b11111, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b11111])),
    ('#', g([0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010])),
    ('$', g([0b00100, 0b11111, 0b10100, 0b01110, 0b00101, 0b11111, 0b00100])),
    ('%', g([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011])),
    ('^', g([0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('&', g([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101])),
    ('*', g([0b00000, 0b01010, 0b00100, 0b11111, 0b00100, 0b01010, 0b00000])),
    ('(', g([0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010])),
    (')', g([0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000])),
    ('_', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111])),
    ('-', g([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('+', g([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000])),
    ('=', g([0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('{', g([0b00011, 0b00100, 0b00100, 0b11000, 0b00100, 0b00100, 0b00011])),
    ('}', g([0b11000, 0b00100, 0b00100, 0b00011, 0b00100, 0b00100, 0b11000])),
    ('[', g([0b11100, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11100])),
    (']', g([0b00111, 0b00001, 0b00001, 0b00001, 0b00001, 0b00001, 0b00111])),
    (':', g([0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000])),
    (';', g([0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00100, 0b01000])),
    ('"', g([0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('\'', g([0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('<', g([0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010])),
    (',', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b01000])),
    ('>', g([0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000])),
    ('.', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110])),
    ('?', g([0b11111, 0b10001, 0b00010, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('/', g([0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000])),
];

/// Read-only view of the built-in table, in declaration order.
///
/// # Example
/// ```
/// use bk_core::font::builtin_glyphs;
/// assert!(builtin_glyphs().iter().any(|(ch, _)| *ch == 'A'));
/// assert!(!builtin_glyphs().iter().any(|(ch, _)| *ch == 'a'));
/// ```
#[must_use]
pub fn builtin_glyphs() -> &'static [(char, Glyph)] {
    BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (ch, _) in builtin_glyphs() {
            assert!(seen.insert(*ch), "clé dupliquée : {ch:?}");
        }
        assert_eq!(seen.len(), 65);
    }

    #[test]
    fn builtin_covers_letters_and_digits() {
        let keys: HashSet<char> = builtin_glyphs().iter().map(|(ch, _)| *ch).collect();
        for ch in ('A'..='Z').chain('0'..='9') {
            assert!(keys.contains(&ch), "{ch} manquant");
        }
        assert!(keys.contains(&' '));
    }

    #[test]
    fn builtin_rows_fit_five_columns() {
        for (ch, glyph) in builtin_glyphs() {
            for row in glyph.rows() {
                assert!(*row < 0b10_0000, "{ch:?} déborde");
            }
        }
    }
}
