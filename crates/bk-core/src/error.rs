use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Custom glyph with the wrong number of rows.
    #[error("Le glyphe doit avoir exactement {expected} lignes (reçu : {found})")]
    GlyphRowCount {
        /// Required row count.
        expected: usize,
        /// Row count supplied.
        found: usize,
    },

    /// Custom glyph row that is not exactly `expected` `0`/`1` characters.
    #[error("Ligne {row} du glyphe invalide : {content:?} (attendu : {expected} caractères 0 ou 1)")]
    GlyphRowContent {
        /// Zero-based index of the offending row.
        row: usize,
        /// The row as supplied.
        content: String,
        /// Required row length.
        expected: usize,
    },
}
