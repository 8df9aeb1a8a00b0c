/// Configuration, glyph data, and shared types for brickart.
///
/// This crate contains the glyph model, the built-in 5×7 font, the
/// configuration layer, and the output grid shared across the workspace.

pub mod config;
pub mod error;
pub mod font;
pub mod glyph;
pub mod grid;

pub use config::{BrickConfig, ConfigPatch};
pub use error::CoreError;
pub use glyph::{GLYPH_COLS, GLYPH_ROWS, Glyph, GlyphTable};
pub use grid::BrickArt;
