/// Brick-art conversion engine for brickart.
///
/// Rasterizes text through the 5×7 font into fill/empty character grids.
pub mod converter;
pub mod expand;
pub mod scale;

pub use converter::{BrickArtConverter, quick_convert};
