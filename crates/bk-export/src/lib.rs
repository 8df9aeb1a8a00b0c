/// Serialization of brick grids to source-code array literals.
pub mod literal;

pub use literal::{QuoteStyle, quick_convert_to_literal, to_array_literal};
