use bk_core::grid::BrickArt;
use bk_export::literal::{QuoteStyle, to_array_literal};

use crate::cli::OutputFormat;

/// Format one grid for stdout.
#[must_use]
pub fn format_art(art: &BrickArt, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => art.render(),
        OutputFormat::Template => to_array_literal(art, QuoteStyle::Template),
        OutputFormat::Quoted => to_array_literal(art, QuoteStyle::Double),
    }
}

/// Supported characters, one debug-quoted char each, space separated.
#[must_use]
pub fn format_supported(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty input lines, trailing `\r` stripped.
#[must_use]
pub fn input_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
