use bk_core::glyph::GLYPH_COLS;

/// Étire une ligne de glyphe horizontalement, en ajoutant à `out`.
///
/// Each bit becomes `pixel_width` copies of `fill` (1) or `empty` (0),
/// left column first. Appends exactly `GLYPH_COLS × pixel_width` chars.
///
/// # Example
/// ```
/// use bk_ascii::scale::scale_row_into;
/// let mut out = String::from(">");
/// scale_row_into(&mut out, 0b10001, 2, '_', ' ');
/// assert_eq!(out, ">__      __");
/// ```
#[inline]
pub fn scale_row_into(out: &mut String, bits: u8, pixel_width: usize, fill: char, empty: char) {
    for col in 0..GLYPH_COLS {
        let on = (bits >> (GLYPH_COLS - 1 - col)) & 1 == 1;
        let symbol = if on { fill } else { empty };
        out.extend(std::iter::repeat_n(symbol, pixel_width));
    }
}

/// Allocating form of [`scale_row_into`].
///
/// # Example
/// ```
/// use bk_ascii::scale::scale_row;
/// assert_eq!(scale_row(0b01110, 1, '#', '.'), ".###.");
/// ```
#[must_use]
pub fn scale_row(bits: u8, pixel_width: usize, fill: char, empty: char) -> String {
    let symbol_len = fill.len_utf8().max(empty.len_utf8());
    let mut out = String::with_capacity(GLYPH_COLS * pixel_width * symbol_len);
    scale_row_into(&mut out, bits, pixel_width, fill, empty);
    out
}
