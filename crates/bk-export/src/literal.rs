use bk_ascii::converter::quick_convert;
use bk_core::config::ConfigPatch;
use bk_core::grid::BrickArt;

/// Indentation fixe de chaque ligne du littéral.
pub const INDENT: &str = "    ";

/// Style de guillemets du littéral tableau.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Template literals (`` `...` ``), multi-line friendly.
    #[default]
    Template,
    /// Double-quoted strings, valid JSON as well as JavaScript.
    Double,
}

impl QuoteStyle {
    /// Delimiter wrapped around each row.
    #[must_use]
    pub fn quote(self) -> char {
        match self {
            Self::Template => '`',
            Self::Double => '"',
        }
    }
}

/// Escape one row so it is a valid literal body in `style`.
///
/// Backslashes and the delimiter are always escaped. Template literals also
/// escape `${`; double-quoted strings escape `\n`, `\r`, `\t` and any
/// other U+0000–U+001F control as `\uXXXX`, which keeps them valid JSON.
///
/// # Example
/// ```
/// use bk_export::literal::{QuoteStyle, escape_row};
/// assert_eq!(escape_row(r#"a\"b"#, QuoteStyle::Double), r#"a\\\"b"#);
/// assert_eq!(escape_row("`${x}`", QuoteStyle::Template), r"\`\${x}\`");
/// ```
#[must_use]
pub fn escape_row(row: &str, style: QuoteStyle) -> String {
    let quote = style.quote();
    let mut out = String::with_capacity(row.len());
    let mut chars = row.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str(r"\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '$' if style == QuoteStyle::Template && chars.peek() == Some(&'{') => {
                out.push_str(r"\$");
            }
            '\n' if style == QuoteStyle::Double => out.push_str(r"\n"),
            '\r' if style == QuoteStyle::Double => out.push_str(r"\r"),
            '\t' if style == QuoteStyle::Double => out.push_str(r"\t"),
            c if style == QuoteStyle::Double && c.is_ascii_control() && c != '\u{7f}' => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out
}

/// Serialize a grid as an array literal.
///
/// `[` and `]` sit on their own lines; each row is indented by four
/// spaces and followed by a comma, except the last.
///
/// # Example
/// ```
/// use bk_core::grid::BrickArt;
/// use bk_export::literal::{QuoteStyle, to_array_literal};
/// let art = BrickArt::from_rows(vec!["_ _".into(), " _ ".into()]);
/// assert_eq!(
///     to_array_literal(&art, QuoteStyle::Template),
///     "[\n    `_ _`,\n    ` _ `\n]"
/// );
/// ```
#[must_use]
pub fn to_array_literal(art: &BrickArt, style: QuoteStyle) -> String {
    let quote = style.quote();
    let last = art.height().saturating_sub(1);
    let mut out = String::from("[\n");
    for (i, row) in art.rows().iter().enumerate() {
        out.push_str(INDENT);
        out.push(quote);
        out.push_str(&escape_row(row, style));
        out.push(quote);
        if i < last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    log::debug!("Littéral {style:?} : {} ligne(s)", art.height());
    out
}

/// Conversion ponctuelle directement en littéral template.
///
/// # Example
/// ```
/// use bk_core::config::ConfigPatch;
/// use bk_export::literal::quick_convert_to_literal;
/// let js = quick_convert_to_literal("LOADING", &ConfigPatch::default());
/// assert!(js.starts_with("[\n    `"));
/// assert!(js.ends_with("`\n]"));
/// ```
#[must_use]
pub fn quick_convert_to_literal(text: &str, patch: &ConfigPatch) -> String {
    to_array_literal(&quick_convert(text, patch), QuoteStyle::Template)
}
