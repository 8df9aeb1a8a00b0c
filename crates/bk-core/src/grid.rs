use std::fmt;

/// Grille de sortie : lignes de même longueur, de haut en bas.
///
/// Lengths are counted in `char`s, so multi-byte fill symbols such as `█`
/// still produce a rectangular grid.
///
/// # Example
/// ```
/// use bk_core::grid::BrickArt;
/// let art = BrickArt::from_rows(vec!["__".into(), "_".into()]);
/// assert_eq!(art.rows(), ["__", "_ "]);
/// assert_eq!(art.width(), 2);
/// assert_eq!(art.height(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrickArt {
    rows: Vec<String>,
    width: usize,
}

impl BrickArt {
    /// Build a grid, right-padding every row with spaces to the longest one.
    #[must_use]
    pub fn from_rows(mut rows: Vec<String>) -> Self {
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        for row in &mut rows {
            let len = row.chars().count();
            row.extend(std::iter::repeat_n(' ', width - len));
        }
        Self { rows, width }
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Common row length, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows joined by `\n`, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for BrickArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<BrickArt> for Vec<String> {
    fn from(art: BrickArt) -> Self {
        art.rows
    }
}
