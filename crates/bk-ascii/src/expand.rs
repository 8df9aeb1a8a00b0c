/// Répétitions de chaque ligne source pour atteindre `target_rows`.
///
/// Row `r` of `source_rows` gets
/// `max(1, floor((r+1)·T/h) − floor(r·T/h))` copies. The counts sum to `T`
/// when `T ≥ h`; below that every row still appears once, so the total is
/// `h`.
///
/// # Example
/// ```
/// use bk_ascii::expand::repeat_counts;
/// assert_eq!(repeat_counts(7, 12), [1, 2, 2, 1, 2, 2, 2]);
/// assert_eq!(repeat_counts(7, 3), [1; 7]);
/// ```
#[must_use]
pub fn repeat_counts(source_rows: usize, target_rows: usize) -> Vec<usize> {
    if source_rows == 0 {
        return Vec::new();
    }
    (0..source_rows)
        .map(|r| {
            let start = r * target_rows / source_rows;
            let end = (r + 1) * target_rows / source_rows;
            (end - start).max(1)
        })
        .collect()
}

/// Redistribute `rows` over `target_rows` output rows, order preserved.
///
/// # Example
/// ```
/// use bk_ascii::expand::expand_rows;
/// let rows = ["a", "b", "c", "d", "e", "f", "g"];
/// let out = expand_rows(&rows, 14);
/// assert_eq!(out, ["a", "a", "b", "b", "c", "c", "d", "d", "e", "e", "f", "f", "g", "g"]);
/// ```
#[must_use]
pub fn expand_rows<T: Clone>(rows: &[T], target_rows: usize) -> Vec<T> {
    let counts = repeat_counts(rows.len(), target_rows);
    let mut out = Vec::with_capacity(counts.iter().sum());
    for (row, &reps) in rows.iter().zip(&counts) {
        out.extend(std::iter::repeat_n(row, reps).cloned());
    }
    out
}
