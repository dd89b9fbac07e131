//! Edit distance and normalized similarity.
//!
//! All lengths are counted in `char`s, not bytes, so accented titles
//! ("Café Grinder") measure the way a reader would count them.

/// Levenshtein distance between two strings.
///
/// Classic full dynamic-programming matrix with unit cost for insertion,
/// deletion and substitution. Product titles and queries are short, so the
/// O(len_a * len_b) table is not worth optimising away.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // matrix[i][j] = distance between a[..i] and b[..j]
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + substitution);
        }
    }

    matrix[a.len()][b.len()]
}

/// Normalized similarity in `[0.0, 1.0]`: `1 - distance / max_len`.
///
/// Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein(a, b) as f64 / max_len as f64)
}

/// Typo-tolerant comparison.
///
/// Matches when the strings are equal ignoring case, when either contains the
/// other, or when their similarity reaches `threshold`. An empty string never
/// matches anything: containment would otherwise make it match every term.
pub fn is_fuzzy_match(a: &str, b: &str, threshold: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    similarity(&a, &b) >= threshold
}
