use crate::models::Category;
use std::cmp::Ordering;

/// Sort the words of one category bucket in place
/// Lowercase and capitalized buckets use ordinal string order,
/// numeric buckets use integer value order. Both sorts are stable.
pub fn sort_bucket(words: &mut [String], category: Category) {
    match category {
        Category::Numeric => words.sort_by(|a, b| compare_numeric(a, b)),
        Category::Lowercase | Category::Capitalized => words.sort_by(|a, b| compare_lexical(a, b)),
    }
}

/// Ordinal comparison by code point, no locale collation
pub fn compare_lexical(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Compare two all-digit strings by their base-10 integer value
///
/// Works on the digits directly so runs longer than any machine integer
/// still order exactly. "7" and "007" compare equal.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);

    // A longer significant digit run is always the larger value
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn strip_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}
