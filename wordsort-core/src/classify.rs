use crate::error::{ClassifyError, Result};
use crate::grouping::{assign_keys, group_by_category};
use crate::models::{Category, ClassifiedItem};
use crate::sorting::sort_bucket;
use crate::tokenize::tokenize;

/// Assign a category to a single token, first matching rule wins:
/// all ASCII digits is numeric, a cased uppercase first letter is
/// capitalized, anything else is lowercase.
pub fn categorize(token: &str) -> Category {
    if is_numeric(token) {
        Category::Numeric
    } else if starts_capitalized(token) {
        Category::Capitalized
    } else {
        Category::Lowercase
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

// Uncased scripts and symbols fall through to lowercase here.
fn starts_capitalized(token: &str) -> bool {
    match token.chars().next() {
        Some(c) => {
            c.is_alphabetic()
                && c.to_uppercase().eq(std::iter::once(c))
                && !c.to_lowercase().eq(std::iter::once(c))
        }
        None => false,
    }
}

/// Classify a hyphen-delimited string into keyed, sorted items
///
/// The result lists lowercase items, then capitalized, then numeric,
/// each block sorted and numbered from 1. Every item starts unplaced.
pub fn classify(input: &str) -> Result<Vec<ClassifiedItem>> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }

    let mut buckets = group_by_category(tokens, categorize);
    for category in Category::ORDER {
        sort_bucket(buckets.get_mut(category), category);
    }

    log::debug!(
        "classified {} words: {} lowercase, {} capitalized, {} numeric",
        buckets.len(),
        buckets.lowercase.len(),
        buckets.capitalized.len(),
        buckets.numeric.len()
    );

    Ok(assign_keys(buckets))
}
