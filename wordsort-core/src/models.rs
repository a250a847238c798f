use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification bucket assigned to every token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lowercase,
    Capitalized,
    Numeric,
}

impl Category {
    /// Presentation order of the category blocks in a classification result
    pub const ORDER: [Category; 3] = [Category::Lowercase, Category::Capitalized, Category::Numeric];

    /// Key prefix used when numbering items of this category
    pub fn prefix(self) -> char {
        match self {
            Category::Lowercase => 'a',
            Category::Capitalized => 'b',
            Category::Numeric => 'n',
        }
    }

    /// Position of the category in `ORDER`
    pub fn rank(self) -> usize {
        match self {
            Category::Lowercase => 0,
            Category::Capitalized => 1,
            Category::Numeric => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lowercase => "lowercase",
            Category::Capitalized => "capitalized",
            Category::Numeric => "numeric",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    pub word: String,
    pub key: String,
    pub category: Category,
    #[serde(default)]
    pub placed: bool,
}

impl ClassifiedItem {
    /// Display label in the form "<key> <word>"
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_prefixes() {
        assert_eq!(Category::Lowercase.prefix(), 'a');
        assert_eq!(Category::Capitalized.prefix(), 'b');
        assert_eq!(Category::Numeric.prefix(), 'n');
    }

    #[test]
    fn test_order_matches_rank() {
        for (i, category) in Category::ORDER.iter().enumerate() {
            assert_eq!(category.rank(), i);
        }
    }

    #[test]
    fn test_label() {
        let item = ClassifiedItem {
            word: "apple".to_string(),
            key: "a1".to_string(),
            category: Category::Lowercase,
            placed: false,
        };
        assert_eq!(item.label(), "a1 apple");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Capitalized).unwrap();
        assert_eq!(json, "\"capitalized\"");
    }
}
