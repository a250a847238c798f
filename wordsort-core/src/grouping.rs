use crate::models::{Category, ClassifiedItem};

/// Words partitioned by category, each bucket in input order until sorted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub lowercase: Vec<String>,
    pub capitalized: Vec<String>,
    pub numeric: Vec<String>,
}

impl Buckets {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Lowercase => &self.lowercase,
            Category::Capitalized => &self.capitalized,
            Category::Numeric => &self.numeric,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Lowercase => &mut self.lowercase,
            Category::Capitalized => &mut self.capitalized,
            Category::Numeric => &mut self.numeric,
        }
    }

    pub fn len(&self) -> usize {
        self.lowercase.len() + self.capitalized.len() + self.numeric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition tokens into category buckets, preserving relative order
pub fn group_by_category<F>(tokens: Vec<String>, categorize: F) -> Buckets
where
    F: Fn(&str) -> Category,
{
    let mut buckets = Buckets::default();

    for token in tokens {
        let category = categorize(&token);
        buckets.get_mut(category).push(token);
    }

    buckets
}

/// Number each bucket with its category prefix and concatenate them
/// in presentation order (lowercase, capitalized, numeric)
pub fn assign_keys(buckets: Buckets) -> Vec<ClassifiedItem> {
    let mut items = Vec::with_capacity(buckets.len());
    let Buckets {
        lowercase,
        capitalized,
        numeric,
    } = buckets;

    for (category, words) in [
        (Category::Lowercase, lowercase),
        (Category::Capitalized, capitalized),
        (Category::Numeric, numeric),
    ] {
        for (i, word) in words.into_iter().enumerate() {
            items.push(ClassifiedItem {
                word,
                key: format!("{}{}", category.prefix(), i + 1),
                category,
                placed: false,
            });
        }
    }

    items
}
