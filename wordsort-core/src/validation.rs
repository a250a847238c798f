use crate::board::Board;
use crate::classify::categorize;
use crate::models::{Category, ClassifiedItem};
use crate::sorting::{compare_lexical, compare_numeric};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Validate a board loaded from outside (e.g. a session file)
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_board(board: &Board) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_items(&board.items, &mut errors);
    validate_placement(board, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_items(items: &[ClassifiedItem], errors: &mut Vec<String>) {
    if items.is_empty() {
        errors.push("Board must contain at least one item".to_string());
        return;
    }

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx, item.word);

        if item.word.trim().is_empty() || item.word.trim() != item.word {
            errors.push(format!("{}: word must be non-empty and trimmed", item_ref));
        }

        if item.word.contains(crate::tokenize::DELIMITER) {
            errors.push(format!("{}: word contains the delimiter", item_ref));
        }

        let expected = categorize(&item.word);
        if item.category != expected {
            errors.push(format!(
                "{}: category is '{}', expected '{}'",
                item_ref, item.category, expected
            ));
        }
    }

    // Category blocks must follow presentation order
    for pair in items.windows(2) {
        if pair[0].category.rank() > pair[1].category.rank() {
            errors.push(format!(
                "'{}' ({}) appears after '{}' ({})",
                pair[1].word, pair[1].category, pair[0].word, pair[0].category
            ));
        }
    }

    for category in Category::ORDER {
        validate_category_block(items, category, errors);
    }
}

fn validate_category_block(items: &[ClassifiedItem], category: Category, errors: &mut Vec<String>) {
    let block: Vec<&ClassifiedItem> = items.iter().filter(|i| i.category == category).collect();

    for (i, item) in block.iter().enumerate() {
        let expected_key = format!("{}{}", category.prefix(), i + 1);
        if item.key != expected_key {
            errors.push(format!(
                "'{}' has key '{}', expected '{}'",
                item.word, item.key, expected_key
            ));
        }
    }

    for pair in block.windows(2) {
        let ordering = match category {
            Category::Numeric => compare_numeric(&pair[0].word, &pair[1].word),
            Category::Lowercase | Category::Capitalized => {
                compare_lexical(&pair[0].word, &pair[1].word)
            }
        };
        if ordering == Ordering::Greater {
            errors.push(format!(
                "{} items out of order: '{}' before '{}'",
                category, pair[0].word, pair[1].word
            ));
        }
    }
}

pub fn validate_placement(board: &Board, errors: &mut Vec<String>) {
    let len = board.items.len();
    let mut seen = HashSet::new();

    for &index in &board.placed_order {
        if index >= len {
            errors.push(format!("Placed index {} is out of range ({} items)", index, len));
            continue;
        }
        if !seen.insert(index) {
            errors.push(format!("Placed index {} appears more than once", index));
        }
        if !board.items[index].placed {
            errors.push(format!(
                "'{}' is in the placed region but not flagged as placed",
                board.items[index].key
            ));
        }
    }

    for (index, item) in board.items.iter().enumerate() {
        if item.placed && !seen.contains(&index) {
            errors.push(format!(
                "'{}' is flagged as placed but missing from the placed region",
                item.key
            ));
        }
    }

    if let Some(selected) = board.selected {
        match board.items.get(selected) {
            None => errors.push(format!("Selected index {} is out of range ({} items)", selected, len)),
            Some(item) if !item.placed => {
                errors.push(format!("Selected item '{}' is not placed", item.key))
            }
            Some(_) => {}
        }
    }
}
