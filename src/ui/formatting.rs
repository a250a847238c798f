use anyhow::Result;
use colored::{Color, Colorize};
use serde::Serialize;
use wordsort_core::{Board, Category, ClassifiedItem};

/// Display color for each category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Lowercase => Color::Green,
        Category::Capitalized => Color::Cyan,
        Category::Numeric => Color::Magenta,
    }
}

/// Format one item as "<key> <word>", colored by category
pub fn format_label(item: &ClassifiedItem) -> String {
    item.label().color(category_color(item.category)).to_string()
}

/// Format items one per line, indented
pub fn format_items<'a>(items: impl IntoIterator<Item = &'a ClassifiedItem>) -> String {
    items
        .into_iter()
        .map(|item| format!("  {}\n", format_label(item)))
        .collect()
}

/// Format both board regions and the current selection
pub fn format_board(board: &Board, title: &str) -> String {
    let unplaced: Vec<&ClassifiedItem> = board.unplaced().map(|(_, item)| item).collect();
    let placed: Vec<&ClassifiedItem> = board.placed().map(|(_, item)| item).collect();

    let mut out = format!("{}\n\n", title.bold());

    out.push_str(&format!("{} ({})\n", "Unplaced".bold(), unplaced.len()));
    out.push_str(&format_items(unplaced));

    out.push_str(&format!("{} ({})\n", "Placed".bold(), placed.len()));
    out.push_str(&format_items(placed));

    if let Some(item) = board.selected() {
        out.push_str(&format!("\n{} {}\n", "Selected:".bold(), format_label(item)));
    }

    out
}

/// Serialize a value as JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_items() {
        plain();
        let board = Board::classify("b-A-1").unwrap();
        assert_eq!(format_items(board.items()), "  a1 b\n  b1 A\n  n1 1\n");
    }

    #[test]
    fn test_format_board_sections() {
        plain();
        let mut board = Board::classify("banana-Apple-2").unwrap();
        board.place(1, None).unwrap();
        board.select(1).unwrap();

        let out = format_board(&board, "wordsort - s.json");
        assert_eq!(
            out,
            "wordsort - s.json\n\nUnplaced (2)\n  a1 banana\n  n1 2\nPlaced (1)\n  b1 Apple\n\nSelected: b1 Apple\n"
        );
    }

    #[test]
    fn test_to_json_compact() {
        let board = Board::classify("x").unwrap();
        let json = to_json(board.items(), false).unwrap();
        assert_eq!(
            json,
            r#"[{"word":"x","key":"a1","category":"lowercase","placed":false}]"#
        );
    }
}
