use crate::error::{ClassifyError, Result};
use crate::models::ClassifiedItem;

/// Set the `placed` flag on the item at `index`
/// Order, keys and categories are left untouched.
pub fn move_placement(items: &mut [ClassifiedItem], index: usize, placed: bool) -> Result<()> {
    let len = items.len();
    let item = items
        .get_mut(index)
        .ok_or(ClassifyError::IndexOutOfRange { index, len })?;
    item.placed = placed;
    Ok(())
}

/// Items not moved into the placed region, in classification order
pub fn unplaced_items(items: &[ClassifiedItem]) -> impl Iterator<Item = (usize, &ClassifiedItem)> {
    items.iter().enumerate().filter(|(_, item)| !item.placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_move_placement_only_touches_flag() {
        let mut items = classify("banana-Apple-10").unwrap();
        let before = items.clone();

        move_placement(&mut items, 1, true).unwrap();

        assert!(items[1].placed);
        for (a, b) in items.iter().zip(before.iter()) {
            assert_eq!(a.word, b.word);
            assert_eq!(a.key, b.key);
            assert_eq!(a.category, b.category);
        }

        move_placement(&mut items, 1, false).unwrap();
        assert_eq!(items, before);
    }

    #[test]
    fn test_move_placement_out_of_range() {
        let mut items = classify("one-two").unwrap();
        assert_eq!(
            move_placement(&mut items, 2, true),
            Err(ClassifyError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_unplaced_items_skip_placed() {
        let mut items = classify("a-b-c").unwrap();
        move_placement(&mut items, 1, true).unwrap();
        let remaining: Vec<usize> = unplaced_items(&items).map(|(i, _)| i).collect();
        assert_eq!(remaining, vec![0, 2]);
    }
}
