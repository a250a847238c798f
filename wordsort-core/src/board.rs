use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::{ClassifyError, Result};
use crate::models::ClassifiedItem;
use crate::placement::{move_placement, unplaced_items};

/// Sorting board: the classified items plus the user's placement state
///
/// Items stay in classification order for their whole lifetime. Placed
/// items are additionally tracked in `placed_order`, which is the order
/// the user arranged them in the placed region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) items: Vec<ClassifiedItem>,
    #[serde(default)]
    pub(crate) placed_order: Vec<usize>,
    #[serde(default)]
    pub(crate) selected: Option<usize>,
}

impl Board {
    /// Build a board from already classified items
    /// Items flagged as placed are put in the placed region in list order.
    pub fn new(items: Vec<ClassifiedItem>) -> Self {
        let placed_order = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.placed)
            .map(|(i, _)| i)
            .collect();

        Self {
            items,
            placed_order,
            selected: None,
        }
    }

    /// Classify raw input into a fresh board with nothing placed
    pub fn classify(input: &str) -> Result<Self> {
        Ok(Self::new(classify(input)?))
    }

    pub fn items(&self) -> &[ClassifiedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClassifiedItem> {
        self.items.get(index)
    }

    /// Index of the item carrying `key`
    pub fn find_key(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }

    /// Indices of placed items in their arranged order
    pub fn placed_order(&self) -> &[usize] {
        &self.placed_order
    }

    /// Placed items in their arranged order
    pub fn placed(&self) -> impl Iterator<Item = (usize, &ClassifiedItem)> {
        self.placed_order.iter().map(move |&i| (i, &self.items[i]))
    }

    /// Items still in the source region, in classification order
    pub fn unplaced(&self) -> impl Iterator<Item = (usize, &ClassifiedItem)> {
        unplaced_items(&self.items)
    }

    /// Move an item into the placed region before `position`
    ///
    /// `None` or a position past the end appends. An item that is already
    /// placed is moved to the new position.
    pub fn place(&mut self, index: usize, position: Option<usize>) -> Result<()> {
        move_placement(&mut self.items, index, true)?;

        self.placed_order.retain(|&i| i != index);
        let at = position
            .unwrap_or(self.placed_order.len())
            .min(self.placed_order.len());
        self.placed_order.insert(at, index);

        log::debug!("placed {} at position {}", self.items[index].key, at);
        Ok(())
    }

    /// Return an item to the source region; a no-op for unplaced items
    pub fn unplace(&mut self, index: usize) -> Result<()> {
        move_placement(&mut self.items, index, false)?;

        self.placed_order.retain(|&i| i != index);
        if self.selected == Some(index) {
            self.selected = None;
        }

        log::debug!("returned {} to the source region", self.items[index].key);
        Ok(())
    }

    /// Select a placed item for inspection
    pub fn select(&mut self, index: usize) -> Result<&ClassifiedItem> {
        let len = self.items.len();
        let item = self
            .items
            .get(index)
            .ok_or(ClassifyError::IndexOutOfRange { index, len })?;
        if !item.placed {
            return Err(ClassifyError::NotPlaced { index });
        }

        self.selected = Some(index);
        Ok(&self.items[index])
    }

    pub fn selected(&self) -> Option<&ClassifiedItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }
}
