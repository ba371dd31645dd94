// Inventory model: a keyed counter of item quantities

use crate::models::Quantity;
use std::collections::HashMap;

/// Tracks the available quantity of each item
///
/// Items are reported in the order they were first stocked.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Map of item names to their available quantities
    levels: HashMap<String, Quantity>,

    /// Item names in first-insertion order
    order: Vec<String>,
}

impl Inventory {
    /// Creates a new empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of an item, creating the entry if needed
    ///
    /// A zero quantity still registers the item. Totals saturate at `Quantity::MAX`.
    pub fn increment(&mut self, item: &str, quantity: Quantity) {
        match self.levels.get_mut(item) {
            Some(level) => *level = level.saturating_add(quantity),
            None => {
                self.levels.insert(item.to_owned(), quantity);
                self.order.push(item.to_owned());
            }
        }
    }

    /// Gets the current quantity of an item, 0 if it was never stocked
    pub fn quantity_of(&self, item: &str) -> Quantity {
        *self.levels.get(item).unwrap_or(&0)
    }

    /// Checks if at least `required` units of the item are available
    pub fn has_at_least(&self, item: &str, required: Quantity) -> bool {
        self.quantity_of(item) >= required
    }

    /// Every stocked item with its quantity, in first-insertion order
    pub fn status(&self) -> Vec<(&str, Quantity)> {
        self.order
            .iter()
            .map(|item| (item.as_str(), self.quantity_of(item)))
            .collect()
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of units across all items
    pub fn total_units(&self) -> u64 {
        self.levels.values().map(|&q| u64::from(q)).sum()
    }
}
