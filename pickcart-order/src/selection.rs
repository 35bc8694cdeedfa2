use crate::models::OrderItem;
use crate::OrderError;
use std::collections::BTreeMap;

/// Sparse quantity selection keyed by product id.
///
/// Editing the same product twice keeps the last value. Zero and cleared
/// entries are legal while editing; they are dropped when the selection is
/// normalized into order lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySelection {
    quantities: BTreeMap<i64, u32>,
}

impl QuantitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the requested quantity for a product. Last write wins.
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        self.quantities.insert(product_id, quantity);
    }

    /// The currently selected quantity for a product, zero when unset.
    pub fn quantity(&self, product_id: i64) -> u32 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    /// Reset the selection. Called only after a successful placement.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Build the order lines: entries with a positive quantity, one per
    /// product. Fails locally when nothing remains, so no network call is
    /// ever made for an empty order.
    pub fn normalized_items(&self) -> Result<Vec<OrderItem>, OrderError> {
        let items: Vec<OrderItem> = self
            .quantities
            .iter()
            .filter(|(_, &quantity)| quantity > 0)
            .map(|(&product_id, &quantity)| OrderItem {
                product_id,
                quantity,
            })
            .collect();

        if items.is_empty() {
            return Err(OrderError::Empty);
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_per_product() {
        let mut selection = QuantitySelection::new();
        selection.set_quantity(1, 2);
        selection.set_quantity(1, 5);

        let items = selection.normalized_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_zero_quantities_are_dropped() {
        let mut selection = QuantitySelection::new();
        selection.set_quantity(1, 0);
        selection.set_quantity(2, 3);
        selection.set_quantity(3, 0);

        let items = selection.normalized_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, 2);
    }

    #[test]
    fn test_all_zero_selection_fails_locally() {
        let mut selection = QuantitySelection::new();
        selection.set_quantity(1, 0);

        assert_eq!(selection.normalized_items(), Err(OrderError::Empty));
    }

    #[test]
    fn test_untouched_selection_fails_locally() {
        assert_eq!(
            QuantitySelection::new().normalized_items(),
            Err(OrderError::Empty)
        );
    }
}
