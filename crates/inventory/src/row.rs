use serde::{Deserialize, Serialize};

use stockroom_core::{Money, ValueObject};

/// One stocked item.
///
/// Rows carry no identifier: a row is addressed by its position in the
/// [`InventoryStore`](crate::InventoryStore), which changes as earlier rows are
/// removed. Bounds on `quantity` (>= 1) and `unit_price` (> 0) are checked when
/// the row is entered, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl ValueObject for InventoryRow {}

impl InventoryRow {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`.
    pub fn line_value(&self) -> Money {
        self.unit_price.times(u64::from(self.quantity))
    }
}
