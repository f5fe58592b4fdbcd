use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Money};

use crate::notice::Notice;
use crate::row::InventoryRow;

/// Aggregates recomputed from the current rows on every render.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Sum of all quantities.
    pub total_quantity: u64,
    /// Sum of `quantity * unit_price` over all rows.
    pub total_value: Money,
}

/// Ordered, in-memory collection of stock rows.
///
/// Positions are 0-based, contiguous, and derived from insertion order; removing
/// a row shifts every later row down by one. The store does not validate input:
/// callers are expected to enforce the entry-time bounds before calling
/// [`add`](Self::add).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    rows: Vec<InventoryRow>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and return the success notice for it.
    pub fn add(&mut self, name: impl Into<String>, quantity: u32, unit_price: Money) -> Notice {
        let row = InventoryRow::new(name, quantity, unit_price);
        let notice = Notice::success(format!("Added: {} (quantity: {})", row.name, row.quantity));
        self.rows.push(row);
        notice
    }

    /// Remove the row at `position`, shifting later rows down.
    ///
    /// Fails with [`DomainError::OutOfRange`] and leaves the store untouched when
    /// `position` does not address a current row.
    pub fn remove(&mut self, position: usize) -> DomainResult<Notice> {
        if position >= self.rows.len() {
            return Err(DomainError::out_of_range(
                i64::try_from(position).unwrap_or(i64::MAX),
                self.rows.len(),
            ));
        }
        self.rows.remove(position);
        Ok(Notice::warning(format!("Removed item at position {position}")))
    }

    /// Current rows, in position order.
    pub fn read(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn get(&self, position: usize) -> Option<&InventoryRow> {
        self.rows.get(position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest valid position, `None` when empty.
    pub fn last_position(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    pub fn summary(&self) -> StockSummary {
        self.rows.iter().fold(StockSummary::default(), |acc, row| StockSummary {
            total_quantity: acc.total_quantity.saturating_add(u64::from(row.quantity)),
            total_value: acc.total_value.plus(row.line_value()),
        })
    }
}
