//! Per-process session state: the store plus the view state around it.
//!
//! One `Session` exists for the lifetime of the server. Handlers lock it for
//! the whole validate-mutate-render step, so user actions are applied one at a
//! time and always see the result of the previous one.

use std::sync::Arc;

use tokio::sync::Mutex;

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{InventoryStore, Notice};

use crate::app::dto::{AddItemRequest, RemoveItemRequest};
use crate::app::errors;

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug, Default)]
pub struct Session {
    store: InventoryStore,
    /// Messages produced by the last action(s), shown once on the next render.
    flash: Vec<Notice>,
    /// Row previewed in the delete panel. Clamped to the current bounds on read.
    selected: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Validate the add form and append the row. Rejected input leaves the
    /// store untouched and queues an error notice instead.
    pub fn add_item(&mut self, req: &AddItemRequest) -> DomainResult<()> {
        let outcome = req.validate().map(|item| {
            self.store.add(item.name, item.quantity, item.unit_price)
        });
        self.record(outcome)
    }

    /// Remove the row at the submitted position.
    pub fn remove_item(&mut self, req: &RemoveItemRequest) -> DomainResult<()> {
        let outcome = req.position().and_then(|position| {
            self.select(position);
            let index = usize::try_from(position)
                .map_err(|_| DomainError::out_of_range(position, self.store.len()))?;
            self.store.remove(index)
        });
        self.record(outcome)
    }

    /// Move the delete-panel selection; values outside the current bounds are
    /// clamped, mirroring a bounded number input.
    pub fn select(&mut self, position: i64) {
        self.selected = usize::try_from(position).unwrap_or(0);
    }

    /// Currently selected position, re-derived from the live bounds.
    pub fn selected_position(&self) -> Option<usize> {
        self.store
            .last_position()
            .map(|last| self.selected.min(last))
    }

    /// Drain the pending notices for rendering.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.flash)
    }

    fn record(&mut self, outcome: DomainResult<Notice>) -> DomainResult<()> {
        match outcome {
            Ok(notice) => {
                self.flash.push(notice);
                Ok(())
            }
            Err(err) => {
                self.flash.push(errors::domain_error_to_notice(&err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use stockroom_core::Money;
    use stockroom_inventory::{InventoryRow, NoticeLevel};

    use super::*;

    fn add_req(name: &str, quantity: &str, unit_price: &str) -> AddItemRequest {
        AddItemRequest {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
        }
    }

    fn remove_req(position: &str) -> RemoveItemRequest {
        RemoveItemRequest {
            position: position.to_string(),
        }
    }

    #[test]
    fn add_then_remove_scenario() {
        let mut session = Session::new();
        session.add_item(&add_req("Widget", "5", "2.50")).unwrap();
        session.add_item(&add_req("Gadget", "2", "9.99")).unwrap();

        let summary = session.store().summary();
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.total_value.to_string(), "32.48");

        session.remove_item(&remove_req("0")).unwrap();
        assert_eq!(
            session.store().read(),
            &[InventoryRow::new("Gadget", 2, Money::from_minor(999))]
        );

        let notices = session.take_notices();
        let levels: Vec<_> = notices.iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            vec![NoticeLevel::Success, NoticeLevel::Success, NoticeLevel::Warning]
        );
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn empty_name_is_reported_and_nothing_is_added() {
        let mut session = Session::new();
        let err = session.add_item(&add_req("", "3", "5.00")).unwrap_err();

        assert!(err.is_validation());
        assert!(session.store().is_empty());
        assert_eq!(session.take_notices(), vec![Notice::error("name required")]);
    }

    #[test]
    fn out_of_range_remove_is_reported_and_store_unchanged() {
        let mut session = Session::new();
        session.add_item(&add_req("Gadget", "2", "9.99")).unwrap();
        session.take_notices();

        let err = session.remove_item(&remove_req("5")).unwrap_err();
        assert_eq!(err, DomainError::out_of_range(5, 1));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().read()[0].name, "Gadget");

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn negative_position_is_out_of_range() {
        let mut session = Session::new();
        session.add_item(&add_req("Gadget", "2", "9.99")).unwrap();

        let err = session.remove_item(&remove_req("-1")).unwrap_err();
        assert_eq!(err, DomainError::out_of_range(-1, 1));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn oversized_positions_are_out_of_range() {
        let mut session = Session::new();
        session.add_item(&add_req("Gadget", "2", "9.99")).unwrap();

        let err = session.remove_item(&remove_req("99999999999999999999")).unwrap_err();
        assert_eq!(err, DomainError::out_of_range(i64::MAX, 1));

        let err = session.remove_item(&remove_req("-99999999999999999999")).unwrap_err();
        assert_eq!(err, DomainError::out_of_range(i64::MIN, 1));

        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn name_is_stored_as_entered() {
        let mut session = Session::new();
        session.add_item(&add_req("  Widget ", "1", "1.00")).unwrap();

        assert_eq!(session.store().read()[0].name, "  Widget ");
        assert_eq!(
            session.take_notices(),
            vec![Notice::success("Added:   Widget  (quantity: 1)")]
        );
    }

    #[test]
    fn selection_is_clamped_to_live_bounds() {
        let mut session = Session::new();
        assert_eq!(session.selected_position(), None);

        for name in ["a", "b", "c"] {
            session.add_item(&add_req(name, "1", "1.00")).unwrap();
        }
        session.select(2);
        assert_eq!(session.selected_position(), Some(2));

        session.remove_item(&remove_req("2")).unwrap();
        assert_eq!(session.selected_position(), Some(1));

        session.select(-4);
        assert_eq!(session.selected_position(), Some(0));

        session.select(99);
        assert_eq!(session.selected_position(), Some(1));
    }
}
