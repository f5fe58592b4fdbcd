//! Inventory domain module.
//!
//! This crate contains the stock rows and the in-memory store that owns them,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod notice;
pub mod row;
pub mod store;

pub use notice::{Notice, NoticeLevel};
pub use row::InventoryRow;
pub use store::{InventoryStore, StockSummary};
