use axum::{
    routing::{get, post},
    Router,
};

pub mod inventory;
pub mod system;

/// Router for the inventory page and its form actions.
pub fn router() -> Router {
    Router::new()
        .route("/", get(inventory::page))
        .route("/items", post(inventory::add_item))
        .route("/items/remove", post(inventory::remove_item))
}
