use axum::{
    extract::{Extension, Form, Query},
    response::{Html, Redirect},
};

use crate::app::dto::{self, AddItemRequest, PageQuery, RemoveItemRequest};
use crate::app::view::{self, PageView};
use crate::app::AppState;

/// Full page render. `?position=N` moves the delete-panel selection first.
pub async fn page(
    Extension(state): Extension<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let mut session = state.session.lock().await;

    let previewing = match query.position.as_deref() {
        Some(raw) => match dto::parse_position(raw) {
            Ok(position) => {
                session.select(position);
                true
            }
            Err(e) => {
                tracing::debug!("ignoring position query {raw:?}: {e}");
                false
            }
        },
        None => false,
    };

    let notices = session.take_notices();
    let html = view::render_page(&PageView {
        store: session.store(),
        notices: &notices,
        selected: session.selected_position(),
        currency: &state.currency,
        expand_delete: previewing,
    });

    Html(html)
}

pub async fn add_item(
    Extension(state): Extension<AppState>,
    Form(body): Form<AddItemRequest>,
) -> Redirect {
    let mut session = state.session.lock().await;

    match session.add_item(&body) {
        Ok(()) => {
            let summary = session.store().summary();
            tracing::info!(
                name = body.name.trim(),
                quantity = body.quantity.trim(),
                rows = session.store().len(),
                total_quantity = summary.total_quantity,
                "item added"
            );
        }
        Err(e) => tracing::warn!("add rejected: {e}"),
    }

    Redirect::to("/")
}

pub async fn remove_item(
    Extension(state): Extension<AppState>,
    Form(body): Form<RemoveItemRequest>,
) -> Redirect {
    let mut session = state.session.lock().await;

    match session.remove_item(&body) {
        Ok(()) => tracing::info!(
            position = body.position.trim(),
            rows = session.store().len(),
            "item removed"
        ),
        Err(e) => tracing::warn!("remove rejected: {e}"),
    }

    Redirect::to("/")
}
