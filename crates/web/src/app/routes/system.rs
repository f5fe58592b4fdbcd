use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::AppState;

pub async fn health(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(serde_json::json!({
        "status": "ok",
        "items": session.store().len(),
    }))
}
