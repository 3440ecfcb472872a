use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics::REQUEST_TOTAL;
use crate::models::Role;
use crate::state::AppState;

pub async fn list_roles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Role>>, AppError> {
    REQUEST_TOTAL.inc();

    let roles = state.chat.roles().await?;
    Ok(Json(roles))
}
