use axum::{
    Json,
    extract::{Path, State},
};
use log::Level;
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics::REQUEST_TOTAL;
use crate::models::LogPayload;
use crate::notify::log_notice;
use crate::state::AppState;

pub async fn relay_log(
    State(state): State<Arc<AppState>>,
    Path(level): Path<String>,
    Json(payload): Json<LogPayload>,
) -> Result<&'static str, AppError> {
    REQUEST_TOTAL.inc();

    // unknown severities degrade to info
    let level = level.parse::<Level>().unwrap_or(Level::Info);

    // mirror to the local console sink; log4rs colors by level
    match &payload.data {
        Some(data) => log::log!(level, "[relay] {} {}", payload.message, data),
        None => log::log!(level, "[relay] {}", payload.message),
    }

    let notice = log_notice(level, &payload);
    state
        .chat
        .post_message(&state.logging_channel, &notice)
        .await?;

    Ok("SUCCESS")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{spawn_app, spawn_chat_api, state_for};
    use axum::{Router, routing::post};

    #[tokio::test]
    async fn unknown_severity_degrades_to_info() {
        let (api, posted) = spawn_chat_api().await;
        let state = state_for(api);
        let app = spawn_app(
            Router::new()
                .route("/log/{level}", post(relay_log))
                .with_state(state),
        )
        .await;

        let res = reqwest::Client::new()
            .post(format!("{}/log/verbose", app))
            .json(&serde_json::json!({"message": "hi"}))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 200);
        assert_eq!(res.text().await.unwrap(), "SUCCESS");

        let posted = posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "logs");
        assert_eq!(posted[0].1["embeds"][0]["title"], "INFO");
    }
}
