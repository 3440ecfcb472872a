use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics::{REPORTS_FORWARDED, REQUEST_TOTAL};
use crate::models::ReportPayload;
use crate::notify::{ReportKind, report_notice};
use crate::state::AppState;

pub async fn report_bug(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ReportPayload>,
) -> Result<&'static str, AppError> {
    forward_report(&state, ReportKind::Bug, payload).await
}

pub async fn report_suggestion(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ReportPayload>,
) -> Result<&'static str, AppError> {
    forward_report(&state, ReportKind::Suggestion, payload).await
}

async fn forward_report(
    state: &AppState,
    kind: ReportKind,
    payload: ReportPayload,
) -> Result<&'static str, AppError> {
    REQUEST_TOTAL.inc();

    let user = state
        .chat
        .fetch_user(&payload.user)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let notice = report_notice(kind, Some(&user), &payload);
    state
        .chat
        .post_message(&state.logging_channel, &notice)
        .await?;

    REPORTS_FORWARDED.inc();
    Ok("SUCCESS")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{spawn_app, spawn_chat_api, state_for};
    use axum::{Router, routing::post};

    async fn spawn() -> (String, crate::handlers::testing::Posted) {
        let (api, posted) = spawn_chat_api().await;
        let state = state_for(api);
        let app = spawn_app(
            Router::new()
                .route("/feedback/bug", post(report_bug))
                .route("/feedback/suggestion", post(report_suggestion))
                .with_state(state),
        )
        .await;
        (app, posted)
    }

    #[tokio::test]
    async fn unknown_user_forwards_nothing() {
        let (app, posted) = spawn().await;

        let res = reqwest::Client::new()
            .post(format!("{}/feedback/bug", app))
            .json(&serde_json::json!({
                "title": "t", "user": "999", "type": "ui", "desc": "broken"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 404);
        assert_eq!(res.text().await.unwrap(), "ERROR: USER NOT FOUND");
        assert!(posted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn known_user_report_reaches_the_logging_channel() {
        let (app, posted) = spawn().await;

        let res = reqwest::Client::new()
            .post(format!("{}/feedback/suggestion", app))
            .json(&serde_json::json!({
                "title": "dark mode", "user": "42", "desc": "please"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 200);
        assert_eq!(res.text().await.unwrap(), "SUCCESS");

        let posted = posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        let (channel, message) = &posted[0];
        assert_eq!(channel, "logs");
        assert_eq!(message["embeds"][0]["title"], "Suggestion: dark mode");
    }
}
