use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use log::warn;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::error::AppError;
use crate::ip::client_ip;
use crate::metrics::{
    APPLICATIONS_FORWARDED, RATE_LIMIT_ENTRIES, RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL,
};
use crate::models::ApplicationPayload;
use crate::notify::application_notice;
use crate::state::AppState;

pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ApplicationPayload>,
) -> Result<&'static str, AppError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    if payload.courses.is_empty() {
        return Err(AppError::NoCourses);
    }

    // membership lookup comes first: a failed resolution must not record
    // a rate-limit entry
    let member = state
        .chat
        .fetch_member(&payload.member_id)
        .await?
        .ok_or(AppError::MemberNotFound)?;

    let now = Instant::now();
    state.rate_limiter.purge(now);
    RATE_LIMIT_ENTRIES.set(state.rate_limiter.len() as f64);

    match client_ip(&headers, Some(peer)) {
        Some(ip) => {
            if !state.rate_limiter.check(&ip, now) {
                RATE_LIMITED_TOTAL.inc();
                return Err(AppError::RateLimited);
            }
        }
        // fail open: without a key there is nothing to check
        None => warn!("client ip undetermined, skipping rate limit"),
    }

    // course ids -> role names; anything unresolved keeps the raw id
    let course_names = match state.chat.roles().await {
        Ok(roles) => payload
            .courses
            .iter()
            .map(|id| {
                roles
                    .iter()
                    .find(|role| &role.id == id)
                    .map(|role| role.name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect::<Vec<_>>(),
        Err(e) => {
            warn!("role lookup failed, keeping raw course ids: {}", e);
            payload.courses.clone()
        }
    };

    let notice = application_notice(Some(&member), &course_names, &payload);
    state
        .chat
        .post_message(&state.applications_channel, &notice)
        .await?;

    APPLICATIONS_FORWARDED.inc();
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok("Application Sent")
}
