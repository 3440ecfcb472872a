use std::time::Duration;

use crate::chat::ChatClient;
use crate::config::Args;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub chat: ChatClient,
    pub rate_limiter: RateLimiter,
    pub applications_channel: String,
    pub logging_channel: String,
}

impl AppState {
    pub fn new(args: &Args, token: String) -> Self {
        Self {
            chat: ChatClient::new(
                args.api_base.clone(),
                token,
                args.guild_id.clone(),
                Duration::from_secs(args.roles_cache_ttl),
            ),
            rate_limiter: RateLimiter::new(Duration::from_secs(args.rate_window)),
            applications_channel: args.applications_channel.clone(),
            logging_channel: args.logging_channel.clone(),
        }
    }
}
