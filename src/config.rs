use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "guild-relay")]
#[command(about = "HTTP bridge forwarding form submissions into a guild chat")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Chat platform REST API base
    #[arg(long, default_value = "https://discord.com/api/v10")]
    pub api_base: String,

    // Bot token; falls back to the RELAY_TOKEN env var
    #[arg(long)]
    pub token: Option<String>,

    // Guild the membership and role lookups run against
    #[arg(long)]
    pub guild_id: String,

    // Channel receiving application notices
    #[arg(long)]
    pub applications_channel: String,

    // Channel receiving log/bug/suggestion notices
    #[arg(long)]
    pub logging_channel: String,

    // Rate limit window in seconds (one application per IP per window)
    #[arg(long, default_value_t = 300)]
    pub rate_window: u64,

    // Role list cache TTL in seconds
    #[arg(long, default_value_t = 60)]
    pub roles_cache_ttl: u64,
}

impl Args {
    // Token from the flag, or from the environment
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("RELAY_TOKEN").ok())
    }
}
