use reqwest::StatusCode;
use std::time::{Duration, Instant};

use crate::cache::RoleCache;
use crate::metrics::{ROLE_CACHE_HITS, ROLE_CACHE_MISSES};
use crate::models::{Member, Message, Role, User};

// REST client for the chat platform. One fixed guild; lookups that miss
// return Ok(None), everything else surfaces as a reqwest error.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    guild_id: String,
    role_cache: RoleCache,
}

impl ChatClient {
    pub fn new(base_url: String, token: String, guild_id: String, roles_ttl: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
            guild_id,
            role_cache: RoleCache::new(roles_ttl),
        }
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.token)
    }

    pub async fn fetch_member(&self, user_id: &str) -> Result<Option<Member>, reqwest::Error> {
        let url = format!(
            "{}/guilds/{}/members/{}",
            self.base_url, self.guild_id, user_id
        );
        let res = self
            .http
            .get(&url)
            .header("Authorization", self.auth())
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let member = res.error_for_status()?.json::<Member>().await?;
        Ok(Some(member))
    }

    pub async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, reqwest::Error> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let res = self
            .http
            .get(&url)
            .header("Authorization", self.auth())
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let user = res.error_for_status()?.json::<User>().await?;
        Ok(Some(user))
    }

    // Role list for the guild, served from the TTL cache when fresh
    pub async fn roles(&self) -> Result<Vec<Role>, reqwest::Error> {
        if let Some(roles) = self.role_cache.get(&self.guild_id, Instant::now()) {
            ROLE_CACHE_HITS.inc();
            return Ok(roles);
        }
        ROLE_CACHE_MISSES.inc();

        let url = format!("{}/guilds/{}/roles", self.base_url, self.guild_id);
        let roles = self
            .http
            .get(&url)
            .header("Authorization", self.auth())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Role>>()
            .await?;

        self.role_cache
            .insert(&self.guild_id, roles.clone(), Instant::now());
        Ok(roles)
    }

    pub async fn post_message(
        &self,
        channel_id: &str,
        message: &Message,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel_id);
        self.http
            .post(&url)
            .header("Authorization", self.auth())
            .json(message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
