use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::models::Role;

// Cache entry with timestamp
#[derive(Clone)]
pub struct CacheEntry {
    pub roles: Vec<Role>,
    pub fetched_at: Instant,
}

// TTL cache for the guild role list, keyed by guild id
pub struct RoleCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl RoleCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, guild_id: &str, now: Instant) -> Option<Vec<Role>> {
        let entry = self.entries.get(guild_id)?;
        if now.duration_since(entry.fetched_at) < self.ttl {
            Some(entry.roles.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, guild_id: &str, roles: Vec<Role>, now: Instant) {
        self.entries.insert(
            guild_id.to_string(),
            CacheEntry {
                roles,
                fetched_at: now,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: &str, name: &str) -> Role {
        Role {
            id: id.to_string(),
            name: name.to_string(),
            color: 0,
        }
    }

    #[test]
    fn fresh_entry_is_served() {
        let cache = RoleCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.insert("g", vec![role("1", "Rust")], now);

        let roles = cache.get("g", now + Duration::from_secs(30)).unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "Rust");
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let cache = RoleCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.insert("g", vec![role("1", "Rust")], now);

        assert!(cache.get("g", now + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn unknown_guild_is_a_miss() {
        let cache = RoleCache::new(Duration::from_secs(60));
        assert!(cache.get("g", Instant::now()).is_none());
    }
}
