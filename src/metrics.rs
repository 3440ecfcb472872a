use lazy_static::lazy_static;
use prometheus::{
    Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("relay_requests_total", "Total number of requests").unwrap();
    pub static ref APPLICATIONS_FORWARDED: Counter = register_counter!(
        "relay_applications_forwarded_total",
        "Applications forwarded to the guild chat"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "relay_rate_limited_total",
        "Applications rejected by the rate limiter"
    )
    .unwrap();
    pub static ref REPORTS_FORWARDED: Counter = register_counter!(
        "relay_reports_forwarded_total",
        "Bug reports and suggestions forwarded"
    )
    .unwrap();
    pub static ref ROLE_CACHE_HITS: Counter =
        register_counter!("relay_role_cache_hits_total", "Role list cache hits").unwrap();
    pub static ref ROLE_CACHE_MISSES: Counter =
        register_counter!("relay_role_cache_misses_total", "Role list cache misses").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "relay_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref RATE_LIMIT_ENTRIES: Gauge = register_gauge!(
        "relay_rate_limit_entries",
        "Current number of tracked client IPs"
    )
    .unwrap();
}
