use axum::http::HeaderMap;
use std::net::SocketAddr;

// Client IP for rate limiting. Proxy headers win over the peer address:
// first hop of X-Forwarded-For, then X-Real-IP, then the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty());

    if forwarded.is_some() {
        return forwarded;
    }

    let real_ip = headers
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok().map(|s| s.to_string()))
        .filter(|s| !s.is_empty());

    if real_ip.is_some() {
        return real_ip;
    }

    peer.map(|addr| addr.ip().to_string())
}
