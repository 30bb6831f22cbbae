//! HTTP handlers.
//!
//! - `/ping`   : heartbeat for the caller's remote address
//! - `/active` : current active-visitor count as JSON
//! - `/`       : index page

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    response::{Html, IntoResponse},
    Json,
};
use podwatch_core::protocol::ActiveUsers;

use crate::app_state::AppState;

/// Visitor identity: the remote socket address as `ip:port`.
///
/// Not stable behind proxies or NAT; every hop and every source port looks
/// like a different visitor.
pub fn visitor_key(remote: &SocketAddr) -> String {
    remote.to_string()
}

pub async fn ping(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    let key = visitor_key(&remote);
    tracing::debug!(visitor = %key, "heartbeat");
    state.presence().heartbeat(&key);
    "ok"
}

pub async fn active(State(state): State<AppState>) -> Json<ActiveUsers> {
    let body = ActiveUsers::new(state.presence().active_count());
    tracing::debug!(active_users = body.active_users(), "active count");
    Json(body)
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html().to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_formats() {
        let v4 = SocketAddr::from(([1, 2, 3, 4], 55));
        assert_eq!(visitor_key(&v4), "1.2.3.4:55");

        let v6: SocketAddr = "[::1]:8080".parse().unwrap();
        assert_eq!(visitor_key(&v6), "[::1]:8080");
    }
}
