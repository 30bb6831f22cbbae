//! Process configuration, read once from the environment at startup.
//!
//! Nothing here can fail: missing, empty or malformed values fall back to
//! the defaults below.

use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 8080;
pub const UNKNOWN: &str = "unknown";

pub const ENV_APP_PORT: &str = "APP_PORT";
pub const ENV_POD_IP: &str = "POD_IP";
pub const ENV_POD_NAME: &str = "POD_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub pod_ip: String,
    pub pod_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            pod_ip: UNKNOWN.into(),
            pod_name: UNKNOWN.into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.is_empty());

        let port = match non_empty(ENV_APP_PORT) {
            None => DEFAULT_PORT,
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "APP_PORT is not a valid port, using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
        };

        Self {
            port,
            pod_ip: non_empty(ENV_POD_IP).unwrap_or_else(|| UNKNOWN.into()),
            pod_name: non_empty(ENV_POD_NAME).unwrap_or_else(|| UNKNOWN.into()),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// The pod identity block shown on the index page.
    pub fn env_block(&self) -> String {
        format!("POD_IP:\t\t{}\nPOD_NAME:\t{}\n", self.pod_ip, self.pod_name)
    }
}
