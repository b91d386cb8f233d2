use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub fit_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FLOWCAST_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid FLOWCAST_LISTEN_ADDR");
        let cors_allow = std::env::var("FLOWCAST_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms: u64 = std::env::var("FLOWCAST_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let fit_timeout_ms: u64 = std::env::var("FLOWCAST_FIT_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .unwrap_or(10000);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            fit_timeout: Duration::from_millis(fit_timeout_ms),
        }
    }
}
