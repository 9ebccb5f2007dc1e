use std::net::SocketAddrV4;
use std::time::Duration;

/// Server configs
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub proxy_api: ProxyApiConfig,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, proxy_api: ProxyApiConfig) -> Self {
        Self {
            addr,
            proxy_api,
        }
    }
}

/// Where the proxy api lives and how long we wait for it
#[derive(Debug, Clone)]
pub(crate) struct ProxyApiConfig {
    /// base url without trailing slash, e.g. `http://localhost:3000/api`
    pub base_url: String,
    pub timeout: Duration,
}

impl ProxyApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }
}
