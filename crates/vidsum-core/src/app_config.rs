use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Socket address the server listens on.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// URL printed at startup so a developer can open the page.
    #[must_use]
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
