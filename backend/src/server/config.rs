//! HTTP server configuration loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Listener settings read from CLI flags, `ACCOUNTS_*` environment
/// variables, and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct ServerSettings {
    /// Address the listener binds to.
    pub host: Option<IpAddr>,
    /// TCP port the listener binds to.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Configured host, defaulting to every IPv4 interface.
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address assembled from [`Self::host`] and [`Self::port`].
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host(), self.port())
    }
}

/// Resolved configuration handed to [`super::create_server`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration binding to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new(settings.bind_addr())
    }
}
