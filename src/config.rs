use std::net::SocketAddr;

/// Process configuration.
///
/// The service deliberately has no configuration surface: it always binds
/// every interface on port 5000, with no env vars, config file, or CLI flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}
