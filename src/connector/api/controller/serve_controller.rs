use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use tracing::info;

use crate::connector::server;

pub struct ServeController;

impl ServeController {
    pub fn new() -> Self {
        Self
    }

    /// Runs the demo backend until Ctrl-C.
    pub async fn serve(&self, port: u16, public: bool) -> Result<String> {
        let ip = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };

        let (addr, server) = server::bind(SocketAddr::new(ip, port)).await?;
        println!("Demo backend running on http://{}", addr);

        tokio::select! {
            result = server => result?,
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, shutting down demo backend");
            }
        }

        Ok("Demo backend stopped.".to_string())
    }
}

impl Default for ServeController {
    fn default() -> Self {
        Self::new()
    }
}
