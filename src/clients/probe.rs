use std::time::Duration;

use tokio::{net::TcpStream, time::timeout};

use crate::config::Settings;

use super::Connectivity;

/// Treats the network as available when a TCP connection to the mail provider
/// can be opened within the timeout.
pub struct TcpProbe {
    address: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.probe_address.clone(), settings.probe_timeout)
    }
}

impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        matches!(
            timeout(self.timeout, TcpStream::connect(self.address.as_str())).await,
            Ok(Ok(_))
        )
    }
}
