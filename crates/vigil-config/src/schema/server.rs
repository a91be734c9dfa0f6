//! Backend server connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the investigation backend lives and how patient to be with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub connect_timeout_secs: u32,
    /// Whole-request timeout; speech synthesis makes replies slow.
    pub request_timeout_secs: u32,
}

impl ServerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
