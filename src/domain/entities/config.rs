use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_restart_settle_ms")]
    pub restart_settle_ms: u64,
    #[serde(default = "default_refresh_settle_ms")]
    pub refresh_settle_ms: u64,
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_probe_timeout_secs() -> u64 {
    4
}

fn default_restart_settle_ms() -> u64 {
    1000
}

fn default_refresh_settle_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            restart_settle_ms: default_restart_settle_ms(),
            refresh_settle_ms: default_refresh_settle_ms(),
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.max(1))
    }

    /// The pause between the stop and start halves of a restart.
    /// The OS needs at least a second to settle, so smaller values are raised.
    pub fn restart_settle(&self) -> Duration {
        Duration::from_millis(self.restart_settle_ms.max(1000))
    }

    /// The pause between a completed action and the forced status refresh.
    pub fn refresh_settle(&self) -> Duration {
        Duration::from_millis(self.refresh_settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.probe_timeout(), Duration::from_secs(4));
        assert_eq!(config.restart_settle(), Duration::from_millis(1000));
        assert_eq!(config.refresh_settle(), Duration::from_millis(500));
    }

    #[test]
    fn restart_settle_has_a_floor() {
        let config = AppConfig {
            restart_settle_ms: 10,
            ..Default::default()
        };
        assert_eq!(config.restart_settle(), Duration::from_millis(1000));
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"poll_interval_secs": 2}"#).unwrap();
        assert_eq!(config.poll_interval_secs, 2);
        assert_eq!(config.probe_timeout_secs, 4);
    }
}
