use config::{Config, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EvlistError, Result};

/// Page settings, layered from an optional TOML file and `EVLIST__*`
/// environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_events_path")]
    pub events_path: PathBuf,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_press_reset_ms")]
    pub press_reset_ms: u64,
    #[serde(default = "default_ripple_ms")]
    pub ripple_ms: u64,
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    #[serde(default = "default_lift_offset")]
    pub lift_offset: i16,
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub autofocus_search: bool,
    #[serde(default = "default_true")]
    pub hide_past_events: bool,
}

fn default_events_path() -> PathBuf {
    PathBuf::from("events.json")
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_press_reset_ms() -> u64 {
    150
}

fn default_ripple_ms() -> u64 {
    600
}

fn default_notification_ttl_ms() -> u64 {
    3000
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_lift_offset() -> i16 {
    2
}

fn default_submit_latency_ms() -> u64 {
    400
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            events_path: default_events_path(),
            search_debounce_ms: default_search_debounce_ms(),
            press_reset_ms: default_press_reset_ms(),
            ripple_ms: default_ripple_ms(),
            notification_ttl_ms: default_notification_ttl_ms(),
            reveal_threshold: default_reveal_threshold(),
            lift_offset: default_lift_offset(),
            submit_latency_ms: default_submit_latency_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            autofocus_search: true,
            hide_past_events: true,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let config_path =
            std::env::var("EVLIST_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("EVLIST").separator("__"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.events_path.as_os_str().is_empty() {
            return Err(EvlistError::Configuration(
                "events_path is required".to_string(),
            ));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(EvlistError::Configuration(
                "reveal_threshold must be in (0, 1]".to_string(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(EvlistError::Configuration(
                "tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn press_reset(&self) -> Duration {
        Duration::from_millis(self.press_reset_ms)
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
