use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::swipe::SwipeThresholds;

/// Credentials and endpoint for the email relay. These are public client-side
/// identifiers, not secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaySettings {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_service_id")]
    pub service_id: String,
    #[serde(default = "default_template_id")]
    pub template_id: String,
    #[serde(default = "default_public_key")]
    pub public_key: String,
}

fn default_relay_endpoint() -> String { "https://api.emailjs.com/api/v1.0/email/send".into() }
fn default_service_id() -> String { "service_1w6ufyl".into() }
fn default_template_id() -> String { "template_ntgirwj".into() }
fn default_public_key() -> String { "VOHAApMIEYaIWg2QZ".into() }

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: default_service_id(),
            template_id: default_template_id(),
            public_key: default_public_key(),
        }
    }
}

/// Read-only runtime settings. Nothing the user does in the app is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding photos, logos, the headshot and the résumé.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default)]
    pub relay: RelaySettings,
    /// Minimum |dx|/|dy| for a drag to count as horizontal.
    #[serde(default = "default_swipe_ratio")]
    pub swipe_ratio: f32,
    /// Minimum horizontal travel (logical pixels) for a swipe to navigate.
    #[serde(default = "default_swipe_min_distance")]
    pub swipe_min_distance: f32,
    /// How long the contact status banner stays up.
    #[serde(default = "default_status_reset_secs")]
    pub status_reset_secs: u64,
    /// Delay before the background effect is created.
    #[serde(default = "default_effect_init_delay_ms")]
    pub effect_init_delay_ms: u64,
}

fn default_assets_dir() -> PathBuf { PathBuf::from("assets") }
fn default_swipe_ratio() -> f32 { 1.5 }
fn default_swipe_min_distance() -> f32 { 50.0 }
fn default_status_reset_secs() -> u64 { 5 }
fn default_effect_init_delay_ms() -> u64 { 100 }

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            relay: RelaySettings::default(),
            swipe_ratio: default_swipe_ratio(),
            swipe_min_distance: default_swipe_min_distance(),
            status_reset_secs: default_status_reset_secs(),
            effect_init_delay_ms: default_effect_init_delay_ms(),
        }
    }
}

impl Settings {
    /// Windows → AppData/Local/Portfolio/, Linux → ~/.config/Portfolio/
    fn config_dir() -> PathBuf {
        dirs::config_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Portfolio")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents),
            Err(_) => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    fn from_json(contents: &str) -> Self {
        let mut settings: Self = serde_json::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!("Invalid settings file, using defaults: {e}");
            Self::default()
        });
        settings.sanitize();
        settings
    }

    /// Clamp all numeric fields to usable ranges.
    fn sanitize(&mut self) {
        if !self.swipe_ratio.is_finite() {
            self.swipe_ratio = default_swipe_ratio();
        }
        if !self.swipe_min_distance.is_finite() {
            self.swipe_min_distance = default_swipe_min_distance();
        }
        self.swipe_ratio = self.swipe_ratio.clamp(1.0, 10.0);
        self.swipe_min_distance = self.swipe_min_distance.clamp(10.0, 500.0);
        self.status_reset_secs = self.status_reset_secs.clamp(1, 60);
        self.effect_init_delay_ms = self.effect_init_delay_ms.min(5_000);
    }

    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            ratio: self.swipe_ratio,
            min_distance: self.swipe_min_distance,
        }
    }

    pub fn status_reset_delay(&self) -> Duration {
        Duration::from_secs(self.status_reset_secs)
    }

    pub fn effect_init_delay(&self) -> Duration {
        Duration::from_millis(self.effect_init_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let s = Settings::default();
        assert!((s.swipe_ratio - 1.5).abs() < f32::EPSILON);
        assert!((s.swipe_min_distance - 50.0).abs() < f32::EPSILON);
        assert_eq!(s.status_reset_delay(), Duration::from_secs(5));
        assert_eq!(s.effect_init_delay(), Duration::from_millis(100));
        assert_eq!(s.relay.service_id, "service_1w6ufyl");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let s = Settings::from_json(r#"{"status_reset_secs":8,"relay":{"service_id":"svc"}}"#);
        assert_eq!(s.status_reset_secs, 8);
        assert_eq!(s.relay.service_id, "svc");
        assert_eq!(s.relay.template_id, "template_ntgirwj");
        assert_eq!(s.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let s = Settings::from_json("{ not json");
        assert_eq!(s.status_reset_secs, 5);
    }

    #[test]
    fn test_sanitize_clamps() {
        let s = Settings::from_json(
            r#"{"swipe_ratio":0.2,"swipe_min_distance":9000,"status_reset_secs":0,"effect_init_delay_ms":99999}"#,
        );
        assert!((s.swipe_ratio - 1.0).abs() < f32::EPSILON);
        assert!((s.swipe_min_distance - 500.0).abs() < f32::EPSILON);
        assert_eq!(s.status_reset_secs, 1);
        assert_eq!(s.effect_init_delay_ms, 5_000);
    }
}
