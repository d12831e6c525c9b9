use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

const DEBUG_ENV: &str = "EQLENS_DEBUG";

/// Tunables for the timer-driven parts of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Period between camera samples while a session is active.
    pub sample_interval_ms: u64,
    /// Number of trailing readings retained per sampling session.
    pub history_limit: usize,
    /// Simulated latency before a saved journal entry is analysed.
    pub analysis_delay_ms: u64,
    /// Resolution of the voice recording clock.
    pub recording_tick_ms: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sample_interval_ms: 2_000,
            history_limit: 10,
            analysis_delay_ms: 1_500,
            recording_tick_ms: 1_000,
        }
    }
}

impl EngineSettings {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn recording_tick(&self) -> Duration {
        Duration::from_millis(self.recording_tick_ms)
    }

    /// Journal analysis delay, collapsed to zero when `EQLENS_DEBUG` is set.
    pub fn analysis_delay(&self) -> Duration {
        if debug_mode() {
            Duration::ZERO
        } else {
            Duration::from_millis(self.analysis_delay_ms)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            bail!("sampleIntervalMs must be greater than zero");
        }
        if self.recording_tick_ms == 0 {
            bail!("recordingTickMs must be greater than zero");
        }
        if self.history_limit == 0 {
            bail!("historyLimit must be greater than zero");
        }
        Ok(())
    }
}

fn debug_mode() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// JSON-backed settings with in-memory caching.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<EngineSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str::<EngineSettings>(&contents) {
                Ok(settings) if settings.validate().is_ok() => settings,
                Ok(_) | Err(_) => {
                    log::warn!(
                        "Ignoring invalid settings file {}; using defaults",
                        path.display()
                    );
                    EngineSettings::default()
                }
            }
        } else {
            EngineSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn settings(&self) -> EngineSettings {
        self.read().clone()
    }

    pub fn update(&self, settings: EngineSettings) -> Result<()> {
        settings.validate()?;
        let mut guard = self.write();
        self.persist(&settings)?;
        *guard = settings;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: EngineSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed settings in {}", self.path.display()))?;
        data.validate()?;
        *self.write() = data;
        Ok(())
    }

    fn persist(&self, data: &EngineSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, EngineSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.settings(), EngineSettings::default());
        assert_eq!(store.settings().history_limit, 10);
        assert_eq!(store.settings().sample_interval(), Duration::from_secs(2));
    }

    #[test]
    fn partial_file_fills_remaining_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "sampleIntervalMs": 500 }"#).unwrap();

        let store = SettingsStore::new(path).unwrap();
        let settings = store.settings();
        assert_eq!(settings.sample_interval_ms, 500);
        assert_eq!(settings.analysis_delay_ms, 1_500);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.settings(), EngineSettings::default());
    }

    #[test]
    fn update_persists_and_reload_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(path.clone()).unwrap();

        let updated = EngineSettings {
            history_limit: 5,
            ..EngineSettings::default()
        };
        store.update(updated.clone()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"historyLimit\": 5"));

        let other = SettingsStore::new(path).unwrap();
        assert_eq!(other.settings(), updated);
        other.reload().unwrap();
        assert_eq!(other.settings(), updated);
    }

    #[test]
    fn update_rejects_zero_interval() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        let bad = EngineSettings {
            sample_interval_ms: 0,
            ..EngineSettings::default()
        };
        assert!(store.update(bad).is_err());
        assert_eq!(store.settings(), EngineSettings::default());
    }
}
