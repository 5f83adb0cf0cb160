/// Console configuration
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tunecloud_core::Catalog;
use tunecloud_playback::PlaybackConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog listing in the `{ "songs": [...], "albums": [...] }` shape
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineSettings {
    /// Duration the simulated engine reports for every source
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: f64,

    /// Interval between simulated progress notifications
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// The file is optional. Environment variables prefixed with
    /// `TUNECLOUD_` override it, using `__` between nested keys
    /// (e.g. `TUNECLOUD_PLAYBACK__INITIAL_VOLUME=0.5`).
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUNECLOUD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Read the catalog listing named by `catalog.path`
    pub fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::load(&self.catalog.path)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.playback.validate()?;

        if !(self.engine.default_duration_secs.is_finite() && self.engine.default_duration_secs > 0.0)
        {
            return Err(ConsoleError::Config(format!(
                "engine.default_duration_secs must be positive, got {}",
                self.engine.default_duration_secs
            )));
        }

        if self.engine.progress_interval_ms == 0 {
            return Err(ConsoleError::Config(
                "engine.progress_interval_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_duration_secs() -> f64 {
    200.0
}

fn default_progress_interval_ms() -> u64 {
    250
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            progress_interval_ms: default_progress_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.playback, PlaybackConfig::default());
        assert_eq!(config.catalog.path, PathBuf::from("catalog.json"));
        assert_eq!(config.engine.progress_interval_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[playback]
initial_volume = 0.4

[engine]
default_duration_secs = 95.5
"#
        )
        .unwrap();

        let config = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(config.playback.initial_volume, 0.4);
        assert_eq!(config.playback.volume_step, 0.05);
        assert_eq!(config.engine.default_duration_secs, 95.5);
        assert_eq!(config.engine.progress_interval_ms, 250);
    }

    #[test]
    fn catalog_errors_map_to_console_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ConsoleConfig::default();

        config.catalog.path = dir.path().join("missing.json");
        assert!(matches!(
            config.load_catalog(),
            Err(ConsoleError::Catalog(tunecloud_core::CoreError::Io(_)))
        ));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        config.catalog.path = path;
        assert!(matches!(
            config.load_catalog(),
            Err(ConsoleError::Catalog(tunecloud_core::CoreError::Parse(_)))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        let mut config = ConsoleConfig::default();
        config.engine.progress_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConsoleError::Config(_))));

        let mut config = ConsoleConfig::default();
        config.playback.initial_volume = 2.0;
        assert!(matches!(config.validate(), Err(ConsoleError::Playback(_))));
    }
}
