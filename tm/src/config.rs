//! TaskMesh configuration types and loading

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::task::{TaskConfig, default_task_set};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the driver polls the store
    pub reader: ReaderConfig,

    /// Tasks to run; one queue is created per task name
    pub tasks: Vec<TaskConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            tasks: default_task_set(),
        }
    }
}

/// Store polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Number of snapshots to take before shutting down
    pub ticks: u32,

    /// Delay between snapshots in milliseconds
    #[serde(rename = "interval-ms")]
    pub interval_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            ticks: 200,
            interval_ms: 50,
        }
    }
}

impl ReaderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Reject configurations the harness cannot run
    ///
    /// Routes to unknown tasks are allowed; those messages are dropped at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.tasks.is_empty() {
            return Err(eyre!("No tasks configured"));
        }
        if self.reader.interval_ms == 0 {
            return Err(eyre!("reader.interval-ms must be greater than zero"));
        }

        let mut names = HashSet::new();
        for task in &self.tasks {
            if task.name.trim().is_empty() {
                return Err(eyre!("Task name must not be empty"));
            }
            if task.period_ms == 0 {
                return Err(eyre!("Task {} has a zero period", task.name));
            }
            if !names.insert(task.name.as_str()) {
                return Err(eyre!("Duplicate task name: {}", task.name));
            }
        }

        for task in &self.tasks {
            for route in task.routes() {
                if !names.contains(route.to.as_str()) {
                    tracing::warn!(
                        task = %task.name,
                        to = %route.to,
                        kind = %route.kind,
                        "Route targets an unknown task; its messages will be dropped"
                    );
                }
            }
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: ./taskmesh.yml
        let local_config = PathBuf::from("taskmesh.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/taskmesh/taskmesh.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("taskmesh").join("taskmesh.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}
