use anyhow::Context;
use blockgate_schema::{SchemaRegistry, WidgetSchema};
use blockgate_widget::{WidgetOptions, DEFAULT_LOCK_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "blockgate.config.json";

/// Blockgate configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base name of the publishing lock held by invalid widgets
    #[serde(default = "default_lock_name")]
    pub lock_name: String,

    /// Additional widget schemas, registered after the built-ins
    #[serde(default)]
    pub widgets: Vec<WidgetSchema>,
}

fn default_lock_name() -> String {
    DEFAULT_LOCK_NAME.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", config_path.display()))?;
            debug!(path = %config_path.display(), widgets = config.widgets.len(), "config loaded");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Built-in schemas plus the ones declared here
    pub fn registry(&self) -> anyhow::Result<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();
        for widget in &self.widgets {
            registry
                .register(widget.clone())
                .with_context(|| format!("Invalid widget schema '{}'", widget.name))?;
        }
        Ok(registry)
    }

    pub fn widget_options(&self) -> WidgetOptions {
        WidgetOptions {
            lock_name: self.lock_name.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_name: default_lock_name(),
            widgets: vec![],
        }
    }
}
