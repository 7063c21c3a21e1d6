use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<category>/<topic>.md` documents.
    pub content_path: PathBuf,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

/// Rendering switches, all off unless set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub wrap_ordered_lists: bool,
    pub code_language_class: bool,
}

/// One `[[categories]]` entry. Topic order is menu order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub key: String,
    pub title: String,
    pub topics: Vec<String>,
}

impl CategoryConfig {
    fn new(key: &str, title: &str, topics: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The menu used when the config file names no categories.
pub fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(
            "python",
            "Python",
            &["introduction", "syntax", "variables", "data-types", "operators"],
        ),
        CategoryConfig::new(
            "ccna",
            "CCNA",
            &["networking-basics", "osi-model", "tcp-ip", "routing", "switching"],
        ),
        CategoryConfig::new(
            "ccnp",
            "CCNP",
            &["advanced-routing", "bgp", "mpls", "qos", "network-security"],
        ),
    ]
}

impl Config {
    /// A config for `content_path` with default rendering and menu.
    pub fn new(content_path: PathBuf) -> Self {
        Self {
            content_path,
            render: RenderConfig::default(),
            categories: default_categories(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the content path
        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docbrowser");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
