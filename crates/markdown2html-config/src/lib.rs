//! User configuration for `markdown2html`, stored as TOML.
//!
//! Every field has a default, so a missing file or a partial file both load.
//! Paths are shell-expanded (`~`, `$VAR`) after loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CommonMark JSON examples used by `markdown2html conformance`.
    pub spec_tests_path: PathBuf,
    /// Where the conformance runner writes `myout{N}`/`out{N}` files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_output_dir: Option<PathBuf>,
    /// Extension used by `convert --in-place`.
    pub output_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec_tests_path: PathBuf::from("test.json"),
            debug_output_dir: None,
            output_extension: "html".to_string(),
        }
    }
}

impl Config {
    const APP_DIR: &'static str = "~/.config/markdown2html";
    const FILE_NAME: &'static str = "config.toml";

    /// `Ok(None)` when nothing exists at `path`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config.expanded()))
    }

    /// Loads the file at [`Config::default_path`], or defaults when absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::default_path())?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(Self::APP_DIR).as_ref()).join(Self::FILE_NAME)
    }

    fn expanded(self) -> Self {
        Self {
            spec_tests_path: expand(self.spec_tests_path),
            debug_output_dir: self.debug_output_dir.map(expand),
            ..self
        }
    }
}

/// Unset variables leave the path untouched.
fn expand(path: PathBuf) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path,
    }
}
