// Loader configuration: rind.json plus environment overrides

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::search_path::{PathTemplate, SearchPaths};

/// Per-directory config file name
pub const CONFIG_FILE: &str = "rind.json";

/// Environment variable overriding the search path list. Holds a
/// `;`-separated list of templates and replaces the configured list
/// wholesale when set.
pub const PATH_ENV: &str = "RIND_PATH";

/// Loader settings, read from JSON with per-field defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search path templates, one `?` slot each, in precedence order
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,

    /// Command scripts are run with
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_search_paths() -> Vec<String> {
    SearchPaths::defaults().iter().map(|t| t.to_string()).collect()
}

fn default_interpreter() -> String {
    "sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_paths: default_search_paths(),
            interpreter: default_interpreter(),
        }
    }
}

impl Config {
    /// Parse config from a JSON string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        Self::from_str(&content)
    }

    /// The active config: `rind.json` in `dir` when present, else
    /// `~/.rind/config.json`, else compiled defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let local = dir.join(CONFIG_FILE);
        if local.exists() {
            log::debug!("using config {}", local.display());
            return Self::from_file(local);
        }
        if let Some(home) = dirs::home_dir() {
            let user = home.join(".rind").join("config.json");
            if user.exists() {
                log::debug!("using config {}", user.display());
                return Self::from_file(user);
            }
        }
        Ok(Self::default())
    }

    /// `load_from` the current directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        for text in &self.search_paths {
            if let Err(err) = PathTemplate::parse(text) {
                bail!("Invalid search path template: {}", err);
            }
        }
        if self.interpreter.is_empty() {
            bail!("Interpreter must not be empty");
        }
        Ok(())
    }

    /// Build the search path list, honoring the `RIND_PATH` override
    pub fn build_search_paths(&self) -> Result<SearchPaths> {
        if let Ok(spec) = std::env::var(PATH_ENV) {
            return SearchPaths::parse_list(&spec)
                .with_context(|| format!("Invalid template in {}", PATH_ENV));
        }
        let mut paths = SearchPaths::new();
        for text in &self.search_paths {
            paths
                .add_str(text)
                .with_context(|| format!("Invalid search path template '{}'", text))?;
        }
        Ok(paths)
    }
}
