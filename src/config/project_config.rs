use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::core::errors::{FrontenvError, Result};
use crate::core::models::env_layer::EnvLayer;

/// Default project file name, looked up in the working directory.
pub const DEFAULT_PROJECT_FILE: &str = "frontenv.toml";

/// Current format version supported by this build of frontenv.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Top-level project configuration read from `frontenv.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub frontenv: FrontenvSection,
    #[serde(default)]
    pub environments: BTreeMap<String, EnvEntry>,
    /// Directory holding the project file; relative `output` paths
    /// resolve against it.
    #[serde(skip)]
    pub root: PathBuf,
}

impl ProjectConfig {
    /// Load and validate the project file at `path`.
    ///
    /// Rejects format versions newer than this build understands and
    /// environment names that could escape the project directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FrontenvError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content).map_err(|e| match e {
            FrontenvError::InvalidConfig { detail } => FrontenvError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!(
            path = %path.display(),
            environments = config.environments.len(),
            "loaded project file"
        );
        Ok(config)
    }

    /// Parse project file content without touching the filesystem.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FrontenvError::InvalidConfig {
            detail: format!("Failed to parse project file: {e}"),
        })?;

        if config.frontenv.format_version > CURRENT_FORMAT_VERSION {
            return Err(FrontenvError::FormatVersionTooNew {
                project_version: config.frontenv.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        for (name, entry) in &config.environments {
            validate_env_name(name)?;
            if let Some(parent) = &entry.inherits {
                validate_env_name(parent)?;
            }
            if !entry.unknown.is_empty() {
                let keys: Vec<&str> = entry.unknown.keys().map(String::as_str).collect();
                return Err(FrontenvError::InvalidConfig {
                    detail: format!(
                        "environment '{name}': unknown key(s) {} (expected inherits, output, \
                         production, api_server_url, [auth0])",
                        keys.join(", ")
                    ),
                });
            }
        }

        Ok(config)
    }

    /// Environment used when `--env` is not given.
    pub fn default_env(&self) -> &str {
        &self.frontenv.default_env
    }

    /// Comma-separated environment names, for error messages.
    pub fn available(&self) -> String {
        if self.environments.is_empty() {
            return "(none)".into();
        }
        self.environments
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Environments no other environment inherits from, in name order.
    ///
    /// These are the ones meant to be rendered; parents such as `base`
    /// are often incomplete on purpose.
    pub fn leaf_envs(&self) -> Vec<&str> {
        let parents: BTreeSet<&str> = self
            .environments
            .values()
            .filter_map(|e| e.inherits.as_deref())
            .collect();
        self.environments
            .keys()
            .map(String::as_str)
            .filter(|name| !parents.contains(name))
            .collect()
    }

    /// Where the rendered file for `name` goes, if configured.
    pub fn output_path(&self, name: &str) -> Option<PathBuf> {
        self.environments
            .get(name)
            .and_then(|e| e.output.as_ref())
            .map(|out| self.root.join(out))
    }
}

/// The `[frontenv]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontenvSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default = "default_env_name")]
    pub default_env: String,
}

impl Default for FrontenvSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            default_env: default_env_name(),
        }
    }
}

fn default_format_version() -> u32 {
    1
}

fn default_env_name() -> String {
    "dev".into()
}

/// One `[environments.<name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvEntry {
    pub inherits: Option<String>,
    /// Rendered file path, relative to the project file.
    pub output: Option<String>,
    #[serde(flatten)]
    pub layer: EnvLayer,
    /// Whatever `layer` did not claim; must stay empty.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

/// Validate an environment name: non-empty, `[A-Za-z0-9_-]` only.
pub fn validate_env_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FrontenvError::InvalidConfig {
            detail: "environment name cannot be empty".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(FrontenvError::InvalidConfig {
            detail: format!(
                "invalid environment name '{name}': only letters, digits, '-' and '_' are allowed"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[frontenv]
default_env = "dev"

[environments.base]
api_server_url = "http://127.0.0.1:5000"

[environments.base.auth0]
url = "ezufsnd.us"
audience = "http://127.0.0.1:5000"
client_id = "RuBUGVhuWSJL7dBoWekcOeOf462x3NL7"
callback_url = "http://localhost:8100"

[environments.dev]
inherits = "base"
production = false
output = "src/environments/environment.ts"
"#;

    #[test]
    fn parses_layers_and_entries() {
        let config = ProjectConfig::parse(SAMPLE).unwrap();

        assert_eq!(config.frontenv.format_version, 1);
        assert_eq!(config.default_env(), "dev");
        assert_eq!(config.available(), "base, dev");

        let base = &config.environments["base"];
        assert_eq!(base.layer.auth0.url.as_deref(), Some("ezufsnd.us"));
        assert!(base.inherits.is_none());

        let dev = &config.environments["dev"];
        assert_eq!(dev.inherits.as_deref(), Some("base"));
        assert_eq!(dev.layer.production, Some(false));
        assert!(dev.layer.api_server_url.is_none());
    }

    #[test]
    fn leaf_envs_skip_parents() {
        let config = ProjectConfig::parse(SAMPLE).unwrap();

        assert_eq!(config.leaf_envs(), vec!["dev"]);
    }

    #[test]
    fn output_path_is_relative_to_root() {
        let mut config = ProjectConfig::parse(SAMPLE).unwrap();
        config.root = PathBuf::from("/work/app");

        assert_eq!(
            config.output_path("dev"),
            Some(PathBuf::from("/work/app/src/environments/environment.ts"))
        );
        assert_eq!(config.output_path("base"), None);
    }

    #[test]
    fn missing_section_uses_defaults() {
        let config = ProjectConfig::parse("[environments.dev]\nproduction = true\n").unwrap();

        assert_eq!(config.default_env(), "dev");
        assert_eq!(config.frontenv.format_version, CURRENT_FORMAT_VERSION);
    }

    #[test]
    fn rejects_newer_format_version() {
        let err = ProjectConfig::parse("[frontenv]\nformat_version = 9\n").unwrap_err();

        assert!(matches!(
            err,
            FrontenvError::FormatVersionTooNew {
                project_version: 9,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn rejects_traversal_in_env_name() {
        let err = ProjectConfig::parse("[environments.\"../etc\"]\nproduction = true\n")
            .unwrap_err();

        assert!(err.to_string().contains("invalid environment name"));
    }

    #[test]
    fn rejects_unknown_auth0_key() {
        let err =
            ProjectConfig::parse("[environments.dev.auth0]\nclientid = \"typo\"\n").unwrap_err();

        assert!(matches!(err, FrontenvError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_misspelled_environment_key() {
        let err = ProjectConfig::parse(
            "[environments.prod]\nproduction = true\napi_server_ulr = \"https://api.example.com\"\n",
        )
        .unwrap_err();

        assert!(matches!(err, FrontenvError::InvalidConfig { .. }));
        assert!(err.to_string().contains("environment 'prod'"));
        assert!(err.to_string().contains("api_server_ulr"));
    }

    #[test]
    fn rejects_auth0_key_outside_auth0_table() {
        let err = ProjectConfig::parse(
            "[environments.prod]\ninherits = \"base\"\ncallback_url = \"https://app.example.com\"\n\
             [environments.base]\nproduction = false\n",
        )
        .unwrap_err();

        assert!(err.to_string().contains("callback_url"));
    }

    #[test]
    fn known_keys_leave_nothing_unclaimed() {
        let config = ProjectConfig::parse(SAMPLE).unwrap();

        assert!(config.environments.values().all(|e| e.unknown.is_empty()));
    }

    #[test]
    fn rejects_unknown_section() {
        assert!(ProjectConfig::parse("[enviroments.dev]\nproduction = true\n").is_err());
    }

    #[test]
    fn validate_env_name_rules() {
        assert!(validate_env_name("prod").is_ok());
        assert!(validate_env_name("staging-eu_2").is_ok());
        assert!(validate_env_name("").is_err());
        assert!(validate_env_name("a/b").is_err());
        assert!(validate_env_name("a.b").is_err());
    }
}
