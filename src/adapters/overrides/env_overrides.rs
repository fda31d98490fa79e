use std::path::Path;

use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::core::errors::{FrontenvError, Result};
use crate::core::models::env_layer::EnvLayer;
use crate::core::models::environment::Field;

/// Prefix for process variables that override resolved values.
pub const VAR_PREFIX: &str = "FRONTENV_";

/// Build the override layer applied on top of every resolved environment.
///
/// File overrides come first, `FRONTENV_*` variables last. Returns `None`
/// when neither source sets anything.
pub fn load(file: Option<&Path>) -> Result<Option<EnvLayer>> {
    let mut layer = match file {
        Some(path) => from_file(path)?,
        None => EnvLayer::default(),
    };

    let vars = from_vars(std::env::vars())?;
    layer.overlay(&vars);

    Ok((!layer.is_empty()).then_some(layer))
}

/// Read a dotenv-style overrides file.
///
/// Every key must name a field (`API_SERVER_URL`, `AUTH0_CLIENT_ID`, ...).
pub fn from_file(path: &Path) -> Result<EnvLayer> {
    if !path.exists() {
        return Err(FrontenvError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let file = DotenvParser.parse(&content, path)?;

    let mut layer = EnvLayer::default();
    for entry in &file.entries {
        let field = Field::from_env_key(&entry.key).ok_or_else(|| FrontenvError::ParseError {
            file: path.to_path_buf(),
            detail: format!(
                "line {}: unknown key '{}' (expected one of: {})",
                entry.line_number,
                entry.key,
                known_keys()
            ),
        })?;
        layer
            .set_raw(field, &entry.value)
            .map_err(|detail| FrontenvError::ParseError {
                file: path.to_path_buf(),
                detail: format!("line {}: {}: {detail}", entry.line_number, entry.key),
            })?;
        tracing::debug!(key = %entry.key, file = %path.display(), "override from file");
    }

    Ok(layer)
}

/// Collect `FRONTENV_<FIELD>` variables. Other `FRONTENV_*` names
/// (such as `FRONTENV_CONFIG`) are ignored.
pub fn from_vars<I>(vars: I) -> Result<EnvLayer>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut layer = EnvLayer::default();
    for (name, value) in vars {
        let Some(key) = name.strip_prefix(VAR_PREFIX) else {
            continue;
        };
        let Some(field) = Field::from_env_key(key) else {
            continue;
        };
        layer
            .set_raw(field, &value)
            .map_err(|detail| FrontenvError::InvalidConfig {
                detail: format!("{name}: {detail}"),
            })?;
        tracing::debug!(var = %name, "override from environment");
    }
    Ok(layer)
}

fn known_keys() -> String {
    Field::ALL
        .iter()
        .map(|f| f.env_key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn vars_map_to_fields() {
        let layer = from_vars(vars(&[
            ("FRONTENV_API_SERVER_URL", "https://api.example.com"),
            ("FRONTENV_PRODUCTION", "true"),
            ("FRONTENV_CONFIG", "other.toml"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();

        assert_eq!(layer.api_server_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(layer.production, Some(true));
        assert!(layer.auth0.url.is_none());
    }

    #[test]
    fn invalid_production_var_fails() {
        let err = from_vars(vars(&[("FRONTENV_PRODUCTION", "maybe")])).unwrap_err();

        assert!(err.to_string().contains("FRONTENV_PRODUCTION"));
    }
}
