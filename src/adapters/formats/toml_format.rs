use crate::core::errors::{FrontenvError, Result};
use crate::core::models::environment::EnvironmentConfig;
use crate::core::traits::format::ConfigFormat;

/// TOML rendering, for backends and tooling that read the same values.
pub struct TomlFormat;

impl ConfigFormat for TomlFormat {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn parse(&self, content: &str) -> Result<EnvironmentConfig> {
        toml::from_str(content).map_err(|e| FrontenvError::FormatError {
            format: self.name().into(),
            detail: e.to_string(),
        })
    }

    fn serialize(&self, config: &EnvironmentConfig) -> Result<String> {
        toml::to_string_pretty(config).map_err(|e| FrontenvError::FormatError {
            format: self.name().into(),
            detail: e.to_string(),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".toml"]
    }

    fn comment(&self, text: &str) -> Option<String> {
        Some(text.lines().map(|l| format!("# {l}\n")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::environment::sample_config;

    #[test]
    fn round_trip_preserves_fields() {
        let config = sample_config();
        let text = TomlFormat.serialize(&config).unwrap();

        assert_eq!(TomlFormat.parse(&text).unwrap(), config);
    }

    #[test]
    fn nested_scope_becomes_table() {
        let text = TomlFormat.serialize(&sample_config()).unwrap();

        assert!(text.contains("apiServerUrl = \"http://127.0.0.1:5000\""));
        assert!(text.contains("[auth0]"));
        assert!(text.contains("clientId = \"RuBUGVhuWSJL7dBoWekcOeOf462x3NL7\""));
    }

    #[test]
    fn parse_ignores_header_comments() {
        let config = sample_config();
        let header = TomlFormat.comment("generated\nfingerprint: x").unwrap();
        let text = format!("{header}{}", TomlFormat.serialize(&config).unwrap());

        assert_eq!(TomlFormat.parse(&text).unwrap(), config);
    }
}
