use crate::core::errors::{FrontenvError, Result};
use crate::core::models::environment::EnvironmentConfig;
use crate::core::traits::format::ConfigFormat;

/// Pretty-printed JSON, the shape runtime-config loaders fetch.
pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, content: &str) -> Result<EnvironmentConfig> {
        serde_json::from_str(content).map_err(|e| FrontenvError::FormatError {
            format: self.name().into(),
            detail: e.to_string(),
        })
    }

    fn serialize(&self, config: &EnvironmentConfig) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(config).map_err(|e| FrontenvError::FormatError {
                format: self.name().into(),
                detail: e.to_string(),
            })?;
        out.push('\n');
        Ok(out)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".json"]
    }

    fn comment(&self, _text: &str) -> Option<String> {
        None
    }
}
