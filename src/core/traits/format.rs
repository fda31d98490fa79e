use crate::core::errors::Result;
use crate::core::models::environment::EnvironmentConfig;

/// Port for reading and rendering an `EnvironmentConfig` document.
///
/// Ships with JSON, TOML and the TypeScript module the front-end build
/// imports.
pub trait ConfigFormat: Send + Sync {
    /// Short name used by `--format` (e.g. `json`).
    fn name(&self) -> &'static str;

    /// Parse a document back into a record.
    fn parse(&self, content: &str) -> Result<EnvironmentConfig>;

    /// Render the record as a document.
    fn serialize(&self, config: &EnvironmentConfig) -> Result<String>;

    /// File extensions this format handles (e.g. `[".json"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Wrap `text` as comment lines, or `None` if the format has no comments.
    fn comment(&self, text: &str) -> Option<String>;
}
