pub mod json_format;
pub mod toml_format;
pub mod ts_format;

use std::path::Path;

use crate::core::errors::{FrontenvError, Result};
use crate::core::traits::format::ConfigFormat;

use json_format::JsonFormat;
use toml_format::TomlFormat;
use ts_format::TypeScriptFormat;

/// Names accepted by `--format`.
pub const FORMAT_NAMES: [&str; 3] = ["ts", "json", "toml"];

/// Look up a format by its `--format` name.
pub fn by_name(name: &str) -> Result<Box<dyn ConfigFormat>> {
    match name.to_ascii_lowercase().as_str() {
        "ts" | "typescript" | "js" => Ok(Box::new(TypeScriptFormat)),
        "json" => Ok(Box::new(JsonFormat)),
        "toml" => Ok(Box::new(TomlFormat)),
        other => Err(FrontenvError::InvalidConfig {
            detail: format!(
                "unknown format '{other}' (expected one of: {})",
                FORMAT_NAMES.join(", ")
            ),
        }),
    }
}

/// Pick the format whose extensions match `path`, if any.
pub fn for_path(path: &Path) -> Option<Box<dyn ConfigFormat>> {
    let name = path.file_name()?.to_str()?;
    let all: [Box<dyn ConfigFormat>; 3] = [
        Box::new(TypeScriptFormat),
        Box::new(JsonFormat),
        Box::new(TomlFormat),
    ];
    all.into_iter()
        .find(|f| f.supported_extensions().iter().any(|ext| name.ends_with(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_accepts_aliases() {
        assert_eq!(by_name("TS").unwrap().name(), "ts");
        assert_eq!(by_name("typescript").unwrap().name(), "ts");
        assert_eq!(by_name("json").unwrap().name(), "json");
        assert!(by_name("yaml").is_err());
    }

    #[test]
    fn for_path_uses_extension() {
        let ts = for_path(Path::new("src/environments/environment.prod.ts")).unwrap();
        let json = for_path(Path::new("public/env.json")).unwrap();

        assert_eq!(ts.name(), "ts");
        assert_eq!(json.name(), "json");
        assert!(for_path(Path::new("README.md")).is_none());
    }
}
