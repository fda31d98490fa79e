use crate::core::errors::{FrontenvError, Result};
use crate::core::models::dotenv_file::{DotenvEntry, DotenvFile};
use std::path::{Path, PathBuf};

/// Parses dotenv-style override files.
///
/// Supports:
/// - `KEY=value` entries, with an optional leading `export `
/// - Quoted values (`KEY="value"` and `KEY='value'`)
/// - Comment lines (`# ...`)
/// - Blank lines
pub struct DotenvParser;

impl DotenvParser {
    /// Parse file content. `origin` is only used in error messages.
    pub fn parse(&self, content: &str, origin: &Path) -> Result<DotenvFile> {
        let mut entries = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            if let Some(entry) = Self::parse_line(raw, idx + 1, origin)? {
                entries.push(entry);
            }
        }

        Ok(DotenvFile { entries })
    }

    /// `None` for blank and comment lines.
    fn parse_line(raw: &str, line_number: usize, origin: &Path) -> Result<Option<DotenvEntry>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let body = trimmed.strip_prefix("export ").unwrap_or(trimmed);

        let Some(eq_pos) = body.find('=') else {
            return Err(parse_error(
                origin,
                format!("line {line_number}: expected KEY=value, got: {trimmed}"),
            ));
        };

        let key = body[..eq_pos].trim().to_string();
        if key.is_empty() {
            return Err(parse_error(origin, format!("line {line_number}: empty key")));
        }

        let value = strip_quotes(body[eq_pos + 1..].trim());

        Ok(Some(DotenvEntry {
            key,
            value,
            line_number,
        }))
    }
}

fn parse_error(origin: &Path, detail: String) -> FrontenvError {
    FrontenvError::ParseError {
        file: PathBuf::from(origin),
        detail,
    }
}

/// Remove matching surrounding quotes (single or double) from a value.
fn strip_quotes(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<DotenvFile> {
        DotenvParser.parse(content, Path::new("overrides.env"))
    }

    fn pairs(file: &DotenvFile) -> Vec<(&str, &str)> {
        file.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn parse_simple_entries() {
        let file = parse("API_SERVER_URL=http://localhost:5000\nPRODUCTION=false").unwrap();

        assert_eq!(
            pairs(&file),
            vec![("API_SERVER_URL", "http://localhost:5000"), ("PRODUCTION", "false")]
        );
    }

    #[test]
    fn parse_quoted_values() {
        let file = parse("AUTH0_URL=\"tenant.us\"\nAUTH0_CLIENT_ID='abc123'").unwrap();

        assert_eq!(
            pairs(&file),
            vec![("AUTH0_URL", "tenant.us"), ("AUTH0_CLIENT_ID", "abc123")]
        );
    }

    #[test]
    fn parse_export_prefix() {
        let file = parse("export AUTH0_URL=tenant.us").unwrap();

        assert_eq!(pairs(&file), vec![("AUTH0_URL", "tenant.us")]);
    }

    #[test]
    fn comments_and_blanks_are_skipped_but_counted() {
        let file = parse("# staging\nAUTH0_URL=x\n\n# more\nPRODUCTION=true").unwrap();

        assert_eq!(file.entries.len(), 2);
        assert_eq!(file.entries[0].line_number, 2);
        assert_eq!(file.entries[1].line_number, 5);
    }

    #[test]
    fn parse_value_with_equals() {
        let file = parse("API_SERVER_URL=https://api.example.com/?a=b").unwrap();

        assert_eq!(pairs(&file), vec![("API_SERVER_URL", "https://api.example.com/?a=b")]);
    }

    #[test]
    fn repeated_keys_are_kept_in_order() {
        let file = parse("AUTH0_URL=first\nAUTH0_URL=second").unwrap();

        assert_eq!(
            pairs(&file),
            vec![("AUTH0_URL", "first"), ("AUTH0_URL", "second")]
        );
    }

    #[test]
    fn parse_invalid_line_fails_with_line_number() {
        let err = parse("AUTH0_URL=x\nNOT_VALID").unwrap_err();

        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("overrides.env"));
    }

    #[test]
    fn parse_empty_key_fails() {
        assert!(parse("=value").is_err());
    }
}
