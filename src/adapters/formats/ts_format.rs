use crate::core::errors::{FrontenvError, Result};
use crate::core::models::environment::EnvironmentConfig;
use crate::core::traits::format::ConfigFormat;

const EXPORT_MARKER: &str = "export const environment";

/// The `environment.ts` module imported by Angular/Ionic builds.
///
/// Parsing understands the object-literal subset this renderer writes:
/// bare or quoted keys, single/double-quoted strings, booleans, comments
/// and trailing commas.
pub struct TypeScriptFormat;

impl ConfigFormat for TypeScriptFormat {
    fn name(&self) -> &'static str {
        "ts"
    }

    fn parse(&self, content: &str) -> Result<EnvironmentConfig> {
        let start = content.find(EXPORT_MARKER).ok_or_else(|| self.error(format!(
            "no '{EXPORT_MARKER} = {{ ... }}' declaration found"
        )))?;
        let rest = &content[start + EXPORT_MARKER.len()..];
        let rest = rest
            .trim_start()
            .strip_prefix('=')
            .ok_or_else(|| self.error(format!("expected '=' after '{EXPORT_MARKER}'")))?;

        let json = literal_to_json(rest).map_err(|detail| self.error(detail))?;
        serde_json::from_str(&json).map_err(|e| self.error(e.to_string()))
    }

    fn serialize(&self, config: &EnvironmentConfig) -> Result<String> {
        let auth0 = config.auth0();
        Ok(format!(
            "{EXPORT_MARKER} = {{\n  \
             production: {},\n  \
             apiServerUrl: {},\n  \
             auth0: {{\n    \
             url: {},\n    \
             audience: {},\n    \
             clientId: {},\n    \
             callbackURL: {},\n  \
             }},\n\
             }};\n",
            config.production(),
            quote(config.api_server_url()),
            quote(auth0.url()),
            quote(auth0.audience()),
            quote(auth0.client_id()),
            quote(auth0.callback_url()),
        ))
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".ts", ".js"]
    }

    fn comment(&self, text: &str) -> Option<String> {
        Some(text.lines().map(|l| format!("// {l}\n")).collect())
    }
}

impl TypeScriptFormat {
    fn error(&self, detail: String) -> FrontenvError {
        FrontenvError::FormatError {
            format: self.name().into(),
            detail,
        }
    }
}

/// Render a single-quoted TypeScript string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Convert the object literal at the start of `src` into JSON text.
///
/// Stops after the outermost closing brace.
fn literal_to_json(src: &str) -> std::result::Result<String, String> {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
                    i += 1;
                }
                if i + 1 >= chars.len() {
                    return Err("unterminated block comment".into());
                }
                i += 2;
                continue;
            }
            '\'' | '"' => {
                let (text, next) = read_string(&chars, i)?;
                out.push_str(&serde_json::Value::String(text).to_string());
                i = next;
                continue;
            }
            '{' | '[' => {
                depth += 1;
                out.push(c);
            }
            '}' | ']' => {
                if depth == 0 {
                    return Err(format!("unbalanced '{c}'"));
                }
                // Drop a trailing comma before the closing bracket.
                let trimmed_len = out.trim_end().len();
                out.truncate(trimmed_len);
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(c);
                depth -= 1;
                if depth == 0 {
                    return Ok(out);
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                let begin = i;
                while i < chars.len()
                    && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '$')
                {
                    i += 1;
                }
                let word: String = chars[begin..i].iter().collect();
                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if chars.get(j) == Some(&':') {
                    out.push_str(&serde_json::Value::String(word).to_string());
                } else {
                    out.push_str(&word);
                }
                continue;
            }
            c => {
                if depth == 0 && !c.is_whitespace() {
                    return Err(format!("expected an object literal, found '{c}'"));
                }
                out.push(c);
            }
        }
        i += 1;
    }

    Err("object literal is not closed".into())
}

/// Read a quoted string starting at `start`; returns its value and the
/// index just past the closing quote.
fn read_string(chars: &[char], start: usize) -> std::result::Result<(String, usize), String> {
    let quote = chars[start];
    let mut value = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let escaped = chars
                    .get(i + 1)
                    .ok_or_else(|| "unterminated escape sequence".to_string())?;
                value.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => *other,
                });
                i += 2;
            }
            c if c == quote => return Ok((value, i + 1)),
            '\n' => return Err("newline inside string literal".into()),
            c => {
                value.push(c);
                i += 1;
            }
        }
    }

    Err("unterminated string literal".into())
}
