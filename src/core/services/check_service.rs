use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::core::models::endpoints::AuthEndpoints;
use crate::core::models::environment::{EnvironmentConfig, Field};

static CLIENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex"));

static DOMAIN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?$").expect("static regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

/// A single problem found in a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub field: Field,
    pub severity: Severity,
    pub message: String,
}

/// Result of validating a resolved record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    /// Ordered by field, errors before warnings within a field.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when there are no errors. Warnings do not fail a check.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Validates a resolved `EnvironmentConfig`.
pub struct CheckService;

impl CheckService {
    /// Check every field and collect the issues.
    ///
    /// - URLs (`apiServerUrl`, `auth0.audience`, `auth0.callbackURL`)
    ///   must be absolute `http`/`https` URLs with a host.
    /// - `auth0.url` must be a bare domain prefix (host labels only) from
    ///   which the identity-provider endpoints can be built.
    /// - `auth0.clientId` must match `[A-Za-z0-9_-]+`.
    /// - Production builds get warnings for plain-http or loopback URLs.
    pub fn validate(&self, config: &EnvironmentConfig) -> ValidationReport {
        let mut issues = Vec::new();
        let auth0 = config.auth0();

        for (field, value) in [
            (Field::ApiServerUrl, config.api_server_url()),
            (Field::Auth0Audience, auth0.audience()),
            (Field::Auth0CallbackUrl, auth0.callback_url()),
        ] {
            match parse_http_url(value) {
                Ok(url) if config.production() => {
                    production_warnings(field, &url, &mut issues);
                }
                Ok(_) => {}
                Err(message) => issues.push(error(field, message)),
            }
        }

        if check_domain_prefix(auth0.url(), &mut issues) {
            if let Err(e) = AuthEndpoints::derive(auth0) {
                issues.push(error(Field::Auth0Url, e.to_string()));
            }
        }

        let client_id = auth0.client_id();
        if client_id.is_empty() {
            issues.push(error(Field::Auth0ClientId, "client id is empty".into()));
        } else if !CLIENT_ID.is_match(client_id) {
            issues.push(error(
                Field::Auth0ClientId,
                format!("'{client_id}' contains characters other than letters, digits, '-' and '_'"),
            ));
        }

        issues.sort_by(|a, b| (a.field, a.severity).cmp(&(b.field, b.severity)));
        ValidationReport { issues }
    }
}

fn error(field: Field, message: String) -> Issue {
    Issue {
        field,
        severity: Severity::Error,
        message,
    }
}

fn warning(field: Field, message: String) -> Issue {
    Issue {
        field,
        severity: Severity::Warning,
        message,
    }
}

fn parse_http_url(value: &str) -> std::result::Result<Url, String> {
    if value.trim().is_empty() {
        return Err("URL is empty".into());
    }
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "'{value}' uses scheme '{}', expected http or https",
            url.scheme()
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("'{value}' has no host"));
    }
    Ok(url)
}

fn production_warnings(field: Field, url: &Url, issues: &mut Vec<Issue>) {
    if url.scheme() == "http" {
        issues.push(warning(
            field,
            format!("production build uses plain http: {url}"),
        ));
    }
    if matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]")) {
        issues.push(warning(
            field,
            format!("production build points at a loopback address: {url}"),
        ));
    }
}

/// Returns false when the prefix is rejected.
fn check_domain_prefix(prefix: &str, issues: &mut Vec<Issue>) -> bool {
    let field = Field::Auth0Url;
    if prefix.is_empty() {
        issues.push(error(field, "domain prefix is empty".into()));
        return false;
    }
    if prefix.contains("://") {
        issues.push(error(
            field,
            format!("'{prefix}' includes a scheme; use the bare domain prefix (e.g. 'tenant.us')"),
        ));
        return false;
    }
    if !DOMAIN_PREFIX.is_match(prefix) {
        issues.push(error(
            field,
            format!("'{prefix}' is not a domain prefix; only letters, digits, '.' and '-' are allowed"),
        ));
        return false;
    }
    if prefix.ends_with(".auth0.com") {
        issues.push(warning(
            field,
            format!("'{prefix}' already ends in .auth0.com; only the prefix is needed"),
        ));
    }
    true
}
