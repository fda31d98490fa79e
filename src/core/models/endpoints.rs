use url::Url;

use super::environment::Auth0Config;
use crate::core::errors::{FrontenvError, Result};

const AUTH0_SUFFIX: &str = ".auth0.com";

/// Identity-provider URLs derived from the `auth0` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthEndpoints {
    pub domain: String,
    pub issuer: Url,
    pub jwks_url: Url,
    pub authorize_url: Url,
    pub logout_url: Url,
}

impl AuthEndpoints {
    /// Build the endpoint set.
    ///
    /// The domain is `{url}.auth0.com` unless `url` already carries the
    /// suffix. Query parameters are percent-encoded.
    pub fn derive(auth0: &Auth0Config) -> Result<Self> {
        let prefix = auth0.url().trim();
        let domain = if prefix.ends_with(AUTH0_SUFFIX) {
            prefix.to_string()
        } else {
            format!("{prefix}{AUTH0_SUFFIX}")
        };

        let base = parse(&format!("https://{domain}/"))?;
        let jwks_url = join(&base, ".well-known/jwks.json")?;

        let mut authorize_url = join(&base, "authorize")?;
        authorize_url
            .query_pairs_mut()
            .append_pair("audience", auth0.audience())
            .append_pair("response_type", "token")
            .append_pair("client_id", auth0.client_id())
            .append_pair("redirect_uri", auth0.callback_url());

        let mut logout_url = join(&base, "v2/logout")?;
        logout_url
            .query_pairs_mut()
            .append_pair("client_id", auth0.client_id())
            .append_pair("returnTo", auth0.callback_url());

        Ok(Self {
            domain,
            issuer: base,
            jwks_url,
            authorize_url,
            logout_url,
        })
    }
}

fn parse(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| FrontenvError::InvalidConfig {
        detail: format!("cannot build identity-provider URL '{raw}': {e}"),
    })
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|e| FrontenvError::InvalidConfig {
        detail: format!("cannot build identity-provider URL from '{base}' + '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth0(url: &str) -> Auth0Config {
        Auth0Config::new(url, "http://127.0.0.1:5000", "client123", "http://localhost:8100")
    }

    #[test]
    fn appends_auth0_suffix() {
        let endpoints = AuthEndpoints::derive(&auth0("ezufsnd.us")).unwrap();

        assert_eq!(endpoints.domain, "ezufsnd.us.auth0.com");
        assert_eq!(endpoints.issuer.as_str(), "https://ezufsnd.us.auth0.com/");
        assert_eq!(
            endpoints.jwks_url.as_str(),
            "https://ezufsnd.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn keeps_existing_suffix() {
        let endpoints = AuthEndpoints::derive(&auth0("tenant.eu.auth0.com")).unwrap();

        assert_eq!(endpoints.domain, "tenant.eu.auth0.com");
    }

    #[test]
    fn authorize_url_carries_encoded_parameters() {
        let endpoints = AuthEndpoints::derive(&auth0("tenant")).unwrap();
        let pairs: Vec<(String, String)> = endpoints
            .authorize_url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(endpoints.authorize_url.path(), "/authorize");
        assert_eq!(
            pairs,
            vec![
                ("audience".to_string(), "http://127.0.0.1:5000".to_string()),
                ("response_type".to_string(), "token".to_string()),
                ("client_id".to_string(), "client123".to_string()),
                ("redirect_uri".to_string(), "http://localhost:8100".to_string()),
            ]
        );
        assert!(endpoints
            .authorize_url
            .as_str()
            .contains("redirect_uri=http%3A%2F%2Flocalhost%3A8100"));
    }

    #[test]
    fn logout_url_returns_to_callback() {
        let endpoints = AuthEndpoints::derive(&auth0("tenant")).unwrap();

        assert_eq!(endpoints.logout_url.path(), "/v2/logout");
        assert!(endpoints
            .logout_url
            .query_pairs()
            .any(|(k, v)| k == "returnTo" && v == "http://localhost:8100"));
    }

    #[test]
    fn invalid_domain_is_an_error() {
        assert!(AuthEndpoints::derive(&auth0("bad domain/")).is_err());
    }
}
