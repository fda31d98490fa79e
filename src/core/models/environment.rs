use serde::{Deserialize, Serialize};

/// The six settings a front-end build consumes.
///
/// Keys are the ones the consuming app imports (`apiServerUrl`,
/// `auth0.clientId`, ...), so every rendered format keeps them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Production,
    ApiServerUrl,
    Auth0Url,
    Auth0Audience,
    Auth0ClientId,
    Auth0CallbackUrl,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 6] = [
        Field::Production,
        Field::ApiServerUrl,
        Field::Auth0Url,
        Field::Auth0Audience,
        Field::Auth0ClientId,
        Field::Auth0CallbackUrl,
    ];

    /// Dotted key as it appears in the rendered record.
    pub fn key(self) -> &'static str {
        match self {
            Field::Production => "production",
            Field::ApiServerUrl => "apiServerUrl",
            Field::Auth0Url => "auth0.url",
            Field::Auth0Audience => "auth0.audience",
            Field::Auth0ClientId => "auth0.clientId",
            Field::Auth0CallbackUrl => "auth0.callbackURL",
        }
    }

    /// Name used in override files and (prefixed) in process variables.
    pub fn env_key(self) -> &'static str {
        match self {
            Field::Production => "PRODUCTION",
            Field::ApiServerUrl => "API_SERVER_URL",
            Field::Auth0Url => "AUTH0_URL",
            Field::Auth0Audience => "AUTH0_AUDIENCE",
            Field::Auth0ClientId => "AUTH0_CLIENT_ID",
            Field::Auth0CallbackUrl => "AUTH0_CALLBACK_URL",
        }
    }

    pub fn from_env_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.env_key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Fully specified environment configuration.
///
/// Once built the record is read-only: fields are private and only
/// exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth0: Auth0Config,
}

impl EnvironmentConfig {
    pub fn new(production: bool, api_server_url: impl Into<String>, auth0: Auth0Config) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// String form of a field's value, for diffs and tables.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::Production => self.production.to_string(),
            Field::ApiServerUrl => self.api_server_url.clone(),
            Field::Auth0Url => self.auth0.url.clone(),
            Field::Auth0Audience => self.auth0.audience.clone(),
            Field::Auth0ClientId => self.auth0.client_id.clone(),
            Field::Auth0CallbackUrl => self.auth0.callback_url.clone(),
        }
    }
}

/// The nested identity-provider scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    url: String,
    audience: String,
    #[serde(rename = "clientId")]
    client_id: String,
    #[serde(rename = "callbackURL")]
    callback_url: String,
}

impl Auth0Config {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Identity-provider domain prefix (e.g. `tenant.us`).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

/// An environment after inheritance and overrides have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    pub name: String,
    /// Layer names from root to leaf; `overrides` is appended when used.
    pub layers: Vec<String>,
    pub config: EnvironmentConfig,
}

#[cfg(test)]
pub(crate) fn sample_config() -> EnvironmentConfig {
    EnvironmentConfig::new(
        false,
        "http://127.0.0.1:5000",
        Auth0Config::new(
            "ezufsnd.us",
            "http://127.0.0.1:5000",
            "RuBUGVhuWSJL7dBoWekcOeOf462x3NL7",
            "http://localhost:8100",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_consumer_key_names() {
        let json = serde_json::to_value(sample_config()).unwrap();

        assert_eq!(json["production"], false);
        assert_eq!(json["apiServerUrl"], "http://127.0.0.1:5000");
        assert_eq!(json["auth0"]["url"], "ezufsnd.us");
        assert_eq!(json["auth0"]["clientId"], "RuBUGVhuWSJL7dBoWekcOeOf462x3NL7");
        assert_eq!(json["auth0"]["callbackURL"], "http://localhost:8100");
    }

    #[test]
    fn exposes_exactly_six_fields() {
        let json = serde_json::to_value(sample_config()).unwrap();
        let top = json.as_object().unwrap();
        let auth0 = json["auth0"].as_object().unwrap();

        assert_eq!(top.len(), 3);
        assert_eq!(auth0.len(), 4);
        assert!(json["production"].is_boolean());
        assert!(auth0.values().all(|v| v.is_string()));
    }

    #[test]
    fn rejects_unknown_keys() {
        let doc = r#"{
            "production": false,
            "apiServerUrl": "http://a",
            "extra": 1,
            "auth0": {"url": "x", "audience": "y", "clientId": "z", "callbackURL": "w"}
        }"#;

        assert!(serde_json::from_str::<EnvironmentConfig>(doc).is_err());
    }

    #[test]
    fn value_of_covers_every_field() {
        let config = sample_config();
        let values: Vec<String> = Field::ALL.iter().map(|f| config.value_of(*f)).collect();

        assert_eq!(
            values,
            vec![
                "false",
                "http://127.0.0.1:5000",
                "ezufsnd.us",
                "http://127.0.0.1:5000",
                "RuBUGVhuWSJL7dBoWekcOeOf462x3NL7",
                "http://localhost:8100",
            ]
        );
    }

    #[test]
    fn env_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_env_key(field.env_key()), Some(field));
        }
        assert_eq!(Field::from_env_key("NOPE"), None);
    }
}
