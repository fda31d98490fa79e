use serde::Deserialize;

use super::environment::{Auth0Config, EnvironmentConfig, Field};
use crate::core::errors::{FrontenvError, Result};

/// A partial environment definition.
///
/// Layers are stacked root to leaf; any field a layer leaves unset is
/// inherited from the layers below it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvLayer {
    pub production: Option<bool>,
    pub api_server_url: Option<String>,
    #[serde(default)]
    pub auth0: Auth0Layer,
}

/// The `auth0` part of a layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Layer {
    pub url: Option<String>,
    pub audience: Option<String>,
    pub client_id: Option<String>,
    pub callback_url: Option<String>,
}

impl EnvLayer {
    /// Apply `overlay` on top of this layer. Set fields in `overlay` win.
    pub fn overlay(&mut self, overlay: &EnvLayer) {
        fn take<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                slot.clone_from(value);
            }
        }

        take(&mut self.production, &overlay.production);
        take(&mut self.api_server_url, &overlay.api_server_url);
        take(&mut self.auth0.url, &overlay.auth0.url);
        take(&mut self.auth0.audience, &overlay.auth0.audience);
        take(&mut self.auth0.client_id, &overlay.auth0.client_id);
        take(&mut self.auth0.callback_url, &overlay.auth0.callback_url);
    }

    /// Set a single field from its raw textual form.
    ///
    /// `production` accepts `true`/`false` (case-insensitive) and `1`/`0`.
    pub fn set_raw(&mut self, field: Field, raw: &str) -> std::result::Result<(), String> {
        let text = Some(raw.to_string());
        match field {
            Field::Production => {
                let value = match raw.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" => true,
                    "false" | "0" => false,
                    other => return Err(format!("expected true or false, got '{other}'")),
                };
                self.production = Some(value);
            }
            Field::ApiServerUrl => self.api_server_url = text,
            Field::Auth0Url => self.auth0.url = text,
            Field::Auth0Audience => self.auth0.audience = text,
            Field::Auth0ClientId => self.auth0.client_id = text,
            Field::Auth0CallbackUrl => self.auth0.callback_url = text,
        }
        Ok(())
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Production => self.production.is_some(),
            Field::ApiServerUrl => self.api_server_url.is_some(),
            Field::Auth0Url => self.auth0.url.is_some(),
            Field::Auth0Audience => self.auth0.audience.is_some(),
            Field::Auth0ClientId => self.auth0.client_id.is_some(),
            Field::Auth0CallbackUrl => self.auth0.callback_url.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.is_set(*f))
    }

    /// Turn a merged layer into a complete record.
    ///
    /// # Errors
    ///
    /// `MissingField` for the first unset field, in `Field::ALL` order.
    pub fn finalize(self, env: &str) -> Result<EnvironmentConfig> {
        if let Some(field) = Field::ALL.into_iter().find(|f| !self.is_set(*f)) {
            return Err(FrontenvError::MissingField {
                env: env.to_string(),
                field: field.key().to_string(),
            });
        }

        let auth0 = self.auth0;
        Ok(EnvironmentConfig::new(
            self.production.unwrap_or_default(),
            self.api_server_url.unwrap_or_default(),
            Auth0Config::new(
                auth0.url.unwrap_or_default(),
                auth0.audience.unwrap_or_default(),
                auth0.client_id.unwrap_or_default(),
                auth0.callback_url.unwrap_or_default(),
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_layer() -> EnvLayer {
        EnvLayer {
            production: Some(false),
            api_server_url: Some("http://127.0.0.1:5000".into()),
            auth0: Auth0Layer {
                url: Some("tenant.us".into()),
                audience: Some("http://127.0.0.1:5000".into()),
                client_id: Some("abc".into()),
                callback_url: Some("http://localhost:8100".into()),
            },
        }
    }

    #[test]
    fn overlay_replaces_only_set_fields() {
        let mut base = full_layer();
        let overlay = EnvLayer {
            production: Some(true),
            ..Default::default()
        };

        base.overlay(&overlay);

        assert_eq!(base.production, Some(true));
        assert_eq!(base.api_server_url.as_deref(), Some("http://127.0.0.1:5000"));
        assert_eq!(base.auth0.client_id.as_deref(), Some("abc"));
    }

    #[test]
    fn finalize_complete_layer() {
        let config = full_layer().finalize("dev").unwrap();

        assert!(!config.production());
        assert_eq!(config.auth0().url(), "tenant.us");
        assert_eq!(config.auth0().callback_url(), "http://localhost:8100");
    }

    #[test]
    fn finalize_reports_first_missing_field() {
        let mut layer = full_layer();
        layer.auth0.client_id = None;
        layer.auth0.callback_url = None;

        let err = layer.finalize("prod").unwrap_err();
        match err {
            FrontenvError::MissingField { env, field } => {
                assert_eq!(env, "prod");
                assert_eq!(field, "auth0.clientId");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_raw_parses_production_flag() {
        let mut layer = EnvLayer::default();

        layer.set_raw(Field::Production, "TRUE").unwrap();
        assert_eq!(layer.production, Some(true));

        layer.set_raw(Field::Production, "0").unwrap();
        assert_eq!(layer.production, Some(false));

        assert!(layer.set_raw(Field::Production, "yes please").is_err());
    }

    #[test]
    fn empty_layer() {
        assert!(EnvLayer::default().is_empty());
        assert!(!full_layer().is_empty());
    }

    #[test]
    fn deserializes_from_toml_with_partial_auth0() {
        let layer: EnvLayer = toml::from_str(
            "production = true\n[auth0]\nclient_id = \"xyz\"\n",
        )
        .unwrap();

        assert_eq!(layer.production, Some(true));
        assert_eq!(layer.auth0.client_id.as_deref(), Some("xyz"));
        assert!(layer.auth0.url.is_none());
    }
}
