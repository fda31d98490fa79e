use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

use crate::adapters::formats;
use crate::core::errors::Result;
use crate::core::models::environment::ResolvedEnvironment;
use crate::core::services::fingerprint::fingerprint;
use crate::core::traits::format::ConfigFormat;

/// How a rendered file compares with the current resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
    Unreadable(String),
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::UpToDate => f.write_str("up to date"),
            Freshness::Stale => f.write_str("stale"),
            Freshness::Missing => f.write_str("missing"),
            Freshness::Unreadable(reason) => write!(f, "unreadable ({reason})"),
        }
    }
}

/// Renders resolved environments into the files front-end builds import.
pub struct RenderService;

impl RenderService {
    /// Render `env` with a generated header when the format has comments.
    pub fn render(
        &self,
        env: &ResolvedEnvironment,
        format: &dyn ConfigFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<String> {
        let body = format.serialize(&env.config)?;
        let header = format!(
            "Generated by frontenv from environment '{name}' (layers: {layers}).\n\
             Do not edit by hand; run 'frontenv export --env {name}' instead.\n\
             generated: {at}\n\
             fingerprint: {fp}",
            name = env.name,
            layers = env.layers.join(" -> "),
            at = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            fp = fingerprint(&env.config),
        );

        Ok(match format.comment(&header) {
            Some(comment) => format!("{comment}\n{body}"),
            None => body,
        })
    }

    /// Compare the file at `path` against `env`.
    ///
    /// The file is parsed with the format matching its extension, so
    /// formatting differences and header timestamps do not count as drift.
    pub fn freshness(&self, path: &Path, env: &ResolvedEnvironment) -> Freshness {
        if !path.exists() {
            return Freshness::Missing;
        }
        let Some(format) = formats::for_path(path) else {
            return Freshness::Unreadable("unknown file extension".into());
        };
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => return Freshness::Unreadable(e.to_string()),
        };
        match format.parse(&content) {
            Ok(on_disk) if fingerprint(&on_disk) == fingerprint(&env.config) => Freshness::UpToDate,
            Ok(_) => Freshness::Stale,
            Err(e) => Freshness::Unreadable(e.to_string()),
        }
    }
}
