use std::time::Duration;

use crate::core::errors::{FrontenvError, Result};
use crate::core::models::endpoints::AuthEndpoints;
use crate::core::models::environment::EnvironmentConfig;

/// Default per-request timeout for `frontenv probe`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A URL the probe sends a GET to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    pub label: &'static str,
    pub url: String,
}

/// What happened when a target was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeStatus {
    /// The server answered; any HTTP status counts.
    Reachable { status: u16 },
    Unreachable { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub target: ProbeTarget,
    pub status: ProbeStatus,
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self.status, ProbeStatus::Reachable { .. })
    }
}

/// Targets for a resolved record: the API server and the JWKS document.
pub fn targets(config: &EnvironmentConfig) -> Result<Vec<ProbeTarget>> {
    let endpoints = AuthEndpoints::derive(config.auth0())?;
    Ok(vec![
        ProbeTarget {
            label: "API server",
            url: config.api_server_url().to_string(),
        },
        ProbeTarget {
            label: "JWKS",
            url: endpoints.jwks_url.to_string(),
        },
    ])
}

/// Build a reqwest client with the given timeout.
fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("frontenv/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FrontenvError::ProbeFailed {
            reason: format!("Failed to create HTTP client: {e}"),
        })
}

/// Request each target in turn and record the outcome.
///
/// Network failures are reported per target, never as an `Err`.
pub fn run(targets: Vec<ProbeTarget>, timeout: Duration) -> Result<Vec<ProbeOutcome>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FrontenvError::ProbeFailed {
            reason: format!("Failed to create async runtime: {e}"),
        })?;

    rt.block_on(async {
        let client = build_client(timeout)?;
        let mut outcomes = Vec::with_capacity(targets.len());

        for target in targets {
            tracing::debug!(url = %target.url, "probing");
            let status = match client.get(&target.url).send().await {
                Ok(resp) => ProbeStatus::Reachable {
                    status: resp.status().as_u16(),
                },
                Err(e) => ProbeStatus::Unreachable {
                    reason: e.to_string(),
                },
            };
            outcomes.push(ProbeOutcome { target, status });
        }

        Ok(outcomes)
    })
}
