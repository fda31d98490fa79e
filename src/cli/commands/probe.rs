use std::time::Duration;

use crate::adapters::probe::http_probe::{self, ProbeStatus};
use crate::cli::{context, output};
use crate::core::errors::{FrontenvError, Result};

/// Execute the `frontenv probe` command.
///
/// Sends a GET to the API server and the JWKS document. Any HTTP
/// response counts as reachable. The callback URL is listed but not
/// requested, since it is the front-end itself.
pub fn execute(env: Option<&str>, timeout_secs: u64) -> Result<()> {
    let project = context::load_project()?;
    let resolved = context::resolve(&project, env)?;

    let targets = http_probe::targets(&resolved.config)?;
    let timeout = Duration::from_secs(timeout_secs);
    let outcomes = http_probe::run(targets, timeout)?;

    output::header(&format!("🔌 frontenv probe ({})", resolved.name));

    let mut unreachable = 0;
    for outcome in &outcomes {
        match &outcome.status {
            ProbeStatus::Reachable { status } => output::success(&format!(
                "{}: {} answered {status}",
                outcome.target.label, outcome.target.url
            )),
            ProbeStatus::Unreachable { reason } => {
                unreachable += 1;
                output::error(&format!(
                    "{}: {} unreachable: {reason}",
                    outcome.target.label, outcome.target.url
                ));
            }
        }
    }
    output::line(&format!(
        "Callback (not probed): {}",
        resolved.config.auth0().callback_url()
    ));

    if unreachable > 0 {
        return Err(FrontenvError::ProbeFailed {
            reason: format!("{unreachable} of {} target(s) unreachable", outcomes.len()),
        });
    }
    Ok(())
}
