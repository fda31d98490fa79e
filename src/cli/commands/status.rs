use colored::Colorize;

use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::services::env_resolver::EnvResolver;
use crate::core::services::fingerprint::{fingerprint, short};
use crate::core::services::render_service::{Freshness, RenderService};

/// Execute the `frontenv status` command.
///
/// Lists every environment with its inheritance chain, whether it
/// resolves, and whether its rendered file matches the current values.
pub fn execute() -> Result<()> {
    let project = context::load_project()?;
    let overrides = context::load_overrides()?;

    output::header(&format!("frontenv v{}", env!("CARGO_PKG_VERSION")));
    output::line(&format!("Project file: {}", context::project_file().display()));
    output::line(&format!("Default env:  {}", project.default_env().cyan()));
    if overrides.is_some() {
        output::line("Overrides:    active");
    }

    output::header("Environments");

    if project.environments.is_empty() {
        output::warning("No environments defined");
        return Ok(());
    }

    for name in project.environments.keys() {
        let resolved = match EnvResolver.resolve(name, &project, overrides.as_ref()) {
            Ok(r) => r,
            Err(e) => {
                let reason = e.to_string();
                let first_line = reason.lines().next().unwrap_or_default();
                output::warning(&format!("{name}: does not resolve ({first_line})"));
                continue;
            }
        };

        output::success(&format!(
            "{name}: {}  [{}]",
            short(&fingerprint(&resolved.config)),
            resolved.layers.join(" -> ")
        ));

        let Some(path) = project.output_path(name) else {
            continue;
        };
        let freshness = RenderService.freshness(&path, &resolved);
        let message = format!("    {} is {freshness}", path.display());
        match freshness {
            Freshness::UpToDate => output::line(&message),
            _ => output::warning(&message),
        }
    }

    Ok(())
}
