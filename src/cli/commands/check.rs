use colored::Colorize;

use crate::cli::{context, output};
use crate::core::errors::{FrontenvError, Result};
use crate::core::services::check_service::{CheckService, Severity, ValidationReport};

/// Execute the `frontenv check` command.
///
/// Validates the selected environment (or every leaf environment with
/// `--all`). Warnings are printed but only errors fail the command. With
/// `--all`, an environment that does not resolve counts as one error and
/// the remaining environments are still checked.
pub fn execute(env: Option<&str>, all: bool) -> Result<()> {
    let project = context::load_project()?;

    let names: Vec<String> = if all {
        project.leaf_envs().into_iter().map(String::from).collect()
    } else {
        vec![env.unwrap_or_else(|| project.default_env()).to_string()]
    };

    output::header("🔍 frontenv check");

    let mut failed = Vec::new();
    let mut total_errors = 0;

    for name in &names {
        let resolved = match context::resolve(&project, Some(name.as_str())) {
            Ok(r) => r,
            Err(e) if all => {
                let reason = e.to_string();
                let first_line = reason.lines().next().unwrap_or_default();
                output::error(&format!("{name}: does not resolve ({first_line})"));
                total_errors += 1;
                failed.push(name.clone());
                continue;
            }
            Err(e) => return Err(e),
        };
        let report = CheckService.validate(&resolved.config);
        print_report(name, &report);

        if !report.is_ok() {
            total_errors += report.error_count();
            failed.push(name.clone());
        }
    }

    if failed.is_empty() {
        return Ok(());
    }

    Err(FrontenvError::ValidationFailed {
        env: failed.join(", "),
        errors: total_errors,
    })
}

fn print_report(name: &str, report: &ValidationReport) {
    if report.issues.is_empty() {
        output::success(&format!("{name}: all fields valid"));
        return;
    }

    for issue in &report.issues {
        let field = issue.field.key().bold();
        match issue.severity {
            Severity::Error => output::error(&format!("{name}: {field}: {}", issue.message)),
            Severity::Warning => output::warning(&format!("{name}: {field}: {}", issue.message)),
        }
    }

    let summary = format!(
        "{name}: {} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
    if report.is_ok() {
        output::success(&summary);
    } else {
        output::warning(&summary);
    }
}
