use std::path::PathBuf;

use crate::adapters::formats;
use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::services::render_service::RenderService;
use crate::core::traits::format::ConfigFormat;

/// Execute the `frontenv export` command.
///
/// Destination: `--out`, then the environment's `output`, then stdout.
/// Format: `--format`, then the destination's extension, then `ts`.
pub fn execute(
    env: Option<&str>,
    format: Option<&str>,
    out: Option<&str>,
    to_stdout: bool,
) -> Result<()> {
    let project = context::load_project()?;
    let resolved = context::resolve(&project, env)?;

    let destination: Option<PathBuf> = if to_stdout {
        None
    } else {
        out.map(PathBuf::from)
            .or_else(|| project.output_path(&resolved.name))
    };

    let format: Box<dyn ConfigFormat> = match (format, &destination) {
        (Some(name), _) => formats::by_name(name)?,
        (None, Some(path)) => match formats::for_path(path) {
            Some(f) => f,
            None => formats::by_name("ts")?,
        },
        (None, None) => formats::by_name("ts")?,
    };

    let rendered = RenderService.render(&resolved, format.as_ref(), chrono::Utc::now())?;

    let Some(path) = destination else {
        print!("{rendered}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, rendered)?;
    tracing::info!(env = %resolved.name, path = %path.display(), format = format.name(), "rendered environment");

    output::success(&format!(
        "Wrote {} ({}, env '{}')",
        path.display(),
        format.name(),
        resolved.name
    ));

    Ok(())
}
