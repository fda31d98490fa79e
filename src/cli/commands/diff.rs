use colored::Colorize;

use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::models::diff_result::DiffResult;
use crate::core::services::diff_service::DiffService;

/// Execute the `frontenv diff <left> <right>` command.
///
/// Resolves both environments (overrides included) and lists the
/// fields whose values differ.
pub fn execute(left: &str, right: &str) -> Result<()> {
    let project = context::load_project()?;
    let left_env = context::resolve(&project, Some(left))?;
    let right_env = context::resolve(&project, Some(right))?;

    let result = DiffService.diff(&left_env.config, &right_env.config, left, right);

    output::header("🔍 frontenv diff");

    if result.is_empty() {
        output::success("No differences found");
        return Ok(());
    }

    print_diff_table(&result);
    println!();
    output::line(&format!("{} field(s) differ", result.changes.len()));

    Ok(())
}

/// Print the changed fields as a formatted table.
fn print_diff_table(result: &DiffResult) {
    let key_width = result
        .changes
        .iter()
        .map(|c| c.field.key().len())
        .max()
        .unwrap_or(8)
        .max(8);
    let left_width = result
        .changes
        .iter()
        .map(|c| c.left.len())
        .chain(std::iter::once(result.left_name.len()))
        .max()
        .unwrap_or(12);

    let header = format!(
        "  {:<kw$}   {:<lw$}   {}",
        "Field",
        &result.left_name,
        &result.right_name,
        kw = key_width,
        lw = left_width
    );
    println!("{}", header.bold());
    println!("  {}", "─".repeat(header.len().saturating_sub(2)));

    for change in &result.changes {
        println!(
            "  {:<kw$}   {:<lw$}   {}",
            change.field.key().yellow(),
            change.left,
            change.right.yellow(),
            kw = key_width,
            lw = left_width
        );
    }
}
