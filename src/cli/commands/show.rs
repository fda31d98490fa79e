use colored::Colorize;

use crate::cli::context;
use crate::core::errors::Result;
use crate::core::models::environment::Field;
use crate::core::services::fingerprint::fingerprint;

/// Execute the `frontenv show` command.
///
/// Prints the resolved record as a field table, followed by the layers
/// it was built from.
pub fn execute(env: Option<&str>) -> Result<()> {
    let project = context::load_project()?;
    let resolved = context::resolve(&project, env)?;

    println!("\n{}", format!("Environment '{}'", resolved.name).bold());

    let width = Field::ALL.iter().map(|f| f.key().len()).max().unwrap_or(0);
    for field in Field::ALL {
        println!(
            "  {:<width$}  {}",
            field.key(),
            resolved.config.value_of(field).cyan()
        );
    }

    println!();
    println!("  Layers:      {}", resolved.layers.join(" -> "));
    println!("  Fingerprint: {}", fingerprint(&resolved.config));

    Ok(())
}
