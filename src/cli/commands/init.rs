use crate::cli::{context, output};
use crate::core::errors::{FrontenvError, Result};

const STARTER: &str = r#"[frontenv]
format_version = 1
default_env = "dev"

# Shared values; dev and prod inherit from here.
[environments.base]
api_server_url = "http://127.0.0.1:5000"

[environments.base.auth0]
url = "your-tenant.us"
audience = "http://127.0.0.1:5000"
client_id = "YOUR_CLIENT_ID"
callback_url = "http://localhost:8100"

[environments.dev]
inherits = "base"
production = false
output = "src/environments/environment.ts"

[environments.prod]
inherits = "base"
production = true
output = "src/environments/environment.prod.ts"
"#;

/// Execute the `frontenv init` command.
///
/// Writes a starter project file with `base`, `dev` and `prod`
/// environments. Never overwrites an existing file.
pub fn execute() -> Result<()> {
    let path = context::project_file();

    if path.exists() {
        return Err(FrontenvError::InvalidConfig {
            detail: format!("{} already exists; edit it instead", path.display()),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, STARTER)?;
    tracing::info!(path = %path.display(), "wrote starter project file");

    output::header("frontenv: initializing project");
    output::success(&format!("Created {}", path.display()));
    output::line("Next steps:");
    output::line("  1. Set your Auth0 tenant, audience and client id under [environments.base.auth0]");
    output::line("  2. Set api_server_url for prod");
    output::line("  3. Run 'frontenv check --all', then 'frontenv export --env dev'");

    Ok(())
}
