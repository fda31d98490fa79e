use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::adapters::overrides::env_overrides;
use crate::config::project_config::{DEFAULT_PROJECT_FILE, ProjectConfig};
use crate::core::errors::Result;
use crate::core::models::env_layer::EnvLayer;
use crate::core::models::environment::ResolvedEnvironment;
use crate::core::services::env_resolver::EnvResolver;

static PROJECT_FILE: OnceLock<PathBuf> = OnceLock::new();
static OVERRIDES_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();
static QUIET: OnceLock<bool> = OnceLock::new();

/// Initialize global CLI state from parsed arguments.
pub fn init(project_file: &str, overrides: Option<&str>, quiet: bool) {
    let _ = PROJECT_FILE.set(PathBuf::from(project_file));
    let _ = OVERRIDES_FILE.set(overrides.map(PathBuf::from));
    let _ = QUIET.set(quiet);
}

/// Path of the project file.
pub fn project_file() -> &'static Path {
    PROJECT_FILE
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(DEFAULT_PROJECT_FILE))
}

pub fn quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}

/// Load the project file.
pub fn load_project() -> Result<ProjectConfig> {
    ProjectConfig::load(project_file())
}

/// Build the override layer from `--overrides` and `FRONTENV_*` variables.
pub fn load_overrides() -> Result<Option<EnvLayer>> {
    let file = OVERRIDES_FILE.get().and_then(|o| o.as_deref());
    env_overrides::load(file)
}

/// Resolve `--env` (or the project default) with overrides applied.
pub fn resolve(project: &ProjectConfig, env: Option<&str>) -> Result<ResolvedEnvironment> {
    let name = env.unwrap_or_else(|| project.default_env());
    let overrides = load_overrides()?;
    EnvResolver.resolve(name, project, overrides.as_ref())
}
