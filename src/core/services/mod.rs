pub mod check_service;
pub mod diff_service;
pub mod env_resolver;
pub mod fingerprint;
pub mod render_service;
