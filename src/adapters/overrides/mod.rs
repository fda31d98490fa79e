pub mod env_overrides;
