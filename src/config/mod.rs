pub mod project_config;
