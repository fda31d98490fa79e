pub mod diff_result;
pub mod dotenv_file;
pub mod endpoints;
pub mod env_layer;
pub mod environment;
