pub mod check;
pub mod diff;
pub mod endpoints;
pub mod export;
pub mod init;
pub mod probe;
pub mod show;
pub mod status;
