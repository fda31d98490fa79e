pub mod formats;
pub mod overrides;
pub mod parsers;
pub mod probe;
