//! Command implementations

pub mod build;
pub mod completions;
pub mod export;
pub mod package;
pub mod package_id;
pub mod requirements;
pub mod source;
pub mod version;
