//! Lifecycle operations.
//!
//! One function per recipe phase. Phases are invoked at most once per
//! evaluation by the caller (the CLI, here) and run strictly in sequence;
//! any failure aborts the phase and surfaces upward unchanged.

pub mod build;
pub mod export;
pub mod package_id;
pub mod set_version;
pub mod source;

pub use build::{build, package};
pub use export::export;
pub use package_id::package_identity;
pub use set_version::set_version;
pub use source::source;
