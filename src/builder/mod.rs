//! Build-tool delegation.
//!
//! The recipe does not know how to compile anything; it drives an external
//! build tool through the `BuildDriver` trait. The production driver shells
//! out to CMake. Tests substitute a recording fake.

pub mod cmake;

use std::path::Path;

use anyhow::Result;

pub use cmake::CMakeDriver;

/// The build-tool operations the recipe consumes.
pub trait BuildDriver {
    /// Generate the build system for a source tree.
    fn configure(&self, source_dir: &Path) -> Result<()>;

    /// Compile the configured tree.
    fn build(&self, source_dir: &Path) -> Result<()>;

    /// Install built artifacts into a prefix.
    fn install(&self, source_dir: &Path, prefix: &Path) -> Result<()>;
}
