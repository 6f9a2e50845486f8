//! fdn-recipe - the build recipe for the `foundation` C++ utility library.
//!
//! This crate provides the recipe logic as a library: version resolution
//! from git tag metadata, source provenance capture and materialization,
//! conditional test requirements, package identity normalization, and
//! delegation to the CMake toolchain.

pub mod builder;
pub mod core;
pub mod data;
pub mod ops;
pub mod scm;
pub mod util;

/// Test utilities and fakes for recipe unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides recording fakes for the SCM and build
/// capabilities plus a real-git fixture builder.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    package_id::PackageInfo, recipe::Recipe, requirement::Requirement, settings::BuildType,
    settings::Settings,
};

pub use builder::{BuildDriver, CMakeDriver};
pub use data::{RecipeData, SourceProvenance};
pub use scm::{GitClient, ScmClient};
pub use util::config::RecipeConfig;
