//! Build settings supplied by the invoking environment.
//!
//! Settings are opaque to the recipe: they are forwarded to the build
//! driver and folded into the identity fingerprint, nothing more.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The configuration a build runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    /// The string CMake expects for `CMAKE_BUILD_TYPE` and `--config`.
    pub fn as_cmake_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cmake_str())
    }
}

/// External build inputs, read-only to the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Compiler override (e.g. `g++`, `clang++`). None uses the toolchain default.
    pub compiler: Option<String>,

    /// Debug or Release.
    pub build_type: BuildType,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            compiler: None,
            build_type: BuildType::Release,
        }
    }
}

impl Settings {
    /// Create settings with an explicit build type.
    pub fn new(compiler: Option<String>, build_type: BuildType) -> Self {
        Settings {
            compiler,
            build_type,
        }
    }
}
