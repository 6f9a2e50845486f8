//! Package identity - the fingerprint that decides whether two builds are
//! the same distributable artifact.
//!
//! The recipe deliberately collapses all build-configuration variance:
//! `foundation` ships the same artifact whatever compiler or build type
//! produced it, so identity computation clears the settings fingerprint
//! before hashing.

use crate::core::settings::Settings;
use crate::util::hash::Fingerprint;

/// Mutable identity info for one package build.
///
/// Starts out carrying the settings the build ran under; `clear()` erases
/// them so that identity no longer depends on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    compiler: Option<String>,
    build_type: Option<String>,
}

impl PackageInfo {
    /// Capture identity inputs from the build settings.
    pub fn from_settings(settings: &Settings) -> Self {
        PackageInfo {
            compiler: settings.compiler.clone(),
            build_type: Some(settings.build_type.as_cmake_str().to_string()),
        }
    }

    /// Erase all settings-derived identity inputs.
    ///
    /// After this, any two builds of the same name and version hash to the
    /// same package identity regardless of configuration.
    pub fn clear(&mut self) {
        self.compiler = None;
        self.build_type = None;
    }

    /// Whether any settings-derived inputs remain.
    pub fn is_cleared(&self) -> bool {
        self.compiler.is_none() && self.build_type.is_none()
    }

    /// Compute the package identity hash for a named, versioned package.
    pub fn package_id(&self, name: &str, version: &str) -> String {
        let mut fp = Fingerprint::new();
        fp.update_str(name)
            .update_str(version)
            .update_opt(self.compiler.as_deref())
            .update_opt(self.build_type.as_deref());
        fp.finish()
    }
}
