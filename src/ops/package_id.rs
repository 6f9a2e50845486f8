//! Package identity computation.

use anyhow::{bail, Result};

use crate::core::package_id::PackageInfo;
use crate::core::Recipe;

/// Compute the recipe's package identity.
///
/// The identity info starts from the build settings and is then cleared,
/// so every build of a given version collapses onto one distributable
/// package regardless of compiler or build type. Requires the version to
/// be resolved first.
pub fn package_identity(recipe: &Recipe) -> Result<String> {
    let Some(version) = recipe.version() else {
        bail!("cannot compute package identity before version resolution");
    };

    let mut info = PackageInfo::from_settings(recipe.settings());
    info.clear();

    Ok(info.package_id(recipe.name(), version))
}
