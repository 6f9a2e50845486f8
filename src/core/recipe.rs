//! Recipe identity.
//!
//! One `Recipe` value exists per evaluation. The name, author, homepage and
//! description are constants of the package; the version is resolved from
//! git tag metadata and may be written exactly once.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::settings::Settings;

/// Name of the packaged library.
pub const RECIPE_NAME: &str = "foundation";

/// Package author.
pub const RECIPE_AUTHOR: &str = "M. Emery Goss <m.goss792@gmail.com>";

/// Homepage of the packaged library.
pub const RECIPE_URL: &str = "https://github.com/mry792/foundation.git";

/// Package description.
pub const RECIPE_DESCRIPTION: &str =
    "Collection of standard utilities. All support compiling for embedded systems.";

/// The package recipe under evaluation.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Directory holding the recipe and its source checkout.
    recipe_folder: PathBuf,

    /// Resolved package version. Absent until version resolution runs.
    version: Option<String>,

    /// Build settings supplied by the invoking environment.
    settings: Settings,
}

impl Recipe {
    /// Create a recipe rooted at the given folder.
    pub fn new(recipe_folder: impl Into<PathBuf>, settings: Settings) -> Self {
        Recipe {
            recipe_folder: recipe_folder.into(),
            version: None,
            settings,
        }
    }

    /// The package name.
    pub fn name(&self) -> &'static str {
        RECIPE_NAME
    }

    /// The package author.
    pub fn author(&self) -> &'static str {
        RECIPE_AUTHOR
    }

    /// The package homepage.
    pub fn url(&self) -> &'static str {
        RECIPE_URL
    }

    /// The package description.
    pub fn description(&self) -> &'static str {
        RECIPE_DESCRIPTION
    }

    /// The recipe folder.
    pub fn recipe_folder(&self) -> &Path {
        &self.recipe_folder
    }

    /// The build settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The resolved version, if version resolution has run.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Record the resolved version. The version may be set exactly once.
    pub fn set_version(&mut self, version: impl Into<String>) -> Result<()> {
        if let Some(ref existing) = self.version {
            bail!(
                "version already resolved to `{}`; it may only be set once per evaluation",
                existing
            );
        }
        self.version = Some(version.into());
        Ok(())
    }

    /// Display reference like `foundation/2.3.1`, or just the name when
    /// the version is not resolved yet.
    pub fn package_ref(&self) -> String {
        match self.version {
            Some(ref v) => format!("{}/{}", RECIPE_NAME, v),
            None => RECIPE_NAME.to_string(),
        }
    }
}
