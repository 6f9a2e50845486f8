//! Export: capture source provenance into the persisted recipe data.

use anyhow::{Context, Result};

use crate::core::Recipe;
use crate::data::{RecipeData, SourceProvenance};
use crate::scm::ScmClient;

/// Snapshot the recipe's source provenance.
///
/// Records the current remote URL and HEAD commit of the recipe checkout
/// into the persisted store, merging with any keys already present. After
/// this, the store alone is enough to reproduce the exact source tree. A
/// checkout with no repository or no remote fails the export outright.
pub fn export(recipe: &Recipe, scm: &dyn ScmClient, data: &mut RecipeData) -> Result<SourceProvenance> {
    let (url, commit) = scm
        .url_and_commit(recipe.recipe_folder())
        .context("cannot capture source provenance")?;

    let source = SourceProvenance { url, commit };
    tracing::info!("Captured source provenance: {}", source);

    data.set_source(&source);
    data.save()?;

    Ok(source)
}
