//! Source-fetch: materialize a source tree from captured provenance.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::data::{RecipeData, SourceProvenance};
use crate::scm::ScmClient;
use crate::util::fs::dir_is_nonempty;

/// Reproduce the exact source tree recorded at export time.
///
/// Reads the `source` record from the persisted store, clones the recorded
/// URL into `target`, then checks out the recorded commit. Independent of
/// whatever the remote's default branch has moved to since.
///
/// A store without a `source` record fails before anything touches the
/// filesystem. A failed clone or checkout may leave a partial tree behind
/// in `target`; it is named in the error and left for the caller to remove.
pub fn source(
    data: &RecipeData,
    scm: &dyn ScmClient,
    target: &Path,
) -> Result<SourceProvenance> {
    let source = data.source()?;

    if dir_is_nonempty(target) {
        bail!("target directory is not empty: {}", target.display());
    }

    tracing::info!("Materializing {} into {}", source, target.display());

    scm.clone(&source.url, target)
        .with_context(|| format!("source materialization left {} unusable", target.display()))?;
    scm.checkout(target, &source.commit)
        .with_context(|| format!("source materialization left {} unusable", target.display()))?;

    Ok(source)
}
