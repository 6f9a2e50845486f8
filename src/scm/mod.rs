//! Source control capability.
//!
//! The recipe never talks to git directly: every phase that needs version
//! control goes through the `ScmClient` trait so that tests can substitute
//! a fake without a real repository or network.

pub mod git;

use std::path::Path;

use anyhow::Result;

pub use git::GitClient;

/// The version-control operations the recipe consumes.
pub trait ScmClient {
    /// Run the "describe tags" query against a checkout and return the
    /// nearest-tag description string (e.g. `v2.3.1`).
    fn describe_tags(&self, work_dir: &Path) -> Result<String>;

    /// Return the remote URL and current HEAD commit of a checkout.
    fn url_and_commit(&self, work_dir: &Path) -> Result<(String, String)>;

    /// Clone a repository into the target directory.
    fn clone(&self, url: &str, target: &Path) -> Result<()>;

    /// Check out a specific commit (detached) in an existing checkout.
    fn checkout(&self, work_dir: &Path, commit: &str) -> Result<()>;
}
