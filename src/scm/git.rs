//! Git implementation of the SCM capability, built on libgit2.

use std::path::Path;

use anyhow::{bail, Context, Result};
use git2::build::CheckoutBuilder;
use git2::{DescribeOptions, Oid, Repository};

use crate::scm::ScmClient;

/// SCM client backed by libgit2.
#[derive(Debug, Default)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        GitClient
    }
}

impl ScmClient for GitClient {
    fn describe_tags(&self, work_dir: &Path) -> Result<String> {
        let repo = Repository::open(work_dir)
            .with_context(|| format!("not a git repository: {}", work_dir.display()))?;

        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        let describe = repo
            .describe(&opts)
            .context("git describe failed: no tag reachable from HEAD")?;

        Ok(describe.format(None)?)
    }

    fn url_and_commit(&self, work_dir: &Path) -> Result<(String, String)> {
        let repo = Repository::open(work_dir)
            .with_context(|| format!("not a git repository: {}", work_dir.display()))?;

        let remote = repo
            .find_remote("origin")
            .context("repository has no `origin` remote")?;

        let url = match remote.url() {
            Some(url) => url.to_string(),
            None => bail!("remote `origin` has no URL"),
        };

        let commit = repo
            .head()
            .context("repository has no HEAD")?
            .peel_to_commit()
            .context("HEAD does not point at a commit")?
            .id()
            .to_string();

        Ok((url, commit))
    }

    fn clone(&self, url: &str, target: &Path) -> Result<()> {
        tracing::info!("Cloning {}", url);

        Repository::clone(url, target).with_context(|| format!("failed to clone {}", url))?;

        Ok(())
    }

    fn checkout(&self, work_dir: &Path, commit: &str) -> Result<()> {
        tracing::info!("Checking out {}", commit);

        let repo = Repository::open(work_dir)
            .with_context(|| format!("not a git repository: {}", work_dir.display()))?;

        let oid = Oid::from_str(commit)
            .with_context(|| format!("invalid commit identifier: {}", commit))?;
        let target = repo
            .find_commit(oid)
            .with_context(|| format!("commit {} not found in clone", commit))?;

        let mut opts = CheckoutBuilder::new();
        opts.force();
        repo.checkout_tree(target.as_object(), Some(&mut opts))
            .with_context(|| format!("failed to check out {}", commit))?;
        repo.set_head_detached(oid)?;

        Ok(())
    }
}
