//! Fixtures for recipe unit tests.
//!
//! `GitFixture` builds a real throwaway repository on disk for tests that
//! exercise libgit2. `FakeScm` and `FakeBuild` are recording stand-ins for
//! the capability traits, for tests that only care about the recipe logic.

use std::cell::RefCell;
use std::path::Path;

use anyhow::{anyhow, Result};
use git2::{Commit, Repository, Signature};
use tempfile::TempDir;

use crate::builder::BuildDriver;
use crate::scm::ScmClient;

/// A real git repository in a temporary directory.
pub struct GitFixture {
    dir: TempDir,
    repo: Repository,
}

impl GitFixture {
    /// Initialize an empty repository.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        GitFixture { dir, repo }
    }

    /// The working tree path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Fixture", "fixture@example.com").unwrap()
    }

    /// Write a file and commit it. Returns the commit id.
    pub fn commit_file(&self, name: &str, content: &str) -> String {
        std::fs::write(self.dir.path().join(name), content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        let sig = self.signature();
        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &sig,
                &sig,
                &format!("add {}", name),
                &tree,
                &parents,
            )
            .unwrap();

        oid.to_string()
    }

    /// Create a lightweight tag at HEAD.
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    /// Set the `origin` remote URL.
    pub fn set_origin(&self, url: &str) {
        self.repo.remote("origin", url).unwrap();
    }
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A recording fake for the SCM capability.
#[derive(Default)]
pub struct FakeScm {
    /// Tag returned by `describe_tags`; None makes the query fail.
    pub tag: Option<String>,

    /// Pair returned by `url_and_commit`; None makes the query fail.
    pub remote: Option<(String, String)>,

    /// Make `clone` fail, simulating an unreachable remote.
    pub fail_clone: bool,

    /// Every call, in order, as a display string.
    pub calls: RefCell<Vec<String>>,
}

impl FakeScm {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    /// The recorded calls so far.
    pub fn recorded(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ScmClient for FakeScm {
    fn describe_tags(&self, work_dir: &Path) -> Result<String> {
        self.record(format!("describe_tags {}", work_dir.display()));
        self.tag
            .clone()
            .ok_or_else(|| anyhow!("git describe failed: no tag reachable from HEAD"))
    }

    fn url_and_commit(&self, work_dir: &Path) -> Result<(String, String)> {
        self.record(format!("url_and_commit {}", work_dir.display()));
        self.remote
            .clone()
            .ok_or_else(|| anyhow!("repository has no `origin` remote"))
    }

    fn clone(&self, url: &str, target: &Path) -> Result<()> {
        self.record(format!("clone {} -> {}", url, target.display()));
        if self.fail_clone {
            return Err(anyhow!("failed to clone {}", url));
        }
        Ok(())
    }

    fn checkout(&self, work_dir: &Path, commit: &str) -> Result<()> {
        self.record(format!("checkout {} in {}", commit, work_dir.display()));
        Ok(())
    }
}

/// A recording fake for the build capability.
#[derive(Default)]
pub struct FakeBuild {
    pub calls: RefCell<Vec<String>>,
}

impl FakeBuild {
    pub fn recorded(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl BuildDriver for FakeBuild {
    fn configure(&self, source_dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("configure {}", source_dir.display()));
        Ok(())
    }

    fn build(&self, source_dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("build {}", source_dir.display()));
        Ok(())
    }

    fn install(&self, source_dir: &Path, prefix: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("install {} -> {}", source_dir.display(), prefix.display()));
        Ok(())
    }
}
