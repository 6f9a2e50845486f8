//! Test utilities: fake SCM/build drivers and git repository fixtures.

pub mod fixtures;

pub use fixtures::{FakeBuild, FakeScm, GitFixture};
