//! Core data structures for the recipe.
//!
//! This module contains the foundational types:
//! - Recipe identity and its once-settable version
//! - Build settings (compiler, build type)
//! - Requirement declarations and their test-only pins
//! - Package identity info and its normalizer

pub mod package_id;
pub mod recipe;
pub mod requirement;
pub mod settings;

pub use package_id::PackageInfo;
pub use recipe::Recipe;
pub use requirement::Requirement;
pub use settings::{BuildType, Settings};
