//! Persisted recipe data.
//!
//! A small TOML document that travels with the exported recipe. Export
//! writes the source provenance record into it; source-fetch reads that
//! record back. Other keys in the document are preserved untouched, which
//! is why updates go through a merge over a rebuilt document rather than
//! rewriting the file wholesale.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml_edit::{table, value, DocumentMut};

/// File name of the persisted store, next to the recipe.
pub const DATA_FILE_NAME: &str = "recipe-data.toml";

/// Typed failures when reading the persisted store.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("recipe data has no `{key}` entry (was the recipe exported?)")]
    MissingKey { key: &'static str },

    #[error("recipe data entry `{key}` is not a string")]
    WrongType { key: &'static str },
}

/// Where a source tree comes from: one remote URL and one exact commit.
///
/// Written once per export; sufficient on its own to reproduce the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProvenance {
    pub url: String,
    pub commit: String,
}

impl fmt::Display for SourceProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.url, self.commit)
    }
}

/// The persisted recipe data store.
#[derive(Debug, Clone)]
pub struct RecipeData {
    path: PathBuf,
    doc: DocumentMut,
}

impl RecipeData {
    /// Open the store at an explicit path. A missing file yields an empty
    /// document; a malformed file is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let doc = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            text.parse::<DocumentMut>()
                .with_context(|| format!("malformed recipe data: {}", path.display()))?
        } else {
            DocumentMut::new()
        };

        Ok(RecipeData { path, doc })
    }

    /// Open the store that lives next to a recipe folder.
    pub fn for_recipe(recipe_folder: &Path) -> Result<Self> {
        Self::load(recipe_folder.join(DATA_FILE_NAME))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the source provenance record into the document.
    ///
    /// The document is rebuilt with the `source` table replaced and every
    /// other key carried over verbatim, then swapped in whole.
    pub fn set_source(&mut self, source: &SourceProvenance) {
        let mut merged = self.doc.clone();

        let mut entry = table();
        entry["commit"] = value(source.commit.as_str());
        entry["url"] = value(source.url.as_str());
        merged["source"] = entry;

        self.doc = merged;
    }

    /// Read the source provenance record.
    pub fn source(&self) -> Result<SourceProvenance, DataError> {
        let table = self
            .doc
            .get("source")
            .and_then(|item| item.as_table_like())
            .ok_or(DataError::MissingKey { key: "source" })?;

        let url = read_str(table, "url", "source.url")?;
        let commit = read_str(table, "commit", "source.commit")?;

        Ok(SourceProvenance { url, commit })
    }

    /// Write the document back to its file.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.doc.to_string())
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Render the document (for display and tests).
    pub fn to_toml_string(&self) -> String {
        self.doc.to_string()
    }
}

fn read_str(
    table: &dyn toml_edit::TableLike,
    field: &str,
    key: &'static str,
) -> Result<String, DataError> {
    let item = table.get(field).ok_or(DataError::MissingKey { key })?;
    item.as_str()
        .map(str::to_string)
        .ok_or(DataError::WrongType { key })
}
