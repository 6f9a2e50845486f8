//! Version resolution from tag metadata.

use anyhow::{Context, Result};

use crate::core::Recipe;
use crate::scm::ScmClient;

/// Resolve the recipe version from the nearest reachable tag.
///
/// Tags follow the `v<version>` convention; exactly the first character of
/// the described tag is dropped and the remainder becomes the version. No
/// further validation happens, so between tags a description like
/// `v2.3.1-4-gdeadbee` produces `2.3.1-4-gdeadbee`. A repository with no
/// reachable tag fails the whole evaluation; there is no fallback version.
pub fn set_version(recipe: &mut Recipe, scm: &dyn ScmClient) -> Result<String> {
    let tag = scm
        .describe_tags(recipe.recipe_folder())
        .context("cannot resolve version")?;

    let tag = tag.trim();
    let mut chars = tag.chars();
    chars.next();
    let version = chars.as_str().to_string();

    tracing::debug!("Resolved version `{}` from tag `{}`", version, tag);

    recipe.set_version(&version)?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Settings;
    use crate::test_support::FakeScm;

    fn recipe() -> Recipe {
        Recipe::new("/work/recipe", Settings::default())
    }

    #[test]
    fn test_strips_v_prefix() {
        let scm = FakeScm {
            tag: Some("v2.3.1".to_string()),
            ..Default::default()
        };

        let mut recipe = recipe();
        let version = set_version(&mut recipe, &scm).unwrap();

        assert_eq!(version, "2.3.1");
        assert_eq!(recipe.version(), Some("2.3.1"));
    }

    #[test]
    fn test_strips_exactly_one_char() {
        // The rule is prefix-agnostic: whatever the first character is, it goes.
        let scm = FakeScm {
            tag: Some("10.0".to_string()),
            ..Default::default()
        };

        let mut recipe = recipe();
        assert_eq!(set_version(&mut recipe, &scm).unwrap(), "0.0");
    }

    #[test]
    fn test_describe_output_between_tags() {
        let scm = FakeScm {
            tag: Some("v2.3.1-4-gdeadbee".to_string()),
            ..Default::default()
        };

        let mut recipe = recipe();
        assert_eq!(set_version(&mut recipe, &scm).unwrap(), "2.3.1-4-gdeadbee");
    }

    #[test]
    fn test_multibyte_prefix() {
        let scm = FakeScm {
            tag: Some("é1.0".to_string()),
            ..Default::default()
        };

        let mut recipe = recipe();
        assert_eq!(set_version(&mut recipe, &scm).unwrap(), "1.0");
    }

    #[test]
    fn test_no_tag_is_fatal() {
        let scm = FakeScm::default();

        let mut recipe = recipe();
        let err = set_version(&mut recipe, &scm).unwrap_err();
        assert!(format!("{:#}", err).contains("no tag"));
        assert_eq!(recipe.version(), None);
    }
}
