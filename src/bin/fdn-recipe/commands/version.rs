//! `fdn-recipe version` command

use anyhow::Result;

use crate::cli::VersionArgs;
use fdn_recipe::ops::set_version;
use fdn_recipe::{GitClient, Recipe, Settings};

pub fn execute(args: VersionArgs) -> Result<()> {
    let mut recipe = Recipe::new(&args.recipe_folder, Settings::default());
    let git = GitClient::new();

    let version = set_version(&mut recipe, &git)?;
    println!("{}", version);

    Ok(())
}
