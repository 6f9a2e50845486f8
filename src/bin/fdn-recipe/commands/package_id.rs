//! `fdn-recipe package-id` command

use anyhow::Result;

use crate::cli::PackageIdArgs;
use fdn_recipe::ops::{package_identity, set_version};
use fdn_recipe::{GitClient, Recipe, Settings};

pub fn execute(args: PackageIdArgs) -> Result<()> {
    let settings = Settings::new(args.compiler, args.build_type);
    let mut recipe = Recipe::new(&args.recipe_folder, settings);

    let git = GitClient::new();
    set_version(&mut recipe, &git)?;

    let id = package_identity(&recipe)?;
    println!("{} {}", recipe.package_ref(), id);

    Ok(())
}
