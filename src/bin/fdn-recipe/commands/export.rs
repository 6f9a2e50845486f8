//! `fdn-recipe export` command

use anyhow::Result;

use crate::cli::ExportArgs;
use fdn_recipe::ops::export;
use fdn_recipe::{GitClient, Recipe, RecipeData, Settings};

pub fn execute(args: ExportArgs) -> Result<()> {
    let recipe = Recipe::new(&args.recipe_folder, Settings::default());
    let git = GitClient::new();
    let mut data = RecipeData::for_recipe(&args.recipe_folder)?;

    let source = export(&recipe, &git, &mut data)?;
    println!("exported {} ({})", recipe.name(), source);

    Ok(())
}
