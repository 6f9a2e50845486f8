//! `fdn-recipe source` command

use anyhow::Result;

use crate::cli::SourceArgs;
use fdn_recipe::ops::source;
use fdn_recipe::{GitClient, RecipeData};

pub fn execute(args: SourceArgs) -> Result<()> {
    let data = RecipeData::load(&args.data)?;
    let git = GitClient::new();

    let provenance = source(&data, &git, &args.target)?;
    println!("materialized {} into {}", provenance, args.target.display());

    Ok(())
}
