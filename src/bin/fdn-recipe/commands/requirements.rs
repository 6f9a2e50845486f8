//! `fdn-recipe requirements` command
//!
//! Prints the declared build requirements as TOML. The set depends only on
//! the test toggle: the `CONAN_RUN_TESTS` environment variable, or the
//! `--run-tests` flag to force it on.

use anyhow::Result;
use serde::Serialize;

use crate::cli::RequirementsArgs;
use fdn_recipe::core::requirement::build_requirements;
use fdn_recipe::{RecipeConfig, Requirement};

#[derive(Serialize)]
struct Declared {
    test_requires: Vec<Requirement>,
}

pub fn execute(args: RequirementsArgs) -> Result<()> {
    let config = if args.run_tests {
        RecipeConfig::new(true)
    } else {
        RecipeConfig::from_env()
    };

    let declared = Declared {
        test_requires: build_requirements(config.run_tests),
    };

    print!("{}", toml::to_string(&declared)?);

    Ok(())
}
