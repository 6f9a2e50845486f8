//! `fdn-recipe build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use fdn_recipe::ops::build;
use fdn_recipe::{CMakeDriver, Settings};

pub fn execute(args: BuildArgs) -> Result<()> {
    let settings = Settings::new(args.compiler, args.build_type);
    let driver = CMakeDriver::new(settings)?;

    build(&driver, &args.source_dir)
}
