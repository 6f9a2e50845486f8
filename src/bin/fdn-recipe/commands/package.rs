//! `fdn-recipe package` command

use anyhow::Result;

use crate::cli::PackageArgs;
use fdn_recipe::ops::package;
use fdn_recipe::{CMakeDriver, Settings};

pub fn execute(args: PackageArgs) -> Result<()> {
    let settings = Settings::new(args.compiler, args.build_type);
    let driver = CMakeDriver::new(settings)?;

    package(&driver, &args.source_dir, &args.prefix)
}
