//! Build and package phases: pure delegation to the build driver.

use std::path::Path;

use anyhow::Result;

use crate::builder::BuildDriver;

/// Configure and compile the source tree.
pub fn build(driver: &dyn BuildDriver, source_dir: &Path) -> Result<()> {
    driver.configure(source_dir)?;
    driver.build(source_dir)
}

/// Install built artifacts into the package prefix.
pub fn package(driver: &dyn BuildDriver, source_dir: &Path, prefix: &Path) -> Result<()> {
    driver.install(source_dir, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBuild;

    #[test]
    fn test_build_configures_then_compiles() {
        let driver = FakeBuild::default();
        build(&driver, Path::new("/work/src")).unwrap();

        assert_eq!(
            driver.recorded(),
            vec!["configure /work/src", "build /work/src"]
        );
    }

    #[test]
    fn test_package_installs() {
        let driver = FakeBuild::default();
        package(&driver, Path::new("/work/src"), Path::new("/opt/pkg")).unwrap();

        assert_eq!(driver.recorded(), vec!["install /work/src -> /opt/pkg"]);
    }
}
