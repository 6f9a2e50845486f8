//! CMake driver.
//!
//! Thin delegation: configure, build, install. Output lands in an
//! out-of-source build directory `build/<BuildType>` under the source tree,
//! so Debug and Release builds never collide.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::builder::BuildDriver;
use crate::core::settings::Settings;
use crate::util::fs::ensure_dir;
use crate::util::process::{find_cmake, ProcessBuilder};

/// Build driver that shells out to CMake.
pub struct CMakeDriver {
    cmake: PathBuf,
    settings: Settings,
}

impl CMakeDriver {
    /// Create a driver for the given settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let Some(cmake) = find_cmake() else {
            bail!(
                "CMake not found\n\
                 \n\
                 CMake is required to build this package.\n\
                 Install CMake and ensure it's in your PATH."
            );
        };

        Ok(CMakeDriver { cmake, settings })
    }

    /// The build directory for a source tree under the current settings.
    pub fn build_dir(&self, source_dir: &Path) -> PathBuf {
        source_dir
            .join("build")
            .join(self.settings.build_type.as_cmake_str())
    }

    fn run(&self, cmd: ProcessBuilder, what: &str) -> Result<()> {
        let output = cmd.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("CMake {} failed:\n{}", what, stderr);
        }
        Ok(())
    }
}

impl BuildDriver for CMakeDriver {
    fn configure(&self, source_dir: &Path) -> Result<()> {
        tracing::info!("Configuring CMake project");

        let build_dir = self.build_dir(source_dir);
        ensure_dir(&build_dir)?;

        let mut cmd = ProcessBuilder::new(&self.cmake)
            .arg("-S")
            .arg(source_dir)
            .arg("-B")
            .arg(&build_dir)
            .arg(format!(
                "-DCMAKE_BUILD_TYPE={}",
                self.settings.build_type.as_cmake_str()
            ));

        if let Some(ref compiler) = self.settings.compiler {
            cmd = cmd.arg(format!("-DCMAKE_CXX_COMPILER={}", compiler));
        }

        self.run(cmd, "configuration")
    }

    fn build(&self, source_dir: &Path) -> Result<()> {
        tracing::info!("Building CMake project");

        let cmd = ProcessBuilder::new(&self.cmake)
            .arg("--build")
            .arg(self.build_dir(source_dir))
            .arg("--parallel")
            .arg("--config")
            .arg(self.settings.build_type.as_cmake_str());

        self.run(cmd, "build")
    }

    fn install(&self, source_dir: &Path, prefix: &Path) -> Result<()> {
        tracing::info!("Installing to {}", prefix.display());

        let cmd = ProcessBuilder::new(&self.cmake)
            .arg("--install")
            .arg(self.build_dir(source_dir))
            .arg("--config")
            .arg(self.settings.build_type.as_cmake_str())
            .arg("--prefix")
            .arg(prefix);

        self.run(cmd, "install")
    }
}
