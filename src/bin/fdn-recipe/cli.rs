//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fdn_recipe::BuildType;

/// fdn-recipe - build recipe for the foundation C++ utility library
#[derive(Parser)]
#[command(name = "fdn-recipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the package version from the recipe's git tags
    Version(VersionArgs),

    /// Capture source provenance into the persisted recipe data
    Export(ExportArgs),

    /// Materialize the source tree recorded at export time
    Source(SourceArgs),

    /// Configure and build via CMake
    Build(BuildArgs),

    /// Install built artifacts into a package prefix
    Package(PackageArgs),

    /// Print the declared build requirements
    Requirements(RequirementsArgs),

    /// Print the normalized package identity
    PackageId(PackageIdArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct VersionArgs {
    /// Recipe checkout to query
    #[arg(long, default_value = ".")]
    pub recipe_folder: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Recipe checkout to snapshot
    #[arg(long, default_value = ".")]
    pub recipe_folder: PathBuf,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Persisted recipe data written by `export`
    #[arg(long, default_value = "recipe-data.toml")]
    pub data: PathBuf,

    /// Directory to materialize the source tree into
    #[arg(long, default_value = "source")]
    pub target: PathBuf,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Source tree to build
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Build configuration
    #[arg(long, value_enum, default_value_t = BuildType::Release)]
    pub build_type: BuildType,

    /// C++ compiler override
    #[arg(long)]
    pub compiler: Option<String>,
}

#[derive(Args)]
pub struct PackageArgs {
    /// Source tree that was built
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Installation prefix
    #[arg(long)]
    pub prefix: PathBuf,

    /// Build configuration
    #[arg(long, value_enum, default_value_t = BuildType::Release)]
    pub build_type: BuildType,

    /// C++ compiler override
    #[arg(long)]
    pub compiler: Option<String>,
}

#[derive(Args)]
pub struct RequirementsArgs {
    /// Declare test requirements regardless of the environment toggle
    #[arg(long)]
    pub run_tests: bool,
}

#[derive(Args)]
pub struct PackageIdArgs {
    /// Recipe checkout to query
    #[arg(long, default_value = ".")]
    pub recipe_folder: PathBuf,

    /// Build configuration (collapsed out of the identity)
    #[arg(long, value_enum, default_value_t = BuildType::Release)]
    pub build_type: BuildType,

    /// C++ compiler override (collapsed out of the identity)
    #[arg(long)]
    pub compiler: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
