//! Recipe configuration.
//!
//! The one environment-controlled input is the test toggle. It is read from
//! the environment exactly once, here, and then threaded explicitly into the
//! requirement declarator so that the declarator stays a pure function.

/// Environment variable controlling test-only build requirements.
///
/// The name predates this tool; existing CI jobs already set it.
pub const RUN_TESTS_ENV: &str = "CONAN_RUN_TESTS";

/// Configuration inputs for one recipe evaluation.
#[derive(Debug, Clone, Default)]
pub struct RecipeConfig {
    /// Whether test-framework requirements should be declared.
    pub run_tests: bool,
}

impl RecipeConfig {
    /// Build a configuration with the toggle set explicitly.
    pub fn new(run_tests: bool) -> Self {
        RecipeConfig { run_tests }
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        RecipeConfig {
            run_tests: env_truthy(RUN_TESTS_ENV),
        }
    }
}

/// Interpret an environment variable as a boolean. Absent means false;
/// "0", "false", "off", "no" and the empty string mean false; anything
/// else means true.
fn env_truthy(key: &str) -> bool {
    match std::env::var(key) {
        Ok(value) => !matches!(
            value.to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "off" | "no"
        ),
        Err(_) => false,
    }
}
