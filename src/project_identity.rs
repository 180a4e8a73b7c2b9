//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "Pompa";
pub const BINARY_NAME: &str = "pompa";
pub const ENV_PREFIX: &str = "POMPA";
pub const REPO_SLUG: &str = "pompa-dev/pompa";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn github_latest_release_api() -> String {
    format!("https://api.github.com/repos/{}/releases/latest", REPO_SLUG)
}
