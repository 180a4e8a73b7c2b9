//! Best-effort release update notice.
//!
//! Probes the latest GitHub release after a successful delegation and prints
//! a hint when a newer version exists. Every failure path is silent: this
//! must never affect the exit code or block beyond the HTTP timeout.

use crate::project_identity;
use crate::ui;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const HTTP_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
}

/// Print an update hint when a newer release exists.
///
/// Skipped entirely when POMPA_NO_UPDATE_CHECK is set.
pub fn notify_if_outdated(env_lookup: impl Fn(&str) -> Option<String>) {
    if env_lookup(&project_identity::env_key("NO_UPDATE_CHECK")).is_some() {
        return;
    }

    let Some(latest) = fetch_latest_version(Duration::from_secs(HTTP_TIMEOUT_SECS)) else {
        return;
    };

    let current = env!("CARGO_PKG_VERSION");
    if version_tuple(&latest) > version_tuple(current) {
        ui::info(&format!(
            "A new version of {} is available: {} (current: {})",
            project_identity::BINARY_NAME,
            latest,
            current
        ));
    }
}

fn fetch_latest_version(timeout: Duration) -> Option<String> {
    let client = Client::builder().timeout(timeout).build().ok()?;

    let response = client
        .get(project_identity::github_latest_release_api())
        .header(
            "User-Agent",
            format!("{}-cli", project_identity::BINARY_NAME),
        )
        .send()
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    let body = response.text().ok()?;
    parse_latest_version_from_body(&body)
}

fn parse_latest_version_from_body(body: &str) -> Option<String> {
    let release: GitHubRelease = serde_json::from_str(body).ok()?;
    let tag = release.tag_name.trim();
    let normalized = tag.strip_prefix('v').unwrap_or(tag).to_string();
    if version_tuple(&normalized).is_some() {
        Some(normalized)
    } else {
        None
    }
}

/// Parse "1.2.3" (optionally "v"-prefixed or with a pre-release suffix)
/// into a comparable tuple.
fn version_tuple(version: &str) -> Option<(u64, u64, u64)> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let core = version.split('-').next()?;
    let mut parts = core.split('.');

    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((major, minor, patch))
}
