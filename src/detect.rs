//! Lockfile-based package manager detection.

use crate::core::types::PackageManagerKind;
use std::path::Path;

/// Outcome of a lockfile scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub kind: Option<PackageManagerKind>,
    /// Both yarn.lock and package-lock.json present; they can drift apart.
    pub ambiguous: bool,
}

/// Infer which package manager governs `dir` from its lockfile markers.
///
/// yarn.lock wins over package-lock.json; pnpm-lock.yaml is only honored
/// when neither of the other two left a marker. Re-evaluated per invocation,
/// never cached. Filesystem reads are the only side effect.
pub fn detect(dir: &Path) -> Detection {
    let has_yarn = dir.join(PackageManagerKind::Yarn.lockfile()).exists();
    let has_npm = dir.join(PackageManagerKind::Npm.lockfile()).exists();
    let has_pnpm = dir.join(PackageManagerKind::Pnpm.lockfile()).exists();

    let kind = if has_yarn {
        Some(PackageManagerKind::Yarn)
    } else if has_npm {
        Some(PackageManagerKind::Npm)
    } else if has_pnpm {
        Some(PackageManagerKind::Pnpm)
    } else {
        None
    };

    Detection {
        kind,
        ambiguous: has_yarn && has_npm,
    }
}
