//! Command routing and remapping.
//!
//! Decides what to run for a user command: reject the combination, restructure
//! a package install request, or substitute the per-manager subcommand from
//! the mapping table. Pure except for the injected prompt.

use crate::core::types::{InvocationRequest, PackageManagerKind, ProcessSpec};
use crate::error::{PompaError, Result};

/// How the router obtains a package manager when no lockfile resolved one.
pub trait PackageManagerPrompt {
    fn choose(&self) -> Result<PackageManagerKind>;
}

/// Routing outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fully built command to delegate to.
    Execute(ProcessSpec),
    /// No package manager resolvable; optionally a likely-intended command.
    Suggest(Option<&'static str>),
}

/// One row of the command mapping table: a canonical command name and the
/// literal subcommand tokens each manager uses for it.
struct Mapping {
    canonical: &'static str,
    npm: &'static [&'static str],
    yarn: &'static [&'static str],
    pnpm: &'static [&'static str],
}

impl Mapping {
    fn for_kind(&self, kind: PackageManagerKind) -> &'static [&'static str] {
        match kind {
            PackageManagerKind::Npm => self.npm,
            PackageManagerKind::Yarn => self.yarn,
            PackageManagerKind::Pnpm => self.pnpm,
        }
    }
}

// Single source of truth for command vocabulary differences. The install row
// is only reachable for a bare `install` (the install path below intercepts
// `install <packages>` before lookup, and yarn rejects the bare form).
const COMMAND_TABLE: &[Mapping] = &[
    Mapping { canonical: "install", npm: &["install"], yarn: &["add"], pnpm: &["install"] },
    Mapping { canonical: "add", npm: &["install"], yarn: &["add"], pnpm: &["add"] },
    Mapping { canonical: "remove", npm: &["uninstall"], yarn: &["remove"], pnpm: &["remove"] },
    Mapping { canonical: "start", npm: &["start"], yarn: &["start"], pnpm: &["start"] },
    Mapping { canonical: "build", npm: &["run", "build"], yarn: &["build"], pnpm: &["build"] },
    Mapping { canonical: "test", npm: &["test"], yarn: &["test"], pnpm: &["test"] },
    Mapping { canonical: "init", npm: &["init"], yarn: &["init"], pnpm: &["init"] },
    Mapping { canonical: "dev", npm: &["run", "dev"], yarn: &["dev"], pnpm: &["dev"] },
    Mapping { canonical: "publish", npm: &["publish"], yarn: &["publish"], pnpm: &["publish"] },
];

fn remap(canonical: &str, kind: PackageManagerKind) -> Option<&'static [&'static str]> {
    COMMAND_TABLE
        .iter()
        .find(|m| m.canonical == canonical)
        .map(|m| m.for_kind(kind))
}

fn suggest_for(command: &str) -> Option<&'static str> {
    match command {
        "add" | "i" => Some("install"),
        "remove" | "rm" => Some("uninstall"),
        _ => None,
    }
}

/// True when the request is a package install (an `install` with arguments).
pub fn is_install_request(request: &InvocationRequest) -> bool {
    request.command() == Some("install") && !request.rest().is_empty()
}

/// Route a user command under the detected package manager.
///
/// Decision order is load-bearing: disallowed combination, install request,
/// table remap, pass-through. `prompt` is consulted only for install requests
/// when no lockfile resolved a manager.
pub fn route(
    request: &InvocationRequest,
    detected: Option<PackageManagerKind>,
    prompt: &dyn PackageManagerPrompt,
) -> Result<Action> {
    let Some(command) = request.command() else {
        return Ok(Action::Suggest(None));
    };

    // Yarn's zero-argument install has different semantics than npm's;
    // refuse to proxy it.
    if command == "install"
        && request.rest().is_empty()
        && detected == Some(PackageManagerKind::Yarn)
    {
        return Err(PompaError::BareInstallWithYarn);
    }

    // Package install request: extract the dev flag and package list,
    // prompting for a manager if none was detected.
    if is_install_request(request) {
        let rest = request.rest();
        let (dev, packages) = match rest[0].as_str() {
            "-D" | "--save-dev" => (true, &rest[1..]),
            _ => (false, rest),
        };

        let pm = match detected {
            Some(kind) => kind,
            None => prompt.choose()?,
        };

        return Ok(Action::Execute(build_install(pm, dev, packages)));
    }

    // Nothing to delegate to; at best a hint at the intended command.
    let Some(pm) = detected else {
        return Ok(Action::Suggest(suggest_for(command)));
    };

    // Table remap, or verbatim pass-through for unknown commands.
    let args = match remap(command, pm) {
        Some(mapped) => mapped
            .iter()
            .map(|s| s.to_string())
            .chain(request.rest().iter().cloned())
            .collect(),
        None => request.tokens().to_vec(),
    };

    Ok(Action::Execute(ProcessSpec::new(pm.program(), args)))
}

/// Build the install invocation per package manager:
/// `yarn add [--dev]`, `npm install [--save-dev]`, `pnpm add [--save-dev]`.
fn build_install(pm: PackageManagerKind, dev: bool, packages: &[String]) -> ProcessSpec {
    let (subcommand, dev_flag) = match pm {
        PackageManagerKind::Npm => ("install", "--save-dev"),
        PackageManagerKind::Yarn => ("add", "--dev"),
        PackageManagerKind::Pnpm => ("add", "--save-dev"),
    };

    let mut args = vec![subcommand.to_string()];
    if dev {
        args.push(dev_flag.to_string());
    }
    args.extend(packages.iter().cloned());

    ProcessSpec::new(pm.program(), args)
}

#[cfg(test)]
mod tests;
