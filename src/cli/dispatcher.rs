//! Dispatch glue: detect, route, execute.
//!
//! Linear flow per invocation: Detect -> Decide -> (Prompt?) -> Build ->
//! Execute -> Exit. Terminal on first error, no backtracking.

use crate::cli::args::Cli;
use crate::core::types::InvocationRequest;
use crate::detect;
use crate::error::{PompaError, Result};
use crate::exec;
use crate::router::{self, Action};
use crate::ui;
use crate::utils::update_check;
use std::env;

/// Dispatch the parsed CLI command.
pub fn dispatch(args: &Cli) -> Result<()> {
    let request = InvocationRequest::new(args.command.clone());

    let pm = match args.global.pm {
        Some(kind) => Some(kind),
        None => {
            let cwd = env::current_dir()?;
            let detection = detect::detect(&cwd);
            if detection.ambiguous {
                ui::warning(
                    "Both yarn.lock and package-lock.json found. Remove one of them for consistent behavior.",
                );
            }
            detection.kind
        }
    };

    match router::route(&request, pm, &ui::StdinPrompt)? {
        Action::Execute(spec) => {
            ui::verbose(&format!("Running {}", spec));
            exec::run(&spec)?;

            if router::is_install_request(&request) {
                acknowledge_install(|key| env::var(key).ok());
            }

            update_check::notify_if_outdated(|key| env::var(key).ok());
            Ok(())
        }
        Action::Suggest(suggestion) => {
            if let Some(intended) = suggestion {
                ui::info(&format!("Did you mean \"{}\"?", intended));
            }
            Err(PompaError::NoPackageManager)
        }
    }
}

/// Thank the invoking user after a successful install. Under sudo the
/// elevated user owns the process, so prefer SUDO_USER. Cosmetic only.
fn acknowledge_install(env_lookup: impl Fn(&str) -> Option<String>) {
    match env_lookup("SUDO_USER").or_else(|| env_lookup("USER")) {
        Some(user) => ui::success(&format!("Done. Thanks, {}!", user)),
        None => ui::success("Done."),
    }
}
