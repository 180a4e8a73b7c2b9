use crate::core::types::PackageManagerKind;
use crate::error::{PompaError, Result};
use crate::router::PackageManagerPrompt;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Disable colors on non-terminal stderr or when NO_COLOR is set.
pub fn init_colors() {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stderr) {
        colored::control::set_override(false);
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn success(msg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn verbose(msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        println!("{}", msg.dimmed());
    }
}

/// Interactive stdin-backed package manager chooser, defaulting to npm on
/// empty input.
pub struct StdinPrompt;

impl PackageManagerPrompt for StdinPrompt {
    fn choose(&self) -> Result<PackageManagerKind> {
        let answer = prompt_line("No lockfile found. Choose a package manager (yarn/npm/pnpm) [npm]:")?;
        if answer.is_empty() {
            return Ok(PackageManagerKind::Npm);
        }
        answer
            .to_lowercase()
            .parse()
            .map_err(PompaError::UnknownPackageManager)
    }
}

fn prompt_line(question: &str) -> io::Result<String> {
    print!("{} {} ", "?".yellow().bold(), question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
