use thiserror::Error;

#[derive(Error, Debug)]
pub enum PompaError {
    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("\"pompa install\" is not supported with yarn; run \"yarn install\" directly")]
    BareInstallWithYarn,

    #[error("Unknown package manager '{0}' (expected npm, yarn, or pnpm)")]
    UnknownPackageManager(String),

    #[error("No lockfile found; cannot determine a package manager")]
    NoPackageManager,

    #[error("'{program}' is not installed or not on PATH")]
    DependencyMissing { program: String },

    #[error("Command \"{command}\" failed with error: {reason}")]
    SpawnFailed { command: String, reason: String },

    #[error("Command \"{command}\" failed with exit code {code}")]
    ChildFailed { command: String, code: i32 },
}

impl PompaError {
    /// Process exit code reported for this failure.
    ///
    /// A failed child propagates its own code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ChildFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PompaError>;
