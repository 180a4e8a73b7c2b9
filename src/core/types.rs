use std::fmt;
use std::str::FromStr;

/// Node.js package managers pompa can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManagerKind {
    pub const ALL: [PackageManagerKind; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Binary invoked on the user's PATH.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Lockfile whose presence signals this manager last ran.
    /// Never parsed, only checked for existence.
    pub fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl FromStr for PackageManagerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(other.to_string()),
        }
    }
}

/// The raw command line the user supplied, as an ordered token sequence.
/// Constructed once from process arguments, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    tokens: Vec<String>,
}

impl InvocationRequest {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Split a single command string on whitespace.
    pub fn from_line(line: &str) -> Self {
        Self::new(line.split_whitespace().map(str::to_string).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token: the canonical command name.
    pub fn command(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Everything after the command name.
    pub fn rest(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A fully formed external command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ProcessSpec {
    pub fn new(program: &'static str, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(line) => write!(f, "{}", line),
            // Nul bytes cannot be quoted; fall back to a plain join
            Err(_) => {
                write!(f, "{}", self.program)?;
                for arg in &self.args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
        }
    }
}
