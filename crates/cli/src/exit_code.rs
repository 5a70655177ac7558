//! Exit codes for the gqlurl CLI.
//!
//! Usage errors are reported by clap with its own code (2).

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The schema was fetched; the report may still be empty
    Success = 0,
    /// Introspection failed (network, HTTP status, invalid body)
    FetchError = 1,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::FetchError => write!(f, "introspection fetch error"),
        }
    }
}
