//! Unified error handling for siterecon.
//!
//! A `thiserror`-based model with:
//!   * Typed variants for common failure domains
//!   * A categorization layer (`ErrorCategory`) for diagnostics
//!   * Helper constructors
//!   * `From` conversions for common lower-level errors
//!
//! Every extractor is total with respect to its own error surface: errors
//! defined here never escape an extractor boundary, they degrade into the
//! extractor's empty value plus a diagnostic warning. The binary only fails
//! on configuration / IO problems (unreadable useragent list, unwritable
//! output path).

use std::io;

use thiserror::Error;

/// High-level classification for diagnostics reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Parse,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Network => "network",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum SiteReconError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Useragent list {path} is empty")]
    EmptyUseragentList { path: String },

    // ----------------------------- Network ----------------------------------
    #[error("HTTP status {status} fetching '{url}'")]
    HttpStatus { url: String, status: u16 },

    #[error("Network error during {operation} for '{target}': {source}")]
    Network {
        operation: String,
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Fetch of '{url}' timed out after {seconds}s")]
    FetchTimeout { url: String, seconds: u64 },

    #[error("WHOIS query '{query}' to server '{server}' failed: {reason}")]
    WhoisQuery {
        server: String,
        query: String,
        reason: String,
    },

    // ---------------------------- Parsing -----------------------------------
    #[error("WHOIS response parse failed for query '{query}': {reason}")]
    WhoisParse { query: String, reason: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SiteReconError {
    /// Categorize the error for diagnostics.
    pub fn category(&self) -> ErrorCategory {
        use SiteReconError::*;
        match self {
            Configuration { .. } | EmptyUseragentList { .. } => ErrorCategory::Input,

            HttpStatus { .. } | Network { .. } | FetchTimeout { .. } | WhoisQuery { .. } => {
                ErrorCategory::Network
            }

            WhoisParse { .. } => ErrorCategory::Parse,

            Io { .. } | Internal { .. } => ErrorCategory::Internal,
        }
    }

    // ---------------------------- Constructors -----------------------------

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    pub fn network(
        operation: impl Into<String>,
        target: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            operation: operation.into(),
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn fetch_timeout(url: impl Into<String>, seconds: u64) -> Self {
        Self::FetchTimeout {
            url: url.into(),
            seconds,
        }
    }

    pub fn whois_query(
        server: impl Into<String>,
        query: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::WhoisQuery {
            server: server.into(),
            query: query.into(),
            reason: reason.into(),
        }
    }

    pub fn whois_parse(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WhoisParse {
            query: query.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, SiteReconError>;

/// Map standard IO errors into `Io` variant (generic context).
impl From<io::Error> for SiteReconError {
    fn from(e: io::Error) -> Self {
        SiteReconError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| SiteReconError::io(path.into(), operation.into(), e))
    }
}
