use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line interface definition.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors (per-extractor failure diagnostics)
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Fetch one page, extract contact-like artifacts and WHOIS registration data, emit a single JSON document"
)]
pub struct Cli {
    /// Target URL to scrape.
    pub url: String,

    /// Literal User-Agent string, or "random" to sample from the useragent list file.
    #[arg(long, default_value = "random")]
    pub useragent: String,

    /// Path to the newline-delimited useragent list used in random mode.
    #[arg(long = "useragent-file", value_name = "FILE", default_value = "useragents.txt")]
    pub useragent_file: PathBuf,

    /// When to re-sample a random User-Agent.
    #[arg(long = "ua-policy", value_enum, default_value_t = UaPolicy::PerCall)]
    pub ua_policy: UaPolicy,

    /// Write the JSON document to this path instead of stdout (overwrites).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Per-fetch timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,
}

/// Random User-Agent re-sampling policy. `PerCall` presents a fresh header
/// to the target on every extractor fetch; `PerRun` fixes one for the run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UaPolicy {
    PerCall,
    PerRun,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }
}
