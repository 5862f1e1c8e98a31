//! siterecon
//!
//! Single-target passive web reconnaissance: given a URL, fetch the page,
//! extract contact-like artifacts (emails, phone numbers, hyperlinks,
//! author metadata, geo-position metadata), augment with domain
//! registration data (WHOIS creation/expiration/update dates, name
//! servers), and merge everything into one fixed-shape JSON document.
//!
//! Every extractor is best-effort: failures degrade to that extractor's
//! empty value and surface only on a diagnostics side-channel, so the
//! merged record always carries the complete key set.
//!
//! # Example
//!
//! ```rust,no_run
//! use siterecon::config::Config;
//! use siterecon::scan::Scanner;
//!
//! # async fn run() -> siterecon::errors::Result<()> {
//! let mut config = Config::from_env();
//! config.useragent.value = "ReconBot/1.0".to_string();
//!
//! let scanner = Scanner::new(config)?;
//! let outcome = scanner.scan("https://example.org").await;
//! println!("{}", outcome.record.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

// Re-export all modules for library use
pub mod cli;
pub mod config;
pub mod emails;
pub mod errors;
pub mod fetch;
pub mod html;
pub mod phones;
pub mod record;
pub mod registry;
pub mod scan;
pub mod useragent;

// Re-export commonly used types and functions for convenience
pub use config::Config;
pub use errors::{ErrorCategory, Result, SiteReconError};
pub use record::{CreationUpdateInfo, DateValue, ExtractionRecord, ParsedPhone};
pub use scan::{ScanOutcome, Scanner};
pub use useragent::UseragentPolicy;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
