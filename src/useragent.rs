//! User-Agent selection.
//!
//! The header value is either a fixed string or a uniform-random pick from a
//! preloaded pool. In random mode the pick is, by default, re-rolled per
//! extractor fetch, so different extractors may present different
//! User-Agents to the same target within one run. That is deliberate
//! evasion behavior; `UaPolicy::PerRun` pins a single sample instead.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::cli::UaPolicy;
use crate::config::UseragentConfig;
use crate::errors::{IoResultExt, Result, SiteReconError};

/// Sentinel value selecting random mode.
pub const RANDOM_SENTINEL: &str = "random";

/// Resolved User-Agent selection policy for one run.
#[derive(Debug, Clone)]
pub enum UseragentPolicy {
    /// Always this exact value (explicit string, or a per-run random pin).
    Fixed(String),
    /// Uniform choice from the pool on every call.
    Random { pool: Vec<String> },
}

impl UseragentPolicy {
    /// Build the policy from merged configuration, loading the sidecar list
    /// when random mode is requested.
    pub fn from_config(config: &UseragentConfig) -> Result<Self> {
        if config.value != RANDOM_SENTINEL {
            return Ok(UseragentPolicy::Fixed(config.value.clone()));
        }

        let pool = load_useragent_list(&config.list_file)?;
        match config.policy {
            UaPolicy::PerCall => Ok(UseragentPolicy::Random { pool }),
            UaPolicy::PerRun => {
                let pinned = pick_uniform(&pool).expect("pool validated non-empty");
                Ok(UseragentPolicy::Fixed(pinned.to_string()))
            }
        }
    }

    /// Select a header value for one fetch.
    pub fn select(&self) -> &str {
        match self {
            UseragentPolicy::Fixed(value) => value,
            UseragentPolicy::Random { pool } => {
                pick_uniform(pool).expect("pool validated non-empty")
            }
        }
    }
}

/// Load a newline-delimited useragent list. Blank lines are skipped; an
/// entirely empty pool is a configuration error.
pub fn load_useragent_list(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).with_path(path.display().to_string(), "read")?;
    let pool: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if pool.is_empty() {
        return Err(SiteReconError::EmptyUseragentList {
            path: path.display().to_string(),
        });
    }
    Ok(pool)
}

fn pick_uniform(pool: &[String]) -> Option<&String> {
    pool.choose(&mut rand::thread_rng())
}
