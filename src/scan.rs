//! Orchestration of one reconnaissance run.
//!
//! The five page extractors and the two registry operations are logically
//! independent, so they run as one concurrent task group of seven; the
//! merge waits for all of them to settle. Each operation applies its own
//! failure-to-empty policy: no failure affects another operation's
//! execution or result, and the merged record always carries the complete
//! key set.
//!
//! Side-effects (printing, exit codes) are excluded here; failures surface
//! on a warnings side-channel for the caller to report.

use crate::config::Config;
use crate::emails;
use crate::errors::Result;
use crate::fetch::fetch_page;
use crate::html;
use crate::phones;
use crate::record::{CreationUpdateInfo, ExtractionRecord, ParsedPhone};
use crate::registry;
use crate::useragent::UseragentPolicy;

/// Result of one run: the merged document plus diagnostics for failures
/// that were degraded to empty values.
#[derive(Debug)]
pub struct ScanOutcome {
    pub record: ExtractionRecord,
    pub warnings: Vec<String>,
}

/// One-shot scanner for a single target.
pub struct Scanner {
    config: Config,
    useragent: UseragentPolicy,
}

impl Scanner {
    /// Resolve the useragent policy (loading the sidecar list in random
    /// mode) and capture the merged configuration.
    pub fn new(config: Config) -> Result<Self> {
        let useragent = UseragentPolicy::from_config(&config.useragent)?;
        Ok(Self { config, useragent })
    }

    /// Run the full pipeline against `target` and merge the results.
    pub async fn scan(&self, target: &str) -> ScanOutcome {
        let domain = registry::derive_domain(target);
        let network = self.config.network.clone();

        let dates_handle = tokio::spawn({
            let domain = domain.clone();
            let network = network.clone();
            async move { registry::creation_update(&domain, &network).await }
        });
        let servers_handle = tokio::spawn({
            let domain = domain.clone();
            let network = network.clone();
            async move { registry::name_servers(&domain, &network).await }
        });

        let (emails, links, authors, phones, locations) = tokio::join!(
            self.run_emails(target),
            self.run_links(target),
            self.run_author(target),
            self.run_phones(target),
            self.run_locations(target),
        );

        let creation_update_info = settle(
            dates_handle.await,
            "registry date lookup",
            CreationUpdateInfo::default,
        );
        let servers = settle(servers_handle.await, "registry server lookup", Vec::new);

        let mut warnings = Vec::new();
        let record = ExtractionRecord {
            target_url: target.to_string(),
            emails: emails.merge_into(&mut warnings),
            links: links.merge_into(&mut warnings),
            authors: authors.merge_into(&mut warnings),
            phones: phones.merge_into(&mut warnings),
            creation_update_info: creation_update_info.merge_into(&mut warnings),
            servers: servers.merge_into(&mut warnings),
            locations: locations.merge_into(&mut warnings),
        };

        ScanOutcome { record, warnings }
    }

    /// One independent fetch with a freshly selected User-Agent.
    async fn page_body(&self, target: &str) -> Result<String> {
        let user_agent = self.useragent.select().to_string();
        let result = fetch_page(target, &user_agent, self.config.network.fetch_timeout).await?;
        Ok(result.body)
    }

    async fn run_emails(&self, target: &str) -> Settled<Vec<String>> {
        match self.page_body(target).await {
            Ok(body) => Settled::clean(emails::extract_emails(&body)),
            Err(e) => Settled::degraded(Vec::new(), "email extractor", &e),
        }
    }

    async fn run_links(&self, target: &str) -> Settled<Vec<Option<String>>> {
        match self.page_body(target).await {
            Ok(body) => Settled::clean(html::extract_links(&body)),
            Err(e) => Settled::degraded(Vec::new(), "link extractor", &e),
        }
    }

    async fn run_author(&self, target: &str) -> Settled<Option<String>> {
        match self.page_body(target).await {
            Ok(body) => Settled::clean(html::extract_author(&body)),
            Err(e) => Settled::degraded(None, "author extractor", &e),
        }
    }

    async fn run_phones(&self, target: &str) -> Settled<Vec<ParsedPhone>> {
        match self.page_body(target).await {
            Ok(body) => {
                let (parsed, dropped) = phones::extract_phones(&body);
                let mut settled = Settled::clean(parsed);
                if dropped > 0 {
                    settled.warning = Some(format!(
                        "phone extractor dropped {dropped} candidate(s) rejected by the number grammar"
                    ));
                }
                settled
            }
            Err(e) => Settled::degraded(Vec::new(), "phone extractor", &e),
        }
    }

    async fn run_locations(&self, target: &str) -> Settled<Vec<String>> {
        match self.page_body(target).await {
            Ok(body) => Settled::clean(html::extract_locations(&body)),
            Err(e) => Settled::degraded(Vec::new(), "location extractor", &e),
        }
    }
}

/// One operation's settled value plus an optional diagnostic.
#[derive(Debug)]
struct Settled<T> {
    value: T,
    warning: Option<String>,
}

impl<T> Settled<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn degraded(empty: T, operation: &str, error: &crate::errors::SiteReconError) -> Self {
        Self {
            value: empty,
            warning: Some(format!(
                "{operation} degraded to empty ({}: {error})",
                error.category()
            )),
        }
    }

    fn merge_into(self, warnings: &mut Vec<String>) -> T {
        if let Some(warning) = self.warning {
            warnings.push(warning);
        }
        self.value
    }
}

/// Settle a spawned registry operation: lookup errors and join errors both
/// degrade to the operation's empty value.
fn settle<T>(
    joined: std::result::Result<Result<T>, tokio::task::JoinError>,
    operation: &str,
    empty: impl FnOnce() -> T,
) -> Settled<T> {
    match joined {
        Ok(Ok(value)) => Settled::clean(value),
        Ok(Err(e)) => Settled::degraded(empty(), operation, &e),
        Err(join_error) => Settled {
            value: empty(),
            warning: Some(format!("{operation} task failed to settle: {join_error}")),
        },
    }
}
