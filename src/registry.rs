//! Domain registration lookup over WHOIS (TCP port 43).
//!
//! The target URL is reduced to a bare domain by naive string stripping,
//! then queried starting at the IANA root with referral following up to a
//! bounded depth. Two separately-failing operations share that derivation:
//! registration dates (creation / expiration / updated, normalized to
//! UTC ISO-8601) and the authoritative name-server list.

use std::time::Duration;

use anyhow::{anyhow, Result as AnyResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::NetworkConfig;
use crate::errors::{Result, SiteReconError};
use crate::record::{CreationUpdateInfo, DateValue};

/// WHOIS TCP port.
const WHOIS_PORT: u16 = 43;

/// Root server for domain queries; responses carry referrals to the
/// registry and registrar servers.
const WHOIS_ROOT: &str = "whois.iana.org";

/// Reduce a target URL to a bare domain by naive string stripping.
///
/// This is intentionally not a URL parser: scheme prefixes are removed
/// wherever they occur and the first `www` token is removed whether or not
/// a dot follows it. `www` appearing mid-string is therefore incorrectly
/// stripped as well; that boundary behavior is pinned by tests below.
pub fn derive_domain(url: &str) -> String {
    let stripped = url.replace("https://", "").replace("http://", "");
    let stripped = stripped.replacen("www", "", 1);
    stripped.trim_start_matches('.').to_string()
}

/// Perform a basic WHOIS query (over TCP 43) with a timeout.
///
/// Returns the raw textual response.
pub async fn simple_whois(server: &str, query: &str, to: Duration) -> AnyResult<String> {
    let mut stream = match timeout(to, TcpStream::connect((server, WHOIS_PORT))).await {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => return Err(anyhow!("connect error to {server}: {e}")),
        Err(_) => return Err(anyhow!("connect timeout to {server}")),
    };

    let line = format!("{query}\r\n");
    timeout(to, stream.write_all(line.as_bytes()))
        .await
        .map_err(|_| anyhow!("write timeout to {server}"))??;

    let mut buf = Vec::new();
    timeout(to, stream.read_to_end(&mut buf))
        .await
        .map_err(|_| anyhow!("read timeout from {server}"))??;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Query the WHOIS root for `domain` and follow referrals, accumulating
/// every response in the chain.
pub async fn whois_lookup(domain: &str, config: &NetworkConfig) -> Result<String> {
    // "whois: ..." (IANA), "refer: ..." and "Registrar WHOIS Server: ..."
    let re_refer =
        Regex::new(r"(?im)^\s*(?:refer|whois|Registrar WHOIS Server):\s*(\S+)\s*$").unwrap();

    let mut server = WHOIS_ROOT.to_string();
    let mut accumulated = String::new();

    for _ in 0..=config.max_whois_referrals {
        let resp = match simple_whois(&server, domain, config.whois_timeout).await {
            Ok(r) => r,
            // A dead referral is not fatal once something was collected.
            Err(e) if accumulated.is_empty() => {
                return Err(SiteReconError::whois_query(&server, domain, e.to_string()));
            }
            Err(_) => break,
        };

        accumulated.push_str(&resp);
        accumulated.push('\n');

        let next = re_refer
            .captures(&resp)
            .and_then(|c| c.get(1).map(|m| m.as_str().to_ascii_lowercase()));
        match next {
            Some(n) if n != server => server = n,
            _ => break,
        }
    }

    if accumulated.trim().is_empty() {
        return Err(SiteReconError::whois_parse(domain, "empty WHOIS response"));
    }
    Ok(accumulated)
}

/// Look up creation / expiration / updated dates for `domain`.
pub async fn creation_update(domain: &str, config: &NetworkConfig) -> Result<CreationUpdateInfo> {
    let text = whois_lookup(domain, config).await?;
    Ok(parse_registration_dates(&text))
}

/// Look up the authoritative name-server list for `domain`.
pub async fn name_servers(domain: &str, config: &NetworkConfig) -> Result<Vec<String>> {
    let text = whois_lookup(domain, config).await?;
    Ok(parse_name_servers(&text))
}

const CREATION_KEYS: &[&str] = &["creation date", "created", "registered on", "registration time"];
const EXPIRATION_KEYS: &[&str] = &[
    "registry expiry date",
    "expiration date",
    "expiry date",
    "expires",
    "paid-till",
];
const UPDATED_KEYS: &[&str] = &["updated date", "last updated", "last-update", "modified"];
const NAME_SERVER_KEYS: &[&str] = &["name server", "nserver"];

/// Extract and normalize the three registration-date fields from raw WHOIS
/// text. Tokens that do not parse as timestamps are dropped per-element.
pub fn parse_registration_dates(text: &str) -> CreationUpdateInfo {
    CreationUpdateInfo {
        creation_date: DateValue::from_values(normalized_dates(text, CREATION_KEYS)),
        expiration_date: DateValue::from_values(normalized_dates(text, EXPIRATION_KEYS)),
        updated_date: DateValue::from_values(normalized_dates(text, UPDATED_KEYS)),
    }
}

/// Extract the name-server list from raw WHOIS text, order of first
/// appearance, exact duplicates collapsed (chained responses repeat them).
pub fn parse_name_servers(text: &str) -> Vec<String> {
    let mut servers = Vec::new();
    for value in field_values(text, NAME_SERVER_KEYS) {
        let host = value.split_whitespace().next().unwrap_or("").to_string();
        if !host.is_empty() && !servers.contains(&host) {
            servers.push(host);
        }
    }
    servers
}

/// Values of `Key: value` lines whose key matches one of `keys`
/// case-insensitively, in document order.
fn field_values(text: &str, keys: &[&str]) -> Vec<String> {
    let mut values = Vec::new();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            if !value.is_empty() && keys.iter().any(|k| *k == key) {
                values.push(value.to_string());
            }
        }
    }
    values
}

fn normalized_dates(text: &str, keys: &[&str]) -> Vec<String> {
    field_values(text, keys)
        .iter()
        .filter_map(|raw| normalize_timestamp(raw))
        .collect()
}

/// Normalize one WHOIS date token to a UTC-qualified ISO-8601 string.
/// Registries disagree on formats; unrecognized tokens yield `None`.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).to_rfc3339());
    }

    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y.%m.%d %H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().to_rfc3339());
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc().to_rfc3339());
        }
    }

    None
}
