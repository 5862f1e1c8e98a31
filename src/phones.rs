//! Phone number extraction from raw page text.
//!
//! A regional-leaning pattern captures an optional country code plus three
//! numeric groups ("123-456-7890" shaped). Raw matches are deduplicated as
//! unordered capture tuples before parsing, so output order across distinct
//! numbers is not stable between runs. Each unique candidate is then handed
//! to the phone-number grammar with no assumed default region; candidates
//! the grammar rejects are dropped from the result and only counted for
//! diagnostics.

use std::collections::HashSet;

use regex::Regex;

use crate::record::ParsedPhone;

const PHONE_PATTERN: &str = r"\b(?:\+?(\d{1,3}))?[-. (]*(\d{3})[-. )]*(\d{3})[-. ]*(\d{4})\b";

/// One raw regex hit, keyed by its digit groups.
type RawCandidate = (Option<String>, String, String, String);

/// Collect unique raw phone candidates from `text`.
pub fn collect_candidates(text: &str) -> HashSet<RawCandidate> {
    let re = Regex::new(PHONE_PATTERN).expect("phone pattern is valid");
    re.captures_iter(text)
        .map(|cap| {
            (
                cap.get(1).map(|m| m.as_str().to_string()),
                cap[2].to_string(),
                cap[3].to_string(),
                cap[4].to_string(),
            )
        })
        .collect()
}

/// Parse unique candidates against the phone-number grammar.
///
/// Returns the successfully parsed numbers and the count of candidates the
/// grammar rejected (reported on the diagnostics side-channel, never in the
/// output document).
pub fn parse_candidates(candidates: &HashSet<RawCandidate>) -> (Vec<ParsedPhone>, usize) {
    let mut parsed = Vec::new();
    let mut dropped = 0usize;

    for candidate in candidates {
        match phonenumber::parse(None, candidate_text(candidate)) {
            Ok(number) => parsed.push(ParsedPhone {
                country_code: number.code().value(),
                national_number: number.national().value(),
                is_valid: phonenumber::is_valid(&number),
                e164: number
                    .format()
                    .mode(phonenumber::Mode::E164)
                    .to_string(),
            }),
            Err(_) => dropped += 1,
        }
    }

    (parsed, dropped)
}

/// Extract and parse phone numbers in one step.
pub fn extract_phones(text: &str) -> (Vec<ParsedPhone>, usize) {
    parse_candidates(&collect_candidates(text))
}

fn candidate_text(candidate: &RawCandidate) -> String {
    let (country, area, exchange, subscriber) = candidate;
    match country {
        Some(cc) => format!("+{cc} {area} {exchange} {subscriber}"),
        None => format!("{area} {exchange} {subscriber}"),
    }
}
