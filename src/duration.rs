//! Free-text duration parsing.
//!
//! Oracle responses and user edits carry durations as loose labels like
//! `"1h 30m"`, `"45m"` or `"90"`. For sorting those labels must collapse
//! to comparable minutes, with unparseable input ordered last.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel for durations that are missing or unparseable.
///
/// Sorts after every real duration the app will see.
pub const UNKNOWN_DURATION: u32 = 9999;

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*h").unwrap());
static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*m").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Converts a free-text duration label to minutes.
///
/// Hour (`<n>h`) and minute (`<n>m`) components both contribute when
/// present; a bare digit run is taken as minutes. Missing, empty and
/// unparseable input — including anything that computes to zero — yields
/// [`UNKNOWN_DURATION`].
#[must_use]
pub fn parse_duration(text: Option<&str>) -> u32 {
    let Some(text) = text else { return UNKNOWN_DURATION };
    let lower = text.to_lowercase();

    let mut total: u32 = 0;
    if let Some(cap) = HOURS.captures(&lower) {
        total = total.saturating_add(component(&cap).saturating_mul(60));
    }
    if let Some(cap) = MINUTES.captures(&lower) {
        total = total.saturating_add(component(&cap));
    }

    // No unit matched: a bare digit run is taken as minutes.
    if total == 0 {
        if let Some(m) = DIGITS.find(&lower) {
            total = m.as_str().parse().unwrap_or(0);
        }
    }

    if total == 0 {
        UNKNOWN_DURATION
    } else {
        total
    }
}

fn component(cap: &regex::Captures<'_>) -> u32 {
    cap[1].parse().unwrap_or(0)
}
