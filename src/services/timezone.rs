use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::utils::logging::log_system_event;

// Product choice of zones that together cover the major world regions.
// Kept in source order; the sorted view is built on first access.
const COMMON_TIMEZONES: [&str; 7] = [
    "Europe/Stockholm",
    "Asia/Tokyo",
    "America/Los_Angeles",
    "America/New_York",
    "Europe/London",
    "Europe/Berlin",
    "Australia/Sydney",
];

static TIMEZONES: Lazy<Vec<TimezoneId>> = Lazy::new(|| {
    let mut timezones: Vec<TimezoneId> = COMMON_TIMEZONES.iter().copied().map(TimezoneId).collect();
    timezones.sort_by(|a, b| collate(a.as_str(), b.as_str()));

    log_system_event(
        "Timezone list initialized",
        Some(&format!("{} entries", timezones.len())),
    );
    timezones
});

/// An IANA timezone identifier of the form `Area/Location`, e.g. `Europe/Stockholm`.
///
/// Identifiers are static literals; they are never looked up in a timezone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimezoneId(&'static str);

impl TimezoneId {
    /// The identifier as a plain string slice
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The region part before the first `/`, e.g. `America`
    pub fn area(&self) -> &'static str {
        self.0.split_once('/').map_or(self.0, |(area, _)| area)
    }

    /// Everything after the first `/`, e.g. `Los_Angeles`
    pub fn location(&self) -> &'static str {
        self.0.split_once('/').map_or("", |(_, location)| location)
    }
}

impl PartialOrd for TimezoneId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimezoneId {
    fn cmp(&self, other: &Self) -> Ordering {
        collate(self.0, other.0)
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for TimezoneId {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for TimezoneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TimezoneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordering used for the timezone list.
///
/// Stands in for locale collation. Every identifier is ASCII, where plain
/// string ordering gives the same result.
fn collate(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Returns the representative timezones, sorted ascending.
///
/// The list is built once on first call and shared for the lifetime of the
/// process. Every call returns the same slice.
pub fn get_timezones() -> &'static [TimezoneId] {
    TIMEZONES.as_slice()
}

/// Same sequence as [`get_timezones`], as plain string slices
pub fn timezone_names() -> impl Iterator<Item = &'static str> {
    get_timezones().iter().map(TimezoneId::as_str)
}
