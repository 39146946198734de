// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Fixed span per unit. Months and years are calendar-free
    /// (30 and 365 days) so resolution stays deterministic for a given
    /// `now`.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        match self {
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
            Self::Weeks => 604_800_000,
            Self::Months => 2_592_000_000,
            Self::Years => 31_536_000_000,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

/// Absolute range in epoch milliseconds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: i64,
    pub to: i64,
}

impl DateRange {
    #[must_use]
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Union envelope: the merged range covers both inputs. Ranges broaden
    /// on merge, never narrow.
    #[must_use]
    pub fn union(&self, other: &DateRange) -> DateRange {
        DateRange {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDate {
    pub num: u32,
    pub unit: TimeUnit,
}

impl RelativeDate {
    /// Resolves to the absolute range `[now - num * unit, now]`. Time is
    /// injected; nothing here reads the wall clock.
    #[must_use]
    pub fn to_date_range(&self, now_ms: i64) -> DateRange {
        let span = i64::from(self.num).saturating_mul(self.unit.as_millis());
        DateRange {
            from: now_ms.saturating_sub(span),
            to: now_ms,
        }
    }
}

/// Date field as written in a terse filter: either an absolute range or a
/// now-relative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DateSpec {
    #[serde(rename = "date-range")]
    Range(DateRange),
    #[serde(rename = "relative-date")]
    Relative(RelativeDate),
}

impl DateSpec {
    #[must_use]
    pub fn resolve(&self, now_ms: i64) -> DateRange {
        match self {
            Self::Range(range) => *range,
            Self::Relative(relative) => relative.to_date_range(now_ms),
        }
    }
}

/// Merge helper with option identity: one absent side yields the present
/// side, both absent stays absent.
#[must_use]
pub fn union_date_ranges(a: Option<&DateRange>, b: Option<&DateRange>) -> Option<DateRange> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (Some(a), None) => Some(*a),
        (None, Some(b)) => Some(*b),
        (None, None) => None,
    }
}
