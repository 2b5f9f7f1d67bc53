//! Natural sort keys built from the integers embedded in file names.
//!
//! `rgb_2.10.jpg` yields `[2, 10]`, so `rgb_2.0.jpg` sorts before
//! `rgb_10.0.jpg` even though `"10" < "2"` as strings.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").unwrap());

/// One run of digits, stored without leading zeros so runs of any length
/// compare by numeric value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct DigitRun(String);

impl DigitRun {
    fn new(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_string())
    }
}

impl Ord for DigitRun {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitRun {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for DigitRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Ordered sequence of integers extracted from a file name.
///
/// Only ASCII `0-9` count as digits; other Unicode decimal digits are treated
/// like any other character. Ordering is element-wise on the integer values,
/// with no upper bound on their size. A key that is a strict prefix of
/// another sorts first, and the empty key sorts before every non-empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<DigitRun>);

impl SortKey {
    /// Extract every maximal run of ASCII digits, left to right.
    pub fn from_name(name: &str) -> Self {
        let runs = DIGIT_RUN
            .find_iter(name)
            .map(|m| DigitRun::new(m.as_str()))
            .collect();
        Self(runs)
    }

    /// True if the name contained no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, run) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{run}")?;
        }
        write!(f, "]")
    }
}

/// Stable sort by natural key. Equal keys keep their incoming order.
pub fn sort_naturally<T>(items: &mut [T], key: impl Fn(&T) -> &SortKey) {
    items.sort_by(|a, b| key(a).cmp(key(b)));
}
