//! Equality and ordering for [`Version`].
//!
//! Everything is derived from two primitives, [`Version::equals`] and
//! [`Version::greater_than`]; the std comparison traits only delegate to them so
//! that `==`, `<`, `>` and sorting can never disagree with each other.

use super::version::Version;
use std::cmp::Ordering;

impl Version {
    /// Value equality.
    ///
    /// Identical raw text is always equal. Otherwise both versions must agree on
    /// validity, on all four numbers (absent segments count as zero, so `1.1`
    /// equals `1.1.0`) and on the special suffix.
    pub fn equals(&self, other: &Version) -> bool {
        if self.raw_text() == other.raw_text() {
            return true;
        }

        self.is_valid() == other.is_valid()
            && self.numeric_parts() == other.numeric_parts()
            && self.special() == other.special()
    }

    /// Whether `self` sorts strictly after `other`.
    ///
    /// An invalid version is never greater than anything, and any valid version
    /// is greater than an invalid one. Between valid versions the numeric
    /// segments both sides actually have are compared first; when those tie, the
    /// segment texts decide, where a plain number beats the same number followed
    /// by a suffix (`1.1` > `1.1alpha`).
    pub fn greater_than(&self, other: &Version) -> bool {
        if self.raw_text() == other.raw_text() {
            return false;
        }
        if !self.is_valid() {
            return false;
        }
        if !other.is_valid() {
            return true;
        }

        let shared = self.part_count().min(other.part_count());
        let lhs = self.numeric_parts();
        let rhs = other.numeric_parts();
        if let Some(index) = (0..shared).find(|&i| lhs[i] != rhs[i]) {
            return lhs[index] > rhs[index];
        }

        let lhs_texts = self.segment_texts();
        let rhs_texts = other.segment_texts();
        lhs_texts
            .iter()
            .zip(rhs_texts.iter())
            .map(|(lhs, rhs)| compare_segment_texts(lhs, rhs))
            .find(|ordering| ordering.is_ne())
            .is_some_and(Ordering::is_gt)
    }

    /// Three-way comparison built from [`equals`](Version::equals) and
    /// [`greater_than`](Version::greater_than).
    ///
    /// Unequal versions whose segment texts all tie (`1.0.0.0.0` against
    /// `1.0.0.0`) fall back to the special suffix, compared byte-wise with no
    /// suffix first, so that the result is always antisymmetric.
    pub fn compare(&self, other: &Version) -> Ordering {
        if self.equals(other) {
            Ordering::Equal
        } else if self.greater_than(other) {
            Ordering::Greater
        } else if other.greater_than(self) {
            Ordering::Less
        } else {
            self.special()
                .map(str::as_bytes)
                .cmp(&other.special().map(str::as_bytes))
                .then_with(|| self.raw_text().cmp(other.raw_text()))
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Compare one segment text of each side: leading numbers first, then a bare
/// number wins over one with a suffix, then suffixes compare byte-wise.
fn compare_segment_texts(lhs: &str, rhs: &str) -> Ordering {
    let (lhs_number, lhs_suffix) = split_segment_text(lhs);
    let (rhs_number, rhs_suffix) = split_segment_text(rhs);

    compare_digit_runs(lhs_number, rhs_number).then_with(|| match (lhs_suffix, rhs_suffix) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(lhs), Some(rhs)) => lhs.as_bytes().cmp(rhs.as_bytes()),
    })
}

/// Split into the leading digit run (None when the text does not start with a
/// digit) and the remainder starting at the first non-digit (None when all digits).
fn split_segment_text(text: &str) -> (Option<&str>, Option<&str>) {
    let boundary = text.find(|c: char| !c.is_ascii_digit());
    let digits = &text[..boundary.unwrap_or(text.len())];
    let number = (!digits.is_empty()).then_some(digits);
    (number, boundary.map(|index| &text[index..]))
}

/// Numeric comparison of two digit runs of any length; a missing run sorts
/// below every number.
fn compare_digit_runs(lhs: Option<&str>, rhs: Option<&str>) -> Ordering {
    match (lhs, rhs) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(lhs), Some(rhs)) => {
            let lhs = strip_leading_zeros(lhs);
            let rhs = strip_leading_zeros(rhs);
            lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
        }
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}
