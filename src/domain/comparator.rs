//! SemVer precedence
//!
//! Precedence looks at `major`, `minor`, `patch` and the pre-release, in that
//! order, and stops at the first tier that differs. Build metadata is never
//! inspected.

use crate::domain::natural::compare_natural;
use crate::domain::version::Version;
use std::cmp::Ordering;

/// Orders two versions by precedence.
///
/// Total over valid versions and usable directly as a sort comparator:
///
/// ```
/// use semantic_versioning::{compare, Version};
///
/// let mut versions: Vec<Version> = ["1.0.0-rc.1", "1.0.0", "1.0.0-alpha"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// versions.sort_by(compare);
///
/// let sorted: Vec<&str> = versions.iter().map(Version::original).collect();
/// assert_eq!(sorted, ["1.0.0-alpha", "1.0.0-rc.1", "1.0.0"]);
/// ```
pub fn compare(left: &Version, right: &Version) -> Ordering {
    left.major()
        .cmp(&right.major())
        .then_with(|| left.minor().cmp(&right.minor()))
        .then_with(|| left.patch().cmp(&right.patch()))
        .then_with(|| compare_pre(left, right))
}

fn compare_pre(left: &Version, right: &Version) -> Ordering {
    match (left.pre().is_empty(), right.pre().is_empty()) {
        (true, true) => Ordering::Equal,
        // A release outranks any of its pre-releases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let left_ids = left.pre_identifiers();
            let right_ids = right.pre_identifiers();

            left_ids
                .iter()
                .zip(right_ids)
                .map(|(l, r)| compare_natural(l, r))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left_ids.len().cmp(&right_ids.len()))
        }
    }
}

/// An ordering over versions.
///
/// Lets generic code take the ordering as a parameter instead of hard-wiring
/// [`compare`].
pub trait Comparator {
    fn compare(&self, left: &Version, right: &Version) -> Ordering;

    /// Sorts `versions` in place, ascending under this ordering
    fn sort(&self, versions: &mut [Version]) {
        versions.sort_by(|left, right| self.compare(left, right));
    }
}

/// SemVer 2.0 precedence; stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemanticComparator;

impl SemanticComparator {
    pub fn new() -> Self {
        SemanticComparator
    }

    /// The ordering as a plain function value, for APIs such as
    /// `slice::sort_by` or `Iterator::max_by`.
    pub fn as_fn(&self) -> fn(&Version, &Version) -> Ordering {
        compare
    }
}

impl Comparator for SemanticComparator {
    fn compare(&self, left: &Version, right: &Version) -> Ordering {
        compare(left, right)
    }
}
