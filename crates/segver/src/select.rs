use std::cmp::Ordering;

use tracing::trace;

use crate::version::compare;
use crate::{Version, VersionSegment};

/// Does `candidate` satisfy the constraint described by `reference`?
///
/// Only the positions the candidate itself has are checked. At each of them:
/// with `numbers_only` the candidate may not hold text, and where the
/// reference holds a value the candidate must hold the same number. A text
/// reference segment is never matched. `Undefined` reference positions and
/// positions past the end of the reference accept anything.
pub fn is_eligible(candidate: &Version, reference: &Version, numbers_only: bool) -> bool {
    candidate
        .segments()
        .iter()
        .enumerate()
        .all(|(i, segment)| {
            if numbers_only && segment.is_text() {
                return false;
            }
            match (reference.segment(i), segment) {
                (None | Some(VersionSegment::Undefined), _) => true,
                (Some(VersionSegment::Number(want)), VersionSegment::Number(got)) => want == got,
                _ => false,
            }
        })
}

/// Picks the greatest item whose version satisfies `reference`.
///
/// `version` gives access to the version carried by each item. On ties the
/// item seen first wins. Returns `None` when no item is eligible.
pub fn find_max_by<'a, T, I, F>(
    items: I,
    version: F,
    reference: &Version,
    numbers_only: bool,
) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &Version,
    T: 'a,
{
    let mut max: Option<&'a T> = None;
    for item in items {
        let candidate = version(item);
        if !is_eligible(candidate, reference, numbers_only) {
            trace!(candidate = candidate.raw(), "not eligible");
            continue;
        }
        let replace = match max {
            None => true,
            Some(current) => compare(candidate, version(current)) == Ordering::Greater,
        };
        if replace {
            max = Some(item);
        }
    }
    max
}

/// Picks the greatest version that satisfies `reference`.
///
/// Pass [`EMPTY_VERSION`](crate::EMPTY_VERSION) as the reference to get the
/// overall maximum, optionally restricted to versions without text through
/// `numbers_only`.
pub fn find_max<'a>(
    versions: impl IntoIterator<Item = &'a Version>,
    reference: &Version,
    numbers_only: bool,
) -> Option<&'a Version> {
    find_max_by(versions, |v| v, reference, numbers_only)
}
