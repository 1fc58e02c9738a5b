use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One position of a [`Version`](crate::Version).
///
/// Structural equality (`==`) compares the stored values exactly. Ordering
/// between segments follows [`VersionSegment::compare_precedence`], which is
/// what version comparison uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSegment {
    Number(i64),
    Text(String),
    /// An optional group that took no part in the match.
    Undefined,
}

/// How a segment takes part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rank<'a> {
    /// Numbers, with `Undefined` and empty text counting as zero.
    Numeric(i64),
    Label(&'a str),
}

impl VersionSegment {
    /// Builds a segment from a string, preferring a number when the whole
    /// string parses as one. The empty string gives `Undefined`.
    pub fn detect(value: &str) -> Self {
        if value.is_empty() {
            return Self::Undefined;
        }
        match value.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(value.to_string()),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> Rank<'_> {
        match self {
            Self::Number(n) => Rank::Numeric(*n),
            Self::Text(s) if !s.is_empty() => Rank::Label(s),
            _ => Rank::Numeric(0),
        }
    }

    /// Orders two segments occupying the same position.
    ///
    /// When either side is text the comparison is textual and ignores case.
    /// Numbers and `Undefined` have no text of their own and rank as the empty
    /// string, which beats any non-empty text: `2.0` outranks `2.0-beta`.
    /// Otherwise both sides are compared as numbers, `Undefined` being zero.
    pub fn compare_precedence(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Rank::Numeric(a), Rank::Numeric(b)) => a.cmp(&b),
            (Rank::Numeric(_), Rank::Label(_)) => Ordering::Greater,
            (Rank::Label(_), Rank::Numeric(_)) => Ordering::Less,
            (Rank::Label(a), Rank::Label(b)) => compare_text(a, b),
        }
    }

    /// Feeds the hasher with exactly what [`compare_precedence`] looks at, so
    /// segments that compare equal hash the same.
    ///
    /// [`compare_precedence`]: VersionSegment::compare_precedence
    pub(crate) fn hash_precedence<H: Hasher>(&self, state: &mut H) {
        match self.rank() {
            Rank::Numeric(n) => {
                0u8.hash(state);
                n.hash(state);
            }
            Rank::Label(s) => {
                1u8.hash(state);
                s.to_lowercase().hash(state);
            }
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl std::fmt::Display for VersionSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSegment::Number(n) => write!(f, "{n}"),
            VersionSegment::Text(s) => write!(f, "{s}"),
            VersionSegment::Undefined => write!(f, "-"),
        }
    }
}

impl From<i64> for VersionSegment {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for VersionSegment {
    fn from(value: &str) -> Self {
        Self::detect(value)
    }
}
