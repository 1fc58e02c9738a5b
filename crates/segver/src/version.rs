use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::pattern::VersionPattern;
use crate::{VersionError, VersionSegment};

/// The version with no segments. It imposes no constraint when used as the
/// reference of [`find_max`](crate::find_max).
pub static EMPTY_VERSION: Version = Version::empty();

/// A version string broken into ordered segments.
///
/// The first segment is the most significant. Equality, hashing and ordering
/// all follow [`compare`], so `raw` does not take part in them: `1.0-RC` and
/// `1.0-rc` are equal versions with different raw strings.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    segments: Vec<VersionSegment>,
}

impl Version {
    pub fn new(raw: impl Into<String>, segments: Vec<VersionSegment>) -> Self {
        Self {
            raw: raw.into(),
            segments,
        }
    }

    pub const fn empty() -> Self {
        Self {
            raw: String::new(),
            segments: Vec::new(),
        }
    }

    /// Builds a version from segments alone, rendering `raw` from them.
    pub fn from_segments(segments: Vec<VersionSegment>) -> Self {
        let raw = segments
            .iter()
            .map(|s| match s {
                VersionSegment::Undefined => String::new(),
                s => s.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");

        Self { raw, segments }
    }

    /// Extracts a version from `input` with the given pattern.
    pub fn parse(input: &str, pattern: &VersionPattern) -> Result<Self, VersionError> {
        pattern.extract(input)
    }

    /// The matched input, or the substring of the pattern's `raw` group.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[VersionSegment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&VersionSegment> {
        self.segments.get(index)
    }

    pub fn into_segments(self) -> Vec<VersionSegment> {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn number_at(&self, index: usize) -> i64 {
        self.segment(index)
            .and_then(VersionSegment::as_number)
            .unwrap_or(0)
    }

    pub fn major(&self) -> i64 {
        self.number_at(0)
    }

    pub fn minor(&self) -> i64 {
        self.number_at(1)
    }

    pub fn patch(&self) -> i64 {
        self.number_at(2)
    }

    /// Renders `major.minor.patch`. The first of those three positions that is
    /// missing or not a number turns itself and every later position into `0`.
    pub fn core_version(&self) -> String {
        let mut core = [0i64; 3];
        for (slot, segment) in core.iter_mut().zip(&self.segments) {
            match segment {
                VersionSegment::Number(n) => *slot = *n,
                _ => break,
            }
        }
        let [major, minor, patch] = core;
        format!("{major}.{minor}.{patch}")
    }

    /// Number of segments that are not `Undefined`.
    pub fn defined_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_defined()).count()
    }

    /// Number of segments, optionally ignoring a run of `Undefined` segments
    /// at the end.
    pub fn segment_count(&self, include_trailing_undefined: bool) -> usize {
        if include_trailing_undefined {
            return self.segments.len();
        }
        self.segments
            .iter()
            .rposition(VersionSegment::is_defined)
            .map_or(0, |last| last + 1)
    }

    /// The segments joined by `|`, with `Undefined` shown as `-`.
    pub fn layout(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// [`compare`] as `-1`, `0` or `1`.
    pub fn compare_to(&self, other: &Self) -> i32 {
        match compare(self, other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compares two versions segment by segment.
///
/// Positions present in both versions are compared with
/// [`VersionSegment::compare_precedence`] and the first difference wins. When
/// one version is a prefix of the other, the longer one is greater.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.segments
        .iter()
        .zip(&b.segments)
        .map(|(x, y)| x.compare_precedence(y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.segments.len().cmp(&b.segments.len()))
}

/// Stable ascending sort; equal versions keep their input order.
pub fn sort(versions: &mut [Version]) {
    versions.sort_by(compare);
}

/// Stable ascending sort of arbitrary items by the version each one carries.
pub fn sort_by_version<T, F>(items: &mut [T], version: F)
where
    F: Fn(&T) -> &Version,
{
    items.sort_by(|a, b| compare(version(a), version(b)));
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.len().hash(state);
        for segment in &self.segments {
            segment.hash_precedence(state);
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use proptest_derive::Arbitrary;

    use super::*;
    use crate::VersionSegment::{Number, Text, Undefined};

    fn v(segments: Vec<VersionSegment>) -> Version {
        Version::from_segments(segments)
    }

    fn text(s: &str) -> VersionSegment {
        Text(s.to_string())
    }

    #[test]
    fn test_accessors() {
        let version = v(vec![Number(3), text("x"), Undefined]);
        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 0);
        assert_eq!(version.patch(), 0);
        assert_eq!(EMPTY_VERSION.major(), 0);
        assert!(EMPTY_VERSION.is_empty());
    }

    #[test]
    fn test_core_version() {
        assert_eq!(v(vec![Number(1), text("a"), Number(3)]).core_version(), "1.0.0");
        assert_eq!(v(vec![Number(1), Number(2), text("b")]).core_version(), "1.2.0");
        assert_eq!(
            v(vec![Number(1), Number(2), Number(3), Number(4)]).core_version(),
            "1.2.3"
        );
        assert_eq!(v(vec![Number(4), Undefined, Number(1)]).core_version(), "4.0.0");
        assert_eq!(v(vec![Number(7)]).core_version(), "7.0.0");
        assert_eq!(EMPTY_VERSION.core_version(), "0.0.0");
    }

    #[test]
    fn test_segment_counts() {
        let version = v(vec![Number(1), Undefined, Number(2), Undefined, Undefined]);
        assert_eq!(version.defined_segment_count(), 2);
        assert_eq!(version.segment_count(true), 5);
        assert_eq!(version.segment_count(false), 3);
        assert_eq!(v(vec![Undefined]).segment_count(false), 0);
    }

    #[test]
    fn test_layout_and_raw() {
        let version = v(vec![Number(2), Number(0), Undefined, text("beta"), Number(1)]);
        assert_eq!(version.layout(), "2|0|-|beta|1");
        assert_eq!(version.raw(), "2.0..beta.1");
        assert_eq!(version.to_string(), "2.0..beta.1");
    }

    #[test]
    fn test_length_breaks_ties() {
        let short = v(vec![Number(1), Number(2)]);
        let long = v(vec![Number(1), Number(2), Number(0)]);
        assert_eq!(compare(&short, &long), Ordering::Less);
        assert_eq!(long.compare_to(&short), 1);
        assert!(EMPTY_VERSION < short);
    }

    #[test]
    fn test_missing_suffix_wins() {
        let release = v(vec![Number(2), Number(0), Undefined, Undefined, Undefined]);
        let beta = v(vec![Number(2), Number(0), Undefined, text("beta"), Number(1)]);
        assert!(release > beta);
    }

    #[test]
    fn test_equality_ignores_raw_and_case() {
        let a = Version::new("1.0-RC", vec![Number(1), Number(0), text("RC")]);
        let b = Version::new("1.0-rc", vec![Number(1), Number(0), text("rc")]);
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut versions = vec![
            Version::new("1-B", vec![Number(1), text("B")]),
            Version::new("0", vec![Number(0)]),
            Version::new("1-b", vec![Number(1), text("b")]),
        ];
        sort(&mut versions);
        let raws: Vec<_> = versions.iter().map(Version::raw).collect();
        assert_eq!(raws, vec!["0", "1-B", "1-b"]);
    }

    #[test]
    fn test_sort_by_version() {
        let mut items = vec![
            ("new", v(vec![Number(2)])),
            ("old", v(vec![Number(1)])),
        ];
        sort_by_version(&mut items, |(_, version)| version);
        assert_eq!(items[0].0, "old");
    }

    #[derive(Debug, Clone, Arbitrary)]
    enum Seg {
        Number(#[proptest(strategy = "0i64..4")] i64),
        Text(#[proptest(regex = "[aAbB]{0,2}")] String),
        Undefined,
    }

    impl From<Seg> for VersionSegment {
        fn from(seg: Seg) -> Self {
            match seg {
                Seg::Number(n) => Number(n),
                Seg::Text(s) => Text(s),
                Seg::Undefined => Undefined,
            }
        }
    }

    fn version_strategy() -> impl Strategy<Value = Version> {
        prop::collection::vec(any::<Seg>(), 0..4)
            .prop_map(|segs| v(segs.into_iter().map(Into::into).collect()))
    }

    fn hash_of(version: &Version) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn prop_antisymmetric(a in version_strategy(), b in version_strategy()) {
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }

        #[test]
        fn prop_transitive(
            a in version_strategy(),
            b in version_strategy(),
            c in version_strategy(),
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a == b && b == c {
                prop_assert_eq!(&a, &c);
            }
        }

        #[test]
        fn prop_equal_versions_hash_alike(a in version_strategy(), b in version_strategy()) {
            if a == b {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
        }
    }
}
