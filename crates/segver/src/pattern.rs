//! Extraction of versions from strings with regular expressions.
//!
//! The capture groups of a pattern decide which segments a version has and
//! what kind of value each one holds:
//!
//! | group             | position | segment                                 |
//! |-------------------|----------|-----------------------------------------|
//! | `(?P<d3>...)`     | 3        | number, error if the text is not one    |
//! | `(?P<s3>...)`     | 3        | text, even when it looks like a number  |
//! | `(?P<x3>...)`     | 3        | number if it parses as one, else text   |
//! | `(...)`           | group index | number if it parses as one, else text |
//! | `(?P<raw>...)`    | -        | replaces the version's raw string       |
//!
//! Any character can prefix a position; only `d` and `s` change the kind.
//! Positions start at 1. Segments are taken for positions 1, 2, 3... until the
//! first position that no group declares, so a group at position 0 is never
//! read. Groups that take no part in a match, or capture nothing, produce
//! [`VersionSegment::Undefined`] whatever their kind.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Version, VersionError, VersionSegment};

/// One, two or three numbers separated by dots: `1`, `1.2`, `1.2.3`.
pub static SIMPLE: Lazy<VersionPattern> = Lazy::new(|| {
    VersionPattern::compile(r"^(?P<d1>\d+)(?:\.(?P<d2>\d+))?(?:\.(?P<d3>\d+))?$").unwrap()
});

/// Semantic versioning: `1.2.3`, `1.2.3-rc.1`, `1.2.3-rc.1+build.5`.
pub static SEMVER: Lazy<VersionPattern> = Lazy::new(|| {
    VersionPattern::compile(
        r"^(?P<d1>\d+)\.(?P<d2>\d+)\.(?P<d3>\d+)(?:-(?P<s4>[^+]+))?(?:\+(?P<s5>.*))?$",
    )
    .unwrap()
});

/// Name of the group that overrides [`Version::raw`].
pub const RAW_GROUP: &str = "raw";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Number,
    Text,
    Auto,
}

#[derive(Debug, Clone)]
struct Group {
    /// Capture index inside the regex.
    index: usize,
    /// Name used in errors.
    name: String,
    kind: SegmentKind,
}

impl Group {
    fn segment(&self, value: Option<&str>) -> Result<VersionSegment, VersionError> {
        let Some(value) = value else {
            return Ok(VersionSegment::Undefined);
        };
        match self.kind {
            SegmentKind::Number if value.is_empty() => Ok(VersionSegment::Undefined),
            SegmentKind::Number => value.parse::<i64>().map(VersionSegment::Number).map_err(|_| {
                VersionError::InvalidNumber {
                    group: self.name.clone(),
                    value: value.to_string(),
                }
            }),
            SegmentKind::Text if value.is_empty() => Ok(VersionSegment::Undefined),
            SegmentKind::Text => Ok(VersionSegment::Text(value.to_string())),
            SegmentKind::Auto => Ok(VersionSegment::detect(value)),
        }
    }
}

/// A compiled regex together with the segment layout its groups describe.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
    /// Groups forming the version, in position order starting at 1 with no
    /// gaps.
    groups: Vec<Group>,
    raw_group: Option<usize>,
}

impl VersionPattern {
    /// Resolves the segment position of every capture group of `regex`.
    pub fn new(regex: Regex) -> Result<Self, VersionError> {
        let mut positions = BTreeMap::new();
        let mut raw_group = None;

        for (index, name) in regex.capture_names().enumerate().skip(1) {
            let (position, group) = match name {
                Some(RAW_GROUP) => {
                    raw_group = Some(index);
                    continue;
                }
                Some(name) => {
                    let (kind, position) = parse_group_name(name)?;
                    let group = Group {
                        index,
                        name: name.to_string(),
                        kind,
                    };
                    (position, group)
                }
                None => {
                    let group = Group {
                        index,
                        name: format!("#{index}"),
                        kind: SegmentKind::Auto,
                    };
                    (index, group)
                }
            };

            if positions.contains_key(&position) {
                return Err(VersionError::InvalidGroupName { name: group.name });
            }
            positions.insert(position, group);
        }

        let declared = positions.len();
        let groups = positions
            .into_iter()
            .skip_while(|(position, _)| *position == 0)
            .enumerate()
            .take_while(|(i, (position, _))| i + 1 == *position)
            .map(|(_, (_, group))| group)
            .collect::<Vec<_>>();
        if groups.len() < declared {
            debug!(
                pattern = regex.as_str(),
                "only positions 1 to {} are contiguous, ignoring {} later groups",
                groups.len(),
                declared - groups.len()
            );
        }

        Ok(Self {
            regex,
            groups,
            raw_group,
        })
    }

    /// Compiles `pattern` and resolves its groups.
    pub fn compile(pattern: &str) -> Result<Self, VersionError> {
        Self::new(Regex::new(pattern)?)
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Number of segments every version extracted by this pattern has.
    pub fn segment_len(&self) -> usize {
        self.groups.len()
    }

    /// Matches `input` and builds the version out of the captures.
    ///
    /// Fails without a partial result when the pattern does not match or a
    /// number group captured non-empty text that is not an integer.
    pub fn extract(&self, input: &str) -> Result<Version, VersionError> {
        let Some(captures) = self.regex.captures(input) else {
            debug!(input, pattern = self.as_str(), "version did not match");
            return Err(VersionError::NoMatch {
                input: input.to_string(),
            });
        };

        let segments = self
            .groups
            .iter()
            .map(|group| group.segment(captures.get(group.index).map(|m| m.as_str())))
            .collect::<Result<Vec<_>, _>>()?;

        let raw = self
            .raw_group
            .and_then(|index| captures.get(index))
            .map_or(input, |m| m.as_str());

        let version = Version::new(raw, segments);
        trace!(input, layout = %version.layout(), "extracted version");
        Ok(version)
    }
}

impl TryFrom<Regex> for VersionPattern {
    type Error = VersionError;

    fn try_from(regex: Regex) -> Result<Self, Self::Error> {
        Self::new(regex)
    }
}

impl std::str::FromStr for VersionPattern {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

/// Splits a group name like `d12` into its kind and position.
fn parse_group_name(name: &str) -> Result<(SegmentKind, usize), VersionError> {
    let invalid = || VersionError::InvalidGroupName {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let prefix = chars.next().ok_or_else(invalid)?;
    let position = chars.as_str().parse::<usize>().map_err(|_| invalid())?;

    let kind = match prefix {
        'd' => SegmentKind::Number,
        's' => SegmentKind::Text,
        _ => SegmentKind::Auto,
    };
    Ok((kind, position))
}

/// Extracts a version from `input` with the given pattern.
pub fn parse(input: &str, pattern: &VersionPattern) -> Result<Version, VersionError> {
    pattern.extract(input)
}

/// Like [`parse`], but panics when the input does not fit the pattern.
///
/// Only for inputs already known to match, never for user input.
#[track_caller]
pub fn parse_or_panic(input: &str, pattern: &VersionPattern) -> Version {
    match pattern.extract(input) {
        Ok(version) => version,
        Err(err) => panic!("failed parsing the version {input}: {err}"),
    }
}
