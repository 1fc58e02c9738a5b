use crate::{Version, VersionSegment};

/// One argument of [`parse_literal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Number(i64),
    /// Becomes a number if it parses as one.
    Text(String),
    Numbers(Vec<i64>),
    /// Each entry becomes a number if it parses as one.
    Texts(Vec<String>),
}

impl Part {
    fn push_segments(self, segments: &mut Vec<VersionSegment>) {
        match self {
            Part::Number(n) => segments.push(VersionSegment::Number(n)),
            Part::Text(s) => segments.push(VersionSegment::detect(&s)),
            Part::Numbers(ns) => segments.extend(ns.into_iter().map(VersionSegment::Number)),
            Part::Texts(ss) => segments.extend(ss.iter().map(|s| VersionSegment::detect(s))),
        }
    }
}

/// Builds a version from values that are already known, without a pattern.
///
/// Sequences are flattened into consecutive segments. The resulting `raw` is
/// the segments joined by dots.
///
/// ```
/// use segver::{SIMPLE, parse_literal};
///
/// let literal = parse_literal([1, 2, 3]);
/// assert_eq!(literal, SIMPLE.extract("1.2.3").unwrap());
///
/// let split = parse_literal("1.2.3".split('.'));
/// assert_eq!(split, literal);
/// ```
pub fn parse_literal<I, P>(parts: I) -> Version
where
    I: IntoIterator<Item = P>,
    P: Into<Part>,
{
    let mut segments = Vec::new();
    for part in parts {
        part.into().push_segments(&mut segments);
    }
    Version::from_segments(segments)
}

/// Builds a version from a mix of numbers, strings and sequences of either.
///
/// ```
/// use segver::{VersionSegment, version};
///
/// let v = version![1, "hello", 3];
/// assert_eq!(v.segment(1), Some(&VersionSegment::Text("hello".to_string())));
/// assert_eq!(v.raw(), "1.hello.3");
/// ```
#[macro_export]
macro_rules! version {
    () => {
        $crate::Version::empty()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::parse_literal([$($crate::Part::from($part)),*])
    };
}

macro_rules! impl_number_part {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Part {
                fn from(n: $ty) -> Self {
                    Part::Number(i64::from(n))
                }
            }

            impl From<Vec<$ty>> for Part {
                fn from(ns: Vec<$ty>) -> Self {
                    Part::Numbers(ns.into_iter().map(i64::from).collect())
                }
            }

            impl From<&[$ty]> for Part {
                fn from(ns: &[$ty]) -> Self {
                    Part::Numbers(ns.iter().copied().map(i64::from).collect())
                }
            }
        )*
    };
}

impl_number_part!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Part {
    fn from(s: &str) -> Self {
        Part::Text(s.to_string())
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Part::Text(s)
    }
}

impl From<&String> for Part {
    fn from(s: &String) -> Self {
        Part::Text(s.clone())
    }
}

impl From<Vec<String>> for Part {
    fn from(ss: Vec<String>) -> Self {
        Part::Texts(ss)
    }
}

impl From<Vec<&str>> for Part {
    fn from(ss: Vec<&str>) -> Self {
        Part::Texts(ss.into_iter().map(ToString::to_string).collect())
    }
}

impl From<&[&str]> for Part {
    fn from(ss: &[&str]) -> Self {
        Part::Texts(ss.iter().map(ToString::to_string).collect())
    }
}
