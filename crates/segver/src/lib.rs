//! Parse, compare and select free-form version strings.
//!
//! A [`Version`] is an ordered list of [`VersionSegment`]s. The grammar of a
//! version is not fixed: callers describe it with a regex whose capture group
//! names say where each segment goes (see [`pattern`]).
//!
//! ```
//! use segver::{EMPTY_VERSION, VersionPattern, find_max, version};
//!
//! let pattern = VersionPattern::compile(
//!     r"^(?P<d1>\d+)\.(?P<d2>\d+)\.(?P<d3>\d+)(?:_(?P<d4>\d+))?-(?P<d5>\d+)$",
//! )
//! .unwrap();
//! let versions = ["1.8.0_372-3", "21.0.1-4", "21.0.2-1", "21.0.1-2"]
//!     .into_iter()
//!     .map(|v| pattern.extract(v))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let newest_21_0_1 = find_max(&versions, &version![21, 0, 1], true).unwrap();
//! assert_eq!(newest_21_0_1.raw(), "21.0.1-4");
//!
//! let newest = find_max(&versions, &EMPTY_VERSION, true).unwrap();
//! assert_eq!(newest.raw(), "21.0.2-1");
//! ```

mod error;
mod literal;
pub mod pattern;
mod segment;
mod select;
mod version;

pub use error::VersionError;
pub use literal::{Part, parse_literal};
pub use pattern::{SEMVER, SIMPLE, VersionPattern, parse, parse_or_panic};
pub use segment::VersionSegment;
pub use select::{find_max, find_max_by, is_eligible};
pub use version::{EMPTY_VERSION, Version, compare, sort, sort_by_version};
