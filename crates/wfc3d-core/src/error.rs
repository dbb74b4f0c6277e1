//! Error types for geometry decoding.

use std::fmt;

/// Errors arising when decoding geometry values from raw indices.
///
/// Every geometry type is a closed enum, so the only failure mode is a
/// host handing over an index outside the enum's range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A raw index does not name any value of the target type.
    InvalidIndex {
        /// Name of the type being decoded.
        kind: &'static str,
        /// The offending index.
        index: usize,
        /// Number of valid values (valid range is `0..count`).
        count: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { kind, index, count } => {
                write!(f, "invalid {kind} index {index} (expected 0..{count})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
