use core::fmt;

/// Errors that can occur when building chord layout state.
///
/// Only construction can fail. Runtime paths (rendering, pad evaluation,
/// encoder handling) keep their invariants by clamping instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// The chord table has no entries.
    EmptyChordTable,
    /// The chord table cannot fill every grid row.
    ChordTableTooShort {
        /// Number of chords supplied.
        len: usize,
        /// Minimum number of chords required (the grid height).
        required: usize,
    },
    /// The chord table exceeds the per-chord voicing storage
    /// ([`MAX_CHORDS`](super::MAX_CHORDS)).
    ChordTableTooLong {
        /// Number of chords supplied.
        len: usize,
        /// Maximum number of chords supported.
        max: usize,
    },
    /// Root row count is above [`MAX_ROOT_ROWS`](super::MAX_ROOT_ROWS).
    InvalidRootRows(u8),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::EmptyChordTable => write!(f, "chord table is empty"),
            LayoutError::ChordTableTooShort { len, required } => {
                write!(f, "chord table has {} chords, at least {} required", len, required)
            }
            LayoutError::ChordTableTooLong { len, max } => {
                write!(f, "chord table has {} chords, at most {} supported", len, max)
            }
            LayoutError::InvalidRootRows(rows) => {
                write!(f, "invalid root row count {} (must be 0-4)", rows)
            }
        }
    }
}
