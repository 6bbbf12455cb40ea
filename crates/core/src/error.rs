//! Error taxonomy for the analysis core
//!
//! Only genuinely fatal conditions are errors: malformed coordinates fed to
//! the great-circle solver and structurally invalid grids. Degenerate
//! statistics (empty regions) surface as NaN, and a failed eyewall or
//! spectral search surfaces as `None` on the corresponding result field.

use std::fmt;

/// Fatal failure of an analysis cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A latitude/longitude pair was non-finite or outside valid range.
    ///
    /// Propagated from the great-circle solver; aborts the calling cycle.
    InvalidCoordinate {
        /// Offending latitude (degrees)
        lat: f64,
        /// Offending longitude (degrees)
        lon: f64,
    },
    /// A grid plane does not match the declared row/column counts.
    GridShape {
        /// Plane name ("latitude", "longitude" or "temperature")
        plane: &'static str,
        /// Expected element count (`rows * cols`)
        expected: usize,
        /// Actual element count
        got: usize,
    },
    /// Grid too small to hold a center pixel at `[rows/2][cols/2]`.
    GridTooSmall {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { lat, lon } => {
                write!(f, "invalid coordinate pair: lat={lat} lon={lon}")
            }
            Self::GridShape {
                plane,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{plane} plane holds {got} values, grid dimensions require {expected}"
                )
            }
            Self::GridTooSmall { rows, cols } => {
                write!(f, "grid {rows}x{cols} too small for a center pixel")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_plane() {
        let err = AnalysisError::GridShape {
            plane: "temperature",
            expected: 100,
            got: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("temperature"), "message was: {msg}");
        assert!(msg.contains("99"), "message was: {msg}");
    }
}
