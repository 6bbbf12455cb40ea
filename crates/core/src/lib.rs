//! ADT Storm-Relative Analysis Core
//!
//! Estimates tropical-cyclone intensity parameters from a satellite
//! infrared brightness-temperature grid centered on the storm, following
//! the Advanced Dvorak Technique (ADT):
//!
//! - polar resampling of the grid around the storm center
//! - eye and cloud-region temperature statistics (CW ring, sector
//!   symmetry, annulus mean)
//! - spectral harmonic counts of the region temperature histograms via a
//!   split-radix FFT
//! - iterative radius-of-maximum-wind estimation from the eyewall
//!   boundary
//!
//! Image acquisition, scene classification, intensity conversion and
//! bulletin formatting are external collaborators; this crate is a pure
//! function of `(grid, center)` to `(statistics, harmonics, RMW)`.

pub mod analysis;
pub mod core_types;
pub mod error;
pub mod geometry;

pub use analysis::analyze;
pub use core_types::{AnalysisResult, CwRing, RingDataSet, RingSample, RmwEstimate, SatelliteGrid};
pub use error::AnalysisError;
pub use geometry::{distance_angle, PolarCoord};
