//! Data model for the storm-relative analysis core

pub mod grid;
pub mod result;
pub mod rings;

pub use grid::SatelliteGrid;
pub use result::{AnalysisResult, CwRing, RmwEstimate};
pub use rings::{RingDataSet, RingSample};
