//! Storm-relative polar samples
//!
//! A `RingDataSet` is the polar view of one grid snapshot: one sample per
//! pixel inside the sampling radius, rebuilt in full at the start of every
//! analysis cycle. Nothing is retained across cycles, so independent
//! storms can be analyzed concurrently from their own sets.

use serde::{Deserialize, Serialize};

/// One pixel expressed in storm-relative polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSample {
    /// Great-circle distance from the storm center (km)
    pub distance_km: f64,
    /// Bearing from the storm center (degrees, `[0, 360)`)
    pub angle_deg: f64,
    /// Brightness temperature (Kelvin)
    pub temperature_k: f64,
}

impl RingSample {
    /// Build a sample, collapsing a 360° bearing onto 0°.
    pub fn new(distance_km: f64, angle_deg: f64, temperature_k: f64) -> Self {
        let angle_deg = if angle_deg == 360.0 { 0.0 } else { angle_deg };
        Self {
            distance_km,
            angle_deg,
            temperature_k,
        }
    }
}

/// Ordered polar sample set for one analysis cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingDataSet {
    samples: Vec<RingSample>,
}

impl RingDataSet {
    /// Wrap an already-collected sample vector.
    pub(crate) fn from_samples(samples: Vec<RingSample>) -> Self {
        Self { samples }
    }

    /// Number of samples in the set
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no pixel fell inside the sampling radius
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate the samples in grid (row-major) order
    pub fn iter(&self) -> std::slice::Iter<'_, RingSample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a RingDataSet {
    type Item = &'a RingSample;
    type IntoIter = std::slice::Iter<'a, RingSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
