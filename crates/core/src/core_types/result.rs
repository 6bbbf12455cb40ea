//! Analysis cycle output record
//!
//! One `AnalysisResult` is produced per cycle and handed to the
//! scene-classification, intensity-conversion and bulletin-formatting
//! collaborators. Quantities that the operational code marked with
//! negative sentinel values (`-99.0`, `-99.5`, `10000.0`) are `Option`
//! here, under exactly the same absence conditions; quantities whose
//! degenerate value was a propagated NaN stay plain floats.
//!
//! All temperatures are Kelvin. Display-unit conversion (°C) belongs to
//! the bulletin formatter.

use serde::{Deserialize, Serialize};

/// Coldest-warm ring: the radial band whose maximum temperature is the
/// coldest among ring maxima still above the 160 K floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CwRing {
    /// Ring maximum temperature (Kelvin)
    pub temperature_k: f64,
    /// Ring distance from the storm center (km)
    pub distance_km: f64,
}

/// Radius-of-maximum-wind estimate from the four-direction eyewall search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RmwEstimate {
    /// Radius of maximum wind (km), empirical fit on the eyewall distance
    pub rmw_km: f64,
    /// Mean eyewall boundary distance (km)
    pub eye_size_km: f64,
}

/// Full output of one storm-relative analysis cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Warmest temperature inside the eye search radius (Kelvin);
    /// `None` when no sample fell inside it
    pub eye_temperature_k: Option<f64>,
    /// Coldest-warm ring; `None` when no ring maximum exceeded the floor
    pub cw_ring: Option<CwRing>,
    /// Mean temperature of the annulus straddling the CW ring (Kelvin);
    /// NaN when the annulus held no samples
    pub cloud_temperature_k: f64,
    /// Mean of the 24 sector mean temperatures (Kelvin); NaN when any
    /// sector was empty
    pub cloud2_temperature_k: f64,
    /// Mean absolute temperature difference between opposite sectors
    /// (Kelvin); lower values indicate a more axisymmetric cloud shield
    pub cloud_symmetry: f64,
    /// Standard deviation of eye-disk temperatures (Kelvin)
    pub eye_stdv: f64,
    /// Harmonic count of the eye-disk temperature histogram;
    /// `None` on spectral failure
    pub eye_harmonics: Option<u32>,
    /// Harmonic count of the cloud-band temperature histogram;
    /// `None` on spectral failure
    pub cloud_harmonics: Option<u32>,
    /// Radius of maximum wind; `None` when the eyewall search ran out of
    /// its bounding window or degenerated
    pub rmw: Option<RmwEstimate>,
}
