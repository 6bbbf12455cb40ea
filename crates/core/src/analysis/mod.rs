//! Storm-relative analysis pipeline
//!
//! One call to [`analyze`] runs a full cycle over one grid snapshot:
//! polar resampling, the eye/cloud temperature stages, and the RMW
//! eyewall search. Every buffer is scoped to the call, so cycles for
//! different storms can run concurrently without shared state.

pub mod eye_cloud;
pub mod rmw;
pub mod sampling;
pub mod spectral;
pub mod stats;

use crate::core_types::{AnalysisResult, SatelliteGrid};
use crate::error::AnalysisError;

pub use eye_cloud::{cw_ring, eye_temperature, region_statistics, RegionStats};
pub use rmw::estimate_rmw;
pub use sampling::sample_rings;
pub use spectral::harmonics;
pub use stats::{skew, SampleStats};

/// Outer edge of the cloud analysis region (km)
pub const OUTER_RADIUS_KM: f64 = 136.0;

/// Inner edge of the cloud region / outer edge of the eye disk (km)
pub const INNER_RADIUS_KM: f64 = 24.0;

/// Radial bin width for the CW ring profile (km)
pub const RING_WIDTH_KM: f64 = 4.0;

/// Eye temperature search radius (km)
pub const EYE_SEARCH_RADIUS_KM: f64 = 24.0;

/// Sampling margin beyond the outer radius (km), kept so radius-keyed
/// scans (the CW annulus) have samples past the analysis edge
pub const SAMPLING_MARGIN_KM: f64 = 80.0;

/// Number of angular sectors
pub const SECTOR_COUNT: usize = 24;

/// Angular sector width (degrees)
pub const SECTOR_WIDTH_DEG: f64 = 15.0;

/// Temperature histogram length
pub const HISTOGRAM_BINS: usize = 64;

/// ADT freezing-point offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.16;

/// Run one full analysis cycle over a grid snapshot.
///
/// The storm center is taken from the grid's center pixel (the ingestion
/// collaborator centers the image on the supplied storm estimate). The
/// returned record carries `None` / NaN fields for quantities that could
/// not be derived; see [`AnalysisResult`].
///
/// # Errors
///
/// Fatal only for malformed grid navigation (`InvalidCoordinate`).
pub fn analyze(grid: &SatelliteGrid) -> Result<AnalysisResult, AnalysisError> {
    let (center_lat, center_lon) = grid.center_pixel_position();
    tracing::debug!(center_lat, center_lon, "analysis cycle start");

    let rings = sample_rings(grid, center_lat, center_lon)?;

    let eye_temperature_k = eye_temperature(&rings);
    let cw = cw_ring(&rings);
    let stats = region_statistics(&rings, cw.map_or(0.0, |c| c.distance_km));

    // An absent eye temperature enters the RMW threshold blend as a
    // far-cold placeholder, pushing the walk threshold below any
    // plausible cloud top
    let rmw = estimate_rmw(
        grid,
        eye_temperature_k.unwrap_or(-99.0),
        stats.cloud_annulus_mean_k,
    )?;

    Ok(AnalysisResult {
        eye_temperature_k,
        cw_ring: cw,
        cloud_temperature_k: stats.cloud_annulus_mean_k,
        cloud2_temperature_k: stats.cloud2_mean_k,
        cloud_symmetry: stats.symmetry,
        eye_stdv: stats.eye_stdv,
        eye_harmonics: stats.eye_harmonics,
        cloud_harmonics: stats.cloud_harmonics,
        rmw,
    })
}
