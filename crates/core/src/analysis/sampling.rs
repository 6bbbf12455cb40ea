//! Polar resampling of the temperature grid
//!
//! Converts the rectangular grid into a storm-center-relative polar
//! sample set, keeping every pixel within `OUTER_RADIUS + SAMPLING_MARGIN`
//! of the center. The margin exists so later radius-keyed scans (annulus
//! averaging around the CW ring) still have samples beyond the analysis
//! outer radius.
//!
//! Rows are resampled in parallel; the per-row results are concatenated in
//! row order, so the set iterates in the same row-major order the serial
//! loop produced.

use rayon::prelude::*;

use crate::core_types::{RingDataSet, RingSample, SatelliteGrid};
use crate::error::AnalysisError;
use crate::geometry::distance_angle;

use super::{OUTER_RADIUS_KM, SAMPLING_MARGIN_KM};

/// Build the polar sample set for one analysis cycle.
///
/// # Errors
///
/// Propagates `InvalidCoordinate` from the great-circle solver when the
/// grid navigation holds malformed values.
pub fn sample_rings(
    grid: &SatelliteGrid,
    center_lat: f64,
    center_lon: f64,
) -> Result<RingDataSet, AnalysisError> {
    let cutoff = OUTER_RADIUS_KM + SAMPLING_MARGIN_KM;

    let rows: Vec<Vec<RingSample>> = (0..grid.rows())
        .into_par_iter()
        .map(|y| {
            let lat_row = grid.lat_row(y);
            let lon_row = grid.lon_row(y);
            let temp_row = grid.temperature_row(y);

            let mut row_samples = Vec::new();
            for x in 0..grid.cols() {
                let polar = distance_angle(lat_row[x], lon_row[x], center_lat, center_lon)?;
                if polar.distance_km <= cutoff {
                    row_samples.push(RingSample::new(
                        polar.distance_km,
                        polar.angle_deg,
                        temp_row[x],
                    ));
                }
            }
            Ok(row_samples)
        })
        .collect::<Result<_, AnalysisError>>()?;

    let samples: Vec<RingSample> = rows.into_iter().flatten().collect();
    tracing::debug!(samples = samples.len(), "polar sample set rebuilt");

    Ok(RingDataSet::from_samples(samples))
}
