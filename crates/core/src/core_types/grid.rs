//! Satellite infrared brightness-temperature grid
//!
//! The grid is produced by the image-ingestion collaborator, already
//! centered on the storm-position estimate, and is only read by the
//! analysis core. Planes are dynamically sized row-major vectors rather
//! than fixed worst-case arrays; the constructor enforces the shape
//! invariants that the fixed arrays used to assume implicitly.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Navigated infrared image snapshot.
///
/// All three planes share the same `rows x cols` shape and the storm
/// center sits at pixel `[rows/2][cols/2]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteGrid {
    rows: usize,
    cols: usize,
    latitude: Vec<f64>,
    longitude: Vec<f64>,
    /// Brightness temperature (Kelvin)
    temperature: Vec<f64>,
    /// Acquisition date (julian day number)
    pub julian_date: i32,
    /// Acquisition time (HHMMSS)
    pub hhmmss_time: i32,
    /// Storm-center latitude estimate supplied by the positioning collaborator
    pub center_latitude: f64,
    /// Storm-center longitude estimate supplied by the positioning collaborator
    pub center_longitude: f64,
    /// Pixel resolution (km)
    pub resolution_km: f64,
}

impl SatelliteGrid {
    /// Build a grid from row-major planes.
    ///
    /// # Errors
    ///
    /// `GridTooSmall` when either dimension is below 2, `GridShape` when a
    /// plane's length differs from `rows * cols`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rows: usize,
        cols: usize,
        latitude: Vec<f64>,
        longitude: Vec<f64>,
        temperature: Vec<f64>,
        julian_date: i32,
        hhmmss_time: i32,
        center_latitude: f64,
        center_longitude: f64,
        resolution_km: f64,
    ) -> Result<Self, AnalysisError> {
        if rows < 2 || cols < 2 {
            return Err(AnalysisError::GridTooSmall { rows, cols });
        }
        let expected = rows * cols;
        for (plane, len) in [
            ("latitude", latitude.len()),
            ("longitude", longitude.len()),
            ("temperature", temperature.len()),
        ] {
            if len != expected {
                return Err(AnalysisError::GridShape {
                    plane,
                    expected,
                    got: len,
                });
            }
        }
        Ok(Self {
            rows,
            cols,
            latitude,
            longitude,
            temperature,
            julian_date,
            hhmmss_time,
            center_latitude,
            center_longitude,
            resolution_km,
        })
    }

    /// Row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Latitude (degrees) at pixel `(y, x)`
    #[inline]
    pub fn lat(&self, y: usize, x: usize) -> f64 {
        self.latitude[y * self.cols + x]
    }

    /// Longitude (degrees) at pixel `(y, x)`
    #[inline]
    pub fn lon(&self, y: usize, x: usize) -> f64 {
        self.longitude[y * self.cols + x]
    }

    /// Brightness temperature (Kelvin) at pixel `(y, x)`
    #[inline]
    pub fn temperature(&self, y: usize, x: usize) -> f64 {
        self.temperature[y * self.cols + x]
    }

    /// One full row of the latitude plane
    pub(crate) fn lat_row(&self, y: usize) -> &[f64] {
        &self.latitude[y * self.cols..(y + 1) * self.cols]
    }

    /// One full row of the longitude plane
    pub(crate) fn lon_row(&self, y: usize) -> &[f64] {
        &self.longitude[y * self.cols..(y + 1) * self.cols]
    }

    /// One full row of the temperature plane
    pub(crate) fn temperature_row(&self, y: usize) -> &[f64] {
        &self.temperature[y * self.cols..(y + 1) * self.cols]
    }

    /// Pixel coordinates of the grid center, `(y, x)`
    pub fn center_pixel(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    /// Latitude/longitude of the grid center pixel
    pub fn center_pixel_position(&self) -> (f64, f64) {
        let (cy, cx) = self.center_pixel();
        (self.lat(cy, cx), self.lon(cy, cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(rows: usize, cols: usize, value: f64) -> Vec<f64> {
        vec![value; rows * cols]
    }

    #[test]
    fn mismatched_plane_is_rejected() {
        let err = SatelliteGrid::new(
            4,
            4,
            plane(4, 4, 0.0),
            plane(4, 4, 0.0),
            vec![200.0; 15],
            2024230,
            120000,
            -15.0,
            140.0,
            4.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::GridShape {
                plane: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn single_row_grid_has_no_center_pixel() {
        let err = SatelliteGrid::new(
            1,
            4,
            plane(1, 4, 0.0),
            plane(1, 4, 0.0),
            plane(1, 4, 200.0),
            2024230,
            120000,
            -15.0,
            140.0,
            4.0,
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::GridTooSmall { .. }));
    }

    #[test]
    fn center_pixel_indexes_the_middle() {
        let grid = SatelliteGrid::new(
            5,
            7,
            plane(5, 7, 1.5),
            plane(5, 7, 2.5),
            plane(5, 7, 210.0),
            2024230,
            120000,
            1.5,
            2.5,
            4.0,
        )
        .unwrap();
        assert_eq!(grid.center_pixel(), (2, 3));
        assert_eq!(grid.temperature(2, 3), 210.0);
        assert_eq!(grid.center_pixel_position(), (1.5, 2.5));
    }
}
