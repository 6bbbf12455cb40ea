//! Radius-of-maximum-wind estimation
//!
//! Walks outward from the grid center along the four cardinal pixel
//! directions until the brightness temperature drops to the critical
//! eyewall threshold, recenting on the boundary midpoints for a fixed
//! five passes (no early exit), then converts the final four boundary
//! pixels to great-circle distances and applies the empirical linear fit.
//!
//! A walk that runs past its bounding window means no eyewall is
//! resolvable in that direction; the whole estimate reports `None`, which
//! is an expected condition rather than an error.

use crate::core_types::{RmwEstimate, SatelliteGrid};
use crate::error::AnalysisError;
use crate::geometry::distance_angle;

/// Default critical eyewall temperature (Kelvin)
const CRITICAL_TEMP_K: f64 = 228.0;

/// Cloud temperatures at or above this (Kelvin) trigger the blended threshold
const WARM_CLOUD_THRESHOLD_K: f64 = 223.0;

/// Eyewall search window half-width along x (pixels)
const X_WINDOW: i64 = 320;

/// Eyewall search window half-width along y (pixels)
const Y_WINDOW: i64 = 240;

/// Recentering passes; always run to completion
const ITERATIONS: usize = 5;

/// RMW fit intercept (km)
const RMW_FIT_INTERCEPT: f64 = 2.8068;

/// RMW fit slope
const RMW_FIT_SLOPE: f64 = 0.8361;

#[inline]
fn temp_at(grid: &SatelliteGrid, y: i64, x: i64) -> f64 {
    grid.temperature(y as usize, x as usize)
}

/// Estimate the radius of maximum wind and eye size.
///
/// `eye_temp_k` and `cloud_temp_k` come from the eye/cloud stage of the
/// same cycle; cloud shields warmer than 223 K blend them into the
/// critical threshold as `(eye + 2 cloud) / 3`.
///
/// Returns `Ok(None)` when any directional walk exhausts its window or
/// the averaged boundary distance degenerates to zero.
///
/// # Errors
///
/// `InvalidCoordinate` when the navigation at a boundary pixel is
/// malformed.
pub fn estimate_rmw(
    grid: &SatelliteGrid,
    eye_temp_k: f64,
    cloud_temp_k: f64,
) -> Result<Option<RmwEstimate>, AnalysisError> {
    let mut cx = (grid.cols() / 2) as i64;
    let mut cy = (grid.rows() / 2) as i64;

    let x_max = (grid.cols() as i64).min(cx + X_WINDOW);
    let x_min = 0.max(cx - X_WINDOW);
    let y_max = (grid.rows() as i64).min(cy + Y_WINDOW);
    let y_min = 0.max(cy - Y_WINDOW);

    let critical_k = if cloud_temp_k >= WARM_CLOUD_THRESHOLD_K {
        (eye_temp_k + 2.0 * cloud_temp_k) / 3.0
    } else {
        CRITICAL_TEMP_K
    };
    tracing::debug!(critical_k, "eyewall search threshold");

    let mut x_lo = 0;
    let mut x_hi = 0;
    let mut y_lo = 0;
    let mut y_hi = 0;
    for _ in 0..ITERATIONS {
        let mut x = cx;
        while temp_at(grid, cy, x) > critical_k {
            x -= 1;
            if x == x_min {
                return Ok(None); // eyewall not found
            }
        }
        x_lo = x;

        x = cx;
        while temp_at(grid, cy, x) > critical_k {
            x += 1;
            if x == x_max {
                return Ok(None);
            }
        }
        x_hi = x;

        let mut y = cy;
        while temp_at(grid, y, cx) > critical_k {
            y -= 1;
            if y == y_min {
                return Ok(None);
            }
        }
        y_lo = y;

        y = cy;
        while temp_at(grid, y, cx) > critical_k {
            y += 1;
            if y == y_max {
                return Ok(None);
            }
        }
        y_hi = y;

        cx = (x_lo + x_hi) / 2;
        cy = (y_lo + y_hi) / 2;
    }

    let (cy_u, cx_u) = (cy as usize, cx as usize);
    let center_lat = grid.lat(cy_u, cx_u);
    let center_lon = grid.lon(cy_u, cx_u);

    let boundaries = [
        (cy_u, x_lo as usize),
        (cy_u, x_hi as usize),
        (y_lo as usize, cx_u),
        (y_hi as usize, cx_u),
    ];
    let mut distance_sum = 0.0;
    for (by, bx) in boundaries {
        let polar = distance_angle(grid.lat(by, bx), grid.lon(by, bx), center_lat, center_lon)?;
        distance_sum += polar.distance_km;
    }
    let averaged = distance_sum / 4.0;

    if averaged > 0.0 {
        Ok(Some(RmwEstimate {
            rmw_km: RMW_FIT_INTERCEPT + RMW_FIT_SLOPE * averaged,
            eye_size_km: averaged,
        }))
    } else {
        Ok(None)
    }
}
