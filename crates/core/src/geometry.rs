//! Great-circle distance and bearing between storm-relative points
//!
//! Chord-length great-circle solver used for every storm-relative
//! coordinate in the analysis. The bearing construction (arcsine with a
//! southern-hemisphere flip and a 360° wrap) and the truncated
//! degrees-to-radians constant are retained from the operational ADT so
//! that sector assignments reproduce historical output bit-for-bit.

use crate::error::AnalysisError;

/// Degrees-to-radians factor as used operationally (truncated, not π/180).
const RADIANS_CONSTANT: f64 = 0.017453292;

/// Mean Earth radius (km)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this chord distance (km) the bearing is undefined and reported as 0.
const ZERO_DISTANCE_KM: f64 = 0.0001;

/// Storm-relative polar position of a grid pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoord {
    /// Great-circle distance from the reference point (km)
    pub distance_km: f64,
    /// Bearing from the reference point (degrees, `[0, 360]`)
    pub angle_deg: f64,
}

/// Sign transfer `(x / y) * |y|`, i.e. `x` carrying the sign of `y`.
/// Equivalent to Fortran `SIGN(x, y)` for the non-negative `x` used here.
fn sign_transfer(x: f64, y: f64) -> f64 {
    (x / y) * y.abs()
}

fn check_coordinate(lat: f64, lon: f64) -> Result<(), AnalysisError> {
    if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 {
        return Err(AnalysisError::InvalidCoordinate { lat, lon });
    }
    Ok(())
}

/// Distance (km) and bearing (degrees) from `(start_lat, start_lon)` to
/// `(end_lat, end_lon)`.
///
/// The distance is the chord-length formulation
/// `2 R asin(|p_end - p_start| / 2)` on unit-sphere position vectors; the
/// bearing is resolved into `[0, 360]` from an arcsine of the longitude
/// difference, flipped through 180° when the end point lies south of the
/// start.
///
/// # Errors
///
/// `AnalysisError::InvalidCoordinate` when either pair is non-finite or the
/// latitude magnitude exceeds 90°.
pub fn distance_angle(
    end_lat: f64,
    end_lon: f64,
    start_lat: f64,
    start_lon: f64,
) -> Result<PolarCoord, AnalysisError> {
    check_coordinate(start_lat, start_lon)?;
    check_coordinate(end_lat, end_lon)?;

    let start_lat_rad = start_lat * RADIANS_CONSTANT;
    let start_lon_rad = start_lon * RADIANS_CONSTANT;
    let end_lat_rad = end_lat * RADIANS_CONSTANT;
    let end_lon_rad = end_lon * RADIANS_CONSTANT;

    // Unit-sphere position vector difference, component by component
    let coscos_diff = end_lat_rad.cos() * end_lon_rad.cos() - start_lat_rad.cos() * start_lon_rad.cos();
    let sincos_diff = end_lat_rad.cos() * end_lon_rad.sin() - start_lat_rad.cos() * start_lon_rad.sin();
    let latsin_diff = end_lat_rad.sin() - start_lat_rad.sin();

    let chord = (coscos_diff * coscos_diff
        + sincos_diff * sincos_diff
        + latsin_diff * latsin_diff)
        .sqrt();

    let distance_km = 2.0 * (chord / 2.0).asin() * EARTH_RADIUS_KM;

    let mut angle = if distance_km.abs() > ZERO_DISTANCE_KM {
        ((start_lon_rad - end_lon_rad).sin()
            * (std::f64::consts::FRAC_PI_2 - end_lat_rad).sin())
            / chord.sin()
    } else {
        0.0
    };
    if angle.abs() > 1.0 {
        angle = sign_transfer(1.0, angle);
    }
    let mut angle_deg = angle.asin() / RADIANS_CONSTANT;
    if end_lat_rad < start_lat_rad {
        angle_deg = 180.0 - angle_deg;
    }
    if angle_deg < 0.0 {
        angle_deg += 360.0;
    }

    Ok(PolarCoord {
        distance_km,
        angle_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_separation_has_zero_distance_and_angle() {
        let p = distance_angle(-15.0, 140.0, -15.0, 140.0).unwrap();
        assert!(p.distance_km.abs() < 1e-9);
        assert_eq!(p.angle_deg, 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let p = distance_angle(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(p.distance_km, 111.2, max_relative = 0.01);
    }

    #[test]
    fn bearing_quadrants_resolve_into_0_360() {
        // Due north of the start point
        let north = distance_angle(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(north.angle_deg, 0.0, epsilon = 0.1);

        // Due south flips through 180
        let south = distance_angle(-1.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(south.angle_deg, 180.0, epsilon = 0.1);

        // East of the start point: start_lon - end_lon < 0, sin < 0,
        // the wrap pushes the bearing into the upper half
        let east = distance_angle(0.0, 1.0, 0.0, 0.0).unwrap();
        assert!(east.angle_deg > 180.0, "east bearing {}", east.angle_deg);
    }

    #[test]
    fn malformed_latitude_is_rejected() {
        assert!(distance_angle(95.0, 0.0, 0.0, 0.0).is_err());
        assert!(distance_angle(0.0, 0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn sign_transfer_matches_fortran_sign() {
        assert_eq!(sign_transfer(1.0, -2.5), -1.0);
        assert_eq!(sign_transfer(1.0, 3.0), 1.0);
        // x keeps its magnitude and takes y's sign
        assert_eq!(sign_transfer(0.5, -7.0), -0.5);
        assert_eq!(sign_transfer(2.0, 0.25), 2.0);
    }
}
