//! End-to-end validation of the storm-relative analysis cycle
//!
//! Synthetic-cyclone tests for the documented properties of the analysis
//! core: exact eye temperature recovery, CW ring selection, symmetry
//! behavior, harmonic counts, and RMW convergence, all through the public
//! [`adt_core::analyze`] entry point.

use adt_core::{analyze, SatelliteGrid};
use approx::assert_relative_eq;

const RES_KM: f64 = 4.0;
const DEG_PER_KM: f64 = 1.0 / 111.0;

/// Equatorial grid whose temperature at each pixel is `profile(r_km, dx_km, dy_km)`.
///
/// 121x121 at 4 km covers about +/-240 km, past the 216 km sampling
/// cutoff, with the storm center on the center pixel.
fn cyclone_grid(profile: impl Fn(f64, f64, f64) -> f64) -> SatelliteGrid {
    let (rows, cols) = (121usize, 121usize);
    let mut lat = Vec::with_capacity(rows * cols);
    let mut lon = Vec::with_capacity(rows * cols);
    let mut temp = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            let dy = (y as f64 - (rows / 2) as f64) * RES_KM;
            let dx = (x as f64 - (cols / 2) as f64) * RES_KM;
            lat.push(-dy * DEG_PER_KM);
            lon.push(dx * DEG_PER_KM);
            let r = (dx * dx + dy * dy).sqrt();
            temp.push(profile(r, dx, dy));
        }
    }
    SatelliteGrid::new(
        rows, cols, lat, lon, temp, 2024230, 120000, 0.0, 0.0, RES_KM,
    )
    .unwrap()
}

/// Warm 288 K eye inside 14 km, uniform 195 K shield everywhere else.
fn axisymmetric_cyclone() -> SatelliteGrid {
    cyclone_grid(|r, _, _| if r < 14.0 { 288.0 } else { 195.0 })
}

#[test]
fn eye_temperature_recovers_the_single_warmest_pixel_exactly() {
    // One pixel at 12 km east of center carries a unique 291.5 K; the eye
    // stage must report that value bit-for-bit
    let grid = cyclone_grid(|r, dx, dy| {
        if dx == 12.0 && dy == 0.0 {
            291.5
        } else if r < 14.0 {
            288.0
        } else {
            195.0
        }
    });
    let result = analyze(&grid).unwrap();
    assert_eq!(result.eye_temperature_k, Some(291.5));
}

#[test]
fn axisymmetric_cyclone_full_cycle() {
    let result = analyze(&axisymmetric_cyclone()).unwrap();

    assert_eq!(result.eye_temperature_k, Some(288.0));

    // Every ring maxes at 195 K; the innermost-first strict scan keeps
    // the 24 km ring
    let cw = result.cw_ring.unwrap();
    assert_eq!(cw.temperature_k, 195.0);
    assert_eq!(cw.distance_km, 24.0);

    // Annulus clamps to [28, 108] km, all at exactly 195 K
    assert_eq!(result.cloud_temperature_k, 195.0);
    assert_eq!(result.cloud2_temperature_k, 195.0);

    // Perfectly axisymmetric shield: opposite sectors agree exactly
    assert_eq!(result.cloud_symmetry, 0.0);

    // Eye disk mixes 288 K and 195 K pixels
    assert!(result.eye_stdv > 0.0);

    // Both region histograms are well populated
    assert!(result.eye_harmonics.is_some());
    assert!(result.cloud_harmonics.is_some());

    // Cloud shield at 195 K keeps the default 228 K threshold; the first
    // sub-threshold pixel outward lies at 16 km on each axis
    let rmw = result.rmw.unwrap();
    assert_relative_eq!(rmw.eye_size_km, 16.0, max_relative = 0.02);
    assert_relative_eq!(rmw.rmw_km, 2.8068 + 0.8361 * rmw.eye_size_km, epsilon = 1e-12);
}

#[test]
fn asymmetric_shield_raises_the_symmetry_metric() {
    // Warm the eastern half of the cloud band by 12 K
    let skewed = cyclone_grid(|r, dx, _| {
        if r < 14.0 {
            288.0
        } else if dx > 0.0 {
            207.0
        } else {
            195.0
        }
    });
    let sym = analyze(&skewed).unwrap().cloud_symmetry;
    let baseline = analyze(&axisymmetric_cyclone()).unwrap().cloud_symmetry;
    assert_eq!(baseline, 0.0);
    assert!(
        sym > 5.0,
        "half-disk warming of 12 K should move the metric well off zero, got {sym}"
    );
}

#[test]
fn cw_ring_picks_the_coldest_ring_above_the_floor() {
    // Shield at 195 K with a colder 170 K band at 60-80 km and an
    // unphysically cold 150 K band at 100-110 km (below the 160 K floor)
    let grid = cyclone_grid(|r, _, _| {
        if r < 14.0 {
            288.0
        } else if (60.0..80.0).contains(&r) {
            170.0
        } else if (100.0..110.0).contains(&r) {
            150.0
        } else {
            195.0
        }
    });
    let cw = analyze(&grid).unwrap().cw_ring.unwrap();
    assert_eq!(cw.temperature_k, 170.0);
    // First all-170 ring: the 60-64 km band still catches warmer pixels
    // only if a 195 K pixel falls inside it; the selected distance must
    // sit in the cold band either way
    assert!(
        (56.0..=80.0).contains(&cw.distance_km),
        "cw distance {}",
        cw.distance_km
    );
}

#[test]
fn storm_with_no_eyewall_reports_no_rmw() {
    // Uniform 280 K: warm-cloud override blends the threshold to exactly
    // 280 K, every walk stops on its first pixel, and the degenerate
    // zero distance suppresses the estimate
    let grid = cyclone_grid(|_, _, _| 280.0);
    let result = analyze(&grid).unwrap();
    assert_eq!(result.rmw, None);
}

#[test]
fn empty_regions_surface_as_absent_not_as_panic() {
    // 5x5 grid spread 60 km apart: the sample set is so sparse that some
    // angular sectors stay empty, and their NaN means must propagate
    // through cloud2 without panicking
    let (rows, cols) = (5usize, 5usize);
    let spread = 60.0;
    let mut lat = Vec::new();
    let mut lon = Vec::new();
    let mut temp = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let dy = (y as f64 - 2.0) * spread;
            let dx = (x as f64 - 2.0) * spread;
            lat.push(-dy * DEG_PER_KM);
            lon.push(dx * DEG_PER_KM);
            temp.push(210.0);
        }
    }
    let grid =
        SatelliteGrid::new(rows, cols, lat, lon, temp, 2024230, 120000, 0.0, 0.0, spread).unwrap();
    let result = analyze(&grid).unwrap();

    // Center pixel itself sits at distance zero, so the eye still sees it
    assert_eq!(result.eye_temperature_k, Some(210.0));
    // 60 and 120 km pixels exist: 60 km ones land in a ring
    assert!(result.cw_ring.is_some());
    // Annulus [28, 108] contains the 60 km and about-85 km diagonal
    // pixels, so the mean is finite here
    assert!(result.cloud_temperature_k.is_finite());
    // Sectors without pixels drive the sector-mean average to NaN
    assert!(result.cloud2_temperature_k.is_nan());
}
