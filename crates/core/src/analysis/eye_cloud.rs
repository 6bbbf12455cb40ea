//! Eye and cloud-region temperature analysis
//!
//! Three sequential stages per cycle, all working from the polar sample
//! set: the eye temperature extremum, the coldest-warm (CW) ring search,
//! and the region statistics (histograms and harmonic counts, sector
//! means, symmetry, eye spread, annulus mean).
//!
//! Boundary conventions are uneven on purpose: the cloud band is inclusive
//! at both radii for histogram and sector passes, while eye-disk
//! membership is inclusive for the histogram and strict at the outer edge
//! for the spread list. The CW scan runs innermost-first and only a
//! strictly colder ring replaces the current pick. All of this is kept
//! exactly as in the operational algorithm, which downstream intensity
//! calibration was tuned against.

use crate::core_types::{CwRing, RingDataSet};

use super::spectral::{bin_temperatures, harmonics};
use super::stats::skew;
use super::{
    EYE_SEARCH_RADIUS_KM, INNER_RADIUS_KM, OUTER_RADIUS_KM, RING_WIDTH_KM, SECTOR_COUNT,
    SECTOR_WIDTH_DEG,
};

/// Annulus half-width around the CW ring distance (km)
const ANNULUS_HALF_WIDTH_KM: f64 = 40.0;

/// The annulus never starts inside this radius (km)
const ANNULUS_MIN_START_KM: f64 = 28.0;

/// The annulus never ends inside this radius (km)
const ANNULUS_MIN_END_KM: f64 = 108.0;

/// Ring maxima below this floor (Kelvin) are too cold to be the CW ring
const CW_FLOOR_K: f64 = 160.0;

/// Statistics of the eye disk and surrounding cloud shield.
#[derive(Debug, Clone, Copy)]
pub struct RegionStats {
    /// Mean temperature of the annulus around the CW ring (Kelvin);
    /// NaN when the annulus held no samples
    pub cloud_annulus_mean_k: f64,
    /// Mean of the per-sector mean temperatures (Kelvin)
    pub cloud2_mean_k: f64,
    /// Mean absolute opposite-sector temperature difference (Kelvin)
    pub symmetry: f64,
    /// Standard deviation of eye-disk temperatures (Kelvin)
    pub eye_stdv: f64,
    /// Harmonic count of the eye-disk histogram
    pub eye_harmonics: Option<u32>,
    /// Harmonic count of the cloud-band histogram
    pub cloud_harmonics: Option<u32>,
}

/// Warmest temperature within the eye search radius.
///
/// `None` when no sample lies inside the radius.
pub fn eye_temperature(rings: &RingDataSet) -> Option<f64> {
    let mut max_temp: Option<f64> = None;
    for s in rings {
        if s.distance_km <= EYE_SEARCH_RADIUS_KM
            && max_temp.is_none_or(|t| s.temperature_k > t)
        {
            max_temp = Some(s.temperature_k);
        }
    }
    max_temp
}

/// Locate the coldest-warm ring.
///
/// Samples in `[INNER_RADIUS, OUTER_RADIUS)` are binned into 4 km rings
/// and each ring's maximum temperature recorded. Rings are then scanned
/// innermost to outermost, keeping the first candidate strictly colder
/// than the running best and still above the 160 K floor, so ties break
/// toward the inner ring.
pub fn cw_ring(rings: &RingDataSet) -> Option<CwRing> {
    let ring_count = ((OUTER_RADIUS_KM - INNER_RADIUS_KM) / RING_WIDTH_KM) as usize;
    let mut ring_max: Vec<Option<f64>> = vec![None; ring_count];

    for s in rings {
        if s.distance_km >= INNER_RADIUS_KM && s.distance_km < OUTER_RADIUS_KM {
            // Truncate before the integer divide, as the original did
            let offset = (s.distance_km - INNER_RADIUS_KM) as usize;
            let ring = offset / RING_WIDTH_KM as usize;
            if ring_max[ring].is_none_or(|m| s.temperature_k > m) {
                ring_max[ring] = Some(s.temperature_k);
            }
        }
    }

    let mut best: Option<CwRing> = None;
    for (j, m) in ring_max.iter().enumerate() {
        if let Some(m) = *m {
            let colder = best.is_none_or(|b| m < b.temperature_k);
            if colder && m > CW_FLOOR_K {
                best = Some(CwRing {
                    temperature_k: m,
                    distance_km: j as f64 * RING_WIDTH_KM + INNER_RADIUS_KM,
                });
            }
        }
    }
    best
}

/// Harmonic counts, sector statistics, eye spread and annulus mean.
///
/// `cw_distance_km` positions the annulus; pass 0 when no CW ring was
/// found, which clamps the annulus to its 28–108 km floor.
pub fn region_statistics(rings: &RingDataSet, cw_distance_km: f64) -> RegionStats {
    // Histograms and harmonic counts, cloud band then eye disk.
    // Both regions are radius-inclusive at both bounds here.
    let cloud_hist = bin_temperatures(
        rings
            .iter()
            .filter(|s| s.distance_km >= INNER_RADIUS_KM && s.distance_km <= OUTER_RADIUS_KM)
            .map(|s| &s.temperature_k),
    );
    let eye_hist = bin_temperatures(
        rings
            .iter()
            .filter(|s| s.distance_km >= 0.0 && s.distance_km <= INNER_RADIUS_KM)
            .map(|s| &s.temperature_k),
    );
    let cloud_harmonics = harmonics(&cloud_hist);
    let eye_harmonics = harmonics(&eye_hist);
    tracing::debug!(?eye_harmonics, ?cloud_harmonics, "harmonic counts");

    // Sector collection over the cloud band, flat list over the eye disk
    let mut sectors: Vec<Vec<f64>> = vec![Vec::new(); SECTOR_COUNT];
    let mut eye_disk: Vec<f64> = Vec::new();
    for s in rings {
        if s.distance_km >= INNER_RADIUS_KM && s.distance_km <= OUTER_RADIUS_KM {
            for sector in 0..SECTOR_COUNT {
                let start = (sector as f64 * SECTOR_WIDTH_DEG).max(0.0);
                let end = ((sector + 1) as f64 * SECTOR_WIDTH_DEG).min(360.0);
                if s.angle_deg >= start && s.angle_deg < end {
                    sectors[sector].push(s.temperature_k);
                    break;
                }
            }
        }
        // Strict outer edge for the eye spread list
        if s.distance_km >= 0.0 && s.distance_km < INNER_RADIUS_KM {
            eye_disk.push(s.temperature_k);
        }
    }

    // Annulus mean around the CW ring distance; an empty annulus divides
    // zero by zero and the NaN propagates to the caller
    let annulus_start = ANNULUS_MIN_START_KM.max(cw_distance_km - ANNULUS_HALF_WIDTH_KM);
    let annulus_end = ANNULUS_MIN_END_KM.max(cw_distance_km + ANNULUS_HALF_WIDTH_KM);
    let mut annulus_sum = 0.0;
    let mut annulus_count = 0usize;
    for s in rings {
        if s.distance_km >= annulus_start && s.distance_km <= annulus_end {
            annulus_sum += s.temperature_k;
            annulus_count += 1;
        }
    }
    let cloud_annulus_mean_k = annulus_sum / annulus_count as f64;

    // Sector means, their mean ("cloud2"), and the opposite-sector
    // symmetry metric
    let sector_means: Vec<f64> = sectors.iter().map(|v| skew(v).mean).collect();
    let cloud2_mean_k = skew(&sector_means).mean;

    let half = SECTOR_COUNT / 2;
    let opposite_diffs: Vec<f64> = (0..half)
        .map(|i| (sector_means[i] - sector_means[i + half]).abs())
        .collect();
    let symmetry = skew(&opposite_diffs).mean;

    let eye_stdv = skew(&eye_disk).stdv;

    RegionStats {
        cloud_annulus_mean_k,
        cloud2_mean_k,
        symmetry,
        eye_stdv,
        eye_harmonics,
        cloud_harmonics,
    }
}
