//! Spectral harmonic counting of temperature histograms
//!
//! The temperature distribution of a region (eye disk or cloud band) is
//! reduced to a 64-bin histogram, transformed with a split-radix
//! decimation-in-frequency FFT, and the number of strict local maxima in
//! the low-frequency magnitude bins is reported as the harmonic count — a
//! proxy for banding and spiral structure in the cloud field.
//!
//! The scan range (bins 2..=31) and the strict-inequality tie-break are
//! one-directional by historical design; downstream intensity calibration
//! was tuned against this exact behavior, so neither may be "fixed".

use super::{HISTOGRAM_BINS, KELVIN_OFFSET};

/// Warmest histogram bin edge (Kelvin): 26 °C above the ADT freezing offset.
pub const HISTOGRAM_TOP_K: f64 = KELVIN_OFFSET + 26.0;

/// Histogram bin width (Kelvin), descending
pub const HISTOGRAM_STEP_K: f64 = 2.0;

/// First magnitude bin of the harmonic scan (0-based)
const SCAN_FIRST_BIN: usize = 2;

/// Last magnitude bin of the harmonic scan (0-based, inclusive)
const SCAN_LAST_BIN: usize = 31;

/// Transform rejection: input the FFT cannot process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransformError {
    /// Working length is not a power of two (or zero)
    LengthNotPowerOfTwo(usize),
}

/// In-place split-radix decimation-in-frequency FFT.
///
/// Forward transform (`e^{-i 2 pi nk / N}` convention) over paired real and
/// imaginary arrays: radix-4 L-shaped butterfly stages down to a final
/// radix-2 stage, then the bit-reversal permutation. Length must be a
/// power of two.
pub(crate) fn split_radix_fft(re: &mut [f64], im: &mut [f64]) -> Result<(), TransformError> {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    if n == 0 || !n.is_power_of_two() {
        return Err(TransformError::LengthNotPowerOfTwo(n));
    }
    if n == 1 {
        return Ok(());
    }
    let m = n.trailing_zeros() as usize;

    // L-shaped butterfly stages, block length n2 = n, n/2, .., 4
    let mut n2 = n << 1;
    for _k in 1..m {
        n2 >>= 1;
        let n4 = n2 >> 2;
        let e = 2.0 * std::f64::consts::PI / n2 as f64;
        for j in 0..n4 {
            let a = j as f64 * e;
            let a3 = 3.0 * a;
            let (ss1, cc1) = a.sin_cos();
            let (ss3, cc3) = a3.sin_cos();

            // The is/id walk visits exactly the blocks the split-radix
            // recursion leaves undone at this stage
            let mut is = j;
            let mut id = 2 * n2;
            while is < n {
                let mut i0 = is;
                while i0 < n {
                    let i1 = i0 + n4;
                    let i2 = i1 + n4;
                    let i3 = i2 + n4;

                    let mut r1 = re[i0] - re[i2];
                    re[i0] += re[i2];
                    let mut r2 = re[i1] - re[i3];
                    re[i1] += re[i3];
                    let s1 = im[i0] - im[i2];
                    im[i0] += im[i2];
                    let mut s2 = im[i1] - im[i3];
                    im[i1] += im[i3];

                    let s3 = r1 - s2;
                    r1 += s2;
                    s2 = r2 - s1;
                    r2 += s1;
                    re[i2] = r1 * cc1 - s2 * ss1;
                    im[i2] = -s2 * cc1 - r1 * ss1;
                    re[i3] = s3 * cc3 + r2 * ss3;
                    im[i3] = r2 * cc3 - s3 * ss3;

                    i0 += id;
                }
                is = 2 * id - n2 + j;
                id *= 4;
            }
        }
    }

    // Final radix-2 stage over the remaining pairs
    let mut is = 0;
    let mut id = 4;
    while is < n {
        let mut i0 = is;
        while i0 < n {
            let i1 = i0 + 1;
            let rt = re[i0];
            re[i0] = rt + re[i1];
            re[i1] = rt - re[i1];
            let it = im[i0];
            im[i0] = it + im[i1];
            im[i1] = it - im[i1];
            i0 += id;
        }
        is = 2 * id - 2;
        id *= 4;
    }

    // Bit-reversal permutation
    let mut j = 0;
    for i in 0..n - 1 {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut k = n >> 1;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }

    Ok(())
}

/// Overflow-protected complex modulus: rescale by the larger component
/// before squaring.
pub(crate) fn robust_modulus(re: f64, im: f64) -> f64 {
    let a = re.abs();
    let b = im.abs();
    if a > b {
        a * (1.0 + (b / a) * (b / a)).sqrt()
    } else if b == 0.0 {
        0.0
    } else {
        b * (1.0 + (a / b) * (a / b)).sqrt()
    }
}

/// Strict local maxima of `mag[i-1]` for `i` in `SCAN_FIRST_BIN..=SCAN_LAST_BIN`.
fn count_local_maxima(mag: &[f64]) -> u32 {
    let mut count = 0;
    let last = SCAN_LAST_BIN.min(mag.len().saturating_sub(1));
    for i in SCAN_FIRST_BIN..=last {
        if mag[i - 1] > mag[i - 2] && mag[i - 1] > mag[i] {
            count += 1;
        }
    }
    count
}

/// Harmonic count of a temperature histogram.
///
/// The histogram is copied into a zero-padded working buffer of the next
/// power-of-two length, transformed, and the strict local maxima of the
/// low-frequency magnitude spectrum are counted.
///
/// Returns `None` when the transform rejects the input or the DC-bin
/// magnitude is exactly zero (degenerate all-zero input).
pub fn harmonics(histogram: &[f64]) -> Option<u32> {
    if histogram.is_empty() {
        return None;
    }
    let n = histogram.len().next_power_of_two();
    let mut re = vec![0.0; n];
    re[..histogram.len()].copy_from_slice(histogram);
    let mut im = vec![0.0; n];

    split_radix_fft(&mut re, &mut im).ok()?;

    let mag: Vec<f64> = re
        .iter()
        .zip(&im)
        .map(|(&r, &i)| robust_modulus(r, i))
        .collect();

    if mag[0] == 0.0 {
        return None;
    }

    Some(count_local_maxima(&mag))
}

/// Fill the 64-bin descending temperature histogram used by both region
/// passes: bin `j` counts samples in `(top - 2(j+1), top - 2j]` Kelvin.
///
/// The last bin is never filled — its lower edge does not exist. Kept
/// from the operational binning loop so bin populations match exactly.
pub(crate) fn bin_temperatures<'a>(samples: impl Iterator<Item = &'a f64>) -> Vec<f64> {
    let mut counts = vec![0.0; HISTOGRAM_BINS];
    for &t in samples {
        for j in 0..HISTOGRAM_BINS - 1 {
            let upper = HISTOGRAM_TOP_K - HISTOGRAM_STEP_K * j as f64;
            let lower = HISTOGRAM_TOP_K - HISTOGRAM_STEP_K * (j + 1) as f64;
            if t <= upper && t > lower {
                counts[j] += 1.0;
            }
        }
    }
    counts
}
