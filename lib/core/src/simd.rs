// SIMD kernels for the vector-similarity engine.
// Only dot product and norm are needed: cosine = dot / (|a| * |b|).
// Lanes are widened to f64 before accumulating: squares of large f32
// components overflow f32 and squares of tiny ones underflow it.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

// Below this length the setup cost outweighs the wide lanes
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
const MIN_SIMD_LEN: usize = 16;

/// Dot product of two equal-length slices, accumulated in f64.
///
/// Callers check lengths; on mismatch only the common prefix is summed.
#[inline]
pub fn dot_product_simd(a: &[f32], b: &[f32]) -> f64 {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    #[cfg(target_arch = "x86_64")]
    {
        if len >= MIN_SIMD_LEN
            && is_x86_feature_detected!("avx2")
            && is_x86_feature_detected!("fma")
        {
            return unsafe { dot_product_avx2(a, b) };
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if len >= MIN_SIMD_LEN && std::arch::is_aarch64_feature_detected!("neon") {
            return unsafe { dot_product_neon(a, b) };
        }
    }

    dot_product_scalar(a, b)
}

/// Euclidean length of a vector
#[inline]
pub fn norm_simd(v: &[f32]) -> f64 {
    dot_product_simd(v, v).sqrt()
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
unsafe fn dot_product_avx2(a: &[f32], b: &[f32]) -> f64 {
    let len = a.len();
    let mut i = 0;
    let mut acc_lo = _mm256_setzero_pd();
    let mut acc_hi = _mm256_setzero_pd();

    while i + 8 <= len {
        let xa = _mm256_loadu_ps(a.as_ptr().add(i));
        let xb = _mm256_loadu_ps(b.as_ptr().add(i));
        acc_lo = _mm256_fmadd_pd(
            _mm256_cvtps_pd(_mm256_castps256_ps128(xa)),
            _mm256_cvtps_pd(_mm256_castps256_ps128(xb)),
            acc_lo,
        );
        acc_hi = _mm256_fmadd_pd(
            _mm256_cvtps_pd(_mm256_extractf128_ps(xa, 1)),
            _mm256_cvtps_pd(_mm256_extractf128_ps(xb, 1)),
            acc_hi,
        );
        i += 8;
    }

    let acc = _mm256_add_pd(acc_lo, acc_hi);
    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut sum: f64 = lanes.iter().sum();

    while i < len {
        sum += f64::from(a[i]) * f64::from(b[i]);
        i += 1;
    }
    sum
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn dot_product_neon(a: &[f32], b: &[f32]) -> f64 {
    let len = a.len();
    let mut i = 0;
    let mut acc_lo = vdupq_n_f64(0.0);
    let mut acc_hi = vdupq_n_f64(0.0);

    while i + 4 <= len {
        let xa = vld1q_f32(a.as_ptr().add(i));
        let xb = vld1q_f32(b.as_ptr().add(i));
        acc_lo = vfmaq_f64(acc_lo, vcvt_f64_f32(vget_low_f32(xa)), vcvt_f64_f32(vget_low_f32(xb)));
        acc_hi = vfmaq_f64(acc_hi, vcvt_high_f64_f32(xa), vcvt_high_f64_f32(xb));
        i += 4;
    }

    let mut sum = vaddvq_f64(vaddq_f64(acc_lo, acc_hi));
    while i < len {
        sum += f64::from(a[i]) * f64::from(b[i]);
        i += 1;
    }
    sum
}

/// Portable fallback with two accumulators
#[inline]
fn dot_product_scalar(a: &[f32], b: &[f32]) -> f64 {
    let mut even = 0.0f64;
    let mut odd = 0.0f64;

    let pairs_a = a.chunks_exact(2);
    let tail = pairs_a.remainder();
    for (pa, pb) in pairs_a.zip(b.chunks_exact(2)) {
        even += f64::from(pa[0]) * f64::from(pb[0]);
        odd += f64::from(pa[1]) * f64::from(pb[1]);
    }
    if let (Some(x), Some(y)) = (tail.first(), b.last()) {
        even += f64::from(*x) * f64::from(*y);
    }

    even + odd
}
