use crate::MfError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Relative error of `actual` with respect to `expected`.
///
/// Falls back to the absolute error when `expected` is zero.
pub fn relative_error(actual: Real, expected: Real) -> Real {
    let diff = (actual - expected).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, or an error naming `what`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, MfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MfError::OutOfDomain { what, value: v })
    }
}

/// `n` evenly spaced samples over `[start, stop]`, endpoints included.
///
/// `n == 1` yields `[start]`, `n == 0` yields an empty grid.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            let mut out: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            // pin the endpoint against accumulated rounding
            out[n - 1] = stop;
            out
        }
    }
}
