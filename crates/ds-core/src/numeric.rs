use crate::DsError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, DsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(DsError::NotPositive { what, value: v })
    }
}

/// Finite and not below zero.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, DsError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(DsError::Negative { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert_eq!(err.what(), "test");
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1e-300, "m").is_ok());
        assert_eq!(
            ensure_positive(0.0, "m"),
            Err(DsError::NotPositive {
                what: "m",
                value: 0.0
            })
        );
        assert!(matches!(
            ensure_positive(Real::INFINITY, "m"),
            Err(DsError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "c"), Ok(0.0));
        assert!(matches!(
            ensure_non_negative(-1.0, "c"),
            Err(DsError::Negative { what: "c", .. })
        ));
    }
}
