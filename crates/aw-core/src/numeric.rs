use crate::AwError;

/// Pass `v` through if it is finite.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, AwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AwError::NonFinite { what, value: v })
    }
}

/// Require `v > 0` and finite.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, AwError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(AwError::OutOfRange {
            what,
            value: v,
            expected: "> 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        assert!(err.to_string().contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(0.0, "diameter").is_err());
        assert!(ensure_positive(-1.0, "diameter").is_err());
        assert!(ensure_positive(f64::INFINITY, "diameter").is_err());
        assert_eq!(ensure_positive(2.5, "diameter").unwrap(), 2.5);
    }

    proptest! {
        #[test]
        fn positive_values_pass_unchanged(v in 1e-9f64..1e9) {
            prop_assert_eq!(ensure_positive(v, "v").unwrap(), v);
        }
    }
}
