/// Truthiness as used by the per-device override merge: `false`, `0`, `NaN`
/// and the empty string count as "not set".
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for u32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// Picks the device override when it is present and truthy, the global default otherwise.
///
/// An explicit falsy override such as `precision_temp = 0` is therefore
/// indistinguishable from an absent one.
pub fn override_or<T: Truthy>(value: Option<T>, default: T) -> T {
    value.filter(Truthy::is_truthy).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_override_wins() {
        assert_eq!(override_or(Some(1u32), 2), 1);
        assert!(override_or(Some(true), false));
        assert_eq!(override_or(Some(18.5), 5.0), 18.5);
    }

    #[test]
    fn falsy_override_falls_back_to_default() {
        assert_eq!(override_or(Some(0u32), 2), 2);
        assert!(override_or(Some(false), true));
        assert_eq!(override_or(Some(0.0), 5.0), 5.0);
        assert_eq!(override_or(Some(f64::NAN), 5.0), 5.0);
        assert_eq!(override_or(Some(String::new()), "x".to_owned()), "x");
    }

    #[test]
    fn absent_override_falls_back_to_default() {
        assert_eq!(override_or(None, 24.0), 24.0);
    }
}
