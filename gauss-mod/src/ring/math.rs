//! Implementation of ring ops using modular arithmetic.

use crate::errors::SolverError;

use super::{gcd, mod_inverse};

use serde::{Deserialize, Serialize};

/// Represents the ring Z_m of residues modulo a (possibly composite) modulus.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be positive and fit into an `i64`. `Z_1` is the zero
    /// ring: every value normalizes to 0, and 0 is a unit there.
    pub fn try_with(modulus: u64) -> Result<Self, SolverError> {
        if modulus == 0 {
            return Err(SolverError::InvalidModulus(
                "Modulus must be positive, got 0".to_string(),
            ));
        }
        if modulus > i64::MAX as u64 {
            return Err(SolverError::InvalidModulus(format!(
                "Modulus {} does not fit into i64",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(12).unwrap();
    /// assert_eq!(ring.modulus(), 12);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a) as i128;
        let b_norm = self.normalize(b) as i128;

        ((a_norm + b_norm) % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm - b_norm)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(-2, 6), 8);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// `gcd(a, modulus)`; equals the modulus for `a ≡ 0`.
    pub fn gcd_with_modulus(&self, a: i64) -> i64 {
        gcd(self.normalize(a), self.modulus as i64)
    }

    /// Returns `true` if `a` is a unit of the ring.
    pub fn is_unit(&self, a: i64) -> bool {
        self.gcd_with_modulus(a) == 1
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`, so `0` has one
    /// only in `Z_1`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NoInverse` if the inverse does not exist.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7);
    /// assert!(ring.inv(2).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, SolverError> {
        mod_inverse(a, self.modulus as i64).ok_or_else(|| {
            SolverError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                self.normalize(a),
                self.modulus,
                self.gcd_with_modulus(a)
            ))
        })
    }

    /// Smallest `x` in `[0, modulus / g)` with `a·x ≡ b`, where `g = gcd(a, modulus)`.
    ///
    /// Returns `None` when `g` does not divide `b`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(12).unwrap();
    /// assert_eq!(ring.quotient(4, 8), Some(2));
    /// assert_eq!(ring.quotient(4, 6), None);
    /// ```
    pub fn quotient(&self, a: i64, b: i64) -> Option<i64> {
        let a = self.normalize(a);
        let b = self.normalize(b);
        let m = self.modulus as i64;
        let g = gcd(a, m);
        if g == 1 {
            return self.inv(a).ok().map(|inv| self.mul(inv, b));
        }
        if b % g != 0 {
            return None;
        }

        let reduced = m / g;
        let inv = mod_inverse(a / g, reduced)?;
        Some(((inv as i128 * (b / g) as i128) % reduced as i128) as i64)
    }

    /// Every `x` in `[0, modulus)` with `a·x ≡ b`, in ascending order.
    ///
    /// There are either none or exactly `gcd(a, modulus)` of them.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(4).unwrap();
    /// assert_eq!(ring.solve_linear(2, 2), vec![1, 3]);
    /// assert!(ring.solve_linear(2, 1).is_empty());
    /// ```
    pub fn solve_linear(&self, a: i64, b: i64) -> Vec<i64> {
        let Some(x0) = self.quotient(a, b) else {
            return Vec::new();
        };

        let m = self.modulus as i64;
        let g = self.gcd_with_modulus(a);
        let step = m / g;
        (0..g).map(|i| x0 + step * i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(11).is_ok());
        assert!(Ring::try_with(12).is_ok());
        assert!(Ring::try_with(1).is_ok());
        assert!(matches!(
            Ring::try_with(0),
            Err(SolverError::InvalidModulus(_))
        ));
        assert!(Ring::try_with(u64::MAX).is_err());
    }

    #[test]
    fn test_element_normalization() -> Result<(), SolverError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(16), 5);
        assert_eq!(ring.normalize(-6), 5);
        Ok(())
    }

    #[test]
    fn test_arithmetic() -> Result<(), SolverError> {
        let ring = Ring::try_with(12)?;
        assert_eq!(ring.add(7, 8), 3);
        assert_eq!(ring.sub(5, 8), 9);
        assert_eq!(ring.mul(5, 8), 4);
        assert_eq!(ring.neg(5), 7);
        assert_eq!(ring.neg(0), 0);
        Ok(())
    }

    #[test]
    fn test_large_modulus_does_not_overflow() -> Result<(), SolverError> {
        let m = i64::MAX as u64;
        let ring = Ring::try_with(m)?;
        assert_eq!(ring.add(i64::MAX - 1, 2), 1);
        assert_eq!(ring.mul(i64::MAX - 1, i64::MAX - 1), 1);
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), SolverError> {
        let ring = Ring::try_with(12)?;
        assert_eq!(ring.inv(5)?, 5);
        assert_eq!(ring.inv(7)?, 7);
        assert!(matches!(ring.inv(4), Err(SolverError::NoInverse(_))));
        assert!(matches!(ring.inv(0), Err(SolverError::NoInverse(_))));
        Ok(())
    }

    #[test]
    fn test_zero_ring() -> Result<(), SolverError> {
        let ring = Ring::try_with(1)?;
        assert_eq!(ring.normalize(-7), 0);
        assert_eq!(ring.add(3, 4), 0);
        assert_eq!(ring.mul(5, 5), 0);
        assert!(ring.is_unit(0));
        assert_eq!(ring.inv(0)?, 0);
        assert_eq!(ring.quotient(0, 0), Some(0));
        assert_eq!(ring.solve_linear(0, 0), vec![0]);
        Ok(())
    }

    #[test]
    fn test_quotient_with_unit_divisor() -> Result<(), SolverError> {
        let ring = Ring::try_with(12)?;
        // 5·x ≡ 3: x = 5^-1·3 = 15 ≡ 3
        assert_eq!(ring.quotient(5, 3), Some(3));
        assert_eq!(ring.quotient(-1, 4), Some(8));
        Ok(())
    }

    #[test]
    fn test_gcd_with_modulus() -> Result<(), SolverError> {
        let ring = Ring::try_with(12)?;
        assert_eq!(ring.gcd_with_modulus(0), 12);
        assert_eq!(ring.gcd_with_modulus(-4), 4);
        assert_eq!(ring.gcd_with_modulus(9), 3);
        assert!(ring.is_unit(-1));
        assert!(!ring.is_unit(6));
        Ok(())
    }

    #[test]
    fn test_solve_linear_with_zero_divisor() -> Result<(), SolverError> {
        let ring = Ring::try_with(12)?;
        assert_eq!(ring.solve_linear(4, 8), vec![2, 5, 8, 11]);
        assert_eq!(ring.solve_linear(5, 1), vec![5]);
        assert!(ring.solve_linear(4, 6).is_empty());
        assert_eq!(ring.solve_linear(0, 0).len(), 12);
        assert!(ring.solve_linear(0, 3).is_empty());
        Ok(())
    }

    #[quickcheck]
    fn prop_solve_linear_is_exact(m: u16, a: i64, b: i64) -> TestResult {
        let Ok(ring) = Ring::try_with(m as u64) else {
            return TestResult::discard();
        };

        let xs = ring.solve_linear(a, b);
        let expected = (0..m as i64)
            .filter(|&x| ring.mul(a, x) == ring.normalize(b))
            .collect::<Vec<_>>();
        TestResult::from_bool(xs == expected)
    }
}
