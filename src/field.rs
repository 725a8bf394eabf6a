use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Element of the prime field Fp
/// Represents an integer modulo an arbitrary-precision modulus p > 1
#[derive(Clone, Debug, Eq)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

/// Panics unless both moduli are the same value. Mixing field contexts is a
/// caller bug, never a recoverable condition.
pub(crate) fn check_same_modulus(lhs: &BigUint, rhs: &BigUint) {
    if lhs != rhs {
        panic!("modulus mismatch: {} vs {}", lhs, rhs);
    }
}

impl FieldElement {
    /// Create a new field element, reducing the value into [0, modulus)
    pub fn new(value: BigUint, modulus: BigUint) -> Self {
        assert!(modulus > BigUint::one(), "modulus must be greater than 1");
        let value = &value % &modulus;
        FieldElement { value, modulus }
    }

    /// Create from u64
    pub fn from_u64(value: u64, modulus: BigUint) -> Self {
        Self::new(BigUint::from(value), modulus)
    }

    /// Create a field element with value 0
    pub fn zero(modulus: BigUint) -> Self {
        assert!(modulus > BigUint::one(), "modulus must be greater than 1");
        FieldElement {
            value: BigUint::zero(),
            modulus,
        }
    }

    /// Create a field element with value 1
    pub fn one(modulus: BigUint) -> Self {
        assert!(modulus > BigUint::one(), "modulus must be greater than 1");
        FieldElement {
            value: BigUint::one(),
            modulus,
        }
    }

    /// Sample a field element uniformly from [0, modulus).
    ///
    /// The generator is an external collaborator; pass `StdRng` for
    /// general-purpose randomness or `OsRng` for a cryptographically
    /// strong source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, modulus: &BigUint) -> Self {
        assert!(*modulus > BigUint::one(), "modulus must be greater than 1");
        FieldElement {
            value: rng.gen_biguint_below(modulus),
            modulus: modulus.clone(),
        }
    }

    /// Get the value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Get the modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Addition: (a + b) mod m
    pub fn add(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        FieldElement {
            value: (&self.value + &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Subtraction: (m + a - b) mod m, so the intermediate never goes negative
    pub fn sub(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        FieldElement {
            value: (&self.modulus + &self.value - &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Multiplication: (a * b) mod m
    pub fn mul(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        FieldElement {
            value: (&self.value * &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// Defined only when gcd(value, modulus) = 1; for a prime modulus that
    /// is every non-zero element. Panics otherwise (including for zero) —
    /// this is a contract violation, not a recoverable condition.
    pub fn inverse(&self) -> Self {
        let value = self.value.modinv(&self.modulus).unwrap_or_else(|| {
            panic!("no modular inverse for {} (mod {})", self.value, self.modulus)
        });
        FieldElement {
            value,
            modulus: self.modulus.clone(),
        }
    }

    /// Division: a * b^(-1). Panics if `other` has no inverse.
    pub fn div(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        self.mul(&other.inverse())
    }

    /// Additive inverse: (m - a) mod m, with neg(0) = 0
    pub fn neg(&self) -> Self {
        FieldElement {
            value: (&self.modulus - &self.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Check if the value is exactly 0
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.value == other.value
    }
}

// Implement standard operators for convenience
impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement::add(&self, &other)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(self, other)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &other)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &other)
    }
}

impl Div for &FieldElement {
    type Output = FieldElement;

    fn div(self, other: &FieldElement) -> FieldElement {
        FieldElement::div(self, other)
    }
}

impl Div for FieldElement {
    type Output = FieldElement;

    fn div(self, other: FieldElement) -> FieldElement {
        FieldElement::div(&self, &other)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_field_arithmetic() {
        // Work in F_7
        let p = BigUint::from(7u64);

        let a = FieldElement::from_u64(3, p.clone());
        let b = FieldElement::from_u64(5, p.clone());

        // 3 + 5 = 8 ≡ 1 (mod 7)
        let sum = &a + &b;
        assert_eq!(sum.value(), &BigUint::from(1u64));

        // 3 - 5 = -2 ≡ 5 (mod 7)
        let diff = &a - &b;
        assert_eq!(diff.value(), &BigUint::from(5u64));

        // 3 * 5 = 15 ≡ 1 (mod 7)
        let prod = &a * &b;
        assert_eq!(prod.value(), &BigUint::from(1u64));

        // 3^(-1) ≡ 5 (mod 7) because 3*5 = 15 ≡ 1 (mod 7)
        let inv = a.inverse();
        assert_eq!(inv.value(), &BigUint::from(5u64));

        // 3 / 5 = 3 * 5^(-1) = 3 * 3 = 9 ≡ 2 (mod 7)
        let div = &a / &b;
        assert_eq!(div.value(), &BigUint::from(2u64));
    }

    #[test]
    fn test_negation() {
        let p = BigUint::from(7u64);

        let a = FieldElement::from_u64(3, p.clone());
        assert_eq!((-&a).value(), &BigUint::from(4u64));

        // neg(0) = 0, not 7
        let zero = FieldElement::zero(p.clone());
        assert!((-&zero).is_zero());
    }

    #[test]
    fn test_new_reduces_value() {
        let p = BigUint::from(7u64);
        let a = FieldElement::from_u64(16, p.clone());
        assert_eq!(a.value(), &BigUint::from(2u64));
    }

    #[test]
    fn test_field_axioms_large_modulus() {
        // 381-bit BLS12-381 base field prime
        let p = BigUint::parse_bytes(
            b"1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
            16,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let a = FieldElement::random(&mut rng, &p);
        let b = FieldElement::random(&mut rng, &p);
        let c = FieldElement::random(&mut rng, &p);

        // Commutativity and associativity
        assert_eq!(FieldElement::add(&a, &b), FieldElement::add(&b, &a));
        assert_eq!(
            FieldElement::add(&FieldElement::add(&a, &b), &c),
            FieldElement::add(&a, &FieldElement::add(&b, &c))
        );
        assert_eq!(FieldElement::mul(&a, &b), FieldElement::mul(&b, &a));

        // a + (-a) = 0
        assert!(FieldElement::add(&a, &FieldElement::neg(&a)).is_zero());

        // a * a^(-1) = 1 for non-zero a
        if !a.is_zero() {
            assert_eq!(
                FieldElement::mul(&a, &a.inverse()).value(),
                &BigUint::one()
            );
        }

        // Distributivity
        assert_eq!(
            FieldElement::mul(&a, &FieldElement::add(&b, &c)),
            FieldElement::add(&FieldElement::mul(&a, &b), &FieldElement::mul(&a, &c))
        );
    }

    #[test]
    fn test_equality_compares_modulus_by_value() {
        // Independently constructed but structurally equal moduli must
        // compare equal (value comparison, not identity).
        let a = FieldElement::from_u64(3, BigUint::from(7u64));
        let b = FieldElement::from_u64(3, BigUint::from(7u64));
        assert_eq!(a, b);

        // Same value under a different modulus is a different element
        let c = FieldElement::from_u64(3, BigUint::from(11u64));
        assert_ne!(a, c);
    }

    #[test]
    #[should_panic(expected = "modulus mismatch")]
    fn test_mixed_moduli_panics() {
        let a = FieldElement::from_u64(3, BigUint::from(7u64));
        let b = FieldElement::from_u64(3, BigUint::from(11u64));
        let _ = FieldElement::add(&a, &b);
    }

    #[test]
    #[should_panic(expected = "no modular inverse")]
    fn test_inverse_of_zero_panics() {
        let zero = FieldElement::zero(BigUint::from(7u64));
        let _ = zero.inverse();
    }

    #[test]
    #[should_panic(expected = "modulus must be greater than 1")]
    fn test_trivial_modulus_rejected() {
        let _ = FieldElement::from_u64(0, BigUint::one());
    }

    #[test]
    fn test_display() {
        let a = FieldElement::from_u64(3, BigUint::from(7u64));
        assert_eq!(a.to_string(), "3 (mod 7)");
    }
}
