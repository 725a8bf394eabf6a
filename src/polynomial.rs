use crate::field::{check_same_modulus, FieldElement};
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Dense polynomial with coefficients in Fp
/// Coefficients stored from lowest to highest degree: [a0, a1, a2, ...] = a0 + a1*X + a2*X^2 + ...
///
/// Degree convention: the zero polynomial has degree -1 (not -∞), and its
/// canonical form is a single zero coefficient. Trailing zero coefficients
/// are tolerated everywhere and removed by [`Polynomial::shrink`].
#[derive(Clone, Debug, Eq)]
pub struct Polynomial {
    modulus: BigUint,
    coeffs: Vec<FieldElement>,
}

impl Polynomial {
    /// Create a polynomial from explicit coefficients.
    /// Panics if any coefficient lives under a different modulus.
    pub fn new(modulus: BigUint, coeffs: Vec<FieldElement>) -> Self {
        for coeff in &coeffs {
            check_same_modulus(&modulus, coeff.modulus());
        }
        Polynomial { modulus, coeffs }
    }

    /// Create the zero polynomial (a single zero coefficient)
    pub fn zero(modulus: BigUint) -> Self {
        let coeffs = vec![FieldElement::zero(modulus.clone())];
        Polynomial { modulus, coeffs }
    }

    /// Create a degree-0 polynomial from a single coefficient
    pub fn constant(coeff: FieldElement) -> Self {
        Polynomial {
            modulus: coeff.modulus().clone(),
            coeffs: vec![coeff],
        }
    }

    /// Sample a random polynomial of exactly the requested degree: the top
    /// coefficient is re-rolled until non-zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, degree: usize, modulus: &BigUint) -> Self {
        let mut coeffs: Vec<FieldElement> = (0..=degree)
            .map(|_| FieldElement::random(rng, modulus))
            .collect();
        while coeffs[degree].is_zero() {
            coeffs[degree] = FieldElement::random(rng, modulus);
        }
        Polynomial {
            modulus: modulus.clone(),
            coeffs,
        }
    }

    /// Get the modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Get all stored coefficients (possibly with trailing zeros)
    pub fn coeffs(&self) -> &[FieldElement] {
        &self.coeffs
    }

    /// Degree of the polynomial: the highest index with a non-zero
    /// coefficient, or -1 for the zero polynomial.
    pub fn degree(&self) -> i32 {
        let mut d = self.coeffs.len() as i32 - 1;
        while d >= 0 && self.coeffs[d as usize].is_zero() {
            d -= 1;
        }
        d
    }

    /// Check if this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.degree() == -1
    }

    /// Coefficient at the given index, treating the sequence as infinite
    /// and zero-padded beyond its stored length.
    pub fn coefficient_at(&self, index: usize) -> FieldElement {
        match self.coeffs.get(index) {
            Some(coeff) => coeff.clone(),
            None => FieldElement::zero(self.modulus.clone()),
        }
    }

    /// Coefficient at `degree()`, or zero for the zero polynomial
    pub fn leading_coefficient(&self) -> FieldElement {
        let degree = self.degree();
        if degree == -1 {
            FieldElement::zero(self.modulus.clone())
        } else {
            self.coeffs[degree as usize].clone()
        }
    }

    /// Truncate trailing zero coefficients, always keeping at least one.
    /// Idempotent.
    pub fn shrink(&mut self) {
        let length = (self.degree() + 1).max(1) as usize;
        self.coeffs.truncate(length);
        if self.coeffs.is_empty() {
            self.coeffs.push(FieldElement::zero(self.modulus.clone()));
        }
    }

    /// Coefficient-wise additive inverse
    pub fn neg(&self) -> Self {
        let coeffs = self.coeffs.iter().map(|c| c.neg()).collect();
        Polynomial {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }

    /// Polynomial addition
    pub fn add(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        let max_len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| FieldElement::add(&self.coefficient_at(i), &other.coefficient_at(i)))
            .collect();
        let mut result = Polynomial {
            modulus: self.modulus.clone(),
            coeffs,
        };
        result.shrink();
        result
    }

    /// Polynomial subtraction
    pub fn sub(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);
        let max_len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| FieldElement::sub(&self.coefficient_at(i), &other.coefficient_at(i)))
            .collect();
        let mut result = Polynomial {
            modulus: self.modulus.clone(),
            coeffs,
        };
        result.shrink();
        result
    }

    /// Schoolbook polynomial multiplication.
    ///
    /// The zero-polynomial case is short-circuited: degree -1 would make the
    /// convolution bounds degenerate.
    pub fn mul(&self, other: &Self) -> Self {
        check_same_modulus(&self.modulus, &other.modulus);

        if self.is_zero() || other.is_zero() {
            return Polynomial::zero(self.modulus.clone());
        }

        let degree_a = self.degree() as usize;
        let degree_b = other.degree() as usize;

        let mut coeffs =
            vec![FieldElement::zero(self.modulus.clone()); degree_a + degree_b + 1];
        for i in 0..=degree_a {
            for j in 0..=degree_b {
                let item = FieldElement::mul(&self.coeffs[i], &other.coeffs[j]);
                coeffs[i + j] = FieldElement::add(&coeffs[i + j], &item);
            }
        }

        let mut result = Polynomial {
            modulus: self.modulus.clone(),
            coeffs,
        };
        result.shrink();
        result
    }

    /// Evaluate at a point using Horner's method
    pub fn evaluate_at(&self, x: &FieldElement) -> FieldElement {
        check_same_modulus(&self.modulus, x.modulus());
        let mut result = FieldElement::zero(self.modulus.clone());
        for i in (0..=self.degree()).rev() {
            result = FieldElement::add(&FieldElement::mul(&result, x), &self.coeffs[i as usize]);
        }
        result
    }

    /// Polynomial long division.
    /// Returns (quotient, remainder) such that self = quotient * divisor + remainder
    /// with degree(remainder) < degree(divisor). Panics on a zero divisor.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        check_same_modulus(&self.modulus, &divisor.modulus);

        if divisor.is_zero() {
            panic!("polynomial division by zero");
        }

        let n = self.degree();
        let m = divisor.degree();

        if n < m {
            return (Polynomial::zero(self.modulus.clone()), self.clone());
        }

        let n = n as usize;
        let m = m as usize;
        let q = n - m;

        let inv = divisor.leading_coefficient().inverse();

        let mut quotient_coeffs = vec![FieldElement::zero(self.modulus.clone()); q + 1];
        let mut remainder_coeffs = self.coeffs.clone();

        // Eliminate the working remainder from the top degree down. The
        // quotient coefficient for X^i cancels the remainder term at X^(i+m).
        for i in (0..=q).rev() {
            let coeff = FieldElement::mul(&remainder_coeffs[i + m], &inv);
            if !coeff.is_zero() {
                for j in 0..=m {
                    let item = FieldElement::mul(&coeff, &divisor.coefficient_at(j));
                    remainder_coeffs[i + j] = FieldElement::sub(&remainder_coeffs[i + j], &item);
                }
            }
            quotient_coeffs[i] = coeff;
        }

        let mut quotient = Polynomial {
            modulus: self.modulus.clone(),
            coeffs: quotient_coeffs,
        };
        let mut remainder = Polynomial {
            modulus: self.modulus.clone(),
            coeffs: remainder_coeffs,
        };
        quotient.shrink();
        remainder.shrink();

        (quotient, remainder)
    }

    /// Quotient of the Euclidean division
    pub fn divide_by(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).0
    }

    /// Remainder of the Euclidean division
    pub fn modulo(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        if self.modulus != other.modulus {
            return false;
        }
        let degree = self.degree();
        if degree != other.degree() {
            return false;
        }
        (0..=degree).all(|i| self.coeffs[i as usize] == other.coeffs[i as usize])
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0 (mod {})", self.modulus);
        }

        let mut terms = Vec::new();
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            let term = if i == 0 {
                format!("{}", coeff.value())
            } else if i == 1 {
                if coeff.value().is_one() {
                    "X".to_string()
                } else {
                    format!("{}*X", coeff.value())
                }
            } else if coeff.value().is_one() {
                format!("X^{}", i)
            } else {
                format!("{}*X^{}", coeff.value(), i)
            };

            terms.push(term);
        }

        write!(f, "{} (mod {})", terms.join(" + "), self.modulus)
    }
}
