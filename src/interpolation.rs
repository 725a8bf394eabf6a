use crate::field::FieldElement;
use crate::polynomial::Polynomial;
use std::fmt;

/// A sample point (x, y), both coordinates under one modulus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Point {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Point { x, y }
    }
}

/// Errors for malformed interpolation input.
///
/// These cover externally sourced input only; arithmetic contract
/// violations (duplicate x-coordinates, mixed moduli inside the field
/// layer) abort via panic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    EmptyInput,
    ModulusMismatch,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::EmptyInput => {
                write!(f, "at least one point is required to interpolate")
            }
            InterpolationError::ModulusMismatch => {
                write!(f, "interpolation points do not share a single modulus")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

/// Lagrange interpolation: the unique polynomial of degree <= n-1 passing
/// through all n given points.
///
/// Builds the master polynomial M(X) = ∏ (X - x_i), then for each point
/// divides out its own root to get the basis numerator m_i, scales it by
/// y_i / m_i(x_i) and accumulates. O(n²) field operations.
///
/// Duplicate x-coordinates are not validated: they make m_i(x_i) zero and
/// surface as the fatal no-inverse panic from the field layer.
pub fn lagrange_interpolate(points: &[Point]) -> Result<Polynomial, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }

    let modulus = points[0].x.modulus().clone();
    for point in points {
        if point.x.modulus() != &modulus || point.y.modulus() != &modulus {
            return Err(InterpolationError::ModulusMismatch);
        }
    }

    let one = FieldElement::one(modulus.clone());

    // (X - x_i), the degree-1 factor contributed by point i
    let root_factor = |point: &Point| {
        Polynomial::new(modulus.clone(), vec![point.x.neg(), one.clone()])
    };

    let mut master = Polynomial::constant(one.clone());
    for point in points {
        master = master.mul(&root_factor(point));
    }

    let mut result = Polynomial::zero(modulus.clone());
    for point in points {
        // Exact by construction: (X - x_i) is one of master's factors,
        // so the remainder is zero and is not re-checked here.
        let basis = master.divide_by(&root_factor(point));
        let denominator = basis.evaluate_at(&point.x);

        let factor = Polynomial::constant(point.y.div(&denominator));
        result = result.add(&factor.mul(&basis));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn point(modulus: u64, x: u64, y: u64) -> Point {
        let m = BigUint::from(modulus);
        Point::new(
            FieldElement::from_u64(x, m.clone()),
            FieldElement::from_u64(y, m),
        )
    }

    #[test]
    fn test_two_points_line() {
        // Through (1, 3) and (2, 5) over F_11: f(X) = 1 + 2X
        let points = vec![point(11, 1, 3), point(11, 2, 5)];
        let poly = lagrange_interpolate(&points).unwrap();

        assert_eq!(poly.degree(), 1);
        assert_eq!(poly.coefficient_at(0).value(), &BigUint::from(1u64));
        assert_eq!(poly.coefficient_at(1).value(), &BigUint::from(2u64));
    }

    #[test]
    fn test_single_point_constant() {
        let points = vec![point(11, 4, 9)];
        let poly = lagrange_interpolate(&points).unwrap();

        assert_eq!(poly.degree(), 0);
        assert_eq!(poly.coefficient_at(0).value(), &BigUint::from(9u64));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            lagrange_interpolate(&[]),
            Err(InterpolationError::EmptyInput)
        );
    }

    #[test]
    fn test_mixed_moduli_rejected() {
        let points = vec![point(11, 1, 3), point(13, 2, 5)];
        assert_eq!(
            lagrange_interpolate(&points),
            Err(InterpolationError::ModulusMismatch)
        );
    }

    #[test]
    #[should_panic(expected = "no modular inverse")]
    fn test_duplicate_x_coordinates_panic() {
        let points = vec![point(11, 3, 1), point(11, 3, 5)];
        let _ = lagrange_interpolate(&points);
    }
}
