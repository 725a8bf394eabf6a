//! # Lagrange Interpolation over Prime Fields
//!
//! Exact, arbitrary-precision Lagrange interpolation: given (x, y) sample
//! points over a finite field, compute the unique minimal-degree polynomial
//! passing through all of them, together with the field-element and dense
//! polynomial arithmetic the construction is built from.
//!
//! ## Quick Start
//!
//! ```rust
//! use lagrange_interpolation::{lagrange_interpolate, FieldElement, Point};
//! use num_bigint::BigUint;
//!
//! let modulus = BigUint::from(11u64);
//! let points = vec![
//!     Point::new(
//!         FieldElement::from_u64(1, modulus.clone()),
//!         FieldElement::from_u64(3, modulus.clone()),
//!     ),
//!     Point::new(
//!         FieldElement::from_u64(2, modulus.clone()),
//!         FieldElement::from_u64(5, modulus.clone()),
//!     ),
//! ];
//!
//! // f(X) = 1 + 2X over F_11
//! let poly = lagrange_interpolate(&points).unwrap();
//! assert_eq!(poly.degree(), 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`field`] - Prime field arithmetic with an arbitrary-precision modulus
//! - [`polynomial`] - Dense polynomial operations over the field
//! - [`interpolation`] - Lagrange interpolation over a list of points
//! - [`serialization`] - Serialization and deserialization utilities

// Public modules
pub mod field;
pub mod interpolation;
pub mod polynomial;
pub mod serialization;

// Re-export commonly used types for convenience
pub use field::FieldElement;
pub use interpolation::{lagrange_interpolate, InterpolationError, Point};
pub use polynomial::Polynomial;

// Re-export serialization utilities
pub use serialization::{
    SerializableFieldElement,
    SerializablePolynomial,
    SerializationFormat,
};
