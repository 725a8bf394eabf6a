/// Serialization and deserialization module for interoperability
/// Supports Base 10, Base 16 (hexadecimal), and Base64 formats
use crate::field::FieldElement;
use crate::polynomial::Polynomial;
use base64::Engine;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

// ==================== Serialization Format Enum ====================

/// Format for serializing numeric values
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    #[serde(rename = "base10")]
    #[default]
    Base10,
    #[serde(rename = "base16")]
    Base16,
    #[serde(rename = "base64")]
    Base64,
}

impl SerializationFormat {
    /// Convert BigUint to string in this format
    pub fn encode(&self, value: &BigUint) -> String {
        match self {
            SerializationFormat::Base10 => value.to_str_radix(10),
            SerializationFormat::Base16 => value.to_str_radix(16),
            SerializationFormat::Base64 => {
                base64::engine::general_purpose::STANDARD.encode(value.to_bytes_be())
            }
        }
    }

    /// Parse string in this format to BigUint
    pub fn decode(&self, s: &str) -> Result<BigUint, String> {
        match self {
            SerializationFormat::Base10 => BigUint::parse_bytes(s.as_bytes(), 10)
                .ok_or_else(|| format!("invalid base10 value: {}", s)),
            SerializationFormat::Base16 => BigUint::parse_bytes(s.as_bytes(), 16)
                .ok_or_else(|| format!("invalid base16 value: {}", s)),
            SerializationFormat::Base64 => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(s)
                    .map_err(|e| format!("Base64 decode error: {}", e))?;
                Ok(BigUint::from_bytes_be(&bytes))
            }
        }
    }
}

fn check_modulus(modulus: &BigUint) -> Result<(), String> {
    if *modulus <= BigUint::one() {
        return Err(format!("modulus must be greater than 1, got {}", modulus));
    }
    Ok(())
}

// ==================== Field Element Serialization ====================

/// Serializable representation of a field element (Fp)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SerializableFieldElement {
    pub value: String,
    pub modulus: String,
    #[serde(default)]
    pub format: SerializationFormat,
}

impl SerializableFieldElement {
    /// Convert a FieldElement to serializable form with specified format
    pub fn from_field_element(elem: &FieldElement, format: SerializationFormat) -> Self {
        SerializableFieldElement {
            value: format.encode(elem.value()),
            modulus: format.encode(elem.modulus()),
            format,
        }
    }

    /// Convert back to FieldElement
    pub fn to_field_element(&self) -> Result<FieldElement, String> {
        let value = self.format.decode(&self.value)?;
        let modulus = self.format.decode(&self.modulus)?;
        check_modulus(&modulus)?;
        Ok(FieldElement::new(value, modulus))
    }

    /// Create from strings with specified format
    pub fn new(value: &str, modulus: &str, format: SerializationFormat) -> Result<Self, String> {
        let value_big = format.decode(value)?;
        let modulus_big = format.decode(modulus)?;
        check_modulus(&modulus_big)?;
        let elem = FieldElement::new(value_big, modulus_big);
        Ok(Self::from_field_element(&elem, format))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {}", e))
    }
}

// ==================== Polynomial Serialization ====================

/// Serializable representation of a polynomial over Fp
/// Stores coefficients from lowest to highest degree: [a0, a1, a2, ...] = a0 + a1*X + a2*X^2 + ...
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SerializablePolynomial {
    pub coefficients: Vec<String>,
    pub modulus: String,
    pub degree: i32,
    #[serde(default)]
    pub format: SerializationFormat,
}

impl SerializablePolynomial {
    /// Convert a Polynomial to serializable form with specified format
    pub fn from_polynomial(poly: &Polynomial, format: SerializationFormat) -> Self {
        SerializablePolynomial {
            coefficients: poly
                .coeffs()
                .iter()
                .map(|c| format.encode(c.value()))
                .collect(),
            modulus: format.encode(poly.modulus()),
            degree: poly.degree(),
            format,
        }
    }

    /// Convert back to Polynomial
    pub fn to_polynomial(&self) -> Result<Polynomial, String> {
        let modulus = self.format.decode(&self.modulus)?;
        check_modulus(&modulus)?;

        let coeffs: Result<Vec<FieldElement>, String> = self
            .coefficients
            .iter()
            .map(|c| {
                let value = self.format.decode(c)?;
                Ok(FieldElement::new(value, modulus.clone()))
            })
            .collect();

        Ok(Polynomial::new(modulus, coeffs?))
    }

    /// Create from coefficient strings with specified format
    pub fn new(coeffs: &[&str], modulus: &str, format: SerializationFormat) -> Result<Self, String> {
        let modulus_big = format.decode(modulus)?;
        check_modulus(&modulus_big)?;

        let field_coeffs: Result<Vec<FieldElement>, String> = coeffs
            .iter()
            .map(|c| {
                let value = format.decode(c)?;
                Ok(FieldElement::new(value, modulus_big.clone()))
            })
            .collect();

        let poly = Polynomial::new(modulus_big, field_coeffs?);
        Ok(Self::from_polynomial(&poly, format))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {}", e))
    }
}
