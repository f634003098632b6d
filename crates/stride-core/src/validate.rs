// ABOUTME: Decode-at-the-edge validation of untrusted JSON payloads
// ABOUTME: Validate trait plus the decode entry point used by the API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Payloads coming off the wire are untrusted. [`decode`] is the single
//! trust boundary: it deserializes a raw [`Value`] into a typed payload
//! and then checks the structural invariants the type declares. Code past
//! this boundary can assume validated values.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ValidationError;

/// Structural invariants a decoded payload must satisfy.
///
/// The default implementation accepts everything; payloads with
/// constraints beyond field types (minimum lengths, cross-field rules)
/// override [`Validate::validate`].
pub trait Validate {
    /// Check invariants, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError::Invariant`] naming the offending
    /// field.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Decode an untrusted JSON value into a validated payload.
///
/// # Errors
///
/// Returns [`ValidationError::Shape`] when a required field is missing or
/// has the wrong type, or [`ValidationError::Invariant`] when the decoded
/// value violates a structural constraint.
pub fn decode<T>(value: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T =
        serde_json::from_value(value).map_err(|e| ValidationError::Shape(e.to_string()))?;
    decoded.validate()?;
    Ok(decoded)
}

/// Check that a sequence field carries at least `min` elements
///
/// # Errors
///
/// Returns a [`ValidationError::Invariant`] naming `field` when the
/// sequence is shorter than `min`.
pub fn require_min_len<T>(
    field: &str,
    items: &[T],
    min: usize,
) -> Result<(), ValidationError> {
    if items.len() < min {
        return Err(ValidationError::invariant(
            field,
            format!("expected at least {min} entries, got {}", items.len()),
        ));
    }
    Ok(())
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        for item in self {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Point {
        xs: Vec<u32>,
    }

    impl Validate for Point {
        fn validate(&self) -> Result<(), ValidationError> {
            require_min_len("xs", &self.xs, 2)
        }
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let result = decode::<Point>(serde_json::json!({}));
        assert!(matches!(result, Err(ValidationError::Shape(_))));
    }

    #[test]
    fn decode_rejects_wrong_primitive_types() {
        let result = decode::<Point>(serde_json::json!({"xs": "not an array"}));
        assert!(matches!(result, Err(ValidationError::Shape(_))));
    }

    #[test]
    fn decode_enforces_min_length() {
        let short = decode::<Point>(serde_json::json!({"xs": [1]}));
        assert!(matches!(short, Err(ValidationError::Invariant { .. })));

        let ok = decode::<Point>(serde_json::json!({"xs": [1, 2]}));
        assert!(ok.is_ok());
    }
}
