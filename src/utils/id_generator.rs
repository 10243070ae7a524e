//! Pitch identifier generation and validation.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Length of an encoded identifier.
pub const ID_LENGTH: usize = 12;

/// Generates a random pitch identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character identifier that can be used in a
/// `/startup/{id}` path as-is.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_pitch_id() -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate pitch identifier",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Checks that `id` has the shape of a generated identifier.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for identifiers of the wrong length or
/// with characters outside the URL-safe base64 alphabet.
pub fn validate_pitch_id(id: &str) -> Result<(), AppError> {
    if id.len() != ID_LENGTH {
        return Err(AppError::bad_request(
            "Pitch identifier must be 12 characters",
            json!({ "provided_length": id.len() }),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Pitch identifier contains invalid characters",
            json!({ "id": id }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_pitch_id_has_correct_length() {
        let id = generate_pitch_id().unwrap();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generated_ids_pass_validation() {
        for _ in 0..100 {
            let id = generate_pitch_id().unwrap();
            assert!(validate_pitch_id(&id).is_ok(), "rejected {id}");
        }
    }

    #[test]
    fn test_generate_pitch_id_produces_unique_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_pitch_id().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_validate_wrong_length() {
        let err = validate_pitch_id("abc").unwrap_err();
        assert!(err.to_string().contains("12 characters"));
    }

    #[test]
    fn test_validate_invalid_characters() {
        assert!(validate_pitch_id("abc/def.ghi!").is_err());
        assert!(validate_pitch_id("abc-def_GH12").is_ok());
    }
}
