use crate::CoreError;

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(CoreError::validation("x", None).code(), "VALIDATION_ERROR");
    assert_eq!(CoreError::conflict("x").code(), "CONFLICT");
    assert_eq!(CoreError::not_found("x").code(), "NOT_FOUND");
    assert_eq!(
        CoreError::invalid_credentials().code(),
        "INVALID_CREDENTIALS"
    );
    assert_eq!(CoreError::unauthorized("x").code(), "UNAUTHORIZED");
    assert_eq!(CoreError::forbidden("x").code(), "FORBIDDEN");
    assert_eq!(
        CoreError::storage_unavailable("x").code(),
        "STORAGE_UNAVAILABLE"
    );
}

#[test]
fn test_invalid_credentials_display_is_identical_everywhere() {
    // Raised from two different places, the rendered error must match
    // byte-for-byte so callers cannot tell which credential check failed.
    let from_unknown_user = CoreError::invalid_credentials();
    let from_wrong_password = CoreError::invalid_credentials();

    assert_eq!(
        from_unknown_user.to_string(),
        from_wrong_password.to_string()
    );
    assert_eq!(from_unknown_user.to_string(), "Invalid username or password");
}

#[test]
fn test_validation_error_carries_field() {
    let err = CoreError::validation("too short", Some("password"));

    match err {
        CoreError::Validation { message, field, .. } => {
            assert_eq!(message, "too short");
            assert_eq!(field.as_deref(), Some("password"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
