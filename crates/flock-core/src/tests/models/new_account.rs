use crate::NewAccount;

#[test]
fn test_new_account_debug_redacts_password() {
    let input = NewAccount {
        username: "alice".to_string(),
        password: "super-secret-password".to_string(),
        email: "alice@example.com".to_string(),
        bio: None,
    };

    let printed = format!("{input:?}");

    assert!(!printed.contains("super-secret-password"));
    assert!(printed.contains("<redacted>"));
    assert!(printed.contains("alice"));
}
