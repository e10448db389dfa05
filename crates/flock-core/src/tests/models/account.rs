use crate::Account;

#[test]
fn test_account_new() {
    let account = Account::new(
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        "alice@example.com".to_string(),
        None,
    );

    assert_eq!(account.username, "alice");
    assert_eq!(account.password_hash, "$argon2id$stub");
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.bio, None);
    assert!(!account.id.is_nil());
}

#[test]
fn test_account_new_generates_distinct_ids() {
    let a = Account::new(
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        "alice@example.com".to_string(),
        None,
    );
    let b = Account::new(
        "bob".to_string(),
        "$argon2id$stub".to_string(),
        "bob@example.com".to_string(),
        None,
    );

    assert_ne!(a.id, b.id);
}

#[test]
fn test_account_summary_carries_profile_fields() {
    let account = Account::new(
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        "alice@example.com".to_string(),
        Some("hello".to_string()),
    );

    let summary = account.summary();

    assert_eq!(summary.id, account.id);
    assert_eq!(summary.username, "alice");
    assert_eq!(summary.email, "alice@example.com");
    assert_eq!(summary.bio, Some("hello".to_string()));
    assert_eq!(summary.created_at, account.created_at);
}

#[test]
fn test_account_summary_distinguishes_empty_bio_from_absent() {
    let with_empty = Account::new(
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        "alice@example.com".to_string(),
        Some(String::new()),
    );
    let without = Account::new(
        "bob".to_string(),
        "$argon2id$stub".to_string(),
        "bob@example.com".to_string(),
        None,
    );

    assert_eq!(with_empty.summary().bio, Some(String::new()));
    assert_eq!(without.summary().bio, None);
}
