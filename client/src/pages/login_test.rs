use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  demo@demo.com ", " secret "),
        Ok(("demo@demo.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "x"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("demo@demo.com", ""), Err(MISSING_CREDENTIALS));
}
