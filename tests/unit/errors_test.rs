use tabshell::types::errors::TabError;

#[test]
fn test_tab_error_display() {
    let err = TabError::NotFound("abc123".to_string());
    assert_eq!(err.to_string(), "Tab not found: abc123");
}

#[test]
fn test_tab_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound("x".to_string()));
    assert!(err.source().is_none());
}
