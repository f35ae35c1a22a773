use github_profile_viewer::error::{Result, ViewerError};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = ViewerError::NotFoundOrRateLimited;
    assert_eq!(format!("{}", error), "User not found or API limit reached");

    let error = ViewerError::RepositoriesUnavailable("API request failed with status 502".to_string());
    assert_eq!(
        format!("{}", error),
        "Repositories could not be loaded: API request failed with status 502"
    );

    let error = ViewerError::Config("timeout must be at least one second".to_string());
    assert_eq!(
        format!("{}", error),
        "Configuration error: timeout must be at least one second"
    );
}

#[test]
fn test_error_source() {
    let error = ViewerError::NotFoundOrRateLimited;
    assert!(error.source().is_none());

    let error: ViewerError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: ViewerError = io_error.into();
    assert!(matches!(error, ViewerError::Io(_)));
    assert!(!error.is_transport_failure());

    let error: ViewerError = url::Url::parse("::").unwrap_err().into();
    assert!(matches!(error, ViewerError::InvalidUrl(_)));
    assert!(error.is_transport_failure());
}

#[test]
fn test_api_answers_are_not_transport_failures() {
    assert!(!ViewerError::NotFoundOrRateLimited.is_transport_failure());
    assert!(!ViewerError::RepositoriesUnavailable(String::new()).is_transport_failure());
    assert!(!ViewerError::EmptyInput.is_transport_failure());
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<String> {
        Err(ViewerError::EmptyInput)
    }

    assert!(returns_error().is_err());
}
