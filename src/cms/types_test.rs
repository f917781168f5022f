use super::*;

// =============================================================================
// CmsError::error_code
// =============================================================================

#[test]
fn error_code_config_parse() {
    assert_eq!(CmsError::ConfigParse("bad".into()).error_code(), "E_CONFIG_PARSE");
}

#[test]
fn error_code_missing_config() {
    assert_eq!(CmsError::MissingConfig { var: "CMS_BASE_URL".into() }.error_code(), "E_MISSING_CONFIG");
}

#[test]
fn error_code_service_request() {
    assert_eq!(CmsError::ServiceRequest("timeout".into()).error_code(), "E_SERVICE_REQUEST");
}

#[test]
fn error_code_service_response() {
    let err = CmsError::ServiceResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_SERVICE_RESPONSE");
}

#[test]
fn error_code_response_parse() {
    assert_eq!(CmsError::ResponseParse("json".into()).error_code(), "E_RESPONSE_PARSE");
}

#[test]
fn error_code_fixture_read() {
    let err = CmsError::FixtureRead { path: "content/x.json".into(), message: "denied".into() };
    assert_eq!(err.error_code(), "E_FIXTURE_READ");
}

#[test]
fn error_code_unknown_collection() {
    assert_eq!(CmsError::UnknownCollection("x".into()).error_code(), "E_UNKNOWN_COLLECTION");
}

// =============================================================================
// CmsError::retryable
// =============================================================================

#[test]
fn retryable_service_request() {
    assert!(CmsError::ServiceRequest("conn refused".into()).retryable());
}

#[test]
fn retryable_service_response_429_and_5xx() {
    for status in [429, 500, 502, 503] {
        assert!(CmsError::ServiceResponse { status, body: String::new() }.retryable(), "{status}");
    }
}

#[test]
fn not_retryable_client_errors() {
    for status in [400, 401, 404] {
        assert!(!CmsError::ServiceResponse { status, body: String::new() }.retryable(), "{status}");
    }
}

#[test]
fn not_retryable_parse_or_config() {
    assert!(!CmsError::ResponseParse("bad".into()).retryable());
    assert!(!CmsError::MissingConfig { var: "X".into() }.retryable());
    assert!(!CmsError::UnknownCollection("x".into()).retryable());
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn unknown_collection_converts() {
    let err = CmsError::from(UnknownCollection("photos".into()));
    assert!(matches!(&err, CmsError::UnknownCollection(name) if name == "photos"));
    assert_eq!(err.to_string(), "unknown collection: photos");
}

#[test]
fn service_response_display_omits_body() {
    let err = CmsError::ServiceResponse { status: 503, body: "secret upstream detail".into() };
    assert_eq!(err.to_string(), "content service response error: status 503");
}
