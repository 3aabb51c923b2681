use super::*;

// =============================================================
// QueryRequest
// =============================================================

#[test]
fn request_serializes_query_field() {
    let body = serde_json::to_value(QueryRequest::new("Where is the nearest ZUS outlet?")).unwrap();
    assert_eq!(body, serde_json::json!({ "query": "Where is the nearest ZUS outlet?" }));
}

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_answer_with_sources() {
    let resp = decode_response(r#"{"answer":"We have tumblers and cups.","sources":["data/catalog.pdf"]}"#).unwrap();
    assert_eq!(resp.answer, "We have tumblers and cups.");
    assert_eq!(resp.sources, Some(vec!["data/catalog.pdf".to_owned()]));
}

#[test]
fn decode_missing_sources_is_none() {
    let resp = decode_response(r#"{"answer":"Open 8am to 10pm."}"#).unwrap();
    assert!(resp.sources.is_none());
}

#[test]
fn decode_null_sources_is_none() {
    let resp = decode_response(r#"{"answer":"ok","sources":null}"#).unwrap();
    assert!(resp.sources.is_none());
}

#[test]
fn decode_drops_null_source_entries() {
    let resp = decode_response(r#"{"answer":"We have tumblers.","sources":["data/a.pdf",null]}"#).unwrap();
    assert_eq!(resp.answer, "We have tumblers.");
    assert_eq!(resp.sources, Some(vec!["data/a.pdf".to_owned()]));
}

#[test]
fn decode_all_null_sources_is_empty_list() {
    let resp = decode_response(r#"{"answer":"ok","sources":[null,null]}"#).unwrap();
    assert_eq!(resp.sources, Some(Vec::new()));
}

#[test]
fn decode_missing_answer_is_error() {
    let err = decode_response(r#"{"sources":[]}"#).unwrap_err();
    assert!(matches!(err, QueryError::Decode(_)));
}

#[test]
fn decode_non_json_is_error() {
    let err = decode_response("<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, QueryError::Decode(_)));
}

// =============================================================
// check_status
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(304), Err(QueryError::Status { status: 304 }));
    assert_eq!(check_status(404), Err(QueryError::Status { status: 404 }));
    assert_eq!(check_status(500), Err(QueryError::Status { status: 500 }));
    assert_eq!(check_status(199), Err(QueryError::Status { status: 199 }));
}

// =============================================================
// QueryError
// =============================================================

#[test]
fn server_error_covers_5xx_only() {
    assert!(QueryError::Status { status: 500 }.is_server_error());
    assert!(QueryError::Status { status: 503 }.is_server_error());
    assert!(!QueryError::Status { status: 404 }.is_server_error());
    assert!(!QueryError::Timeout.is_server_error());
    assert!(!QueryError::Network("refused".into()).is_server_error());
}

#[test]
fn error_display_is_diagnostic() {
    assert_eq!(QueryError::Status { status: 502 }.to_string(), "HTTP 502");
    assert_eq!(QueryError::Timeout.to_string(), "request timed out");
}
