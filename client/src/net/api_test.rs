use super::*;

#[test]
fn from_config_uses_endpoint_and_deadline() {
    let service = HttpQueryService::from_config(&WidgetConfig::default());
    assert_eq!(service.endpoint(), "/rag/query");
    assert_eq!(service.timeout(), Duration::from_secs(30));
}

#[test]
fn new_keeps_custom_values() {
    let service = HttpQueryService::new("/api/ask", Duration::from_millis(250));
    assert_eq!(service.endpoint(), "/api/ask");
    assert_eq!(service.timeout(), Duration::from_millis(250));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn query_outside_browser_is_unavailable() {
    let service = HttpQueryService::from_config(&WidgetConfig::default());
    let result = futures::executor::block_on(service.query(&QueryRequest::new("hours?")));
    assert_eq!(result, Err(QueryError::Unavailable));
}

// =============================================================
// with_deadline
// =============================================================

fn answered(text: &str) -> Result<QueryResponse, QueryError> {
    Ok(QueryResponse { answer: text.to_owned(), sources: None })
}

#[test]
fn answer_before_deadline_passes_through() {
    let result = futures::executor::block_on(with_deadline(
        futures::future::ready(answered("Open 8am to 10pm.")),
        futures::future::pending::<()>(),
    ));
    assert_eq!(result, answered("Open 8am to 10pm."));
}

#[test]
fn expired_deadline_is_timeout() {
    let (_tx, rx) = futures::channel::oneshot::channel::<Result<QueryResponse, QueryError>>();
    let send = async move { rx.await.unwrap_or(Err(QueryError::Network("sender dropped".into()))) };

    let result = futures::executor::block_on(with_deadline(send, futures::future::ready(())));
    assert_eq!(result, Err(QueryError::Timeout));
}

#[test]
fn request_failure_before_deadline_is_not_a_timeout() {
    let result = futures::executor::block_on(with_deadline(
        futures::future::ready(Err(QueryError::Status { status: 502 })),
        futures::future::pending::<()>(),
    ));
    assert_eq!(result, Err(QueryError::Status { status: 502 }));
}

#[test]
fn answer_ready_with_deadline_wins() {
    let result = futures::executor::block_on(with_deadline(
        futures::future::ready(answered("just in time")),
        futures::future::ready(()),
    ));
    assert_eq!(result, answered("just in time"));
}

#[test]
fn late_answer_after_deadline_is_discarded() {
    let (tx, rx) = futures::channel::oneshot::channel::<Result<QueryResponse, QueryError>>();
    let send = async move { rx.await.unwrap_or(Err(QueryError::Network("sender dropped".into()))) };

    let result = futures::executor::block_on(with_deadline(send, futures::future::ready(())));
    assert_eq!(result, Err(QueryError::Timeout));
    assert!(tx.send(answered("too late")).is_err());
}
