//! Behavior tests for the request executor: retry budget, status handling
//! and the wire shape of requests.

mod common;

use std::time::Duration;

use common::{executor, executor_with_backoff, query_of, ScriptedHttpClient, IIS};
use tokio::time::Instant;
use vnkbs_core::{
    Backoff, ErrorKind, HttpError, HttpMethod, HttpResponse, RawBody, RequestBody,
    RequestDescriptor,
};

fn history_descriptor() -> RequestDescriptor {
    RequestDescriptor::get(format!("{IIS}/stocks/VNM/data_day"))
        .with_query("sdate", "01-01-2024")
        .with_query("edate", "31-01-2024")
}

// =============================================================================
// Retry budget
// =============================================================================

#[tokio::test]
async fn when_transport_recovers_within_budget_the_call_succeeds() {
    // Given: two transport failures followed by a good response
    let transport = ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection reset")),
        Err(HttpError::new("request timeout")),
        Ok(HttpResponse::ok_json(r#"{"data_day":[]}"#)),
    ]);

    // When: the executor runs with a budget of three attempts
    let body = executor(transport.clone(), 3)
        .execute(&history_descriptor())
        .await
        .expect("third attempt should succeed");

    // Then: exactly three attempts were made and the body is returned as-is
    assert_eq!(transport.request_count(), 3);
    assert_eq!(body, RawBody::Text(String::from(r#"{"data_day":[]}"#)));
}

#[tokio::test]
async fn when_every_attempt_fails_the_budget_is_spent_exactly() {
    let transport = ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection refused")),
        Err(HttpError::new("connection refused")),
        Err(HttpError::new("connection refused")),
        Err(HttpError::new("connection refused")),
        Err(HttpError::new("connection refused")),
    ]);

    let error = executor(transport.clone(), 3)
        .execute(&history_descriptor())
        .await
        .expect_err("every attempt fails");

    assert_eq!(transport.request_count(), 3);
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(error.attempts(), Some(3));
    assert!(error.to_string().contains("after 3 attempt(s)"));
    assert!(error.to_string().contains("connection refused"));
}

#[tokio::test]
async fn per_call_budget_overrides_the_configured_one() {
    let transport = ScriptedHttpClient::new(Vec::new());

    let error = executor(transport.clone(), 3)
        .execute_with_retries(&history_descriptor(), 5)
        .await
        .expect_err("script is empty");

    assert_eq!(transport.request_count(), 5);
    assert_eq!(error.attempts(), Some(5));
}

#[tokio::test]
async fn zero_budget_still_makes_one_attempt() {
    let transport = ScriptedHttpClient::ok(&["[]"]);

    executor(transport.clone(), 1)
        .execute_with_retries(&history_descriptor(), 0)
        .await
        .expect("single attempt succeeds");

    assert_eq!(transport.request_count(), 1);
}

// =============================================================================
// Backoff timing
// =============================================================================

fn failing(times: usize) -> Vec<Result<HttpResponse, HttpError>> {
    (0..times)
        .map(|_| Err(HttpError::new("connection reset")))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn when_attempts_fail_linear_backoff_waits_between_them_only() {
    // Given: three failures and a one-second linear step
    let transport = ScriptedHttpClient::new(failing(3));
    let executor = executor_with_backoff(
        transport.clone(),
        3,
        Backoff::Linear {
            step: Duration::from_secs(1),
        },
    );

    // When: the call spends its whole budget
    let started = Instant::now();
    let error = executor
        .execute(&history_descriptor())
        .await
        .expect_err("every attempt fails");

    // Then: 1s after the first failure, 2s after the second, none after the last
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(transport.request_count(), 3);
    assert_eq!(error.attempts(), Some(3));
}

#[tokio::test(start_paused = true)]
async fn when_the_second_attempt_succeeds_only_one_delay_elapses() {
    let transport = ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection reset")),
        Ok(HttpResponse::ok_json("[]")),
    ]);
    let executor = executor_with_backoff(
        transport.clone(),
        3,
        Backoff::Fixed {
            delay: Duration::from_millis(250),
        },
    );

    let started = Instant::now();
    executor
        .execute(&history_descriptor())
        .await
        .expect("second attempt succeeds");

    assert_eq!(started.elapsed(), Duration::from_millis(250));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn when_the_failure_is_not_retryable_no_delay_elapses() {
    let transport = ScriptedHttpClient::new(vec![Ok(HttpResponse::new(404, "missing"))]);
    let executor = executor_with_backoff(transport.clone(), 3, Backoff::default());

    let started = Instant::now();
    executor
        .execute(&history_descriptor())
        .await
        .expect_err("404 is final");

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(transport.request_count(), 1);
}

// =============================================================================
// Status handling
// =============================================================================

#[tokio::test]
async fn when_upstream_answers_404_there_is_no_retry() {
    let transport = ScriptedHttpClient::new(vec![
        Ok(HttpResponse::new(404, "")),
        Ok(HttpResponse::ok_json("[]")),
    ]);

    let error = executor(transport.clone(), 3)
        .execute(&history_descriptor())
        .await
        .expect_err("404 is terminal");

    assert_eq!(transport.request_count(), 1);
    assert_eq!(error.kind(), ErrorKind::Status);
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.body(), None);
    assert_eq!(error.attempts(), None);
}

#[tokio::test]
async fn server_error_body_is_preserved_for_diagnostics() {
    let transport = ScriptedHttpClient::new(vec![Ok(HttpResponse::new(
        503,
        "Service Unavailable",
    ))]);

    let error = executor(transport.clone(), 3)
        .execute(&history_descriptor())
        .await
        .expect_err("503 is terminal");

    assert_eq!(transport.request_count(), 1);
    assert_eq!(error.status(), Some(503));
    assert_eq!(error.body(), Some("Service Unavailable"));
}

#[tokio::test]
async fn empty_success_is_reported_as_no_data() {
    let transport = ScriptedHttpClient::new(vec![Ok(HttpResponse::new(204, ""))]);

    let body = executor(transport, 3)
        .execute(&history_descriptor())
        .await
        .expect("204 is a success");

    assert!(body.is_empty());
    assert_eq!(body.as_text(), None);
}

// =============================================================================
// Wire shape
// =============================================================================

#[tokio::test]
async fn get_request_carries_encoded_query_and_provider_headers() {
    let transport = ScriptedHttpClient::ok(&["[]"]);

    executor(transport.clone(), 3)
        .execute(&history_descriptor())
        .await
        .expect("request succeeds");

    let request = transport.only_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url,
        format!("{IIS}/stocks/VNM/data_day?sdate=01-01-2024&edate=31-01-2024")
    );
    assert_eq!(query_of(&request), "sdate=01-01-2024&edate=31-01-2024");
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("accept-language"), Some("en-US,en;q=0.9,vi;q=0.8"));
    assert_eq!(request.header("user-agent"), Some("VNStock-Rust-KBS/0.1.0"));
    assert_eq!(request.header("x-lang"), Some("vi"));
    assert_eq!(request.header("content-type"), None);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn post_request_sends_json_body_on_every_attempt() {
    let transport = ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection reset")),
        Ok(HttpResponse::ok_json("[]")),
    ]);
    let descriptor = RequestDescriptor::post(format!("{IIS}/stock/iss"))
        .with_body(RequestBody::json_object([("code", "VNM,FPT")]));

    executor(transport.clone(), 3)
        .execute(&descriptor)
        .await
        .expect("second attempt succeeds");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(requests[1].method, HttpMethod::Post);
    assert_eq!(requests[1].url, format!("{IIS}/stock/iss"));
    assert_eq!(
        requests[1].header("content-type"),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(requests[1].body.as_deref(), Some(r#"{"code":"VNM,FPT"}"#));
}

#[tokio::test]
async fn concurrent_calls_share_one_executor() {
    let transport = ScriptedHttpClient::ok(&["[]", "[]", "[]", "[]"]);
    let executor = executor(transport.clone(), 1);

    let calls = (0..4).map(|_| {
        let executor = executor.clone();
        tokio::spawn(async move { executor.execute(&history_descriptor()).await })
    });
    for call in calls.collect::<Vec<_>>() {
        call.await
            .expect("task should not panic")
            .expect("call succeeds");
    }

    assert_eq!(transport.request_count(), 4);
}
