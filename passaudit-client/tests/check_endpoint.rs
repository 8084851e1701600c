//! Integration tests for the `POST /check` contract against a stub service.

mod common;

use axum::http::StatusCode;
use passaudit_client::{
    AssessmentClient, Assessor, Error, RequestErrorKind, SecretString, ValidationError,
};

use common::{MODERATE_BODY, closed_addr, spawn_stub};

fn secret(password: &str) -> SecretString {
    SecretString::from(password.to_string())
}

#[tokio::test]
async fn successful_check_returns_assessment() {
    let stub = spawn_stub(StatusCode::OK, MODERATE_BODY).await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let result = client.submit(&secret("Tr0ub4dor&3")).await.unwrap();

    assert_eq!(result.risk_score, 62);
    assert_eq!(result.risk_level, "Moderate");
    assert_eq!(result.issues, vec!["Password found in common list"]);
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn request_body_is_password_object() {
    let stub = spawn_stub(StatusCode::OK, MODERATE_BODY).await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    client.submit(&secret("Tr0ub4dor&3")).await.unwrap();

    assert_eq!(
        stub.last_request(),
        Some(serde_json::json!({ "password": "Tr0ub4dor&3" }))
    );
}

#[tokio::test]
async fn server_error_surfaces_service_message() {
    let stub = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"internal failure"}"#,
    )
    .await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let err = client.submit(&secret("anything")).await.unwrap_err();

    match err {
        Error::Request(e) => {
            assert_eq!(e.kind(), RequestErrorKind::Rejected);
            assert_eq!(e.status(), Some(500));
            assert!(e.message().contains("internal failure"));
        }
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn rejection_without_error_field_uses_generic_message() {
    let stub = spawn_stub(StatusCode::BAD_REQUEST, "{}").await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let err = client.submit(&secret("   ")).await.unwrap_err();

    assert_eq!(err.to_string(), "scoring service returned status 400");
}

#[tokio::test]
async fn rejection_with_non_json_body_uses_generic_message() {
    let stub = spawn_stub(StatusCode::BAD_GATEWAY, "upstream down").await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let err = client.submit(&secret("pw")).await.unwrap_err();

    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn malformed_success_body_is_request_error() {
    let stub = spawn_stub(StatusCode::OK, r#"{"risk_score": 40}"#).await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let err = client.submit(&secret("pw")).await.unwrap_err();

    match err {
        Error::Request(e) => assert_eq!(e.kind(), RequestErrorKind::Malformed),
        other => panic!("expected malformed response, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_password_never_reaches_service() {
    let stub = spawn_stub(StatusCode::OK, MODERATE_BODY).await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let err = client.submit(&secret("")).await.unwrap_err();

    assert_eq!(err, Error::Validation(ValidationError::EmptyPassword));
    assert_eq!(stub.hits(), 0);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let addr = closed_addr().await;
    let client = AssessmentClient::with_base_url(format!("http://{}", addr));

    let err = client.submit(&secret("pw")).await.unwrap_err();

    match err {
        Error::Request(e) => assert_eq!(e.kind(), RequestErrorKind::Transport),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn each_submit_issues_exactly_one_request() {
    let stub = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"busy"}"#).await;
    let client = AssessmentClient::with_base_url(stub.base_url());

    let _ = client.submit(&secret("pw")).await;
    assert_eq!(stub.hits(), 1);

    let _ = client.submit(&secret("pw")).await;
    assert_eq!(stub.hits(), 2);
}
