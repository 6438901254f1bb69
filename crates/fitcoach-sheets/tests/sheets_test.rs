// Integration tests for the Google Sheets workout log, run against wiremock
// stand-ins for the Drive, Sheets and OAuth token endpoints.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use fitcoach_core::{CoachError, WorkoutLogSink};
use fitcoach_sheets::{
    AccessTokenProvider, AssertionClaims, ServiceAccountAuth, ServiceAccountKey, SheetsClient,
    SheetsError, SheetsWorkoutLog, SpreadsheetRef, StaticToken, SCOPES,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = include_str!("fixtures/test_key.pem");
const TEST_PUBLIC_KEY: &str = include_str!("fixtures/test_key.pub.pem");

fn client(server: &MockServer) -> SheetsClient {
    SheetsClient::new(
        reqwest::Client::new(),
        Arc::new(StaticToken("t0k".to_string())),
        Duration::from_secs(5),
    )
    .with_base_urls(
        format!("{}/v4/spreadsheets", server.uri()),
        format!("{}/drive/v3/files", server.uri()),
    )
}

async fn mount_worksheets(server: &MockServer, spreadsheet_id: &str, titles: &[&str]) {
    let sheets: Vec<_> = titles
        .iter()
        .map(|t| json!({"properties": {"title": t}}))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{}", spreadsheet_id)))
        .and(header("authorization", "Bearer t0k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sheets": sheets})))
        .mount(server)
        .await;
}

fn row() -> Vec<String> {
    vec![
        "2024-03-09".to_string(),
        "ana".to_string(),
        "legs, glutes".to_string(),
        "squat, hip thrust".to_string(),
        String::new(),
        String::new(),
    ]
}

#[tokio::test]
async fn test_resolve_by_name_and_append() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param(
            "q",
            "name = 'AI Fitness Bot Workouts' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{"id": "sheet-123", "name": "AI Fitness Bot Workouts"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_worksheets(&server, "sheet-123", &["Sheet1", "Archive"]).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-123/values/'Sheet1':append"))
        .and(query_param("valueInputOption", "RAW"))
        .and(query_param("insertDataOption", "INSERT_ROWS"))
        .and(header("authorization", "Bearer t0k"))
        .and(body_json(json!({
            "majorDimension": "ROWS",
            "values": [["2024-03-09", "ana", "legs, glutes", "squat, hip thrust", "", ""]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-123",
            "updates": {"updatedRows": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let log = SheetsWorkoutLog::resolve(
        client(&server),
        &SpreadsheetRef::Name("AI Fitness Bot Workouts".to_string()),
        None,
    )
    .await
    .unwrap();
    assert_eq!(log.spreadsheet_id(), "sheet-123");
    assert_eq!(log.worksheet(), "Sheet1");

    log.append_row(row()).await.unwrap();
}

#[tokio::test]
async fn test_named_worksheet_is_used() {
    let server = MockServer::start().await;
    mount_worksheets(&server, "abc", &["Sheet1", "Workouts"]).await;

    let log = SheetsWorkoutLog::resolve(
        client(&server),
        &SpreadsheetRef::Id("abc".to_string()),
        Some("Workouts"),
    )
    .await
    .unwrap();
    assert_eq!(log.worksheet(), "Workouts");
}

#[tokio::test]
async fn test_missing_worksheet_fails() {
    let server = MockServer::start().await;
    mount_worksheets(&server, "abc", &["Sheet1"]).await;

    let err = SheetsWorkoutLog::resolve(
        client(&server),
        &SpreadsheetRef::Id("abc".to_string()),
        Some("Log"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SheetsError::NotFound(_)));
}

#[tokio::test]
async fn test_unknown_spreadsheet_name_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .mount(&server)
        .await;

    let err = client(&server)
        .find_spreadsheet_by_name("Nope")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found: spreadsheet named 'Nope'");
}

#[tokio::test]
async fn test_append_error_surfaces_google_message() {
    let server = MockServer::start().await;
    mount_worksheets(&server, "abc", &["Sheet1"]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let log = SheetsWorkoutLog::resolve(client(&server), &SpreadsheetRef::Id("abc".into()), None)
        .await
        .unwrap();
    let err = log.append_row(row()).await.unwrap_err();

    assert!(matches!(err, CoachError::LogAppend(_)));
    assert!(err
        .to_string()
        .contains("403: The caller does not have permission"));
}

#[tokio::test]
async fn test_service_account_token_exchange_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token_uri = format!("{}/token", server.uri());
    let key = ServiceAccountKey::from_json(
        &json!({
            "client_email": "coach@project.iam.gserviceaccount.com",
            "private_key": TEST_KEY,
            "private_key_id": "kid-1",
        })
        .to_string(),
    )
    .unwrap()
    .with_token_uri(&token_uri);
    let auth =
        ServiceAccountAuth::new(key, reqwest::Client::new(), Duration::from_secs(5)).unwrap();

    assert_eq!(auth.access_token().await.unwrap(), "ya29.test");
    assert_eq!(auth.access_token().await.unwrap(), "ya29.test");

    // Assertion is an RS256 JWT addressed to the token endpoint
    let assertion = auth.assertion(Utc::now()).unwrap();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[token_uri.as_str()]);
    let decoded = decode::<AssertionClaims>(
        &assertion,
        &DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap(),
        &validation,
    )
    .unwrap();

    assert_eq!(decoded.header.kid.as_deref(), Some("kid-1"));
    assert_eq!(decoded.claims.iss, "coach@project.iam.gserviceaccount.com");
    assert_eq!(decoded.claims.scope, SCOPES.join(" "));
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 3600);
}

#[tokio::test]
async fn test_token_endpoint_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;

    let key = ServiceAccountKey::from_json(
        &json!({"client_email": "coach@x", "private_key": TEST_KEY}).to_string(),
    )
    .unwrap()
    .with_token_uri(format!("{}/token", server.uri()));
    let auth =
        ServiceAccountAuth::new(key, reqwest::Client::new(), Duration::from_secs(5)).unwrap();

    let err = auth.access_token().await.unwrap_err();
    assert!(matches!(err, SheetsError::Auth(_)));
    assert!(err.to_string().contains("invalid_grant"));
}
