use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use sleep_glance::core::flow::REQUIRED_PERMISSIONS;
use sleep_glance::domain::model::{RecordKind, TimeRange};
use sleep_glance::domain::ports::HealthProvider;
use sleep_glance::{CliConfig, HealthError, HttpHealthProvider};

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig {
        service_url: server.base_url(),
        display_name: "there".to_string(),
        verbose: false,
    }
}

fn fixed_week() -> TimeRange {
    TimeRange::trailing_days_from(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 7)
}

#[tokio::test]
async fn test_request_permissions_round_trip() -> Result<()> {
    let server = MockServer::start();
    let permission_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/permissions/request")
            .json_body(serde_json::json!({
                "permissions": ["read_sleep", "read_heart_rate"]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "read_sleep": true,
                "read_heart_rate": true
            }));
    });

    let provider = HttpHealthProvider::connect(&config_for(&server));
    let grants = provider.request_permissions(&REQUIRED_PERMISSIONS).await?;

    permission_mock.assert();
    assert!(grants.all_granted(&REQUIRED_PERMISSIONS));
    Ok(())
}

#[tokio::test]
async fn test_read_records_sends_truncated_window() -> Result<()> {
    let server = MockServer::start();
    let records_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/records")
            .query_param("type", "sleep")
            .query_param("start", "2024-03-08T00:00:00")
            .query_param("end", "2024-03-15T00:00:00");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"start": "2024-03-10T22:30:00Z", "end": "2024-03-11T06:15:00Z", "stages": ["rem"]},
                {"start": "2024-03-09T23:00:00Z", "end": "2024-03-10T07:00:00Z"}
            ]));
    });

    let provider = HttpHealthProvider::connect(&config_for(&server));
    let records = provider.read_records(RecordKind::Sleep, &fixed_week()).await?;

    records_mock.assert();
    assert_eq!(records.len(), 2);
    // Extra provider fields are dropped; only the interval survives.
    assert_eq!(records[0].start.to_rfc3339(), "2024-03-10T22:30:00+00:00");
    assert_eq!(records[0].end.to_rfc3339(), "2024-03-11T06:15:00+00:00");
    Ok(())
}

#[tokio::test]
async fn test_read_records_maps_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/records");
        then.status(503).body("maintenance window");
    });

    let provider = HttpHealthProvider::connect(&config_for(&server));
    let err = provider
        .read_records(RecordKind::Sleep, &fixed_week())
        .await
        .unwrap_err();

    match err {
        HealthError::ProviderError { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("maintenance window"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_read_records_rejects_malformed_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/records");
        then.status(200).body("not json at all");
    });

    let provider = HttpHealthProvider::connect(&config_for(&server));
    let err = provider
        .read_records(RecordKind::Sleep, &fixed_week())
        .await
        .unwrap_err();

    assert!(matches!(err, HealthError::SerializationError(_)));
}

#[tokio::test]
async fn test_connect_trims_trailing_slash() -> Result<()> {
    let server = MockServer::start();
    let permission_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/permissions/request");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"read_sleep": true, "read_heart_rate": true}));
    });

    let config = CliConfig {
        service_url: format!("{}/", server.base_url()),
        display_name: "there".to_string(),
        verbose: false,
    };
    let provider = HttpHealthProvider::connect(&config);
    provider.request_permissions(&REQUIRED_PERMISSIONS).await?;

    permission_mock.assert();
    Ok(())
}
