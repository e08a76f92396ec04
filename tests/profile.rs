
use axum::http::StatusCode;
use tools::{settings, spawn_profile_service, token, MockProfile, SLOW_XUID};
use tracing_test::traced_test;
use xbox_friends::{
    configuration::ProfileSettings, modules::external_api::HttpClient,
    utils::profile::fetch_gamertag, ProfileError,
};

async fn fetch(profile: &ProfileSettings, xuid: &str) -> Result<String, ProfileError> {
    let client = HttpClient::new(profile).unwrap();
    fetch_gamertag(&client, profile, &token("me"), xuid).await
}

#[traced_test]
#[tokio::test]
async fn resolves_gamertag() {
    let addr = spawn_profile_service(vec![("2535", MockProfile::Gamertag("Steve"))]).await;
    let profile = settings(addr).profile;

    assert_eq!(fetch(&profile, "2535").await.unwrap(), "Steve");
}

#[traced_test]
#[tokio::test]
async fn unknown_user_is_status_error() {
    let addr = spawn_profile_service(vec![]).await;
    let profile = settings(addr).profile;

    let err = fetch(&profile, "A").await.unwrap_err();
    assert!(matches!(err, ProfileError::Status(status) if status == reqwest::StatusCode::NOT_FOUND));
}

#[traced_test]
#[tokio::test]
async fn malformed_body_is_decode_error() {
    let addr = spawn_profile_service(vec![("A", MockProfile::Raw(StatusCode::OK, "<html>"))]).await;
    let profile = settings(addr).profile;

    let err = fetch(&profile, "A").await.unwrap_err();
    assert!(matches!(err, ProfileError::Decode(_)));
}

#[traced_test]
#[tokio::test]
async fn missing_settings_is_not_found() {
    let addr = spawn_profile_service(vec![
        ("A", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":[]}"#)),
        ("B", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":[{"settings":[]}]}"#)),
    ])
    .await;
    let profile = settings(addr).profile;

    for xuid in ["A", "B"] {
        let err = fetch(&profile, xuid).await.unwrap_err();
        assert!(matches!(&err, ProfileError::NotFound(id) if id == xuid));
        assert_eq!(err.to_string(), format!("Gamertag not found for XUID: {xuid}"));
    }
}

#[traced_test]
#[tokio::test]
async fn transport_failures_are_request_errors() {
    let addr = spawn_profile_service(vec![(SLOW_XUID, MockProfile::Gamertag("Slow"))]).await;
    let profile = settings(addr).profile;

    let err = fetch(&profile, SLOW_XUID).await.unwrap_err();
    assert!(matches!(&err, ProfileError::Request(e) if e.is_timeout()));

    let unreachable = ProfileSettings {
        base_url: "http://127.0.0.1:1".into(),
        ..profile
    };
    let err = fetch(&unreachable, "A").await.unwrap_err();
    assert!(matches!(err, ProfileError::Request(_)));
}

#[traced_test]
#[tokio::test]
async fn absent_or_null_value_is_empty_gamertag() {
    let addr = spawn_profile_service(vec![
        ("A", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":[{"settings":[{"id":"Gamertag"}]}]}"#)),
        ("B", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":[{"settings":[{"id":"Gamertag","value":null}]}]}"#)),
    ])
    .await;
    let profile = settings(addr).profile;

    for xuid in ["A", "B"] {
        assert_eq!(fetch(&profile, xuid).await.unwrap(), "");
    }
}

#[traced_test]
#[tokio::test]
async fn null_users_or_settings_is_not_found() {
    let addr = spawn_profile_service(vec![
        ("A", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":null}"#)),
        ("B", MockProfile::Raw(StatusCode::OK, r#"{"profileUsers":[{"settings":null}]}"#)),
    ])
    .await;
    let profile = settings(addr).profile;

    for xuid in ["A", "B"] {
        let err = fetch(&profile, xuid).await.unwrap_err();
        assert!(matches!(&err, ProfileError::NotFound(id) if id == xuid));
    }
}
