use crate::support::*;
use comment_scout::crawler::run_scan;
use comment_scout::profile::FilterSpec;
use comment_scout::ScoutError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIRST: &str = "76561198000000001";
const SECOND: &str = "76561198000000002";
const THIRD: &str = "76561198000000003";

#[tokio::test]
async fn test_match_in_second_batch_reports_index_and_page() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());

    mount_friends(&server, &[FIRST]).await;
    mount_webhook(&server).await;
    mount_window(&server, FIRST, 0, 510, comments_html(500, &[])).await;
    // Fifth comment of the second window is the owner's
    mount_window(
        &server,
        FIRST,
        500,
        510,
        comments_html(10, &[(4, OWNER_LINK, "ok <img class=\"emoticon\" alt=\":Aegg:\">")]),
    )
    .await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.profiles_total, 1);
    assert_eq!(summary.profiles_completed, 1);
    assert_eq!(summary.comments_scanned, 510);
    assert_eq!(summary.matches, 1);

    let messages = webhook_messages(&server).await;
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Content: ok"));
    assert!(messages[0].contains("Comment number: 505"));
    assert!(messages[0].contains("Page: 11"));
    assert!(messages[0].contains(&format!(
        "URL: https://steamcommunity.com/profiles/{}/allcomments?ctp=11",
        FIRST
    )));
}

#[tokio::test]
async fn test_emoticon_keyword_matches() {
    let server = MockServer::start().await;
    let mut config = create_test_config(&server.uri());
    config.target.keywords = vec![":Aegg:".to_string()];

    mount_friends(&server, &[FIRST]).await;
    mount_webhook(&server).await;
    mount_window(
        &server,
        FIRST,
        0,
        3,
        comments_html(
            3,
            &[
                (0, OWNER_LINK, "no emoticon here"),
                (2, OWNER_LINK, "<img class=\"emoticon\" alt=\":Aegg:\">"),
            ],
        ),
    )
    .await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.matches, 1);
    let messages = webhook_messages(&server).await;
    assert!(messages[0].contains("Comment number: 3"));
    assert!(messages[0].contains("Page: 1"));
}

#[tokio::test]
async fn test_filter_private_profile_and_transport_error() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());
    let private = "76561198000000011";
    let broken = "76561198000000021";

    mount_friends(&server, &[private, FIRST, broken, SECOND, THIRD]).await;
    mount_webhook(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path(private)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "This profile is private."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path(broken)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    mount_window(&server, FIRST, 0, 1, comments_html(1, &[])).await;
    mount_window(
        &server,
        SECOND,
        0,
        2,
        comments_html(2, &[(1, OWNER_LINK, "ok!")]),
    )
    .await;

    // Filtered out: never requested
    Mock::given(method("POST"))
        .and(path(api_path(THIRD)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let filter = FilterSpec::parse("1-2").unwrap();
    let summary = run_scan(&config, Some(&filter)).await.unwrap();

    assert_eq!(summary.profiles_total, 4);
    assert_eq!(summary.profiles_failed, 2);
    assert_eq!(summary.profiles_completed, 2);
    assert_eq!(summary.failed_profiles, vec![private, broken]);
    assert_eq!(summary.matches, 1);

    let messages = webhook_messages(&server).await;
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains(&format!("Profile: {}", SECOND)));
}

#[tokio::test]
async fn test_undecodable_response_fails_profile_only() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());

    mount_friends(&server, &[FIRST, SECOND]).await;
    mount_webhook(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path(FIRST)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    mount_window(
        &server,
        SECOND,
        0,
        1,
        comments_html(1, &[(0, OWNER_LINK, "ok")]),
    )
    .await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.profiles_failed, 1);
    assert_eq!(summary.matches, 1);
}

#[tokio::test]
async fn test_resolution_failure_aborts_before_scanning() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());

    Mock::given(method("GET"))
        .and(path("/id/owner/friends"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = run_scan(&config, None).await;
    assert!(matches!(result, Err(ScoutError::Resolve(_))));
}

#[tokio::test]
async fn test_filter_leaving_nothing_is_fatal() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());

    mount_friends(&server, &[FIRST, SECOND]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let filter = FilterSpec::parse("7-9").unwrap();
    let result = run_scan(&config, Some(&filter)).await;
    assert!(matches!(result, Err(ScoutError::Resolve(_))));
}

#[tokio::test]
async fn test_preloaded_profiles_skip_friend_list() {
    let server = MockServer::start().await;
    let mut config = create_test_config(&server.uri());
    config.target.profiles = vec![SECOND.to_string()];

    Mock::given(method("GET"))
        .and(path("/id/owner/friends"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    mount_webhook(&server).await;
    mount_window(&server, SECOND, 0, 0, String::new()).await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.profiles_total, 1);
    assert_eq!(summary.profiles_completed, 1);
    assert_eq!(summary.comments_scanned, 0);
}

#[tokio::test]
async fn test_webhook_failure_does_not_stop_scan() {
    let server = MockServer::start().await;
    let config = create_test_config(&server.uri());

    mount_friends(&server, &[FIRST, SECOND]).await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_window(
        &server,
        FIRST,
        0,
        1,
        comments_html(1, &[(0, OWNER_LINK, "ok")]),
    )
    .await;
    mount_window(
        &server,
        SECOND,
        0,
        1,
        comments_html(1, &[(0, OWNER_LINK, "ok")]),
    )
    .await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.profiles_completed, 2);
    assert_eq!(summary.matches, 2);
}

#[tokio::test]
async fn test_request_timeout_fails_profile_only() {
    let server = MockServer::start().await;
    let mut config = create_test_config(&server.uri());
    config.api.timeout_secs = 1;
    let slow = "76561198000000011";

    mount_friends(&server, &[slow, SECOND]).await;
    mount_webhook(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path(slow)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "total_count": 0, "comments_html": "" }))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_window(
        &server,
        SECOND,
        0,
        1,
        comments_html(1, &[(0, OWNER_LINK, "ok")]),
    )
    .await;

    let summary = run_scan(&config, None).await.unwrap();

    assert_eq!(summary.profiles_failed, 1);
    assert_eq!(summary.failed_profiles, vec![slow]);
    assert_eq!(summary.profiles_completed, 1);
    assert_eq!(summary.matches, 1);
}
