//! Shared fixtures for the integration tests

use comment_scout::config::{
    ApiConfig, AuthorMatch, Config, TargetConfig, UserAgentConfig, WebhookConfig,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER_LINK: &str = "https://steamcommunity.com/id/owner";
pub const STRANGER_LINK: &str = "https://steamcommunity.com/id/stranger";

/// Creates a configuration pointing every endpoint at the mock server
pub fn create_test_config(server_uri: &str) -> Config {
    Config {
        target: TargetConfig {
            owner_reference: "id/owner".to_string(),
            keywords: vec!["ok".to_string()],
            author_match: AuthorMatch::Substring,
            friends_url: Some(format!("{}/id/owner/friends", server_uri)),
            profiles: vec![],
            filter: None,
        },
        api: ApiConfig {
            comment_api_url: format!("{}/comment/Profile/render/{{profile_id}}/-1/", server_uri),
            comment_base_url: "https://steamcommunity.com/profiles/{profile_id}/allcomments"
                .to_string(),
            page_size: 500,
            comments_per_page: 50,
            request_delay_ms: 0,
            timeout_secs: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestScout".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        webhook: Some(WebhookConfig {
            url: format!("{}/hook", server_uri),
            username: None,
        }),
    }
}

pub fn comment_block(author: &str, text: &str) -> String {
    format!(
        r#"<div class="commentthread_comment responsive_body_text">
	<div class="commentthread_comment_content">
		<div class="commentthread_comment_author">
			<a class="hoverunderline commentthread_author_link" href="{author}"><bdi>someone</bdi></a>
		</div>
		<div class="commentthread_comment_text">{text}</div>
	</div>
</div>"#
    )
}

/// `count` comments by a stranger, except `special` positions
pub fn comments_html(count: usize, special: &[(usize, &str, &str)]) -> String {
    (0..count)
        .map(|position| match special.iter().find(|(p, _, _)| *p == position) {
            Some((_, author, text)) => comment_block(author, text),
            None => comment_block(STRANGER_LINK, "nice profile"),
        })
        .collect()
}

pub fn friends_page(ids: &[&str]) -> String {
    let blocks: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="selectable friend_block_v2 persona offline" data-steamid="{id}">
                    <a class="selectable_overlay" href="https://steamcommunity.com/profiles/{id}"></a>
                </div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div id="search_results">{blocks}</div></body></html>"#)
}

pub async fn mount_friends(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/id/owner/friends"))
        .respond_with(ResponseTemplate::new(200).set_body_string(friends_page(ids)))
        .mount(server)
        .await;
}

pub async fn mount_webhook(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

pub fn api_path(profile_id: &str) -> String {
    format!("/comment/Profile/render/{}/-1/", profile_id)
}

/// Serves one comment window of `profile_id` at offset `start`
pub async fn mount_window(
    server: &MockServer,
    profile_id: &str,
    start: usize,
    total: u64,
    html: String,
) {
    Mock::given(method("POST"))
        .and(path(api_path(profile_id)))
        .and(body_string_contains(format!("start={}&", start)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "start": start,
            "pagesize": 500,
            "total_count": total,
            "comments_html": html,
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Bodies of every message posted to the webhook, in order
pub async fn webhook_messages(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == "/hook")
        .map(|request| {
            let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            body["content"].as_str().unwrap_or_default().to_string()
        })
        .collect()
}
