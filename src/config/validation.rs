use crate::config::types::{ApiConfig, Config, TargetConfig, UserAgentConfig, WebhookConfig};
use crate::config::PROFILE_ID_PLACEHOLDER;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
///
/// The filter expression is deliberately not checked here: a malformed
/// filter is reported at startup and degrades to "no filtering".
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_target_config(&config.target)?;
    validate_api_config(&config.api)?;
    validate_user_agent_config(&config.user_agent)?;
    if let Some(webhook) = &config.webhook {
        validate_webhook_config(webhook)?;
    }
    http_url(&config.friends_url(), "friends-url")?;
    Ok(())
}

/// Validates target configuration
fn validate_target_config(config: &TargetConfig) -> ConfigResult<()> {
    if config.owner_reference.trim().is_empty() {
        return Err(ConfigError::Validation(
            "owner-reference cannot be empty".to_string(),
        ));
    }

    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    // A blank keyword would match every comment through the separator space
    if let Some(blank) = config.keywords.iter().find(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "keywords cannot be blank, got '{}'",
            blank
        )));
    }

    if let Some(bad) = config.profiles.iter().find(|p| p.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "preloaded profile ids cannot be blank, got '{}'",
            bad
        )));
    }

    Ok(())
}

/// Validates comment API configuration
fn validate_api_config(config: &ApiConfig) -> ConfigResult<()> {
    validate_template(&config.comment_api_url, "comment-api-url")?;
    validate_template(&config.comment_base_url, "comment-base-url")?;

    if config.page_size < 1 {
        return Err(ConfigError::Validation(format!(
            "page-size must be >= 1, got {}",
            config.page_size
        )));
    }

    if config.comments_per_page < 1 {
        return Err(ConfigError::Validation(format!(
            "comments-per-page must be >= 1, got {}",
            config.comments_per_page
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates a per-profile URL template
fn validate_template(template: &str, field: &str) -> ConfigResult<()> {
    if !template.contains(PROFILE_ID_PLACEHOLDER) {
        return Err(ConfigError::Validation(format!(
            "{} must contain {}, got '{}'",
            field, PROFILE_ID_PLACEHOLDER, template
        )));
    }

    http_url(&template.replace(PROFILE_ID_PLACEHOLDER, "0"), field)
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

fn validate_webhook_config(config: &WebhookConfig) -> ConfigResult<()> {
    http_url(&config.url, "webhook url")
}

/// Parses `value` and requires an http(s) scheme
fn http_url(value: &str, field: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> ConfigResult<()> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
