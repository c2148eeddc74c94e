//! Feed location resolution: environment, then saved settings, then default.

use url::Url;

use crate::domain::AppState;

pub const FEED_URL_ENV: &str = "MARKET_FEED_URL";

pub fn resolve_feed_url(state: &AppState) -> String {
    pick_feed_url(std::env::var(FEED_URL_ENV).ok(), state)
}

fn pick_feed_url(env_value: Option<String>, state: &AppState) -> String {
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| state.effective_feed_url())
}

/// Checks a user-entered feed URL, returning it trimmed.
pub fn validate_feed_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Feed URL must not be empty.".to_string());
    }
    let url = Url::parse(trimmed).map_err(|err| format!("Invalid feed URL: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(format!("Unsupported URL scheme: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_FEED_URL;

    #[test]
    fn env_value_wins_over_settings() {
        let mut state = AppState::default();
        state.feed_url = Some("https://saved.test/market.json".into());
        assert_eq!(
            pick_feed_url(Some(" https://env.test/LSC4-P.json ".into()), &state),
            "https://env.test/LSC4-P.json"
        );
        assert_eq!(
            pick_feed_url(Some(String::new()), &state),
            "https://saved.test/market.json"
        );
        assert_eq!(pick_feed_url(None, &AppState::default()), DEFAULT_FEED_URL);
    }

    #[test]
    fn validates_scheme_and_shape() {
        assert_eq!(
            validate_feed_url(" https://example.test/market.json "),
            Ok("https://example.test/market.json".to_string())
        );
        assert!(validate_feed_url("").is_err());
        assert!(validate_feed_url("market.json").is_err());
        assert!(validate_feed_url("ftp://example.test/market.json").is_err());
    }
}
