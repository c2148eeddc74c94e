use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::MarketRow;
use super::filter::{filtered_rows, FilterState};

/// Built-in market feed location; overridable from settings or `MARKET_FEED_URL`.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8080/market.json";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Classified rows from the most recent successful fetch.
    pub rows: Vec<MarketRow>,
    pub filter: FilterState,
    pub loading: bool,
    /// Message from the last failed fetch, cleared on success.
    pub load_error: Option<String>,
    pub fetched_at: Option<SystemTime>,
    /// Feed URL from persisted settings; `None` means the default.
    pub feed_url: Option<String>,
}

impl AppState {
    pub fn visible_rows(&self) -> Vec<&MarketRow> {
        filtered_rows(&self.rows, &self.filter)
    }

    pub fn effective_feed_url(&self) -> String {
        self.feed_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_rows(&mut self, rows: Vec<MarketRow>, fetched_at: SystemTime) {
        self.rows = rows;
        self.fetched_at = Some(fetched_at);
        self.load_error = None;
        self.loading = false;
    }

    /// Keeps whatever rows were already loaded.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
        self.loading = false;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.feed_url = persisted.feed_url;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            feed_url: self.feed_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub feed_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = AppState::default();
        state.begin_load();
        state.apply_rows(
            vec![MarketRow::new("Pyerite", "Mineral", 40.0, None, None)],
            SystemTime::now(),
        );
        state.begin_load();
        state.record_failure("Failed to load market data: HTTP 503");
        assert!(!state.loading);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(
            state.load_error.as_deref(),
            Some("Failed to load market data: HTTP 503")
        );

        state.apply_rows(Vec::new(), SystemTime::now());
        assert!(state.load_error.is_none());
        assert!(state.rows.is_empty());
    }

    #[test]
    fn blank_feed_url_falls_back_to_default() {
        let mut state = AppState::default();
        assert_eq!(state.effective_feed_url(), DEFAULT_FEED_URL);
        state.apply_persisted(PersistedState {
            feed_url: Some("  ".into()),
        });
        assert_eq!(state.effective_feed_url(), DEFAULT_FEED_URL);
        state.feed_url = Some("https://example.test/LSC4-P.json".into());
        assert_eq!(
            state.to_persisted().feed_url.as_deref(),
            Some("https://example.test/LSC4-P.json")
        );
    }
}
