//! Search query and status toggle filtering over classified rows.

use super::entities::{MarketRow, StockStatus};

/// Which status categories are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusToggles {
    pub show_low: bool,
    pub show_missing: bool,
    pub show_stocked: bool,
}

impl Default for StatusToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl StatusToggles {
    pub fn all() -> Self {
        Self {
            show_low: true,
            show_missing: true,
            show_stocked: true,
        }
    }

    pub fn none() -> Self {
        Self {
            show_low: false,
            show_missing: false,
            show_stocked: false,
        }
    }

    pub fn is_all(&self) -> bool {
        self.show_low && self.show_missing && self.show_stocked
    }

    pub fn is_none(&self) -> bool {
        !self.show_low && !self.show_missing && !self.show_stocked
    }

    pub fn shows(&self, status: StockStatus) -> bool {
        match status {
            StockStatus::Low => self.show_low,
            StockStatus::Missing => self.show_missing,
            StockStatus::Stocked => self.show_stocked,
        }
    }

    pub fn set(&mut self, status: StockStatus, enabled: bool) {
        match status {
            StockStatus::Low => self.show_low = enabled,
            StockStatus::Missing => self.show_missing = enabled,
            StockStatus::Stocked => self.show_stocked = enabled,
        }
    }

    /// Turning every category off would hide everything, so that state
    /// snaps back to showing all of them.
    pub fn normalize(&mut self) {
        if self.is_none() {
            *self = Self::all();
        }
    }

    /// Flips one category and normalizes the result.
    pub fn toggle(&mut self, status: StockStatus) {
        let enabled = self.shows(status);
        self.set(status, !enabled);
        self.normalize();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub toggles: StatusToggles,
}

impl FilterState {
    pub fn new(query: impl Into<String>, toggles: StatusToggles) -> Self {
        Self {
            query: query.into(),
            toggles,
        }
    }

    pub fn tokens(&self) -> Vec<SearchToken> {
        parse_query(&self.query)
    }
}

/// One whitespace-delimited unit of the search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchToken {
    pub text: String,
    pub negate: bool,
}

impl SearchToken {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(rest) => Self {
                text: rest.to_string(),
                negate: true,
            },
            None => Self {
                text: raw.to_string(),
                negate: false,
            },
        }
    }

    /// Empty tokens (a bare `-`) do not constrain anything.
    pub fn is_vacuous(&self) -> bool {
        self.text.is_empty()
    }

    pub fn accepts(&self, row: &MarketRow) -> bool {
        if self.is_vacuous() {
            return true;
        }
        self.negate != token_matches(&self.text, row)
    }
}

pub fn parse_query(query: &str) -> Vec<SearchToken> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(SearchToken::parse)
        .collect()
}

/// `token` must already be lowercase.
fn token_matches(token: &str, row: &MarketRow) -> bool {
    if let Some(status) = StockStatus::from_keyword(token) {
        if row.status == status {
            return true;
        }
    }
    row.item.to_lowercase().contains(token) || row.group.to_lowercase().contains(token)
}

fn matches_tokens(row: &MarketRow, tokens: &[SearchToken]) -> bool {
    tokens.iter().all(|token| token.accepts(row))
}

/// Rows visible under `filter`, in input order.
pub fn filtered_rows<'a>(rows: &'a [MarketRow], filter: &FilterState) -> Vec<&'a MarketRow> {
    let tokens = filter.tokens();
    rows.iter()
        .filter(|row| filter.toggles.shows(row.status) && matches_tokens(row, &tokens))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub missing: usize,
    pub low: usize,
    pub stocked: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.missing + self.low + self.stocked
    }

    pub fn get(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::Missing => self.missing,
            StockStatus::Low => self.low,
            StockStatus::Stocked => self.stocked,
        }
    }
}

pub fn status_counts<'a>(rows: impl IntoIterator<Item = &'a MarketRow>) -> StatusCounts {
    rows.into_iter()
        .fold(StatusCounts::default(), |mut counts, row| {
            if row.missing() {
                counts.missing += 1;
            } else if row.stock_low() {
                counts.low += 1;
            } else if row.stocked() {
                counts.stocked += 1;
            }
            counts
        })
}

/// Item names one per line, for pasting into a multibuy window.
pub fn clipboard_text(rows: &[&MarketRow]) -> String {
    rows.iter()
        .map(|row| row.item.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MarketRow> {
        vec![
            MarketRow::new("Tritanium", "Mineral", 0.0, None, None),
            MarketRow::new("Megacyte", "Mineral", 8.0, Some(1000.0), None),
            MarketRow::new("Nanite Repair Paste", "Booster", 250.0, Some(20_000.0), None),
            MarketRow::new("Large Skill Injector", "Skill", 1.0, Some(900_000_000.0), None),
        ]
    }

    fn names(rows: &[&MarketRow]) -> Vec<String> {
        rows.iter().map(|row| row.item.clone()).collect()
    }

    #[test]
    fn mineral_not_missing_keeps_megacyte_only() {
        let rows = vec![
            MarketRow::new("Tritanium", "Mineral", 0.0, None, None),
            MarketRow::new("Megacyte", "Mineral", 8.0, Some(1000.0), None),
        ];
        let filter = FilterState::new("mineral -missing", StatusToggles::all());
        let result = filtered_rows(&rows, &filter);
        assert_eq!(names(&result), vec!["Megacyte"]);
        assert_eq!(result[0].status, StockStatus::Low);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let rows = sample_rows();
        for query in ["", "   ", "\t\n"] {
            let result = filtered_rows(&rows, &FilterState::new(query, StatusToggles::all()));
            assert_eq!(result.len(), rows.len());
            assert!(result.iter().zip(rows.iter()).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = sample_rows();
        let filter = FilterState::new("-booster min", StatusToggles::all());
        let first = names(&filtered_rows(&rows, &filter));
        let second = names(&filtered_rows(&rows, &filter));
        assert_eq!(first, second);
        assert_eq!(first, vec!["Tritanium", "Megacyte"]);
    }

    #[test]
    fn negated_token_is_the_complement() {
        let rows = sample_rows();
        for token in ["mineral", "low", "paste", "skill", "stocked", "zzz"] {
            let positive = filtered_rows(&rows, &FilterState::new(token, StatusToggles::all()));
            let negative =
                filtered_rows(&rows, &FilterState::new(format!("-{token}"), StatusToggles::all()));
            assert_eq!(positive.len() + negative.len(), rows.len(), "{token}");
            assert!(positive.iter().all(|row| !negative.contains(row)), "{token}");
        }
    }

    #[test]
    fn status_keywords_match_classification() {
        let rows = sample_rows();
        let missing = filtered_rows(&rows, &FilterState::new("MISSING", StatusToggles::all()));
        assert_eq!(names(&missing), vec!["Tritanium"]);
        let low = filtered_rows(&rows, &FilterState::new("low", StatusToggles::all()));
        assert_eq!(names(&low), vec!["Megacyte", "Large Skill Injector"]);
        let stocked = filtered_rows(&rows, &FilterState::new("stocked", StatusToggles::all()));
        assert_eq!(names(&stocked), vec!["Nanite Repair Paste"]);
    }

    #[test]
    fn bare_dash_is_vacuous() {
        let rows = sample_rows();
        let result = filtered_rows(&rows, &FilterState::new("- mineral", StatusToggles::all()));
        assert_eq!(names(&result), vec!["Tritanium", "Megacyte"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let rows = sample_rows();
        let result = filtered_rows(&rows, &FilterState::new("NaNiTe", StatusToggles::all()));
        assert_eq!(names(&result), vec!["Nanite Repair Paste"]);
    }

    #[test]
    fn toggles_gate_rows_even_without_query() {
        let rows = sample_rows();
        let toggles = StatusToggles {
            show_low: false,
            show_missing: true,
            show_stocked: false,
        };
        let result = filtered_rows(&rows, &FilterState::new("", toggles));
        assert_eq!(names(&result), vec!["Tritanium"]);
    }

    #[test]
    fn clearing_every_toggle_resets_to_all() {
        let mut toggles = StatusToggles {
            show_low: true,
            show_missing: false,
            show_stocked: false,
        };
        toggles.toggle(StockStatus::Low);
        assert!(toggles.is_all());

        let mut toggles = StatusToggles::none();
        toggles.normalize();
        assert_eq!(toggles, StatusToggles::all());
    }

    #[test]
    fn counts_and_clipboard() {
        let rows = sample_rows();
        let counts = status_counts(&rows);
        assert_eq!(
            counts,
            StatusCounts {
                missing: 1,
                low: 2,
                stocked: 1
            }
        );
        assert_eq!(counts.total(), 4);

        let visible = filtered_rows(&rows, &FilterState::new("mineral", StatusToggles::all()));
        assert_eq!(clipboard_text(&visible), "Tritanium\nMegacyte");
        assert_eq!(clipboard_text(&[]), "");
    }
}
