//! Filter state <-> address fragment (`#<query>&low&missing&stocked`).

use super::entities::StockStatus;
use super::filter::{FilterState, StatusToggles};

pub fn decode_fragment(raw: &str) -> FilterState {
    let fragment = raw.rsplit('#').next().unwrap_or_default();
    let decoded = urlencoding::decode(fragment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| fragment.to_string());

    let mut parts = decoded.split('&');
    let query = parts.next().unwrap_or_default().to_string();
    let keywords: Vec<&str> = parts.collect();

    let mut toggles = StatusToggles::all();
    if !keywords.is_empty() {
        toggles = StatusToggles::none();
        for status in keywords
            .iter()
            .filter_map(|keyword| StockStatus::from_keyword(keyword))
        {
            toggles.set(status, true);
        }
        toggles.normalize();
    }

    FilterState { query, toggles }
}

pub fn encode_fragment(filter: &FilterState) -> String {
    let mut hash = format!("#{}", urlencoding::encode(&filter.query));
    if !filter.toggles.is_all() {
        for status in StockStatus::ALL {
            if filter.toggles.shows(status) {
                hash.push('&');
                hash.push_str(status.keyword());
            }
        }
    }
    hash
}
