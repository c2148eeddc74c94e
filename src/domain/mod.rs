//! Stock classification and row filtering live here.

pub mod app_state;
pub mod classify;
pub mod entities;
pub mod filter;
pub mod fragment;
pub mod orders;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, DEFAULT_FEED_URL};
#[allow(unused_imports)]
pub use classify::{classify, classify_rows};
#[allow(unused_imports)]
pub use entities::{MarketOrder, MarketRow, StockStatus, TypeId, TypeLabel};
#[allow(unused_imports)]
pub use filter::{
    clipboard_text, filtered_rows, parse_query, status_counts, FilterState, SearchToken,
    StatusCounts, StatusToggles,
};
pub use fragment::{decode_fragment, encode_fragment};
#[allow(unused_imports)]
pub use orders::{rows_from_orders, summarize_orders, OrderSummary};
