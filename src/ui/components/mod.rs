pub mod kpi_card;
pub mod market_table;
pub mod status_badge;
pub mod status_toggles;
pub mod toast;
