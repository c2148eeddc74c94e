//! Client for the station market feed.
//!
//! - One read-only `GET` returning a JSON array of rows, or raw structure
//!   sell/buy orders that get summarized into rows.
//! - Numbers are decoded leniently: numeric strings are accepted, anything
//!   else (null, negative, NaN, text) counts as absent and a missing volume
//!   counts as zero.

use std::{collections::HashMap, time::SystemTime};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    classify_rows, rows_from_orders, MarketOrder, MarketRow, StockStatus, TypeId, TypeLabel,
};

const USER_AGENT: &str = "market-board/1.0.0";

#[derive(Debug, Error)]
pub enum MarketClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("error fetching market data (HTTP {status})")]
    FetchFailure { status: u16 },
    #[error("unexpected market data: {0}")]
    Decode(String),
}

/// Rows from one successful fetch.
#[derive(Clone, Debug)]
pub struct MarketSnapshot {
    pub rows: Vec<MarketRow>,
    pub fetched_at: SystemTime,
    /// Entries that could not be read as rows.
    pub skipped: usize,
}

#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    feed_url: Url,
}

impl MarketClient {
    pub fn new(feed_url: &str) -> Result<Self, MarketClientError> {
        let feed_url = Url::parse(feed_url.trim())?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, feed_url })
    }

    pub async fn fetch_rows(&self) -> Result<MarketSnapshot, MarketClientError> {
        println!("[market] Requesting {}", self.feed_url);

        let response = self.http.get(self.feed_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketClientError::FetchFailure {
                status: status.as_u16(),
            });
        }

        let raw: serde_json::Value = response.json().await?;
        let (mut rows, skipped) = parse_rows(raw)?;
        classify_rows(&mut rows);

        println!(
            "[market] Loaded {} rows ({} skipped) from {}",
            rows.len(),
            skipped,
            self.feed_url
        );

        Ok(MarketSnapshot {
            rows,
            fetched_at: SystemTime::now(),
            skipped,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MarketRowDto {
    item: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    price: Option<f64>,
    #[serde(default, alias = "hubVolume", deserialize_with = "lenient_number")]
    hub_volume: Option<f64>,
    #[serde(default, alias = "typeID", alias = "typeId", deserialize_with = "lenient_type_id")]
    type_id: Option<TypeId>,
}

#[derive(Debug, Deserialize)]
struct MarketRowWrapper {
    data: Vec<serde_json::Value>,
}

/// Raw structure orders plus optional names keyed by type id.
#[derive(Debug, Deserialize)]
struct OrderFeed {
    orders: Vec<serde_json::Value>,
    #[serde(default)]
    types: HashMap<String, TypeLabel>,
}

impl OrderFeed {
    fn labels(&self) -> HashMap<TypeId, TypeLabel> {
        self.types
            .iter()
            .filter_map(|(key, label)| Some((key.trim().parse::<TypeId>().ok()?, label.clone())))
            .collect()
    }
}

/// Status is left for the caller to classify.
impl From<MarketRowDto> for MarketRow {
    fn from(dto: MarketRowDto) -> Self {
        Self {
            item: dto.item,
            group: dto.group.unwrap_or_default(),
            volume: dto.volume.unwrap_or(0.0),
            price: dto.price,
            hub_volume: dto.hub_volume,
            type_id: dto.type_id,
            status: StockStatus::Missing,
        }
    }
}

/// Accepts row feeds (a bare array or `{"data": [...]}`) and order feeds
/// (a bare array of orders or `{"orders": [...], "types": {...}}`).
/// Order feeds are summarized into one row per type.
pub fn parse_rows(value: serde_json::Value) -> Result<(Vec<MarketRow>, usize), MarketClientError> {
    if value.get("orders").is_some() {
        let feed = serde_json::from_value::<OrderFeed>(value)
            .map_err(|err| MarketClientError::Decode(err.to_string()))?;
        let labels = feed.labels();
        return Ok(parse_orders(feed.orders, &labels));
    }

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        other => serde_json::from_value::<MarketRowWrapper>(other)
            .map(|wrapper| wrapper.data)
            .map_err(|err| MarketClientError::Decode(err.to_string()))?,
    };

    if looks_like_orders(&entries) {
        return Ok(parse_orders(entries, &HashMap::new()));
    }

    let total = entries.len();
    let rows: Vec<MarketRow> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<MarketRowDto>(entry).ok())
        .filter(|dto| !dto.item.trim().is_empty())
        .map(MarketRow::from)
        .collect();
    let skipped = total - rows.len();
    Ok((rows, skipped))
}

fn looks_like_orders(entries: &[serde_json::Value]) -> bool {
    entries
        .first()
        .and_then(serde_json::Value::as_object)
        .is_some_and(|entry| {
            entry.contains_key("is_buy_order")
                && entry.contains_key("volume_remain")
                && !entry.contains_key("item")
        })
}

fn parse_orders(
    entries: Vec<serde_json::Value>,
    labels: &HashMap<TypeId, TypeLabel>,
) -> (Vec<MarketRow>, usize) {
    let total = entries.len();
    let orders: Vec<MarketOrder> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<MarketOrder>(entry).ok())
        .collect();
    let skipped = total - orders.len();
    println!(
        "[market] Summarizing {} orders ({} skipped) into rows",
        orders.len(),
        skipped
    );
    (rows_from_orders(&orders, labels), skipped)
}

fn number_from_value(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (number.is_finite() && number >= 0.0).then_some(number)
}

/// Whole, in-range ids only; anything else is treated as absent.
fn type_id_from_value(value: &serde_json::Value) -> Option<TypeId> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if let Some(id) = value.as_i64() {
        return (id >= 0).then_some(id);
    }
    let number = number_from_value(value)?;
    (number.fract() == 0.0 && number <= MAX_EXACT).then_some(number as TypeId)
}

fn lenient_type_id<'de, D>(deserializer: D) -> Result<Option<TypeId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(type_id_from_value(&value))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}
