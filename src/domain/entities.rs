use serde::Deserialize;

/// Identifier for item types in the market feed.
pub type TypeId = i64;

/// Stock level of a single item at the station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[default]
    Missing,
    Low,
    Stocked,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Low, StockStatus::Missing, StockStatus::Stocked];

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Missing => "Missing",
            StockStatus::Low => "Low",
            StockStatus::Stocked => "Stocked",
        }
    }

    /// Lowercase keyword used by search tokens and the address fragment.
    pub fn keyword(&self) -> &'static str {
        match self {
            StockStatus::Missing => "missing",
            StockStatus::Low => "low",
            StockStatus::Stocked => "stocked",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "missing" => Some(StockStatus::Missing),
            "low" => Some(StockStatus::Low),
            "stocked" => Some(StockStatus::Stocked),
            _ => None,
        }
    }
}

/// One tradeable item's stock record, classified on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketRow {
    pub item: String,
    pub group: String,
    pub volume: f64,
    pub price: Option<f64>,
    pub hub_volume: Option<f64>,
    pub type_id: Option<TypeId>,
    pub status: StockStatus,
}

impl MarketRow {
    pub fn new(
        item: impl Into<String>,
        group: impl Into<String>,
        volume: f64,
        price: Option<f64>,
        hub_volume: Option<f64>,
    ) -> Self {
        let mut row = Self {
            item: item.into(),
            group: group.into(),
            volume,
            price,
            hub_volume,
            type_id: None,
            status: StockStatus::Missing,
        };
        row.reclassify();
        row
    }

    pub fn with_type_id(mut self, type_id: TypeId) -> Self {
        self.type_id = Some(type_id);
        self
    }

    /// Recomputes `status` from the numeric fields.
    pub fn reclassify(&mut self) {
        self.status = super::classify::classify(self.volume, self.price, self.hub_volume);
    }

    pub fn missing(&self) -> bool {
        self.status == StockStatus::Missing
    }

    pub fn stock_low(&self) -> bool {
        self.status == StockStatus::Low
    }

    pub fn stocked(&self) -> bool {
        self.status == StockStatus::Stocked
    }
}

/// Raw market order as returned by the structure market endpoint.
/// Unknown fields (order id, location, duration...) are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketOrder {
    pub type_id: TypeId,
    pub is_buy_order: bool,
    pub price: f64,
    pub volume_remain: u64,
}

/// Display name and group for an item type in an order feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypeLabel {
    pub item: String,
    #[serde(default)]
    pub group: String,
}
