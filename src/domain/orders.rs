//! Folds raw station sell orders into one summary per item type.

use std::collections::{BTreeMap, HashMap};

use super::entities::{MarketOrder, MarketRow, TypeId, TypeLabel};

#[derive(Clone, Debug, PartialEq)]
pub struct OrderSummary {
    pub type_id: TypeId,
    /// Lowest sell price across the type's orders.
    pub price: f64,
    /// Units remaining across all sell orders.
    pub volume: u64,
}

impl OrderSummary {
    pub fn into_row(self, item: impl Into<String>, group: impl Into<String>) -> MarketRow {
        MarketRow::new(item, group, self.volume as f64, Some(self.price), None)
            .with_type_id(self.type_id)
    }
}

/// Buy orders are ignored; the result is sorted by type id.
pub fn summarize_orders(orders: &[MarketOrder]) -> Vec<OrderSummary> {
    let mut grouped: BTreeMap<TypeId, OrderSummary> = BTreeMap::new();

    for order in orders.iter().filter(|order| !order.is_buy_order) {
        grouped
            .entry(order.type_id)
            .and_modify(|summary| {
                summary.price = summary.price.min(order.price);
                summary.volume += order.volume_remain;
            })
            .or_insert_with(|| OrderSummary {
                type_id: order.type_id,
                price: order.price,
                volume: order.volume_remain,
            });
    }

    grouped.into_values().collect()
}

/// Builds classified rows from raw orders. Types without a label are shown
/// as `Type <id>` with an empty group.
pub fn rows_from_orders(
    orders: &[MarketOrder],
    labels: &HashMap<TypeId, TypeLabel>,
) -> Vec<MarketRow> {
    summarize_orders(orders)
        .into_iter()
        .map(|summary| match labels.get(&summary.type_id) {
            Some(label) => {
                let (item, group) = (label.item.clone(), label.group.clone());
                summary.into_row(item, group)
            }
            None => {
                let item = format!("Type {}", summary.type_id);
                summary.into_row(item, "")
            }
        })
        .collect()
}
