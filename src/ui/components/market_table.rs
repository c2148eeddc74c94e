use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::MarketRow;
use crate::util::format::{format_count, format_decimal, icon_url, price_history_url};

#[component]
pub fn MarketTable(rows: Vec<MarketRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        table {
            class: "market-table",
            thead {
                tr {
                    th { "Item" }
                    th { "Group" }
                    th { class: "numeric", "Volume" }
                    th { class: "numeric", "Price (ISK)" }
                    th { class: "numeric", "Hub volume" }
                    th { "Status" }
                }
            }
            tbody {
                for (idx, row) in rows.into_iter().enumerate() {
                    MarketRowView { key: "{idx}", row }
                }
                if is_empty {
                    tr {
                        td {
                            class: "empty",
                            colspan: "6",
                            "No items match the current filter."
                        }
                    }
                }
            }
        }
    }
}

fn optional_decimal(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_else(|| "n/a".to_string())
}

fn optional_count(value: Option<f64>) -> String {
    value.map(format_count).unwrap_or_else(|| "n/a".to_string())
}

#[component]
fn MarketRowView(row: MarketRow) -> Element {
    let row_class = if row.missing() {
        "row-missing"
    } else {
        ""
    };
    let volume = format_count(row.volume);
    let price = optional_decimal(row.price);
    let hub_volume = optional_count(row.hub_volume);

    rsx! {
        tr {
            class: row_class,
            td {
                if let Some(type_id) = row.type_id {
                    img { class: "item-icon", src: icon_url(type_id), alt: "" }
                    a {
                        class: "item-link",
                        href: price_history_url(type_id),
                        target: "_blank",
                        "{row.item}"
                    }
                } else {
                    "{row.item}"
                }
            }
            td { "{row.group}" }
            td { class: "numeric", "{volume}" }
            td { class: "numeric", "{price}" }
            td { class: "numeric", "{hub_volume}" }
            td { StatusBadge { status: row.status } }
        }
    }
}
