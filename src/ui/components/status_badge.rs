use dioxus::prelude::*;

use crate::domain::StockStatus;

#[component]
pub fn StatusBadge(status: StockStatus) -> Element {
    rsx! {
        span {
            class: "status-badge {status.keyword()}",
            "{status.label()}"
        }
    }
}
