use dioxus::prelude::*;

use crate::domain::{StatusToggles, StockStatus};

/// One checkbox per status category.
#[component]
pub fn StatusToggleBar(toggles: StatusToggles, on_toggle: EventHandler<StockStatus>) -> Element {
    rsx! {
        div {
            class: "toolbar",
            for status in StockStatus::ALL {
                label {
                    key: "{status.keyword()}",
                    class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: toggles.shows(status),
                        onchange: move |_| on_toggle.call(status),
                    }
                    "{status.label()}"
                }
            }
        }
    }
}
