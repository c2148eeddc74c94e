use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    app::{sync_location_hash, ReloadRequest},
    domain::{clipboard_text, status_counts, AppState, MarketRow, StockStatus},
    ui::{
        browser::copy_item_list,
        components::{
            kpi_card::KpiCard,
            market_table::MarketTable,
            status_toggles::StatusToggleBar,
            toast::{push_toast, ToastKind, ToastMessage},
        },
    },
    util::format::format_fetched_at,
};

#[component]
pub fn MarketPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<ReloadRequest>();

    let (visible, counts, filter, loading, load_error, fetched_at) = state.with(|st| {
        let visible: Vec<MarketRow> = st.visible_rows().into_iter().cloned().collect();
        (
            visible,
            status_counts(&st.rows),
            st.filter.clone(),
            st.loading,
            st.load_error.clone(),
            st.fetched_at,
        )
    });

    let shown = visible.len();
    let copy_payload = {
        let refs: Vec<&MarketRow> = visible.iter().collect();
        clipboard_text(&refs)
    };

    let copied = use_signal(|| false);
    let on_copy = {
        let toasts = toasts.clone();
        let mut copied = copied.clone();
        move |_| {
            let item_list = copy_payload.clone();
            spawn(async move {
                match copy_item_list(&item_list).await {
                    Ok(count) => {
                        copied.set(true);
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Copied {count} item names."),
                        );
                        sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                    Err(err) => {
                        push_toast(toasts.clone(), ToastKind::Warning, format!("Copy failed: {err}"));
                    }
                }
            });
        }
    };

    let on_query = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            state.with_mut(|st| st.filter.query = value);
            sync_location_hash(&state);
        }
    };

    let on_toggle = {
        let mut state = state.clone();
        move |status: StockStatus| {
            state.with_mut(|st| st.filter.toggles.toggle(status));
            sync_location_hash(&state);
        }
    };

    let updated_label = fetched_at
        .map(|time| format!("Last updated {}", format_fetched_at(time)))
        .unwrap_or_else(|| "Not loaded yet".to_string());

    rsx! {
        div {
            div {
                class: "toolbar",
                div {
                    h2 { class: "shell-title", "Station market" }
                    p { class: "hint", "{updated_label}" }
                }
                button {
                    class: "button",
                    disabled: loading,
                    onclick: move |_| reload.trigger(),
                    if loading { "Loading..." } else { "Refresh" }
                }
                button {
                    class: "button primary",
                    disabled: shown == 0,
                    onclick: on_copy,
                    if copied() { "Copied!" } else { "Copy item names" }
                }
            }

            if let Some(message) = load_error {
                div { class: "banner error", "{message}" }
            }

            div {
                class: "kpi-row",
                KpiCard {
                    title: "Items".to_string(),
                    value: counts.total().to_string(),
                    description: Some(format!("{shown} shown")),
                }
                for status in [StockStatus::Missing, StockStatus::Low, StockStatus::Stocked] {
                    KpiCard {
                        key: "{status.keyword()}",
                        title: status.label().to_string(),
                        value: counts.get(status).to_string(),
                        description: None,
                    }
                }
            }

            div {
                class: "toolbar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search items or groups, e.g. mineral -missing",
                    value: "{filter.query}",
                    oninput: on_query,
                }
            }
            StatusToggleBar { toggles: filter.toggles, on_toggle }

            if loading && counts.total() == 0 {
                div { class: "banner info", "Loading market data..." }
            }

            MarketTable { rows: visible }
        }
    }
}
