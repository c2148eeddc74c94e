use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, ReloadRequest},
    domain::{AppState, DEFAULT_FEED_URL},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        config::{resolve_feed_url, validate_feed_url, FEED_URL_ENV},
        version::version_label,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<ReloadRequest>();

    let mut feed_input = use_signal(|| state.with(|st| st.effective_feed_url()));
    let active_url = state.with(resolve_feed_url);
    let env_override = std::env::var(FEED_URL_ENV).is_ok();
    let version = version_label();

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match validate_feed_url(&feed_input()) {
            Ok(url) => {
                state.with_mut(|st| st.feed_url = Some(url));
                persist_user_state(&state);
                push_toast(toasts.clone(), ToastKind::Success, "Feed URL saved.");
                reload.trigger();
            }
            Err(message) => push_toast(toasts.clone(), ToastKind::Error, message),
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            feed_input.set(DEFAULT_FEED_URL.to_string());
            state.with_mut(|st| st.feed_url = None);
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Info, "Restored the default feed URL.");
            reload.trigger();
        }
    };

    rsx! {
        div {
            class: "settings-panel",
            h2 { class: "shell-title", "Settings" }
            label { r#for: "feed-url", "Market feed URL" }
            input {
                id: "feed-url",
                class: "text-input",
                value: "{feed_input}",
                oninput: move |evt| feed_input.set(evt.value()),
            }
            p { class: "hint", "Currently loading from {active_url}" }
            if env_override {
                p { class: "hint", "{FEED_URL_ENV} is set and takes precedence over this setting." }
            }
            div {
                class: "toolbar",
                button { class: "button primary", onclick: on_apply, "Save" }
                button { class: "button", onclick: on_reset, "Reset" }
            }
            p { class: "hint", "Version {version}" }
        }
    }
}
