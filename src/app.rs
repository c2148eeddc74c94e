use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{decode_fragment, encode_fragment, AppState},
    infra::market::MarketClient,
    ui::{
        browser,
        components::toast::{clear_toasts, push_toast, Toast, ToastKind, ToastMessage},
        pages::{MarketPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        config::resolve_feed_url,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Market {},
    #[route("/settings")]
    Settings {},
}

/// Bumped to request a fresh fetch of the market feed.
#[derive(Clone, Copy)]
pub struct ReloadRequest(pub Signal<u64>);

impl ReloadRequest {
    pub fn trigger(mut self) {
        self.0.with_mut(|counter| *counter += 1);
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let reload = use_signal(|| 0_u64);
    use_context_provider(|| ReloadRequest(reload));

    // Filter state starts from the address fragment.
    let _fragment = use_future({
        let mut state = state.clone();
        move || async move {
            if let Some(hash) = browser::read_location_hash().await {
                let filter = decode_fragment(&hash);
                println!("[fragment] Restored filter {:?}", filter);
                state.with_mut(|st| st.filter = filter);
            }
        }
    });

    let _market = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        move || async move { load_market(state.clone(), toasts.clone(), reload).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("[settings] Failed to persist user state: {err}");
    }
}

/// Writes the current filter back into the address fragment.
pub fn sync_location_hash(state: &Signal<AppState>) {
    let hash = state.with(|st| encode_fragment(&st.filter));
    browser::push_location_hash(&hash);
}

async fn load_market(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    reload: Signal<u64>,
) -> Option<usize> {
    let attempt = reload();
    // Peek so row and filter updates do not re-trigger the fetch.
    let feed_url = resolve_feed_url(&state.peek());
    println!("[market] Load #{attempt} from {feed_url}");
    state.with_mut(|st| st.begin_load());

    let result = match MarketClient::new(&feed_url) {
        Ok(client) => client.fetch_rows().await,
        Err(err) => Err(err),
    };

    match result {
        Ok(snapshot) => {
            let count = snapshot.rows.len();
            if snapshot.skipped > 0 {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    format!("Skipped {} unreadable market rows.", snapshot.skipped),
                );
            }
            state.with_mut(|st| st.apply_rows(snapshot.rows, snapshot.fetched_at));
            clear_toasts(toasts.clone(), ToastKind::Error);
            Some(count)
        }
        Err(err) => {
            println!("[market] Failed to load {feed_url}: {err}");
            let message = format!("Failed to load market data: {err}");
            state.with_mut(|st| st.record_failure(message.clone()));
            push_toast(toasts.clone(), ToastKind::Error, message);
            None
        }
    }
}

#[component]
pub fn Market() -> Element {
    rsx! { Shell { MarketPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
