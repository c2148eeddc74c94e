//! Transient notices for feed loads and exports.
//!
//! Repeating the same notice (say, a refresh that keeps failing) refreshes
//! the existing entry instead of stacking copies. Errors stay until they
//! are dismissed or a later successful load clears them; everything else
//! fades on its own.

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const NOTICE_LIFETIME: Duration = Duration::from_secs(6);
const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Warning => "toast warning",
            ToastKind::Error => "toast error",
        }
    }

    fn sticky(self) -> bool {
        matches!(self, ToastKind::Error)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| enqueue(entries, kind, text));
}

/// Drops every notice of `kind`, e.g. stale load errors after a good fetch.
pub fn clear_toasts(mut toasts: Signal<Vec<ToastMessage>>, kind: ToastKind) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.kind != kind));
}

fn enqueue(entries: &mut Vec<ToastMessage>, kind: ToastKind, text: String) {
    entries.retain(|toast| !(toast.kind == kind && toast.text == text));
    while entries.len() >= MAX_NOTICES {
        // Evict the oldest transient notice first so errors stay visible.
        let victim = entries
            .iter()
            .position(|toast| !toast.kind.sticky())
            .unwrap_or(0);
        entries.remove(victim);
    }
    entries.push(ToastMessage {
        id: generate_id("toast"),
        kind,
        text,
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for entry in entries {
                    Notice { key: "{entry.id}", entry, toasts }
                }
            }
        }
    }
}

#[component]
fn Notice(entry: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = entry.id.clone();
    let sticky = entry.kind.sticky();
    let _lifetime = use_future(move || {
        let id = id.clone();
        let mut toasts = toasts;
        async move {
            if sticky {
                return;
            }
            tokio::time::sleep(NOTICE_LIFETIME).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = entry.id.clone();
    let mut toasts = toasts;
    rsx! {
        li {
            class: entry.kind.css_class(),
            span { "{entry.text}" }
            button {
                onclick: move |_| {
                    toasts.with_mut(|items| items.retain(|toast| toast.id != dismiss_id));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[ToastMessage]) -> Vec<&str> {
        entries.iter().map(|toast| toast.text.as_str()).collect()
    }

    #[test]
    fn repeated_notice_is_refreshed_not_stacked() {
        let mut entries = Vec::new();
        enqueue(&mut entries, ToastKind::Error, "Failed to load market data".into());
        enqueue(&mut entries, ToastKind::Info, "Copied 3 item names".into());
        enqueue(&mut entries, ToastKind::Error, "Failed to load market data".into());
        assert_eq!(
            texts(&entries),
            vec!["Copied 3 item names", "Failed to load market data"]
        );
    }

    #[test]
    fn overflow_evicts_transient_notices_before_errors() {
        let mut entries = Vec::new();
        enqueue(&mut entries, ToastKind::Error, "load failed".into());
        for idx in 0..5 {
            enqueue(&mut entries, ToastKind::Info, format!("info {idx}"));
        }
        assert_eq!(entries.len(), MAX_NOTICES);
        assert_eq!(entries[0].text, "load failed");
        assert_eq!(entries.last().map(|t| t.text.as_str()), Some("info 4"));
    }
}
