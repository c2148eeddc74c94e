//! Bridges to page APIs (location hash, history, clipboard) via `eval`.

use dioxus::{document, prelude::*};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no items to copy")]
    Empty,
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard bridge failed: {0}")]
    Bridge(String),
}

pub async fn read_location_hash() -> Option<String> {
    let value = document::eval("return window.location.hash;").await.ok()?;
    value.as_str().map(str::to_string)
}

pub fn push_location_hash(hash: &str) {
    let payload = serde_json::to_string(hash).unwrap_or_else(|_| "\"#\"".to_string());
    let script = format!(
        r#"if (window.location.hash !== {payload}) {{
            history.pushState(null, "", {payload});
        }}"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            println!("[fragment] Failed to update location hash: {err:?}");
        }
    });
}

/// Puts the newline-separated item list on the clipboard and returns how
/// many names were copied.
pub async fn copy_item_list(item_list: &str) -> Result<usize, ClipboardError> {
    let count = item_list.lines().filter(|line| !line.trim().is_empty()).count();
    if count == 0 {
        return Err(ClipboardError::Empty);
    }

    let payload =
        serde_json::to_string(item_list).map_err(|err| ClipboardError::Bridge(err.to_string()))?;
    // Webviews without the async clipboard API fall back to a selection copy.
    let script = format!(
        r#"const items = {payload};
        if (navigator.clipboard && navigator.clipboard.writeText) {{
            try {{
                await navigator.clipboard.writeText(items);
                return "clipboard";
            }} catch (_err) {{}}
        }}
        const area = document.createElement("textarea");
        area.value = items;
        area.readOnly = true;
        area.style.cssText = "position:fixed;left:-9999px;top:0";
        document.body.append(area);
        area.select();
        const copied = document.execCommand("copy");
        area.remove();
        return copied ? "selection" : "";"#
    );

    let outcome = document::eval(&script)
        .await
        .map_err(|err| ClipboardError::Bridge(format!("{err:?}")))?;
    match outcome.as_str() {
        Some(method) if !method.is_empty() => {
            println!("[clipboard] Copied {count} item names via {method}");
            Ok(count)
        }
        _ => Err(ClipboardError::Unavailable),
    }
}
