//! Stylesheet and favicon, embedded from `assets/`.

use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

/// Board stylesheet. Empty if the asset is missing or not UTF-8.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text("main.css").unwrap_or_default())
}

/// The SVG favicon as a percent-encoded `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| {
        let svg = embedded_text("favicon.svg").unwrap_or_default();
        svg_data_uri(&svg)
    })
}

fn embedded_text(name: &str) -> Option<String> {
    let file = EmbeddedAssets::get(name);
    if file.is_none() {
        println!("[assets] Missing embedded asset {name}");
    }
    String::from_utf8(file?.data.into_owned()).ok()
}

fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(svg.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_has_status_colours() {
        let css = main_css();
        for class in [".status-badge.missing", ".status-badge.low", ".status-badge.stocked"] {
            assert!(css.contains(class), "{class}");
        }
    }

    #[test]
    fn favicon_is_an_svg_data_uri() {
        let uri = favicon_data_uri();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn unknown_asset_is_none() {
        assert!(embedded_text("nope.css").is_none());
    }
}
