#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::{
    config::FEED_URL_ENV,
    version::{version_label, APP_NAME},
};

fn main() {
    println!("[startup] {APP_NAME} {}", version_label());
    if let Ok(url) = std::env::var(FEED_URL_ENV) {
        println!("[startup] Feed URL overridden by {FEED_URL_ENV}: {url}");
    }

    let builder = LaunchBuilder::new();

    // The board is a wide table; open large enough to show every column.
    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
                .with_inner_size(LogicalSize::new(1120.0, 800.0)),
        )
    });

    builder.launch(app::App);
}
