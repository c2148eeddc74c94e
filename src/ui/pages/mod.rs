pub mod market;
pub mod settings;

pub use market::MarketPage;
pub use settings::SettingsPage;
