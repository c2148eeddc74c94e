//! Stock level classification.
//!
//! Expensive items only need a couple of units on the shelf, items that
//! trade heavily at the hub need thousands, and everything else uses a flat
//! threshold of ten (a lot of things get stocked in stacks of 10).

use super::entities::{MarketRow, StockStatus};

pub const EXPENSIVE_PRICE: f64 = 50_000_000.0;
pub const EXPENSIVE_LOW_MAX: f64 = 2.0;
pub const LIQUID_HUB_VOLUME: f64 = 100_000.0;
pub const LIQUID_LOW_BELOW: f64 = 5_000.0;
pub const DEFAULT_LOW_BELOW: f64 = 10.0;

pub fn classify(volume: f64, price: Option<f64>, hub_volume: Option<f64>) -> StockStatus {
    if volume == 0.0 {
        return StockStatus::Missing;
    }

    let low = if price.is_some_and(|p| p >= EXPENSIVE_PRICE) {
        volume <= EXPENSIVE_LOW_MAX
    } else if hub_volume.is_some_and(|v| v > LIQUID_HUB_VOLUME) {
        volume < LIQUID_LOW_BELOW
    } else {
        volume < DEFAULT_LOW_BELOW
    };

    if low {
        StockStatus::Low
    } else {
        StockStatus::Stocked
    }
}

pub fn classify_rows(rows: &mut [MarketRow]) {
    for row in rows.iter_mut() {
        row.reclassify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expensive_tier_boundary() {
        assert_eq!(classify(2.0, Some(50_000_000.0), None), StockStatus::Low);
        assert_eq!(classify(3.0, Some(50_000_000.0), None), StockStatus::Stocked);
        assert_eq!(classify(3.0, Some(49_999_999.0), None), StockStatus::Low);
    }

    #[test]
    fn liquid_tier_boundary() {
        assert_eq!(classify(4999.0, None, Some(100_001.0)), StockStatus::Low);
        assert_eq!(classify(5000.0, None, Some(100_001.0)), StockStatus::Stocked);
        assert_eq!(classify(4999.0, None, Some(100_000.0)), StockStatus::Stocked);
    }

    #[test]
    fn expensive_tier_wins_over_hub_volume() {
        assert_eq!(
            classify(3.0, Some(60_000_000.0), Some(500_000.0)),
            StockStatus::Stocked
        );
    }

    #[test]
    fn default_tier_boundary() {
        assert_eq!(classify(9.0, None, None), StockStatus::Low);
        assert_eq!(classify(10.0, None, None), StockStatus::Stocked);
        assert_eq!(classify(1.0, Some(1000.0), Some(50.0)), StockStatus::Low);
    }

    #[test]
    fn zero_volume_is_missing_regardless_of_other_fields() {
        assert_eq!(classify(0.0, None, None), StockStatus::Missing);
        assert_eq!(classify(0.0, Some(90_000_000.0), None), StockStatus::Missing);
        assert_eq!(classify(0.0, None, Some(1_000_000.0)), StockStatus::Missing);
    }

    #[test]
    fn exactly_one_status_flag_is_set() {
        let volumes = [0.0, 1.0, 2.0, 3.0, 9.0, 10.0, 4999.0, 5000.0, 1e9];
        let prices = [None, Some(10.0), Some(50_000_000.0)];
        let hubs = [None, Some(100.0), Some(100_001.0)];
        for volume in volumes {
            for price in prices {
                for hub in hubs {
                    let row = MarketRow::new("x", "y", volume, price, hub);
                    let set = [row.missing(), row.stock_low(), row.stocked()]
                        .iter()
                        .filter(|flag| **flag)
                        .count();
                    assert_eq!(set, 1, "{volume} {price:?} {hub:?}");
                }
            }
        }
    }

    #[test]
    fn classify_rows_refreshes_stale_status() {
        let mut rows = vec![MarketRow::new("Tritanium", "Mineral", 50.0, None, None)];
        rows[0].volume = 0.0;
        classify_rows(&mut rows);
        assert!(rows[0].missing());
    }
}
