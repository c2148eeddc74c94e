use std::time::SystemTime;

use time::{format_description, OffsetDateTime};

use crate::domain::TypeId;

/// Two fixed decimals with `,` thousands separators, e.g. `1,234.50`.
pub fn format_decimal(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_thousands(whole))
}

/// Whole units with `,` thousands separators.
pub fn format_count(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let rounded = format!("{:.0}", amount.abs());
    let sign = if amount < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}{}", group_thousands(&rounded))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fetch time in UTC ("EVE time").
pub fn format_fetched_at(time: SystemTime) -> String {
    let Ok(description) = format_description::parse("[year]-[month]-[day] [hour]:[minute]") else {
        return "unknown".to_string();
    };
    OffsetDateTime::from(time)
        .format(&description)
        .map(|text| format!("{text} UTC"))
        .unwrap_or_else(|_| "unknown".to_string())
}

pub fn icon_url(type_id: TypeId) -> String {
    format!("https://images.evetech.net/types/{type_id}/icon")
}

pub fn price_history_url(type_id: TypeId) -> String {
    format!("https://market.fuzzwork.co.uk/hub/type/{type_id}/")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn decimal_has_two_places_and_separators() {
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(5.0), "5.00");
        assert_eq!(format_decimal(999.999), "1,000.00");
        assert_eq!(format_decimal(1_234_567.891), "1,234,567.89");
        assert_eq!(format_decimal(-1234.5), "-1,234.50");
        assert_eq!(format_decimal(-0.001), "0.00");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(100_000.0), "100,000");
        assert_eq!(format_count(1_000_001.4), "1,000,001");
    }

    #[test]
    fn fetched_at_is_utc() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 + 3_600 + 120);
        assert_eq!(format_fetched_at(time), "1970-01-02 01:02 UTC");
    }

    #[test]
    fn type_links() {
        assert_eq!(icon_url(34), "https://images.evetech.net/types/34/icon");
        assert_eq!(
            price_history_url(44992),
            "https://market.fuzzwork.co.uk/hub/type/44992/"
        );
    }
}
