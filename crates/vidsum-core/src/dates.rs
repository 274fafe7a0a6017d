//! Date formats used on the wire.

use chrono::{Datelike, Local, NaiveDate, Utc};

/// `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short `zh-TW` date: year/month/day without zero padding, e.g. `2026/3/7`.
#[must_use]
pub fn zh_tw_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

#[must_use]
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn iso_date_zero_pads() {
        assert_eq!(iso_date(date(2026, 3, 7)), "2026-03-07");
    }

    #[test]
    fn zh_tw_date_drops_padding() {
        assert_eq!(zh_tw_date(date(2026, 3, 7)), "2026/3/7");
        assert_eq!(zh_tw_date(date(2026, 10, 19)), "2026/10/19");
    }
}
