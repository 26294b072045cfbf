//! US equity market session derivation.
//!
//! Session boundaries are kept as data in a [`SessionTable`] keyed by the
//! daylight-saving flag, so a schedule change is a configuration change. The DST
//! window is the usual US approximation: from the second Sunday of March to the
//! first Sunday of November, both at midnight.
//!
//! - `is_dst_at(now)` — whether `now` falls in the DST window of its own year.
//! - `MarketSession::at(now, summer, table)` — session bucket of a UTC instant.
//! - `get_us_market_session()` — the same for the current wall clock.
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Trading session of the US equity market.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarketSession {
    /// Before the opening auction.
    Premarket,
    /// Main session.
    Regular,
    /// After the close, overnight and on weekends.
    Afterhours,
}

/// Session boundaries in minutes after midnight UTC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionBounds {
    /// Start of the premarket.
    pub premarket_start: u16,
    /// End of the premarket and start of the regular session.
    pub regular_start: u16,
    /// End of the regular session.
    pub regular_end: u16,
}

impl SessionBounds {
    /// Builds bounds from `(hour, minute)` pairs.
    pub const fn from_hm(
        premarket_start: (u16, u16),
        regular_start: (u16, u16),
        regular_end: (u16, u16),
    ) -> Self {
        SessionBounds {
            premarket_start: premarket_start.0 * 60 + premarket_start.1,
            regular_start: regular_start.0 * 60 + regular_start.1,
            regular_end: regular_end.0 * 60 + regular_end.1,
        }
    }

    /// Session containing `minute` of a trading day.
    pub fn classify(&self, minute: u16) -> MarketSession {
        if (self.premarket_start..self.regular_start).contains(&minute) {
            MarketSession::Premarket
        } else if (self.regular_start..self.regular_end).contains(&minute) {
            MarketSession::Regular
        } else {
            MarketSession::Afterhours
        }
    }
}

/// Session bounds for daylight-saving (summer) and standard (winter) time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct SessionTable {
    /// Bounds while US daylight-saving time is in effect.
    pub summer: SessionBounds,
    /// Bounds for the rest of the year.
    pub winter: SessionBounds,
}

impl Default for SessionTable {
    fn default() -> Self {
        SessionTable {
            summer: SessionBounds::from_hm((8, 0), (13, 30), (20, 0)),
            winter: SessionBounds::from_hm((9, 0), (14, 30), (21, 0)),
        }
    }
}

impl SessionTable {
    /// Bounds for the given DST flag.
    pub fn bounds(&self, summer: bool) -> &SessionBounds {
        if summer { &self.summer } else { &self.winter }
    }
}

impl MarketSession {
    /// Session at the UTC instant `now`. Weekends are always after hours.
    pub fn at(now: DateTime<Utc>, summer: bool, table: &SessionTable) -> Self {
        if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
            return MarketSession::Afterhours;
        }

        let minute = (now.hour() * 60 + now.minute()) as u16;
        table.bounds(summer).classify(minute)
    }
}

/// Whether `now` falls within the US daylight-saving window of its year, both
/// bounds taken at midnight in the time zone of `now`.
pub fn is_dst_at<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    let year = now.year();
    let zone = now.timezone();
    let midnight = |date: Option<NaiveDate>| {
        date.and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|naive| zone.from_local_datetime(&naive).earliest())
    };

    let start = midnight(NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2));
    let end = midnight(NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1));

    match (start, end) {
        (Some(start), Some(end)) => *now >= start && *now <= end,
        _ => false,
    }
}

/// Whether the host clock is currently within the US daylight-saving window.
pub fn is_dst() -> bool {
    is_dst_at(&Local::now())
}

/// Current US market session with the default session table.
pub fn get_us_market_session() -> MarketSession {
    MarketSession::at(Utc::now(), is_dst(), &SessionTable::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_dst_window_2026() {
        // Second Sunday of March 2026 is the 8th, first Sunday of November the 1st.
        assert!(!is_dst_at(&utc(2026, 3, 7, 23, 59)));
        assert!(is_dst_at(&utc(2026, 3, 8, 0, 0)));
        assert!(is_dst_at(&utc(2026, 7, 1, 12, 0)));
        assert!(is_dst_at(&utc(2026, 11, 1, 0, 0)));
        assert!(!is_dst_at(&utc(2026, 11, 1, 0, 1)));
        assert!(!is_dst_at(&utc(2026, 1, 15, 12, 0)));
    }

    #[test]
    fn test_dst_when_march_starts_on_sunday() {
        // 1 March 2020 is a Sunday, so the window opens on the 8th.
        assert!(!is_dst_at(&utc(2020, 3, 7, 12, 0)));
        assert!(is_dst_at(&utc(2020, 3, 8, 12, 0)));
    }

    #[test]
    fn test_weekend_is_afterhours() {
        let table = SessionTable::default();
        // 17 October 2026 is a Saturday.
        assert_eq!(MarketSession::at(utc(2026, 10, 17, 15, 0), true, &table), MarketSession::Afterhours);
        assert_eq!(MarketSession::at(utc(2026, 10, 18, 15, 0), false, &table), MarketSession::Afterhours);
    }

    #[test]
    fn test_summer_buckets() {
        let table = SessionTable::default();
        let friday = |h, m| MarketSession::at(utc(2026, 10, 16, h, m), true, &table);

        assert_eq!(friday(7, 59), MarketSession::Afterhours);
        assert_eq!(friday(8, 0), MarketSession::Premarket);
        assert_eq!(friday(13, 29), MarketSession::Premarket);
        assert_eq!(friday(13, 30), MarketSession::Regular);
        assert_eq!(friday(19, 59), MarketSession::Regular);
        assert_eq!(friday(20, 0), MarketSession::Afterhours);
    }

    #[test]
    fn test_winter_buckets() {
        let table = SessionTable::default();
        let monday = |h, m| MarketSession::at(utc(2026, 1, 12, h, m), false, &table);

        assert_eq!(monday(8, 30), MarketSession::Afterhours);
        assert_eq!(monday(9, 0), MarketSession::Premarket);
        assert_eq!(monday(14, 30), MarketSession::Regular);
        assert_eq!(monday(20, 30), MarketSession::Regular);
        assert_eq!(monday(21, 0), MarketSession::Afterhours);
    }

    #[test]
    fn test_table_is_configuration() {
        let json = r#"{
            "summer": {"premarketStart": 480, "regularStart": 810, "regularEnd": 1200},
            "winter": {"premarketStart": 600, "regularStart": 870, "regularEnd": 1260}
        }"#;
        let table: SessionTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.summer, SessionTable::default().summer);
        assert_eq!(MarketSession::at(utc(2026, 1, 12, 9, 30), false, &table), MarketSession::Afterhours);
    }

    #[test]
    fn test_session_names() {
        assert_eq!(MarketSession::Afterhours.to_string(), "afterhours");
        assert_eq!("premarket".parse::<MarketSession>().unwrap(), MarketSession::Premarket);
    }
}
