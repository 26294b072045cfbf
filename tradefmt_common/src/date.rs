//! Date and time formatting in the `ru-RU` 24-hour style.
//!
//! Dates arrive as millisecond timestamps, ISO-8601 text or `chrono` values. A
//! falsy date (`0`, empty text, nothing) and text that does not parse both render
//! as the placeholder.
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use log::debug;

use crate::locale::PLACEHOLDER;

/// A date as the terminal hands it over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    /// No date.
    Missing,
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// ISO-8601 date or date-time text.
    Text(&'a str),
    /// Resolved instant.
    Instant(DateTime<Utc>),
}

impl From<i64> for DateInput<'_> {
    fn from(millis: i64) -> Self {
        DateInput::Millis(millis)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(date: DateTime<Tz>) -> Self {
        DateInput::Instant(date.with_timezone(&Utc))
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(date: Option<T>) -> Self {
        date.map_or(DateInput::Missing, Into::into)
    }
}

impl DateInput<'_> {
    /// Resolves the input to an instant; `None` for falsy or unparseable input.
    ///
    /// Date-only text is taken as UTC midnight, date-time text without an offset
    /// as local time.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match *self {
            DateInput::Missing | DateInput::Millis(0) => None,
            DateInput::Millis(millis) => DateTime::from_timestamp_millis(millis),
            DateInput::Text(text) => parse_date_text(text.trim()),
            DateInput::Instant(instant) => Some(instant),
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Width of a rendered date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Natural width.
    Numeric,
    /// Zero-padded to two digits (years keep their last two).
    TwoDigit,
}

/// Options for [`format_date_with_options`]. Unset fields are not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeOptions {
    /// Year component.
    pub year: Option<DateField>,
    /// Month component.
    pub month: Option<DateField>,
    /// Day component.
    pub day: Option<DateField>,
    /// Hour component.
    pub hour: Option<DateField>,
    /// Minute component.
    pub minute: Option<DateField>,
    /// Second component.
    pub second: Option<DateField>,
    /// 12-hour clock with an AM/PM marker.
    pub hour12: Option<bool>,
    /// Render in this UTC offset (minutes east) instead of the host time zone.
    /// An offset of a day or more renders the placeholder.
    pub utc_offset_minutes: Option<i32>,
}

impl DateTimeOptions {
    /// Day, month and a 24-hour time with seconds.
    pub fn date_time() -> Self {
        DateTimeOptions {
            month: Some(DateField::Numeric),
            day: Some(DateField::Numeric),
            hour: Some(DateField::Numeric),
            minute: Some(DateField::Numeric),
            second: Some(DateField::Numeric),
            hour12: Some(false),
            ..DateTimeOptions::default()
        }
    }

    /// Renders in a fixed UTC offset.
    pub fn in_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// Returns `self` with every field set in `overlay` replaced by the overlay's value.
    pub fn merge(&self, overlay: &DateTimeOptions) -> DateTimeOptions {
        DateTimeOptions {
            year: overlay.year.or(self.year),
            month: overlay.month.or(self.month),
            day: overlay.day.or(self.day),
            hour: overlay.hour.or(self.hour),
            minute: overlay.minute.or(self.minute),
            second: overlay.second.or(self.second),
            hour12: overlay.hour12.or(self.hour12),
            utc_offset_minutes: overlay.utc_offset_minutes.or(self.utc_offset_minutes),
        }
    }

    fn has_components(&self) -> bool {
        [self.year, self.month, self.day, self.hour, self.minute, self.second]
            .iter()
            .any(Option::is_some)
    }
}

/// Formats `date` as day, month and 24-hour time (`16.10, 14:05:03`).
pub fn format_date<'a>(date: impl Into<DateInput<'a>>) -> String {
    format_date_with_options(date, &DateTimeOptions::date_time())
}

/// Formats `date` with `options` overlaid on the 24-hour defaults.
///
/// Without any component requested the date renders as `dd.MM.yyyy`.
pub fn format_date_with_options<'a>(
    date: impl Into<DateInput<'a>>,
    options: &DateTimeOptions,
) -> String {
    let input = date.into();
    let Some(instant) = input.resolve() else {
        debug!("date {:?} is not displayable", input);
        return PLACEHOLDER.to_string();
    };

    let mut options = DateTimeOptions {
        hour12: Some(false),
        ..DateTimeOptions::default()
    }
    .merge(options);
    if !options.has_components() {
        options.year = Some(DateField::Numeric);
        options.month = Some(DateField::Numeric);
        options.day = Some(DateField::Numeric);
    }

    let local = match options.utc_offset_minutes {
        Some(minutes) => match minutes.checked_mul(60).and_then(FixedOffset::east_opt) {
            Some(offset) => instant.with_timezone(&offset).naive_local(),
            None => {
                debug!("UTC offset of {} minutes is out of range", minutes);
                return PLACEHOLDER.to_string();
            }
        },
        None => instant.with_timezone(&Local).naive_local(),
    };

    render(&local, &options)
}

fn render(local: &NaiveDateTime, options: &DateTimeOptions) -> String {
    let date = render_date(local, options);
    let time = render_time(local, options);
    match (date.is_empty(), time.is_empty()) {
        (false, false) => format!("{date}, {time}"),
        (true, _) => time,
        (_, true) => date,
    }
}

fn render_date(local: &NaiveDateTime, options: &DateTimeOptions) -> String {
    let components = [options.day, options.month, options.year];
    let single = components.iter().filter(|c| c.is_some()).count() == 1;

    let pad = |field: DateField, value: u32| match (field, single) {
        (DateField::Numeric, true) => value.to_string(),
        _ => format!("{value:02}"),
    };

    let mut parts = Vec::with_capacity(3);
    if let Some(field) = options.day {
        parts.push(pad(field, local.day()));
    }
    if let Some(field) = options.month {
        parts.push(pad(field, local.month()));
    }
    if let Some(field) = options.year {
        parts.push(match field {
            DateField::Numeric => local.year().to_string(),
            DateField::TwoDigit => format!("{:02}", local.year().rem_euclid(100)),
        });
    }
    parts.join(".")
}

fn render_time(local: &NaiveDateTime, options: &DateTimeOptions) -> String {
    let hour12 = options.hour12.unwrap_or(false);
    let mut parts = Vec::with_capacity(3);

    if options.hour.is_some() {
        parts.push(if hour12 {
            let (_, hour) = local.hour12();
            hour.to_string()
        } else {
            format!("{:02}", local.hour())
        });
    }
    if options.minute.is_some() {
        parts.push(format!("{:02}", local.minute()));
    }
    if options.second.is_some() {
        parts.push(format!("{:02}", local.second()));
    }

    let mut time = parts.join(":");
    if hour12 && options.hour.is_some() {
        let (pm, _) = local.hour12();
        time.push(' ');
        time.push_str(if pm { "PM" } else { "AM" });
    }
    time
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utc(overlay: DateTimeOptions) -> DateTimeOptions {
        overlay.in_offset(0)
    }

    // 2026-10-16T09:05:03Z
    const MILLIS: i64 = 1_792_141_503_000;

    #[test]
    fn test_format_date_time() {
        let options = utc(DateTimeOptions::date_time());
        assert_eq!(format_date_with_options(MILLIS, &options), "16.10, 09:05:03");
        assert_eq!(
            format_date_with_options("2026-10-16T09:05:03Z", &options),
            "16.10, 09:05:03"
        );
    }

    #[test]
    fn test_default_is_day_month_year() {
        let options = utc(DateTimeOptions::default());
        assert_eq!(format_date_with_options(MILLIS, &options), "16.10.2026");
        assert_eq!(format_date_with_options("2026-01-02", &options), "02.01.2026");
    }

    #[test]
    fn test_offset_moves_the_wall_clock() {
        let options = DateTimeOptions::date_time().in_offset(180);
        assert_eq!(format_date_with_options(MILLIS, &options), "16.10, 12:05:03");
    }

    #[test]
    fn test_out_of_range_offset_is_placeholder() {
        let huge = DateTimeOptions::date_time().in_offset(i32::MAX / 2);
        assert_eq!(format_date_with_options(MILLIS, &huge), "—");

        let day = DateTimeOptions::date_time().in_offset(24 * 60);
        assert_eq!(format_date_with_options(MILLIS, &day), "—");

        let almost = DateTimeOptions::date_time().in_offset(-(23 * 60 + 59));
        assert_eq!(format_date_with_options(MILLIS, &almost), "15.10, 09:06:03");
    }

    #[test]
    fn test_time_only_and_hour12() {
        let time = utc(DateTimeOptions {
            hour: Some(DateField::Numeric),
            minute: Some(DateField::Numeric),
            ..DateTimeOptions::default()
        });
        assert_eq!(format_date_with_options(MILLIS, &time), "09:05");

        let twelve = DateTimeOptions {
            hour12: Some(true),
            ..time
        };
        assert_eq!(format_date_with_options(MILLIS, &twelve), "9:05 AM");
    }

    #[test]
    fn test_single_and_two_digit_fields() {
        let year = utc(DateTimeOptions {
            year: Some(DateField::TwoDigit),
            ..DateTimeOptions::default()
        });
        assert_eq!(format_date_with_options(MILLIS, &year), "26");

        let month = utc(DateTimeOptions {
            month: Some(DateField::Numeric),
            ..DateTimeOptions::default()
        });
        assert_eq!(format_date_with_options("2026-03-05", &month), "3");
    }

    #[test]
    fn test_falsy_and_invalid_dates() {
        assert_eq!(format_date(0_i64), "—");
        assert_eq!(format_date(""), "—");
        assert_eq!(format_date(None::<i64>), "—");
        assert_eq!(format_date("not a date"), "—");
        assert_eq!(format_date_with_options(DateInput::Missing, &DateTimeOptions::default()), "—");
    }

    #[test]
    fn test_chrono_values_are_accepted() {
        let date = Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 1).unwrap();
        let options = utc(DateTimeOptions::date_time());
        assert_eq!(format_date_with_options(date, &options), "16.10, 23:59:01");
    }
}
