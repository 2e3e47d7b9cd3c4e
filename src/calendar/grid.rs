//! Month grid construction: the ordered day-cell sequence for a month view,
//! padded with adjacent-month days to full Sunday-to-Saturday weeks, and the
//! assignment of events to the days they intersect.

use crate::calendar::localtime::{day_bounds_in, local_date_in};
use crate::models::Event;
use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};

/// One cell of the month view.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (false for padding
    /// days from the adjacent months).
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// Presentation flags for one event on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub starts_here: bool,
    pub ends_here: bool,
    pub multi_day: bool,
}

pub fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).expect("day 1 exists in every month")
}

pub fn last_of_month(reference: NaiveDate) -> NaiveDate {
    (first_of_month(reference) + Months::new(1))
        .pred_opt()
        .expect("previous day of a month start exists")
}

/// The ordered day sequence for the month containing `reference`: the
/// month's days, preceded by as many prior-month days as the first day's
/// Sunday-based weekday index and followed by `6 - index(last)` next-month
/// days. The total varies (28, 35 or 42) with the month's alignment.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let leading = first.weekday().num_days_from_sunday() as u64;
    let trailing = 6 - last.weekday().num_days_from_sunday() as u64;
    let total = leading + last.day() as u64 + trailing;

    let start = first - Days::new(leading);
    (0..total).map(|i| start + Days::new(i)).collect()
}

/// Events intersecting a calendar day: `E.start <= dayEnd && E.end >=
/// dayStart`, with the day bounds taken in `tz`. Multi-day events therefore
/// appear on every day they touch, including days in other months.
pub fn events_on_day_in<'a, Tz: TimeZone>(
    events: &'a [Event],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Event> {
    let (day_start, day_end) = day_bounds_in(day, tz);
    events
        .iter()
        .filter(|event| event.start_date <= day_end && event.end_date >= day_start)
        .collect()
}

/// Build the full cell sequence for the month view.
pub fn build_month_in<Tz: TimeZone>(
    reference: NaiveDate,
    today: NaiveDate,
    events: &[Event],
    tz: &Tz,
) -> Vec<DayCell> {
    let month = reference.month();
    month_days(reference)
        .into_iter()
        .map(|date| DayCell {
            date,
            in_month: date.month() == month && date.year() == reference.year(),
            is_today: date == today,
            events: events_on_day_in(events, date, tz)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}

/// Where `day` falls within an event's span, in `tz`.
pub fn day_span_in<Tz: TimeZone>(event: &Event, day: NaiveDate, tz: &Tz) -> DaySpan {
    let start_day = local_date_in(event.start_date, tz);
    let end_day = local_date_in(event.end_date, tz);
    DaySpan {
        starts_here: start_day == day,
        ends_here: end_day == day,
        multi_day: start_day != end_day,
    }
}

pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events_on_day_in(events, day, &chrono::Local)
}

pub fn build_month(reference: NaiveDate, today: NaiveDate, events: &[Event]) -> Vec<DayCell> {
    build_month_in(reference, today, events, &chrono::Local)
}

pub fn day_span(event: &Event, day: NaiveDate) -> DaySpan {
    day_span_in(event, day, &chrono::Local)
}
