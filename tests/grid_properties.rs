use chrono::{Datelike, Days, NaiveDate, Weekday};
use duocal::calendar::grid::{first_of_month, last_of_month, month_days};

#[test]
fn test_every_month_grid_is_well_formed() {
    for year in 2020..=2026 {
        for month in 1..=12 {
            let reference = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
            let days = month_days(reference);

            assert_eq!(
                days.len() % 7,
                0,
                "{}-{} grid length {} is not whole weeks",
                year,
                month,
                days.len()
            );
            assert_eq!(days.first().unwrap().weekday(), Weekday::Sun);
            assert_eq!(days.last().unwrap().weekday(), Weekday::Sat);

            // The sequence is contiguous.
            for pair in days.windows(2) {
                assert_eq!(pair[0] + Days::new(1), pair[1]);
            }

            // The in-month block is exactly the month's days, in order.
            let first = first_of_month(reference);
            let last = last_of_month(reference);
            let in_month: Vec<NaiveDate> = days
                .iter()
                .copied()
                .filter(|d| d.month() == month && d.year() == year)
                .collect();
            assert_eq!(in_month.len() as u32, last.day());
            assert_eq!(*in_month.first().unwrap(), first);
            assert_eq!(*in_month.last().unwrap(), last);

            // Padding never exceeds six days on either side.
            let leading = days.iter().position(|d| *d == first).unwrap();
            let trailing = days.len() - 1 - days.iter().position(|d| *d == last).unwrap();
            assert!(leading <= 6 && trailing <= 6);
        }
    }
}

#[test]
fn test_grid_sizes_vary_with_alignment() {
    // 28 cells: a February starting on Sunday in a non-leap year.
    assert_eq!(
        month_days(NaiveDate::from_ymd_opt(2015, 2, 1).unwrap()).len(),
        28
    );
    // 35 cells: a typical month.
    assert_eq!(
        month_days(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()).len(),
        35
    );
    // 42 cells: a 31-day month starting late in the week.
    assert_eq!(
        month_days(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).len(),
        42
    );
}
