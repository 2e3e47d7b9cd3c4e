// Calendar arithmetic: month grid construction and the local-time
// conversion boundary shared by the grid and the event form.

pub mod grid;
pub mod localtime;

pub use grid::{build_month, day_span, events_on_day, month_days, DayCell, DaySpan};
pub use localtime::{instant_to_local_fields, local_fields_to_instant};
