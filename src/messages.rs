use crate::models::{Event, EventType, User};
use chrono::NaiveDate;

/// Unified application message type
///
/// This enum handles all message types throughout the application.
/// Messages are organized by domain for better maintainability.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Session Messages =====
    /// Users finished loading for the landing screen
    UsersLoaded(Result<Vec<User>, String>),
    /// A user card was picked on the landing screen
    UserSelected(User),
    /// Return to the landing screen
    Logout,

    // ===== Calendar Data Messages =====
    /// Reload the event list from the service
    RefreshEvents,
    /// Event list finished loading
    EventsLoaded(Result<Vec<Event>, String>),

    // ===== Month Navigation Messages =====
    /// Show the next month
    NextMonth,
    /// Show the previous month
    PrevMonth,

    // ===== Grid & Form Lifecycle Messages =====
    /// A day cell was clicked (opens a create form seeded with the date)
    DateClicked(NaiveDate),
    /// An event chip was clicked (opens the edit form)
    EventClicked(i64),
    /// "Add New Event" with no date context
    NewEventRequested,
    /// Close the form without submitting
    FormDismissed,

    // ===== Form Field Messages =====
    TitleChanged(String),
    DescriptionChanged(String),
    EventTypeSelected(EventType),
    AppliesToBothToggled(bool),
    StartDateChanged(String),
    StartTimeChanged(String),
    EndDateChanged(String),
    EndTimeChanged(String),
    /// Validate and submit the form
    FormSubmitted,

    // ===== Async Operation Results =====
    /// Event creation completed
    EventCreated(Result<Event, String>),
    /// Event update completed
    EventUpdated(Result<Event, String>),
    /// Event deletion completed (Ok carries the deleted id)
    EventDeleted(Result<i64, String>),

    // ===== List Gesture Messages =====
    /// A list item press began
    ItemPressed(i64),
    /// Global pointer movement (mouse cursor or touch)
    PointerMoved(f32, f32),
    /// The pointer was released anywhere
    PointerReleased,
    /// A long-press timer fired; the token guards against stale timers
    LongPressElapsed(i64, u64),
    /// Delete was confirmed from the swipe overlay or armed confirmation
    DeleteConfirmed(i64),
    /// The pending delete was cancelled
    DeleteDismissed,
}
