//! Calendar page state container.
//!
//! Owns the in-memory event list and the form/selection state for the
//! calendar screen, exposing intention-revealing mutations instead of field
//! setters. Mutations that mirror a service call (`apply_created`,
//! `apply_updated`, `apply_deleted`) are only invoked after the call
//! succeeded; failures go through `operation_failed`, which leaves the list
//! untouched and raises the page banner.

use crate::form::{EventForm, FormMode};
use crate::models::Event;
use chrono::{DateTime, Months, NaiveDate, Utc};

#[derive(Debug)]
pub struct CalendarState {
    /// Any date inside the month currently displayed.
    pub month_cursor: NaiveDate,
    pub events: Vec<Event>,
    pub form: Option<EventForm>,
    pub selected_date: Option<NaiveDate>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month_cursor: today,
            events: Vec::new(),
            form: None,
            selected_date: None,
            loading: true,
            submitting: false,
            error: None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn events_loaded(&mut self, events: Vec<Event>) {
        self.events = events;
        self.loading = false;
        self.error = None;
    }

    /// A refresh failed: keep showing the stale list under an error banner.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// A grid cell was clicked: open a create form seeded with that date.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.form = Some(EventForm::for_date(date));
    }

    /// "Add New Event" with no date context.
    pub fn open_blank_form(&mut self, today: NaiveDate) {
        self.selected_date = None;
        self.form = Some(EventForm::for_new(today));
    }

    /// Open an event for editing, if it is still in the list.
    pub fn edit_event(&mut self, id: i64) {
        if let Some(event) = self.events.iter().find(|e| e.id == id) {
            self.form = Some(EventForm::for_event(event));
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.selected_date = None;
        self.submitting = false;
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    pub fn apply_created(&mut self, event: Event) {
        self.events.push(event);
        self.close_form();
        self.error = None;
    }

    pub fn apply_updated(&mut self, event: Event) {
        if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
            *existing = event;
        }
        self.close_form();
        self.error = None;
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.events.retain(|e| e.id != id);
        if matches!(self.form.as_ref().map(|f| f.mode), Some(FormMode::Edit(editing)) if editing == id)
        {
            self.close_form();
        }
        self.error = None;
    }

    /// A create/update/delete call failed: state is unchanged, the form (if
    /// any) becomes editable again, and the banner shows the message.
    pub fn operation_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    pub fn next_month(&mut self) {
        self.month_cursor = self.month_cursor + Months::new(1);
    }

    pub fn prev_month(&mut self) {
        self.month_cursor = self.month_cursor - Months::new(1);
    }

    /// The next few events starting at or after `now`, in list order (the
    /// service returns events ordered by start date).
    pub fn upcoming(&self, now: DateTime<Utc>, limit: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.is_upcoming(now))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use chrono::{Datelike, TimeZone};

    fn event(id: i64, day: u32) -> Event {
        Event {
            id,
            title: format!("event {}", id),
            description: None,
            event_type: EventType::Work,
            start_date: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            applies_to_both: false,
            user_id: 1,
            user_name: "Andrea".to_string(),
        }
    }

    fn loaded_state() -> CalendarState {
        let mut state = CalendarState::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        state.events_loaded(vec![event(1, 10), event(2, 12)]);
        state
    }

    #[test]
    fn test_load_failure_keeps_stale_events() {
        let mut state = loaded_state();
        state.begin_loading();
        state.load_failed("Failed to load events".to_string());
        assert_eq!(state.events.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load events"));
    }

    #[test]
    fn test_delete_applies_only_after_success() {
        let mut state = loaded_state();

        // Failure path: the item stays and the banner is set.
        state.operation_failed("Failed to delete event".to_string());
        assert_eq!(state.events.len(), 2);
        assert!(state.error.is_some());

        // Success path: the item goes and the banner clears.
        state.apply_deleted(1);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].id, 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_deleting_the_edited_event_closes_the_form() {
        let mut state = loaded_state();
        state.edit_event(1);
        assert!(state.form.is_some());
        state.apply_deleted(1);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_deleting_another_event_keeps_the_form() {
        let mut state = loaded_state();
        state.edit_event(2);
        state.apply_deleted(1);
        assert!(state.form.is_some());
    }

    #[test]
    fn test_create_appends_and_closes_form() {
        let mut state = loaded_state();
        state.select_date(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        state.begin_submit();
        state.apply_created(event(3, 20));
        assert_eq!(state.events.len(), 3);
        assert!(state.form.is_none());
        assert!(!state.submitting);
    }

    #[test]
    fn test_failed_create_keeps_form_editable() {
        let mut state = loaded_state();
        state.select_date(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        state.begin_submit();
        state.operation_failed("Failed to create event".to_string());
        assert!(state.form.is_some());
        assert!(!state.submitting);
        assert_eq!(state.events.len(), 2);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut state = loaded_state();
        let mut changed = event(2, 12);
        changed.title = "renamed".to_string();
        state.apply_updated(changed);
        assert_eq!(state.events.len(), 2);
        assert_eq!(state.events[1].title, "renamed");
    }

    #[test]
    fn test_select_date_seeds_form() {
        let mut state = loaded_state();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        state.select_date(date);
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.start_date, "2024-03-20");
        assert_eq!(state.selected_date, Some(date));
    }

    #[test]
    fn test_edit_unknown_id_is_a_no_op() {
        let mut state = loaded_state();
        state.edit_event(99);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_month_navigation() {
        let mut state = CalendarState::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        state.next_month();
        assert_eq!(state.month_cursor.month(), 2);
        state.prev_month();
        state.prev_month();
        assert_eq!(state.month_cursor.month(), 12);
    }

    #[test]
    fn test_upcoming_filters_and_limits() {
        let mut state = loaded_state();
        state.events.push(event(3, 14));
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();
        let upcoming = state.upcoming(now, 5);
        assert_eq!(upcoming.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(state.upcoming(now, 1).len(), 1);
    }
}
