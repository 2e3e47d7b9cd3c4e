//! Event form controller: the draft record behind the create/edit dialog,
//! with field-level validation and the start-date auto-adjustment that keeps
//! the event's duration when the start date moves.

use crate::calendar::localtime::{
    compose_naive, instant_to_local_fields_in, local_fields_to_instant_in, DATE_FORMAT,
    TIME_FORMAT,
};
use crate::models::{Event, EventPayload, EventType};
use chrono::{NaiveDate, TimeZone};
use std::collections::HashMap;

const DEFAULT_START_TIME: &str = "08:00";
const DEFAULT_END_TIME: &str = "09:00";

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Draft state of the event form. Dates and times are kept as the raw field
/// strings the user edits; instants are only composed at submit time.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub applies_to_both: bool,
    errors: HashMap<FormField, String>,
}

impl EventForm {
    fn blank() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            event_type: EventType::Work,
            start_date: String::new(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_date: String::new(),
            end_time: DEFAULT_END_TIME.to_string(),
            applies_to_both: false,
            errors: HashMap::new(),
        }
    }

    /// New event with no date context: defaults to today, 08:00-09:00.
    pub fn for_new(today: NaiveDate) -> Self {
        Self::for_date(today)
    }

    /// New event for a pre-selected date (grid cell click).
    pub fn for_date(date: NaiveDate) -> Self {
        let field = date.format(DATE_FORMAT).to_string();
        Self {
            start_date: field.clone(),
            end_date: field,
            ..Self::blank()
        }
    }

    /// Edit an existing event: its stored instants split into local fields.
    pub fn for_event_in<Tz: TimeZone>(event: &Event, tz: &Tz) -> Self {
        let (start_date, start_time) = instant_to_local_fields_in(event.start_date, tz);
        let (end_date, end_time) = instant_to_local_fields_in(event.end_date, tz);
        Self {
            mode: FormMode::Edit(event.id),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            event_type: event.event_type,
            start_date,
            start_time,
            end_date,
            end_time,
            applies_to_both: event.applies_to_both,
            errors: HashMap::new(),
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::for_event_in(event, &chrono::Local)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set_title(&mut self, value: String) {
        self.title = value;
        self.errors.remove(&FormField::Title);
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    pub fn set_event_type(&mut self, value: EventType) {
        self.event_type = value;
    }

    pub fn set_applies_to_both(&mut self, value: bool) {
        self.applies_to_both = value;
    }

    /// Changing the start date keeps the previously-held start-to-end
    /// duration: the end fields are recomputed from the new start date plus
    /// that duration. Only this field cascades.
    pub fn set_start_date(&mut self, value: String) {
        let previous_span = compose_naive(&self.start_date, &self.start_time)
            .zip(compose_naive(&self.end_date, &self.end_time))
            .map(|(start, end)| end - start);

        self.start_date = value;
        self.errors.remove(&FormField::StartDate);

        if let Some(span) = previous_span {
            if let Some(new_start) = compose_naive(&self.start_date, &self.start_time) {
                let new_end = new_start + span;
                self.end_date = new_end.date().format(DATE_FORMAT).to_string();
                self.end_time = new_end.time().format(TIME_FORMAT).to_string();
            }
        }
    }

    pub fn set_start_time(&mut self, value: String) {
        self.start_time = value;
        self.errors.remove(&FormField::StartTime);
    }

    pub fn set_end_date(&mut self, value: String) {
        self.end_date = value;
        self.errors.remove(&FormField::EndDate);
    }

    pub fn set_end_time(&mut self, value: String) {
        self.end_time = value;
        self.errors.remove(&FormField::EndTime);
    }

    /// Validate the draft for submission, repopulating the error map.
    /// Returns true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors
                .insert(FormField::Title, "Title is required".to_string());
        }

        self.check_date(FormField::StartDate, "Start date is required");
        self.check_date(FormField::EndDate, "End date is required");
        self.check_time(FormField::StartTime, "Start time is required");
        self.check_time(FormField::EndTime, "End time is required");

        if let Some((start, end)) = compose_naive(&self.start_date, &self.start_time)
            .zip(compose_naive(&self.end_date, &self.end_time))
        {
            if end <= start {
                self.errors.insert(
                    FormField::EndTime,
                    "End time must be after start time".to_string(),
                );
            }
        }

        self.errors.is_empty()
    }

    fn check_date(&mut self, field: FormField, required_message: &str) {
        let value = match field {
            FormField::StartDate => self.start_date.clone(),
            FormField::EndDate => self.end_date.clone(),
            _ => unreachable!("not a date field"),
        };
        if value.trim().is_empty() {
            self.errors.insert(field, required_message.to_string());
        } else if crate::calendar::localtime::parse_date(&value).is_none() {
            self.errors
                .insert(field, "Enter a valid date (YYYY-MM-DD)".to_string());
        }
    }

    fn check_time(&mut self, field: FormField, required_message: &str) {
        let value = match field {
            FormField::StartTime => self.start_time.clone(),
            FormField::EndTime => self.end_time.clone(),
            _ => unreachable!("not a time field"),
        };
        if value.trim().is_empty() {
            self.errors.insert(field, required_message.to_string());
        } else if crate::calendar::localtime::parse_time(&value).is_none() {
            self.errors
                .insert(field, "Enter a valid time (HH:mm)".to_string());
        }
    }

    /// Compose the request payload from a validated draft. Returns None if
    /// the fields no longer compose (callers validate first).
    pub fn to_payload_in<Tz: TimeZone>(&self, user_id: i64, tz: &Tz) -> Option<EventPayload> {
        let start_date = local_fields_to_instant_in(&self.start_date, &self.start_time, tz)?;
        let end_date = local_fields_to_instant_in(&self.end_date, &self.end_time, tz)?;
        Some(EventPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            event_type: self.event_type,
            start_date,
            end_date,
            applies_to_both: self.applies_to_both,
            user_id,
        })
    }

    pub fn to_payload(&self, user_id: i64) -> Option<EventPayload> {
        self.to_payload_in(user_id, &chrono::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn filled_form() -> EventForm {
        let mut form = EventForm::for_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        form.set_title("Dinner".to_string());
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = EventForm::for_new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(form.start_date, "2024-03-10");
        assert_eq!(form.end_date, "2024-03-10");
        assert_eq!(form.start_time, "08:00");
        assert_eq!(form.end_time, "09:00");
        assert_eq!(form.event_type, EventType::Work);
        assert!(!form.is_edit());
    }

    #[test]
    fn test_edit_form_splits_instants() {
        let event = Event {
            id: 9,
            title: "Flight".to_string(),
            description: Some("AMS-SFO".to_string()),
            event_type: EventType::Holiday,
            start_date: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 10, 19, 30, 0).unwrap(),
            applies_to_both: true,
            user_id: 1,
            user_name: "Angel".to_string(),
        };
        let form = EventForm::for_event_in(&event, &Utc);
        assert_eq!(form.mode, FormMode::Edit(9));
        assert_eq!(form.title, "Flight");
        assert_eq!(form.description, "AMS-SFO");
        assert_eq!(form.start_date, "2024-03-10");
        assert_eq!(form.start_time, "08:00");
        assert_eq!(form.end_time, "19:30");
        assert!(form.applies_to_both);
    }

    #[test]
    fn test_empty_title_blocks_submission() {
        let mut form = EventForm::for_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        form.set_title("   ".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(FormField::Title), Some("Title is required"));
    }

    #[test]
    fn test_end_not_after_start_blocks_submission() {
        let mut form = filled_form();
        form.set_end_time("08:00".to_string());
        assert!(!form.validate());
        assert_eq!(
            form.error(FormField::EndTime),
            Some("End time must be after start time")
        );

        let mut equal = filled_form();
        equal.set_start_time("09:00".to_string());
        assert!(!equal.validate());
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let mut form = EventForm::blank();
        assert!(!form.validate());
        assert!(form.error(FormField::Title).is_some());
        assert!(form.error(FormField::StartDate).is_some());
        assert!(form.error(FormField::EndDate).is_some());
        assert!(form.error(FormField::StartTime).is_none());
        assert!(form.error(FormField::EndTime).is_none());
    }

    #[test]
    fn test_malformed_date_reported_on_field() {
        let mut form = filled_form();
        form.set_end_date("next tuesday".to_string());
        assert!(!form.validate());
        assert!(form.error(FormField::EndDate).unwrap().contains("valid date"));
    }

    #[test]
    fn test_start_date_change_preserves_duration() {
        let mut form = filled_form();
        form.set_start_date("2024-03-15".to_string());
        assert_eq!(form.end_date, "2024-03-15");
        assert_eq!(form.end_time, "09:00");
    }

    #[test]
    fn test_start_date_change_preserves_overnight_duration() {
        let mut form = filled_form();
        form.set_start_time("23:00".to_string());
        form.set_end_date("2024-03-11".to_string());
        form.set_end_time("00:30".to_string());

        form.set_start_date("2024-03-20".to_string());
        assert_eq!(form.end_date, "2024-03-21");
        assert_eq!(form.end_time, "00:30");
    }

    #[test]
    fn test_other_field_changes_do_not_cascade() {
        let mut form = filled_form();
        form.set_end_time("11:00".to_string());
        assert_eq!(form.start_date, "2024-03-10");
        assert_eq!(form.end_date, "2024-03-10");
        assert_eq!(form.start_time, "08:00");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = EventForm::for_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(!form.validate());
        assert!(form.error(FormField::Title).is_some());
        form.set_title("D".to_string());
        assert!(form.error(FormField::Title).is_none());
    }

    #[test]
    fn test_payload_trims_and_composes() {
        let mut form = filled_form();
        form.set_title("  Dinner  ".to_string());
        form.set_description(" at eight ".to_string());
        assert!(form.validate());

        let payload = form.to_payload_in(7, &Utc).unwrap();
        assert_eq!(payload.title, "Dinner");
        assert_eq!(payload.description, "at eight");
        assert_eq!(payload.user_id, 7);
        assert_eq!(
            payload.start_date,
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
        );
        assert_eq!(
            payload.end_date,
            Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
        );
    }
}
