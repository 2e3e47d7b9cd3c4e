//! The iced application: message dispatch, async commands, and the global
//! pointer subscription that feeds the list gesture tracker.

use std::sync::Arc;

use iced::event::{self, Event as IcedEvent};
use iced::{mouse, touch, Application, Command, Element, Subscription, Theme};

use crate::api::CalendarApi;
use crate::command_handlers::ApiHandlers;
use crate::form::FormMode;
use crate::gesture::{GestureEnd, SwipeTracker, LONG_PRESS};
use crate::messages::Message;
use crate::models::User;
use crate::state::CalendarState;
use crate::ui;
use crate::ui_state::{UiState, View};

// Helper function to convert technical errors to user-friendly messages
fn user_friendly_error(error: &str) -> String {
    if error.contains("Network") || error.contains("connection") {
        "Network error. Please check your internet connection and try again.".to_string()
    } else if error.contains("timed out") || error.contains("timeout") {
        "Request timed out. Please try again in a moment.".to_string()
    } else if error.contains("Not found") {
        "That event no longer exists on the server.".to_string()
    } else if error.contains("HTTP") {
        "The calendar service reported an error. Please try again.".to_string()
    } else {
        error.replace("Failed to", "Could not").trim().to_string()
    }
}

pub struct DuoCalApp {
    handlers: ApiHandlers,

    // Session
    users: Vec<User>,
    current_user: Option<User>,

    // UI state management
    ui_state: UiState,

    // Calendar page state
    calendar: CalendarState,
    gestures: SwipeTracker,

    /// Last known pointer position, fed by the global event subscription;
    /// used as the origin when a list item press begins.
    pointer: (f32, f32),
}

impl DuoCalApp {
    fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn load_events_command(&mut self) -> Command<Message> {
        self.calendar.begin_loading();
        Command::perform(self.handlers.clone().load_events(), Message::EventsLoaded)
    }
}

impl Application for DuoCalApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Arc<CalendarApi>;

    fn new(api: Self::Flags) -> (Self, Command<Message>) {
        let handlers = ApiHandlers::new(api);

        let app = DuoCalApp {
            handlers: handlers.clone(),
            users: Vec::new(),
            current_user: None,
            ui_state: UiState::new(),
            calendar: CalendarState::new(Self::today()),
            gestures: SwipeTracker::new(),
            pointer: (0.0, 0.0),
        };

        // Load the user list on startup for the landing screen
        let startup_command = Command::perform(handlers.load_users(), Message::UsersLoaded);

        (app, startup_command)
    }

    fn title(&self) -> String {
        "Our Calendar".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // ===== Session =====
            Message::UsersLoaded(Ok(users)) => {
                self.users = users;
                self.ui_state.loading = false;
                self.ui_state.error = None;
                Command::none()
            }
            Message::UsersLoaded(Err(error)) => {
                self.ui_state.loading = false;
                self.ui_state.error = Some(user_friendly_error(&error));
                Command::none()
            }
            Message::UserSelected(user) => {
                log::info!("Continuing as {}", user.name);
                self.current_user = Some(user);
                self.ui_state.current_view = View::Calendar;
                self.calendar = CalendarState::new(Self::today());
                self.gestures = SwipeTracker::new();
                self.load_events_command()
            }
            Message::Logout => {
                self.current_user = None;
                self.ui_state.current_view = View::Landing;
                Command::none()
            }

            // ===== Calendar data =====
            Message::RefreshEvents => {
                if self.current_user.is_none() {
                    return Command::none();
                }
                self.load_events_command()
            }
            Message::EventsLoaded(result) => {
                // A response that outlives the calendar session is dropped.
                if self.current_user.is_none() {
                    return Command::none();
                }
                match result {
                    Ok(events) => self.calendar.events_loaded(events),
                    Err(error) => self.calendar.load_failed(user_friendly_error(&error)),
                }
                Command::none()
            }

            // ===== Month navigation =====
            Message::NextMonth => {
                self.calendar.next_month();
                Command::none()
            }
            Message::PrevMonth => {
                self.calendar.prev_month();
                Command::none()
            }

            // ===== Grid & form lifecycle =====
            Message::DateClicked(date) => {
                self.calendar.select_date(date);
                Command::none()
            }
            Message::EventClicked(id) => {
                self.calendar.edit_event(id);
                Command::none()
            }
            Message::NewEventRequested => {
                self.calendar.open_blank_form(Self::today());
                Command::none()
            }
            Message::FormDismissed => {
                self.calendar.close_form();
                Command::none()
            }

            // ===== Form fields =====
            Message::TitleChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_title(value);
                }
                Command::none()
            }
            Message::DescriptionChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_description(value);
                }
                Command::none()
            }
            Message::EventTypeSelected(event_type) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_event_type(event_type);
                }
                Command::none()
            }
            Message::AppliesToBothToggled(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_applies_to_both(value);
                }
                Command::none()
            }
            Message::StartDateChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_start_date(value);
                }
                Command::none()
            }
            Message::StartTimeChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_start_time(value);
                }
                Command::none()
            }
            Message::EndDateChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_end_date(value);
                }
                Command::none()
            }
            Message::EndTimeChanged(value) => {
                if let Some(form) = self.calendar.form.as_mut() {
                    form.set_end_time(value);
                }
                Command::none()
            }
            Message::FormSubmitted => {
                if self.calendar.submitting {
                    return Command::none();
                }
                let user_id = match &self.current_user {
                    Some(user) => user.id,
                    None => return Command::none(),
                };
                let Some(form) = self.calendar.form.as_mut() else {
                    return Command::none();
                };
                if !form.validate() {
                    return Command::none();
                }
                let Some(payload) = form.to_payload(user_id) else {
                    return Command::none();
                };
                let mode = form.mode;
                self.calendar.begin_submit();
                match mode {
                    FormMode::Create => Command::perform(
                        self.handlers.clone().create_event(payload),
                        Message::EventCreated,
                    ),
                    FormMode::Edit(id) => Command::perform(
                        self.handlers.clone().update_event(id, payload),
                        Message::EventUpdated,
                    ),
                }
            }

            // ===== Async operation results =====
            Message::EventCreated(result) => {
                if self.current_user.is_none() {
                    return Command::none();
                }
                match result {
                    Ok(event) => self.calendar.apply_created(event),
                    Err(error) => self.calendar.operation_failed(user_friendly_error(&error)),
                }
                Command::none()
            }
            Message::EventUpdated(result) => {
                if self.current_user.is_none() {
                    return Command::none();
                }
                match result {
                    Ok(event) => self.calendar.apply_updated(event),
                    Err(error) => self.calendar.operation_failed(user_friendly_error(&error)),
                }
                Command::none()
            }
            Message::EventDeleted(result) => {
                if self.current_user.is_none() {
                    return Command::none();
                }
                match result {
                    Ok(id) => self.calendar.apply_deleted(id),
                    Err(error) => self.calendar.operation_failed(user_friendly_error(&error)),
                }
                Command::none()
            }

            // ===== List gestures =====
            Message::ItemPressed(id) => {
                let (x, y) = self.pointer;
                let token = self.gestures.press_began(id, x, y);
                Command::perform(tokio::time::sleep(LONG_PRESS), move |_| {
                    Message::LongPressElapsed(id, token)
                })
            }
            Message::PointerMoved(x, y) => {
                self.pointer = (x, y);
                self.gestures.pointer_moved(x, y);
                Command::none()
            }
            Message::PointerReleased => {
                if let Some(GestureEnd::Tap(id)) = self.gestures.press_ended() {
                    self.calendar.edit_event(id);
                }
                Command::none()
            }
            Message::LongPressElapsed(id, token) => {
                self.gestures.long_press_elapsed(id, token);
                Command::none()
            }
            Message::DeleteConfirmed(id) => {
                self.gestures.dismiss();
                Command::perform(
                    self.handlers.clone().delete_event(id),
                    Message::EventDeleted,
                )
            }
            Message::DeleteDismissed => {
                self.gestures.dismiss();
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status| match event {
            IcedEvent::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position.x, position.y))
            }
            IcedEvent::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            IcedEvent::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(Message::PointerMoved(position.x, position.y))
            }
            IcedEvent::Touch(touch::Event::FingerLifted { .. })
            | IcedEvent::Touch(touch::Event::FingerLost { .. }) => {
                Some(Message::PointerReleased)
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        match (&self.ui_state.current_view, &self.current_user) {
            (View::Calendar, Some(user)) => ui::calendar::view(
                user,
                &self.calendar,
                &self.gestures,
                Self::today(),
                chrono::Utc::now(),
            ),
            _ => ui::landing::view(
                &self.users,
                self.ui_state.loading,
                self.ui_state.error.as_deref(),
            ),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_error_network() {
        let friendly = user_friendly_error("Network request failed");
        assert!(friendly.contains("internet connection"));
    }

    #[test]
    fn test_user_friendly_error_not_found() {
        let friendly = user_friendly_error("Not found: event 12");
        assert!(friendly.contains("no longer exists"));
    }

    #[test]
    fn test_user_friendly_error_fallback() {
        assert_eq!(
            user_friendly_error("Failed to do the thing"),
            "Could not do the thing"
        );
    }
}
