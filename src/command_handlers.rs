//! Async command handlers.
//!
//! The iced update loop hands these to `Command::perform`; each logs the
//! operation and maps errors to the safe, user-presentable strings the page
//! banners display. Handlers clone cheaply (one Arc) so every command can
//! own its own copy.

use crate::api::CalendarApi;
use crate::models::{Event, EventPayload, User};
use log::{error, info};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiHandlers {
    api: Arc<CalendarApi>,
}

impl ApiHandlers {
    pub fn new(api: Arc<CalendarApi>) -> Self {
        Self { api }
    }

    pub async fn load_users(self) -> Result<Vec<User>, String> {
        info!("Loading users");
        match self.api.list_users().await {
            Ok(users) => {
                info!("Loaded {} users", users.len());
                Ok(users)
            }
            Err(e) => {
                error!("Failed to load users: {}", e);
                Err(e.to_safe_string())
            }
        }
    }

    pub async fn load_events(self) -> Result<Vec<Event>, String> {
        info!("Loading events");
        match self.api.list_events().await {
            Ok(events) => {
                info!("Loaded {} events", events.len());
                Ok(events)
            }
            Err(e) => {
                error!("Failed to load events: {}", e);
                Err(e.to_safe_string())
            }
        }
    }

    pub async fn create_event(self, payload: EventPayload) -> Result<Event, String> {
        info!("Creating event '{}'", payload.title);
        match self.api.create_event(&payload).await {
            Ok(event) => {
                info!("Created event {}", event.id);
                Ok(event)
            }
            Err(e) => {
                error!("Failed to create event: {}", e);
                Err(e.to_safe_string())
            }
        }
    }

    pub async fn update_event(self, id: i64, payload: EventPayload) -> Result<Event, String> {
        info!("Updating event {}", id);
        match self.api.update_event(id, &payload).await {
            Ok(event) => Ok(event),
            Err(e) => {
                error!("Failed to update event {}: {}", id, e);
                Err(e.to_safe_string())
            }
        }
    }

    /// Returns the deleted id so the update loop can drop it from the list
    /// once the call has actually succeeded.
    pub async fn delete_event(self, id: i64) -> Result<i64, String> {
        info!("Deleting event {}", id);
        match self.api.delete_event(id).await {
            Ok(()) => Ok(id),
            Err(e) => {
                error!("Failed to delete event {}: {}", id, e);
                Err(e.to_safe_string())
            }
        }
    }
}
