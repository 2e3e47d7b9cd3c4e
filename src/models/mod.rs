// Declare modules
pub mod event;
pub mod user;

// Re-export all public types so imports like `use crate::models::Event` and
// the flattened `use duocal::Event` both work.
pub use event::{Event, EventPayload, EventType};
pub use user::User;
