//! UI state management module
//!
//! Top-level view routing and the landing screen's loading/error state.
//! Calendar page state lives in its own container (`state::CalendarState`).

/// UI view states
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing,
    Calendar,
}

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Current active view
    pub current_view: View,

    /// Whether the landing screen is still loading users
    pub loading: bool,

    /// Landing screen error banner
    pub error: Option<String>,
}

impl UiState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self {
            current_view: View::Landing,
            loading: true,
            error: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
