use serde::{Deserialize, Serialize};

/// A calendar user. Users are provisioned by the service and only ever
/// selected by the client, never created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    /// Single-character avatar label shown on the landing screen.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}
