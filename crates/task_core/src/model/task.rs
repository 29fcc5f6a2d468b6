use serde::{Deserialize, Serialize};

pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub priority: String,
    pub completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Task {
    pub fn priority_rank(&self) -> u8 {
        priority_rank(&self.priority)
    }
}

/// Display ordering only; storage order is insertion order.
/// Unrecognized priorities sort last.
pub fn priority_rank(priority: &str) -> u8 {
    match priority {
        PRIORITY_HIGH => 1,
        PRIORITY_MEDIUM => 2,
        PRIORITY_LOW => 3,
        _ => 4,
    }
}
