//! Conversational message wrapper
//!
//! A bound prompt converts to a single human turn; no further transformation
//! happens here.

use serde::Serialize;

/// Author of a conversational turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
}

/// A single conversational turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a human turn with the given content
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }
}
