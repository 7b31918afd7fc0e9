#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Transcript state for the AI chat surface.
///
/// The chat collaborator performs the AI work; this model only records the
/// conversation shown next to the preview. The chat surface stays available
/// during deployment.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single chat transcript entry.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: String,
    pub content: String,
}

impl ChatState {
    /// Record an outgoing user prompt.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push("user", content);
    }

    /// Record a collaborator status line (accepted rewrite, failure, etc.).
    pub fn push_status(&mut self, role: &str, content: impl Into<String>) {
        self.push(role, content);
    }

    fn push(&mut self, role: &str, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: role.to_owned(),
            content: content.into(),
        });
    }
}
