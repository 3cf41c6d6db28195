use chrono::{DateTime, Duration, Utc};

use crate::models::{CandidateProfile, ChatResponse, Conversation};

pub const PLACEHOLDER_MESSAGE: &str = "Hi! I'm interested in connecting!";

/// One placeholder conversation per liked profile, newest first
///
/// There is no message transport; the n-th conversation is stamped n hours
/// before `now`.
pub fn placeholder_conversations(
    liked: &[CandidateProfile],
    now: DateTime<Utc>,
) -> Vec<Conversation> {
    liked
        .iter()
        .enumerate()
        .map(|(index, profile)| Conversation {
            id: profile.id.clone(),
            user: profile.clone(),
            last_message: PLACEHOLDER_MESSAGE.to_string(),
            timestamp: (now - Duration::hours(index as i64)).format("%H:%M").to_string(),
        })
        .collect()
}

/// Placeholder chat view for a user id
pub fn placeholder_chat(user_id: &str) -> Option<ChatResponse> {
    if user_id.trim().is_empty() {
        return None;
    }

    Some(ChatResponse {
        user_id: user_id.to_string(),
        title: format!("Chat with User {}", user_id),
        message: "This is a placeholder for the chat screen.".to_string(),
    })
}
