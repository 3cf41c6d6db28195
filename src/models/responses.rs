use serde::{Deserialize, Serialize};

use crate::core::navigation::{Screen, Tab};
use crate::core::swipe::{Animation, SwipeDecision, SwipeSnapshot};
use crate::models::domain::{CandidateProfile, Conversation, FilterCriteria, ViewerProfile};

/// Browse screen state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseView {
    /// Card under the index, absent once the queue is exhausted
    pub card: Option<CandidateProfile>,
    pub index: usize,
    #[serde(rename = "queueLength")]
    pub queue_length: usize,
    pub exhausted: bool,
    /// Cards left from the index on
    pub remaining: usize,
    pub swipe: SwipeSnapshot,
    #[serde(rename = "searchText")]
    pub search_text: String,
    pub criteria: FilterCriteria,
}

/// Response for gesture endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureResponse {
    pub swipe: SwipeSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<SwipeDecision>,
    #[serde(rename = "candidateId", skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
}

/// Where the client goes after an auth action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub next: Screen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: ViewerProfile,
}

/// Picker options for the profile form and filter panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOptionsResponse {
    pub genders: Vec<String>,
    pub religions: Vec<String>,
    pub castes: Vec<String>,
    pub locations: Vec<String>,
    #[serde(rename = "ageBrackets")]
    pub age_brackets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesResponse {
    pub profiles: Vec<CandidateProfile>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub screen: Screen,
    pub tabs: Vec<Tab>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
