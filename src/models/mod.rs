// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;
pub mod seed;

pub use domain::{
    AgeBracket, AuthRecord, CandidateProfile, Choice, Conversation, FilterCriteria, Gender,
    InteractionRecord, ViewerProfile,
};
pub use requests::{
    DragRequest, LoginRequest, OptionsQuery, ProfileForm, RegisterRequest, ScreenQuery,
    SearchRequest,
};
pub use responses::{
    AuthResponse, BrowseView, ChatResponse, ConversationsResponse, ErrorResponse, GestureResponse,
    HealthResponse, LikesResponse, NavigationResponse, ProfileOptionsResponse, ProfileResponse,
};
