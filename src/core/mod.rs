// Core logic exports
pub mod auth;
pub mod browse;
pub mod conversations;
pub mod filters;
pub mod navigation;
pub mod profile;
pub mod swipe;

pub use auth::AuthError;
pub use browse::{BrowseError, BrowseSession, Commit};
pub use filters::{visible_queue, FilterError};
pub use navigation::{footer_tabs, resolve, Screen};
pub use profile::{build_profile, FormMode, ProfileError};
pub use swipe::{Animation, SwipeDecision, SwipeError, SwipeMachine, SwipePhase};
