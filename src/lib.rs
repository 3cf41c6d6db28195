//! Matrimony Core - local-first session core for a matrimony matchmaking app
//!
//! This library holds the browsing logic of the app: the candidate filter,
//! the swipe state machine, the profile store and the onboarding flow that
//! gates them. The binary exposes it over HTTP for the UI shell.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{visible_queue, BrowseSession, Screen, SwipeMachine};
pub use models::{CandidateProfile, FilterCriteria, Gender, ViewerProfile};
pub use services::{Backend, BrowseService, KeyValueStore, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_exports() {
        let pool = models::seed::default_pool();
        let criteria = FilterCriteria::default();
        let queue = visible_queue(&pool, &HashSet::new(), Gender::Male, "", &criteria).unwrap();
        assert!(queue.iter().all(|p| p.gender == Gender::Female));
    }
}
