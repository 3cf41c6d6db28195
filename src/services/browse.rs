use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::core::{
    browse::{BrowseError, BrowseSession, Commit},
    filters::FilterError,
    swipe::{Animation, SwipeDecision, SwipeError, SwipeMachine, SwipeSnapshot},
};
use crate::models::{BrowseView, CandidateProfile, FilterCriteria, Gender};
use crate::services::profile_store::ProfileStore;
use crate::services::store::{KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Create a profile before browsing")]
    NoProfile,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Swipe(#[from] SwipeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<BrowseError> for SessionError {
    fn from(value: BrowseError) -> Self {
        match value {
            BrowseError::Filter(e) => SessionError::Filter(e),
            BrowseError::Swipe(e) => SessionError::Swipe(e),
        }
    }
}

/// Screen geometry and timing for the swipe machine
#[derive(Debug, Clone, Copy)]
pub struct SwipeSettings {
    pub screen_width: f64,
    pub commit_duration_ms: u64,
}

/// The running browse session and its persistence
///
/// Loaded lazily from the store on first use, since a viewer profile must
/// exist first. All access is serialized on one mutex, so only one gesture
/// is ever in flight. Every commit is flushed with a single write; a failed
/// write is logged and the in-memory state is kept.
pub struct BrowseService<S> {
    store: Arc<ProfileStore<S>>,
    session: Mutex<Option<BrowseSession>>,
    settings: SwipeSettings,
}

impl<S: KeyValueStore> BrowseService<S> {
    pub fn new(store: Arc<ProfileStore<S>>, settings: SwipeSettings) -> Self {
        Self {
            store,
            session: Mutex::new(None),
            settings,
        }
    }

    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }

    async fn build_session(&self) -> Result<BrowseSession, SessionError> {
        let viewer = self
            .store
            .viewer_profile()
            .await?
            .ok_or(SessionError::NoProfile)?;
        let pool = self.store.candidate_pool().await?;
        let interactions = match self.store.interactions().await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Failed to load liked/rejected profiles, starting empty: {}", e);
                Default::default()
            }
        };

        tracing::info!(
            "Browse session loaded: {} candidates, {} liked, {} rejected",
            pool.len(),
            interactions.liked.len(),
            interactions.rejected.len()
        );

        Ok(BrowseSession::new(
            pool,
            viewer.gender,
            interactions,
            SwipeMachine::new(self.settings.screen_width, self.settings.commit_duration_ms),
        ))
    }

    async fn lock(&self) -> Result<MutexGuard<'_, Option<BrowseSession>>, SessionError> {
        let mut guard = self.session.lock().await;
        if guard.is_none() {
            *guard = Some(self.build_session().await?);
        }
        Ok(guard)
    }

    pub async fn view(&self) -> Result<BrowseView, SessionError> {
        let guard = self.lock().await?;
        let session = guard.as_ref().ok_or(SessionError::NoProfile)?;
        Ok(session.view()?)
    }

    pub async fn set_search_text(&self, text: &str) -> Result<BrowseView, SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        session.set_search_text(text)?;
        Ok(session.view()?)
    }

    pub async fn apply_criteria(
        &self,
        criteria: FilterCriteria,
    ) -> Result<BrowseView, SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        tracing::debug!("Applying criteria: {:?}", criteria);
        session.apply_criteria(criteria)?;
        Ok(session.view()?)
    }

    pub async fn clear_criteria(&self) -> Result<BrowseView, SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        session.clear_criteria()?;
        Ok(session.view()?)
    }

    pub async fn begin_gesture(&self) -> Result<SwipeSnapshot, SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        session.begin_gesture()?;
        Ok(session.swipe().snapshot())
    }

    pub async fn drag_to(&self, translation_x: f64) -> Result<SwipeSnapshot, SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        session.drag_to(translation_x)?;
        Ok(session.swipe().snapshot())
    }

    pub async fn release(&self) -> Result<(Animation, SwipeSnapshot), SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;
        let animation = session.release()?;
        Ok((animation, session.swipe().snapshot()))
    }

    /// Animation completed: apply the commit, if any, and flush it
    pub async fn finish_animation(&self) -> Result<(Option<Commit>, SwipeSnapshot), SessionError> {
        let mut guard = self.lock().await?;
        let session = guard.as_mut().ok_or(SessionError::NoProfile)?;

        let commit = session.finish_animation()?;
        if let Some(commit) = &commit {
            let result = match commit.decision {
                SwipeDecision::Like => {
                    self.store
                        .save_liked_profiles(&session.interactions().liked)
                        .await
                }
                SwipeDecision::Reject => {
                    self.store
                        .save_rejected_ids(&session.interactions().rejected)
                        .await
                }
            };

            if let Err(e) = result {
                tracing::error!(
                    "Failed to persist {:?} on candidate {}, keeping in-memory state: {}",
                    commit.decision,
                    commit.profile.id,
                    e
                );
            }
        }

        Ok((commit, session.swipe().snapshot()))
    }

    /// Liked profiles in like order
    pub async fn liked(&self) -> Result<Vec<CandidateProfile>, SessionError> {
        let guard = self.session.lock().await;
        match guard.as_ref() {
            Some(session) => Ok(session.interactions().liked.clone()),
            None => Ok(self.store.liked_profiles().await?),
        }
    }

    /// Remove a like and flush. Returns false if the id was not liked.
    pub async fn unlike(&self, id: &str) -> Result<bool, SessionError> {
        // Load the session first so the id stays dismissed for its lifetime
        let mut guard = match self.lock().await {
            Ok(guard) => guard,
            Err(SessionError::NoProfile) => self.session.lock().await,
            Err(e) => return Err(e),
        };

        let liked = match guard.as_mut() {
            Some(session) => {
                if session.unlike(id).is_none() {
                    return Ok(false);
                }
                session.interactions().liked.clone()
            }
            None => {
                let mut liked = self.store.liked_profiles().await?;
                let before = liked.len();
                liked.retain(|p| p.id != id);
                if liked.len() == before {
                    return Ok(false);
                }
                liked
            }
        };

        if let Err(e) = self.store.save_liked_profiles(&liked).await {
            tracing::error!("Failed to persist removal of liked profile {}: {}", id, e);
        }
        tracing::debug!("Removed {} from liked profiles", id);
        Ok(true)
    }

    /// The viewer saved their profile; re-derive the queue if gender changed
    pub async fn viewer_gender_changed(&self, gender: Gender) {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_mut() {
            session.set_viewer_gender(gender);
        }
    }
}
