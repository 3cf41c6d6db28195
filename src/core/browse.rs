use std::collections::HashSet;
use thiserror::Error;

use crate::core::{
    filters::{visible_queue, FilterError},
    swipe::{Animation, SwipeDecision, SwipeError, SwipeMachine},
};
use crate::models::{BrowseView, CandidateProfile, FilterCriteria, Gender, InteractionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Swipe(#[from] SwipeError),
}

/// A committed swipe, to be persisted by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub decision: SwipeDecision,
    pub profile: CandidateProfile,
}

/// In-memory browse state for one viewer
///
/// # Queue position
/// The queue excludes a snapshot of every id decided on in this or an earlier
/// session. Between snapshots a commit moves the index forward by one over an
/// unchanged queue, so every position below the index holds a decided card
/// and a card leaving the queue never causes the next one to be skipped.
///
/// Any change to the queue inputs (search text, criteria, viewer gender)
/// retakes the snapshot and rebases the index to 0. Since everything below
/// the old index was decided, the card under the new index is the first
/// undecided match and no decided card is ever shown again.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    pool: Vec<CandidateProfile>,
    viewer_gender: Gender,
    interactions: InteractionRecord,
    dismissed: HashSet<String>,
    snapshot: HashSet<String>,
    search_text: String,
    criteria: FilterCriteria,
    index: usize,
    swipe: SwipeMachine,
    /// Viewer gender saved while a card was animating
    pending_gender: Option<Gender>,
}

impl BrowseSession {
    pub fn new(
        pool: Vec<CandidateProfile>,
        viewer_gender: Gender,
        interactions: InteractionRecord,
        swipe: SwipeMachine,
    ) -> Self {
        let dismissed: HashSet<String> = interactions.decided_ids().map(str::to_string).collect();

        Self {
            pool,
            viewer_gender,
            interactions,
            snapshot: dismissed.clone(),
            dismissed,
            search_text: String::new(),
            criteria: FilterCriteria::default(),
            index: 0,
            swipe,
            pending_gender: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn viewer_gender(&self) -> Gender {
        self.viewer_gender
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn interactions(&self) -> &InteractionRecord {
        &self.interactions
    }

    pub fn swipe(&self) -> &SwipeMachine {
        &self.swipe
    }

    /// The visible candidate queue for the current inputs
    pub fn queue(&self) -> Result<Vec<&CandidateProfile>, FilterError> {
        visible_queue(
            &self.pool,
            &self.snapshot,
            self.viewer_gender,
            &self.search_text,
            &self.criteria,
        )
    }

    /// Card under the index, or None once the queue is exhausted
    pub fn current(&self) -> Result<Option<&CandidateProfile>, FilterError> {
        Ok(self.queue()?.get(self.index).copied())
    }

    pub fn is_exhausted(&self) -> Result<bool, FilterError> {
        Ok(self.current()?.is_none())
    }

    pub fn view(&self) -> Result<BrowseView, FilterError> {
        let queue = self.queue()?;

        Ok(BrowseView {
            card: queue.get(self.index).map(|p| (*p).clone()),
            index: self.index,
            queue_length: queue.len(),
            exhausted: self.index >= queue.len(),
            remaining: queue.len().saturating_sub(self.index),
            swipe: self.swipe.snapshot(),
            search_text: self.search_text.clone(),
            criteria: self.criteria.clone(),
        })
    }

    /// Update free-text search. Position among undecided cards is kept.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Result<(), SwipeError> {
        self.ensure_not_animating()?;
        self.search_text = text.into();
        self.restart();
        Ok(())
    }

    /// Apply structured criteria; the index goes back to 0
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) -> Result<(), SwipeError> {
        self.ensure_not_animating()?;
        self.criteria = criteria;
        self.restart();
        Ok(())
    }

    /// Reset structured criteria to defaults; the index goes back to 0
    pub fn clear_criteria(&mut self) -> Result<(), SwipeError> {
        self.apply_criteria(FilterCriteria::default())
    }

    /// Viewer edited their profile
    ///
    /// While a card is animating the change is held back and applied once
    /// the animation finishes, so the committed card is the one shown.
    pub fn set_viewer_gender(&mut self, gender: Gender) {
        if self.swipe.phase().is_animating() {
            tracing::debug!("Deferring viewer gender change to {} until animation ends", gender);
            self.pending_gender = Some(gender);
            return;
        }
        self.pending_gender = None;
        if gender != self.viewer_gender {
            self.viewer_gender = gender;
            self.restart();
        }
    }

    /// Idle -> Dragging on the current card
    pub fn begin_gesture(&mut self) -> Result<(), BrowseError> {
        self.ensure_candidate()?;
        self.swipe.begin()?;
        Ok(())
    }

    pub fn drag_to(&mut self, translation_x: f64) -> Result<(), BrowseError> {
        self.ensure_candidate()?;
        self.swipe.drag_to(translation_x)?;
        Ok(())
    }

    pub fn release(&mut self) -> Result<Animation, BrowseError> {
        self.ensure_candidate()?;
        Ok(self.swipe.release()?)
    }

    /// Animation completed. A commit records the decision and advances the index.
    ///
    /// Returns `None` for a spring back, and for a card that was already
    /// decided on, which is passed over without being recorded again.
    pub fn finish_animation(&mut self) -> Result<Option<Commit>, BrowseError> {
        let candidate = self.current()?.cloned();
        let decision = self.swipe.finish()?;

        let commit = match decision {
            Some(decision) => self.commit(decision, candidate),
            None => Ok(None),
        };

        if let Some(gender) = self.pending_gender.take() {
            self.set_viewer_gender(gender);
        }
        commit
    }

    fn commit(
        &mut self,
        decision: SwipeDecision,
        candidate: Option<CandidateProfile>,
    ) -> Result<Option<Commit>, BrowseError> {
        let profile = candidate.ok_or(SwipeError::Exhausted)?;
        self.index += 1;

        let recorded = match decision {
            SwipeDecision::Like => self.interactions.like(profile.clone()),
            SwipeDecision::Reject => self.interactions.reject(&profile.id),
        };
        if !recorded {
            tracing::warn!("Candidate {} was already decided on, not recording again", profile.id);
            return Ok(None);
        }
        self.dismissed.insert(profile.id.clone());

        tracing::debug!(
            "Committed {:?} on candidate {}, index now {}",
            decision,
            profile.id,
            self.index
        );

        Ok(Some(Commit { decision, profile }))
    }

    /// Remove a like. The candidate stays out of the queue for this session.
    pub fn unlike(&mut self, id: &str) -> Option<CandidateProfile> {
        self.interactions.unlike(id)
    }

    fn restart(&mut self) {
        self.swipe.reset();
        self.snapshot = self.dismissed.clone();
        self.index = 0;
    }

    fn ensure_not_animating(&self) -> Result<(), SwipeError> {
        if self.swipe.phase().is_animating() {
            return Err(SwipeError::AnimationInFlight);
        }
        Ok(())
    }

    fn ensure_candidate(&self) -> Result<(), BrowseError> {
        if self.current()?.is_none() {
            return Err(SwipeError::Exhausted.into());
        }
        Ok(())
    }
}
