use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Release beyond this fraction of the screen width commits the swipe
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.25;

/// Card rotation at half a screen width of displacement, in degrees
pub const MAX_ROTATION_DEG: f64 = 10.0;

pub const DEFAULT_COMMIT_DURATION_MS: u64 = 200;

/// Errors for gesture input the state machine cannot act on
///
/// None of these change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwipeError {
    #[error("No candidate left to swipe")]
    Exhausted,

    #[error("A gesture is already in progress")]
    GestureInProgress,

    #[error("No gesture is in progress")]
    NoActiveGesture,

    #[error("The card is still animating")]
    AnimationInFlight,

    #[error("No animation is running")]
    NoAnimation,

    #[error("Translation must be a finite number")]
    InvalidTranslation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipePhase {
    Idle,
    Dragging,
    CommittingLeft,
    CommittingRight,
    Returning,
}

impl SwipePhase {
    pub fn is_animating(self) -> bool {
        matches!(
            self,
            SwipePhase::CommittingLeft | SwipePhase::CommittingRight | SwipePhase::Returning
        )
    }
}

/// Outcome of a committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Like,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Fixed-duration slide off screen
    Timing,
    /// Spring back to rest
    Spring,
}

/// Animation the UI must play before calling `finish`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    #[serde(rename = "targetX")]
    pub target_x: f64,
    #[serde(rename = "durationMs", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Observable state of the active card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeSnapshot {
    pub phase: SwipePhase,
    pub displacement: f64,
    #[serde(rename = "rotationDeg")]
    pub rotation_deg: f64,
}

/// Tracks one card's gesture from drag to commit
///
/// Lives as long as the browse session, so the interaction value is stable
/// across renders. Only one gesture can be active; once released, the card
/// animates and refuses input until `finish` is called.
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    phase: SwipePhase,
    displacement: f64,
    screen_width: f64,
    commit_duration_ms: u64,
}

impl SwipeMachine {
    pub fn new(screen_width: f64, commit_duration_ms: u64) -> Self {
        Self {
            phase: SwipePhase::Idle,
            displacement: 0.0,
            screen_width: screen_width.abs(),
            commit_duration_ms,
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn screen_width(&self) -> f64 {
        self.screen_width
    }

    /// Displacement a release must exceed to commit
    pub fn threshold(&self) -> f64 {
        self.screen_width * SWIPE_THRESHOLD_RATIO
    }

    /// Card rotation for the current displacement, in degrees
    pub fn rotation_deg(&self) -> f64 {
        rotation_for(self.displacement, self.screen_width)
    }

    pub fn snapshot(&self) -> SwipeSnapshot {
        SwipeSnapshot {
            phase: self.phase,
            displacement: self.displacement,
            rotation_deg: self.rotation_deg(),
        }
    }

    /// Idle -> Dragging
    pub fn begin(&mut self) -> Result<(), SwipeError> {
        match self.phase {
            SwipePhase::Idle => {
                self.phase = SwipePhase::Dragging;
                self.displacement = 0.0;
                Ok(())
            }
            SwipePhase::Dragging => Err(SwipeError::GestureInProgress),
            _ => Err(SwipeError::AnimationInFlight),
        }
    }

    /// Follow the pointer. `translation_x` is measured from the gesture start.
    pub fn drag_to(&mut self, translation_x: f64) -> Result<(), SwipeError> {
        match self.phase {
            SwipePhase::Dragging => {
                if !translation_x.is_finite() {
                    return Err(SwipeError::InvalidTranslation);
                }
                self.displacement = translation_x;
                Ok(())
            }
            SwipePhase::Idle => Err(SwipeError::NoActiveGesture),
            _ => Err(SwipeError::AnimationInFlight),
        }
    }

    /// Dragging -> CommittingRight | CommittingLeft | Returning
    pub fn release(&mut self) -> Result<Animation, SwipeError> {
        match self.phase {
            SwipePhase::Dragging => {}
            SwipePhase::Idle => return Err(SwipeError::NoActiveGesture),
            _ => return Err(SwipeError::AnimationInFlight),
        }

        let threshold = self.threshold();
        let animation = if self.displacement > threshold {
            self.phase = SwipePhase::CommittingRight;
            Animation {
                kind: AnimationKind::Timing,
                target_x: self.screen_width,
                duration_ms: Some(self.commit_duration_ms),
            }
        } else if self.displacement < -threshold {
            self.phase = SwipePhase::CommittingLeft;
            Animation {
                kind: AnimationKind::Timing,
                target_x: -self.screen_width,
                duration_ms: Some(self.commit_duration_ms),
            }
        } else {
            self.phase = SwipePhase::Returning;
            Animation {
                kind: AnimationKind::Spring,
                target_x: 0.0,
                duration_ms: None,
            }
        };

        tracing::trace!(
            "Gesture released at {:.1} (threshold {:.1}) -> {:?}",
            self.displacement,
            threshold,
            self.phase
        );

        Ok(animation)
    }

    /// Animation completion. Resets to Idle and yields the decision, if any.
    pub fn finish(&mut self) -> Result<Option<SwipeDecision>, SwipeError> {
        let decision = match self.phase {
            SwipePhase::CommittingRight => Some(SwipeDecision::Like),
            SwipePhase::CommittingLeft => Some(SwipeDecision::Reject),
            SwipePhase::Returning => None,
            SwipePhase::Idle | SwipePhase::Dragging => return Err(SwipeError::NoAnimation),
        };

        self.phase = SwipePhase::Idle;
        self.displacement = 0.0;
        Ok(decision)
    }

    /// Drop any gesture or animation without a decision
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.displacement = 0.0;
    }
}

/// Linear rotation, zero at rest and saturating at half the screen width
#[inline]
pub fn rotation_for(displacement: f64, screen_width: f64) -> f64 {
    let half = screen_width / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    (displacement / half * MAX_ROTATION_DEG).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
}
