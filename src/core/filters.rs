use std::collections::HashSet;
use thiserror::Error;

use crate::models::{CandidateProfile, FilterCriteria, Gender};

/// Errors raised while building the visible candidate queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("No browsing rule is defined for viewer gender {0}")]
    UnsupportedViewerGender(Gender),

    #[error("Invalid age bracket: {0}")]
    InvalidAgeBracket(String),
}

/// Stage 1: drop ids the viewer already decided on
#[inline]
pub fn is_not_excluded(profile: &CandidateProfile, excluded: &HashSet<String>) -> bool {
    !excluded.contains(&profile.id)
}

/// Stage 2: opposite-gender rule
#[inline]
pub fn matches_gender_rule(profile: &CandidateProfile, shown: Gender) -> bool {
    profile.gender == shown
}

/// Stage 3: case-insensitive name search
///
/// `needle` must already be lowercased. An empty needle matches everything.
#[inline]
pub fn matches_search(profile: &CandidateProfile, needle: &str) -> bool {
    needle.is_empty() || profile.name.to_lowercase().contains(needle)
}

/// Stage 4: structured criteria (age bracket, religion, caste, location)
#[inline]
pub fn matches_criteria(profile: &CandidateProfile, criteria: &FilterCriteria) -> bool {
    criteria.age.contains(profile.age)
        && criteria.religion.matches(&profile.religion)
        && criteria.caste.matches(&profile.caste)
        && criteria.location.matches(&profile.location)
}

/// Derive the visible candidate queue
///
/// Pure and deterministic. Every clause must pass for a candidate to stay
/// visible; the result keeps the relative order of `pool`.
///
/// # Errors
/// `FilterError::UnsupportedViewerGender` when the viewer's gender has no
/// browsing rule.
pub fn visible_queue<'a>(
    pool: &'a [CandidateProfile],
    excluded: &HashSet<String>,
    viewer_gender: Gender,
    search_text: &str,
    criteria: &FilterCriteria,
) -> Result<Vec<&'a CandidateProfile>, FilterError> {
    let shown = viewer_gender
        .opposite()
        .ok_or(FilterError::UnsupportedViewerGender(viewer_gender))?;
    let needle = search_text.to_lowercase();

    let queue = pool
        .iter()
        .filter(|profile| is_not_excluded(profile, excluded))
        .filter(|profile| matches_gender_rule(profile, shown))
        .filter(|profile| matches_search(profile, &needle))
        .filter(|profile| matches_criteria(profile, criteria))
        .collect();

    Ok(queue)
}
