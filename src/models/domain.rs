use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::filters::FilterError;

/// Profile gender as stored by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "other")]
    Other,
}

impl Gender {
    /// Gender shown to a viewer of this gender, if a browsing rule exists
    pub fn opposite(self) -> Option<Gender> {
        match self {
            Gender::Male => Some(Gender::Female),
            Gender::Female => Some(Gender::Male),
            Gender::Other => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A profile in the seeded candidate pool
///
/// Candidates are never created or destroyed by the app, only filtered and displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub caste: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "photo", default)]
    pub photo_ref: String,
}

/// The current user's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub religion: String,
    #[serde(default)]
    pub caste: String,
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "photo", default)]
    pub photo_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The single locally stored credential record
///
/// Stored in plaintext. One registered user at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub email: String,
    pub password: String,
    #[serde(default, alias = "mobile", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl AuthRecord {
    /// Whether the identifier names this account (email or phone)
    pub fn identifies(&self, identifier: &str) -> bool {
        self.email == identifier || self.phone.as_deref() == Some(identifier)
    }
}

/// Liked sequence and rejected ids
///
/// An id appears in at most one of the two. Like order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub liked: Vec<CandidateProfile>,
    pub rejected: Vec<String>,
}

impl InteractionRecord {
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.iter().any(|p| p.id == id)
    }

    pub fn is_rejected(&self, id: &str) -> bool {
        self.rejected.iter().any(|r| r == id)
    }

    /// Append a like. Returns false if the id was already decided.
    pub fn like(&mut self, profile: CandidateProfile) -> bool {
        if self.is_liked(&profile.id) || self.is_rejected(&profile.id) {
            return false;
        }
        self.liked.push(profile);
        true
    }

    /// Append a rejection. Returns false if the id was already decided.
    pub fn reject(&mut self, id: &str) -> bool {
        if self.is_liked(id) || self.is_rejected(id) {
            return false;
        }
        self.rejected.push(id.to_string());
        true
    }

    /// Remove a like. The id is not returned to the browsable queue.
    pub fn unlike(&mut self, id: &str) -> Option<CandidateProfile> {
        let pos = self.liked.iter().position(|p| p.id == id)?;
        Some(self.liked.remove(pos))
    }

    /// Every id that has been liked or rejected
    pub fn decided_ids(&self) -> impl Iterator<Item = &str> {
        self.liked
            .iter()
            .map(|p| p.id.as_str())
            .chain(self.rejected.iter().map(String::as_str))
    }
}

/// Age bracket criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeBracket {
    #[default]
    Any,
    /// Inclusive on both ends
    Range { min: u8, max: u8 },
    /// Open-ended, e.g. "40+"
    AtLeast(u8),
}

impl AgeBracket {
    #[inline]
    pub fn contains(&self, age: u8) -> bool {
        match *self {
            AgeBracket::Any => true,
            AgeBracket::Range { min, max } => age >= min && age <= max,
            AgeBracket::AtLeast(min) => age >= min,
        }
    }
}

impl FromStr for AgeBracket {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return Ok(AgeBracket::Any);
        }

        let invalid = || FilterError::InvalidAgeBracket(s.to_string());

        if let Some(lower) = s.strip_suffix('+') {
            let min = lower.trim().parse::<u8>().map_err(|_| invalid())?;
            return Ok(AgeBracket::AtLeast(min));
        }

        let (lo, hi) = s.split_once('-').ok_or_else(invalid)?;
        let min = lo.trim().parse::<u8>().map_err(|_| invalid())?;
        let max = hi.trim().parse::<u8>().map_err(|_| invalid())?;
        if min > max {
            return Err(invalid());
        }
        Ok(AgeBracket::Range { min, max })
    }
}

impl TryFrom<String> for AgeBracket {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeBracket> for String {
    fn from(value: AgeBracket) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeBracket::Any => f.write_str("Any"),
            AgeBracket::Range { min, max } => write!(f, "{}-{}", min, max),
            AgeBracket::AtLeast(min) => write!(f, "{}+", min),
        }
    }
}

/// Exact-match criterion or "Any"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    Any,
    Exact(String),
}

impl Choice {
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::Any => true,
            Choice::Exact(expected) => expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        if value.is_empty() || value == "Any" {
            Choice::Any
        } else {
            Choice::Exact(value)
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::from(value.to_string())
    }
}

impl From<Choice> for String {
    fn from(value: Choice) -> Self {
        match value {
            Choice::Any => "Any".to_string(),
            Choice::Exact(v) => v,
        }
    }
}

/// Structured browse filter
///
/// Held only in session state. Free-text search lives beside it in the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub age: AgeBracket,
    #[serde(default)]
    pub religion: Choice,
    #[serde(default)]
    pub caste: Choice,
    #[serde(default)]
    pub location: Choice,
}

impl FilterCriteria {
    /// Change religion; caste depends on it and goes back to Any
    pub fn set_religion(&mut self, religion: Choice) {
        if self.religion != religion {
            self.caste = Choice::Any;
        }
        self.religion = religion;
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Placeholder conversation derived from a liked profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user: CandidateProfile,
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bracket_parse() {
        assert_eq!("Any".parse::<AgeBracket>().unwrap(), AgeBracket::Any);
        assert_eq!(
            "26-30".parse::<AgeBracket>().unwrap(),
            AgeBracket::Range { min: 26, max: 30 }
        );
        assert_eq!("40+".parse::<AgeBracket>().unwrap(), AgeBracket::AtLeast(40));
        assert!("30-26".parse::<AgeBracket>().is_err());
        assert!("young".parse::<AgeBracket>().is_err());
    }

    #[test]
    fn test_age_bracket_inclusive() {
        let bracket = AgeBracket::Range { min: 26, max: 30 };
        assert!(bracket.contains(26));
        assert!(bracket.contains(30));
        assert!(!bracket.contains(25));
        assert!(!bracket.contains(31));
    }

    #[test]
    fn test_choice_serde() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"age":"26-30","religion":"Hindu","location":"Any"}"#).unwrap();
        assert_eq!(criteria.religion, Choice::Exact("Hindu".to_string()));
        assert_eq!(criteria.caste, Choice::Any);
        assert!(criteria.location.is_any());

        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["age"], "26-30");
        assert_eq!(json["caste"], "Any");
    }

    #[test]
    fn test_set_religion_resets_caste() {
        let mut criteria = FilterCriteria {
            religion: "Hindu".into(),
            caste: "Brahmin".into(),
            ..Default::default()
        };

        criteria.set_religion("Hindu".into());
        assert_eq!(criteria.caste, Choice::Exact("Brahmin".to_string()));

        criteria.set_religion("Sikh".into());
        assert_eq!(criteria.caste, Choice::Any);
    }

    #[test]
    fn test_interaction_record_exclusive() {
        let profile = CandidateProfile {
            id: "1".to_string(),
            name: "Priya".to_string(),
            age: 27,
            gender: Gender::Female,
            religion: String::new(),
            caste: String::new(),
            location: String::new(),
            bio: String::new(),
            photo_ref: String::new(),
        };

        let mut record = InteractionRecord::default();
        assert!(record.like(profile.clone()));
        assert!(!record.like(profile));
        assert!(!record.reject("1"));
        assert_eq!(record.decided_ids().collect::<Vec<_>>(), vec!["1"]);

        assert!(record.unlike("1").is_some());
        assert!(record.liked.is_empty());
    }

    #[test]
    fn test_auth_record_mobile_alias() {
        let record: AuthRecord =
            serde_json::from_str(r#"{"email":"a@b.co","password":"secret","mobile":"9876543210"}"#)
                .unwrap();
        assert!(record.identifies("a@b.co"));
        assert!(record.identifies("9876543210"));
        assert!(!record.identifies("someone@else.co"));
    }
}
