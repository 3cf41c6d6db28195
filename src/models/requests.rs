use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::Gender;

/// Request to register the single local account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    #[validate(must_match(other = "password"))]
    pub confirm_password: String,
    #[serde(default, alias = "mobile")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

/// Request to log in with an email address or phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "emailOrMobile")]
    pub identifier: String,
}

/// Profile form as submitted by the create and edit screens
///
/// Every field is optional on the wire so that missing input is reported
/// as a validation failure rather than a malformed payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(required, range(min = 18, max = 120))]
    pub age: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_gender")]
    #[validate(required)]
    pub gender: Option<Gender>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub religion: String,
    #[serde(default)]
    pub caste: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, alias = "mobile")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

/// Free-text search update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchText", alias = "search_text")]
    pub search_text: String,
}

/// Pointer position during a drag, relative to where the gesture started
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DragRequest {
    #[serde(rename = "translationX", alias = "translation_x")]
    pub translation_x: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenQuery {
    pub screen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsQuery {
    pub religion: Option<String>,
}

/// Phone numbers: 7 to 15 digits, optionally prefixed with '+'
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

/// Unselected pickers send an empty string
fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("Male") | Some("male") => Ok(Some(Gender::Male)),
        Some("Female") | Some("female") => Ok(Some(Gender::Female)),
        Some("Other") | Some("other") => Ok(Some(Gender::Other)),
        Some(other) => Err(de::Error::unknown_variant(other, &["Male", "Female", "Other"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("98765").is_err());
        assert!(validate_phone("98765-43210").is_err());
    }

    #[test]
    fn test_unselected_gender_is_none() {
        let form: ProfileForm = serde_json::from_str(r#"{"name":"Asha","gender":""}"#).unwrap();
        assert_eq!(form.gender, None);

        let form: ProfileForm = serde_json::from_str(r#"{"gender":"female"}"#).unwrap();
        assert_eq!(form.gender, Some(Gender::Female));

        assert!(serde_json::from_str::<ProfileForm>(r#"{"gender":"robot"}"#).is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            phone: None,
        };
        assert!(request.validate().is_ok());

        let mismatched = RegisterRequest {
            confirm_password: "secret2".to_string(),
            ..request
        };
        assert!(mismatched.validate().is_err());
    }
}
