use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{ProfileForm, ViewerProfile};
use crate::services::StoreError;

/// Fields reported as missing, in form order
const REQUIRED_FIELDS: &[&str] = &["name", "age", "gender", "religion", "caste", "location"];

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Please fill all required fields ({0}).")]
    MissingFields(String),

    #[error("Please enter a valid age (18–120).")]
    AgeOutOfRange,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("No profile exists yet")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Create requires a caste; edit does not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Validate a submitted form and build the viewer profile
///
/// Nothing is persisted here; on error the input is discarded.
pub fn build_profile(
    form: ProfileForm,
    mode: FormMode,
    id: String,
) -> Result<ViewerProfile, ProfileError> {
    let validation = form.validate();
    let caste_missing = mode == FormMode::Create && form.caste.is_empty();

    if let Err(errors) = &validation {
        check_errors(errors, caste_missing)?;
    } else if caste_missing {
        return Err(ProfileError::MissingFields("caste".to_string()));
    }

    // Presence and range were checked above
    let (Some(age), Some(gender)) = (form.age, form.gender) else {
        return Err(ProfileError::MissingFields("age, gender".to_string()));
    };
    let age = u8::try_from(age).map_err(|_| ProfileError::AgeOutOfRange)?;

    Ok(ViewerProfile {
        id,
        name: form.name,
        age,
        gender,
        religion: form.religion,
        caste: form.caste,
        location: form.location,
        bio: form.bio,
        photo_ref: form.photo,
        email: form.email.filter(|e| !e.is_empty()),
        phone: form.phone.filter(|p| !p.is_empty()),
    })
}

fn check_errors(errors: &ValidationErrors, caste_missing: bool) -> Result<(), ProfileError> {
    let fields = errors.field_errors();

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|&field| {
            if field == "caste" {
                return caste_missing;
            }
            fields
                .get(field)
                .is_some_and(|errs| errs.iter().any(|e| e.code != "range"))
        })
        .collect();

    if !missing.is_empty() {
        return Err(ProfileError::MissingFields(missing.join(", ")));
    }
    if fields.contains_key("age") {
        return Err(ProfileError::AgeOutOfRange);
    }
    if fields.contains_key("email") {
        return Err(ProfileError::InvalidEmail);
    }
    if fields.contains_key("phone") {
        return Err(ProfileError::InvalidPhone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn create_form() -> ProfileForm {
        ProfileForm {
            name: "Asha Rao".to_string(),
            age: Some(29),
            gender: Some(Gender::Female),
            religion: "Hindu".to_string(),
            caste: "Nair".to_string(),
            location: "Pune".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_profile() {
        let profile = build_profile(create_form(), FormMode::Create, "viewer".to_string()).unwrap();
        assert_eq!(profile.id, "viewer");
        assert_eq!(profile.age, 29);
        assert_eq!(profile.gender, Gender::Female);
    }

    #[test]
    fn test_missing_fields_listed() {
        let form = ProfileForm {
            name: String::new(),
            gender: None,
            ..create_form()
        };

        match build_profile(form, FormMode::Edit, "viewer".to_string()) {
            Err(ProfileError::MissingFields(fields)) => assert_eq!(fields, "name, gender"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_caste_required_on_create_only() {
        let form = ProfileForm {
            caste: String::new(),
            ..create_form()
        };

        assert!(matches!(
            build_profile(form.clone(), FormMode::Create, "viewer".to_string()),
            Err(ProfileError::MissingFields(_))
        ));
        assert!(build_profile(form, FormMode::Edit, "viewer".to_string()).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        for age in [17, 121, 400] {
            let form = ProfileForm {
                age: Some(age),
                ..create_form()
            };
            assert!(matches!(
                build_profile(form, FormMode::Edit, "viewer".to_string()),
                Err(ProfileError::AgeOutOfRange)
            ));
        }
    }

    #[test]
    fn test_malformed_contact() {
        let form = ProfileForm {
            email: Some("asha-at-example".to_string()),
            ..create_form()
        };
        assert!(matches!(
            build_profile(form, FormMode::Edit, "viewer".to_string()),
            Err(ProfileError::InvalidEmail)
        ));

        let form = ProfileForm {
            phone: Some("12ab".to_string()),
            ..create_form()
        };
        assert!(matches!(
            build_profile(form, FormMode::Edit, "viewer".to_string()),
            Err(ProfileError::InvalidPhone)
        ));
    }
}
