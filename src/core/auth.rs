use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{AuthRecord, RegisterRequest};
use crate::services::StoreError;

/// Errors from registration and login
///
/// Messages are shown to the user as-is.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please fill all fields.")]
    MissingFields,

    #[error("Please enter your email or mobile number")]
    MissingIdentifier,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("An account with this email already exists.")]
    AccountExists,

    #[error("No user found. Please register.")]
    NoUser,

    #[error("No account found with these details")]
    NoAccount,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// Whether the error is the user's input rather than the device
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AuthError::Storage(_))
    }
}

/// Validate a registration form and build the credential record
pub fn validate_registration(request: &RegisterRequest) -> Result<AuthRecord, AuthError> {
    if request.email.is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
    {
        return Err(AuthError::MissingFields);
    }

    if let Err(errors) = request.validate() {
        return Err(first_registration_error(&errors));
    }

    Ok(AuthRecord {
        email: request.email.clone(),
        password: request.password.clone(),
        phone: request.phone.clone().filter(|p| !p.is_empty()),
    })
}

/// Refuse to register an email that already owns the stored record
pub fn ensure_not_registered(existing: Option<&AuthRecord>, email: &str) -> Result<(), AuthError> {
    match existing {
        Some(record) if record.email == email => Err(AuthError::AccountExists),
        _ => Ok(()),
    }
}

/// Compare a login identifier against the stored record
pub fn verify_login(existing: Option<&AuthRecord>, identifier: &str) -> Result<(), AuthError> {
    if identifier.is_empty() {
        return Err(AuthError::MissingIdentifier);
    }

    let record = existing.ok_or(AuthError::NoUser)?;
    if record.identifies(identifier) {
        Ok(())
    } else {
        Err(AuthError::NoAccount)
    }
}

fn first_registration_error(errors: &ValidationErrors) -> AuthError {
    let fields = errors.field_errors();
    if fields.contains_key("email") {
        AuthError::InvalidEmail
    } else if fields.contains_key("password") {
        AuthError::PasswordTooShort
    } else if fields.contains_key("confirm_password") {
        AuthError::PasswordMismatch
    } else {
        AuthError::InvalidPhone
    }
}
