//! Auth, onboarding and profile flows over the profile store.

use crate::core::{
    auth::{ensure_not_registered, validate_registration, verify_login, AuthError},
    navigation::{home_screen, resolve, Screen},
    profile::{build_profile, FormMode, ProfileError},
};
use crate::models::{LoginRequest, ProfileForm, RegisterRequest, ViewerProfile};
use crate::services::browse::BrowseService;
use crate::services::profile_store::ProfileStore;
use crate::services::store::{KeyValueStore, StoreError};

/// Register the single local account and log in
///
/// A new registration overwrites any record with a different email.
pub async fn register<S: KeyValueStore>(
    store: &ProfileStore<S>,
    request: &RegisterRequest,
) -> Result<Screen, AuthError> {
    let record = validate_registration(request)?;
    let existing = store.auth_record().await?;
    ensure_not_registered(existing.as_ref(), &record.email)?;

    if existing.is_some() {
        tracing::info!("Replacing the existing local account");
    }
    store.save_auth_record(&record).await?;
    store.set_logged_in(true).await?;

    let next = home_screen(store.has_viewer_profile().await?);
    tracing::info!("Registered local account, continuing to {}", next);
    Ok(next)
}

/// Log in by email or phone against the stored record
pub async fn login<S: KeyValueStore>(
    store: &ProfileStore<S>,
    request: &LoginRequest,
) -> Result<Screen, AuthError> {
    let existing = store.auth_record().await?;
    verify_login(existing.as_ref(), request.identifier.trim())?;

    store.set_logged_in(true).await?;

    let next = home_screen(store.has_viewer_profile().await?);
    tracing::info!("Logged in, continuing to {}", next);
    Ok(next)
}

pub async fn logout<S: KeyValueStore>(store: &ProfileStore<S>) -> Result<Screen, AuthError> {
    store.set_logged_in(false).await?;
    tracing::info!("Logged out");
    Ok(Screen::Onboarding)
}

/// Validate and persist a new viewer profile
pub async fn create_profile<S: KeyValueStore>(
    browse: &BrowseService<S>,
    form: ProfileForm,
) -> Result<ViewerProfile, ProfileError> {
    let profile = build_profile(form, FormMode::Create, uuid::Uuid::new_v4().to_string())?;
    save_profile(browse, &profile).await?;
    tracing::info!("Created viewer profile {}", profile.id);
    Ok(profile)
}

/// Validate and persist edits to the existing viewer profile
pub async fn update_profile<S: KeyValueStore>(
    browse: &BrowseService<S>,
    form: ProfileForm,
) -> Result<ViewerProfile, ProfileError> {
    let existing = browse
        .store()
        .viewer_profile()
        .await?
        .ok_or(ProfileError::NotFound)?;

    let profile = build_profile(form, FormMode::Edit, existing.id)?;
    save_profile(browse, &profile).await?;
    tracing::info!("Updated viewer profile {}", profile.id);
    Ok(profile)
}

async fn save_profile<S: KeyValueStore>(
    browse: &BrowseService<S>,
    profile: &ViewerProfile,
) -> Result<(), ProfileError> {
    browse.store().save_viewer_profile(profile).await?;
    browse.viewer_gender_changed(profile.gender).await;
    Ok(())
}

/// Gate a requested screen on the stored login flag and profile
pub async fn entry_screen<S: KeyValueStore>(
    store: &ProfileStore<S>,
    requested: Screen,
) -> Result<Screen, StoreError> {
    let logged_in = store.is_logged_in().await?;
    let has_profile = store.has_viewer_profile().await?;
    Ok(resolve(requested, logged_in, has_profile))
}
