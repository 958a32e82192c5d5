//! Profile repository trait.

use super::model::ProfessionalProfile;
use crate::error::{Result, SmartRxError};

/// A source of professional profiles for the listing and detail views.
///
/// No ordering or pagination contract; callers sort as they need.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves every profile.
    async fn list(&self) -> Result<Vec<ProfessionalProfile>>;

    /// Retrieves a single profile by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(profile))`: Profile found
    /// - `Ok(None)`: No profile with that id
    /// - `Err(SmartRxError)`: The source could not be read
    async fn get(&self, id: &str) -> Result<Option<ProfessionalProfile>>;

    /// Retrieves a single profile, treating a missing id as an error.
    ///
    /// Returns `SmartRxError::NotFound` with entity type `"profile"` when no
    /// profile has that id.
    async fn require(&self, id: &str) -> Result<ProfessionalProfile> {
        self.get(id)
            .await?
            .ok_or_else(|| SmartRxError::not_found("profile", id))
    }
}
