//! In-memory profile repository.
//!
//! Holds the directory in memory, optionally seeded from a JSON file
//! containing an array of profile records.

use async_trait::async_trait;
use smartrx_core::profile::{ProfessionalProfile, ProfileRepository};
use smartrx_core::{Result, SmartRxError};
use std::path::Path;
use tokio::sync::RwLock;

/// A [`ProfileRepository`] backed by a `Vec` in memory.
///
/// Records keep the order they were inserted or loaded in.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<ProfessionalProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: Vec<ProfessionalProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Loads profiles from a JSON array file.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            SmartRxError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let profiles: Vec<ProfessionalProfile> = serde_json::from_str(&content)?;
        tracing::info!(
            count = profiles.len(),
            path = %path.display(),
            "Loaded professional profiles"
        );
        Ok(Self::new(profiles))
    }

    /// Adds or replaces a profile (matched by id).
    pub async fn upsert(&self, profile: ProfessionalProfile) {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> Result<Vec<ProfessionalProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<ProfessionalProfile>> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}
