//! Professional profile domain model.
//!
//! A directory entry consumed by the profile listing and detail views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A professional listed in the directory.
///
/// Every field except `id` and `last_updated` defaults to empty, so records
/// read from a data source may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfessionalProfile {
    /// Unique identifier (UUID v4 string), generated at construction
    pub id: String,
    pub name: String,
    /// Job title, e.g. "Clinical Pharmacist"
    pub title: String,
    pub specialty: String,
    pub qualification: String,
    pub organization: String,
    pub location: String,
    /// Link to the location on a map provider
    pub map_url: String,
    /// Free-text biography
    pub about: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Default for ProfessionalProfile {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            title: String::new(),
            specialty: String::new(),
            qualification: String::new(),
            organization: String::new(),
            location: String::new(),
            map_url: String::new(),
            about: String::new(),
            profile_image_url: None,
            last_updated: Utc::now(),
        }
    }
}

impl ProfessionalProfile {
    /// Creates a profile with a fresh id and the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualification = qualification.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>, map_url: impl Into<String>) -> Self {
        self.location = location.into();
        self.map_url = map_url.into();
        self
    }

    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn with_profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ProfessionalProfile::default();
        let b = ProfessionalProfile::default();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_defaults_are_empty() {
        let before = Utc::now();
        let profile = ProfessionalProfile::new("Dr. Sara");
        assert_eq!(profile.name, "Dr. Sara");
        assert!(profile.title.is_empty());
        assert!(profile.about.is_empty());
        assert!(profile.profile_image_url.is_none());
        assert!(profile.last_updated >= before);
    }

    #[test]
    fn test_builder() {
        let profile = ProfessionalProfile::new("Omar")
            .with_title("Clinical Pharmacist")
            .with_specialty("Oncology")
            .with_location("Cairo", "https://maps.example.com/cairo")
            .with_profile_image_url("/img/omar.avif");

        assert_eq!(profile.title, "Clinical Pharmacist");
        assert_eq!(profile.specialty, "Oncology");
        assert_eq!(profile.location, "Cairo");
        assert_eq!(profile.map_url, "https://maps.example.com/cairo");
        assert_eq!(profile.profile_image_url.as_deref(), Some("/img/omar.avif"));
    }

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{"id":"p-1","name":"Laila","mapUrl":"https://maps.example.com/x"}"#;
        let profile: ProfessionalProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "p-1");
        assert_eq!(profile.name, "Laila");
        assert_eq!(profile.map_url, "https://maps.example.com/x");
        assert!(profile.profile_image_url.is_none());
    }
}
