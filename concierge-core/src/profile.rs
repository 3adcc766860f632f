use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::itinerary::PersonName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub chain_id: i32,
    pub hotel_id: i32,
    pub traveler_profile_id: String,
}

/// Guest profile as held by the profile service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub profile_id: String,
    pub person_name: PersonName,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Traveler profile not found: {0}")]
    NotFound(String),
    #[error("Profile service transport failure: {0}")]
    Transport(String),
    #[error("Profile response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn get_traveler_profile(&self, request: &ProfileRequest) -> Result<Profile, ProfileError>;
}

/// Profile lookup backed by a fixed set of profiles, keyed by profile id.
#[derive(Debug, Clone, Default)]
pub struct MockProfileLookup {
    profiles: HashMap<String, Profile>,
}

impl MockProfileLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.profile_id.clone(), profile);
        self
    }
}

#[async_trait]
impl ProfileLookup for MockProfileLookup {
    async fn get_traveler_profile(&self, request: &ProfileRequest) -> Result<Profile, ProfileError> {
        tracing::debug!(
            "Resolving mock profile {} for hotel {}",
            request.traveler_profile_id,
            request.hotel_id
        );

        self.profiles
            .get(&request.traveler_profile_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(request.traveler_profile_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lookup() {
        let lookup = MockProfileLookup::new().with_profile(Profile {
            profile_id: "P-100".to_string(),
            ..Default::default()
        });

        let found = lookup
            .get_traveler_profile(&ProfileRequest {
                chain_id: 7,
                hotel_id: 1201,
                traveler_profile_id: "P-100".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(found.profile_id, "P-100");

        let missing = lookup
            .get_traveler_profile(&ProfileRequest {
                chain_id: 7,
                hotel_id: 1201,
                traveler_profile_id: "P-404".to_string(),
            })
            .await;
        assert_eq!(missing, Err(ProfileError::NotFound("P-404".to_string())));
    }
}
