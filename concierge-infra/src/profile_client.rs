use async_trait::async_trait;
use concierge_core::{Profile, ProfileError, ProfileLookup, ProfileRequest};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error};

pub const TRAVELER_PROFILE_PATH: &str = "/profiles/traveler";

/// Resolves traveler profiles from the profile service over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpProfileClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProfileClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProfileError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProfileError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ProfileLookup for HttpProfileClient {
    async fn get_traveler_profile(&self, request: &ProfileRequest) -> Result<Profile, ProfileError> {
        let url = format!("{}{}", self.base_url, TRAVELER_PROFILE_PATH);
        debug!("Resolving traveler profile {} for hotel {}", request.traveler_profile_id, request.hotel_id);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("HTTP call to {} failed: {}", url, e);
                ProfileError::Transport(e.to_string())
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ProfileError::NotFound(request.traveler_profile_id.clone())),
            status if !status.is_success() => Err(ProfileError::Transport(format!(
                "profile service returned {}",
                status
            ))),
            _ => response
                .json::<Profile>()
                .await
                .map_err(|e| ProfileError::Decode(e.to_string())),
        }
    }
}
