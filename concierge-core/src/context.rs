use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Which front-end the call originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessContext {
    #[default]
    #[serde(rename = "VA")]
    VoiceAgent,
}

impl fmt::Display for BusinessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessContext::VoiceAgent => write!(f, "VA"),
        }
    }
}

/// Request header attached to every itinerary session.
///
/// The activity id is minted at build time and is the correlation id
/// reported back to callers when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextHeader {
    pub business_context: BusinessContext,
    pub user_id: String,
    pub activity_id: String,
}

impl ContextHeader {
    pub fn builder() -> ContextHeaderBuilder {
        ContextHeaderBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ContextHeaderBuilder {
    business_context: BusinessContext,
    user_id: Option<Uuid>,
}

impl ContextHeaderBuilder {
    pub fn with_business_context(mut self, context: BusinessContext) -> Self {
        self.business_context = context;
        self
    }

    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn build(self) -> CoreResult<ContextHeader> {
        let user_id = match self.user_id {
            Some(id) if !id.is_nil() => id,
            _ => return Err(CoreError::ValidationError("user id is required".to_string())),
        };

        Ok(ContextHeader {
            business_context: self.business_context,
            user_id: user_id.to_string(),
            activity_id: Uuid::new_v4().to_string(),
        })
    }
}
