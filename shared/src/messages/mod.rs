//! HTTP payloads exchanged with API clients

use serde::{Deserialize, Serialize};

use crate::types::{ErrorKind, NewRecommendation};

/// Body of `POST /recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequest {
    pub name: String,
    pub youtube_link: String,
}

impl From<CreateRecommendationRequest> for NewRecommendation {
    fn from(request: CreateRecommendationRequest) -> Self {
        NewRecommendation {
            name: request.name,
            youtube_link: request.youtube_link,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
