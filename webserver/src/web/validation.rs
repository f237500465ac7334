//! Request body validation
//!
//! The engine trusts its inputs; everything a client sends is checked here
//! first.

use url::Url;

use shared::{CreateRecommendationRequest, NewRecommendation};

use crate::error::{WebServerError, WebServerResult};

/// Hosts accepted in `youtubeLink`
const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "m.youtube.com", "youtu.be"];

/// Check a create request and turn it into engine input
pub fn validate_create(request: CreateRecommendationRequest) -> WebServerResult<NewRecommendation> {
    if request.name.trim().is_empty() {
        return Err(WebServerError::invalid_request("\"name\" is not allowed to be empty"));
    }
    if request.youtube_link.trim().is_empty() {
        return Err(WebServerError::invalid_request("\"youtubeLink\" is not allowed to be empty"));
    }

    let link = Url::parse(&request.youtube_link)
        .map_err(|_| WebServerError::invalid_request("\"youtubeLink\" must be a valid URL"))?;

    if !matches!(link.scheme(), "http" | "https") {
        return Err(WebServerError::invalid_request("\"youtubeLink\" must use http or https"));
    }
    let is_youtube = link
        .host_str()
        .is_some_and(|host| YOUTUBE_HOSTS.contains(&host));
    if !is_youtube {
        return Err(WebServerError::invalid_request("\"youtubeLink\" must be a YouTube link"));
    }

    Ok(request.into())
}
