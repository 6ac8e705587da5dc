use crate::config::{API_ORIGIN, VIDEOS_PATH};
use crate::error::GalleryError;
use crate::video::{retain_videos, VideoDescriptor};

/// Full URL of the video listing.
pub fn videos_endpoint() -> String {
    format!("{API_ORIGIN}{VIDEOS_PATH}")
}

/// Decode a listing body into descriptors, without filtering.
pub fn parse_listing(body: &[u8]) -> Result<Vec<VideoDescriptor>, GalleryError> {
    Ok(serde_json::from_slice(body)?)
}

/// Issue one GET against `endpoint` and return the playable entries.
pub async fn fetch_videos(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<VideoDescriptor>, GalleryError> {
    log::info!("Requesting video listing from {}", endpoint);

    let response = client.get(endpoint).send().await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(GalleryError::Status(status));
    }

    let body = response.bytes().await?;
    let listed = parse_listing(&body)?;
    let total = listed.len();
    let videos = retain_videos(listed);
    log::info!(
        "Video listing loaded: {} entries, {} playable",
        total,
        videos.len()
    );
    Ok(videos)
}

/// Load the gallery contents from the fixed listing endpoint.
pub async fn load() -> Result<Vec<VideoDescriptor>, GalleryError> {
    let client = reqwest::Client::new();
    let result = fetch_videos(&client, &videos_endpoint()).await;
    if let Err(e) = &result {
        log::error!("Error fetching videos: {}", e);
    }
    result
}
