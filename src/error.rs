use std::error::Error as _;

use thiserror::Error;

/// Reasons the video listing could not be loaded.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid video listing: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GalleryError {
    /// Text shown in place of the gallery, including every underlying cause.
    pub fn user_message(&self) -> String {
        let mut message = format!("Error loading videos: {self}");
        let mut source = self.source();
        // `Network` and `Decode` already print their direct source.
        if matches!(self, GalleryError::Network(_) | GalleryError::Decode(_)) {
            source = source.and_then(|s| s.source());
        }
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        let err = GalleryError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            err.user_message(),
            "Error loading videos: unexpected response status 404 Not Found"
        );
    }

    #[test]
    fn decode_message_embeds_serde_text() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let expected = serde_err.to_string();
        let err = GalleryError::from(serde_err);
        let message = err.user_message();
        assert!(message.starts_with("Error loading videos: invalid video listing: "));
        assert!(message.contains(&expected));
    }
}
