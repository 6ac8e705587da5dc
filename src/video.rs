use std::fmt;

use serde::Deserialize;

use crate::config::VIDEO_EXTENSIONS;

/// Opaque identifier assigned by the listing service.
///
/// The service may send either a string (UUID) or a number; both are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct VideoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for VideoId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => VideoId(text),
            RawId::Number(number) => VideoId(number.to_string()),
        }
    }
}

impl VideoId {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the video listing. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoDescriptor {
    #[serde(default)]
    pub id: VideoId,
    pub name: String,
    /// Locator without scheme, e.g. `localhost:9000/videos/clip.mp4`.
    /// Empty when the service omits it, which makes the media unopenable.
    #[serde(default)]
    pub url: String,
}

/// Whether `filename` ends with one of the playable extensions, ignoring case.
pub fn is_video_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Keeps only playable entries, in their original order.
pub fn retain_videos(mut videos: Vec<VideoDescriptor>) -> Vec<VideoDescriptor> {
    videos.retain(|video| is_video_file(&video.name));
    videos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, name: &str) -> VideoDescriptor {
        VideoDescriptor {
            id: VideoId(id.to_string()),
            name: name.to_string(),
            url: format!("host/{name}"),
        }
    }

    #[test]
    fn accepts_known_extensions_in_any_case() {
        for name in [
            "clip.mp4", "clip.MP4", "Clip.Mp4", "a.webm", "a.WEBM", "a.ogg", "a.OgG", "a.mov",
            "HOLIDAY.MOV",
        ] {
            assert!(is_video_file(name), "{name} should be a video");
        }
    }

    #[test]
    fn rejects_other_names() {
        for name in ["notes.txt", "mp4", "clip.mp4.bak", "clip.mkv", "", "clip_mov", "movie.mp"] {
            assert!(!is_video_file(name), "{name} should not be a video");
        }
    }

    #[test]
    fn bare_extension_counts() {
        assert!(is_video_file(".mp4"));
    }

    #[test]
    fn retain_keeps_order_and_drops_non_videos() {
        let list = vec![
            descriptor("3", "c.mov"),
            descriptor("1", "a.txt"),
            descriptor("2", "b.WebM"),
        ];
        let kept = retain_videos(list);
        let ids: Vec<_> = kept.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["3", "2"]);
    }

    #[test]
    fn refiltering_is_idempotent() {
        let list = vec![
            descriptor("1", "a.mp4"),
            descriptor("2", "b.jpg"),
            descriptor("3", "c.OGG"),
        ];
        let once = retain_videos(list);
        let twice = retain_videos(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        let list: Vec<VideoDescriptor> = serde_json::from_str(
            r#"[{"id":1,"name":"a.mp4","url":"h/a"},
                {"id":"5f0c-uuid","name":"b.mp4","url":"h/b","size":10}]"#,
        )
        .unwrap();
        assert_eq!(list[0].id.as_str(), "1");
        assert_eq!(list[1].id.to_string(), "5f0c-uuid");
    }
}
