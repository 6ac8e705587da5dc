use std::time::{Duration, Instant};

use iced_video_player::Video;

use crate::config::{CELL_WIDTH, MEDIA_SCHEME};
use crate::gesture::DoubleTap;
use crate::video::VideoDescriptor;

/// Media locator for a descriptor: scheme prefix joined with its `url` as-is.
pub fn media_url(descriptor: &VideoDescriptor) -> String {
    format!("{MEDIA_SCHEME}{}", descriptor.url)
}

/// One playable cell of the gallery grid.
pub struct PlayerCell {
    /// `None` when the media stack could not open the locator.
    pub video: Option<Video>,
    pub position: f64,
    pub dragging: bool,
    /// Last pointer x over the video surface, relative to its left edge.
    pub pointer_x: f32,
    pub gesture: DoubleTap,
}

impl PlayerCell {
    /// Open the media for `descriptor`, paused at the start.
    pub fn open(descriptor: &VideoDescriptor) -> Self {
        let locator = media_url(descriptor);
        let video = match url::Url::parse(&locator) {
            Ok(url) => match Video::new(&url) {
                Ok(mut video) => {
                    video.set_paused(true);
                    log::info!("Video opened: id={}, url={}", descriptor.id, locator);
                    Some(video)
                }
                Err(e) => {
                    log::warn!("Failed to open video {}: {}", locator, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Invalid media locator {}: {}", locator, e);
                None
            }
        };

        PlayerCell {
            video,
            position: 0.0,
            dragging: false,
            pointer_x: CELL_WIDTH / 2.0,
            gesture: DoubleTap::default(),
        }
    }

    /// Handle a press on the video surface.
    pub fn tap(&mut self, now: Instant) {
        let x = self.pointer_x;
        let Some(video) = self.video.as_mut() else {
            self.gesture.register(now);
            return;
        };

        let current = video.position();
        if let Some(target) = self
            .gesture
            .tap(now, x, CELL_WIDTH, current, video.duration())
        {
            log::debug!(
                "Double tap at x={}: seeking {:.1}s -> {:.1}s",
                x,
                current.as_secs_f64(),
                target.as_secs_f64()
            );
            if let Err(e) = video.seek(target, true) {
                log::warn!("Seek failed: {}", e);
            } else {
                self.position = target.as_secs_f64();
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.set_paused(!video.paused());
        }
    }

    pub fn toggle_mute(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.set_muted(!video.muted());
        }
    }

    /// Slider drag: hold the position until release.
    pub fn drag_to(&mut self, secs: f64) {
        if self.video.is_some() && secs.is_finite() && secs >= 0.0 {
            self.dragging = true;
            self.position = secs;
        }
    }

    pub fn release_drag(&mut self) {
        self.dragging = false;
        if let Some(video) = self.video.as_mut() {
            if self.position.is_finite() && self.position >= 0.0 {
                if let Err(e) = video.seek(Duration::from_secs_f64(self.position), true) {
                    log::warn!("Seek failed: {}", e);
                }
            }
        }
    }

    pub fn sync_position(&mut self) {
        if self.dragging {
            return;
        }
        if let Some(video) = self.video.as_ref() {
            let pos = video.position().as_secs_f64();
            if pos.is_finite() && pos >= 0.0 {
                self.position = pos;
            }
        }
    }

    pub fn end_of_stream(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.set_paused(true);
        }
    }
}

/// Slider range for a video, falling back to one second when the length is unknown.
pub fn safe_duration(video: &Video) -> f64 {
    let duration = video.duration().as_secs_f64();
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        1.0
    }
}

/// `m:ss` label for a position in seconds.
pub fn format_position(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 { secs as u64 } else { 0 };
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_prefixes_scheme_without_escaping() {
        let descriptor: VideoDescriptor = serde_json::from_str(
            r#"{"id":1,"name":"my clip.mp4","url":"localhost:9000/videos/my clip.mp4"}"#,
        )
        .unwrap();
        assert_eq!(
            media_url(&descriptor),
            "http://localhost:9000/videos/my clip.mp4"
        );
    }

    #[test]
    fn position_label() {
        assert_eq!(format_position(0.0), "0:00");
        assert_eq!(format_position(65.7), "1:05");
        assert_eq!(format_position(f64::NAN), "0:00");
        assert_eq!(format_position(-3.0), "0:00");
    }
}
