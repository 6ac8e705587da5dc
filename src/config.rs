//! Fixed settings for the gallery. None of these are overridable at runtime.

use std::time::Duration;

/// Origin of the video listing service.
pub const API_ORIGIN: &str = "http://localhost:8088";

/// Path of the listing endpoint, relative to [`API_ORIGIN`].
pub const VIDEOS_PATH: &str = "/api/v1/videos";

/// Filename suffixes treated as playable, lowercase.
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogg", ".mov"];

/// Prefix joined with a descriptor's `url` to build the media locator.
pub const MEDIA_SCHEME: &str = "http://";

/// Two presses closer than this count as a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Distance of a double-tap seek.
pub const SEEK_STEP: Duration = Duration::from_secs(5);

pub const CELL_WIDTH: f32 = 320.0;
pub const CELL_VIDEO_HEIGHT: f32 = 180.0;
pub const GRID_GAP: f32 = 20.0;
pub const PAGE_PADDING: f32 = 20.0;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;

/// Number of cells that fit side by side in a window of the given width.
pub fn columns_for_width(width: f32) -> usize {
    let usable = width - 2.0 * PAGE_PADDING + GRID_GAP;
    let columns = (usable / (CELL_WIDTH + GRID_GAP)).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}
