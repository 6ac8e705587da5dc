use crate::error::GalleryError;
use crate::player::PlayerCell;
use crate::video::VideoDescriptor;

pub const NO_VIDEOS_MESSAGE: &str = "No videos found.";

/// Lifecycle of the one listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Loading,
    Loaded(Vec<VideoDescriptor>),
    Failed(String),
}

/// What the gallery area shows for a given state.
#[derive(Debug, PartialEq, Eq)]
pub enum Display<'a> {
    Notice(&'a str),
    Grid(&'a [VideoDescriptor]),
}

impl GalleryState {
    /// Apply the outcome of the listing request.
    ///
    /// Only the first resolution counts; returns false when the state had
    /// already left `Loading`.
    pub fn resolve(&mut self, outcome: Result<Vec<VideoDescriptor>, &GalleryError>) -> bool {
        if !matches!(self, GalleryState::Loading) {
            log::debug!("Ignoring listing result: gallery already resolved");
            return false;
        }
        *self = match outcome {
            Ok(videos) => GalleryState::Loaded(videos),
            Err(error) => GalleryState::Failed(error.user_message()),
        };
        true
    }

    pub fn display(&self) -> Display<'_> {
        match self {
            GalleryState::Failed(message) => Display::Notice(message),
            GalleryState::Loaded(videos) if !videos.is_empty() => Display::Grid(videos),
            GalleryState::Loading | GalleryState::Loaded(_) => Display::Notice(NO_VIDEOS_MESSAGE),
        }
    }
}

/// Application state: the gallery plus one player per listed video.
pub struct App {
    pub gallery: GalleryState,
    /// Opened in listing order, one per update, so it trails the `Loaded`
    /// list until every cell is open.
    pub players: Vec<PlayerCell>,
    pub grid_columns: usize,
    /// Aborts the listing request if the app goes away first.
    pub load_handle: Option<iced::task::Handle>,
}

impl Default for App {
    fn default() -> Self {
        App {
            gallery: GalleryState::Loading,
            players: Vec::new(),
            grid_columns: crate::config::columns_for_width(crate::config::WINDOW_DEFAULT_WIDTH),
            load_handle: None,
        }
    }
}
