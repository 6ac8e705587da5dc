use std::sync::Arc;

use iced::Event;

use crate::error::GalleryError;
use crate::video::VideoDescriptor;

/// Player messages carry the cell's index in the gallery.
#[derive(Clone, Debug)]
pub enum Message {
    VideosLoaded(Result<Vec<VideoDescriptor>, Arc<GalleryError>>),
    OpenNextPlayer,
    PointerMoved(usize, f32),
    Tapped(usize),
    TogglePause(usize),
    ToggleMute(usize),
    Seek(usize, f64),
    SeekRelease(usize),
    NewFrame(usize),
    EndOfStream(usize),
    EventOccurred(Event),
}
