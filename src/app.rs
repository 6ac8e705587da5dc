use std::sync::Arc;
use std::time::Instant;

use iced::event;
use iced::{Element, Subscription, Task};

use crate::config;
use crate::loader;
use crate::message::Message;
use crate::player::PlayerCell;
use crate::state::{App, GalleryState};
use crate::ui;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Enhanced Video Gallery")
        .window(iced::window::Settings {
            size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
            ..iced::window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Boot into `Loading` and start the one listing request.
    fn new() -> (Self, Task<Message>) {
        let (task, handle) = Task::perform(loader::load(), |result| {
            Message::VideosLoaded(result.map_err(Arc::new))
        })
        .abortable();

        let app = App {
            load_handle: Some(handle.abort_on_drop()),
            ..App::default()
        };
        (app, task)
    }

    /// Handle UI messages and state updates.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::VideosLoaded(result) => {
                self.load_handle = None;
                let resolved = match result {
                    Ok(videos) => self.gallery.resolve(Ok(videos)),
                    Err(error) => self.gallery.resolve(Err(error.as_ref())),
                };
                if resolved && matches!(&self.gallery, GalleryState::Loaded(videos) if !videos.is_empty()) {
                    return Task::done(Message::OpenNextPlayer);
                }
            }
            Message::OpenNextPlayer => {
                // Opening blocks on media preroll; one cell per update keeps the window drawing.
                if let GalleryState::Loaded(videos) = &self.gallery {
                    if let Some(descriptor) = videos.get(self.players.len()) {
                        self.players.push(PlayerCell::open(descriptor));
                        if self.players.len() < videos.len() {
                            return Task::done(Message::OpenNextPlayer);
                        }
                    }
                }
            }
            Message::PointerMoved(index, x) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.pointer_x = x;
                }
            }
            Message::Tapped(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.tap(Instant::now());
                }
            }
            Message::TogglePause(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.toggle_pause();
                }
            }
            Message::ToggleMute(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.toggle_mute();
                }
            }
            Message::Seek(index, secs) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.drag_to(secs);
                }
            }
            Message::SeekRelease(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.release_drag();
                }
            }
            Message::NewFrame(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.sync_position();
                }
            }
            Message::EndOfStream(index) => {
                if let Some(cell) = self.players.get_mut(index) {
                    cell.end_of_stream();
                }
            }
            Message::EventOccurred(iced::Event::Window(iced::window::Event::Resized(size))) => {
                self.grid_columns = config::columns_for_width(size.width);
            }
            Message::EventOccurred(_) => {}
        }
        Task::none()
    }

    /// Subscribe to events.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen().map(Message::EventOccurred)
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        ui::render_main_view(self)
    }
}
