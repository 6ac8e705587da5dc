use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, mouse_area, row, scrollable, slider, text};
use iced::{Element, Length};
use iced_video_player::{Video, VideoPlayer};

use crate::config::{CELL_VIDEO_HEIGHT, CELL_WIDTH, GRID_GAP, PAGE_PADDING};
use crate::message::Message;
use crate::player::{format_position, safe_duration, PlayerCell};
use crate::state::{App, Display};
use crate::style;
use crate::video::VideoDescriptor;

/// Render the main view.
pub fn render_main_view(app: &App) -> Element<'_, Message> {
    let title = container(
        text("Enhanced Video Gallery")
            .size(style::TITLE_SIZE)
            .color(style::TITLE_COLOR),
    )
    .center_x(Length::Fill);

    let gallery: Element<'_, Message> = match app.gallery.display() {
        Display::Notice(message) => container(text(message).size(16))
            .center_x(Length::Fill)
            .into(),
        Display::Grid(videos) => render_grid(app, videos),
    };

    let page = column![title, gallery]
        .spacing(GRID_GAP)
        .padding(PAGE_PADDING)
        .width(Length::Fill);

    container(scrollable(page))
        .style(style::page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Lay cells out in rows of `grid_columns`, in listing order.
fn render_grid<'a>(app: &'a App, videos: &'a [VideoDescriptor]) -> Element<'a, Message> {
    let cells: Vec<(usize, &VideoDescriptor, Option<&PlayerCell>)> = videos
        .iter()
        .enumerate()
        .map(|(index, descriptor)| (index, descriptor, app.players.get(index)))
        .collect();

    let rows = cells.chunks(app.grid_columns.max(1)).map(|chunk| {
        let row_content = chunk
            .iter()
            .map(|&(index, descriptor, cell)| create_player_cell(index, descriptor, cell));
        let line: Element<'a, Message> = row(row_content).spacing(GRID_GAP).into();
        line
    });

    column(rows)
        .spacing(GRID_GAP)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

/// Create a card with the video surface, its controls and the caption.
fn create_player_cell<'a>(
    index: usize,
    descriptor: &'a VideoDescriptor,
    cell: Option<&'a PlayerCell>,
) -> Element<'a, Message> {
    let video = cell.and_then(|cell| cell.video.as_ref());
    let surface: Element<'a, Message> = match (cell, video) {
        (_, Some(video)) => VideoPlayer::new(video)
            .on_end_of_stream(Message::EndOfStream(index))
            .on_new_frame(Message::NewFrame(index))
            .into(),
        (Some(_), None) => text("Unplayable video").size(14).into(),
        (None, None) => text("Opening...").size(14).into(),
    };

    let surface = container(surface)
        .width(Length::Fixed(CELL_WIDTH))
        .height(Length::Fixed(CELL_VIDEO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(style::video_surface);

    // Pointer x is relative to the surface, which is exactly CELL_WIDTH wide.
    let surface = mouse_area(surface)
        .on_move(move |point| Message::PointerMoved(index, point.x))
        .on_press(Message::Tapped(index));

    let mut content = column![surface];
    if let (Some(cell), Some(video)) = (cell, video) {
        content = content.push(build_controls(index, video, cell));
    }
    content = content.push(
        container(
            text(&descriptor.name)
                .size(style::CAPTION_SIZE)
                .color(style::CAPTION_COLOR),
        )
        .padding(style::CAPTION_PADDING),
    );

    container(content)
        .width(Length::Fixed(CELL_WIDTH))
        .style(style::card)
        .into()
}

/// Playback controls: position slider, play/pause, mute and elapsed time.
fn build_controls<'a>(index: usize, video: &'a Video, cell: &'a PlayerCell) -> Element<'a, Message> {
    column![
        slider(0.0..=safe_duration(video), cell.position, move |pos| {
            Message::Seek(index, pos)
        })
        .step(0.1)
        .on_release(Message::SeekRelease(index)),
        row![
            button(text(if video.paused() { ">" } else { "||" }).size(12))
                .on_press(Message::TogglePause(index))
                .padding(8),
            button(text(if video.muted() { "M" } else { "~" }).size(12))
                .on_press(Message::ToggleMute(index))
                .padding(8),
            text(format!(
                "{} / {}",
                format_position(cell.position),
                format_position(video.duration().as_secs_f64())
            ))
            .size(12)
        ]
        .spacing(5)
        .align_y(Vertical::Center)
    ]
    .spacing(5)
    .padding(10)
    .into()
}
