//! Container and text styles for the gallery window.

use iced::widget::container;
use iced::{border, Color, Shadow, Theme, Vector};

pub const TITLE_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);
pub const CAPTION_COLOR: Color = TITLE_COLOR;
pub const TITLE_SIZE: f32 = 32.0;
pub const CAPTION_SIZE: f32 = 16.0;
pub const CAPTION_PADDING: f32 = 10.0;

/// Light grey page behind the grid.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(0xf0, 0xf0, 0xf0).into()),
        text_color: Some(TITLE_COLOR),
        ..Default::default()
    }
}

/// White rounded card holding one player and its caption.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: border::rounded(8),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Black surface behind the video frame, also used for unplayable media.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::BLACK.into()),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}
