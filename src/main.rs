mod app;
mod config;
mod error;
mod gesture;
mod loader;
mod message;
mod player;
mod state;
mod style;
mod ui;
mod video;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::run()
}
