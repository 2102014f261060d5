use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DeckError {
    #[error("The deck has no slides")]
    EmptyDeck,

    #[error("Start slide {requested} is out of range (deck has {total} slides)")]
    StartOutOfRange { requested: usize, total: usize },

    #[error("No slide named '{key}'")]
    UnknownSlide { key: String },

    #[error("Slide duration must be a positive number of seconds, got {seconds}")]
    InvalidDuration { seconds: f32 },

    #[error("Window size {width}x{height} is not usable")]
    InvalidWindowSize { width: i32, height: i32 },

    #[error("Frame rate must be at least 1")]
    InvalidFrameRate,
}
