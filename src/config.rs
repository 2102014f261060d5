use std::path::PathBuf;
use clap::Parser;
use raylib::prelude::TraceLogLevel;
use crate::constants::*;
use crate::deck::Deck;
use crate::error::DeckError;

/// Presents the AIGC slide deck in a window, or renders it to a video.
#[derive(Parser, Debug)]
#[command(name = "deckview", version, about)]
pub struct Args {
    /// Slide to open on: a 1-based number or a slide key such as "data-driven"
    #[arg(long, value_name = "SLIDE", default_value = "1")]
    pub start: String,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Start in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Target frames per second (also the frame rate of exported videos)
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Render every slide into this video file through ffmpeg instead of opening the viewer
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Seconds each slide stays on screen in an exported video
    #[arg(long, value_name = "SECS", default_value_t = SLIDE_DURATION)]
    pub slide_duration: f32,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ViewerConfig {
    pub start: usize, // 0-based
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
    pub fps: u32,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ExportConfig {
    pub output: PathBuf,
    pub fps: u32,
    pub slide_duration: f32,
}

impl ExportConfig {
    /// Frames written for each slide, at least one.
    pub fn frames_per_slide(&self) -> u32 {
        ((self.slide_duration * self.fps as f32).round() as u32).max(1)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Mode {
    View(ViewerConfig),
    Export(ExportConfig),
}

impl Args {
    /// Checks the arguments against the deck they will be applied to.
    pub fn into_mode(self, deck: &Deck) -> Result<Mode, DeckError> {
        let start = resolve_start(deck, &self.start)?;
        if self.fps == 0 {
            return Err(DeckError::InvalidFrameRate);
        }

        if let Some(output) = self.export {
            if !(self.slide_duration > 0.0) || !self.slide_duration.is_finite() {
                return Err(DeckError::InvalidDuration { seconds: self.slide_duration });
            }
            return Ok(Mode::Export(ExportConfig {
                output,
                fps: self.fps,
                slide_duration: self.slide_duration,
            }));
        }

        if self.width <= 0 || self.height <= 0 {
            return Err(DeckError::InvalidWindowSize { width: self.width, height: self.height });
        }
        Ok(Mode::View(ViewerConfig {
            start,
            width: self.width,
            height: self.height,
            fullscreen: self.fullscreen,
            fps: self.fps,
        }))
    }

    /// Level handed to the raylib builder: its init chatter only shows from `-vv` on.
    pub fn raylib_log(&self) -> TraceLogLevel {
        if self.verbose >= 2 {
            TraceLogLevel::LOG_INFO
        } else {
            TraceLogLevel::LOG_ERROR
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// 0-based index of the `--start` slide.
fn resolve_start(deck: &Deck, start: &str) -> Result<usize, DeckError> {
    match start.parse::<usize>() {
        Ok(number) => number
            .checked_sub(1)
            .filter(|index| deck.get(*index).is_some())
            .ok_or(DeckError::StartOutOfRange { requested: number, total: deck.len() }),
        Err(_) => deck
            .position(start)
            .ok_or_else(|| DeckError::UnknownSlide { key: start.to_string() }),
    }
}
