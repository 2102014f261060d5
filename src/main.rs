use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

mod canvas;
mod config;
mod constants;
mod deck;
mod error;
mod export;
mod ffmpeg;
mod shell;
mod slide;
mod state;
mod viewer;
mod widgets;

use crate::config::{Args, Mode};
use crate::deck::Deck;
use crate::shell::Presentation;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter())).init();

    let raylib_log = args.raylib_log();

    let deck = Deck::aigc()?;
    let mode = args.into_mode(&deck).inspect_err(|e| error!("{}", e))?;

    match mode {
        Mode::View(config) => {
            let mut presentation = Presentation::new(deck, config.start)?;
            viewer::run(&mut presentation, &config, raylib_log)?;
        }
        Mode::Export(config) => {
            export::run(&deck, &config, raylib_log)?;
        }
    }

    info!("Done");
    Ok(())
}
