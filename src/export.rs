use std::path::Path;
use anyhow::{Context, Result, anyhow, bail};
use log::info;
use raylib::prelude::*;
use crate::canvas::RaylibCanvas;
use crate::config::ExportConfig;
use crate::constants::*;
use crate::deck::Deck;
use crate::ffmpeg::Ffmpeg;

/// Renders every slide offscreen and pipes the frames to ffmpeg.
pub fn run(deck: &Deck, config: &ExportConfig, raylib_log: TraceLogLevel) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(VIEWPORT_WIDTH / 2, VIEWPORT_HEIGHT / 2)
        .title("deckview export")
        .log_level(raylib_log)
        .msaa_4x()
        .build();
    let font = rl.get_font_default();

    let mut framebuffer = rl
        .load_render_texture(&thread, VIEWPORT_WIDTH.try_into()?, VIEWPORT_HEIGHT.try_into()?)
        .map_err(|e| anyhow!("{}", e))
        .context("Failed to create slide render texture")?;

    // Start ffmpeg process and connect pipes so we can send rendered frames
    let mut ffmpeg = Ffmpeg::spawn(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, config.fps, &config.output)?;
    let frames = config.frames_per_slide();
    info!(
        "Exporting {} slides to {} ({} frames each at {} fps)",
        deck.len(),
        config.output.display(),
        frames,
        config.fps
    );

    let mut written = 0;
    for slide in deck.iter() {
        if rl.window_should_close() {
            break;
        }

        let mut d = rl.begin_drawing(&thread);
        {
            let mut tmd = d.begin_texture_mode(&thread, &mut framebuffer);
            slide.draw(&mut RaylibCanvas::new(&mut tmd, &font));
        }

        // Grab rendered texture pixels as an Image; a static slide needs only one grab
        let image = framebuffer
            .load_image()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to read back slide {}", slide.key))?;
        for _ in 0..frames {
            ffmpeg.write(&image)?;
        }

        // Draw a preview of the framebuffer to the screen for feedback
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        written += 1;
        info!("Slide {}/{} ({}) written", written, deck.len(), slide.key);
    }

    // Dropping ffmpeg on error closes its stdin; the partial file is left behind
    check_complete(written, deck.len(), &config.output)?;

    // Close stdin pipe and wait for ffmpeg to finish
    ffmpeg.finish()?;
    info!("Wrote {}", config.output.display());
    Ok(())
}

/// Fails unless every slide made it into the video.
fn check_complete(written: usize, total: usize, output: &Path) -> Result<()> {
    if written < total {
        bail!(
            "Export interrupted after {} of {} slides, {} is incomplete",
            written,
            total,
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_export_is_an_error() {
        let output = Path::new("deck.mp4");
        assert!(check_complete(8, 8, output).is_ok());

        let err = check_complete(3, 8, output).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Export interrupted after 3 of 8 slides, deck.mp4 is incomplete"
        );
    }
}
