use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use anyhow::{Context, Result, anyhow, bail};
use log::{debug, warn};
use raylib::prelude::*;

/// An ffmpeg child process encoding raw RGBA frames piped to its stdin.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frame_len: usize,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("Failed to start ffmpeg (is it installed and on PATH?)")?;
        let stdin = process.stdin.take().context("Failed to open ffmpeg stdin")?;
        debug!("ffmpeg started (pid {}) writing {}", process.id(), output.display());

        Ok(Ffmpeg { process, stdin: Some(stdin), frame_len: (width * height * 4) as usize })
    }

    /// Writes one frame. Rows are sent top to bottom; render textures come out bottom to top.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_len = width * 4; // 4 bytes per pixel (RGBA)
        if row_len * height != self.frame_len {
            bail!("Frame is {}x{}, expected {} bytes", width, height, self.frame_len);
        }
        let stdin = self.stdin.as_mut().ok_or_else(|| anyhow!("ffmpeg stdin already closed"))?;

        // The image owns width * height RGBA bytes, checked against frame_len above
        let pixels =
            unsafe { std::slice::from_raw_parts(image.data() as *const u8, self.frame_len) };
        for y in (0..height).rev() {
            let row = &pixels[y * row_len..(y + 1) * row_len];
            stdin.write_all(row).context("Failed to write frame to ffmpeg")?;
        }
        Ok(())
    }

    /// Closes the pipe and waits for the encoder to exit.
    pub fn finish(mut self) -> Result<()> {
        drop(self.stdin.take());
        let status = self.process.wait().context("Failed to wait for ffmpeg")?;
        if !status.success() {
            bail!("ffmpeg exited with {}", status);
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Not finished: close stdin so ffmpeg can exit, then reap it
        if self.stdin.take().is_some() {
            if let Err(e) = self.process.wait() {
                warn!("Failed to wait for ffmpeg process: {}", e);
            }
        }
    }
}
