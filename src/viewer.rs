use anyhow::{Context, Result, anyhow};
use log::info;
use raylib::prelude::*;
use crate::canvas::RaylibCanvas;
use crate::config::ViewerConfig;
use crate::constants::*;
use crate::shell::{Presentation, ShellLayout, command_for_key};

/// Opens the window and runs the presentation until it is closed.
pub fn run(
    presentation: &mut Presentation,
    config: &ViewerConfig,
    raylib_log: TraceLogLevel,
) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("deckview")
        .log_level(raylib_log)
        .vsync()
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(config.fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }
    let font = rl.get_font_default();

    // Slides always render at viewport size, then get scaled onto the screen
    let mut framebuffer = rl
        .load_render_texture(&thread, VIEWPORT_WIDTH.try_into()?, VIEWPORT_HEIGHT.try_into()?)
        .map_err(|e| anyhow!("{}", e))
        .context("Failed to create slide render texture")?;

    info!(
        "Presenting {} slides, starting at {}",
        presentation.deck().len(),
        presentation.state().indicator()
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        // --- Input ---
        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = command_for_key(key) {
                presentation.apply(command);
            }
        }

        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let layout = ShellLayout::compute(screen_width, screen_height);
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            presentation.click(&layout, mouse);
        }

        // One begin/end pair per frame: input is polled when the frame ends
        let mut d = rl.begin_drawing(&thread);

        // --- Render the current slide into the fixed size framebuffer ---
        {
            let mut tmd = d.begin_texture_mode(&thread, &mut framebuffer);
            let mut canvas = RaylibCanvas::new(&mut tmd, &font);
            presentation.draw_slide(&mut canvas, layout.to_slide(mouse));
        }

        // --- Compose the screen ---
        let screen = Rectangle::new(0.0, 0.0, screen_width, screen_height);
        presentation.draw_backdrop(&mut RaylibCanvas::new(&mut d, &font), &layout, screen);

        // Render textures are stored upside down: flip the source rect
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            layout.viewport,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        presentation.draw_controls(&mut RaylibCanvas::new(&mut d, &font), &layout, mouse);
    }

    info!("Window closed on slide {}", presentation.state().indicator());
    Ok(())
}
