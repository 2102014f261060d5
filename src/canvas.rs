use raylib::prelude::*;

/// Drawing surface shared by slides, widgets and the shell.
///
/// Angles are in degrees, clockwise from +x (screen space, y pointing down).
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rectangle, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rectangle, radius: f32, color: Color);
    fn fill_gradient(&mut self, rect: Rectangle, left: Color, right: Color);
    fn line(&mut self, from: Vector2, to: Vector2, thickness: f32, color: Color);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
    fn fill_sector(
        &mut self,
        center: Vector2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    );
    fn text(&mut self, text: &str, position: Vector2, size: i32, color: Color);
    fn text_width(&self, text: &str, size: i32) -> f32;

    fn stroke_rect(&mut self, rect: Rectangle, thickness: f32, color: Color) {
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
        self.polyline(
            &[
                Vector2::new(x0, y0),
                Vector2::new(x1, y0),
                Vector2::new(x1, y1),
                Vector2::new(x0, y1),
                Vector2::new(x0, y0),
            ],
            thickness,
            color,
        );
    }

    fn polyline(&mut self, points: &[Vector2], thickness: f32, color: Color) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], thickness, color);
        }
    }

    /// Elliptical arc approximated with line segments.
    fn arc(
        &mut self,
        center: Vector2,
        radii: Vector2,
        from: f32,
        to: f32,
        thickness: f32,
        color: Color,
    ) {
        let sweep = to - from;
        let segments = ((sweep.abs() / 360.0) * 64.0).ceil().max(4.0) as usize;
        let points: Vec<Vector2> = (0..=segments)
            .map(|i| {
                let angle = (from + sweep * i as f32 / segments as f32).to_radians();
                Vector2::new(center.x + radii.x * angle.cos(), center.y + radii.y * angle.sin())
            })
            .collect();
        self.polyline(&points, thickness, color);
    }

    fn dashed_line(&mut self, from: Vector2, to: Vector2, dash: f32, color: Color) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let length = (dx * dx + dy * dy).sqrt();
        if length <= 0.0 {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        let mut start = 0.0;
        while start < length {
            let end = (start + dash).min(length);
            self.line(
                Vector2::new(from.x + ux * start, from.y + uy * start),
                Vector2::new(from.x + ux * end, from.y + uy * end),
                1.0,
                color,
            );
            start += dash * 2.0;
        }
    }

    fn text_centered(&mut self, text: &str, center_x: f32, top: f32, size: i32, color: Color) {
        let width = self.text_width(text, size);
        self.text(text, Vector2::new(center_x - width / 2.0, top), size, color);
    }
}

const DEFAULT_FONT_SIZE: i32 = 10;

/// Canvas backed by a live raylib draw handle (screen or render texture).
/// Text is drawn and measured with raylib's default font.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    font: &'a WeakFont,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    /// `font` must be the default font (`RaylibHandle::get_font_default`).
    pub fn new(d: &'a mut D, font: &'a WeakFont) -> Self {
        Self { d, font }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.d.draw_rectangle_rec(rect, color);
    }

    fn fill_rounded_rect(&mut self, rect: Rectangle, radius: f32, color: Color) {
        // raylib expresses rounding relative to the shorter side
        let shorter = rect.width.min(rect.height);
        let roundness = if shorter > 0.0 { (2.0 * radius / shorter).min(1.0) } else { 0.0 };
        self.d.draw_rectangle_rounded(rect, roundness, 8, color);
    }

    fn fill_gradient(&mut self, rect: Rectangle, left: Color, right: Color) {
        self.d.draw_rectangle_gradient_h(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
            left,
            right,
        );
    }

    fn line(&mut self, from: Vector2, to: Vector2, thickness: f32, color: Color) {
        self.d.draw_line_ex(from, to, thickness, color);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.d.draw_circle_v(center, radius, color);
    }

    fn fill_sector(
        &mut self,
        center: Vector2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) {
        self.d.draw_circle_sector(center, radius, start_angle, end_angle, 48, color);
    }

    fn text(&mut self, text: &str, position: Vector2, size: i32, color: Color) {
        self.d.draw_text(text, position.x as i32, position.y as i32, size, color);
    }

    fn text_width(&self, text: &str, size: i32) -> f32 {
        // Same size and spacing draw_text uses for the default font
        let size = size.max(DEFAULT_FONT_SIZE);
        let spacing = (size / DEFAULT_FONT_SIZE) as f32;
        self.font.measure_text(text, size as f32, spacing).x.floor()
    }
}
