use raylib::prelude::*;
use crate::canvas::Canvas;
use crate::constants::*;

/// Line icons drawn on a 24x24 design grid with a stroke of 2 units.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Clock,
    TrendingUp,
    Layers,
    Workflow,
    Database,
    Lightbulb,
    Code,
    Globe,
    Shield,
    ArrowLeftRight,
}

const GRID_SIZE: f32 = 24.0;
const STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Stroke {
    Path(&'static [(f32, f32)]),
    Rect { x: f32, y: f32, w: f32, h: f32 },
    // Elliptical arc, angles in degrees clockwise from +x
    Arc { cx: f32, cy: f32, rx: f32, ry: f32, from: f32, to: f32 },
}

const fn circle(cx: f32, cy: f32, r: f32) -> Stroke {
    Stroke::Arc { cx, cy, rx: r, ry: r, from: 0.0, to: 360.0 }
}

impl Icon {
    pub fn strokes(self) -> &'static [Stroke] {
        match self {
            Icon::ChevronLeft => &[Stroke::Path(&[(15.0, 18.0), (9.0, 12.0), (15.0, 6.0)])],
            Icon::ChevronRight => &[Stroke::Path(&[(9.0, 18.0), (15.0, 12.0), (9.0, 6.0)])],
            Icon::Clock => &[
                circle(12.0, 12.0, 10.0),
                Stroke::Path(&[(12.0, 6.0), (12.0, 12.0), (16.0, 14.0)]),
            ],
            Icon::TrendingUp => &[
                Stroke::Path(&[(22.0, 7.0), (13.5, 15.5), (8.5, 10.5), (2.0, 17.0)]),
                Stroke::Path(&[(16.0, 7.0), (22.0, 7.0), (22.0, 13.0)]),
            ],
            Icon::Layers => &[
                Stroke::Path(&[(12.0, 2.0), (2.0, 7.0), (12.0, 12.0), (22.0, 7.0), (12.0, 2.0)]),
                Stroke::Path(&[(2.0, 12.0), (12.0, 17.0), (22.0, 12.0)]),
                Stroke::Path(&[(2.0, 17.0), (12.0, 22.0), (22.0, 17.0)]),
            ],
            Icon::Workflow => &[
                Stroke::Rect { x: 3.0, y: 3.0, w: 8.0, h: 8.0 },
                Stroke::Path(&[(7.0, 11.0), (7.0, 15.0), (9.0, 17.0), (13.0, 17.0)]),
                Stroke::Rect { x: 13.0, y: 13.0, w: 8.0, h: 8.0 },
            ],
            Icon::Database => &[
                Stroke::Arc { cx: 12.0, cy: 5.0, rx: 9.0, ry: 3.0, from: 0.0, to: 360.0 },
                Stroke::Path(&[(3.0, 5.0), (3.0, 19.0)]),
                Stroke::Path(&[(21.0, 5.0), (21.0, 19.0)]),
                Stroke::Arc { cx: 12.0, cy: 12.0, rx: 9.0, ry: 3.0, from: 0.0, to: 180.0 },
                Stroke::Arc { cx: 12.0, cy: 19.0, rx: 9.0, ry: 3.0, from: 0.0, to: 180.0 },
            ],
            Icon::Lightbulb => &[
                Stroke::Arc { cx: 12.0, cy: 8.0, rx: 6.0, ry: 6.0, from: 135.0, to: 405.0 },
                Stroke::Path(&[(7.76, 12.24), (9.0, 14.0), (9.0, 18.0)]),
                Stroke::Path(&[(16.24, 12.24), (15.0, 14.0), (15.0, 18.0)]),
                Stroke::Path(&[(9.0, 18.0), (15.0, 18.0)]),
                Stroke::Path(&[(10.0, 22.0), (14.0, 22.0)]),
            ],
            Icon::Code => &[
                Stroke::Path(&[(16.0, 18.0), (22.0, 12.0), (16.0, 6.0)]),
                Stroke::Path(&[(8.0, 6.0), (2.0, 12.0), (8.0, 18.0)]),
            ],
            Icon::Globe => &[
                circle(12.0, 12.0, 10.0),
                Stroke::Arc { cx: 12.0, cy: 12.0, rx: 4.5, ry: 10.0, from: 0.0, to: 360.0 },
                Stroke::Path(&[(2.0, 12.0), (22.0, 12.0)]),
            ],
            Icon::Shield => &[Stroke::Path(&[
                (20.0, 6.0),
                (20.0, 13.0),
                (18.5, 17.5),
                (12.0, 22.0),
                (5.5, 17.5),
                (4.0, 13.0),
                (4.0, 6.0),
                (5.0, 5.0),
                (8.0, 4.5),
                (12.0, 2.0),
                (16.0, 4.5),
                (19.0, 5.0),
                (20.0, 6.0),
            ])],
            Icon::ArrowLeftRight => &[
                Stroke::Path(&[(8.0, 3.0), (4.0, 7.0), (8.0, 11.0)]),
                Stroke::Path(&[(4.0, 7.0), (20.0, 7.0)]),
                Stroke::Path(&[(16.0, 21.0), (20.0, 17.0), (16.0, 13.0)]),
                Stroke::Path(&[(20.0, 17.0), (4.0, 17.0)]),
            ],
        }
    }
}

/// Draws `icon` with its top-left corner at `origin`, `size` pixels square.
pub fn draw_icon(canvas: &mut impl Canvas, icon: Icon, origin: Vector2, size: f32, color: Color) {
    let k = size / GRID_SIZE;
    let thickness = (STROKE_WIDTH * k).max(1.0);
    let at = |x: f32, y: f32| Vector2::new(origin.x + x * k, origin.y + y * k);

    for stroke in icon.strokes() {
        match *stroke {
            Stroke::Path(points) => {
                let points: Vec<Vector2> = points.iter().map(|&(x, y)| at(x, y)).collect();
                canvas.polyline(&points, thickness, color);
            }
            Stroke::Rect { x, y, w, h } => {
                let rect = Rectangle::new(origin.x + x * k, origin.y + y * k, w * k, h * k);
                canvas.stroke_rect(rect, thickness, color);
            }
            Stroke::Arc { cx, cy, rx, ry, from, to } => {
                canvas.arc(at(cx, cy), Vector2::new(rx * k, ry * k), from, to, thickness, color);
            }
        }
    }
}

/// Icon over a caption on a rounded grey panel.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct IconBox {
    pub icon: Icon,
    pub caption: &'static str,
}

pub const ICON_BOX_WIDTH: f32 = 176.0;
pub const ICON_BOX_HEIGHT: f32 = 120.0;
const ICON_BOX_ICON: f32 = 48.0;
const ICON_BOX_CAPTION: i32 = 14;

impl IconBox {
    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        canvas.fill_rounded_rect(rect, 8.0, GRAY_100);

        let content_height = ICON_BOX_ICON + 8.0 + ICON_BOX_CAPTION as f32;
        let top = rect.y + (rect.height - content_height) / 2.0;
        let center_x = rect.x + rect.width / 2.0;

        let origin = Vector2::new(center_x - ICON_BOX_ICON / 2.0, top);
        draw_icon(canvas, self.icon, origin, ICON_BOX_ICON, BLUE_500);
        let caption_top = top + ICON_BOX_ICON + 8.0;
        canvas.text_centered(self.caption, center_x, caption_top, ICON_BOX_CAPTION, INK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};

    const ALL_ICONS: [Icon; 12] = [
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Clock,
        Icon::TrendingUp,
        Icon::Layers,
        Icon::Workflow,
        Icon::Database,
        Icon::Lightbulb,
        Icon::Code,
        Icon::Globe,
        Icon::Shield,
        Icon::ArrowLeftRight,
    ];

    #[test]
    fn test_strokes_stay_on_grid() {
        for icon in ALL_ICONS {
            for stroke in icon.strokes() {
                let (x0, y0, x1, y1) = match *stroke {
                    Stroke::Path(points) => {
                        assert!(points.len() >= 2, "{:?} has a degenerate path", icon);
                        let xs = points.iter().map(|p| p.0);
                        let ys = points.iter().map(|p| p.1);
                        (
                            xs.clone().fold(f32::MAX, f32::min),
                            ys.clone().fold(f32::MAX, f32::min),
                            xs.fold(f32::MIN, f32::max),
                            ys.fold(f32::MIN, f32::max),
                        )
                    }
                    Stroke::Rect { x, y, w, h } => (x, y, x + w, y + h),
                    Stroke::Arc { cx, cy, rx, ry, .. } => (cx - rx, cy - ry, cx + rx, cy + ry),
                };
                assert!(x0 >= 0.0 && y0 >= 0.0, "{:?} leaves the grid", icon);
                assert!(x1 <= GRID_SIZE && y1 <= GRID_SIZE, "{:?} leaves the grid", icon);
            }
        }
    }

    #[test]
    fn test_draw_icon_scales_into_box() {
        for icon in ALL_ICONS {
            let mut canvas = RecordingCanvas::new();
            draw_icon(&mut canvas, icon, Vector2::new(100.0, 50.0), 64.0, BLUE_500);

            assert!(!canvas.calls.is_empty());
            for p in canvas.points() {
                assert!(p.x >= 99.9 && p.x <= 164.1, "{:?} x={} outside box", icon, p.x);
                assert!(p.y >= 49.9 && p.y <= 114.1, "{:?} y={} outside box", icon, p.y);
            }
        }
    }

    #[test]
    fn test_icon_box_draws_panel_and_caption() {
        let mut canvas = RecordingCanvas::new();
        let panel = IconBox { icon: Icon::Workflow, caption: "AI-Powered Workflow" };
        panel.draw(&mut canvas, Rectangle::new(0.0, 0.0, ICON_BOX_WIDTH, ICON_BOX_HEIGHT));

        assert!(matches!(canvas.calls[0], DrawCall::RoundedRect(_, c) if c == GRAY_100));
        assert_eq!(canvas.texts(), vec!["AI-Powered Workflow"]);
    }
}
