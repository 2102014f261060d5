use raylib::prelude::*;
use crate::canvas::Canvas;
use crate::constants::*;
use crate::widgets::icon::{ICON_BOX_HEIGHT, ICON_BOX_WIDTH};
use crate::widgets::{Chart, Icon, IconBox, Tooltip, draw_icon};

// Text sizes
pub const TITLE_SIZE: i32 = 36;
pub const HEADING_SIZE: i32 = 30;
pub const SUBTITLE_SIZE: i32 = 24;
pub const BODY_LARGE: i32 = 20;
pub const BODY: i32 = 18;
const CAPTION_SIZE: i32 = 16;

const BULLET_INDENT: f32 = 16.0;
const ICON_GAP: f32 = 32.0;

pub fn line_height(size: i32) -> f32 {
    (size as f32 * 1.4).round()
}

/// Greedy word wrap. A single word wider than `width` keeps its own line.
pub fn wrap_text(canvas: &impl Canvas, text: &str, size: i32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if canvas.text_width(&candidate, size) <= width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Background {
    Plain(Color),
    Gradient { from: Color, to: Color }, // left to right
}

impl Background {
    /// Text colour readable on this background.
    pub fn ink(&self) -> Color {
        match self {
            Background::Plain(_) => INK,
            Background::Gradient { .. } => WHITE,
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        match *self {
            Background::Plain(color) => canvas.fill_rect(rect, color),
            Background::Gradient { from, to } => canvas.fill_gradient(rect, from, to),
        }
    }
}

/// An icon with an optional caption and its own tint.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct IconItem {
    pub icon: Icon,
    pub color: Color,
    pub caption: Option<&'static str>,
}

/// One piece of slide content. Blocks stack top to bottom.
#[derive(Debug, PartialEq, Clone)]
pub enum Block {
    Title(&'static str),
    Subtitle(&'static str),
    Heading(&'static str),
    Label(&'static str), // column header, e.g. "Benefits:"
    Paragraph { text: &'static str, size: i32 },
    Bullets { items: Vec<&'static str>, size: i32, spacing: f32 },
    Columns { columns: Vec<Vec<Block>>, gap: f32, centered: bool, height: Option<f32> },
    Chart { chart: Chart, height: f32 },
    IconBoxes { boxes: Vec<IconBox>, height: f32 },
    IconRow { items: Vec<IconItem>, size: f32, separator: Option<Icon> },
    IconStack { items: Vec<IconItem>, size: f32 },
    Emblem { lines: [&'static str; 2], caption: &'static str },
    Spacer(f32),
}

impl Block {
    fn text_style(&self) -> Option<(&'static str, i32, f32)> {
        match *self {
            Block::Title(text) => Some((text, TITLE_SIZE, 16.0)),
            Block::Subtitle(text) => Some((text, SUBTITLE_SIZE, 32.0)),
            Block::Heading(text) => Some((text, HEADING_SIZE, 32.0)),
            Block::Label(text) => Some((text, SUBTITLE_SIZE, 16.0)),
            Block::Paragraph { text, size } => Some((text, size, 0.0)),
            _ => None,
        }
    }

    /// Height taken by the block at `width`, margins included.
    pub fn height(&self, canvas: &impl Canvas, width: f32) -> f32 {
        if let Some((text, size, margin)) = self.text_style() {
            let lines = wrap_text(canvas, text, size, width).len().max(1);
            return lines as f32 * line_height(size) + margin;
        }

        match self {
            Block::Bullets { items, size, spacing } => {
                let lines: usize = items
                    .iter()
                    .map(|item| wrap_text(canvas, item, *size, width - BULLET_INDENT).len().max(1))
                    .sum();
                lines as f32 * line_height(*size) + spacing * items.len().saturating_sub(1) as f32
            }
            Block::Columns { columns, gap, height, .. } => {
                let column_width = Self::column_width(width, columns.len(), *gap);
                let tallest = columns
                    .iter()
                    .map(|column| stack_height(canvas, column, column_width))
                    .fold(0.0, f32::max);
                height.unwrap_or(tallest) + 32.0
            }
            Block::Chart { height, .. } => *height,
            Block::IconBoxes { height, .. } => *height,
            Block::IconRow { items, size, .. } => {
                let captioned = items.iter().any(|item| item.caption.is_some());
                size + if captioned { 8.0 + line_height(CAPTION_SIZE) } else { 0.0 }
            }
            Block::IconStack { items, size } => {
                items.len() as f32 * size + 16.0 * items.len().saturating_sub(1) as f32
            }
            Block::Emblem { .. } => 200.0 + 16.0 + line_height(SUBTITLE_SIZE),
            Block::Spacer(height) => *height,
            _ => 0.0,
        }
    }

    fn column_width(width: f32, count: usize, gap: f32) -> f32 {
        let count = count.max(1) as f32;
        (width - gap * (count - 1.0)) / count
    }

    /// Where each column of a `Columns` block lands inside `rect`.
    fn column_areas(&self, canvas: &impl Canvas, rect: Rectangle) -> Vec<Rectangle> {
        let Block::Columns { columns, gap, centered, height } = self else {
            return Vec::new();
        };
        let column_width = Self::column_width(rect.width, columns.len(), *gap);
        let heights: Vec<f32> = columns
            .iter()
            .map(|column| stack_height(canvas, column, column_width))
            .collect();
        let row_height = height.unwrap_or_else(|| heights.iter().copied().fold(0.0, f32::max));

        heights
            .iter()
            .enumerate()
            .map(|(i, column_height)| {
                let offset = if *centered {
                    (row_height - column_height).max(0.0) / 2.0
                } else {
                    0.0
                };
                Rectangle::new(
                    rect.x + i as f32 * (column_width + gap),
                    rect.y + offset,
                    column_width,
                    row_height - offset,
                )
            })
            .collect()
    }

    /// Tooltip of the chart under `point`, looking through nested columns.
    pub fn tooltip(
        &self,
        canvas: &impl Canvas,
        rect: Rectangle,
        point: Vector2,
    ) -> Option<Tooltip> {
        match self {
            Block::Chart { chart, height } => {
                chart.tooltip(canvas, Rectangle::new(rect.x, rect.y, rect.width, *height), point)
            }
            Block::Columns { columns, .. } => columns
                .iter()
                .zip(self.column_areas(canvas, rect))
                .find_map(|(column, area)| stack_tooltip(canvas, column, area, point)),
            _ => None,
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle, ink: Color) {
        if let Some((text, size, _)) = self.text_style() {
            let mut y = rect.y;
            for line in wrap_text(&*canvas, text, size, rect.width) {
                canvas.text(&line, Vector2::new(rect.x, y), size, ink);
                y += line_height(size);
            }
            return;
        }

        match self {
            Block::Bullets { items, size, spacing } => {
                let mut y = rect.y;
                for item in items {
                    let dot = Vector2::new(rect.x + 4.0, y + line_height(*size) / 2.0);
                    canvas.fill_circle(dot, 3.0, ink);
                    for line in wrap_text(&*canvas, item, *size, rect.width - BULLET_INDENT) {
                        let top = y + (line_height(*size) - *size as f32) / 2.0;
                        canvas.text(&line, Vector2::new(rect.x + BULLET_INDENT, top), *size, ink);
                        y += line_height(*size);
                    }
                    y += spacing;
                }
            }
            Block::Columns { columns, .. } => {
                for (column, area) in columns.iter().zip(self.column_areas(&*canvas, rect)) {
                    draw_stack(canvas, column, area, ink);
                }
            }
            Block::Chart { chart, height } => {
                chart.draw(canvas, Rectangle::new(rect.x, rect.y, rect.width, *height));
            }
            Block::IconBoxes { boxes, height } => {
                let count = boxes.len() as f32;
                let total = count * ICON_BOX_WIDTH + (count - 1.0).max(0.0) * ICON_GAP;
                let mut x = rect.x + (rect.width - total) / 2.0;
                let y = rect.y + (height - ICON_BOX_HEIGHT) / 2.0;
                for icon_box in boxes {
                    icon_box.draw(canvas, Rectangle::new(x, y, ICON_BOX_WIDTH, ICON_BOX_HEIGHT));
                    x += ICON_BOX_WIDTH + ICON_GAP;
                }
            }
            Block::IconRow { items, size, separator } => {
                draw_icon_row(canvas, items, *size, *separator, rect, ink);
            }
            Block::IconStack { items, size } => {
                let center_x = rect.x + rect.width / 2.0;
                let mut y = rect.y;
                for item in items {
                    let origin = Vector2::new(center_x - size / 2.0, y);
                    draw_icon(canvas, item.icon, origin, *size, item.color);
                    y += size + 16.0;
                }
            }
            Block::Emblem { lines, caption } => {
                draw_emblem(canvas, lines, caption, rect, ink);
            }
            _ => {}
        }
    }
}

fn item_width(canvas: &impl Canvas, item: &IconItem, size: f32) -> f32 {
    item.caption
        .map(|caption| canvas.text_width(caption, CAPTION_SIZE))
        .unwrap_or(0.0)
        .max(size)
}

fn draw_icon_row(
    canvas: &mut impl Canvas,
    items: &[IconItem],
    size: f32,
    separator: Option<Icon>,
    rect: Rectangle,
    ink: Color,
) {
    let separator_size = size * 0.5;
    let widths: Vec<f32> = items.iter().map(|item| item_width(&*canvas, item, size)).collect();
    let gaps = items.len().saturating_sub(1) as f32;
    let separators = if separator.is_some() { gaps * (separator_size + ICON_GAP) } else { 0.0 };
    let total = widths.iter().sum::<f32>() + gaps * ICON_GAP + separators;

    let mut x = rect.x + (rect.width - total) / 2.0;
    for (i, (item, width)) in items.iter().zip(&widths).enumerate() {
        if i > 0 {
            if let Some(icon) = separator {
                let top = rect.y + (size - separator_size) / 2.0;
                draw_icon(canvas, icon, Vector2::new(x, top), separator_size, ink);
                x += separator_size + ICON_GAP;
            }
        }

        let center_x = x + width / 2.0;
        draw_icon(canvas, item.icon, Vector2::new(center_x - size / 2.0, rect.y), size, item.color);
        if let Some(caption) = item.caption {
            canvas.text_centered(caption, center_x, rect.y + size + 8.0, CAPTION_SIZE, ink);
        }
        x += width + ICON_GAP;
    }
}

/// Ring with four inward ticks and a two-line label, plus a caption below.
fn draw_emblem(
    canvas: &mut impl Canvas,
    lines: &[&str; 2],
    caption: &str,
    rect: Rectangle,
    ink: Color,
) {
    const BOX: f32 = 200.0;
    const RADIUS: f32 = 90.0;
    const THICKNESS: f32 = 4.0;

    let origin = Vector2::new(rect.x + (rect.width - BOX) / 2.0, rect.y);
    let at = |x: f32, y: f32| Vector2::new(origin.x + x, origin.y + y);

    canvas.arc(at(100.0, 100.0), Vector2::new(RADIUS, RADIUS), 0.0, 360.0, THICKNESS, ink);
    let ticks = [
        ((100.0, 40.0), (100.0, 70.0)),
        ((40.0, 100.0), (70.0, 100.0)),
        ((100.0, 160.0), (100.0, 130.0)),
        ((160.0, 100.0), (130.0, 100.0)),
    ];
    for (from, to) in ticks {
        canvas.line(at(from.0, from.1), at(to.0, to.1), THICKNESS, ink);
    }

    let center_x = origin.x + BOX / 2.0;
    canvas.text_centered(lines[0], center_x, origin.y + 78.0, CAPTION_SIZE, ink);
    canvas.text_centered(lines[1], center_x, origin.y + 98.0, CAPTION_SIZE, ink);
    canvas.text_centered(caption, center_x, origin.y + BOX + 16.0, SUBTITLE_SIZE, ink);
}

pub fn stack_height(canvas: &impl Canvas, blocks: &[Block], width: f32) -> f32 {
    blocks.iter().map(|block| block.height(canvas, width)).sum()
}

/// Area of each block when stacked from the top of `rect`.
fn stack_areas(canvas: &impl Canvas, blocks: &[Block], rect: Rectangle) -> Vec<Rectangle> {
    let mut y = rect.y;
    blocks
        .iter()
        .map(|block| {
            let height = block.height(canvas, rect.width);
            let area = Rectangle::new(rect.x, y, rect.width, height);
            y += height;
            area
        })
        .collect()
}

pub fn draw_stack(canvas: &mut impl Canvas, blocks: &[Block], rect: Rectangle, ink: Color) {
    for (block, area) in blocks.iter().zip(stack_areas(&*canvas, blocks, rect)) {
        block.draw(canvas, area, ink);
    }
}

fn stack_tooltip(
    canvas: &impl Canvas,
    blocks: &[Block],
    rect: Rectangle,
    point: Vector2,
) -> Option<Tooltip> {
    blocks
        .iter()
        .zip(stack_areas(canvas, blocks, rect))
        .find_map(|(block, area)| block.tooltip(canvas, area, point))
}

/// One static screen of the deck.
#[derive(Debug, PartialEq, Clone)]
pub struct Slide {
    pub key: &'static str,
    pub background: Background,
    pub blocks: Vec<Block>,
}

impl Slide {
    pub fn new(key: &'static str, blocks: Vec<Block>) -> Self {
        Self { key, background: Background::Plain(WHITE), blocks }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn viewport() -> Rectangle {
        Rectangle::new(0.0, 0.0, VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32)
    }

    fn content_area() -> Rectangle {
        Rectangle::new(
            SLIDE_PADDING,
            SLIDE_PADDING,
            VIEWPORT_WIDTH as f32 - 2.0 * SLIDE_PADDING,
            VIEWPORT_HEIGHT as f32 - 2.0 * SLIDE_PADDING,
        )
    }

    /// Height of the stacked content inside the padded viewport.
    #[cfg(test)]
    pub fn content_height(&self, canvas: &impl Canvas) -> f32 {
        stack_height(canvas, &self.blocks, Self::content_area().width)
    }

    /// Draws the slide into a viewport-sized target with its origin at (0, 0).
    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.background.draw(canvas, Self::viewport());
        draw_stack(canvas, &self.blocks, Self::content_area(), self.background.ink());
    }

    /// Readout for the chart data under `point` (slide coordinates).
    pub fn tooltip(&self, canvas: &impl Canvas, point: Vector2) -> Option<Tooltip> {
        stack_tooltip(canvas, &self.blocks, Self::content_area(), point)
    }

    /// Draws the tooltip for `point` on top of an already drawn slide.
    pub fn draw_tooltip(&self, canvas: &mut impl Canvas, point: Vector2) {
        if let Some(tooltip) = self.tooltip(&*canvas, point) {
            tooltip.draw(canvas, point, Self::viewport());
        }
    }
}
