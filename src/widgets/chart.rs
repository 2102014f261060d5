use raylib::prelude::*;
use crate::canvas::Canvas;
use crate::constants::*;

const LABEL_SIZE: i32 = 12;
const LEGEND_HEIGHT: f32 = 24.0;
const X_LABELS_HEIGHT: f32 = 20.0;
const Y_AXIS_WIDTH: f32 = 44.0;
const TICK_COUNT: usize = 5;
const PIE_LABEL_OFFSET: f32 = 20.0;
const TOOLTIP_SIZE: i32 = 14;
const TOOLTIP_ROW: f32 = 20.0;
const TOOLTIP_PADDING: f32 = 10.0;
const TOOLTIP_OFFSET: f32 = 12.0; // from the cursor

// Mantissas allowed for an axis step, e.g. 0.5, 25, 150
const NICE_STEPS: [f32; 10] = [1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// One labeled numeric record.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Datum {
    pub label: &'static str,
    pub value: f32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Series {
    pub name: &'static str,
    pub color: Color,
    pub axis: Axis,
}

/// A category on the x axis with one value per series.
#[derive(Debug, PartialEq, Clone)]
pub struct Row {
    pub label: &'static str,
    pub values: Vec<f32>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BarChart {
    pub series: Vec<Series>,
    pub rows: Vec<Row>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct PieChart {
    pub slices: Vec<Datum>,
    pub outer_radius: f32,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LineChart {
    pub series: Series,
    pub points: Vec<Datum>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Chart {
    Bar(BarChart),
    Pie(PieChart),
    Line(LineChart),
}

impl Chart {
    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        match self {
            Chart::Bar(chart) => chart.draw(canvas, rect),
            Chart::Pie(chart) => chart.draw(canvas, rect),
            Chart::Line(chart) => chart.draw(canvas, rect),
        }
    }

    /// Readout for the data under `point` when the chart occupies `rect`.
    pub fn tooltip(
        &self,
        canvas: &impl Canvas,
        rect: Rectangle,
        point: Vector2,
    ) -> Option<Tooltip> {
        match self {
            Chart::Bar(chart) => chart.tooltip(canvas, rect, point),
            Chart::Pie(chart) => chart.tooltip(canvas, rect, point),
            Chart::Line(chart) => chart.tooltip(canvas, rect, point),
        }
    }
}

// --- Tooltip ---

/// Hover readout: an optional heading and one coloured `"name : value"` line per entry.
#[derive(Debug, PartialEq, Clone)]
pub struct Tooltip {
    pub title: Option<String>,
    pub lines: Vec<(String, Color)>,
}

impl Tooltip {
    fn entry(name: &str, value: f32, color: Color) -> (String, Color) {
        (format!("{} : {}", name, tick_label(value)), color)
    }

    pub fn size(&self, canvas: &impl Canvas) -> Vector2 {
        let texts = self.title.iter().chain(self.lines.iter().map(|(text, _)| text));
        let width = texts.map(|text| canvas.text_width(text, TOOLTIP_SIZE)).fold(0.0, f32::max);
        let rows = self.lines.len() + usize::from(self.title.is_some());
        Vector2::new(
            width + 2.0 * TOOLTIP_PADDING,
            rows as f32 * TOOLTIP_ROW + 2.0 * TOOLTIP_PADDING,
        )
    }

    /// Box below and right of `cursor`, flipped to the other side when it would leave `bounds`.
    pub fn placement(&self, canvas: &impl Canvas, cursor: Vector2, bounds: Rectangle) -> Rectangle {
        let size = self.size(canvas);
        let mut x = cursor.x + TOOLTIP_OFFSET;
        if x + size.x > bounds.x + bounds.width {
            x = cursor.x - TOOLTIP_OFFSET - size.x;
        }
        let mut y = cursor.y + TOOLTIP_OFFSET;
        if y + size.y > bounds.y + bounds.height {
            y = cursor.y - TOOLTIP_OFFSET - size.y;
        }
        Rectangle::new(x.max(bounds.x), y.max(bounds.y), size.x, size.y)
    }

    pub fn draw(&self, canvas: &mut impl Canvas, cursor: Vector2, bounds: Rectangle) {
        let frame = self.placement(&*canvas, cursor, bounds);
        canvas.fill_rect(frame, WHITE);
        canvas.stroke_rect(frame, 1.0, GRID);

        let x = frame.x + TOOLTIP_PADDING;
        let mut y = frame.y + TOOLTIP_PADDING + (TOOLTIP_ROW - TOOLTIP_SIZE as f32) / 2.0;
        if let Some(title) = &self.title {
            canvas.text(title, Vector2::new(x, y), TOOLTIP_SIZE, INK);
            y += TOOLTIP_ROW;
        }
        for (text, color) in &self.lines {
            canvas.text(text, Vector2::new(x, y), TOOLTIP_SIZE, *color);
            y += TOOLTIP_ROW;
        }
    }
}

fn inside(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

// --- Axis helpers ---

/// Five evenly spaced ticks from zero whose last tick covers `max`.
pub fn nice_ticks(max: f32) -> Vec<f32> {
    let intervals = (TICK_COUNT - 1) as f32;
    if !(max > 0.0) || !max.is_finite() {
        return (0..TICK_COUNT).map(|i| i as f32).collect();
    }

    let raw = max / intervals;
    let exponent = raw.log10().floor() as i32;
    // Keep powers of ten exact: divide for negative exponents
    let power = 10f32.powi(exponent.abs());
    let mantissa = if exponent >= 0 { raw / power } else { raw * power };
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|&step| step >= mantissa - 1e-4)
        .unwrap_or(10.0);
    let step = if exponent >= 0 { nice * power } else { nice / power };

    (0..TICK_COUNT).map(|i| i as f32 * step).collect()
}

pub fn tick_label(value: f32) -> String {
    if (value - value.round()).abs() < 1e-4 {
        format!("{}", value.round() as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn axis_max(ticks: &[f32]) -> f32 {
    ticks.last().copied().filter(|&m| m > 0.0).unwrap_or(1.0)
}

/// Area left for bars/lines once axes, x labels and the legend are reserved.
pub fn plot_area(rect: Rectangle, right_axis: bool, legend_height: f32) -> Rectangle {
    let right = if right_axis { Y_AXIS_WIDTH } else { 16.0 };
    let top = 8.0;
    Rectangle::new(
        rect.x + Y_AXIS_WIDTH,
        rect.y + top,
        (rect.width - Y_AXIS_WIDTH - right).max(0.0),
        (rect.height - top - X_LABELS_HEIGHT - legend_height).max(0.0),
    )
}

fn value_to_y(plot: Rectangle, value: f32, max: f32) -> f32 {
    plot.y + plot.height - (value.max(0.0) / max) * plot.height
}

fn draw_grid(canvas: &mut impl Canvas, plot: Rectangle, ticks: &[f32], columns: &[f32]) {
    let max = axis_max(ticks);
    for &tick in ticks {
        let y = value_to_y(plot, tick, max);
        let (from, to) = (Vector2::new(plot.x, y), Vector2::new(plot.x + plot.width, y));
        canvas.dashed_line(from, to, 3.0, GRID);
    }
    for &x in columns {
        let (from, to) = (Vector2::new(x, plot.y), Vector2::new(x, plot.y + plot.height));
        canvas.dashed_line(from, to, 3.0, GRID);
    }
}

fn draw_y_axis(canvas: &mut impl Canvas, plot: Rectangle, ticks: &[f32], axis: Axis, color: Color) {
    let max = axis_max(ticks);
    let x = match axis {
        Axis::Left => plot.x,
        Axis::Right => plot.x + plot.width,
    };
    canvas.line(Vector2::new(x, plot.y), Vector2::new(x, plot.y + plot.height), 1.0, color);

    for &tick in ticks {
        let label = tick_label(tick);
        let y = value_to_y(plot, tick, max) - LABEL_SIZE as f32 / 2.0;
        let label_x = match axis {
            Axis::Left => x - 6.0 - canvas.text_width(&label, LABEL_SIZE),
            Axis::Right => x + 6.0,
        };
        canvas.text(&label, Vector2::new(label_x, y), LABEL_SIZE, color);
    }
}

fn draw_x_axis(canvas: &mut impl Canvas, plot: Rectangle, labels: &[(f32, &str)]) {
    let bottom = plot.y + plot.height;
    canvas.line(Vector2::new(plot.x, bottom), Vector2::new(plot.x + plot.width, bottom), 1.0, AXIS);
    for &(x, label) in labels {
        canvas.text_centered(label, x, bottom + 6.0, LABEL_SIZE, AXIS);
    }
}

const SWATCH: f32 = 10.0;
const LEGEND_GAP: f32 = 16.0;

/// Splits legend entries into centered rows no wider than `max_width`.
/// Returns the item indices of each row with the row width.
pub fn legend_rows(
    canvas: &impl Canvas,
    items: &[(&str, Color)],
    max_width: f32,
) -> Vec<(Vec<usize>, f32)> {
    let mut rows: Vec<(Vec<usize>, f32)> = Vec::new();
    for (i, (name, _)) in items.iter().enumerate() {
        let width = SWATCH + 4.0 + canvas.text_width(name, LABEL_SIZE);
        match rows.last_mut() {
            Some((row, row_width)) if *row_width + LEGEND_GAP + width <= max_width => {
                row.push(i);
                *row_width += LEGEND_GAP + width;
            }
            _ => rows.push((vec![i], width)),
        }
    }
    rows
}

pub fn legend_height(canvas: &impl Canvas, items: &[(&str, Color)], max_width: f32) -> f32 {
    legend_rows(canvas, items, max_width).len() as f32 * LEGEND_HEIGHT
}

/// Swatches with their series names, wrapped to `rect.width` and pinned to the bottom of `rect`.
pub fn draw_legend(canvas: &mut impl Canvas, items: &[(&str, Color)], rect: Rectangle) {
    let rows = legend_rows(&*canvas, items, rect.width);
    let mut top = rect.y + rect.height - rows.len() as f32 * LEGEND_HEIGHT;

    for (row, row_width) in rows {
        let mut x = rect.x + (rect.width - row_width) / 2.0;
        let y = top + (LEGEND_HEIGHT - SWATCH) / 2.0;
        for i in row {
            let (name, color) = items[i];
            canvas.fill_rect(Rectangle::new(x, y, SWATCH, SWATCH), color);
            canvas.text(name, Vector2::new(x + SWATCH + 4.0, y - 1.0), LABEL_SIZE, color);
            x += SWATCH + 4.0 + canvas.text_width(name, LABEL_SIZE) + LEGEND_GAP;
        }
        top += LEGEND_HEIGHT;
    }
}

// --- Bar chart ---

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bar {
    pub row: usize,
    pub series: usize,
    pub rect: Rectangle,
}

impl BarChart {
    fn has_right_axis(&self) -> bool {
        self.series.iter().any(|s| s.axis == Axis::Right)
    }

    pub fn ticks(&self, axis: Axis) -> Vec<f32> {
        let max = self
            .rows
            .iter()
            .flat_map(|row| row.values.iter().zip(&self.series))
            .filter(|(_, series)| series.axis == axis)
            .map(|(value, _)| *value)
            .fold(0.0, f32::max);
        nice_ticks(max)
    }

    /// Grouped bars: 10% gap on each side of a category, 4px between bars.
    pub fn bars(&self, plot: Rectangle) -> Vec<Bar> {
        const BAR_GAP: f32 = 4.0;

        if self.rows.is_empty() || self.series.is_empty() {
            return Vec::new();
        }
        let left_max = axis_max(&self.ticks(Axis::Left));
        let right_max = axis_max(&self.ticks(Axis::Right));

        let band = plot.width / self.rows.len() as f32;
        let count = self.series.len() as f32;
        let bar_width = ((band * 0.8 - BAR_GAP * (count - 1.0)) / count).max(1.0);

        let mut bars = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            let band_x = plot.x + band * r as f32 + band * 0.1;
            for (s, (series, value)) in self.series.iter().zip(&row.values).enumerate() {
                let max = match series.axis {
                    Axis::Left => left_max,
                    Axis::Right => right_max,
                };
                let top = value_to_y(plot, *value, max);
                bars.push(Bar {
                    row: r,
                    series: s,
                    rect: Rectangle::new(
                        band_x + s as f32 * (bar_width + BAR_GAP),
                        top,
                        bar_width,
                        plot.y + plot.height - top,
                    ),
                });
            }
        }
        bars
    }

    fn legend(&self) -> Vec<(&'static str, Color)> {
        self.series.iter().map(|s| (s.name, s.color)).collect()
    }

    fn plot(&self, canvas: &impl Canvas, rect: Rectangle) -> Rectangle {
        plot_area(rect, self.has_right_axis(), legend_height(canvas, &self.legend(), rect.width))
    }

    /// Hovering anywhere over a category band shows every series of that row.
    pub fn tooltip(
        &self,
        canvas: &impl Canvas,
        rect: Rectangle,
        point: Vector2,
    ) -> Option<Tooltip> {
        let plot = self.plot(canvas, rect);
        if self.rows.is_empty() || !inside(plot, point) {
            return None;
        }
        let band = plot.width / self.rows.len() as f32;
        let index = (((point.x - plot.x) / band) as usize).min(self.rows.len() - 1);
        let row = &self.rows[index];
        Some(Tooltip {
            title: Some(row.label.to_string()),
            lines: self
                .series
                .iter()
                .zip(&row.values)
                .map(|(series, value)| Tooltip::entry(series.name, *value, series.color))
                .collect(),
        })
    }

    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        let legend = self.legend();
        let plot = self.plot(&*canvas, rect);
        let band = plot.width / self.rows.len().max(1) as f32;
        let centers: Vec<f32> =
            (0..self.rows.len()).map(|i| plot.x + band * (i as f32 + 0.5)).collect();

        let left_ticks = self.ticks(Axis::Left);
        draw_grid(canvas, plot, &left_ticks, &centers);

        for bar in self.bars(plot) {
            canvas.fill_rect(bar.rect, self.series[bar.series].color);
        }

        // With two axes each one takes the colour of its series
        let axis_color = |axis: Axis| {
            if self.has_right_axis() {
                self.series.iter().find(|s| s.axis == axis).map_or(AXIS, |s| s.color)
            } else {
                AXIS
            }
        };
        draw_y_axis(canvas, plot, &left_ticks, Axis::Left, axis_color(Axis::Left));
        if self.has_right_axis() {
            let right_ticks = self.ticks(Axis::Right);
            draw_y_axis(canvas, plot, &right_ticks, Axis::Right, axis_color(Axis::Right));
        }

        let labels: Vec<(f32, &str)> =
            centers.iter().copied().zip(self.rows.iter().map(|r| r.label)).collect();
        draw_x_axis(canvas, plot, &labels);
        draw_legend(canvas, &legend, rect);
    }
}

// --- Pie chart ---

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Sector {
    pub start: f32,
    pub end: f32,
    pub percent: f32,
}

impl Sector {
    pub fn mid_angle(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

impl PieChart {
    /// Slices run counter-clockwise from 3 o'clock, so screen angles decrease.
    pub fn sectors(&self) -> Vec<Sector> {
        let total: f32 = self.slices.iter().map(|d| d.value.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut cumulative = 0.0;
        self.slices
            .iter()
            .map(|datum| {
                let percent = datum.value.max(0.0) / total;
                let sweep = percent * 360.0;
                let sector = Sector { start: -(cumulative + sweep), end: -cumulative, percent };
                cumulative += sweep;
                sector
            })
            .collect()
    }

    pub fn label(datum: &Datum, sector: &Sector) -> String {
        format!("{} {}%", datum.label, (sector.percent * 100.0).round() as i32)
    }

    fn legend(&self) -> Vec<(&'static str, Color)> {
        self.slices
            .iter()
            .enumerate()
            .map(|(i, d)| (d.label, PIE_PALETTE[i % PIE_PALETTE.len()]))
            .collect()
    }

    /// Center and radius of the pie above its legend.
    fn disc(&self, canvas: &impl Canvas, rect: Rectangle) -> (Vector2, f32) {
        let area_height = rect.height - legend_height(canvas, &self.legend(), rect.width);
        let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + area_height / 2.0);
        let radius = self
            .outer_radius
            .min(area_height / 2.0 - PIE_LABEL_OFFSET)
            .max(0.0);
        (center, radius)
    }

    /// Index of the slice under `point`, if any.
    pub fn slice_at(&self, canvas: &impl Canvas, rect: Rectangle, point: Vector2) -> Option<usize> {
        let (center, radius) = self.disc(canvas, rect);
        let (dx, dy) = (point.x - center.x, point.y - center.y);
        if dx * dx + dy * dy > radius * radius {
            return None;
        }
        // Sector angles lie in [-360, 0]
        let angle = dy.atan2(dx).to_degrees();
        let angle = if angle > 0.0 { angle - 360.0 } else { angle };
        self.sectors()
            .iter()
            .position(|sector| angle >= sector.start && angle <= sector.end)
    }

    pub fn tooltip(
        &self,
        canvas: &impl Canvas,
        rect: Rectangle,
        point: Vector2,
    ) -> Option<Tooltip> {
        let index = self.slice_at(canvas, rect, point)?;
        let datum = &self.slices[index];
        let color = PIE_PALETTE[index % PIE_PALETTE.len()];
        Some(Tooltip { title: None, lines: vec![Tooltip::entry(datum.label, datum.value, color)] })
    }

    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        let legend = self.legend();
        let (center, radius) = self.disc(&*canvas, rect);

        let sectors = self.sectors();
        for (i, (datum, sector)) in self.slices.iter().zip(&sectors).enumerate() {
            let color = PIE_PALETTE[i % PIE_PALETTE.len()];
            canvas.fill_sector(center, radius, sector.start, sector.end, color);

            let angle = sector.mid_angle().to_radians();
            let anchor = Vector2::new(
                center.x + (radius + PIE_LABEL_OFFSET) * angle.cos(),
                center.y + (radius + PIE_LABEL_OFFSET) * angle.sin(),
            );
            let text = Self::label(datum, sector);
            let x = if angle.cos() >= 0.0 {
                anchor.x
            } else {
                anchor.x - canvas.text_width(&text, LABEL_SIZE)
            };
            let position = Vector2::new(x, anchor.y - LABEL_SIZE as f32 / 2.0);
            canvas.text(&text, position, LABEL_SIZE, color);
        }

        draw_legend(canvas, &legend, rect);
    }
}

// --- Line chart ---

impl LineChart {
    pub fn ticks(&self) -> Vec<f32> {
        nice_ticks(self.points.iter().map(|d| d.value).fold(0.0, f32::max))
    }

    /// Point scale: first label on the left edge, last on the right edge.
    pub fn positions(&self, plot: Rectangle) -> Vec<Vector2> {
        let max = axis_max(&self.ticks());
        let n = self.points.len();
        self.points
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let x = if n > 1 {
                    plot.x + plot.width * i as f32 / (n - 1) as f32
                } else {
                    plot.x + plot.width / 2.0
                };
                Vector2::new(x, value_to_y(plot, d.value, max))
            })
            .collect()
    }

    fn plot(&self, canvas: &impl Canvas, rect: Rectangle) -> Rectangle {
        let legend = [(self.series.name, self.series.color)];
        plot_area(rect, false, legend_height(canvas, &legend, rect.width))
    }

    /// Hovering over the plot shows the point closest to the cursor horizontally.
    pub fn tooltip(
        &self,
        canvas: &impl Canvas,
        rect: Rectangle,
        point: Vector2,
    ) -> Option<Tooltip> {
        let plot = self.plot(canvas, rect);
        if !inside(plot, point) {
            return None;
        }
        let positions = self.positions(plot);
        let (index, _) = positions
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.x - point.x).abs().total_cmp(&(b.x - point.x).abs()))?;
        let datum = &self.points[index];
        Some(Tooltip {
            title: Some(datum.label.to_string()),
            lines: vec![Tooltip::entry(self.series.name, datum.value, self.series.color)],
        })
    }

    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rectangle) {
        let legend = [(self.series.name, self.series.color)];
        let plot = self.plot(&*canvas, rect);
        let ticks = self.ticks();
        let positions = self.positions(plot);
        let columns: Vec<f32> = positions.iter().map(|p| p.x).collect();

        draw_grid(canvas, plot, &ticks, &columns);
        draw_y_axis(canvas, plot, &ticks, Axis::Left, AXIS);

        let labels: Vec<(f32, &str)> =
            columns.iter().copied().zip(self.points.iter().map(|d| d.label)).collect();
        draw_x_axis(canvas, plot, &labels);

        canvas.polyline(&positions, 2.0, self.series.color);
        for &p in &positions {
            canvas.fill_circle(p, 4.0, self.series.color);
            canvas.fill_circle(p, 2.0, WHITE);
        }

        draw_legend(canvas, &legend, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};

    fn applications() -> PieChart {
        PieChart {
            slices: vec![
                Datum { label: "Text Generation", value: 30.0 },
                Datum { label: "Image Processing", value: 25.0 },
                Datum { label: "Data Analysis", value: 20.0 },
                Datum { label: "Speech Recognition", value: 15.0 },
                Datum { label: "Other", value: 10.0 },
            ],
            outer_radius: 120.0,
        }
    }

    fn ocr() -> BarChart {
        BarChart {
            series: vec![
                Series { name: "Accuracy (%)", color: SERIES_PURPLE, axis: Axis::Left },
                Series { name: "Time (minutes)", color: SERIES_GREEN, axis: Axis::Right },
            ],
            rows: vec![
                Row { label: "Before AIGC", values: vec![95.0, 2.0] },
                Row { label: "After AIGC", values: vec![99.0, 1.5] },
            ],
        }
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(99.0), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(nice_ticks(2.0), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(nice_ticks(510.0), vec![0.0, 150.0, 300.0, 450.0, 600.0]);
        assert_eq!(nice_ticks(0.0), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_nice_ticks_cover_max() {
        for max in [0.3, 1.0, 7.0, 13.0, 42.0, 99.9, 100.0, 1234.0] {
            let ticks = nice_ticks(max);
            assert_eq!(ticks.len(), TICK_COUNT);
            assert!(*ticks.last().unwrap() >= max, "ticks {:?} do not cover {}", ticks, max);
        }
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(25.0), "25");
        assert_eq!(tick_label(1.5), "1.5");
        assert_eq!(tick_label(0.0), "0");
    }

    #[test]
    fn test_pie_sectors_cover_full_circle() {
        let sectors = applications().sectors();
        let sweep: f32 = sectors.iter().map(|s| (s.end - s.start).abs()).sum();
        assert!((sweep - 360.0).abs() < 1e-3);

        // contiguous, starting at 3 o'clock
        assert_eq!(sectors[0].end, 0.0);
        for pair in sectors.windows(2) {
            assert!((pair[0].start - pair[1].end).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pie_labels() {
        let chart = applications();
        let labels: Vec<String> = chart
            .slices
            .iter()
            .zip(chart.sectors())
            .map(|(d, s)| PieChart::label(d, &s))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Text Generation 30%",
                "Image Processing 25%",
                "Data Analysis 20%",
                "Speech Recognition 15%",
                "Other 10%",
            ]
        );
    }

    #[test]
    fn test_empty_pie_draws_nothing_but_legend() {
        let chart = PieChart { slices: vec![], outer_radius: 100.0 };
        assert!(chart.sectors().is_empty());

        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, Rectangle::new(0.0, 0.0, 400.0, 300.0));
        assert!(canvas.sectors().is_empty());
    }

    #[test]
    fn test_bars_use_their_own_axis() {
        let chart = ocr();
        assert_eq!(chart.ticks(Axis::Left), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(chart.ticks(Axis::Right), vec![0.0, 0.5, 1.0, 1.5, 2.0]);

        let plot = Rectangle::new(0.0, 0.0, 800.0, 100.0);
        let bars = chart.bars(plot);
        assert_eq!(bars.len(), 4);

        // "Before AIGC" time is 2 on a 0..2 axis: full height
        let time_before = bars.iter().find(|b| b.row == 0 && b.series == 1).unwrap();
        assert!((time_before.rect.height - 100.0).abs() < 1e-3);

        // accuracy 95 on a 0..100 axis
        let accuracy_before = bars.iter().find(|b| b.row == 0 && b.series == 0).unwrap();
        assert!((accuracy_before.rect.height - 95.0).abs() < 1e-3);

        // bars stay inside their category band
        for bar in &bars {
            let band_start = 400.0 * bar.row as f32;
            assert!(bar.rect.x >= band_start && bar.rect.x + bar.rect.width <= band_start + 400.0);
        }
    }

    #[test]
    fn test_legend_wraps_to_width() {
        let canvas = RecordingCanvas::new();
        let items = [("aaaa", WHITE), ("bbbb", WHITE), ("cccc", WHITE)];
        // each entry: 10 swatch + 4 + 4 * 7.2 = 42.8
        let rows = legend_rows(&canvas, &items, 110.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, vec![0, 1]);
        assert_eq!(rows[1].0, vec![2]);
        assert_eq!(legend_height(&canvas, &items, 1000.0), LEGEND_HEIGHT);
    }

    #[test]
    fn test_line_positions_span_plot() {
        let chart = LineChart {
            series: Series { name: "Projected Growth", color: SERIES_PURPLE, axis: Axis::Left },
            points: vec![
                Datum { label: "2024", value: 100.0 },
                Datum { label: "2025", value: 150.0 },
                Datum { label: "2028", value: 510.0 },
            ],
        };
        let plot = Rectangle::new(10.0, 0.0, 200.0, 600.0);
        let positions = chart.positions(plot);

        assert_eq!(positions[0].x, 10.0);
        assert_eq!(positions[2].x, 210.0);
        // axis tops out at 600, so 510 sits 90px under the top
        assert!((positions[2].y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_charts_draw_labels() {
        let mut canvas = RecordingCanvas::new();
        Chart::Bar(ocr()).draw(&mut canvas, Rectangle::new(0.0, 0.0, 960.0, 200.0));
        let texts = canvas.texts();
        assert!(texts.contains(&"Before AIGC"));
        assert!(texts.contains(&"Time (minutes)"));
        assert!(texts.contains(&"1.5"));

        let mut canvas = RecordingCanvas::new();
        Chart::Pie(applications()).draw(&mut canvas, Rectangle::new(0.0, 0.0, 480.0, 384.0));
        assert_eq!(canvas.sectors().len(), 5);
        assert!(canvas.texts().contains(&"Other 10%"));
    }

    #[test]
    fn test_bar_tooltip_shows_whole_category() {
        let canvas = RecordingCanvas::new();
        let chart = ocr();
        let rect = Rectangle::new(0.0, 0.0, 960.0, 200.0);
        let plot = chart.plot(&canvas, rect);

        // right half of the plot is the "After AIGC" band
        let point = Vector2::new(plot.x + plot.width * 0.75, plot.y + plot.height / 2.0);
        let tooltip = chart.tooltip(&canvas, rect, point).unwrap();
        assert_eq!(tooltip.title.as_deref(), Some("After AIGC"));
        assert_eq!(
            tooltip.lines,
            vec![
                ("Accuracy (%) : 99".to_string(), SERIES_PURPLE),
                ("Time (minutes) : 1.5".to_string(), SERIES_GREEN),
            ]
        );

        // over the axis labels, not the plot
        assert_eq!(chart.tooltip(&canvas, rect, Vector2::new(plot.x - 10.0, point.y)), None);
    }

    #[test]
    fn test_pie_hit_testing_follows_sectors() {
        let chart = applications();
        let rect = Rectangle::new(0.0, 0.0, 480.0, 384.0);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, rect);
        let Some(DrawCall::Sector { center, radius, .. }) =
            canvas.calls.iter().find(|c| matches!(c, DrawCall::Sector { .. })).cloned()
        else {
            panic!("pie drew no sectors");
        };

        let at = |degrees: f32, distance: f32| {
            let angle = degrees.to_radians();
            Vector2::new(center.x + distance * angle.cos(), center.y + distance * angle.sin())
        };
        let r = radius / 2.0;
        // first slice starts at 3 o'clock and runs counter-clockwise (upwards on screen)
        assert_eq!(chart.slice_at(&canvas, rect, at(-5.0, r)), Some(0));
        assert_eq!(chart.slice_at(&canvas, rect, at(-90.0, r)), Some(0));
        assert_eq!(chart.slice_at(&canvas, rect, at(180.0, r)), Some(1));
        // just below 3 o'clock is the end of the last slice
        assert_eq!(chart.slice_at(&canvas, rect, at(5.0, r)), Some(4));
        assert_eq!(chart.slice_at(&canvas, rect, at(-5.0, radius + 4.0)), None);

        let tooltip = chart.tooltip(&canvas, rect, at(180.0, r)).unwrap();
        assert_eq!(tooltip.title, None);
        assert_eq!(tooltip.lines, vec![("Image Processing : 25".to_string(), PIE_PALETTE[1])]);
    }

    #[test]
    fn test_line_tooltip_picks_nearest_point() {
        let chart = LineChart {
            series: Series { name: "Projected Growth", color: SERIES_PURPLE, axis: Axis::Left },
            points: vec![
                Datum { label: "2024", value: 100.0 },
                Datum { label: "2025", value: 150.0 },
                Datum { label: "2026", value: 225.0 },
            ],
        };
        let canvas = RecordingCanvas::new();
        let rect = Rectangle::new(0.0, 0.0, 400.0, 200.0);
        let plot = chart.plot(&canvas, rect);
        let positions = chart.positions(plot);

        let point = Vector2::new(positions[1].x + 5.0, plot.y + 10.0);
        let tooltip = chart.tooltip(&canvas, rect, point).unwrap();
        assert_eq!(tooltip.title.as_deref(), Some("2025"));
        assert_eq!(tooltip.lines, vec![("Projected Growth : 150".to_string(), SERIES_PURPLE)]);

        let below = Vector2::new(positions[1].x, plot.y + plot.height + 5.0);
        assert_eq!(chart.tooltip(&canvas, rect, below), None);
    }

    #[test]
    fn test_tooltip_stays_inside_bounds() {
        let canvas = RecordingCanvas::new();
        let tooltip = Tooltip {
            title: Some("After AIGC".to_string()),
            lines: vec![("Time (minutes) : 1.5".to_string(), SERIES_GREEN)],
        };
        let bounds = Rectangle::new(0.0, 0.0, 1024.0, 576.0);

        let frame = tooltip.placement(&canvas, Vector2::new(100.0, 100.0), bounds);
        assert_eq!((frame.x, frame.y), (100.0 + TOOLTIP_OFFSET, 100.0 + TOOLTIP_OFFSET));

        // near the bottom right corner it flips to the cursor's top left
        let cursor = Vector2::new(1020.0, 570.0);
        let frame = tooltip.placement(&canvas, cursor, bounds);
        assert!(frame.x + frame.width <= cursor.x && frame.y + frame.height <= cursor.y);
        assert!(frame.x >= 0.0 && frame.y >= 0.0);

        let mut canvas = RecordingCanvas::new();
        tooltip.draw(&mut canvas, cursor, bounds);
        assert!(matches!(canvas.calls[0], DrawCall::Rect(r, c) if r == frame && c == WHITE));
        assert_eq!(canvas.texts(), vec!["After AIGC", "Time (minutes) : 1.5"]);
    }
}
