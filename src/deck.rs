use std::ops::Index;
use raylib::prelude::Color;
use crate::constants::*;
use crate::error::DeckError;
use crate::slide::{BODY, BODY_LARGE, Background, Block, IconItem, Slide};
use crate::widgets::{Axis, BarChart, Chart, Datum, Icon, IconBox, LineChart, PieChart, Row, Series};

// --- Datasets ---

// (category, accuracy %, time in minutes)
const OCR_PERFORMANCE: [(&str, f32, f32); 2] = [
    ("Before AIGC", 95.0, 2.0),
    ("After AIGC", 99.0, 1.5),
];

const AI_APPLICATIONS: [(&str, f32); 5] = [
    ("Text Generation", 30.0),
    ("Image Processing", 25.0),
    ("Data Analysis", 20.0),
    ("Speech Recognition", 15.0),
    ("Other", 10.0),
];

const FUTURE_PROJECTIONS: [(&str, f32); 5] = [
    ("2024", 100.0),
    ("2025", 150.0),
    ("2026", 225.0),
    ("2027", 340.0),
    ("2028", 510.0),
];

/// The ordered, fixed set of slides. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index of the slide with the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// The AIGC presentation.
    pub fn aigc() -> Result<Self, DeckError> {
        Self::new(vec![
            intro(),
            aigc_definition(),
            aigc_project(),
            future_improvements(),
            broader_challenges(),
            data_driven(),
            tech_product_led(),
            conclusion(),
        ])
    }
}

fn bullets(items: &[&'static str]) -> Block {
    Block::Bullets { items: items.to_vec(), size: BODY, spacing: 8.0 }
}

fn large_bullets(items: &[&'static str]) -> Block {
    Block::Bullets { items: items.to_vec(), size: BODY_LARGE, spacing: 16.0 }
}

/// Two labeled bullet lists side by side.
fn labeled_columns(
    left: (&'static str, &[&'static str]),
    right: (&'static str, &[&'static str]),
) -> Block {
    Block::Columns {
        columns: vec![
            vec![Block::Label(left.0), bullets(left.1)],
            vec![Block::Label(right.0), bullets(right.1)],
        ],
        gap: 16.0,
        centered: false,
        height: None,
    }
}

fn item(icon: Icon, color: Color) -> IconItem {
    IconItem { icon, color, caption: None }
}

fn intro() -> Slide {
    Slide::new(
        "intro",
        vec![
            Block::Title("AIGC: Revolutionizing Content Generation"),
            Block::Subtitle("Impact on Advance AI's OCR Annotation System"),
            Block::IconBoxes {
                boxes: vec![
                    IconBox { icon: Icon::Workflow, caption: "AI-Powered Workflow" },
                    IconBox { icon: Icon::TrendingUp, caption: "Improved Efficiency" },
                    IconBox { icon: Icon::Layers, caption: "Enhanced Accuracy" },
                ],
                height: 256.0,
            },
            Block::Spacer(32.0),
            Block::Paragraph { text: "Presenter: Shane Mion", size: BODY_LARGE },
        ],
    )
    .with_background(Background::Gradient { from: BLUE_500, to: PURPLE_500 })
}

fn aigc_definition() -> Slide {
    let pie = PieChart {
        slices: AI_APPLICATIONS.iter().map(|&(label, value)| Datum { label, value }).collect(),
        outer_radius: 120.0,
    };
    Slide::new(
        "aigc-definition",
        vec![
            Block::Heading("What is AIGC?"),
            Block::Columns {
                columns: vec![
                    vec![large_bullets(&[
                        "Artificial Intelligence for Content Generation",
                        "Creates, manipulates, enhances content",
                        "Applies to text, images, video, data",
                    ])],
                    vec![Block::Chart { chart: Chart::Pie(pie), height: 384.0 }],
                ],
                gap: 0.0,
                centered: true,
                height: Some(384.0),
            },
        ],
    )
}

fn aigc_project() -> Slide {
    let bars = BarChart {
        series: vec![
            Series { name: "Accuracy (%)", color: SERIES_PURPLE, axis: Axis::Left },
            Series { name: "Time (minutes)", color: SERIES_GREEN, axis: Axis::Right },
        ],
        rows: OCR_PERFORMANCE
            .iter()
            .map(|&(label, accuracy, time)| Row { label, values: vec![accuracy, time] })
            .collect(),
    };
    Slide::new(
        "aigc-project",
        vec![
            Block::Heading("AI-Assisted OCR Annotation System"),
            labeled_columns(
                (
                    "Components:",
                    &["AI pre-annotation", "Intelligent interface", "Continuous learning"],
                ),
                (
                    "Benefits:",
                    &[
                        "Reduced annotation time",
                        "Improved accuracy",
                        "Handles high volume",
                        "ABS platform integration",
                    ],
                ),
            ),
            Block::Chart { chart: Chart::Bar(bars), height: 200.0 },
        ],
    )
}

fn future_improvements() -> Slide {
    let growth = LineChart {
        series: Series { name: "Projected Growth", color: SERIES_PURPLE, axis: Axis::Left },
        points: FUTURE_PROJECTIONS.iter().map(|&(label, value)| Datum { label, value }).collect(),
    };
    Slide::new(
        "future-improvements",
        vec![
            Block::Heading("Expandability & Future"),
            labeled_columns(
                ("Current Design:", &["Modular architecture", "Adaptable to other tasks"]),
                (
                    "Future Potential:",
                    &[
                        "Integration of advanced models (e.g., GPT-4)",
                        "Specialized document handling",
                        "Multi-language support",
                    ],
                ),
            ),
            Block::Chart { chart: Chart::Line(growth), height: 200.0 },
        ],
    )
}

fn broader_challenges() -> Slide {
    Slide::new(
        "broader-challenges",
        vec![
            Block::Heading("Advance AI's Broader Challenges"),
            labeled_columns(
                (
                    "Enterprise Readiness:",
                    &["Enhanced support & service", "Improved DevOps & QA", "Reusable components"],
                ),
                (
                    "Market Expansion:",
                    &["Quick API deployment", "Regulatory adaptation", "Cross-team alignment"],
                ),
            ),
            Block::IconRow {
                items: vec![
                    IconItem {
                        icon: Icon::Code,
                        color: BLUE_500,
                        caption: Some("Enterprise Solutions"),
                    },
                    IconItem {
                        icon: Icon::Globe,
                        color: GREEN_500,
                        caption: Some("Global Expansion"),
                    },
                ],
                size: 64.0,
                separator: Some(Icon::ArrowLeftRight),
            },
        ],
    )
}

fn data_driven() -> Slide {
    Slide::new(
        "data-driven",
        vec![
            Block::Heading("Data-Driven Approach"),
            labeled_columns(
                (
                    "Data Sources:",
                    &[
                        "User interactions",
                        "Error logs",
                        "Regulatory data",
                        "Customer feedback",
                        "Transaction patterns",
                    ],
                ),
                (
                    "AIGC Applications:",
                    &[
                        "Behavior trend analysis",
                        "Regulatory impact prediction",
                        "New feature ideation",
                        "Service optimization",
                        "Fraud detection improvement",
                    ],
                ),
            ),
            Block::IconRow {
                items: vec![
                    item(Icon::Database, BLUE_500),
                    item(Icon::TrendingUp, GREEN_500),
                    item(Icon::Lightbulb, YELLOW_500),
                ],
                size: 64.0,
                separator: None,
            },
        ],
    )
}

fn tech_product_led() -> Slide {
    Slide::new(
        "tech-product-led",
        vec![
            Block::Heading("Becoming Tech & Product-Led"),
            Block::Columns {
                columns: vec![
                    vec![large_bullets(&[
                        "Focus on core \"KNOW\" aspects of eKYC",
                        "Drive product development with tech expertise",
                        "Use AIGC to anticipate client needs",
                        "Innovate proactively",
                    ])],
                    vec![Block::IconStack {
                        items: vec![
                            item(Icon::Shield, BLUE_500),
                            item(Icon::Code, GREEN_500),
                            item(Icon::Lightbulb, YELLOW_500),
                        ],
                        size: 100.0,
                    }],
                ],
                gap: 32.0,
                centered: true,
                height: None,
            },
        ],
    )
}

fn conclusion() -> Slide {
    Slide::new(
        "conclusion",
        vec![
            Block::Heading("Conclusion"),
            Block::Columns {
                columns: vec![
                    vec![large_bullets(&[
                        "AIGC transforms Advance AI processes",
                        "Focus on quality and integration",
                        "Thoughtful AI implementation",
                        "Position as leaders in digital identity",
                    ])],
                    vec![Block::Emblem {
                        lines: ["Digital Identity", "Leadership"],
                        caption: "Questions?",
                    }],
                ],
                gap: 32.0,
                centered: true,
                height: None,
            },
        ],
    )
    .with_background(Background::Gradient { from: GREEN_400, to: BLUE_500 })
}

impl Index<usize> for Deck {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};
    use crate::slide::Slide;
    use raylib::prelude::Vector2;

    #[test]
    fn test_deck_has_eight_slides_in_order() {
        let deck = Deck::aigc().unwrap();
        let keys: Vec<&str> = deck.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                "intro",
                "aigc-definition",
                "aigc-project",
                "future-improvements",
                "broader-challenges",
                "data-driven",
                "tech-product-led",
                "conclusion",
            ]
        );
        assert_eq!(deck.len(), 8);
        assert_eq!(deck[7].key, "conclusion");
        assert!(deck.get(8).is_none());
        assert_eq!(deck.position("data-driven"), Some(5));
        assert_eq!(deck.position("appendix"), None);
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn test_every_slide_renders() {
        for slide in Deck::aigc().unwrap().iter() {
            let mut canvas = RecordingCanvas::new();
            slide.draw(&mut canvas);
            assert!(!canvas.texts().is_empty(), "{} drew no text", slide.key);
        }
    }

    #[test]
    fn test_every_slide_fits_viewport() {
        let canvas = RecordingCanvas::new();
        let available = VIEWPORT_HEIGHT as f32 - 2.0 * SLIDE_PADDING;
        for slide in Deck::aigc().unwrap().iter() {
            let height = slide.content_height(&canvas);
            assert!(
                height <= available,
                "{} is {}px tall, only {}px available",
                slide.key,
                height,
                available
            );
        }
    }

    #[test]
    fn test_every_slide_stays_inside_viewport_horizontally() {
        let viewport = Slide::viewport();
        for slide in Deck::aigc().unwrap().iter() {
            let mut canvas = RecordingCanvas::new();
            slide.draw(&mut canvas);
            let right = viewport.x + viewport.width;
            for p in canvas.points() {
                assert!(p.x >= viewport.x && p.x <= right, "{} draws at x={}", slide.key, p.x);
            }
            // whole text runs, not only their origins
            for call in &canvas.calls {
                if let DrawCall::Text(text, p, size, _) = call {
                    let end = p.x + canvas.text_width(text, *size);
                    assert!(end <= right, "{}: {:?} runs to x={}", slide.key, text, end);
                }
            }
        }
    }

    #[test]
    fn test_chart_slides_carry_their_data() {
        let deck = Deck::aigc().unwrap();

        let mut canvas = RecordingCanvas::new();
        deck[1].draw(&mut canvas);
        assert_eq!(canvas.sectors().len(), 5);
        assert!(canvas.texts().contains(&"Text Generation 30%"));

        let mut canvas = RecordingCanvas::new();
        deck[2].draw(&mut canvas);
        assert!(canvas.texts().contains(&"Accuracy (%)"));
        assert!(canvas.texts().contains(&"After AIGC"));

        let mut canvas = RecordingCanvas::new();
        deck[3].draw(&mut canvas);
        assert!(canvas.texts().contains(&"2028"));
        assert!(canvas.texts().contains(&"600"));
    }

    #[test]
    fn test_chart_slides_answer_hover() {
        let deck = Deck::aigc().unwrap();

        // pie: a point just above 3 o'clock lies in the first slice
        let mut canvas = RecordingCanvas::new();
        deck[1].draw(&mut canvas);
        let (center, radius) = canvas
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Sector { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .unwrap();
        let point = Vector2::new(center.x + radius / 2.0, center.y - 4.0);
        let tooltip = deck[1].tooltip(&canvas, point).unwrap();
        assert_eq!(tooltip.lines[0].0, "Text Generation : 30");

        // bars: the first time bar belongs to "Before AIGC"
        let mut canvas = RecordingCanvas::new();
        deck[2].draw(&mut canvas);
        let bar = canvas
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Rect(r, color) if *color == SERIES_GREEN => Some(*r),
                _ => None,
            })
            .unwrap();
        let point = Vector2::new(bar.x + bar.width / 2.0, bar.y + bar.height / 2.0);
        let tooltip = deck[2].tooltip(&canvas, point).unwrap();
        assert_eq!(tooltip.title.as_deref(), Some("Before AIGC"));
        assert_eq!(tooltip.lines[1].0, "Time (minutes) : 2");

        // line: third marker is 2026
        let mut canvas = RecordingCanvas::new();
        deck[3].draw(&mut canvas);
        let markers: Vec<Vector2> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle(p, r, color) if *r == 4.0 && *color == SERIES_PURPLE => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 5);
        let tooltip = deck[3].tooltip(&canvas, markers[2]).unwrap();
        assert_eq!(tooltip.lines[0].0, "Projected Growth : 225");

        // slides without charts never show one
        let center = Vector2::new(VIEWPORT_WIDTH as f32 / 2.0, VIEWPORT_HEIGHT as f32 / 2.0);
        assert_eq!(deck[0].tooltip(&canvas, center), None);
        assert_eq!(deck[7].tooltip(&canvas, center), None);
    }

    #[test]
    fn test_gradient_slides_are_first_and_last() {
        let deck = Deck::aigc().unwrap();
        for (i, slide) in deck.iter().enumerate() {
            let gradient = matches!(slide.background, Background::Gradient { .. });
            assert_eq!(gradient, i == 0 || i == 7, "{}", slide.key);
        }
    }
}
