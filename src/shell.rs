use log::debug;
use raylib::prelude::*;
use crate::canvas::Canvas;
use crate::constants::*;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::slide::Slide;
use crate::state::{Command, NavigationState};
use crate::widgets::{Icon, draw_icon};

const CONTROL_SPACING: f32 = 16.0; // between buttons and the counter
const CHEVRON_SIZE: f32 = 24.0;

/// Where the viewport and the control bar sit for a given window size.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ShellLayout {
    pub viewport: Rectangle,
    pub scale: f32,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub indicator: Vector2, // center of the counter text
}

impl ShellLayout {
    /// Viewport and controls centered as one column. The viewport keeps its
    /// aspect ratio and only shrinks when the window is too small.
    pub fn compute(screen_width: f32, screen_height: f32) -> Self {
        let available_width = screen_width - 2.0 * SCREEN_MARGIN;
        let available_height = screen_height - 2.0 * SCREEN_MARGIN - CONTROL_GAP - BUTTON_HEIGHT;
        let scale = (available_width / VIEWPORT_WIDTH as f32)
            .min(available_height / VIEWPORT_HEIGHT as f32)
            .min(1.0)
            .max(0.1);

        let width = VIEWPORT_WIDTH as f32 * scale;
        let height = VIEWPORT_HEIGHT as f32 * scale;
        let column_height = height + CONTROL_GAP + BUTTON_HEIGHT;
        let top = ((screen_height - column_height) / 2.0).max(0.0);
        let center_x = screen_width / 2.0;

        let viewport = Rectangle::new(center_x - width / 2.0, top, width, height);

        let bar_y = top + height + CONTROL_GAP;
        let bar_width = 2.0 * BUTTON_WIDTH + INDICATOR_WIDTH + 2.0 * CONTROL_SPACING;
        let bar_x = center_x - bar_width / 2.0;

        Self {
            viewport,
            scale,
            previous: Rectangle::new(bar_x, bar_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            next: Rectangle::new(
                bar_x + bar_width - BUTTON_WIDTH,
                bar_y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            indicator: Vector2::new(center_x, bar_y + BUTTON_HEIGHT / 2.0),
        }
    }

    /// Maps a screen point into slide coordinates, `None` outside the viewport.
    pub fn to_slide(&self, point: Vector2) -> Option<Vector2> {
        if !contains(self.viewport, point) {
            return None;
        }
        Some(Vector2::new(
            (point.x - self.viewport.x) / self.scale,
            (point.y - self.viewport.y) / self.scale,
        ))
    }
}

pub fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE | KeyboardKey::KEY_PAGE_DOWN => {
            Some(Command::Next)
        }
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_BACKSPACE | KeyboardKey::KEY_PAGE_UP => {
            Some(Command::Previous)
        }
        KeyboardKey::KEY_HOME => Some(Command::First),
        KeyboardKey::KEY_END => Some(Command::Last),
        KeyboardKey::KEY_ONE => Some(Command::GoTo(0)),
        KeyboardKey::KEY_TWO => Some(Command::GoTo(1)),
        KeyboardKey::KEY_THREE => Some(Command::GoTo(2)),
        KeyboardKey::KEY_FOUR => Some(Command::GoTo(3)),
        KeyboardKey::KEY_FIVE => Some(Command::GoTo(4)),
        KeyboardKey::KEY_SIX => Some(Command::GoTo(5)),
        KeyboardKey::KEY_SEVEN => Some(Command::GoTo(6)),
        KeyboardKey::KEY_EIGHT => Some(Command::GoTo(7)),
        KeyboardKey::KEY_NINE => Some(Command::GoTo(8)),
        _ => None,
    }
}

/// The deck plus the index of the slide on screen.
pub struct Presentation {
    deck: Deck,
    state: NavigationState,
}

impl Presentation {
    pub fn new(deck: Deck, start: usize) -> Result<Self, DeckError> {
        let state = NavigationState::starting_at(deck.len(), start)?;
        Ok(Self { deck, state })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_slide(&self) -> &Slide {
        // NavigationState keeps the index inside the deck
        &self.deck[self.state.current()]
    }

    pub fn apply(&mut self, command: Command) {
        let before = self.state.current();
        self.state.apply(command);
        debug!(
            "{:?}: slide {} -> {} ({})",
            command,
            before + 1,
            self.state.current() + 1,
            self.current_slide().key
        );
    }

    /// Maps a click to the button under it and applies it.
    pub fn click(&mut self, layout: &ShellLayout, point: Vector2) -> Option<Command> {
        let command = if contains(layout.previous, point) {
            Command::Previous
        } else if contains(layout.next, point) {
            Command::Next
        } else {
            return None;
        };
        self.apply(command);
        Some(command)
    }

    /// The current slide, plus a tooltip for `hover` (slide coordinates) over a chart.
    pub fn draw_slide(&self, canvas: &mut impl Canvas, hover: Option<Vector2>) {
        let slide = self.current_slide();
        slide.draw(canvas);
        if let Some(point) = hover {
            slide.draw_tooltip(canvas, point);
        }
    }

    /// Page background and the viewport's drop shadow.
    pub fn draw_backdrop(&self, canvas: &mut impl Canvas, layout: &ShellLayout, screen: Rectangle) {
        canvas.fill_rect(screen, GRAY_100);
        let v = layout.viewport;
        for spread in [24.0, 12.0, 4.0] {
            let shadow = Rectangle::new(
                v.x - spread / 2.0,
                v.y + spread / 2.0,
                v.width + spread,
                v.height + spread / 2.0,
            );
            canvas.fill_rounded_rect(shadow, 8.0 + spread / 2.0, SHADOW);
        }
    }

    /// Previous/next buttons and the "position / total" counter.
    pub fn draw_controls(&self, canvas: &mut impl Canvas, layout: &ShellLayout, mouse: Vector2) {
        let buttons = [(layout.previous, Icon::ChevronLeft), (layout.next, Icon::ChevronRight)];
        for (rect, icon) in buttons {
            let fill = if contains(rect, mouse) { BLUE_700 } else { BLUE_500 };
            canvas.fill_rounded_rect(rect, BUTTON_RADIUS, fill);
            let origin = Vector2::new(
                rect.x + (rect.width - CHEVRON_SIZE) / 2.0,
                rect.y + (rect.height - CHEVRON_SIZE) / 2.0,
            );
            draw_icon(canvas, icon, origin, CHEVRON_SIZE, WHITE);
        }

        let text = self.state.indicator();
        canvas.text_centered(
            &text,
            layout.indicator.x,
            layout.indicator.y - INDICATOR_SIZE as f32 / 2.0,
            INDICATOR_SIZE,
            INK,
        );
    }
}
