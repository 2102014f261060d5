use raylib::prelude::Color;

pub const VIEWPORT_WIDTH: i32 = 1024;         // Width of a slide (logical pixels)
pub const VIEWPORT_HEIGHT: i32 = 576;         // Height of a slide (logical pixels)
pub const SLIDE_PADDING: f32 = 32.0;          // Inner padding of every slide

pub const WINDOW_WIDTH: i32 = 1280;           // Default window size
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;                      // Default frames per second
pub const SLIDE_DURATION: f32 = 3.0;          // Seconds each slide is held when exporting

pub const CONTROL_GAP: f32 = 16.0;            // Space between viewport and control bar
pub const BUTTON_WIDTH: f32 = 56.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_RADIUS: f32 = 4.0;
pub const INDICATOR_WIDTH: f32 = 96.0;        // Room reserved for "8 / 8"
pub const INDICATOR_SIZE: i32 = 20;
pub const SCREEN_MARGIN: f32 = 16.0;          // Minimum gap around viewport + controls

const fn rgb(hex: u32) -> Color {
    Color { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8, a: 255 }
}

// Tailwind-ish palette
pub const WHITE: Color = rgb(0xFFFFFF);
pub const INK: Color = rgb(0x000000);
pub const GRAY_100: Color = rgb(0xF3F4F6);
pub const BLUE_500: Color = rgb(0x3B82F6);
pub const BLUE_700: Color = rgb(0x1D4ED8);
pub const PURPLE_500: Color = rgb(0xA855F7);
pub const GREEN_400: Color = rgb(0x4ADE80);
pub const GREEN_500: Color = rgb(0x22C55E);
pub const YELLOW_500: Color = rgb(0xEAB308);
pub const SHADOW: Color = Color { r: 0, g: 0, b: 0, a: 48 };

// Chart colours
pub const SERIES_PURPLE: Color = rgb(0x8884D8);
pub const SERIES_GREEN: Color = rgb(0x82CA9D);
pub const PIE_PALETTE: [Color; 5] = [
    rgb(0x0088FE),
    rgb(0x00C49F),
    rgb(0xFFBB28),
    rgb(0xFF8042),
    rgb(0x8884D8),
];
pub const GRID: Color = rgb(0xCCCCCC);
pub const AXIS: Color = rgb(0x666666);
