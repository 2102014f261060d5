pub mod chart;
pub mod icon;

pub use chart::{Axis, BarChart, Chart, Datum, LineChart, PieChart, Row, Series, Tooltip};
pub use icon::{Icon, IconBox, draw_icon};
