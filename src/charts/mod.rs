//! Charts module - Static chart rendering and money labels

mod format;
mod renderer;

pub use format::format_money;
pub use renderer::{ScatterStyle, StaticChart, StaticChartRenderer};
