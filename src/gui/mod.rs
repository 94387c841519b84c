//! GUI module - Interactive scatter window

mod app;
mod scatter_viewer;

pub use app::ScoutApp;
pub use scatter_viewer::ScatterViewer;
