pub mod app;
pub mod board;
pub mod finish_overlay;
pub mod stats_panel;

pub use app::App;
