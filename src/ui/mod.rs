//! egui front end: main window, theme, confetti overlay.

pub mod app;
pub mod confetti_overlay;
pub mod theme;

pub use app::AvaApp;
