//! AVA: game footage import, match metadata entry and the begin-analysis confetti.

pub mod confetti;
pub mod config;
pub mod context;
pub mod core;
pub mod session;
pub mod ui;
