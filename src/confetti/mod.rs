//! Confetti overlay animation.
//! Driven from the UI thread: `start` on begin-analysis, `tick` from a fixed-interval timer.

pub mod config;
pub mod engine;
pub mod particle;
pub mod state;
pub mod timer;

pub use config::{ConfettiConfig, ConfettiConfigError};
pub use engine::ConfettiEngine;
pub use particle::{ConfettiColor, Particle, Vec2};
pub use state::{AnimationState, RenderNotification};
pub use timer::TickTimer;
