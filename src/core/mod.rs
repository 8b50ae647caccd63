//! Core types for the analysis tool.
//!
//! Time representation, video selection and match metadata. None of these
//! depend on the UI toolkit.

pub mod metadata;
pub mod time;
pub mod video;

// Re-export core data structures for easier access.
pub use metadata::GameMetadata;
pub use time::{Millis, TICK_INTERVAL_MS};
pub use video::{is_supported_video, VideoError, VideoSource, VIDEO_EXTENSIONS};
