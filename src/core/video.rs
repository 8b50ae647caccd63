//! Video source selection.
//! Only the path of the chosen file is kept; the file is never opened or decoded.

use std::path::{Path, PathBuf};

/// Extensions accepted by the file chooser and the drop target
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

/// Error type for video selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoError {
    #[error("File has no extension: {0:?}")]
    MissingExtension(PathBuf),
    #[error("Unsupported video format: {0:?}")]
    UnsupportedExtension(PathBuf),
}

/// Check whether a path names a supported video file (case-insensitive)
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// A video chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    path: PathBuf,
}

impl VideoSource {
    /// Create a video source after checking the file extension
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, VideoError> {
        let path = path.into();
        if path.extension().is_none() {
            return Err(VideoError::MissingExtension(path));
        }
        if !is_supported_video(&path) {
            return Err(VideoError::UnsupportedExtension(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        for name in ["game.mp4", "game.avi", "game.mov", "game.mkv", "GAME.MP4", "a/b/c.Mkv"] {
            assert!(is_supported_video(Path::new(name)), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["notes.txt", "game.mp3", "game", "mp4", ".mp4x"] {
            assert!(!is_supported_video(Path::new(name)), "{name} should be rejected");
        }
    }

    #[test]
    fn test_video_source_errors() {
        assert_eq!(
            VideoSource::new("final"),
            Err(VideoError::MissingExtension(PathBuf::from("final")))
        );
        assert_eq!(
            VideoSource::new("final.webm"),
            Err(VideoError::UnsupportedExtension(PathBuf::from("final.webm")))
        );
    }

    #[test]
    fn test_display_name() {
        let source = VideoSource::new("/videos/derby.mov").unwrap();
        assert_eq!(source.display_name(), "derby.mov");
        assert_eq!(source.path(), Path::new("/videos/derby.mov"));
    }
}
