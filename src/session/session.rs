//! Session state for one imported game video.
//!
//! Holds everything the main window shows apart from widgets themselves:
//! the chosen video, the match metadata, the description line, the import
//! button caption and the status bar text.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{info, warn};

use crate::core::metadata::GameMetadata;
use crate::core::video::{is_supported_video, VideoError, VideoSource};

pub const TITLE: &str = "This is AVA";
pub const INTRO_DESCRIPTION: &str = "AVA is game footage analysis tool for everybody.";
pub const LOCKED_DESCRIPTION: &str = "Move on with your life.";
pub const IMPORT_CAPTION: &str = "Choose Video";
pub const STATUS_READY: &str = "Ready";
pub const STATUS_ANALYSIS_STARTED: &str = "Analysis started";
pub const STATUS_ANALYSIS_COMPLETE: &str = "Analysis complete";

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("No video imported")]
    NoVideo,
    #[error(transparent)]
    Video(#[from] VideoError),
}

/// Result of an import attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The video was stored and the metadata form is shown
    Imported,
    /// A video was already imported; the request was ignored
    Locked,
}

#[derive(Debug, Clone)]
pub struct AnalysisSession {
    video: Option<VideoSource>,
    metadata: GameMetadata,
    metadata_form_visible: bool,
    description: String,
    import_caption: String,
    status: String,
}

impl AnalysisSession {
    /// Create a session whose game date defaults to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            video: None,
            metadata: GameMetadata::new(today),
            metadata_form_visible: false,
            description: INTRO_DESCRIPTION.to_string(),
            import_caption: IMPORT_CAPTION.to_string(),
            status: STATUS_READY.to_string(),
        }
    }

    /// True once a video is imported; later imports are refused
    pub fn is_import_locked(&self) -> bool {
        self.metadata_form_visible
    }

    /// Refuse an import request if locked, telling the user so
    pub fn refuse_if_locked(&mut self) -> Option<ImportOutcome> {
        if !self.is_import_locked() {
            return None;
        }
        self.description = LOCKED_DESCRIPTION.to_string();
        Some(ImportOutcome::Locked)
    }

    /// Import a video by path.
    /// Once the metadata form is shown, further imports are refused.
    pub fn import_video(&mut self, path: &Path) -> Result<ImportOutcome, SessionError> {
        if let Some(outcome) = self.refuse_if_locked() {
            return Ok(outcome);
        }
        if path.as_os_str().is_empty() {
            return Err(SessionError::NoFileSelected);
        }

        let source = VideoSource::new(path)?;
        info!("Video imported: {}", source.path().display());

        self.import_caption = format!("Video chosen: {}", source.path().display());
        self.status = format!("Video loaded: {}", source.display_name());
        self.video = Some(source);
        self.metadata_form_visible = true;

        Ok(ImportOutcome::Imported)
    }

    /// Import the result of a file chooser; `None` means the user cancelled
    pub fn import_chosen(&mut self, choice: Option<PathBuf>) -> Result<ImportOutcome, SessionError> {
        if let Some(outcome) = self.refuse_if_locked() {
            return Ok(outcome);
        }
        match choice {
            Some(path) => self.import_video(&path),
            None => Err(SessionError::NoFileSelected),
        }
    }

    /// True if any of the hovered paths could be dropped
    pub fn accepts_drop<P: AsRef<Path>>(&self, paths: &[P]) -> bool {
        !self.is_import_locked() && paths.iter().any(|path| is_supported_video(path.as_ref()))
    }

    /// Import the first supported file among dropped paths
    pub fn drop_files(&mut self, paths: &[PathBuf]) -> Result<ImportOutcome, SessionError> {
        if let Some(outcome) = self.refuse_if_locked() {
            return Ok(outcome);
        }
        let Some(first) = paths.first() else {
            return Err(SessionError::NoFileSelected);
        };
        match paths.iter().find(|path| is_supported_video(path)) {
            Some(path) => self.import_video(path),
            None => Err(VideoSource::new(first.clone())
                .err()
                .map_or(SessionError::NoFileSelected, SessionError::from)),
        }
    }

    pub fn set_home_team(&mut self, name: &str) {
        self.metadata.home_team = name.to_string();
        self.refresh_description();
    }

    pub fn set_away_team(&mut self, name: &str) {
        self.metadata.away_team = name.to_string();
        self.refresh_description();
    }

    pub fn set_game_date(&mut self, date: NaiveDate) {
        self.metadata.date = date;
        self.refresh_description();
    }

    /// Confirm the metadata. The caller starts the confetti on success.
    pub fn begin_analysis(&mut self) -> Result<&str, SessionError> {
        if self.video.is_none() {
            return Err(SessionError::NoVideo);
        }
        self.refresh_description();
        self.status = STATUS_ANALYSIS_STARTED.to_string();
        info!("Analysis started: {}", self.description);
        Ok(&self.description)
    }

    /// Called once the confetti run has finished
    pub fn finish_analysis(&mut self) {
        self.status = STATUS_ANALYSIS_COMPLETE.to_string();
    }

    /// Show an error in the status bar
    pub fn report_error(&mut self, error: &SessionError) {
        warn!("{}", error);
        self.status = error.to_string();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn refresh_description(&mut self) {
        self.description = self.metadata.describe();
    }

    pub fn video(&self) -> Option<&VideoSource> {
        self.video.as_ref()
    }

    pub fn metadata(&self) -> &GameMetadata {
        &self.metadata
    }

    pub fn is_metadata_form_visible(&self) -> bool {
        self.metadata_form_visible
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn import_caption(&self) -> &str {
        &self.import_caption
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
