//! Analysis session: the window state behind the import and metadata forms.

#[allow(clippy::module_inception)]
pub mod session;

pub use session::{AnalysisSession, ImportOutcome, SessionError};
