//! Output side of the pipeline.

use crate::analysis::AnalysisResult;
use crate::event_log::EventLevel;
use crate::lyrics::LyricsResult;
use chrono::{DateTime, Local};
use std::path::Path;

/// Receives everything the pipeline wants to show the user.
///
/// The console implementation lives in [`crate::console`]; tests record calls.
pub trait Presenter {
    /// A logged event worth showing (success, warning, error).
    fn event(&mut self, level: EventLevel, timestamp: &DateTime<Local>, message: &str);

    /// Progress line such as `[1/4] ...`.
    fn step(&mut self, index: usize, total: usize, message: &str);

    /// A blocking operation starts.
    fn begin_wait(&mut self, message: &str);

    /// The blocking operation started by `begin_wait` is over.
    fn end_wait(&mut self);

    /// A stage completed.
    fn done(&mut self, message: &str);

    fn show_analysis(&mut self, lyrics: &LyricsResult, analysis: &AnalysisResult);

    fn report_saved(&mut self, path: &Path);

    /// The request was aborted with `message`.
    fn request_failed(&mut self, message: &str);
}
