//! Song emotion analysis: lyrics lookup, model-based scoring and reports.

pub mod analysis;
pub mod cli_style;
pub mod config;
pub mod console;
pub mod event_log;
pub mod llm;
pub mod lyrics;
pub mod menu;
pub mod pipeline;
pub mod report;

pub use analysis::{AnalysisResult, Emotion, EmotionRecord};
pub use event_log::{EventLevel, EventLog};
pub use pipeline::{AnalysisContext, Pipeline, PipelineError, PipelineSettings, PipelineState};
