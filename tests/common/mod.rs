//! Common test infrastructure
//!
//! Fakes for the two network seams and the console, plus a harness that wires
//! them into a [`soulsync::Pipeline`] writing into temporary directories.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestPipeline, SONG_TITLE, ARTIST_NAME};
//!
//! #[test]
//! fn test_analysis() {
//!     let mut harness = TestPipeline::builder().build();
//!     let outcome = harness.pipeline.run_request(SONG_TITLE, ARTIST_NAME);
//!     assert!(outcome.is_some());
//! }
//! ```

mod constants;
mod fakes;
mod harness;

pub use constants::*;
pub use fakes::{FakeLlm, FakeLyricsProvider, PresenterCall, RecordingPresenter};
pub use harness::{TestPipeline, TestPipelineBuilder};
