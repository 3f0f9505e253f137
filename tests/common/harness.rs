#![allow(dead_code)]

use super::constants::{data_attribute_page, ARTIST_NAME, SONG_TITLE, SONG_URL, VALID_COMPLETION};
use super::fakes::{FakeLlm, FakeLyricsProvider, RecordingPresenter};
use soulsync::llm::CompletionOptions;
use soulsync::{AnalysisContext, EventLog, Pipeline, PipelineSettings};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A pipeline wired to fakes, writing its reports and log into temp dirs.
pub struct TestPipeline {
    pub pipeline: Pipeline,
    pub lyrics: FakeLyricsProvider,
    pub llm: FakeLlm,
    pub presenter: RecordingPresenter,
    pub log_path: PathBuf,
    output_dir: TempDir,
    _log_dir: TempDir,
}

impl TestPipeline {
    pub fn builder() -> TestPipelineBuilder {
        TestPipelineBuilder::default()
    }

    pub fn output_dir(&self) -> &std::path::Path {
        self.output_dir.path()
    }

    /// Files written to the output directory, sorted by name.
    pub fn reports(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(self.output_dir.path())
            .expect("Failed to read output dir")
            .map(|entry| entry.expect("Failed to read dir entry").path())
            .collect();
        files.sort();
        files
    }

    pub fn log_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}

pub struct TestPipelineBuilder {
    lyrics: FakeLyricsProvider,
    llm: FakeLlm,
    max_lyrics_chars: usize,
}

impl Default for TestPipelineBuilder {
    fn default() -> Self {
        Self {
            lyrics: FakeLyricsProvider::with_hit(
                SONG_TITLE,
                ARTIST_NAME,
                SONG_URL,
                data_attribute_page(),
            ),
            llm: FakeLlm::replying(VALID_COMPLETION),
            max_lyrics_chars: 1000,
        }
    }
}

impl TestPipelineBuilder {
    pub fn lyrics(mut self, lyrics: FakeLyricsProvider) -> Self {
        self.lyrics = lyrics;
        self
    }

    pub fn llm(mut self, llm: FakeLlm) -> Self {
        self.llm = llm;
        self
    }

    pub fn max_lyrics_chars(mut self, max: usize) -> Self {
        self.max_lyrics_chars = max;
        self
    }

    pub fn build(self) -> TestPipeline {
        let output_dir = TempDir::new().expect("Failed to create output dir");
        let log_dir = TempDir::new().expect("Failed to create log dir");
        let log_path = log_dir.path().join("soulsync_logs.txt");
        let presenter = RecordingPresenter::default();

        let ctx = AnalysisContext {
            lyrics_provider: Box::new(self.lyrics.clone()),
            llm: Box::new(self.llm.clone()),
            presenter: Box::new(presenter.clone()),
            event_log: EventLog::open(&log_path).expect("Failed to open event log"),
            settings: PipelineSettings {
                output_dir: output_dir.path().to_path_buf(),
                max_lyrics_chars: self.max_lyrics_chars,
                completion: CompletionOptions::default(),
            },
        };

        TestPipeline {
            pipeline: Pipeline::new(ctx),
            lyrics: self.lyrics,
            llm: self.llm,
            presenter,
            log_path,
            output_dir,
            _log_dir: log_dir,
        }
    }
}
