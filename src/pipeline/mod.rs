//! Analysis pipeline.
//!
//! One request runs search -> scrape -> clean -> prompt -> parse -> display ->
//! save, strictly in sequence and without retries. [`Pipeline::run_request`]
//! is the single recovery boundary: any error below it becomes one logged line
//! and one console line, and the pipeline returns to [`PipelineState::Idle`].

mod presenter;
mod state;

pub use presenter::Presenter;
pub use state::PipelineState;

use crate::analysis::{
    build_messages, normalize_record, try_parse_record, AnalysisResult, FALLBACK_RECORD,
};
use crate::event_log::{EventLevel, EventLog};
use crate::llm::{CompletionOptions, LlmError, LlmProvider};
use crate::lyrics::{
    clean_lyrics, search_query, LyricsError, LyricsExtractor, LyricsProvider, LyricsResult,
};
use crate::report::save_report;
use chrono::Local;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const TOTAL_STEPS: usize = 4;

/// Errors that abort a request.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Şarkı adı boş olamaz")]
    EmptySongName,

    #[error("Şarkı sözleri alınamadı: {0}")]
    Lyrics(#[from] LyricsError),

    #[error("Duygu analizi yapılamadı: {0}")]
    Analysis(#[from] LlmError),

    #[error("Sonuçlar kaydedilemedi: {0}")]
    Save(#[from] io::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidStateTransition {
        from: PipelineState,
        to: PipelineState,
    },
}

impl PipelineError {
    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Tunables for one pipeline.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub output_dir: PathBuf,
    pub max_lyrics_chars: usize,
    pub completion: CompletionOptions,
}

/// Everything a pipeline talks to, passed in explicitly.
pub struct AnalysisContext {
    pub lyrics_provider: Box<dyn LyricsProvider>,
    pub llm: Box<dyn LlmProvider>,
    pub presenter: Box<dyn Presenter>,
    pub event_log: EventLog,
    pub settings: PipelineSettings,
}

/// Result of a successful request.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub lyrics: LyricsResult,
    pub analysis: AnalysisResult,
    pub report_path: PathBuf,
}

pub struct Pipeline {
    ctx: AnalysisContext,
    extractor: LyricsExtractor,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self::with_extractor(ctx, LyricsExtractor::default())
    }

    pub fn with_extractor(ctx: AnalysisContext, extractor: LyricsExtractor) -> Self {
        Self {
            ctx,
            extractor,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run one request, recovering from any failure.
    ///
    /// Returns `None` when the request failed; the failure has already been
    /// logged and shown. The pipeline is back in [`PipelineState::Idle`]
    /// either way.
    pub fn run_request(&mut self, song: &str, artist: &str) -> Option<RunOutcome> {
        let outcome = match self.run(song, artist) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.ctx.presenter.end_wait();
                let message = err.user_message();
                self.ctx
                    .event_log
                    .record(EventLevel::Error, &format!("Hata: {}", message));
                self.ctx.presenter.request_failed(&message);
                None
            }
        };
        self.state = PipelineState::Idle;
        outcome
    }

    /// Run one request, propagating the first error.
    ///
    /// On error the pipeline is left in [`PipelineState::Failed`].
    pub fn run(&mut self, song: &str, artist: &str) -> Result<RunOutcome, PipelineError> {
        if self.state.is_terminal() {
            self.transition(PipelineState::Idle)?;
        }
        let result = self.execute(song, artist);
        if result.is_err() && !self.state.is_terminal() {
            self.state = PipelineState::Failed;
        }
        result
    }

    fn execute(&mut self, song: &str, artist: &str) -> Result<RunOutcome, PipelineError> {
        if song.trim().is_empty() {
            return Err(PipelineError::EmptySongName);
        }

        self.transition(PipelineState::Searching)?;
        let lyrics = self.fetch_lyrics(song, artist)?;

        self.transition(PipelineState::Analyzing)?;
        let completion = self.request_completion(&lyrics)?;

        self.transition(PipelineState::Parsing)?;
        let analysis = self.parse_completion(&completion);

        self.transition(PipelineState::Presenting)?;
        self.ctx.presenter.step(4, TOTAL_STEPS, "Sonuçlar hazırlanıyor...");
        self.ctx.presenter.show_analysis(&lyrics, &analysis);

        self.ctx.presenter.begin_wait("Sonuçlar kaydediliyor...");
        let report_path = save_report(
            &self.ctx.settings.output_dir,
            &lyrics.title,
            &lyrics.artist,
            &analysis,
            &Local::now(),
        )?;
        self.ctx.presenter.end_wait();
        self.ctx.presenter.report_saved(&report_path);
        self.log(
            EventLevel::Success,
            &format!("Analiz sonuçları kaydedildi: {}", report_path.display()),
        );
        self.transition(PipelineState::Saved)?;

        Ok(RunOutcome {
            lyrics,
            analysis,
            report_path,
        })
    }

    fn transition(&mut self, next: PipelineState) -> Result<(), PipelineError> {
        if !self.state.can_transition_to(next) {
            return Err(PipelineError::InvalidStateTransition {
                from: self.state,
                to: next,
            });
        }
        debug!(from = ?self.state, to = ?next, "Pipeline transition");
        self.state = next;
        Ok(())
    }

    /// Write an event to the run log, echoing anything above INFO.
    fn log(&mut self, level: EventLevel, message: &str) {
        let timestamp = self.ctx.event_log.record(level, message);
        if level != EventLevel::Info {
            self.ctx.presenter.event(level, &timestamp, message);
        }
    }

    fn fetch_lyrics(&mut self, song: &str, artist: &str) -> Result<LyricsResult, PipelineError> {
        self.log(
            EventLevel::Info,
            &format!("Şarkı sözleri aranıyor: {} - {}", song, artist),
        );
        self.ctx.presenter.step(1, TOTAL_STEPS, "Genius API'ye bağlanılıyor...");
        self.ctx.presenter.begin_wait("Şarkı sözleri aranıyor...");

        self.log(EventLevel::Info, "Genius API'ye istek gönderiliyor...");
        let hits = self.ctx.lyrics_provider.search(&search_query(song, artist))?;
        let hit = match hits.into_iter().next() {
            Some(hit) => hit,
            None => {
                self.log(EventLevel::Error, "Şarkı bulunamadı");
                return Err(LyricsError::NoMatch.into());
            }
        };
        self.log(
            EventLevel::Success,
            &format!("Şarkı bulundu: {} - {}", hit.title, hit.artist),
        );

        self.transition(PipelineState::Scraping)?;
        self.log(EventLevel::Info, "Şarkı sözleri sayfası alınıyor...");
        let html = self.ctx.lyrics_provider.fetch_page(&hit.url)?;

        self.log(EventLevel::Info, "Şarkı sözleri ayrıştırılıyor...");
        let (text, strategy) = match self.extractor.extract(&html) {
            Ok(found) => found,
            Err(err) => {
                self.log(EventLevel::Error, "Şarkı sözleri bulunamadı");
                return Err(err.into());
            }
        };
        self.log(
            EventLevel::Success,
            &format!("Şarkı sözleri '{}' yöntemiyle bulundu", strategy),
        );

        let lyrics = LyricsResult {
            lyrics: text,
            title: hit.title,
            artist: hit.artist,
        };
        self.log(
            EventLevel::Success,
            &format!("Toplam {} kelimelik şarkı sözü alındı", lyrics.word_count()),
        );

        self.ctx.presenter.end_wait();
        self.ctx.presenter.done("Şarkı sözleri başarıyla alındı");
        Ok(lyrics)
    }

    fn request_completion(&mut self, lyrics: &LyricsResult) -> Result<String, PipelineError> {
        self.ctx.presenter.step(2, TOTAL_STEPS, "Şarkı sözleri temizleniyor...");
        let clean_text = clean_lyrics(&lyrics.lyrics);

        let step_message = format!("{} modeline gönderiliyor...", self.ctx.llm.model());
        self.ctx.presenter.step(3, TOTAL_STEPS, &step_message);
        self.ctx.presenter.begin_wait("Duygu analizi yapılıyor...");

        self.log(EventLevel::Info, "Duygu analizi başlatılıyor...");
        let messages = build_messages(&clean_text, self.ctx.settings.max_lyrics_chars);

        self.log(
            EventLevel::Info,
            &format!("{} API'ye istek gönderiliyor...", self.ctx.llm.name()),
        );
        let response = self
            .ctx
            .llm
            .complete(&messages, &self.ctx.settings.completion)?;
        self.log(
            EventLevel::Success,
            &format!("{} API'den yanıt alındı", self.ctx.llm.name()),
        );

        let content = response.text().to_string();
        self.log(EventLevel::Info, &format!("Ham yanıt: {}", content));
        Ok(content)
    }

    fn parse_completion(&mut self, completion: &str) -> AnalysisResult {
        let record = match try_parse_record(completion) {
            Some(object) => normalize_record(&object),
            None => {
                self.log(
                    EventLevel::Error,
                    "JSON işleme hatası: Geçerli JSON bulunamadı, varsayılan skorlar kullanılıyor",
                );
                FALLBACK_RECORD
            }
        };

        self.ctx.presenter.end_wait();
        self.ctx.presenter.done("Duygu analizi tamamlandı");
        AnalysisResult::from_record(record)
    }
}
