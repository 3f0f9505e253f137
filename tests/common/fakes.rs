#![allow(dead_code)]

use chrono::{DateTime, Local};
use soulsync::analysis::AnalysisResult;
use soulsync::event_log::EventLevel;
use soulsync::llm::{
    CompletionOptions, CompletionResponse, FinishReason, LlmError, LlmProvider, Message,
};
use soulsync::lyrics::{LyricsError, LyricsProvider, LyricsResult, SongHit};
use soulsync::pipeline::Presenter;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Lyrics provider answering from canned data and recording every call.
#[derive(Clone)]
pub struct FakeLyricsProvider {
    hits: Rc<Result<Vec<SongHit>, String>>,
    page: Rc<Result<String, String>>,
    pub searches: Rc<RefCell<Vec<String>>>,
    pub fetches: Rc<RefCell<Vec<String>>>,
}

impl FakeLyricsProvider {
    fn new(hits: Result<Vec<SongHit>, String>, page: Result<String, String>) -> Self {
        Self {
            hits: Rc::new(hits),
            page: Rc::new(page),
            searches: Rc::default(),
            fetches: Rc::default(),
        }
    }

    pub fn with_hit(title: &str, artist: &str, url: &str, page: String) -> Self {
        let hit = SongHit {
            title: title.to_string(),
            artist: artist.to_string(),
            url: url.to_string(),
        };
        Self::new(Ok(vec![hit]), Ok(page))
    }

    pub fn no_hits() -> Self {
        Self::new(Ok(Vec::new()), Err("no page".to_string()))
    }

    pub fn failing_search(message: &str) -> Self {
        Self::new(Err(message.to_string()), Err("no page".to_string()))
    }
}

impl LyricsProvider for FakeLyricsProvider {
    fn search(&self, query: &str) -> Result<Vec<SongHit>, LyricsError> {
        self.searches.borrow_mut().push(query.to_string());
        (*self.hits).clone().map_err(LyricsError::Transport)
    }

    fn fetch_page(&self, url: &str) -> Result<String, LyricsError> {
        self.fetches.borrow_mut().push(url.to_string());
        (*self.page).clone().map_err(LyricsError::Transport)
    }
}

/// LLM answering every request with one fixed completion.
#[derive(Clone)]
pub struct FakeLlm {
    reply: Rc<RefCell<Result<String, String>>>,
    pub requests: Rc<RefCell<Vec<Vec<Message>>>>,
    pub options: Rc<RefCell<Vec<CompletionOptions>>>,
}

impl FakeLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Rc::new(RefCell::new(Ok(text.to_string()))),
            requests: Rc::default(),
            options: Rc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Rc::new(RefCell::new(Err(message.to_string()))),
            requests: Rc::default(),
            options: Rc::default(),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl LlmProvider for FakeLlm {
    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fake-model"
    }

    fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError> {
        self.requests.borrow_mut().push(messages.to_vec());
        self.options.borrow_mut().push(options.clone());
        match &*self.reply.borrow() {
            Ok(text) => Ok(CompletionResponse {
                message: Message::assistant(text.clone()),
                finish_reason: FinishReason::Stop,
                usage: None,
            }),
            Err(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Event(EventLevel, String),
    Step(usize, usize, String),
    BeginWait(String),
    EndWait,
    Done(String),
    ShowAnalysis(LyricsResult, AnalysisResult),
    ReportSaved(PathBuf),
    RequestFailed(String),
}

/// Presenter that records what the pipeline asked it to show.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub calls: Rc<RefCell<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn failures(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PresenterCall::RequestFailed(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn steps(&self) -> Vec<(usize, usize)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Step(i, t, _) => Some((*i, *t)),
                _ => None,
            })
            .collect()
    }

    pub fn shown_analysis(&self) -> Option<(LyricsResult, AnalysisResult)> {
        self.calls.borrow().iter().find_map(|c| match c {
            PresenterCall::ShowAnalysis(l, a) => Some((l.clone(), a.clone())),
            _ => None,
        })
    }

    /// Every `begin_wait` is matched by a later `end_wait`.
    pub fn waits_balanced(&self) -> bool {
        let mut open = false;
        for call in self.calls.borrow().iter() {
            match call {
                PresenterCall::BeginWait(_) => open = true,
                PresenterCall::EndWait => open = false,
                _ => {}
            }
        }
        !open
    }

    fn push(&self, call: PresenterCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn event(&mut self, level: EventLevel, _timestamp: &DateTime<Local>, message: &str) {
        self.push(PresenterCall::Event(level, message.to_string()));
    }

    fn step(&mut self, index: usize, total: usize, message: &str) {
        self.push(PresenterCall::Step(index, total, message.to_string()));
    }

    fn begin_wait(&mut self, message: &str) {
        self.push(PresenterCall::BeginWait(message.to_string()));
    }

    fn end_wait(&mut self) {
        self.push(PresenterCall::EndWait);
    }

    fn done(&mut self, message: &str) {
        self.push(PresenterCall::Done(message.to_string()));
    }

    fn show_analysis(&mut self, lyrics: &LyricsResult, analysis: &AnalysisResult) {
        self.push(PresenterCall::ShowAnalysis(lyrics.clone(), analysis.clone()));
    }

    fn report_saved(&mut self, path: &Path) {
        self.push(PresenterCall::ReportSaved(path.to_path_buf()));
    }

    fn request_failed(&mut self, message: &str) {
        self.push(PresenterCall::RequestFailed(message.to_string()));
    }
}
