//! Terminal rendering of pipeline output.

use crate::analysis::{format_percentage, AnalysisResult};
use crate::cli_style::{self, colors, Align, TableBuilder};
use crate::event_log::{EventLevel, LOG_TIMESTAMP_FORMAT};
use crate::lyrics::LyricsResult;
use crate::pipeline::Presenter;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub const RESULTS_TABLE_TITLE: &str = "Duygu Analizi Sonuçları";

/// Rows of the results table, in schema order.
pub fn result_rows(analysis: &AnalysisResult) -> Vec<(&'static str, String)> {
    analysis
        .emotions
        .iter()
        .map(|(emotion, score)| (emotion.label(), format_percentage(score)))
        .collect()
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg.to_string());
    pb
}

/// [`Presenter`] that draws to stdout.
#[derive(Default)]
pub struct ConsolePresenter {
    spinner: Option<ProgressBar>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Print above a running spinner without tearing it.
    fn println(&self, print: impl FnOnce()) {
        match &self.spinner {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn event(&mut self, level: EventLevel, timestamp: &DateTime<Local>, message: &str) {
        let color = match level {
            EventLevel::Info => colors::BLUE,
            EventLevel::Success => colors::GREEN,
            EventLevel::Warning => colors::ORANGE,
            EventLevel::Error => colors::RED,
        };
        let ts = timestamp.format(LOG_TIMESTAMP_FORMAT).to_string();
        self.println(|| cli_style::print_timestamped(&ts, message, color));
    }

    fn step(&mut self, index: usize, total: usize, message: &str) {
        self.println(|| cli_style::print_step(index, total, message));
    }

    fn begin_wait(&mut self, message: &str) {
        self.clear_spinner();
        self.spinner = Some(create_spinner(message));
    }

    fn end_wait(&mut self) {
        self.clear_spinner();
    }

    fn done(&mut self, message: &str) {
        self.println(|| cli_style::print_success(message));
    }

    fn show_analysis(&mut self, lyrics: &LyricsResult, analysis: &AnalysisResult) {
        self.clear_spinner();

        cli_style::print_section_header("Sonuçlar");
        cli_style::print_song_header(&lyrics.title, &lyrics.artist);
        println!();

        let mut table = TableBuilder::new(vec!["Duygu", "Skor"])
            .with_title(RESULTS_TABLE_TITLE)
            .with_alignment(1, Align::Right);
        for (label, percentage) in result_rows(analysis) {
            table.add_row(vec![label, percentage.as_str()]);
        }
        table.print();
        cli_style::flush();
    }

    fn report_saved(&mut self, path: &Path) {
        self.println(|| {
            cli_style::print_info(&format!("Analiz sonuçları kaydedildi: {}", path.display()))
        });
    }

    fn request_failed(&mut self, message: &str) {
        self.clear_spinner();
        cli_style::print_error(&format!("Hata: {}", message));
    }
}
