//! Emotion analysis domain.
//!
//! This module holds the fixed emotion schema the language model is asked to
//! fill in, the parser that turns a free-text completion into a bounded
//! [`EmotionRecord`], and the prompt sent to the model.

mod parser;
mod prompt;

pub use parser::{normalize_record, parse_emotions, try_parse_record, FALLBACK_RECORD};
pub use prompt::{build_messages, truncate_chars, SYSTEM_INSTRUCTION};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five emotions scored for every song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
}

impl Emotion {
    /// All emotions in schema order. Ties in dominant-emotion selection are
    /// resolved by this order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Love,
    ];

    /// Key used in the model's JSON object.
    pub fn key(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
        }
    }

    /// Localized label shown on screen and in saved reports.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "Mutluluk",
            Emotion::Sadness => "Hüzün",
            Emotion::Anger => "Öfke",
            Emotion::Fear => "Korku",
            Emotion::Love => "Aşk",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Score for every emotion, each within `[0, 1]`.
///
/// A record is always complete: the parser either produces all five clamped
/// scores or substitutes [`FALLBACK_RECORD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionRecord {
    scores: [f64; 5],
}

impl EmotionRecord {
    /// Build a record, clamping every score into `[0, 1]`.
    pub fn new(joy: f64, sadness: f64, anger: f64, fear: f64, love: f64) -> Self {
        Self::from_scores([joy, sadness, anger, fear, love])
    }

    /// Same as [`EmotionRecord::new`] but usable in constants. Callers must
    /// pass values already within `[0, 1]`.
    pub const fn from_unit_scores(scores: [f64; 5]) -> Self {
        Self { scores }
    }

    fn from_scores(scores: [f64; 5]) -> Self {
        Self {
            scores: scores.map(|s| s.clamp(0.0, 1.0)),
        }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        self.scores[emotion.index()]
    }

    /// Iterate `(emotion, score)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Emotion with the highest score; the first one in schema order wins a tie.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }
}

/// Final, read-only outcome of one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub emotions: EmotionRecord,
    pub dominant_emotion: Emotion,
}

impl AnalysisResult {
    pub fn from_record(emotions: EmotionRecord) -> Self {
        Self {
            emotions,
            dominant_emotion: emotions.dominant(),
        }
    }
}

/// Score formatted as a percentage with one decimal, e.g. `0.25 -> "25.0%"`.
pub fn format_percentage(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
