//! Lyrics lookup.
//!
//! The provider seam ([`LyricsProvider`]) covers the two network calls: a
//! search returning candidate songs and an unauthenticated fetch of a lyrics
//! page. Turning that page into text is the job of [`LyricsExtractor`].

mod extractor;
mod genius;

pub use extractor::{
    clean_lyrics, extract_lyrics, DataAttributeStrategy, ExtractionStrategy, LegacyClassStrategy,
    LyricsExtractor, VersionedClassStrategy,
};
pub use genius::{GeniusClient, GENIUS_API_BASE};

use thiserror::Error;

/// A search candidate returned by the lyrics provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongHit {
    pub title: String,
    pub artist: String,
    /// Full lyrics page.
    pub url: String,
}

/// Lyrics of one song, as shown to the user and sent for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsResult {
    pub lyrics: String,
    pub title: String,
    pub artist: String,
}

impl LyricsResult {
    pub fn word_count(&self) -> usize {
        self.lyrics.split_whitespace().count()
    }
}

#[derive(Debug, Error)]
pub enum LyricsError {
    /// The search returned no candidates.
    #[error("Şarkı bulunamadı")]
    NoMatch,

    /// The page was fetched but no extraction strategy found lyrics in it.
    #[error("Şarkı sözleri bulunamadı")]
    NotFound,

    /// Non-2xx status or network failure.
    #[error("Bağlantı hatası: {0}")]
    Transport(String),

    #[error("Geçersiz yanıt: {0}")]
    InvalidResponse(String),
}

/// Remote source of song metadata and lyrics pages.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LyricsProvider {
    /// Search for songs matching a free-text query, best match first.
    fn search(&self, query: &str) -> Result<Vec<SongHit>, LyricsError>;

    /// Fetch the raw HTML of a lyrics page.
    fn fetch_page(&self, url: &str) -> Result<String, LyricsError>;
}

/// Query sent to the provider for a song/artist pair.
pub fn search_query(song: &str, artist: &str) -> String {
    format!("{} {}", song.trim(), artist.trim()).trim().to_string()
}
