//! Genius API client for song search and lyrics pages.

use super::{LyricsError, LyricsProvider, SongHit};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const GENIUS_API_BASE: &str = "https://api.genius.com";

pub struct GeniusClient {
    client: Client,
    base_url: String,
    access_token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    result: GeniusSong,
}

#[derive(Deserialize)]
struct GeniusSong {
    title: String,
    primary_artist: GeniusArtist,
    url: String,
}

#[derive(Deserialize)]
struct GeniusArtist {
    name: String,
}

impl From<SearchHit> for SongHit {
    fn from(hit: SearchHit) -> Self {
        SongHit {
            title: hit.result.title,
            artist: hit.result.primary_artist.name,
            url: hit.result.url,
        }
    }
}

impl GeniusClient {
    /// Create a client for the Genius API.
    ///
    /// # Arguments
    /// * `base_url` - API root, normally [`GENIUS_API_BASE`].
    /// * `access_token` - Client access token sent as a bearer token on searches.
    /// * `timeout` - Per-request timeout; `None` keeps the transport default.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LyricsError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LyricsError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }
}

fn check_status(response: Response, what: &str) -> Result<Response, LyricsError> {
    let status = response.status();
    if !status.is_success() {
        return Err(LyricsError::Transport(format!(
            "{} başarısız oldu (HTTP {})",
            what, status
        )));
    }
    Ok(response)
}

fn parse_search_body(body: &str) -> Result<Vec<SongHit>, LyricsError> {
    let parsed: SearchResponse = serde_json::from_str(body)
        .map_err(|e| LyricsError::InvalidResponse(format!("Arama yanıtı işlenemedi: {}", e)))?;
    Ok(parsed.response.hits.into_iter().map(SongHit::from).collect())
}

impl LyricsProvider for GeniusClient {
    fn search(&self, query: &str) -> Result<Vec<SongHit>, LyricsError> {
        let url = format!("{}/search", self.base_url);
        debug!(query, "Searching Genius");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .send()
            .map_err(|e| LyricsError::Transport(e.to_string()))?;
        let response = check_status(response, "Genius araması")?;

        let body = response
            .text()
            .map_err(|e| LyricsError::Transport(e.to_string()))?;
        let hits = parse_search_body(&body)?;
        debug!(hits = hits.len(), "Genius search done");
        Ok(hits)
    }

    fn fetch_page(&self, url: &str) -> Result<String, LyricsError> {
        debug!(url, "Fetching lyrics page");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LyricsError::Transport(e.to_string()))?;
        check_status(response, "Şarkı sözleri sayfası isteği")?
            .text()
            .map_err(|e| LyricsError::Transport(e.to_string()))
    }
}
