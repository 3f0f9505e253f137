#![allow(dead_code)]

pub const SONG_TITLE: &str = "Gülpembe";
pub const ARTIST_NAME: &str = "Barış Manço";
pub const SONG_URL: &str = "https://genius.com/Baris-manco-gulpembe-lyrics";

pub const LYRICS_LINE_1: &str = "Ben bu dünyada bir gülpembe gördüm";
pub const LYRICS_LINE_2: &str = "Yüzünde bir tebessüm kaldı";

/// Current page layout: two lyrics containers with markup inside.
pub fn data_attribute_page() -> String {
    format!(
        r#"<html><head><title>{SONG_TITLE}</title></head><body>
<div class="header">Genius</div>
<div data-lyrics-container="true">{LYRICS_LINE_1}<br><i>{LYRICS_LINE_2}</i></div>
<div data-lyrics-container="true">Son dörtlük</div>
</body></html>"#
    )
}

/// Older page layout with a single `div.lyrics`.
pub fn legacy_page() -> String {
    format!(
        r#"<html><body><div class="lyrics"><p>{LYRICS_LINE_1}<br>{LYRICS_LINE_2}</p></div></body></html>"#
    )
}

pub fn page_without_lyrics() -> String {
    r#"<html><body><div class="lyrics">   </div><p>Bu şarkının sözleri henüz eklenmedi.</p></body></html>"#
        .to_string()
}

pub const VALID_COMPLETION: &str =
    r#"{"joy": 0.2, "sadness": 0.85, "anger": 0.05, "fear": 0.1, "love": 0.7}"#;

pub const CHATTY_COMPLETION: &str = r#"Tabii! İşte sonuç: {"joy": 1.4, "sadness": "çok", "fear": -0.3, "love": 0.55} umarım yardımcı olur."#;

pub const PROSE_COMPLETION: &str = "Bu şarkı hüzünlü ve romantik.";
