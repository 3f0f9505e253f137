//! Prompt sent to the language model.

use crate::llm::Message;

/// Keeps the model on a single line of JSON.
pub const SYSTEM_INSTRUCTION: &str =
    "Sen bir JSON API'sisin. Sadece tek satırlık JSON yanıtı ver.";

const USER_TEMPLATE_HEAD: &str = "Şarkı sözlerini analiz et ve duygu skorlarını döndür.\n\nŞarkı: ";

const USER_TEMPLATE_TAIL: &str = "\n\nSADECE bu JSON formatını kullan (başka hiçbir şey yazma):\n\
{\"joy\": 0.3, \"sadness\": 0.7, \"anger\": 0.2, \"fear\": 0.1, \"love\": 0.8}";

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// System + user messages for one analysis, embedding at most `max_chars`
/// characters of `lyrics`.
pub fn build_messages(lyrics: &str, max_chars: usize) -> Vec<Message> {
    let excerpt = truncate_chars(lyrics, max_chars);
    let mut user = String::with_capacity(
        USER_TEMPLATE_HEAD.len() + excerpt.len() + USER_TEMPLATE_TAIL.len(),
    );
    user.push_str(USER_TEMPLATE_HEAD);
    user.push_str(excerpt);
    user.push_str(USER_TEMPLATE_TAIL);

    vec![Message::system(SYSTEM_INSTRUCTION), Message::user(user)]
}
