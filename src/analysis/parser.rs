//! Turns a free-text model completion into an [`EmotionRecord`].
//!
//! Parsing never fails. A completion without a usable JSON object yields
//! [`FALLBACK_RECORD`]; a usable object with missing or malformed keys gets a
//! per-key default instead.

use super::{Emotion, EmotionRecord};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

/// Substituted whenever no structured object can be read from a completion.
pub const FALLBACK_RECORD: EmotionRecord =
    EmotionRecord::from_unit_scores([0.1, 0.7, 0.2, 0.1, 0.6]);

/// Score given to a key that is absent or not a number.
const MISSING_SCORE: f64 = 0.1;

lazy_static! {
    // First brace-delimited span, no nesting.
    static ref OBJECT_PATTERN: Regex = Regex::new(r"\{[^}]+\}").unwrap();
}

/// Locate the first `{...}` span in `completion` and parse it as a JSON object.
///
/// Returns `None` when there is no such span or it is not a JSON object.
pub fn try_parse_record(completion: &str) -> Option<Map<String, Value>> {
    let candidate = OBJECT_PATTERN.find(completion)?.as_str();
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            debug!(value = %other, "Completion object is not a JSON object");
            None
        }
        Err(e) => {
            debug!(error = %e, candidate, "Completion object is not valid JSON");
            None
        }
    }
}

/// Build a complete record out of an arbitrary JSON object.
///
/// For each emotion: missing -> 0.1, not a number -> 0.1, otherwise the value
/// clamped to `[0, 1]`. Unknown keys are ignored.
pub fn normalize_record(object: &Map<String, Value>) -> EmotionRecord {
    let score = |emotion: Emotion| match object.get(emotion.key()) {
        None => MISSING_SCORE,
        Some(value) => value.as_f64().unwrap_or(MISSING_SCORE),
    };
    EmotionRecord::new(
        score(Emotion::Joy),
        score(Emotion::Sadness),
        score(Emotion::Anger),
        score(Emotion::Fear),
        score(Emotion::Love),
    )
}

/// Parse a completion into a record, falling back to [`FALLBACK_RECORD`].
pub fn parse_emotions(completion: &str) -> EmotionRecord {
    match try_parse_record(completion) {
        Some(object) => normalize_record(&object),
        None => FALLBACK_RECORD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_object_returns_fallback() {
        for completion in [
            "",
            "I cannot analyze these lyrics.",
            "joy: 0.5, sadness: 0.2",
            "} backwards {",
            "{}",
        ] {
            assert_eq!(parse_emotions(completion), FALLBACK_RECORD, "{completion:?}");
        }
    }

    #[test]
    fn test_invalid_json_returns_fallback() {
        assert_eq!(parse_emotions("{joy: 0.5}"), FALLBACK_RECORD);
        assert_eq!(parse_emotions(r#"{"joy": 0.5,"#), FALLBACK_RECORD);
        // Nested objects are cut at the first closing brace.
        assert_eq!(
            parse_emotions(r#"{"scores": {"joy": 0.5}}"#),
            FALLBACK_RECORD
        );
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let completion =
            r#"Sure! {"joy": 2, "sadness": -1, "anger": 0.5, "fear": 0.1, "love": 0.3} done"#;
        let record = parse_emotions(completion);
        assert_eq!(record.get(Emotion::Joy), 1.0);
        assert_eq!(record.get(Emotion::Sadness), 0.0);
        assert_eq!(record.get(Emotion::Anger), 0.5);
        assert_eq!(record.get(Emotion::Fear), 0.1);
        assert_eq!(record.get(Emotion::Love), 0.3);
    }

    #[test]
    fn test_missing_key_defaults() {
        let record =
            parse_emotions(r#"{"joy": 0.3, "sadness": 0.7, "anger": 0.2, "fear": 0.4}"#);
        assert_eq!(record, EmotionRecord::new(0.3, 0.7, 0.2, 0.4, 0.1));
    }

    #[test]
    fn test_non_numeric_value_defaults_before_clamping() {
        let object = json!({
            "joy": "high",
            "sadness": 5,
            "anger": null,
            "fear": true,
            "love": [0.9],
        });
        let record = normalize_record(object.as_object().unwrap());
        assert_eq!(record, EmotionRecord::new(0.1, 1.0, 0.1, 0.1, 0.1));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let record = parse_emotions(
            r#"{"joy": 0.9, "surprise": 0.8, "sadness": 0.1, "anger": 0, "fear": 0, "love": 1}"#,
        );
        assert_eq!(record, EmotionRecord::new(0.9, 0.1, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_first_object_wins() {
        let completion = r#"{"joy": 0.2} and then {"joy": 0.9}"#;
        let record = parse_emotions(completion);
        assert_eq!(record.get(Emotion::Joy), 0.2);
        assert_eq!(record.get(Emotion::Love), 0.1);
    }

    #[test]
    fn test_try_parse_record_rejects_non_objects() {
        assert!(try_parse_record("no braces").is_none());
        assert!(try_parse_record(r#"{"joy": 1}"#).is_some());
    }

    #[test]
    fn test_fallback_record_values() {
        assert_eq!(FALLBACK_RECORD, EmotionRecord::new(0.1, 0.7, 0.2, 0.1, 0.6));
    }
}
