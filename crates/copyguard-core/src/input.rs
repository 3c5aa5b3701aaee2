//! Lenient decoding of slide batches
//!
//! Slide batches arrive as JSON from the script generator or the rewrite
//! flow. A malformed slide must not block screening of its siblings, so
//! decoding degrades per slide:
//! - a slide whose text is missing or not a string is kept with empty text
//! - a slide without a usable id, or that is not an object, is dropped
//! - a numeric id outside `i64` (fractional, or above `i64::MAX`) is kept as
//!   its JSON text and reported back as a string
//!
//! Either way the slide contributes zero warnings.

use serde_json::Value;
use tracing::warn;

use crate::{Error, Result, Slide, SlideId};

/// Decode a slide batch from a JSON string
pub fn slides_from_str(json: &str) -> Result<Vec<Slide>> {
    let value: Value = serde_json::from_str(json)?;
    slides_from_json(&value)
}

/// Decode a slide batch from a JSON value.
///
/// Accepts either an array of slides or an object carrying a `slides`
/// array (a generated script record). Anything else is an input error.
pub fn slides_from_json(value: &Value) -> Result<Vec<Slide>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("slides") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::input(
                    "expected an array of slides or an object with a `slides` array",
                ))
            }
        },
        _ => {
            return Err(Error::input(
                "expected an array of slides or an object with a `slides` array",
            ))
        }
    };

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| decode_slide(index, item))
        .collect())
}

fn decode_slide(index: usize, item: &Value) -> Option<Slide> {
    let Value::Object(map) = item else {
        warn!(index, "skipping slide that is not an object");
        return None;
    };

    let id = match map.get("id") {
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .map(SlideId::Number)
                .unwrap_or_else(|| SlideId::Text(n.to_string())),
        ),
        Some(Value::String(s)) => Some(SlideId::Text(s.clone())),
        _ => None,
    };
    let Some(id) = id else {
        warn!(index, "skipping slide without a usable id");
        return None;
    };

    let text = match map.get("text").or_else(|| map.get("script")) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            warn!(slide = %id, "slide text is not a string, scanning it as empty");
            String::new()
        }
        None => {
            warn!(slide = %id, "slide has no text, scanning it as empty");
            String::new()
        }
    };

    Some(Slide { id, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_array() {
        let slides = slides_from_str(r#"[{"id": 1, "text": "a"}, {"id": "cta", "script": "b"}]"#)
            .unwrap();
        assert_eq!(slides, vec![Slide::new(1, "a"), Slide::new("cta", "b")]);
    }

    #[test]
    fn test_decode_script_record() {
        let json = r#"{
            "id": "0b5c",
            "topic": "お茶",
            "slides": [
                {"id": 1, "role": "hook", "visualGuidance": "", "script": "こんにちは", "tips": ""}
            ]
        }"#;
        let slides = slides_from_str(json).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].text, "こんにちは");
    }

    #[test]
    fn test_non_string_text_becomes_empty() {
        let slides = slides_from_str(r#"[{"id": 1, "text": 42}, {"id": 2}]"#).unwrap();
        assert_eq!(slides, vec![Slide::new(1, ""), Slide::new(2, "")]);
    }

    #[test]
    fn test_missing_id_is_dropped() {
        let slides = slides_from_str(r#"[{"text": "x"}, "oops", {"id": 3, "text": "y"}]"#).unwrap();
        assert_eq!(slides, vec![Slide::new(3, "y")]);
    }

    #[test]
    fn test_non_integer_ids_are_kept_as_text() {
        let slides =
            slides_from_str(r#"[{"id": 1.5, "text": "a"}, {"id": 18446744073709551615, "text": "b"}]"#)
                .unwrap();
        assert_eq!(slides[0].id, SlideId::Text("1.5".to_string()));
        assert_eq!(slides[1].id, SlideId::Text("18446744073709551615".to_string()));

        let value = serde_json::to_value(&slides[0]).unwrap();
        assert_eq!(value["id"], "1.5");
    }

    #[test]
    fn test_rejects_non_batch() {
        assert!(matches!(slides_from_str("42"), Err(Error::Input(_))));
        assert!(matches!(slides_from_str(r#"{"slides": 1}"#), Err(Error::Input(_))));
        assert!(matches!(slides_from_str("not json"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_empty_batch() {
        assert!(slides_from_str("[]").unwrap().is_empty());
    }
}
