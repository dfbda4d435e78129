use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::error::GenerationError;
use crate::food::dish::{Dish, ImageSet};
use serde_json::Value;

/// Fails if the body carries an API-level `error` object.
pub fn check_api_error(response: &Value) -> Result<(), GenerationError> {
    match response.get("error") {
        Some(error) => {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            Err(GenerationError::Api(message))
        }
        None => Ok(()),
    }
}

/// Text of the first candidate in a `generateContent` response.
pub fn extract_candidate_text(response: &Value) -> Result<String, GenerationError> {
    check_api_error(response)?;

    let parts = response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            let reason = response
                .pointer("/promptFeedback/blockReason")
                .and_then(Value::as_str)
                .map(|r| format!("prompt blocked ({})", r))
                .unwrap_or_else(|| "response has no candidates".to_string());
            GenerationError::Malformed(reason)
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(GenerationError::Malformed("candidate contains no text".to_string()));
    }
    Ok(text)
}

/// Parses model output into a [`Dish`]. All four fields are required and
/// the two lists must hold plain strings.
pub fn parse_dish(text: &str) -> Result<Dish, GenerationError> {
    let dish: Dish = serde_json::from_str(strip_code_fence(text))?;
    if dish.name.trim().is_empty() {
        return Err(GenerationError::Malformed("dish name is empty".to_string()));
    }
    Ok(dish)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

/// Collects the images of a `predict` response as data URIs. A response
/// without predictions yields an empty set.
pub fn collect_images(response: &Value, default_mime: &str) -> Result<ImageSet, GenerationError> {
    check_api_error(response)?;

    let predictions = match response.get("predictions") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(predictions)) => predictions,
        Some(_) => return Err(GenerationError::Malformed("predictions is not an array".to_string())),
    };

    predictions
        .iter()
        .filter(|p| p.get("raiFilteredReason").is_none())
        .map(|prediction| {
            let bytes = prediction
                .get("bytesBase64Encoded")
                .and_then(Value::as_str)
                .ok_or_else(|| GenerationError::Malformed("prediction has no image bytes".to_string()))?;
            let mime = prediction
                .get("mimeType")
                .and_then(Value::as_str)
                .unwrap_or(default_mime);
            to_data_uri(mime, bytes)
        })
        .collect()
}

/// Wraps base64 image bytes as `data:<mime>;base64,<bytes>` after checking they decode.
pub fn to_data_uri(mime: &str, base64_bytes: &str) -> Result<String, GenerationError> {
    STANDARD
        .decode(base64_bytes)
        .map_err(|e| GenerationError::Malformed(format!("image bytes are not base64: {}", e)))?;
    Ok(format!("data:{};base64,{}", mime, base64_bytes))
}

/// Splits a data URI back into its mime type and raw bytes.
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}
