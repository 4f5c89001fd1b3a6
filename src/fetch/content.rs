//! Content classification for changed files
//!
//! The review pipeline only handles text; binary files are dropped during
//! gathering. Detection works on the downloaded bytes, not the filename,
//! so mis-labelled extensions don't smuggle binaries into prompts.

/// Suffix excluded regardless of detected type
///
/// Excalidraw drawings are JSON underneath but are diagrams, not code.
const EXCLUDED_SUFFIX: &str = ".excalidraw";

/// Detect a coarse content type from raw bytes
///
/// Returns `application/json` when the bytes parse as JSON, `text/plain`
/// for other valid UTF-8 without NUL bytes, and
/// `application/octet-stream` otherwise.
pub fn detect_content_type(bytes: &[u8]) -> &'static str {
    if serde_json::from_slice::<serde_json::Value>(bytes).is_ok() {
        return "application/json";
    }
    if !bytes.contains(&0) && std::str::from_utf8(bytes).is_ok() {
        return "text/plain";
    }
    "application/octet-stream"
}

/// Whether a changed file belongs in the review
///
/// A file is included iff its detected content type contains `text` or
/// `json` and its filename does not carry the excluded drawing suffix.
pub fn is_reviewable(content_type: &str, filename: &str) -> bool {
    let textual = content_type.contains("text") || content_type.contains("json");
    textual && !filename.ends_with(EXCLUDED_SUFFIX)
}
