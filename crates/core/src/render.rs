//! Best-effort diagnostic rendering of script content
//!
//! Script bodies are opaque bytes, usually a serialized structured document.
//! For log lines we try to show them as compact JSON; anything that isn't
//! UTF-8 JSON renders as the `_na_` placeholder. Rendering never fails and
//! never feeds back into validation or encoding.

use std::fmt;
use thiserror::Error;

/// Placeholder shown when content can't be rendered
pub const PLACEHOLDER: &str = "_na_";

/// Why content couldn't be rendered
#[derive(Debug, Error)]
pub enum RenderError {
    /// Bytes aren't valid UTF-8
    #[error("content is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
    /// Text isn't a JSON document
    #[error("content is not JSON: {0}")]
    NotJson(#[from] serde_json::Error),
}

/// Content as shown in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedContent {
    /// Compact JSON rendering
    Json(String),
    /// Rendering failed; shown as [`PLACEHOLDER`]
    Unavailable,
}

impl RenderedContent {
    /// Rendered text, or the placeholder
    pub fn as_str(&self) -> &str {
        match self {
            RenderedContent::Json(s) => s,
            RenderedContent::Unavailable => PLACEHOLDER,
        }
    }

    /// Whether rendering succeeded
    pub fn is_available(&self) -> bool {
        matches!(self, RenderedContent::Json(_))
    }
}

impl fmt::Display for RenderedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse content as JSON and re-serialize it compactly
pub fn try_render_json(content: &[u8]) -> Result<String, RenderError> {
    let text = std::str::from_utf8(content)?;
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(value.to_string())
}

/// Render content for diagnostics, substituting the placeholder on failure
pub fn render_content(content: &[u8]) -> RenderedContent {
    match try_render_json(content) {
        Ok(json) => RenderedContent::Json(json),
        Err(e) => {
            tracing::trace!(target: "scriptstore::render", error = %e, "content not renderable, using placeholder");
            RenderedContent::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_compact_json() {
        let content = br#"{ "script" : { "lang": "painless",  "source": "1 + 1" } }"#;
        let rendered = render_content(content);
        assert!(rendered.is_available());
        assert_eq!(
            rendered.as_str(),
            r#"{"script":{"lang":"painless","source":"1 + 1"}}"#
        );
    }

    #[test]
    fn test_malformed_json_uses_placeholder() {
        let rendered = render_content(br#"{"script": "#);
        assert_eq!(rendered, RenderedContent::Unavailable);
        assert_eq!(rendered.to_string(), "_na_");
    }

    #[test]
    fn test_non_utf8_uses_placeholder() {
        let rendered = render_content(&[0xff, 0xfe, 0x00]);
        assert_eq!(rendered.to_string(), PLACEHOLDER);
    }

    #[test]
    fn test_empty_content_uses_placeholder() {
        assert_eq!(render_content(b""), RenderedContent::Unavailable);
    }

    #[test]
    fn test_try_render_reports_cause() {
        assert!(matches!(
            try_render_json(&[0xc3, 0x28]),
            Err(RenderError::NotUtf8(_))
        ));
        assert!(matches!(
            try_render_json(b"not json"),
            Err(RenderError::NotJson(_))
        ));
    }
}
