//! Core types for Scriptstore
//!
//! This crate defines the put-stored-script request and everything it needs
//! to be judged valid, independent of how it travels:
//! - `envelope`: acknowledged-request envelope (timeouts, parent task)
//! - `request`: the request value object and its builder
//! - `validation`: rule violations and their aggregate
//! - `render`: best-effort diagnostic rendering of script content
//!
//! Encoding lives in `scriptstore-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod render;
pub mod request;
pub mod validation;

pub use envelope::{AckedRequest, TaskId, TimeUnit, TimeValue, DEFAULT_TIMEOUT};
pub use render::{render_content, try_render_json, RenderError, RenderedContent, PLACEHOLDER};
pub use request::{StoredScriptRequest, StoredScriptRequestBuilder, SCRIPT_REF_DELIMITER};
pub use validation::{ValidationError, ValidationErrors};
