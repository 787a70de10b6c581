//! Public types for the Scriptstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Request types
// ============================================================================

// The request and its builder
pub use scriptstore_core::{StoredScriptRequest, StoredScriptRequestBuilder};

// Envelope shared by acknowledged requests
pub use scriptstore_core::{AckedRequest, TaskId, TimeUnit, TimeValue};

// Validation outcome
pub use scriptstore_core::{ValidationError, ValidationErrors};

// Diagnostic rendering
pub use scriptstore_core::RenderedContent;

// ============================================================================
// Wire types
// ============================================================================

pub use scriptstore_wire::{StreamError, WireConfig};
