//! Scriptstore: the put-stored-script admin request
//!
//! A client builds a [`StoredScriptRequest`], encodes it with [`encode`],
//! and the receiving node decodes it with [`decode`] and calls
//! [`StoredScriptRequest::validate`] before storing anything.
//!
//! ```
//! use scriptstore::{decode, encode, StoredScriptRequest};
//!
//! let request = StoredScriptRequest::new("calc", Some("painless".into()), b"{}".to_vec());
//! let bytes = encode(&request)?;
//! let received = decode(&bytes)?;
//!
//! assert_eq!(received, request);
//! assert!(received.validate().is_ok());
//! # Ok::<(), scriptstore::Error>(())
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;

use thiserror::Error;

/// Anything that stops a request from being accepted
#[derive(Debug, Error)]
pub enum Error {
    /// Bytes couldn't be encoded or decoded
    #[error(transparent)]
    Wire(#[from] StreamError),
    /// Request decoded but broke one or more field rules
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Result alias for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Encode a request for transmission
pub fn encode(request: &StoredScriptRequest) -> Result<Vec<u8>> {
    Ok(scriptstore_wire::encode_to_vec(request)?)
}

/// Decode a request with default limits; does not validate
pub fn decode(bytes: &[u8]) -> Result<StoredScriptRequest> {
    Ok(scriptstore_wire::decode_from_slice(bytes)?)
}

/// Decode a request with explicit limits; does not validate
pub fn decode_with(bytes: &[u8], config: WireConfig) -> Result<StoredScriptRequest> {
    Ok(scriptstore_wire::decode_from_slice_with(bytes, config)?)
}

/// Decode then validate, the way a receiving node accepts a request
///
/// Decode failures abort before validation ever sees a value.
pub fn accept(bytes: &[u8]) -> Result<StoredScriptRequest> {
    let request = decode(bytes)?;
    request.validate()?;
    Ok(request)
}
