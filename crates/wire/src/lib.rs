//! Wire encoding for Scriptstore
//!
//! - `stream`: byte-exact primitives (vint, zlong, strings, byte blocks)
//! - `codec`: `Writeable`/`Readable` traits and slice helpers
//! - `envelope`: acknowledged-request envelope encoding
//! - `request`: put stored script request encoding
//! - `config`: decode limits, loadable from TOML
//!
//! Encoding is deterministic: equal values always produce equal bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod request;
pub mod stream;

pub use codec::{decode_from_slice, decode_from_slice_with, encode_to_vec, Readable, Writeable};
pub use config::{ConfigError, WireConfig};
pub use error::{Result, StreamError};
pub use stream::{StreamInput, StreamOutput};
