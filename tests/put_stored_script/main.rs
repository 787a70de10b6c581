//! Put stored script test suite
//!
//! Exercises the request end to end through the public facade:
//!
//! - **roundtrip**: encode-then-decode laws
//! - **validation**: field rules as seen by a receiving node
//! - **compatibility**: fixed byte layouts peers already exchange
//! - **concurrency**: independent requests across threads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test put_stored_script
//! ```

mod test_utils;

mod compatibility;
mod concurrency;
mod roundtrip;
mod validation;
