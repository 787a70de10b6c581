//! Independent requests across threads

use crate::test_utils::*;
use scriptstore::{decode, encode};
use std::thread;

#[test]
fn test_parallel_encode_validate_decode() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..200 {
                    let request = valid_request(&format!("script-{t}-{i}"));
                    assert!(request.validate().is_ok());
                    let decoded = decode(&encode(&request).unwrap()).unwrap();
                    assert_eq!(decoded, request);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_request_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<scriptstore::StoredScriptRequest>();
    assert_send_sync::<scriptstore::ValidationErrors>();
}
