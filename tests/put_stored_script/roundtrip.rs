//! Encode-then-decode laws

use crate::test_utils::*;
use proptest::prelude::*;
use scriptstore::{decode, encode, StoredScriptRequest, TaskId, TimeValue};

proptest! {
    /// id and content survive exactly; lang survives modulo "" == absent
    #[test]
    fn roundtrip_preserves_fields(request in any_request()) {
        let decoded = decode(&encode(&request).unwrap()).unwrap();

        prop_assert_eq!(decoded.id(), request.id());
        prop_assert_eq!(decoded.lang(), request.lang().filter(|l| !l.is_empty()));
        prop_assert_eq!(decoded.content(), Some(request.content().unwrap_or_default()));
        prop_assert_eq!(decoded.envelope(), request.envelope());
    }

    /// Re-encoding a decoded request yields the same bytes
    #[test]
    fn encoding_is_deterministic(request in any_request()) {
        let bytes = encode(&request).unwrap();
        let again = encode(&decode(&bytes).unwrap()).unwrap();
        prop_assert_eq!(bytes, again);
    }
}

#[test]
fn test_absent_lang_stays_absent() {
    let request = StoredScriptRequest::new("s1", None, script_body());
    let decoded = decode(&encode(&request).unwrap()).unwrap();
    assert_eq!(decoded.lang(), None);
}

#[test]
fn test_full_request_roundtrips() {
    let request = StoredScriptRequest::builder()
        .id("price-boost")
        .lang("painless")
        .content(script_body())
        .ack_timeout(TimeValue::timeout_secs(5))
        .master_node_timeout(TimeValue::timeout_millis(750))
        .parent_task(TaskId::new("node-2", 1_000_000_007))
        .build();

    let decoded = decode(&encode(&request).unwrap()).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(decoded.storage_key().as_deref(), Some("painless#price-boost"));
}

#[test]
fn test_trailing_bytes_left_unread() {
    let mut bytes = encode(&valid_request("s1")).unwrap();
    bytes.extend_from_slice(b"next-frame");
    assert_eq!(decode(&bytes).unwrap(), valid_request("s1"));
}
