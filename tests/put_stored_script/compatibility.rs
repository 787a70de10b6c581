//! Fixed byte layouts exchanged with deployed peers

use scriptstore::{decode, encode, StoredScriptRequest, TaskId, TimeUnit, TimeValue};

/// Request as sent by a peer: parent task "node-1":5, default timeouts,
/// no lang, id "calc", content `{"a":1}`
const PEER_REQUEST: &[u8] = &[
    // parent task: "node-1" then long 5
    0x06, b'n', b'o', b'd', b'e', b'-', b'1', 0, 0, 0, 0, 0, 0, 0, 0x05,
    // master node timeout 30s, ack timeout 30s
    0x3C, 0x03, 0x3C, 0x03,
    // lang "" (unspecified)
    0x00,
    // id present, "calc"
    0x01, 0x04, b'c', b'a', b'l', b'c',
    // content
    0x07, b'{', b'"', b'a', b'"', b':', b'1', b'}',
];

#[test]
fn test_decode_peer_request() {
    let request = decode(PEER_REQUEST).unwrap();

    assert_eq!(request.envelope().parent_task, TaskId::new("node-1", 5));
    assert_eq!(
        request.envelope().ack_timeout,
        TimeValue::new(30, TimeUnit::Seconds)
    );
    assert_eq!(request.lang(), None);
    assert_eq!(request.id(), Some("calc"));
    assert_eq!(request.content(), Some(&br#"{"a":1}"#[..]));
    assert!(request.validate().is_ok());
}

#[test]
fn test_encode_matches_peer_bytes() {
    let request = StoredScriptRequest::builder()
        .id("calc")
        .content(br#"{"a":1}"#.to_vec())
        .parent_task(TaskId::new("node-1", 5))
        .build();
    assert_eq!(encode(&request).unwrap(), PEER_REQUEST);
}

#[test]
fn test_display_is_not_wire_form() {
    let request = decode(PEER_REQUEST).unwrap();
    assert_eq!(
        request.to_string(),
        r#"put stored script {id [calc], content [{"a":1}]}"#
    );
}
