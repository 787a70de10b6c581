//! Field rules as seen by a receiving node

use crate::test_utils::*;
use proptest::prelude::*;
use scriptstore::{accept, encode, Error, StoredScriptRequest, ValidationError};

fn messages(request: &StoredScriptRequest) -> Vec<String> {
    match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.messages(),
    }
}

#[test]
fn test_missing_id_reported() {
    for lang in [None, Some("painless".to_string()), Some("a#b".to_string())] {
        let mut request = StoredScriptRequest::default();
        request.set_lang(lang).set_content(Some(script_body()));
        assert!(messages(&request).contains(&"must specify id for stored script".to_string()));
    }
}

#[test]
fn test_id_delimiter_reported() {
    let request = StoredScriptRequest::new("a#b", None, script_body());
    assert_eq!(
        messages(&request),
        vec!["id cannot contain '#' for stored script"]
    );
}

#[test]
fn test_lang_delimiter_reported() {
    let request = StoredScriptRequest::new("ok", Some("en#x".to_string()), script_body());
    assert_eq!(
        messages(&request),
        vec!["lang cannot contain '#' for stored script"]
    );
}

#[test]
fn test_missing_content_reported() {
    let request = StoredScriptRequest::builder().id("ok").build();
    assert_eq!(messages(&request), vec!["must specify code for stored script"]);
}

#[test]
fn test_valid_request_has_no_failures() {
    let request = StoredScriptRequest::new("ok", None, script_body());
    assert!(messages(&request).is_empty());
}

#[test]
fn test_accept_validates_after_decode() {
    let bytes = encode(&valid_request("s1")).unwrap();
    assert_eq!(accept(&bytes).unwrap(), valid_request("s1"));

    let bad = StoredScriptRequest::new("a#b", Some("x#y".to_string()), script_body());
    match accept(&encode(&bad).unwrap()) {
        Err(Error::Invalid(errors)) => assert_eq!(
            errors.errors(),
            &[
                ValidationError::IdContainsDelimiter,
                ValidationError::LangContainsDelimiter
            ]
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_accept_reports_decode_failure_first() {
    let bytes = encode(&valid_request("s1")).unwrap();
    assert!(matches!(accept(&bytes[..3]), Err(Error::Wire(_))));
}

#[test]
fn test_aggregate_message() {
    let request = StoredScriptRequest::default();
    let err = request.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation Failed: 1: must specify id for stored script;\
         2: must specify code for stored script;"
    );
}

proptest! {
    /// Any non-empty id and lang free of '#' with content present is valid
    #[test]
    fn delimiter_free_requests_are_valid(
        id in "[^#]{1,32}",
        lang in proptest::option::of("[^#]{0,16}"),
        content in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let request = StoredScriptRequest::new(id, lang, content);
        prop_assert!(request.validate().is_ok());
    }

    /// A '#' anywhere in the id is always caught
    #[test]
    fn delimiter_in_id_is_rejected(prefix in "[^#]{0,8}", suffix in "[^#]{0,8}") {
        let request = StoredScriptRequest::new(format!("{prefix}#{suffix}"), None, script_body());
        let errors = request.validate().unwrap_err();
        prop_assert!(errors.contains(ValidationError::IdContainsDelimiter));
    }
}
