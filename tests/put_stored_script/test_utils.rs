//! Shared helpers for the put stored script suite

use proptest::prelude::*;
use scriptstore::StoredScriptRequest;

/// A small JSON script body
pub fn script_body() -> Vec<u8> {
    br#"{"script":{"lang":"painless","source":"doc['price'].value * params.factor"}}"#.to_vec()
}

/// A request that passes validation
pub fn valid_request(id: &str) -> StoredScriptRequest {
    StoredScriptRequest::new(id, Some("painless".to_string()), script_body())
}

/// Any text, including non-BMP characters and `#`
pub fn any_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), 0..24).prop_map(|chars| chars.into_iter().collect())
}

/// Requests with arbitrary field presence and content
pub fn any_request() -> impl Strategy<Value = StoredScriptRequest> {
    (
        proptest::option::of(any_text()),
        proptest::option::of(any_text()),
        proptest::option::of(proptest::collection::vec(any::<u8>(), 0..256)),
    )
        .prop_map(|(id, lang, content)| {
            let mut request = StoredScriptRequest::default();
            request.set_id(id).set_lang(lang).set_content(content);
            request
        })
}
