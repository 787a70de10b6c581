//! Put stored script request encoding
//!
//! ```text
//! [envelope]                        parent task, timeouts
//! lang:    String                   never absent; "" means unspecified
//! id:      Optional<String>         presence flag + value
//! content: Bytes                    length-prefixed, copied verbatim
//! ```
//!
//! `lang` has no presence flag. Absent is written as `""` and `""` reads
//! back as absent, so an explicit empty language can't be expressed. Peers
//! already deployed depend on this layout; keep it bit-exact.
//!
//! Decoding does not validate. The admin pipeline calls
//! `StoredScriptRequest::validate` once the request is fully decoded.

use std::io::{Read, Write};

use scriptstore_core::{AckedRequest, StoredScriptRequest};

use crate::codec::{Readable, Writeable};
use crate::error::Result;
use crate::stream::{StreamInput, StreamOutput};

impl Writeable for StoredScriptRequest {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        self.envelope().write_to(out)?;
        out.write_string(self.lang().unwrap_or(""))?;
        out.write_optional_string(self.id())?;
        out.write_bytes_reference(self.content())?;

        tracing::debug!(
            target: "scriptstore::wire",
            id = ?self.id(),
            lang = ?self.lang(),
            content_len = self.content().map_or(0, <[u8]>::len),
            "encoded put stored script request"
        );
        Ok(())
    }
}

impl Readable for StoredScriptRequest {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let envelope = AckedRequest::read_from(input)?;
        let lang = Some(input.read_string()?).filter(|lang| !lang.is_empty());
        let id = input.read_optional_string()?;
        let content = input.read_bytes_reference()?;

        tracing::debug!(
            target: "scriptstore::wire",
            id = ?id,
            lang = ?lang,
            content_len = content.len(),
            "decoded put stored script request"
        );
        Ok(StoredScriptRequest::from_parts(
            envelope,
            id,
            lang,
            Some(content),
        ))
    }
}
