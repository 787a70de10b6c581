//! Put stored script request
//!
//! Registers or replaces a named, optionally language-tagged script body.
//! The request is a transient value: a caller builds it (directly or by
//! decoding it off the wire), the admin pipeline calls
//! [`StoredScriptRequest::validate`] and, if that passes, stores the content
//! under [`StoredScriptRequest::storage_key`].
//!
//! # Example
//!
//! ```
//! use scriptstore_core::StoredScriptRequest;
//!
//! let request = StoredScriptRequest::builder()
//!     .id("calc-score")
//!     .lang("painless")
//!     .content(br#"{"script":"doc['a'].value * 2"}"#.to_vec())
//!     .build();
//!
//! assert!(request.validate().is_ok());
//! assert_eq!(request.storage_key().as_deref(), Some("painless#calc-score"));
//! ```

use std::fmt;

use crate::envelope::{AckedRequest, TaskId, TimeValue};
use crate::render::render_content;
use crate::validation::{ValidationError, ValidationErrors};

/// Delimiter reserved in script references (`lang#id`)
pub const SCRIPT_REF_DELIMITER: char = '#';

/// Request to store a script under an id
///
/// All three payload fields are optional so a request can be staged field by
/// field; [`validate`](Self::validate) decides whether it is usable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoredScriptRequest {
    envelope: AckedRequest,
    id: Option<String>,
    lang: Option<String>,
    content: Option<Vec<u8>>,
}

impl StoredScriptRequest {
    /// Create a request with all payload fields set and a default envelope
    pub fn new(
        id: impl Into<String>,
        lang: Option<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            envelope: AckedRequest::default(),
            id: Some(id.into()),
            lang,
            content: Some(content.into()),
        }
    }

    /// Start a builder with nothing set
    pub fn builder() -> StoredScriptRequestBuilder {
        StoredScriptRequestBuilder::default()
    }

    /// Assemble from already-decoded parts
    pub fn from_parts(
        envelope: AckedRequest,
        id: Option<String>,
        lang: Option<String>,
        content: Option<Vec<u8>>,
    ) -> Self {
        Self {
            envelope,
            id,
            lang,
            content,
        }
    }

    /// Script id
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Script language, None if unspecified
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Script body
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Acknowledged-request envelope
    pub fn envelope(&self) -> &AckedRequest {
        &self.envelope
    }

    /// Mutable access to the envelope
    pub fn envelope_mut(&mut self) -> &mut AckedRequest {
        &mut self.envelope
    }

    /// Set or clear the id
    pub fn set_id(&mut self, id: Option<String>) -> &mut Self {
        self.id = id;
        self
    }

    /// Set or clear the language
    pub fn set_lang(&mut self, lang: Option<String>) -> &mut Self {
        self.lang = lang;
        self
    }

    /// Set or clear the script body
    pub fn set_content(&mut self, content: Option<Vec<u8>>) -> &mut Self {
        self.content = content;
        self
    }

    /// Check every field rule, collecting all violations
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self.id.as_deref() {
            None | Some("") => errors.push(ValidationError::MissingId),
            Some(id) if id.contains(SCRIPT_REF_DELIMITER) => {
                errors.push(ValidationError::IdContainsDelimiter)
            }
            Some(_) => {}
        }

        if self
            .lang
            .as_deref()
            .is_some_and(|lang| lang.contains(SCRIPT_REF_DELIMITER))
        {
            errors.push(ValidationError::LangContainsDelimiter);
        }

        if self.content.is_none() {
            errors.push(ValidationError::MissingContent);
        }

        errors.into_result()
    }

    /// Key the script is stored under: `lang#id`, or just `id` without a lang
    ///
    /// Only meaningful for a request that passed validation.
    pub fn storage_key(&self) -> Option<String> {
        let id = self.id.as_deref()?;
        Some(match self.lang.as_deref() {
            Some(lang) => format!("{lang}{SCRIPT_REF_DELIMITER}{id}"),
            None => id.to_string(),
        })
    }

    /// Consume into `(envelope, id, lang, content)`
    pub fn into_parts(
        self,
    ) -> (
        AckedRequest,
        Option<String>,
        Option<String>,
        Option<Vec<u8>>,
    ) {
        (self.envelope, self.id, self.lang, self.content)
    }
}

// Diagnostic form for logs; never the wire form
impl fmt::Display for StoredScriptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = render_content(self.content.as_deref().unwrap_or_default());
        write!(f, "put stored script {{id [{}]", self.id.as_deref().unwrap_or("null"))?;
        if let Some(lang) = &self.lang {
            write!(f, ", lang [{}]", lang)?;
        }
        write!(f, ", content [{}]}}", content)
    }
}

/// Fluent builder for [`StoredScriptRequest`]
///
/// `build` does not validate; call [`StoredScriptRequest::validate`].
#[derive(Debug, Clone, Default)]
pub struct StoredScriptRequestBuilder {
    envelope: AckedRequest,
    id: Option<String>,
    lang: Option<String>,
    content: Option<Vec<u8>>,
}

impl StoredScriptRequestBuilder {
    /// Set the script id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the script language
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the script body
    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the acknowledgement timeout
    pub fn ack_timeout(mut self, timeout: TimeValue) -> Self {
        self.envelope.ack_timeout = timeout;
        self
    }

    /// Set the coordinating-node timeout
    pub fn master_node_timeout(mut self, timeout: TimeValue) -> Self {
        self.envelope.master_node_timeout = timeout;
        self
    }

    /// Set the parent task
    pub fn parent_task(mut self, task: TaskId) -> Self {
        self.envelope.parent_task = task;
        self
    }

    /// Finish building
    pub fn build(self) -> StoredScriptRequest {
        StoredScriptRequest {
            envelope: self.envelope,
            id: self.id,
            lang: self.lang,
            content: self.content,
        }
    }
}
