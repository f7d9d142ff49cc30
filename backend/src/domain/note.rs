//! Note data model.
//!
//! Notes are immutable once stored: they are created, read, and deleted, but
//! never updated in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the note constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// The `content` field was absent from the payload.
    MissingContent,
    /// The `content` field was present but blank once trimmed.
    EmptyContent,
    /// The note identifier was empty.
    EmptyId,
    /// The note identifier did not parse as a UUID.
    MalformedId,
}

impl fmt::Display for NoteValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent => write!(f, "content is required"),
            Self::EmptyContent => write!(f, "content must not be empty"),
            Self::EmptyId => write!(f, "note id must not be empty"),
            Self::MalformedId => write!(f, "note id must be a valid UUID"),
        }
    }
}

impl std::error::Error for NoteValidationError {}

/// Stable note identifier stored as a UUID.
///
/// Parsing distinguishes a malformed identifier (wrong shape or charset) from
/// a well-formed identifier with no matching record; the two map to different
/// HTTP statuses and must never be conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(Uuid, String);

impl NoteId {
    /// Validate and construct a [`NoteId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, NoteValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`NoteId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, NoteValidationError> {
        if id.is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(NoteValidationError::MalformedId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| NoteValidationError::MalformedId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<NoteId> for String {
    fn from(value: NoteId) -> Self {
        let NoteId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for NoteId {
    type Error = NoteValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Body text of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteContent(String);

impl NoteContent {
    /// Validate and construct a [`NoteContent`] from owned input.
    pub fn new(content: impl Into<String>) -> Result<Self, NoteValidationError> {
        Self::from_owned(content.into())
    }

    fn from_owned(content: String) -> Result<Self, NoteValidationError> {
        if content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(Self(content))
    }
}

impl AsRef<str> for NoteContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NoteContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<NoteContent> for String {
    fn from(value: NoteContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for NoteContent {
    type Error = NoteValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated payload for creating a note.
///
/// The store assigns the identifier, so a draft carries only the caller
/// supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    content: NoteContent,
    important: bool,
}

impl NoteDraft {
    /// Build a draft from raw payload fields.
    ///
    /// A missing `content` field and a blank one are distinct failures so the
    /// response can name the exact violation. `important` defaults to `false`
    /// when omitted.
    pub fn try_from_parts(
        content: Option<String>,
        important: Option<bool>,
    ) -> Result<Self, NoteValidationError> {
        let content = content.ok_or(NoteValidationError::MissingContent)?;
        Ok(Self {
            content: NoteContent::new(content)?,
            important: important.unwrap_or(false),
        })
    }

    /// Note body text.
    pub fn content(&self) -> &NoteContent {
        &self.content
    }

    /// Importance flag.
    pub fn important(&self) -> bool {
        self.important
    }

    /// Decompose the draft into its parts for storage.
    pub fn into_parts(self) -> (NoteContent, bool) {
        (self.content, self.important)
    }
}

/// Stored note.
///
/// ## Invariants
/// - `id` is a valid UUID, unique within the store, immutable once assigned.
/// - `content` is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "NoteDto", into = "NoteDto")]
pub struct Note {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: NoteId,
    #[schema(value_type = String, example = "Browser can only execute javascript")]
    content: NoteContent,
    important: bool,
}

impl Note {
    /// Build a new [`Note`] from validated components.
    pub fn new(id: NoteId, content: NoteContent, important: bool) -> Self {
        Self {
            id,
            content,
            important,
        }
    }

    /// Materialize a draft with a freshly assigned identifier.
    pub fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        let (content, important) = draft.into_parts();
        Self::new(id, content, important)
    }

    /// Stable note identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Note body text.
    pub fn content(&self) -> &NoteContent {
        &self.content
    }

    /// Importance flag.
    pub fn important(&self) -> bool {
        self.important
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NoteDto {
    id: String,
    content: String,
    important: bool,
}

impl From<Note> for NoteDto {
    fn from(value: Note) -> Self {
        let Note {
            id,
            content,
            important,
        } = value;
        Self {
            id: id.into(),
            content: content.into(),
            important,
        }
    }
}

impl TryFrom<NoteDto> for Note {
    type Error = NoteValidationError;

    fn try_from(value: NoteDto) -> Result<Self, Self::Error> {
        Ok(Note::new(
            NoteId::new(value.id)?,
            NoteContent::new(value.content)?,
            value.important,
        ))
    }
}

#[cfg(test)]
mod tests;
