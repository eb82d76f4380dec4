//! YAML round-trip for story documents.
//!
//! The adapter is deliberately thin: serde does the mapping, declaration
//! order of the struct fields gives the canonical key order, and
//! `#[serde(skip)]` on node ids keeps them out of the persisted form.
//! The one piece of shape coercion lives here: empty or null documents
//! and null collections normalize to empty sequences so the engine never
//! sees an absent collection.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::StoryFile;

/// Serialization adapter errors.
///
/// Parse failures are expected during editing (the document is usually
/// mid-keystroke invalid); callers keep the last good tree and surface
/// the message.
#[derive(Debug, Error)]
pub enum YamlError {
    #[error("failed to parse YAML: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize YAML: {0}")]
    Emit(#[source] serde_yaml::Error),
}

/// Parse YAML text into a [`StoryFile`].
///
/// An empty or null document yields an empty forest; ids are not
/// assigned here (see [`crate::Session::load`]).
pub fn parse(text: &str) -> Result<StoryFile, YamlError> {
    if text.trim().is_empty() {
        return Ok(StoryFile::default());
    }
    let doc: Option<StoryFile> = serde_yaml::from_str(text).map_err(YamlError::Parse)?;
    Ok(doc.unwrap_or_default())
}

/// Emit a [`StoryFile`] as canonical YAML text.
pub fn emit(file: &StoryFile) -> Result<String, YamlError> {
    serde_yaml::to_string(file).map_err(YamlError::Emit)
}

/// Deserialize a sequence field treating an explicit null as empty.
///
/// Hand-written documents often leave `stories:` or `sub tasks:` with no
/// value, which parses as null rather than as an empty sequence.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
