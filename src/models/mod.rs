//! Domain models for story YAML documents.
//!
//! # Core Concepts
//!
//! A document is a two-collection forest (the [`StoryFile`]) at most four
//! levels deep:
//!
//! - [`Epic`]: top-level grouping of stories. Carries no status of its own.
//! - [`Story`]: a unit of user-facing work under an epic, with narrative
//!   fields ("as", "i want", "so that") and optional sub-tasks.
//! - [`Task`]: a root-level unit of work, structurally parallel to a story
//!   but without the narrative fields. Tasks are never nested under epics.
//! - [`SubTask`]: smallest unit, child of a story or task, no children.
//!
//! Field names with spaces (`i want`, `so that`, `definition of done`,
//! `sub tasks`) are part of the wire contract of existing documents and
//! are preserved verbatim through serde renames.
//!
//! Every node gets a [`NodeId`] when a document is loaded. Ids exist only
//! in memory; `#[serde(skip)]` keeps them out of persisted YAML.

mod epic;
mod id;
mod input;
mod status;
mod story;
mod subtask;
mod task;

pub use epic::*;
pub use id::*;
pub use input::*;
pub use status::*;
pub use story::*;
pub use subtask::*;
pub use task::*;

use serde::{Deserialize, Serialize};

/// Root container for a whole backlog document.
///
/// Both collections are always present in memory (empty, never absent),
/// which spares the mutation engine from null-handling. The persisted
/// form may omit empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryFile {
    #[serde(
        default,
        deserialize_with = "crate::yaml::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub epics: Vec<Epic>,
    #[serde(
        default,
        deserialize_with = "crate::yaml::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tasks: Vec<Task>,
}
