use serde::{Deserialize, Serialize};

use super::{NodeId, Story};

/// A top-level backlog item grouping multiple stories.
///
/// Epics carry no status, points or sprint of their own; those live on
/// the stories underneath.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    #[serde(skip)]
    pub id: Option<NodeId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::yaml::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub stories: Vec<Story>,
}

/// Input for creating a new epic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEpic {
    pub title: String,
    pub description: Option<String>,
}

impl NewEpic {
    pub(crate) fn build(self, id: NodeId) -> Epic {
        Epic {
            id: Some(id),
            title: self.title,
            description: self.description,
            stories: Vec::new(),
        }
    }
}
