use serde::{Deserialize, Serialize};

use super::{NodeId, Status};

/// The smallest unit of work, child of a story or task. Leaf node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    #[serde(skip)]
    pub id: Option<NodeId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// Input for creating a new sub-task under a story or task.
///
/// `status` defaults to [`Status::Todo`] when not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSubTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl NewSubTask {
    pub(crate) fn build(self, id: NodeId) -> SubTask {
        SubTask {
            id: Some(id),
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or_default(),
        }
    }
}
