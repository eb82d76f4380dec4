use serde::{Deserialize, Serialize};

use super::{NodeId, Status, SubTask};

/// A root-level unit of work.
///
/// Structurally parallel to [`super::Story`] but without the narrative
/// fields. Tasks only ever appear in the root `tasks` collection, never
/// under an epic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip)]
    pub id: Option<NodeId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
    #[serde(
        default,
        rename = "definition of done",
        deserialize_with = "crate::yaml::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub definition_of_done: Vec<String>,
    #[serde(
        default,
        rename = "sub tasks",
        deserialize_with = "crate::yaml::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_tasks: Vec<SubTask>,
}

/// Input for creating a new root-level task.
///
/// `status` defaults to [`Status::Todo`] when not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub points: Option<u32>,
    pub sprint: Option<String>,
    pub definition_of_done: Vec<String>,
}

impl NewTask {
    pub(crate) fn build(self, id: NodeId) -> Task {
        Task {
            id: Some(id),
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or_default(),
            points: self.points,
            sprint: self.sprint,
            definition_of_done: self.definition_of_done,
            sub_tasks: Vec::new(),
        }
    }
}
