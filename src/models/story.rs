use serde::{Deserialize, Serialize};

use super::{NodeId, Status, SubTask};

/// A unit of user-facing work under an epic.
///
/// Stories carry the user-story narrative ("As a... I want... So that...")
/// split over three optional fields whose YAML keys contain spaces. Field
/// declaration order here is the canonical key order of the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(skip)]
    pub id: Option<NodeId>,
    pub title: String,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_a: Option<String>,
    #[serde(default, rename = "i want", skip_serializing_if = "Option::is_none")]
    pub i_want: Option<String>,
    #[serde(default, rename = "so that", skip_serializing_if = "Option::is_none")]
    pub so_that: Option<String>,
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

/// Input for creating a new story under an epic.
///
/// `status` defaults to [`Status::Todo`] when not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStory {
    pub title: String,
    pub as_a: Option<String>,
    pub i_want: Option<String>,
    pub so_that: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub points: Option<u32>,
    pub sprint: Option<String>,
    pub definition_of_done: Vec<String>,
}

impl NewStory {
    pub(crate) fn build(self, id: NodeId) -> Story {
        Story {
            id: Some(id),
            title: self.title,
            as_a: self.as_a,
            i_want: self.i_want,
            so_that: self.so_that,
            description: self.description,
            status: self.status.unwrap_or_default(),
            points: self.points,
            sprint: self.sprint,
            definition_of_done: self.definition_of_done,
            sub_tasks: Vec::new(),
        }
    }
}
