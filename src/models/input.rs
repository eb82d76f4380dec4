use serde::{Deserialize, Serialize};

use super::{NewEpic, NewStory, NewSubTask, NewTask, Status};

/// A new item of any kind, for [`crate::Session::insert`].
///
/// The variant doubles as the explicit type discriminant: there is no
/// shape-sniffing anywhere to decide what a value is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NewItem {
    Epic(NewEpic),
    Story(NewStory),
    Task(NewTask),
    SubTask(NewSubTask),
}

/// Input for updating an item located by id. All fields are optional for
/// partial updates; absent fields keep their existing values and the id
/// is always preserved.
///
/// Fields that do not exist on the located node's type (points on an
/// epic, the narrative fields on a task) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub points: Option<u32>,
    pub sprint: Option<String>,
    pub as_a: Option<String>,
    pub i_want: Option<String>,
    pub so_that: Option<String>,
    pub definition_of_done: Option<Vec<String>>,
}
