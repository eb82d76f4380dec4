//! Tree locator: find a node, its parent and its structural role by id.

use crate::models::{Epic, NodeId, Status, Story, StoryFile, SubTask, Task};

/// The structural position of a node within the forest.
///
/// With typed nodes the role follows from the type, but move legality is
/// phrased in terms of roles, so the locator reports it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Epic,
    Story,
    Task,
    SubTask,
}

/// Immutable reference to a located node of any kind.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Epic(&'a Epic),
    Story(&'a Story),
    Task(&'a Task),
    SubTask(&'a SubTask),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Self::Epic(e) => e.id,
            Self::Story(s) => s.id,
            Self::Task(t) => t.id,
            Self::SubTask(s) => s.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Self::Epic(e) => &e.title,
            Self::Story(s) => &s.title,
            Self::Task(t) => &t.title,
            Self::SubTask(s) => &s.title,
        }
    }

    /// The node's status, if its kind carries one. Epics do not.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Epic(_) => None,
            Self::Story(s) => Some(s.status),
            Self::Task(t) => Some(t.status),
            Self::SubTask(s) => Some(s.status),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Epic(_) => Role::Epic,
            Self::Story(_) => Role::Story,
            Self::Task(_) => Role::Task,
            Self::SubTask(_) => Role::SubTask,
        }
    }
}

/// Immutable reference to a located node's immediate parent.
///
/// Only node kinds that own child collections appear here; a `None`
/// parent in [`Located`] means the node sits in a root collection.
#[derive(Debug, Clone, Copy)]
pub enum ParentRef<'a> {
    Epic(&'a Epic),
    Story(&'a Story),
    Task(&'a Task),
}

impl<'a> ParentRef<'a> {
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Self::Epic(e) => e.id,
            Self::Story(s) => s.id,
            Self::Task(t) => t.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Self::Epic(e) => &e.title,
            Self::Story(s) => &s.title,
            Self::Task(t) => &t.title,
        }
    }
}

/// Result of a successful [`locate`] call.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: NodeRef<'a>,
    /// `None` for nodes in the root `epics`/`tasks` collections.
    pub parent: Option<ParentRef<'a>>,
    pub role: Role,
}

/// Pre-order depth-first search for a node by id, `epics` before `tasks`.
///
/// A miss is a normal outcome, not an error: ids vanish whenever the
/// document is reloaded.
pub fn locate(file: &StoryFile, id: NodeId) -> Option<Located<'_>> {
    for epic in &file.epics {
        if epic.id == Some(id) {
            return Some(Located {
                node: NodeRef::Epic(epic),
                parent: None,
                role: Role::Epic,
            });
        }
        for story in &epic.stories {
            if story.id == Some(id) {
                return Some(Located {
                    node: NodeRef::Story(story),
                    parent: Some(ParentRef::Epic(epic)),
                    role: Role::Story,
                });
            }
            for sub in &story.sub_tasks {
                if sub.id == Some(id) {
                    return Some(Located {
                        node: NodeRef::SubTask(sub),
                        parent: Some(ParentRef::Story(story)),
                        role: Role::SubTask,
                    });
                }
            }
        }
    }
    for task in &file.tasks {
        if task.id == Some(id) {
            return Some(Located {
                node: NodeRef::Task(task),
                parent: None,
                role: Role::Task,
            });
        }
        for sub in &task.sub_tasks {
            if sub.id == Some(id) {
                return Some(Located {
                    node: NodeRef::SubTask(sub),
                    parent: Some(ParentRef::Task(task)),
                    role: Role::SubTask,
                });
            }
        }
    }
    None
}
