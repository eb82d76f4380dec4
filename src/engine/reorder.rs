//! Drag-and-drop style move: reorder within a collection or reparent onto
//! a container node.
//!
//! Drag gestures routinely produce invalid drops, so nothing in here is
//! an error: a move that cannot be applied puts the dragged node back
//! where it came from and reports `false`.

use crate::models::{Epic, NodeId, Story, StoryFile, SubTask, Task};

use super::locate::{locate, Role};

/// A node removed from its collection while a move is in flight.
enum Detached {
    Epic(Epic),
    Story(Story),
    Task(Task),
    SubTask(SubTask),
}

/// Where a detached node came from, for reverting an illegal move.
enum Origin {
    RootEpics(usize),
    RootTasks(usize),
    Stories { epic: NodeId, index: usize },
    SubTasks { parent: NodeId, index: usize },
}

/// Index path to a `sub tasks` collection, by its owning node.
enum SubOwner {
    Story { epic: usize, story: usize },
    Task { task: usize },
}

/// Move `active` onto `over`.
///
/// If `over` is a legal container for `active` (story onto epic,
/// sub-task onto story or task) the node is appended to the end of the
/// container's child collection. Otherwise `over` names a sibling
/// position and `active` is inserted at `over`'s index, provided the
/// destination collection can hold `active`'s kind. Anything else
/// reverts and returns `false`.
pub(crate) fn move_item(file: &mut StoryFile, active: NodeId, over: NodeId) -> bool {
    if active == over {
        return false;
    }
    let Some((item, origin)) = detach(file, active) else {
        return false;
    };

    // Resolve the drop target after detaching: a target inside the moved
    // subtree reads as missing here and the move reverts instead of
    // inserting the node into its own descendants.
    let (over_role, over_parent) = match locate(file, over) {
        Some(found) => (found.role, found.parent.and_then(|p| p.id())),
        None => {
            restore(file, item, origin);
            return false;
        }
    };

    match item {
        Detached::Story(story) => {
            if over_role == Role::Epic {
                // Dropped onto an epic: append to its stories.
                if let Some(epic) = epic_index(file, over) {
                    file.epics[epic].stories.push(story);
                    return true;
                }
            } else if over_role == Role::Story {
                // Dropped onto a sibling story: insert at its index.
                if let Some((epic, index)) = story_slot(file, over_parent, over) {
                    file.epics[epic].stories.insert(index, story);
                    return true;
                }
            }
            restore(file, Detached::Story(story), origin);
            false
        }
        Detached::SubTask(sub) => {
            if over_role == Role::Story || over_role == Role::Task {
                // Dropped onto a story or task: append to its sub tasks.
                if let Some(owner) = sub_owner(file, over) {
                    sub_list_mut(file, owner).push(sub);
                    return true;
                }
            } else if over_role == Role::SubTask {
                // Dropped onto a sibling sub-task: insert at its index.
                if let Some((owner, index)) = sub_slot(file, over_parent, over) {
                    sub_list_mut(file, owner).insert(index, sub);
                    return true;
                }
            }
            restore(file, Detached::SubTask(sub), origin);
            false
        }
        Detached::Epic(epic) => {
            // Epics only reorder among root epics.
            if over_role == Role::Epic {
                if let Some(index) = epic_index(file, over) {
                    file.epics.insert(index, epic);
                    return true;
                }
            }
            restore(file, Detached::Epic(epic), origin);
            false
        }
        Detached::Task(task) => {
            // Root tasks only reorder among root tasks.
            if over_role == Role::Task {
                if let Some(index) = task_index(file, over) {
                    file.tasks.insert(index, task);
                    return true;
                }
            }
            restore(file, Detached::Task(task), origin);
            false
        }
    }
}

/// Remove a node from its containing collection, remembering where it
/// sat. Search order matches [`locate`]: epics subtree, then tasks.
fn detach(file: &mut StoryFile, id: NodeId) -> Option<(Detached, Origin)> {
    if let Some(index) = file.epics.iter().position(|e| e.id == Some(id)) {
        return Some((
            Detached::Epic(file.epics.remove(index)),
            Origin::RootEpics(index),
        ));
    }
    for epic in &mut file.epics {
        let found = epic.stories.iter().position(|s| s.id == Some(id));
        if let (Some(index), Some(pid)) = (found, epic.id) {
            return Some((
                Detached::Story(epic.stories.remove(index)),
                Origin::Stories { epic: pid, index },
            ));
        }
        for story in &mut epic.stories {
            let found = story.sub_tasks.iter().position(|s| s.id == Some(id));
            if let (Some(index), Some(pid)) = (found, story.id) {
                return Some((
                    Detached::SubTask(story.sub_tasks.remove(index)),
                    Origin::SubTasks { parent: pid, index },
                ));
            }
        }
    }
    if let Some(index) = file.tasks.iter().position(|t| t.id == Some(id)) {
        return Some((
            Detached::Task(file.tasks.remove(index)),
            Origin::RootTasks(index),
        ));
    }
    for task in &mut file.tasks {
        let found = task.sub_tasks.iter().position(|s| s.id == Some(id));
        if let (Some(index), Some(pid)) = (found, task.id) {
            return Some((
                Detached::SubTask(task.sub_tasks.remove(index)),
                Origin::SubTasks { parent: pid, index },
            ));
        }
    }
    None
}

/// Reinsert a detached node at its original position. Nothing else moved
/// between detach and restore, so the remembered index is still in range.
fn restore(file: &mut StoryFile, item: Detached, origin: Origin) {
    match (item, origin) {
        (Detached::Epic(epic), Origin::RootEpics(index)) => file.epics.insert(index, epic),
        (Detached::Task(task), Origin::RootTasks(index)) => file.tasks.insert(index, task),
        (Detached::Story(story), Origin::Stories { epic, index }) => {
            if let Some(ei) = epic_index(file, epic) {
                file.epics[ei].stories.insert(index, story);
            }
        }
        (Detached::SubTask(sub), Origin::SubTasks { parent, index }) => {
            if let Some(owner) = sub_owner(file, parent) {
                sub_list_mut(file, owner).insert(index, sub);
            }
        }
        // Mismatched shapes cannot come out of detach.
        _ => {}
    }
}

fn epic_index(file: &StoryFile, id: NodeId) -> Option<usize> {
    file.epics.iter().position(|e| e.id == Some(id))
}

fn task_index(file: &StoryFile, id: NodeId) -> Option<usize> {
    file.tasks.iter().position(|t| t.id == Some(id))
}

/// Index path of a story by its own id, constrained to the epic the
/// locator reported as its parent.
fn story_slot(file: &StoryFile, parent: Option<NodeId>, id: NodeId) -> Option<(usize, usize)> {
    let epic = epic_index(file, parent?)?;
    let index = file.epics[epic].stories.iter().position(|s| s.id == Some(id))?;
    Some((epic, index))
}

/// Index path to the `sub tasks` list owned by the story or task `id`.
fn sub_owner(file: &StoryFile, id: NodeId) -> Option<SubOwner> {
    for (ei, epic) in file.epics.iter().enumerate() {
        if let Some(si) = epic.stories.iter().position(|s| s.id == Some(id)) {
            return Some(SubOwner::Story { epic: ei, story: si });
        }
    }
    file.tasks
        .iter()
        .position(|t| t.id == Some(id))
        .map(|task| SubOwner::Task { task })
}

/// Index path of a sub-task by its own id, constrained to the parent the
/// locator reported.
fn sub_slot(file: &StoryFile, parent: Option<NodeId>, id: NodeId) -> Option<(SubOwner, usize)> {
    let owner = sub_owner(file, parent?)?;
    let index = sub_list(file, &owner)
        .iter()
        .position(|s| s.id == Some(id))?;
    Some((owner, index))
}

fn sub_list<'a>(file: &'a StoryFile, owner: &SubOwner) -> &'a [SubTask] {
    match owner {
        SubOwner::Story { epic, story } => &file.epics[*epic].stories[*story].sub_tasks,
        SubOwner::Task { task } => &file.tasks[*task].sub_tasks,
    }
}

fn sub_list_mut(file: &mut StoryFile, owner: SubOwner) -> &mut Vec<SubTask> {
    match owner {
        SubOwner::Story { epic, story } => &mut file.epics[epic].stories[story].sub_tasks,
        SubOwner::Task { task } => &mut file.tasks[task].sub_tasks,
    }
}
