//! The editing engine: a per-document session owning the forest, the id
//! counter, and the mutation operations.
//!
//! Not-found conditions are silent no-ops by contract: the UI that feeds
//! this engine races against document reloads, so a stale id is a normal
//! outcome. Every mutation reports whether it applied, which lets the
//! caller surface a message without changing the no-op default.

mod filter;
mod locate;
mod reorder;

pub use filter::FilterQuery;
pub use locate::{locate, Located, NodeRef, ParentRef, Role};

use crate::models::{
    Epic, NewItem, NodeId, Story, StoryFile, SubTask, Task, UpdateItemInput,
};
use crate::yaml::{self, YamlError};

/// A loaded document plus its id counter.
///
/// The session is the unit of exclusive ownership: all operations take
/// `&self`/`&mut self`, so callers serialize mutations by construction.
/// Ids restart from zero on every [`Session::load`]; they are assigned
/// in depth-first document order, which makes them stable across loads
/// of an unchanged document.
#[derive(Debug)]
pub struct Session {
    file: StoryFile,
    next_id: u64,
}

impl Session {
    /// Parse a document and assign ids to every node.
    pub fn load(text: &str) -> Result<Self, YamlError> {
        let mut file = yaml::parse(text)?;
        let mut next_id = 0;
        assign_ids(&mut file, &mut next_id);
        Ok(Self { file, next_id })
    }

    /// Emit the document as YAML. Ids never appear in the output.
    pub fn save(&self) -> Result<String, YamlError> {
        yaml::emit(&self.file)
    }

    pub fn file(&self) -> &StoryFile {
        &self.file
    }

    pub fn into_file(self) -> StoryFile {
        self.file
    }

    /// Find a node, its parent and its role by id.
    pub fn locate(&self, id: NodeId) -> Option<Located<'_>> {
        locate(&self.file, id)
    }

    /// Insert a new item, appending to the relevant collection.
    ///
    /// Epics and tasks always append at the root and ignore `parent`.
    /// Stories require `parent` to resolve to an epic; sub-tasks require
    /// it to resolve to a story or root task. Returns the new node's id,
    /// or `None` when the parent was missing and the item was dropped.
    pub fn insert(&mut self, parent: Option<NodeId>, item: NewItem) -> Option<NodeId> {
        match item {
            NewItem::Epic(epic) => {
                let id = self.alloc();
                self.file.epics.push(epic.build(id));
                Some(id)
            }
            NewItem::Task(task) => {
                let id = self.alloc();
                self.file.tasks.push(task.build(id));
                Some(id)
            }
            NewItem::Story(story) => {
                let parent = epic_mut(&mut self.file, parent?)?;
                let id = NodeId::from(self.next_id);
                self.next_id += 1;
                parent.stories.push(story.build(id));
                Some(id)
            }
            NewItem::SubTask(sub) => {
                let list = sub_tasks_mut(&mut self.file, parent?)?;
                let id = NodeId::from(self.next_id);
                self.next_id += 1;
                list.push(sub.build(id));
                Some(id)
            }
        }
    }

    /// Shallow-merge `input` into the node matching `id`.
    ///
    /// Absent fields keep their existing values, fields the node's kind
    /// does not have are ignored, and the id is always preserved.
    /// Returns `false` (leaving the forest unchanged) when no node
    /// matches.
    pub fn update(&mut self, id: NodeId, input: UpdateItemInput) -> bool {
        for epic in &mut self.file.epics {
            if epic.id == Some(id) {
                apply_to_epic(epic, &input);
                return true;
            }
            for story in &mut epic.stories {
                if story.id == Some(id) {
                    apply_to_story(story, &input);
                    return true;
                }
                for sub in &mut story.sub_tasks {
                    if sub.id == Some(id) {
                        apply_to_subtask(sub, &input);
                        return true;
                    }
                }
            }
        }
        for task in &mut self.file.tasks {
            if task.id == Some(id) {
                apply_to_task(task, &input);
                return true;
            }
            for sub in &mut task.sub_tasks {
                if sub.id == Some(id) {
                    apply_to_subtask(sub, &input);
                    return true;
                }
            }
        }
        false
    }

    /// Remove the node matching `id` from its containing collection.
    ///
    /// Children go with it. Returns `false` when no node matches.
    pub fn delete(&mut self, id: NodeId) -> bool {
        let epics = &mut self.file.epics;
        if let Some(index) = epics.iter().position(|e| e.id == Some(id)) {
            epics.remove(index);
            return true;
        }
        for epic in epics.iter_mut() {
            if let Some(index) = epic.stories.iter().position(|s| s.id == Some(id)) {
                epic.stories.remove(index);
                return true;
            }
            for story in &mut epic.stories {
                if let Some(index) = story.sub_tasks.iter().position(|s| s.id == Some(id)) {
                    story.sub_tasks.remove(index);
                    return true;
                }
            }
        }
        let tasks = &mut self.file.tasks;
        if let Some(index) = tasks.iter().position(|t| t.id == Some(id)) {
            tasks.remove(index);
            return true;
        }
        for task in tasks.iter_mut() {
            if let Some(index) = task.sub_tasks.iter().position(|s| s.id == Some(id)) {
                task.sub_tasks.remove(index);
                return true;
            }
        }
        false
    }

    /// Move `active` onto `over` (reorder or reparent). A legal container
    /// drop appends to the target's children; a legal sibling drop inserts
    /// at the target's index; everything else reverts and returns `false`.
    pub fn move_item(&mut self, active: NodeId, over: NodeId) -> bool {
        reorder::move_item(&mut self.file, active, over)
    }

    /// Derive a read-only filtered copy of the forest. The copy is a
    /// view: it must not be saved or mutated further.
    pub fn filter(&self, query: &FilterQuery) -> StoryFile {
        filter::filter(&self.file, query)
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId::from(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Assign ids in depth-first document order: each epic, then its stories
/// and their sub-tasks, then the root tasks and their sub-tasks.
fn assign_ids(file: &mut StoryFile, next: &mut u64) {
    let mut alloc = || {
        let id = NodeId::from(*next);
        *next += 1;
        Some(id)
    };
    for epic in &mut file.epics {
        epic.id = alloc();
        for story in &mut epic.stories {
            story.id = alloc();
            for sub in &mut story.sub_tasks {
                sub.id = alloc();
            }
        }
    }
    for task in &mut file.tasks {
        task.id = alloc();
        for sub in &mut task.sub_tasks {
            sub.id = alloc();
        }
    }
}

fn apply_to_epic(epic: &mut Epic, input: &UpdateItemInput) {
    if let Some(title) = &input.title {
        epic.title = title.clone();
    }
    if let Some(description) = &input.description {
        epic.description = Some(description.clone());
    }
}

fn apply_to_story(story: &mut Story, input: &UpdateItemInput) {
    if let Some(title) = &input.title {
        story.title = title.clone();
    }
    if let Some(description) = &input.description {
        story.description = Some(description.clone());
    }
    if let Some(status) = input.status {
        story.status = status;
    }
    if let Some(points) = input.points {
        story.points = Some(points);
    }
    if let Some(sprint) = &input.sprint {
        story.sprint = Some(sprint.clone());
    }
    if let Some(as_a) = &input.as_a {
        story.as_a = Some(as_a.clone());
    }
    if let Some(i_want) = &input.i_want {
        story.i_want = Some(i_want.clone());
    }
    if let Some(so_that) = &input.so_that {
        story.so_that = Some(so_that.clone());
    }
    if let Some(dod) = &input.definition_of_done {
        story.definition_of_done = dod.clone();
    }
}

fn apply_to_task(task: &mut Task, input: &UpdateItemInput) {
    if let Some(title) = &input.title {
        task.title = title.clone();
    }
    if let Some(description) = &input.description {
        task.description = Some(description.clone());
    }
    if let Some(status) = input.status {
        task.status = status;
    }
    if let Some(points) = input.points {
        task.points = Some(points);
    }
    if let Some(sprint) = &input.sprint {
        task.sprint = Some(sprint.clone());
    }
    if let Some(dod) = &input.definition_of_done {
        task.definition_of_done = dod.clone();
    }
}

fn apply_to_subtask(sub: &mut SubTask, input: &UpdateItemInput) {
    if let Some(title) = &input.title {
        sub.title = title.clone();
    }
    if let Some(description) = &input.description {
        sub.description = Some(description.clone());
    }
    if let Some(status) = input.status {
        sub.status = status;
    }
}

/// Root epic by id. Only root epics can parent stories.
fn epic_mut(file: &mut StoryFile, id: NodeId) -> Option<&mut Epic> {
    file.epics.iter_mut().find(|e| e.id == Some(id))
}

/// The `sub tasks` list of the story or root task matching `id`.
fn sub_tasks_mut(file: &mut StoryFile, id: NodeId) -> Option<&mut Vec<SubTask>> {
    for epic in &mut file.epics {
        for story in &mut epic.stories {
            if story.id == Some(id) {
                return Some(&mut story.sub_tasks);
            }
        }
    }
    for task in &mut file.tasks {
        if task.id == Some(id) {
            return Some(&mut task.sub_tasks);
        }
    }
    None
}
