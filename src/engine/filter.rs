//! Read-only filtered views of a forest.

use crate::models::{Status, Story, StoryFile, Task};

/// Filter criteria for deriving a view of the backlog.
///
/// Empty criteria match everything. The keyword is matched
/// case-insensitively against titles and descriptions.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub statuses: Vec<Status>,
    pub sprint: Option<String>,
    pub keyword: Option<String>,
}

impl FilterQuery {
    fn keyword_matches(&self, title: &str, description: Option<&str>) -> bool {
        let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) else {
            return true;
        };
        let keyword = keyword.to_lowercase();
        title.to_lowercase().contains(&keyword)
            || description
                .map(|d| d.to_lowercase().contains(&keyword))
                .unwrap_or(false)
    }

    fn status_matches(&self, status: Status) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&status)
    }

    fn sprint_matches(&self, sprint: Option<&str>) -> bool {
        match self.sprint.as_deref().filter(|s| !s.is_empty()) {
            Some(wanted) => sprint == Some(wanted),
            None => true,
        }
    }

    fn story_matches(&self, story: &Story) -> bool {
        self.keyword_matches(&story.title, story.description.as_deref())
            && self.status_matches(story.status)
            && self.sprint_matches(story.sprint.as_deref())
    }

    fn task_matches(&self, task: &Task) -> bool {
        self.keyword_matches(&task.title, task.description.as_deref())
            && self.status_matches(task.status)
            && self.sprint_matches(task.sprint.as_deref())
    }
}

/// Derive a filtered copy of the forest. The input is never mutated and
/// the result must not be fed back into the mutation engine.
///
/// An epic survives if its own title or description matches the keyword,
/// or if at least one of its stories passes the combined filter; its
/// story list is the filtered one either way. Status and sprint criteria
/// do not apply to epics themselves. Sub-tasks ride along with a kept
/// parent unfiltered.
pub(crate) fn filter(file: &StoryFile, query: &FilterQuery) -> StoryFile {
    let epics = file
        .epics
        .iter()
        .filter_map(|epic| {
            let stories: Vec<Story> = epic
                .stories
                .iter()
                .filter(|story| query.story_matches(story))
                .cloned()
                .collect();
            let epic_matches = query.keyword_matches(&epic.title, epic.description.as_deref());
            if epic_matches || !stories.is_empty() {
                let mut kept = epic.clone();
                kept.stories = stories;
                Some(kept)
            } else {
                None
            }
        })
        .collect();

    let tasks = file
        .tasks
        .iter()
        .filter(|task| query.task_matches(task))
        .cloned()
        .collect();

    StoryFile { epics, tasks }
}
