//! ASCII tree rendering for backlog forests.

use crate::models::{NodeId, Status, StoryFile, SubTask};

const TODO: char = '○';
const WIP: char = '◐';
const DONE: char = '●';

/// Get the status symbol for a node status.
fn status_symbol(status: Status) -> char {
    match status {
        Status::Todo => TODO,
        Status::Wip => WIP,
        Status::Done => DONE,
    }
}

/// Render a forest as ASCII art with status symbols.
///
/// Epics and root tasks are the roots; epics render as bare titles since
/// they carry no status. With `show_ids`, each node gets its session id
/// appended, which is how CLI callers discover ids to target.
///
/// Example output:
/// ```text
/// Checkout
/// ├── ● Pay by card
/// ├── ○ Pay by invoice
/// │   ├── ○ Validate VAT id
/// │   └── ○ Send reminder mail
/// └── ◐ Order confirmation
/// ```
pub fn render_forest(file: &StoryFile, show_ids: bool) -> String {
    let mut output = String::new();
    for epic in &file.epics {
        push_root(&mut output, None, &epic.title, epic.id, show_ids);
        for (i, story) in epic.stories.iter().enumerate() {
            let is_last = i == epic.stories.len() - 1;
            push_child(
                &mut output,
                "",
                is_last,
                status_symbol(story.status),
                &story.title,
                story.id,
                show_ids,
            );
            let prefix = if is_last { "    " } else { "│   " };
            push_sub_tasks(&mut output, prefix, &story.sub_tasks, show_ids);
        }
    }
    for task in &file.tasks {
        push_root(
            &mut output,
            Some(status_symbol(task.status)),
            &task.title,
            task.id,
            show_ids,
        );
        push_sub_tasks(&mut output, "", &task.sub_tasks, show_ids);
    }
    output
}

fn push_sub_tasks(output: &mut String, prefix: &str, subs: &[SubTask], show_ids: bool) {
    for (i, sub) in subs.iter().enumerate() {
        push_child(
            output,
            prefix,
            i == subs.len() - 1,
            status_symbol(sub.status),
            &sub.title,
            sub.id,
            show_ids,
        );
    }
}

fn push_root(
    output: &mut String,
    symbol: Option<char>,
    title: &str,
    id: Option<NodeId>,
    show_ids: bool,
) {
    if let Some(symbol) = symbol {
        output.push(symbol);
        output.push(' ');
    }
    output.push_str(title);
    push_id(output, id, show_ids);
    output.push('\n');
}

fn push_child(
    output: &mut String,
    prefix: &str,
    is_last: bool,
    symbol: char,
    title: &str,
    id: Option<NodeId>,
    show_ids: bool,
) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push(symbol);
    output.push(' ');
    output.push_str(title);
    push_id(output, id, show_ids);
    output.push('\n');
}

fn push_id(output: &mut String, id: Option<NodeId>, show_ids: bool) {
    if show_ids {
        if let Some(id) = id {
            output.push_str(&format!(" [{}]", id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Session;

    fn load(text: &str) -> StoryFile {
        Session::load(text)
            .expect("Failed to load sample")
            .into_file()
    }

    #[test]
    fn test_epic_roots_without_symbols() {
        let file = load("epics:\n  - title: Checkout\n");
        assert_eq!(render_forest(&file, false), "Checkout\n");
    }

    #[test]
    fn test_stories_with_status_symbols() {
        let file = load(
            "epics:\n  - title: Checkout\n    stories:\n      - title: Pay by card\n        status: Done\n      - title: Pay by invoice\n        status: WIP\n",
        );
        assert_eq!(
            render_forest(&file, false),
            "Checkout\n├── ● Pay by card\n└── ◐ Pay by invoice\n"
        );
    }

    #[test]
    fn test_sub_tasks_nest_under_stories() {
        let file = load(
            "epics:\n  - title: Checkout\n    stories:\n      - title: Pay by invoice\n        sub tasks:\n          - title: Validate VAT id\n      - title: Confirmation\n        status: Done\n",
        );
        assert_eq!(
            render_forest(&file, false),
            "Checkout\n├── ○ Pay by invoice\n│   └── ○ Validate VAT id\n└── ● Confirmation\n"
        );
    }

    #[test]
    fn test_root_tasks_carry_symbols_and_ids() {
        let file = load("tasks:\n  - title: Set up CI\n    status: WIP\n");
        assert_eq!(render_forest(&file, true), "◐ Set up CI [0]\n");
    }
}
