use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyfile::engine::{FilterQuery, Session};
use storyfile::models::{
    NewEpic, NewItem, NewStory, NewSubTask, NewTask, NodeId, Status, UpdateItemInput,
};
use storyfile::render;

#[derive(Parser)]
#[command(name = "sfy")]
#[command(about = "Edit hierarchical backlog YAML (epics, stories, tasks)")]
struct Cli {
    /// Path to the story YAML document. A missing file reads as empty.
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the backlog as a tree, optionally filtered
    Tree {
        /// Show node ids (needed to target update/delete/move)
        #[arg(long)]
        ids: bool,

        /// Emit the (filtered) document as JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// Keep only items with one of these statuses (ToDo, WIP, Done)
        #[arg(long, value_delimiter = ',', value_parser = parse_status)]
        status: Vec<Status>,

        /// Keep only items in this sprint
        #[arg(long)]
        sprint: Option<String>,

        /// Keep only items whose title or description contains this text
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Add an epic at the root
    AddEpic {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a story under an epic
    AddStory {
        /// Id of the parent epic
        parent: NodeId,
        #[command(flatten)]
        fields: WorkItemArgs,
        #[arg(long = "as")]
        as_a: Option<String>,
        #[arg(long = "i-want")]
        i_want: Option<String>,
        #[arg(long = "so-that")]
        so_that: Option<String>,
    },
    /// Add a task at the root
    AddTask {
        #[command(flatten)]
        fields: WorkItemArgs,
    },
    /// Add a sub-task under a story or task
    AddSubtask {
        /// Id of the parent story or task
        parent: NodeId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,
    },
    /// Update fields of the item with the given id
    Update {
        id: NodeId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,
        #[arg(long)]
        points: Option<u32>,
        #[arg(long)]
        sprint: Option<String>,
    },
    /// Delete the item with the given id, children included
    Delete { id: NodeId },
    /// Move an item onto a new parent or sibling position
    Move {
        /// Id of the item being moved
        active: NodeId,
        /// Id of the drop target (container or sibling)
        over: NodeId,
    },
}

/// Flags shared by stories and tasks.
#[derive(Args)]
struct WorkItemArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, value_parser = parse_status)]
    status: Option<Status>,
    #[arg(long)]
    points: Option<u32>,
    #[arg(long)]
    sprint: Option<String>,
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::from_str(s).ok_or_else(|| format!("unknown status '{}' (expected ToDo, WIP or Done)", s))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "storyfile=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = match std::fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", cli.file.display()))
        }
    };
    let mut session =
        Session::load(&text).with_context(|| format!("failed to load {}", cli.file.display()))?;

    match cli.command {
        Commands::Tree {
            ids,
            json,
            status,
            sprint,
            keyword,
        } => {
            let query = FilterQuery {
                statuses: status,
                sprint,
                keyword,
            };
            let view = session.filter(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::render_forest(&view, ids));
            }
            return Ok(());
        }
        Commands::AddEpic { title, description } => {
            let item = NewItem::Epic(NewEpic { title, description });
            report_insert(session.insert(None, item));
        }
        Commands::AddStory {
            parent,
            fields,
            as_a,
            i_want,
            so_that,
        } => {
            let item = NewItem::Story(NewStory {
                title: fields.title,
                as_a,
                i_want,
                so_that,
                description: fields.description,
                status: fields.status,
                points: fields.points,
                sprint: fields.sprint,
                definition_of_done: Vec::new(),
            });
            report_insert(session.insert(Some(parent), item));
        }
        Commands::AddTask { fields } => {
            let item = NewItem::Task(NewTask {
                title: fields.title,
                description: fields.description,
                status: fields.status,
                points: fields.points,
                sprint: fields.sprint,
                definition_of_done: Vec::new(),
            });
            report_insert(session.insert(None, item));
        }
        Commands::AddSubtask {
            parent,
            title,
            description,
            status,
        } => {
            let item = NewItem::SubTask(NewSubTask {
                title,
                description,
                status,
            });
            report_insert(session.insert(Some(parent), item));
        }
        Commands::Update {
            id,
            title,
            description,
            status,
            points,
            sprint,
        } => {
            let input = UpdateItemInput {
                title,
                description,
                status,
                points,
                sprint,
                ..Default::default()
            };
            if !session.update(id, input) {
                tracing::warn!("no item with id {}, nothing updated", id);
            }
        }
        Commands::Delete { id } => {
            if !session.delete(id) {
                tracing::warn!("no item with id {}, nothing deleted", id);
            }
        }
        Commands::Move { active, over } => {
            if !session.move_item(active, over) {
                tracing::warn!("move of {} onto {} is not legal, document unchanged", active, over);
            }
        }
    }

    let out = session.save()?;
    std::fs::write(&cli.file, out)
        .with_context(|| format!("failed to write {}", cli.file.display()))?;
    Ok(())
}

fn report_insert(id: Option<NodeId>) {
    match id {
        Some(id) => tracing::info!("added item with id {} (ids reset on next load)", id),
        None => tracing::warn!("parent not found, item dropped"),
    }
}
