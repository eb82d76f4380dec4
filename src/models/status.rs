use serde::{Deserialize, Serialize};

/// The workflow status of a story, task, or sub-task.
///
/// The wire values are exactly `"ToDo"`, `"WIP"` and `"Done"`; no other
/// casing or synonyms are accepted. A missing status deserializes to
/// `ToDo`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    #[serde(rename = "ToDo")]
    Todo,
    #[serde(rename = "WIP")]
    Wip,
    #[serde(rename = "Done")]
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "ToDo",
            Self::Wip => "WIP",
            Self::Done => "Done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ToDo" => Some(Self::Todo),
            "WIP" => Some(Self::Wip),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }
}
