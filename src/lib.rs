pub mod engine;
pub mod models;
pub mod render;
pub mod yaml;

pub use engine::{FilterQuery, Located, NodeRef, ParentRef, Role, Session};
pub use yaml::YamlError;
