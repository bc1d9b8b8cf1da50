pub mod config;
pub mod core;
pub mod setters;

pub use self::config::GeneratorConfig;
pub use self::core::{prune_tree_to_code, tree_to_raw_code, CodeGenerator};
