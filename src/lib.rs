mod node;
mod prune;

// Modules
pub mod classifier;
pub mod constants;
pub mod dialect;
pub mod emitter;
pub mod errors;
pub mod features;
pub mod generator;
pub mod io;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod properties;

// Individual classes, and functions
pub use classifier::{DecisionTreeClassifier, RawTree};
pub use dialect::{Dialect, Language};
pub use emitter::EmitStats;
pub use errors::TreeCodeError;
pub use generator::{prune_tree_to_code, tree_to_raw_code, CodeGenerator, GeneratorConfig};
pub use io::ModelIO;
pub use node::{Node, NodeKind, NodeType};
pub use tree::Tree;
