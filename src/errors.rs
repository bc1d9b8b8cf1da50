//! Errors
//!
//! Custom error types used throughout the `treecode` crate.
use thiserror::Error;

/// Errors that can occur while converting a tree into code.
#[derive(Debug, Error, PartialEq)]
pub enum TreeCodeError {
    /// The model has no nodes at all.
    #[error("The model has no nodes, nothing to convert.")]
    EmptyModel,
    /// One of the per-node arrays has a different length than `feature`.
    #[error("Array {array} has {found} entries, but the tree has {expected} nodes.")]
    LengthMismatch {
        array: &'static str,
        expected: usize,
        found: usize,
    },
    /// A decision node references a feature index that does not exist.
    #[error("Node {node} references feature index {feature}, which is out of range.")]
    InvalidFeatureIndex { node: usize, feature: i64 },
    /// A decision node references a child id outside of the tree.
    #[error("Node {node} references child {child}, but the tree has {n_nodes} nodes.")]
    InvalidChild { node: usize, child: i64, n_nodes: usize },
    /// A node was reached through more than one parent, the arrays do not form a tree.
    #[error("Node {node} is reachable more than once, the raw arrays do not form a tree.")]
    NodeRevisited { node: usize },
    /// A leaf has an empty class vote vector.
    #[error("Node {node} has an empty class vote vector.")]
    EmptyVotes { node: usize },
    /// The argmax of a vote vector points past the end of the class list.
    #[error("Node {node} predicts class index {class}, but only {n_classes} classes are known.")]
    UnknownClass { node: usize, class: usize, n_classes: usize },
    /// Fewer feature names were supplied than the tree references.
    #[error("The tree references {required} features, but only {provided} feature names were provided.")]
    InvalidFeatureNames { required: usize, provided: usize },
    /// A row handed to prediction has no value for the feature a split tests.
    #[error("Node {node} tests feature {feature}, but the row only has {row_len} values.")]
    RowTooShort { node: usize, feature: usize, row_len: usize },
    /// Prediction over a row major matrix needs at least one column.
    #[error("Can not split the data into rows of zero columns.")]
    ZeroColumns,
    /// Unable to write generated code or a model.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Unable to read a model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
}

impl TreeCodeError {
    /// Id of the node the error was raised for, if the error is a defect of a
    /// single node of the tree.
    pub fn node(&self) -> Option<usize> {
        match self {
            TreeCodeError::InvalidFeatureIndex { node, .. }
            | TreeCodeError::InvalidChild { node, .. }
            | TreeCodeError::NodeRevisited { node }
            | TreeCodeError::EmptyVotes { node }
            | TreeCodeError::UnknownClass { node, .. } => Some(*node),
            _ => None,
        }
    }

    /// Whether the error means the raw tree arrays are inconsistent.
    pub fn is_malformed_tree(&self) -> bool {
        matches!(self, TreeCodeError::LengthMismatch { .. }) || self.node().is_some()
    }
}
