//! Classifier
//!
//! The trained model as handed over by the training side: the flat per-node
//! arrays of a fitted binary decision tree, plus the class labels the vote
//! vectors are indexed by. Node `0` is the root, a node whose feature is
//! [`TREE_UNDEFINED`] is a leaf.
use crate::constants::{TREE_LEAF, TREE_UNDEFINED};
use crate::errors::TreeCodeError;
use crate::io::ModelIO;
use crate::utils::argmax;
use serde::{Deserialize, Serialize};

/// Array based representation of a fitted tree, indexed by node id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTree {
    /// Feature tested by each node, [`TREE_UNDEFINED`] for leaves.
    pub feature: Vec<i64>,
    /// Split threshold of each node, samples with `x <= threshold` go left.
    pub threshold: Vec<f64>,
    /// Left child of each node, [`TREE_LEAF`] for leaves.
    pub children_left: Vec<i64>,
    /// Right child of each node, [`TREE_LEAF`] for leaves.
    pub children_right: Vec<i64>,
    /// Per class vote counts of each node.
    pub value: Vec<Vec<f64>>,
}

impl RawTree {
    pub fn n_nodes(&self) -> usize {
        self.feature.len()
    }

    /// Check that there is at least one node and that all arrays agree on
    /// the number of nodes.
    pub fn validate_shape(&self) -> Result<(), TreeCodeError> {
        let expected = self.n_nodes();
        if expected == 0 {
            return Err(TreeCodeError::EmptyModel);
        }
        let lengths = [
            ("threshold", self.threshold.len()),
            ("children_left", self.children_left.len()),
            ("children_right", self.children_right.len()),
            ("value", self.value.len()),
        ];
        for (array, found) in lengths {
            if found != expected {
                return Err(TreeCodeError::LengthMismatch { array, expected, found });
            }
        }
        Ok(())
    }

    /// Number of feature names needed to name every feature the decision
    /// nodes test, that is the largest referenced index plus one.
    pub fn n_features_required(&self) -> usize {
        self.feature
            .iter()
            .filter_map(|f| usize::try_from(*f).ok())
            .map(|f| f + 1)
            .max()
            .unwrap_or(0)
    }

    /// Resolve the `(left, right)` children of a decision node.
    pub fn children(&self, node: usize) -> Result<(usize, usize), TreeCodeError> {
        let n_nodes = self.n_nodes();
        let resolve = |child: i64| {
            usize::try_from(child)
                .ok()
                .filter(|c| *c < n_nodes)
                .ok_or(TreeCodeError::InvalidChild { node, child, n_nodes })
        };
        Ok((resolve(self.children_left[node])?, resolve(self.children_right[node])?))
    }
}

/// A fitted binary decision tree classifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    /// Class labels, in the order of the vote vectors.
    pub classes: Vec<String>,
    pub tree: RawTree,
}

impl ModelIO for DecisionTreeClassifier {}

impl DecisionTreeClassifier {
    pub fn new(classes: Vec<String>, tree: RawTree) -> Self {
        DecisionTreeClassifier { classes, tree }
    }

    pub fn n_nodes(&self) -> usize {
        self.tree.n_nodes()
    }

    /// Class predicted at `node`, the class with the most votes.
    /// Ties go to the class that comes first.
    pub fn leaf_label(&self, node: usize) -> Result<&str, TreeCodeError> {
        let class = argmax(&self.tree.value[node]).ok_or(TreeCodeError::EmptyVotes { node })?;
        self.classes
            .get(class)
            .map(String::as_str)
            .ok_or(TreeCodeError::UnknownClass {
                node,
                class,
                n_classes: self.classes.len(),
            })
    }

    /// Classify a single row straight from the raw arrays.
    ///
    /// * `row` - Feature values, indexed the same way as the tree's features.
    pub fn predict_row(&self, row: &[f64]) -> Result<&str, TreeCodeError> {
        self.tree.validate_shape()?;
        let mut node = 0;
        // A well formed tree is never deeper than its node count.
        for _ in 0..self.n_nodes() {
            let feature = self.tree.feature[node];
            if feature == TREE_UNDEFINED {
                return self.leaf_label(node);
            }
            let f = usize::try_from(feature).map_err(|_| TreeCodeError::InvalidFeatureIndex { node, feature })?;
            let (left, right) = self.tree.children(node)?;
            let value = row.get(f).ok_or(TreeCodeError::RowTooShort {
                node,
                feature: f,
                row_len: row.len(),
            })?;
            node = if *value <= self.tree.threshold[node] { left } else { right };
        }
        Err(TreeCodeError::NodeRevisited { node })
    }

    /// Classify every row of a row major matrix with `cols` columns.
    pub fn predict(&self, data: &[f64], cols: usize) -> Result<Vec<&str>, TreeCodeError> {
        if cols == 0 {
            return Err(TreeCodeError::ZeroColumns);
        }
        data.chunks(cols).map(|row| self.predict_row(row)).collect()
    }
}

/// Builders for the raw arrays, handy when assembling trees by hand.
impl RawTree {
    /// Append a leaf with the given votes and return its id.
    pub fn push_leaf(&mut self, votes: Vec<f64>) -> usize {
        self.feature.push(TREE_UNDEFINED);
        self.threshold.push(TREE_UNDEFINED as f64);
        self.children_left.push(TREE_LEAF);
        self.children_right.push(TREE_LEAF);
        self.value.push(votes);
        self.n_nodes() - 1
    }

    /// Append a decision node whose children are filled in later with
    /// [`RawTree::set_children`], and return its id.
    pub fn push_split(&mut self, feature: usize, threshold: f64, votes: Vec<f64>) -> usize {
        self.feature.push(feature as i64);
        self.threshold.push(threshold);
        self.children_left.push(TREE_LEAF);
        self.children_right.push(TREE_LEAF);
        self.value.push(votes);
        self.n_nodes() - 1
    }

    pub fn set_children(&mut self, node: usize, left: usize, right: usize) {
        self.children_left[node] = left as i64;
        self.children_right[node] = right as i64;
    }
}
