//! Emitter
//!
//! Renders a tree as a nested conditional function in a [`Dialect`].
//! The same traversal serves the generic [`Tree`] and the raw arrays of a
//! [`DecisionTreeClassifier`], both are seen through [`TreeView`].
use crate::classifier::DecisionTreeClassifier;
use crate::constants::{DEFAULT_FUNCTION_NAME, DEFAULT_INDENT_WIDTH, TREE_UNDEFINED};
use crate::dialect::Dialect;
use crate::errors::TreeCodeError;
use crate::features::FeatureTable;
use crate::node::NodeKind;
use crate::tree::Tree;
use crate::utils::format_threshold;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Structural counts of an emitted function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmitStats {
    /// Number of decision nodes, one per emitted conditional.
    pub n_decisions: usize,
    /// Number of leaves, one per emitted return.
    pub n_leaves: usize,
}

impl EmitStats {
    pub fn n_nodes(&self) -> usize {
        self.n_decisions + self.n_leaves
    }
}

/// One node as the emitter needs to see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeView<'a> {
    Split {
        feature: &'a str,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: &'a str,
    },
}

/// Read access to a binary tree, addressed by node id.
pub trait TreeView {
    fn n_nodes(&self) -> usize;
    fn root(&self) -> usize {
        0
    }
    /// Look up a node, failing if the underlying data is inconsistent.
    fn view(&self, node: usize) -> Result<NodeView<'_>, TreeCodeError>;
}

impl TreeView for Tree {
    fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn view(&self, node: usize) -> Result<NodeView<'_>, TreeCodeError> {
        Ok(match &self.nodes[node].kind {
            NodeKind::Split {
                feature,
                threshold,
                left_child,
                right_child,
                ..
            } => NodeView::Split {
                feature,
                threshold: *threshold,
                left: *left_child,
                right: *right_child,
            },
            NodeKind::Leaf { label } => NodeView::Leaf { label },
        })
    }
}

/// The raw arrays of a classifier, with feature names and labels derived
/// on the fly the same way the importer derives them.
pub struct RawTreeView<'a> {
    clf: &'a DecisionTreeClassifier,
    features: &'a FeatureTable,
}

impl<'a> RawTreeView<'a> {
    pub fn new(clf: &'a DecisionTreeClassifier, features: &'a FeatureTable) -> Result<Self, TreeCodeError> {
        clf.tree.validate_shape()?;
        features.ensure_covers(clf.tree.n_features_required())?;
        Ok(RawTreeView { clf, features })
    }
}

impl TreeView for RawTreeView<'_> {
    fn n_nodes(&self) -> usize {
        self.clf.n_nodes()
    }

    fn view(&self, node: usize) -> Result<NodeView<'_>, TreeCodeError> {
        let feature = self.clf.tree.feature[node];
        if feature == TREE_UNDEFINED {
            return Ok(NodeView::Leaf {
                label: self.clf.leaf_label(node)?,
            });
        }
        let name = self
            .features
            .name(feature)
            .ok_or(TreeCodeError::InvalidFeatureIndex { node, feature })?;
        let (left, right) = self.clf.tree.children(node)?;
        Ok(NodeView::Split {
            feature: name,
            threshold: self.clf.tree.threshold[node],
            left,
            right,
        })
    }
}

enum Step {
    Visit { node: usize, parent: usize, depth: usize },
    Line { text: String, depth: usize },
}

/// Renders trees through a dialect's templates.
pub struct Emitter<'a> {
    dialect: &'a dyn Dialect,
    function_name: &'a str,
    indent_width: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Emitter {
            dialect,
            function_name: DEFAULT_FUNCTION_NAME,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    pub fn with_function_name(mut self, function_name: &'a str) -> Self {
        self.function_name = function_name;
        self
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Render the whole function into a string.
    ///
    /// The function body is walked depth first, the left subtree is always
    /// the `<=` branch. Nothing is returned unless the whole tree renders.
    ///
    /// * `tree` - Tree to render.
    /// * `features` - Feature names for the function signature.
    pub fn render<V: TreeView + ?Sized>(
        &self,
        tree: &V,
        features: &FeatureTable,
    ) -> Result<(String, EmitStats), TreeCodeError> {
        let n_nodes = tree.n_nodes();
        if n_nodes == 0 {
            return Err(TreeCodeError::EmptyModel);
        }
        let mut out = String::new();
        let mut stats = EmitStats::default();
        let mut seen = vec![false; n_nodes];

        self.push_line(&mut out, 0, &self.dialect.header(self.function_name, &features.signature()));

        let mut stack = vec![Step::Visit {
            node: tree.root(),
            parent: tree.root(),
            depth: 1,
        }];
        while let Some(step) = stack.pop() {
            let (node, parent, depth) = match step {
                Step::Line { text, depth } => {
                    self.push_line(&mut out, depth, &text);
                    continue;
                }
                Step::Visit { node, parent, depth } => (node, parent, depth),
            };
            let visited = seen.get_mut(node).ok_or(TreeCodeError::InvalidChild {
                node: parent,
                child: node as i64,
                n_nodes,
            })?;
            if std::mem::replace(visited, true) {
                return Err(TreeCodeError::NodeRevisited { node });
            }
            match tree.view(node)? {
                NodeView::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    stats.n_decisions += 1;
                    let threshold = format_threshold(threshold);
                    self.push_line(&mut out, depth, &self.dialect.open_condition(feature, &threshold));
                    // Pushed in reverse, the left branch is written first.
                    if let Some(close) = self.dialect.close_block() {
                        stack.push(Step::Line { text: close, depth });
                    }
                    stack.push(Step::Visit {
                        node: right,
                        parent: node,
                        depth: depth + 1,
                    });
                    stack.push(Step::Line {
                        text: self.dialect.else_branch(feature, &threshold),
                        depth,
                    });
                    if let Some(close) = self.dialect.close_block() {
                        stack.push(Step::Line { text: close, depth });
                    }
                    stack.push(Step::Visit {
                        node: left,
                        parent: node,
                        depth: depth + 1,
                    });
                }
                NodeView::Leaf { label } => {
                    stats.n_leaves += 1;
                    if label.contains('\'') {
                        warn!("label {} contains a quote, it is emitted unescaped", label);
                    }
                    self.push_line(&mut out, depth, &self.dialect.leaf(label));
                }
            }
        }

        if let Some(footer) = self.dialect.footer() {
            self.push_line(&mut out, 0, &footer);
        }
        Ok((out, stats))
    }

    /// Render the function and write it to `out` in one go.
    pub fn write<V: TreeView + ?Sized, W: Write>(
        &self,
        tree: &V,
        features: &FeatureTable,
        out: &mut W,
    ) -> Result<EmitStats, TreeCodeError> {
        let (code, stats) = self.render(tree, features)?;
        out.write_all(code.as_bytes())
            .map_err(|e| TreeCodeError::UnableToWrite(e.to_string()))?;
        Ok(stats)
    }

    fn push_line(&self, out: &mut String, depth: usize, line: &str) {
        out.push_str(&" ".repeat(depth * self.indent_width));
        out.push_str(line);
        out.push('\n');
    }
}
