use crate::classifier::DecisionTreeClassifier;
use crate::constants::TREE_UNDEFINED;
use crate::errors::TreeCodeError;
use crate::features::FeatureTable;
use crate::node::{Node, NodeKind, NodeType};
use log::debug;
use std::fmt::{self, Display};

/// A binary decision tree stored as an arena of nodes.
///
/// Node `0` is the root and nodes are laid out in pre-order, so every child
/// sits after its parent. Each non-root node is referenced by exactly one
/// child slot of its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    /// Build the generic tree from the raw arrays of a fitted classifier.
    ///
    /// * `clf` - The fitted classifier.
    /// * `features` - Sanitized names for every feature index the tree tests.
    pub fn from_classifier(clf: &DecisionTreeClassifier, features: &FeatureTable) -> Result<Self, TreeCodeError> {
        let raw = &clf.tree;
        raw.validate_shape()?;
        features.ensure_covers(raw.n_features_required())?;

        let mut tree = Tree {
            nodes: Vec::with_capacity(raw.n_nodes()),
        };
        let mut seen = vec![false; raw.n_nodes()];
        // (raw id, parent, slot in parent, depth)
        let mut stack = vec![(0_usize, 0_usize, NodeType::Root, 0_usize)];

        while let Some((raw_id, parent, node_type, depth)) = stack.pop() {
            if std::mem::replace(&mut seen[raw_id], true) {
                return Err(TreeCodeError::NodeRevisited { node: raw_id });
            }
            let num = tree.n_nodes();
            let feature = raw.feature[raw_id];
            let kind = if feature == TREE_UNDEFINED {
                NodeKind::Leaf {
                    label: clf.leaf_label(raw_id)?.to_string(),
                }
            } else {
                let name = features
                    .name(feature)
                    .ok_or(TreeCodeError::InvalidFeatureIndex { node: raw_id, feature })?;
                let (left, right) = raw.children(raw_id)?;
                stack.push((right, num, NodeType::Right, depth + 1));
                stack.push((left, num, NodeType::Left, depth + 1));
                NodeKind::Split {
                    feature_index: feature as usize,
                    feature: name.to_string(),
                    threshold: raw.threshold[raw_id],
                    left_child: 0,
                    right_child: 0,
                }
            };
            tree.attach(parent, node_type, depth, kind);
        }

        debug!(
            "imported tree: {} nodes, {} leaves, depth {}",
            tree.n_nodes(),
            tree.n_leaves(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Start an empty tree, nodes are added with [`Tree::attach`].
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node and hook it into the matching child slot of `parent`.
    /// Returns the number of the new node.
    pub(crate) fn attach(&mut self, parent: usize, node_type: NodeType, depth: usize, kind: NodeKind) -> usize {
        let num = self.nodes.len();
        self.nodes.push(Node {
            num,
            depth,
            node_type,
            parent_node: parent,
            kind,
        });
        if let Some(NodeKind::Split {
            left_child,
            right_child,
            ..
        }) = self.nodes.get_mut(parent).map(|p| &mut p.kind)
        {
            match node_type {
                NodeType::Left => *left_child = num,
                NodeType::Right => *right_child = num,
                NodeType::Root => (),
            }
        }
        num
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn n_decisions(&self) -> usize {
        self.n_nodes() - self.n_leaves()
    }

    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Path derived name of a node, `"root"`, `"rootleft"`, `"rootleftright"`, ...
    pub fn node_name(&self, num: usize) -> String {
        let mut parts = Vec::new();
        let mut node = &self.nodes[num];
        while node.node_type != NodeType::Root {
            parts.push(node.node_type.name_part());
            node = &self.nodes[node.parent_node];
        }
        parts.push(NodeType::Root.name_part());
        parts.reverse();
        parts.concat()
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = vec![0];
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += format!("{}{}\n", "      ".repeat(node.depth).as_str(), node).as_str();
            if let Some((left, right)) = node.children() {
                print_buffer.push(right);
                print_buffer.push(left);
            }
        }
        write!(f, "{}", r)
    }
}
