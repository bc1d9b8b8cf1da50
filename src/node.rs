use std::fmt;

/// Which slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeType {
    Root,
    Left,
    Right,
}

impl NodeType {
    /// Fragment this slot contributes to a node name.
    pub fn name_part(&self) -> &'static str {
        match self {
            NodeType::Root => crate::constants::ROOT_NAME,
            NodeType::Left => "left",
            NodeType::Right => "right",
        }
    }
}

/// Shape of a node, either a binary split or a leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Samples with `feature <= threshold` go to `left_child`, all others to `right_child`.
    Split {
        feature_index: usize,
        feature: String,
        threshold: f64,
        left_child: usize,
        right_child: usize,
    },
    Leaf {
        label: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub num: usize,
    pub depth: usize,
    pub node_type: NodeType,
    pub parent_node: usize,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { label } => Some(label),
            NodeKind::Split { .. } => None,
        }
    }

    /// Label this node can be merged on. Only leaves with a non empty label qualify.
    pub fn merge_label(&self) -> Option<&str> {
        self.label().filter(|l| !l.is_empty())
    }

    pub fn feature_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Split { feature_index, .. } => Some(feature_index),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(usize, usize)> {
        match self.kind {
            NodeKind::Split {
                left_child,
                right_child,
                ..
            } => Some((left_child, right_child)),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Get the path that should be traveled down, given a value.
    /// Returns `None` for leaves.
    pub fn get_child_idx(&self, v: f64) -> Option<usize> {
        match self.kind {
            NodeKind::Split {
                threshold,
                left_child,
                right_child,
                ..
            } => Some(if v <= threshold { left_child } else { right_child }),
            NodeKind::Leaf { .. } => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            NodeKind::Leaf { label } => write!(f, "{}:leaf={}", self.num, label),
            NodeKind::Split {
                feature,
                threshold,
                left_child,
                right_child,
                ..
            } => write!(
                f,
                "{}:[{} <= {}] yes={},no={}",
                self.num, feature, threshold, left_child, right_child
            ),
        }
    }
}
