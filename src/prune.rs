use crate::node::{NodeKind, NodeType};
use crate::tree::Tree;
use log::info;

impl Tree {
    /// Collapse every split whose two children end up as leaves predicting
    /// the same label into a single leaf carrying that label.
    ///
    /// One post-order pass decides which subtrees collapse, a second pre-order
    /// pass copies the surviving nodes into a new tree. Leaves only merge when
    /// both labels are non empty and equal, so predictions never change.
    pub fn prune(&self) -> Tree {
        let old_length = self.n_nodes();

        // Reversed root-right-left order visits children before their parent.
        let mut order = Vec::with_capacity(old_length);
        let mut unchecked_nodes = vec![0];
        while let Some(node_idx) = unchecked_nodes.pop() {
            order.push(node_idx);
            if let Some((left, right)) = self.nodes[node_idx].children() {
                unchecked_nodes.push(left);
                unchecked_nodes.push(right);
            }
        }

        // Label a subtree collapses into, if it collapses into a mergeable leaf.
        let mut collapsed: Vec<Option<&str>> = vec![None; old_length];
        for &node_idx in order.iter().rev() {
            let node = &self.nodes[node_idx];
            collapsed[node_idx] = match node.children() {
                None => node.merge_label(),
                Some((left, right)) => match (collapsed[left], collapsed[right]) {
                    (Some(l), Some(r)) if l == r => Some(l),
                    _ => None,
                },
            };
        }

        let mut pruned = Tree::with_capacity(old_length);
        // (old node, parent in the new tree, slot in parent, depth)
        let mut stack = vec![(0_usize, 0_usize, NodeType::Root, 0_usize)];
        while let Some((node_idx, parent, node_type, depth)) = stack.pop() {
            let num = pruned.n_nodes();
            let kind = match (&self.nodes[node_idx].kind, collapsed[node_idx]) {
                (NodeKind::Split { .. }, Some(label)) => NodeKind::Leaf {
                    label: label.to_string(),
                },
                (
                    NodeKind::Split {
                        feature_index,
                        feature,
                        threshold,
                        left_child,
                        right_child,
                    },
                    None,
                ) => {
                    stack.push((*right_child, num, NodeType::Right, depth + 1));
                    stack.push((*left_child, num, NodeType::Left, depth + 1));
                    NodeKind::Split {
                        feature_index: *feature_index,
                        feature: feature.clone(),
                        threshold: *threshold,
                        left_child: 0,
                        right_child: 0,
                    }
                }
                (leaf @ NodeKind::Leaf { .. }, _) => leaf.clone(),
            };
            pruned.attach(parent, node_type, depth, kind);
        }

        info!("pruned nodes: {} -> {}", old_length, pruned.n_nodes());
        pruned
    }
}
