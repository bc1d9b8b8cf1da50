//! Randomized checks over many generated trees.
use crate::classifier::{DecisionTreeClassifier, RawTree};
use crate::dialect::Language;
use crate::emitter::{Emitter, RawTreeView};
use crate::features::FeatureTable;
use crate::node::NodeKind;
use crate::tree::Tree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

const THRESHOLDS: [f64; 5] = [0.0, 0.5, 1.0, 1.5, 2.0];
const VALUES: [f64; 9] = [-0.5, 0.0, 0.25, 0.5, 1.0, 1.25, 1.5, 2.0, 2.5];
const N_FEATURES: usize = 3;

/// Random tree over three features and two or three classes. Vote counts
/// are small integers so that ties and identical sibling labels are common.
fn random_classifier(rng: &mut StdRng, max_depth: usize) -> DecisionTreeClassifier {
    let n_classes = rng.gen_range(2..=3);
    let votes = |rng: &mut StdRng| (0..n_classes).map(|_| rng.gen_range(0..3) as f64).collect::<Vec<f64>>();

    let mut raw = RawTree::default();
    // (parent, is_left, depth), the root has no parent
    let mut stack: Vec<(Option<(usize, bool)>, usize)> = vec![(None, 0)];
    while let Some((parent, depth)) = stack.pop() {
        let leaf = depth >= max_depth || (depth > 0 && rng.gen_bool(0.35));
        let node = if leaf {
            raw.push_leaf(votes(rng))
        } else {
            let threshold = *THRESHOLDS.choose(rng).unwrap();
            let node = raw.push_split(rng.gen_range(0..N_FEATURES), threshold, votes(rng));
            stack.push((Some((node, false)), depth + 1));
            stack.push((Some((node, true)), depth + 1));
            node
        };
        if let Some((p, is_left)) = parent {
            if is_left {
                raw.children_left[p] = node as i64;
            } else {
                raw.children_right[p] = node as i64;
            }
        }
    }
    let classes = ["setosa", "versicolor", "virginica"][..n_classes]
        .iter()
        .map(|c| c.to_string())
        .collect();
    DecisionTreeClassifier::new(classes, raw)
}

fn random_rows(rng: &mut StdRng, n_rows: usize) -> Vec<[f64; N_FEATURES]> {
    (0..n_rows)
        .map(|_| [0; N_FEATURES].map(|_| *VALUES.choose(rng).unwrap()))
        .collect()
}

fn has_mergeable_split(tree: &Tree) -> bool {
    tree.nodes().iter().any(|n| match n.children() {
        Some((l, r)) => {
            let (l, r) = (&tree.nodes()[l], &tree.nodes()[r]);
            l.merge_label().is_some() && l.merge_label() == r.merge_label()
        }
        None => false,
    })
}

#[test]
fn test_pruning_preserves_predictions() {
    let mut rng = StdRng::seed_from_u64(0);
    let features = FeatureTable::new(&["sepal length", "sepal width", "petal width"]);
    for _ in 0..200 {
        let clf = random_classifier(&mut rng, 6);
        let tree = Tree::from_classifier(&clf, &features).unwrap();
        let pruned = tree.prune();
        for row in random_rows(&mut rng, 50) {
            let expected = clf.predict_row(&row).unwrap();
            assert_eq!(tree.predict_row(&row).unwrap(), expected);
            assert_eq!(pruned.predict_row(&row).unwrap(), expected);
        }
    }
}

#[test]
fn test_pruning_is_idempotent_and_minimal() {
    let mut rng = StdRng::seed_from_u64(1);
    let features = FeatureTable::new(&["a", "b", "c"]);
    for _ in 0..200 {
        let clf = random_classifier(&mut rng, 7);
        let tree = Tree::from_classifier(&clf, &features).unwrap();
        let pruned = tree.prune();
        assert_eq!(pruned.prune(), pruned);
        assert!(!has_mergeable_split(&pruned));
        if has_mergeable_split(&tree) {
            assert!(pruned.n_nodes() < tree.n_nodes());
        } else {
            assert_eq!(pruned, tree);
        }
    }
}

#[test]
fn test_leaf_count_law() {
    let mut rng = StdRng::seed_from_u64(2);
    let features = FeatureTable::new(&["a", "b", "c"]);
    for _ in 0..100 {
        let clf = random_classifier(&mut rng, 8);
        let tree = Tree::from_classifier(&clf, &features).unwrap();
        let pruned = tree.prune();
        for language in [Language::Python, Language::C] {
            let emitter = Emitter::new(&language);
            for t in [&tree, &pruned] {
                let (_, stats) = emitter.render(t, &features).unwrap();
                assert_eq!(stats.n_leaves, stats.n_decisions + 1);
                assert_eq!(stats.n_leaves, t.n_leaves());
                assert_eq!(stats.n_decisions, t.n_decisions());
            }
        }
    }
}

#[test]
fn test_raw_path_matches_unpruned_tree() {
    let mut rng = StdRng::seed_from_u64(3);
    let features = FeatureTable::new(&["a", "b", "c"]);
    for _ in 0..100 {
        let clf = random_classifier(&mut rng, 6);
        let tree = Tree::from_classifier(&clf, &features).unwrap();
        let raw = RawTreeView::new(&clf, &features).unwrap();
        for language in [Language::Python, Language::C] {
            let emitter = Emitter::new(&language);
            assert_eq!(emitter.render(&tree, &features), emitter.render(&raw, &features));
        }
    }
}

#[test]
fn test_deep_tree_emits_without_recursion() {
    // Right leaning chain, every left child is a leaf of alternating class.
    let depth = 100_000;
    let mut raw = RawTree::default();
    let mut parent = raw.push_split(0, 0.0, vec![1., 1.]);
    for i in 1..depth {
        let leaf = raw.push_leaf(if i % 2 == 0 { vec![1., 0.] } else { vec![0., 1.] });
        let split = raw.push_split(0, i as f64, vec![1., 1.]);
        raw.set_children(parent, leaf, split);
        parent = split;
    }
    let l = raw.push_leaf(vec![1., 0.]);
    let r = raw.push_leaf(vec![1., 0.]);
    raw.set_children(parent, l, r);
    let clf = DecisionTreeClassifier::new(vec!["A".into(), "B".into()], raw);
    let features = FeatureTable::new(&["x"]);

    let tree = Tree::from_classifier(&clf, &features).unwrap();
    let pruned = tree.prune();
    // Only the bottom split merges, the one above it has a B leaf on its left.
    assert_eq!(pruned.n_nodes(), tree.n_nodes() - 2);
    assert!(matches!(pruned.nodes().last().map(|n| &n.kind), Some(NodeKind::Leaf { .. })));

    // No indentation, a 100k deep body would otherwise be mostly spaces.
    let (_, stats) = Emitter::new(&Language::C)
        .with_indent_width(0)
        .render(&pruned, &features)
        .unwrap();
    assert_eq!(stats.n_decisions, depth - 1);
    assert_eq!(stats.n_leaves, depth);
    let (_, stats) = Emitter::new(&Language::Python)
        .with_indent_width(0)
        .render(&RawTreeView::new(&clf, &features).unwrap(), &features)
        .unwrap();
    assert_eq!(stats.n_decisions, depth);
}
