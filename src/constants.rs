/// Feature index marking a leaf in the raw arrays.
pub const TREE_UNDEFINED: i64 = -2;
/// Child index marking a leaf in the raw arrays.
pub const TREE_LEAF: i64 = -1;
/// Placeholder name for the undefined feature, never emitted.
pub const UNDEFINED_FEATURE_NAME: &str = "undefined!";
/// Name of the root node, child names extend it with `left` / `right`.
pub const ROOT_NAME: &str = "root";
pub const DEFAULT_FUNCTION_NAME: &str = "tree";
pub const DEFAULT_INDENT_WIDTH: usize = 2;
