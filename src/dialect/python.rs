//! Indentation based dialect, blocks are opened with `:` and closed by dedenting.
use crate::dialect::Dialect;

#[derive(Default, Clone, Copy, Debug)]
pub struct Python {}

impl Dialect for Python {
    fn header(&self, function_name: &str, signature: &str) -> String {
        format!("def {}({}):", function_name, signature)
    }

    fn open_condition(&self, feature: &str, threshold: &str) -> String {
        format!("if {} <= {}:", feature, threshold)
    }

    fn else_branch(&self, feature: &str, threshold: &str) -> String {
        format!("else:  # if {} > {}", feature, threshold)
    }

    fn leaf(&self, label: &str) -> String {
        format!("return '{}'", label)
    }
}
