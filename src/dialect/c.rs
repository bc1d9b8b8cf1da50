//! Brace delimited dialect, the function returns a `char`.
use crate::dialect::Dialect;

#[derive(Default, Clone, Copy, Debug)]
pub struct C {}

impl Dialect for C {
    fn header(&self, function_name: &str, signature: &str) -> String {
        format!("char {}({}){{", function_name, signature)
    }

    fn open_condition(&self, feature: &str, threshold: &str) -> String {
        format!("if ({} <= {}){{", feature, threshold)
    }

    fn else_branch(&self, _feature: &str, _threshold: &str) -> String {
        "else{".to_string()
    }

    fn close_block(&self) -> Option<String> {
        Some("}".to_string())
    }

    fn leaf(&self, label: &str) -> String {
        format!("return '{}';", label)
    }

    fn footer(&self) -> Option<String> {
        Some("}".to_string())
    }
}
