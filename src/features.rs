//! Features
//!
//! Ordered feature names, sanitized once so they can be used as identifiers
//! in the generated code.
use crate::constants::{TREE_UNDEFINED, UNDEFINED_FEATURE_NAME};
use crate::errors::TreeCodeError;
use crate::utils::sanitize_identifier;

/// Sanitized feature names, indexed by feature number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTable {
    names: Vec<String>,
}

impl FeatureTable {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        FeatureTable {
            names: names.iter().map(|n| sanitize_identifier(n.as_ref())).collect(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.names.len()
    }

    /// Resolve a raw feature index to its identifier.
    /// The undefined sentinel resolves to a placeholder, anything else out
    /// of range resolves to `None`.
    pub fn name(&self, feature: i64) -> Option<&str> {
        if feature == TREE_UNDEFINED {
            return Some(UNDEFINED_FEATURE_NAME);
        }
        usize::try_from(feature)
            .ok()
            .and_then(|f| self.names.get(f))
            .map(String::as_str)
    }

    /// Parameter list of the generated function, `"a, b, c"`.
    pub fn signature(&self) -> String {
        self.names.join(", ")
    }

    /// Fail if the table can not name `required` distinct features.
    pub fn ensure_covers(&self, required: usize) -> Result<(), TreeCodeError> {
        if required > self.n_features() {
            Err(TreeCodeError::InvalidFeatureNames {
                required,
                provided: self.n_features(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_table() {
        let table = FeatureTable::new(&["sepal length", "petal width"]);
        assert_eq!(table.n_features(), 2);
        assert_eq!(table.name(0), Some("sepal_length"));
        assert_eq!(table.name(1), Some("petal_width"));
        assert_eq!(table.name(2), None);
        assert_eq!(table.name(-1), None);
        assert_eq!(table.name(TREE_UNDEFINED), Some(UNDEFINED_FEATURE_NAME));
        assert_eq!(table.signature(), "sepal_length, petal_width");
    }

    #[test]
    fn test_ensure_covers() {
        let table = FeatureTable::new(&["a", "b"]);
        assert!(table.ensure_covers(2).is_ok());
        assert_eq!(
            table.ensure_covers(3),
            Err(TreeCodeError::InvalidFeatureNames { required: 3, provided: 2 })
        );
    }
}
