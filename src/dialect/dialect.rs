use crate::dialect::{Python, C};
use crate::errors::TreeCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Line templates of a target language.
///
/// The emitter owns the traversal, indentation and counting, a dialect only
/// decides what each line looks like. Lines are returned without indentation
/// or trailing newline.
pub trait Dialect: Send + Sync {
    /// First line of the function, `signature` is the comma separated parameter list.
    fn header(&self, function_name: &str, signature: &str) -> String;
    /// Opens the `feature <= threshold` branch.
    fn open_condition(&self, feature: &str, threshold: &str) -> String;
    /// Opens the `feature > threshold` branch.
    fn else_branch(&self, feature: &str, threshold: &str) -> String;
    /// Closes a branch, `None` when blocks end by dedenting.
    fn close_block(&self) -> Option<String> {
        None
    }
    fn leaf(&self, label: &str) -> String;
    /// Closes the function, `None` when nothing is needed.
    fn footer(&self) -> Option<String> {
        None
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub enum Language {
    #[default]
    Python,
    C,
    #[serde(skip)]
    Custom(Arc<dyn Dialect>),
}

impl Language {
    pub fn new_custom<T>(dialect: T) -> Self
    where
        T: Dialect + 'static,
    {
        Language::Custom(Arc::new(dialect))
    }
}

impl Dialect for Language {
    fn header(&self, function_name: &str, signature: &str) -> String {
        match self {
            Language::Python => Python::default().header(function_name, signature),
            Language::C => C::default().header(function_name, signature),
            Language::Custom(arc) => arc.header(function_name, signature),
        }
    }

    fn open_condition(&self, feature: &str, threshold: &str) -> String {
        match self {
            Language::Python => Python::default().open_condition(feature, threshold),
            Language::C => C::default().open_condition(feature, threshold),
            Language::Custom(arc) => arc.open_condition(feature, threshold),
        }
    }

    fn else_branch(&self, feature: &str, threshold: &str) -> String {
        match self {
            Language::Python => Python::default().else_branch(feature, threshold),
            Language::C => C::default().else_branch(feature, threshold),
            Language::Custom(arc) => arc.else_branch(feature, threshold),
        }
    }

    fn close_block(&self) -> Option<String> {
        match self {
            Language::Python => Python::default().close_block(),
            Language::C => C::default().close_block(),
            Language::Custom(arc) => arc.close_block(),
        }
    }

    fn leaf(&self, label: &str) -> String {
        match self {
            Language::Python => Python::default().leaf(label),
            Language::C => C::default().leaf(label),
            Language::Custom(arc) => arc.leaf(label),
        }
    }

    fn footer(&self) -> Option<String> {
        match self {
            Language::Python => Python::default().footer(),
            Language::C => C::default().footer(),
            Language::Custom(arc) => arc.footer(),
        }
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Language::Python => write!(f, "Python"),
            Language::C => write!(f, "C"),
            Language::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl FromStr for Language {
    type Err = TreeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Python" | "python" | "py" => Ok(Language::Python),
            "C" | "c" => Ok(Language::C),
            _ => Err(TreeCodeError::ParseString(
                s.to_string(),
                "Language".to_string(),
                "Python, C".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lisp;

    impl Dialect for Lisp {
        fn header(&self, function_name: &str, signature: &str) -> String {
            format!("(defun {} ({})", function_name, signature.replace(", ", " "))
        }
        fn open_condition(&self, feature: &str, threshold: &str) -> String {
            format!("(if (<= {} {})", feature, threshold)
        }
        fn else_branch(&self, _feature: &str, _threshold: &str) -> String {
            String::new()
        }
        fn close_block(&self) -> Option<String> {
            Some(")".to_string())
        }
        fn leaf(&self, label: &str) -> String {
            format!("\"{}\"", label)
        }
    }

    #[test]
    fn test_language_from_str() {
        assert!(matches!("Python".parse::<Language>(), Ok(Language::Python)));
        assert!(matches!("py".parse::<Language>(), Ok(Language::Python)));
        assert!(matches!("c".parse::<Language>(), Ok(Language::C)));
        assert_eq!(
            "Rust".parse::<Language>().unwrap_err(),
            TreeCodeError::ParseString("Rust".to_string(), "Language".to_string(), "Python, C".to_string())
        );
    }

    #[test]
    fn test_language_dispatch() {
        assert_eq!(Language::Python.leaf("A"), "return 'A'");
        assert_eq!(Language::C.leaf("A"), "return 'A';");
        let custom = Language::new_custom(Lisp);
        assert_eq!(custom.header("tree", "a, b"), "(defun tree (a b)");
        assert_eq!(custom.footer(), None);
        assert_eq!(format!("{:?}", custom), "Custom");
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::C).unwrap(), "\"C\"");
        let lang: Language = serde_json::from_str("\"Python\"").unwrap();
        assert!(matches!(lang, Language::Python));
        assert!(serde_json::to_string(&Language::new_custom(Lisp)).is_err());
    }
}
