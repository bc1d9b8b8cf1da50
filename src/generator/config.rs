//! Generator Configuration
//!
//! Settings that control how a tree is turned into code.
use crate::constants::{DEFAULT_FUNCTION_NAME, DEFAULT_INDENT_WIDTH};
use crate::dialect::Language;
use crate::io::ModelIO;
use serde::{Deserialize, Serialize};

fn default_prune() -> bool {
    true
}
fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}
fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeneratorConfig {
    /// Output language of the generated function.
    #[serde(default)]
    pub language: Language,
    /// Collapse splits whose children predict the same label before emitting.
    #[serde(default = "default_prune")]
    pub prune: bool,
    /// Spaces per indentation level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Name of the generated function.
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            language: Language::Python,
            prune: true,
            indent_width: DEFAULT_INDENT_WIDTH,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

impl ModelIO for GeneratorConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert!(matches!(config.language, Language::Python));
        assert!(config.prune);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.function_name, "tree");
    }

    #[test]
    fn test_generator_config_partial_json() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"language": "C"}"#).unwrap();
        assert!(matches!(config.language, Language::C));
        assert!(config.prune);
        assert_eq!(config.indent_width, 2);

        let config = GeneratorConfig::from_json(r#"{"prune": false, "function_name": "predict"}"#).unwrap();
        assert!(matches!(config.language, Language::Python));
        assert!(!config.prune);
        assert_eq!(config.function_name, "predict");
    }

    #[test]
    fn test_generator_config_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let config = GeneratorConfig {
            language: Language::C,
            indent_width: 4,
            ..GeneratorConfig::default()
        };
        config.save(&file_path).unwrap();
        let config2 = GeneratorConfig::load(&file_path).unwrap();
        assert!(matches!(config2.language, Language::C));
        assert_eq!(config2.indent_width, 4);
    }
}
