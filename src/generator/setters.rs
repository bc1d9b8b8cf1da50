use crate::dialect::Language;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    // Set methods for parameters

    /// Set the output language.
    /// * `language` - Dialect the function is rendered in.
    pub fn set_language(mut self, language: Language) -> Self {
        self.cfg.language = language;
        self
    }

    /// Set whether redundant splits are pruned before rendering.
    /// * `prune` - When false, the tree is rendered exactly as it was fitted.
    pub fn set_prune(mut self, prune: bool) -> Self {
        self.cfg.prune = prune;
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn set_indent_width(mut self, indent_width: usize) -> Self {
        self.cfg.indent_width = indent_width;
        self
    }

    /// Set the name of the generated function.
    pub fn set_function_name(mut self, function_name: &str) -> Self {
        self.cfg.function_name = function_name.to_string();
        self
    }
}
