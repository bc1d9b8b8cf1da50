use crate::classifier::DecisionTreeClassifier;
use crate::dialect::Language;
use crate::emitter::{EmitStats, Emitter, RawTreeView};
use crate::errors::TreeCodeError;
use crate::features::FeatureTable;
use crate::generator::GeneratorConfig;
use crate::tree::Tree;
use log::info;
use rayon::prelude::*;
use std::io::Write;

/// Turns fitted classifiers into standalone functions.
#[derive(Clone, Debug, Default)]
pub struct CodeGenerator {
    pub cfg: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(cfg: GeneratorConfig) -> Self {
        CodeGenerator { cfg }
    }

    fn emitter(&self) -> Emitter<'_> {
        Emitter::new(&self.cfg.language)
            .with_function_name(&self.cfg.function_name)
            .with_indent_width(self.cfg.indent_width)
    }

    /// Import the classifier, prune it if configured, and render it.
    ///
    /// * `clf` - The fitted classifier.
    /// * `feature_names` - Name of every feature, in feature index order.
    pub fn render<S: AsRef<str>>(
        &self,
        clf: &DecisionTreeClassifier,
        feature_names: &[S],
    ) -> Result<(String, EmitStats), TreeCodeError> {
        let features = FeatureTable::new(feature_names);
        let mut tree = Tree::from_classifier(clf, &features)?;
        if self.cfg.prune {
            tree = tree.prune();
        }
        let (code, stats) = self.emitter().render(&tree, &features)?;
        info!(
            "generated {:?} function {}: {} decisions, {} leaves",
            self.cfg.language, self.cfg.function_name, stats.n_decisions, stats.n_leaves
        );
        Ok((code, stats))
    }

    /// Render the classifier straight from its raw arrays, never pruned.
    pub fn render_raw<S: AsRef<str>>(
        &self,
        clf: &DecisionTreeClassifier,
        feature_names: &[S],
    ) -> Result<(String, EmitStats), TreeCodeError> {
        let features = FeatureTable::new(feature_names);
        let view = RawTreeView::new(clf, &features)?;
        self.emitter().render(&view, &features)
    }

    /// Write the function for `clf` to `out`, see [`CodeGenerator::render`].
    /// Nothing is written if conversion fails.
    pub fn generate<S: AsRef<str>, W: Write>(
        &self,
        clf: &DecisionTreeClassifier,
        feature_names: &[S],
        out: &mut W,
    ) -> Result<EmitStats, TreeCodeError> {
        let (code, stats) = self.render(clf, feature_names)?;
        write_code(out, &code)?;
        Ok(stats)
    }

    /// Write the unpruned function for `clf` to `out`, see [`CodeGenerator::render_raw`].
    pub fn generate_raw<S: AsRef<str>, W: Write>(
        &self,
        clf: &DecisionTreeClassifier,
        feature_names: &[S],
        out: &mut W,
    ) -> Result<EmitStats, TreeCodeError> {
        let (code, stats) = self.render_raw(clf, feature_names)?;
        write_code(out, &code)?;
        Ok(stats)
    }

    /// Render several classifiers in parallel. Every job works on its own
    /// tree, results come back in input order.
    pub fn render_batch<S: AsRef<str> + Sync>(
        &self,
        jobs: &[(&DecisionTreeClassifier, &[S])],
    ) -> Vec<Result<(String, EmitStats), TreeCodeError>> {
        jobs.par_iter()
            .map(|&(clf, feature_names)| self.render(clf, feature_names))
            .collect()
    }
}

fn write_code<W: Write>(out: &mut W, code: &str) -> Result<(), TreeCodeError> {
    out.write_all(code.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| TreeCodeError::UnableToWrite(e.to_string()))
}

/// Prune `clf` and print it as a function in `language` to standard output.
/// Returns the number of decision nodes and leaves printed.
pub fn prune_tree_to_code<S: AsRef<str>>(
    clf: &DecisionTreeClassifier,
    feature_names: &[S],
    language: Language,
) -> Result<EmitStats, TreeCodeError> {
    CodeGenerator::default()
        .set_language(language)
        .generate(clf, feature_names, &mut std::io::stdout().lock())
}

/// Print `clf` exactly as fitted, as a function in `language`, to standard output.
/// Returns the number of decision nodes and leaves printed.
pub fn tree_to_raw_code<S: AsRef<str>>(
    clf: &DecisionTreeClassifier,
    feature_names: &[S],
    language: Language,
) -> Result<EmitStats, TreeCodeError> {
    CodeGenerator::default()
        .set_language(language)
        .generate_raw(clf, feature_names, &mut std::io::stdout().lock())
}
