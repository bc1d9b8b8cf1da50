//! Iris Decision Tree to Code
//! ==========================
//! A depth three decision tree fitted on the Iris dataset, stored in the
//! array layout of a fitted tree, converted into standalone Python and C
//! functions. The unpruned baseline is printed first for comparison.
//!
//! ```bash
//! cargo run --release --example iris
//! ```

use std::error::Error;
use treecode::{tree_to_raw_code, CodeGenerator, DecisionTreeClassifier, Language, ModelIO};

const IRIS_TREE: &str = r#"{
    "classes": ["setosa", "versicolor", "virginica"],
    "tree": {
        "feature": [3, -2, 3, 2, -2, -2, 2, -2, -2],
        "threshold": [0.800000011920929, -2.0, 1.75, 4.950000047683716, -2.0, -2.0, 4.850000381469727, -2.0, -2.0],
        "children_left": [1, -1, 3, 4, -1, -1, 7, -1, -1],
        "children_right": [2, -1, 6, 5, -1, -1, 8, -1, -1],
        "value": [
            [50.0, 50.0, 50.0], [50.0, 0.0, 0.0], [0.0, 50.0, 50.0],
            [0.0, 49.0, 5.0], [0.0, 47.0, 1.0], [0.0, 2.0, 4.0],
            [0.0, 1.0, 45.0], [0.0, 1.0, 2.0], [0.0, 0.0, 43.0]
        ]
    }
}"#;

const FEATURE_NAMES: [&str; 4] = ["sepal length", "sepal width", "petal length", "petal width"];

fn main() -> Result<(), Box<dyn Error>> {
    let clf = DecisionTreeClassifier::from_json(IRIS_TREE)?;

    println!("# Raw tree");
    let raw = tree_to_raw_code(&clf, &FEATURE_NAMES, Language::Python)?;
    println!("# {} decisions, {} leaves\n", raw.n_decisions, raw.n_leaves);

    let generator = CodeGenerator::default();
    let mut stdout = std::io::stdout();
    for language in [Language::Python, Language::C] {
        println!("# Pruned tree, {:?}", language);
        let stats = generator
            .clone()
            .set_language(language)
            .generate(&clf, &FEATURE_NAMES, &mut stdout)?;
        println!("# {} decisions, {} leaves\n", stats.n_decisions, stats.n_leaves);
    }

    let flower = [6.1, 2.8, 4.9, 1.9];
    println!("Prediction for {:?}: {}", flower, clf.predict_row(&flower)?);
    Ok(())
}
