use super::tree::Tree;
use crate::errors::TreeCodeError;

impl Tree {
    /// Label the tree assigns to a single row of feature values.
    pub fn predict_row(&self, row: &[f64]) -> Result<&str, TreeCodeError> {
        let mut node = self.root();
        while let Some(f) = node.feature_index() {
            let value = row.get(f).ok_or(TreeCodeError::RowTooShort {
                node: node.num,
                feature: f,
                row_len: row.len(),
            })?;
            match node.get_child_idx(*value) {
                Some(child) => node = &self.nodes[child],
                None => break,
            }
        }
        Ok(node.label().unwrap_or_default())
    }

    /// Predict every row of a row major matrix with `cols` columns.
    pub fn predict(&self, data: &[f64], cols: usize) -> Result<Vec<&str>, TreeCodeError> {
        if cols == 0 {
            return Err(TreeCodeError::ZeroColumns);
        }
        data.chunks(cols).map(|row| self.predict_row(row)).collect()
    }
}
