// Matrix conversion logic for LaTeX conversion
//
// Matrices and equation arrays become environments; the environment name
// follows the fence of an enclosing delimiter.

use super::converter::LatexConverter;
use super::fence::{enclosing_delimiter, is_cases_fence};
use crate::formula::latex::matrix::{
    CELL_SEPARATOR, MatrixFence, matrix_fence_to_env, write_environment,
};
use crate::formula::omml::{EqArrayNode, MathTree, MatrixNode, MatrixRowNode, NodeId, NodeKind};

impl LatexConverter {
    /// Cells of one row joined with `&`
    fn render_row(&self, tree: &MathTree, row: &MatrixRowNode) -> String {
        let cells: Vec<String> = row.cells.iter().map(|&cell| self.render(tree, cell)).collect();
        cells.join(CELL_SEPARATOR)
    }

    pub(super) fn write_matrix(
        &self,
        tree: &MathTree,
        id: NodeId,
        node: &MatrixNode,
        buffer: &mut String,
    ) {
        let rows: Vec<String> = node
            .rows
            .iter()
            .filter_map(|&row| match tree.node(row).kind() {
                NodeKind::MatrixRow(row) if !row.cells.is_empty() => {
                    Some(self.render_row(tree, row))
                },
                _ => None,
            })
            .collect();
        if rows.is_empty() {
            return;
        }

        let fence = enclosing_delimiter(tree, id)
            .map(|delim| MatrixFence::from_delimiters(&delim.begin, &delim.end))
            .unwrap_or(MatrixFence::None);
        write_environment(buffer, matrix_fence_to_env(fence), &rows);
    }

    pub(super) fn write_matrix_row(
        &self,
        tree: &MathTree,
        node: &MatrixRowNode,
        buffer: &mut String,
    ) {
        buffer.push_str(&self.render_row(tree, node));
    }

    pub(super) fn write_eq_array(
        &self,
        tree: &MathTree,
        id: NodeId,
        node: &EqArrayNode,
        buffer: &mut String,
    ) {
        if node.rows.is_empty() {
            return;
        }
        let rows: Vec<String> = node.rows.iter().map(|&row| self.render(tree, row)).collect();

        let env = if enclosing_delimiter(tree, id).is_some_and(is_cases_fence) {
            "cases"
        } else {
            self.options.equation_array.name()
        };
        write_environment(buffer, env, &rows);
    }
}
