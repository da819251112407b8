// LaTeX Converter Implementation
//
// This module contains the LatexConverter struct and the per-node dispatch.

use crate::formula::config::ConvertOptions;
use crate::formula::latex::utils::push_fragment;
use crate::formula::omml::{MathTree, NodeId, NodeKind};

/// LaTeX converter that renders a built equation tree
///
/// Rendering is a pure function of the tree: the converter holds only its
/// options and may be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct LatexConverter {
    pub(super) options: ConvertOptions,
}

impl LatexConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a whole tree, concatenating its roots
    ///
    /// # Example
    /// ```
    /// use omml2latex::{LatexConverter, OmmlParser};
    ///
    /// let tree = OmmlParser::new().parse("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
    /// assert_eq!(LatexConverter::new().convert(&tree), "x");
    /// # Ok::<(), omml2latex::OmmlError>(())
    /// ```
    pub fn convert(&self, tree: &MathTree) -> String {
        let mut buffer = String::with_capacity(tree.len() * 8);
        for &root in tree.roots() {
            self.write_node(tree, root, &mut buffer);
        }
        buffer
    }

    /// Convert the subtree rooted at `id`. Ids from another tree yield "".
    pub fn convert_node(&self, tree: &MathTree, id: NodeId) -> String {
        if tree.get(id).is_none() {
            return String::new();
        }
        self.render(tree, id)
    }

    /// Append a node's LaTeX to `buffer`, keeping control words separated.
    pub(super) fn write_node(&self, tree: &MathTree, id: NodeId, buffer: &mut String) {
        let latex = self.render(tree, id);
        push_fragment(buffer, &latex);
    }

    /// Concatenate the non-property children of `id`.
    pub(super) fn write_children(&self, tree: &MathTree, id: NodeId, buffer: &mut String) {
        for child in tree.content_children(id) {
            self.write_node(tree, child, buffer);
        }
    }

    pub(super) fn render(&self, tree: &MathTree, id: NodeId) -> String {
        let mut out = String::new();

        match tree.node(id).kind() {
            NodeKind::Generic => self.write_children(tree, id, &mut out),
            NodeKind::Run(run) => self.write_run(run, &mut out),
            NodeKind::Fraction(node) => self.write_fraction(tree, node, &mut out),
            NodeKind::Radical(node) => self.write_radical(tree, node, &mut out),
            NodeKind::Script(node) => self.write_script(tree, node, &mut out),
            NodeKind::PreScript(node) => self.write_pre_script(tree, node, &mut out),
            NodeKind::Delimiter(node) => self.write_delimiter(tree, node, &mut out),
            NodeKind::Function(node) => self.write_function(tree, node, &mut out),
            NodeKind::Nary(node) => self.write_nary(tree, node, &mut out),
            NodeKind::Matrix(node) => self.write_matrix(tree, id, node, &mut out),
            NodeKind::MatrixRow(node) => self.write_matrix_row(tree, node, &mut out),
            NodeKind::LimLow(node) => self.write_limit(tree, node, false, &mut out),
            NodeKind::LimUpp(node) => self.write_limit(tree, node, true, &mut out),
            NodeKind::EqArray(node) => self.write_eq_array(tree, id, node, &mut out),
            NodeKind::Accent(node) => self.write_accent(tree, node, &mut out),
            NodeKind::Bar(node) => self.write_bar(tree, node, &mut out),
            NodeKind::Box(node) => self.write_box(tree, node, &mut out),
            NodeKind::GroupChar(node) => self.write_group_char(tree, node, &mut out),
            NodeKind::Phantom(node) => self.write_phantom(tree, node, &mut out),
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::omml::OmmlParser;

    #[test]
    fn test_convert_is_idempotent() {
        let tree = OmmlParser::new()
            .parse("<m:oMath><m:r><m:t>α</m:t></m:r><m:r><m:t>x</m:t></m:r></m:oMath>")
            .unwrap();
        let converter = LatexConverter::new();
        let first = converter.convert(&tree);
        assert_eq!(first, "\\alpha x");
        assert_eq!(converter.convert(&tree), first);
    }

    #[test]
    fn test_convert_node_subtree() {
        let tree = OmmlParser::new()
            .parse("<m:f><m:num><m:r><m:t>1</m:t></m:r></m:num><m:den><m:r><m:t>2</m:t></m:r></m:den></m:f>")
            .unwrap();
        let converter = LatexConverter::new();
        let root = tree.roots()[0];
        let num = tree.child_by_tag(root, "num").unwrap();
        assert_eq!(converter.convert_node(&tree, num), "1");
        assert_eq!(converter.convert_node(&tree, root), "\\frac{1}{2}");
    }

    #[test]
    fn test_convert_node_with_foreign_id() {
        let small = OmmlParser::new().parse("<m:r><m:t>x</m:t></m:r>").unwrap();
        let big = OmmlParser::new()
            .parse("<m:oMath><m:r/><m:r/><m:r/><m:r/></m:oMath>")
            .unwrap();
        let last = *big.roots().last().unwrap();
        assert_eq!(LatexConverter::new().convert_node(&small, last), "");
    }
}
