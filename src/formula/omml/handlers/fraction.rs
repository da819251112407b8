// Fraction element handler

use crate::formula::omml::elements::{FractionNode, MathTree, NodeId, NodeKind};
use crate::formula::omml::properties::{parse_fraction_type, property_val};
use crate::formula::omml::xml::XmlElement;

/// Handler for fraction elements
pub struct FractionHandler;

impl FractionHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::Fraction(FractionNode {
            fraction_type: parse_fraction_type(property_val(elem, "fPr", "type")),
            ..Default::default()
        })
    }

    pub fn handle_end(node: &mut FractionNode, tree: &MathTree, id: NodeId) {
        node.numerator = tree.content_child(id, "num");
        node.denominator = tree.content_child(id, "den");
    }
}
