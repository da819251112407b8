// Accent element handler

use crate::formula::omml::elements::{AccentNode, MathTree, NodeId, NodeKind};
use crate::formula::omml::properties::property_val;
use crate::formula::omml::xml::XmlElement;

/// Handler for accents (`m:acc`)
pub struct AccentHandler;

impl AccentHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::Accent(AccentNode {
            chr: property_val(elem, "accPr", "chr").map(str::to_owned),
            base: None,
        })
    }

    pub fn handle_end(node: &mut AccentNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
    }
}
