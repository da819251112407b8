// Per-kind build steps
//
// `handle_start` reads the element's own properties before its children are
// built; `handle_end` resolves kind fields from the finished child nodes.

mod accent;
mod bar;
mod box_handler;
mod delim;
mod eq_arr;
mod fraction;
mod function;
mod group_char;
mod limit;
mod matrix;
mod nary;
mod phantom;
mod radical;
mod run;
mod script;

pub use accent::AccentHandler;
pub use bar::BarHandler;
pub use box_handler::BoxHandler;
pub use delim::DelimiterHandler;
pub use eq_arr::EqArrHandler;
pub use fraction::FractionHandler;
pub use function::FunctionHandler;
pub use group_char::GroupCharHandler;
pub use limit::LimitHandler;
pub use matrix::{MatrixHandler, MatrixRowHandler};
pub use nary::NaryHandler;
pub use phantom::PhantomHandler;
pub use radical::RadicalHandler;
pub use run::RunHandler;
pub use script::{PreScriptHandler, ScriptHandler};

use super::elements::{ElementType, MathTree, NodeId, NodeKind};
use super::xml::XmlElement;

/// Create the node kind for a registered element, with its properties read.
pub fn handle_start(element_type: ElementType, elem: &XmlElement) -> NodeKind {
    match element_type {
        ElementType::Run => RunHandler::handle_start(elem),
        ElementType::Fraction => FractionHandler::handle_start(elem),
        ElementType::Radical => RadicalHandler::handle_start(elem),
        ElementType::Subscript | ElementType::Superscript | ElementType::SubSup => {
            ScriptHandler::handle_start()
        },
        ElementType::PreScript => PreScriptHandler::handle_start(),
        ElementType::Delimiter => DelimiterHandler::handle_start(elem),
        ElementType::Function => FunctionHandler::handle_start(),
        ElementType::Nary => NaryHandler::handle_start(elem),
        ElementType::Matrix => MatrixHandler::handle_start(),
        ElementType::MatrixRow => MatrixRowHandler::handle_start(),
        ElementType::LimLow => LimitHandler::handle_start(false),
        ElementType::LimUpp => LimitHandler::handle_start(true),
        ElementType::EqArr => EqArrHandler::handle_start(),
        ElementType::Accent => AccentHandler::handle_start(elem),
        ElementType::Bar => BarHandler::handle_start(elem),
        ElementType::Box => BoxHandler::handle_start(false),
        ElementType::BorderBox => BoxHandler::handle_start(true),
        ElementType::GroupChar => GroupCharHandler::handle_start(elem),
        ElementType::Phantom => PhantomHandler::handle_start(elem),
    }
}

/// Whether children of this element are built as nodes.
#[inline]
pub fn builds_children(element_type: ElementType) -> bool {
    element_type != ElementType::Run
}

/// Resolve kind-specific fields once all children of `id` exist.
pub fn handle_end(kind: &mut NodeKind, tree: &MathTree, id: NodeId) {
    match kind {
        NodeKind::Generic | NodeKind::Run(_) => {},
        NodeKind::Fraction(node) => FractionHandler::handle_end(node, tree, id),
        NodeKind::Radical(node) => RadicalHandler::handle_end(node, tree, id),
        NodeKind::Script(node) => ScriptHandler::handle_end(node, tree, id),
        NodeKind::PreScript(node) => PreScriptHandler::handle_end(node, tree, id),
        NodeKind::Delimiter(node) => DelimiterHandler::handle_end(node, tree, id),
        NodeKind::Function(node) => FunctionHandler::handle_end(node, tree, id),
        NodeKind::Nary(node) => NaryHandler::handle_end(node, tree, id),
        NodeKind::Matrix(node) => MatrixHandler::handle_end(node, tree, id),
        NodeKind::MatrixRow(node) => MatrixRowHandler::handle_end(node, tree, id),
        NodeKind::LimLow(node) | NodeKind::LimUpp(node) => LimitHandler::handle_end(node, tree, id),
        NodeKind::EqArray(node) => EqArrHandler::handle_end(node, tree, id),
        NodeKind::Accent(node) => AccentHandler::handle_end(node, tree, id),
        NodeKind::Bar(node) => BarHandler::handle_end(node, tree, id),
        NodeKind::Box(node) => BoxHandler::handle_end(node, tree, id),
        NodeKind::GroupChar(node) => GroupCharHandler::handle_end(node, tree, id),
        NodeKind::Phantom(node) => PhantomHandler::handle_end(node, tree, id),
    }
}
