// LaTeX output
//
// Symbol, operator and accent tables plus the converter that renders a
// built equation tree.

mod conv;
mod matrix;
mod operators;
mod symbols;
mod templates;
mod utils;

pub use conv::converter::LatexConverter;
pub use symbols::{convert_text, unicode_to_latex};
pub use utils::escape_latex;
