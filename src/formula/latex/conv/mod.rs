// Conversion logic module
//
// The converter dispatches on the node kind; rendering of each family of
// constructs lives in its own file.

pub mod converter;
mod fence;
mod function;
mod matrix;
mod node;
