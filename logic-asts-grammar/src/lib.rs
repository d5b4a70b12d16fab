//! Grammars for a family of nested logics.
//!
//! This crate is the parsing engine of the workspace: it turns formula text into a generic
//! [`SyntaxTree`] (rule name plus ordered children) for one of four [`Layer`]s:
//! propositional logic, LTL, STREL and STL-GO. It knows nothing about formula semantics; the
//! `logic-asts` crate assembles trees into typed expressions.
//!
//! Example
//! ```
//! use logic_asts_grammar::{Child, Layer, parse_tree, rule};
//!
//! let tree = parse_tree("!Fp2", Layer::Ltl).unwrap();
//! assert_eq!(tree.rule, rule::NOT);
//! let Child::Tree(inner) = &tree.children[0] else { panic!("expected a sub-tree") };
//! assert_eq!(inner.rule, rule::EVENTUALLY);
//! ```

/// Syntax errors with source locations.
pub mod error;
/// Logic layers and their nesting.
pub mod layer;
/// Chumsky grammars for every layer.
pub mod parser;
/// Generic syntax tree shape.
pub mod tree;

pub use error::SyntaxError;
pub use layer::Layer;
pub use parser::{MAX_NESTING, parse_tree};
pub use tree::{Child, SyntaxTree, Token, rule, token};
