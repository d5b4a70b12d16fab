//! Logic ASTs: one expression tree for a family of nested logics.
//!
//! The family covers propositional logic, linear temporal logic (LTL), the spatio-temporal
//! reach/escape logic STREL and the graph-indexed temporal logic STL-GO. Each layer extends
//! the boolean skeleton with its own modal operators; all of them share the [`Expr`] type.
//!
//! Overview
//! - [`expr`]: node kinds and smart constructors keeping trees semi-reduced.
//! - [`transform`]: expansion of derived connectives, negation normal form and horizons,
//!   written once for every layer.
//! - [`lattice`]: which layer a formula belongs to.
//! - [`transformer`]: chained per-layer rule tables assembling syntax trees.
//! - [`walker`]: iterative traversals.
//! - [`parse`]: text to expression through the `logic-asts-grammar` crate.
//!
//! Example
//! ```
//! use logic_asts::prelude::*;
//!
//! let e = parse("!(p U[0,5] q) & G[0,3] r", "ltl").unwrap();
//! assert!(e.is_ltl());
//! assert_eq!(e.horizon(), Horizon::Bounded(5));
//!
//! let nnf = parse("!G (p -> F q)", "ltl").unwrap().to_nnf();
//! assert_eq!(nnf.to_string(), "F (p & G !q)");
//! ```
//!
//! [`Expr`]: crate::expr::Expr
//! [`parse`]: crate::parser::parse

/// Error types shared by construction, validation and parsing.
pub mod error;
/// Expression tree: node kinds, smart constructors, rendering.
pub mod expr;
/// Time and distance bounds.
pub mod interval;
/// Layer membership of formulas.
pub mod lattice;
/// Parsing entry points.
pub mod parser;
/// Expansion, negation normal form and horizon.
pub mod transform;
/// Syntax-tree to expression assembly.
pub mod transformer;
/// Tree traversals.
pub mod walker;

pub use logic_asts_grammar::Layer;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Expr` with its constructors, `View` and the `Modal` trait
    //! - `Interval` and `Horizon`
    //! - `Layer` and the parsing entry points
    //! - Error types
    pub use crate::error::{
        ConfigurationError, ConstructionError, ParseError, ParseResult, ValidationError,
    };
    pub use crate::expr::{Expr, Modal, Operator, View};
    pub use crate::interval::{Horizon, Interval};
    pub use crate::parser::{parse, parse_expr};
    pub use crate::walker::walk;
    pub use logic_asts_grammar::{Layer, SyntaxError};
}
