use logic_asts_grammar::{Layer, SyntaxError};
use strum::{EnumIs, IntoEnumIterator};
use thiserror::Error;

use crate::expr::Operator;

/// A node would violate an arity or shape invariant.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum ConstructionError {
    /// `And`/`Or` built from fewer than two operands.
    #[error("`{operator}` needs at least 2 operands, got {count}")]
    TooFewOperands { operator: Operator, count: usize },

    /// Graph operator built without any graph label.
    #[error("graph operator `{operator}` needs at least one graph label")]
    EmptyGraphSet { operator: Operator },

    /// The syntax tree names a rule that no table in the chain handles.
    #[error(
        "no rule named `{rule}` in the `{layer}` rule table or in any table it extends"
    )]
    UnknownRule { rule: &'static str, layer: Layer },

    /// A rule received fewer children than it consumes.
    #[error("rule `{rule}` is missing child #{index} ({expected})")]
    MissingChild {
        rule: &'static str,
        index: usize,
        expected: &'static str,
    },

    /// A rule received a child of the wrong shape.
    #[error("rule `{rule}` expected {expected} as child #{index}, found {found}")]
    UnexpectedChild {
        rule: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A rule received more children than it consumes.
    #[error("rule `{rule}` received {count} children, more than it consumes")]
    TrailingChildren { rule: &'static str, count: usize },

    /// The whole tree did not reduce to a formula.
    #[error("rule `{rule}` produced {found} where a formula was expected")]
    NotAFormula {
        rule: &'static str,
        found: &'static str,
    },

    /// An integer token could not be read.
    #[error("`{text}` is not a valid integer: {reason}")]
    InvalidNumber { text: String, reason: String },
}

/// An interval or step bound violates its invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs, Error)]
pub enum ValidationError {
    #[error("bound {bound} is negative, bounds must be non-negative")]
    NegativeBound { bound: i64 },

    #[error("interval [{bound},{bound}] is a point, expected start < end")]
    PointInterval { bound: u64 },

    #[error("interval [{start},{end}] is reversed, expected start < end")]
    ReversedInterval { start: u64, end: u64 },
}

/// The caller asked for something this build does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown grammar layer `{name}`, expected one of: {}", known_layers())]
    UnknownLayer { name: String },
}

fn known_layers() -> String {
    Layer::iter()
        .map(|layer| layer.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any failure of [`parse`](crate::parser::parse).
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type ParseResult<T> = Result<T, ParseError>;
