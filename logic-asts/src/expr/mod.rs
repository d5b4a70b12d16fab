//! One expression tree shared by every logic layer.
//!
//! Role
//! - [`Expr`] is the closed family of node kinds: the boolean skeleton (literals, variables,
//!   `!`, `&`, `|`, `->`, `<->`, `^`) plus the modal operators of the temporal, spatial and
//!   graph layers.
//! - Nodes are built through smart constructors ([`Expr::not`], [`Expr::and`], [`Expr::or`],
//!   [`Expr::always`], ...) which keep every tree semi-reduced: no double negation, no negated
//!   literal, no absorbed identity literal, no nested `And`-of-`And` or `Or`-of-`Or`, and no
//!   junction with fewer than two operands.
//! - [`Expr::view`] is the single exhaustive match over node kinds. Modal operators all come
//!   out as [`View::Modal`], so engine code handles every layer through the [`Modal`] trait
//!   and a new operator never touches the transformations.
//!
//! Example
//! ```
//! use logic_asts::expr::Expr;
//!
//! let p: Expr = Expr::var("p");
//! let q = Expr::var("q");
//! let e = !(p.clone() & q.clone()) | Expr::top();
//! assert_eq!(e, Expr::top());
//!
//! let e = (p.clone() & q.clone()) & p.clone();
//! assert_eq!(e.to_string(), "(p & q & p)");
//! assert_eq!(!!p.clone(), p);
//! ```
use std::fmt;

use smallvec::SmallVec;
use strum::{EnumDiscriminants, EnumIs, EnumIter, IntoStaticStr};

use crate::interval::Horizon;

/// Unary modal operator bounded by an optional interval.
///
/// Generates the node struct, its accessors, its [`Modal`] implementation (with a negation dual
/// when one is given) and its rendering.
macro_rules! bounded_unary {
    (
        $(#[$meta:meta])*
        $name:ident, symbol = $symbol:literal, build = $build:ident $(, dual = $dual:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<V> {
            pub(crate) arg: Box<$crate::expr::Expr<V>>,
            pub(crate) interval: Option<$crate::interval::Interval>,
        }

        impl<V> $name<V> {
            #[inline]
            pub fn arg(&self) -> &$crate::expr::Expr<V> {
                &self.arg
            }

            #[inline]
            pub fn interval(&self) -> Option<&$crate::interval::Interval> {
                self.interval.as_ref()
            }
        }

        impl<V> $crate::expr::Modal<V> for $name<V> {
            #[inline]
            fn operator(&self) -> $crate::expr::Operator {
                $crate::expr::Operator::$name
            }

            fn operands(&self) -> ::smallvec::SmallVec<&$crate::expr::Expr<V>, 2> {
                ::smallvec::SmallVec::from_iter([&*self.arg])
            }

            fn map_operands(
                &self,
                f: &mut dyn FnMut(&$crate::expr::Expr<V>) -> $crate::expr::Expr<V>,
            ) -> $crate::expr::Expr<V> {
                $crate::expr::Expr::$build(f(self.arg()), self.interval)
            }

            #[inline]
            fn lookahead(&self) -> $crate::interval::Horizon {
                $crate::interval::Interval::upper_of(self.interval.as_ref())
            }

            $(
                fn dual(
                    &self,
                    f: &mut dyn FnMut(&$crate::expr::Expr<V>) -> $crate::expr::Expr<V>,
                ) -> Option<$crate::expr::Expr<V>> {
                    Some($crate::expr::Expr::$dual(f(self.arg()), self.interval))
                }
            )?
        }

        impl<V: ::std::fmt::Display> ::std::fmt::Display for $name<V> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($symbol)?;
                if let Some(interval) = &self.interval {
                    write!(f, "{interval}")?;
                }
                write!(f, " {}", $crate::expr::Operand(self.arg()))
            }
        }
    };
}

/// Binary modal operator bounded by an optional interval, rendered infix.
macro_rules! bounded_binary {
    ($(#[$meta:meta])* $name:ident, symbol = $symbol:literal, build = $build:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<V> {
            pub(crate) lhs: Box<$crate::expr::Expr<V>>,
            pub(crate) rhs: Box<$crate::expr::Expr<V>>,
            pub(crate) interval: Option<$crate::interval::Interval>,
        }

        impl<V> $name<V> {
            #[inline]
            pub fn lhs(&self) -> &$crate::expr::Expr<V> {
                &self.lhs
            }

            #[inline]
            pub fn rhs(&self) -> &$crate::expr::Expr<V> {
                &self.rhs
            }

            #[inline]
            pub fn interval(&self) -> Option<&$crate::interval::Interval> {
                self.interval.as_ref()
            }
        }

        impl<V> $crate::expr::Modal<V> for $name<V> {
            #[inline]
            fn operator(&self) -> $crate::expr::Operator {
                $crate::expr::Operator::$name
            }

            fn operands(&self) -> ::smallvec::SmallVec<&$crate::expr::Expr<V>, 2> {
                ::smallvec::SmallVec::from_iter([&*self.lhs, &*self.rhs])
            }

            fn map_operands(
                &self,
                f: &mut dyn FnMut(&$crate::expr::Expr<V>) -> $crate::expr::Expr<V>,
            ) -> $crate::expr::Expr<V> {
                let lhs = f(self.lhs());
                let rhs = f(self.rhs());
                $crate::expr::Expr::$build(lhs, rhs, self.interval)
            }

            #[inline]
            fn lookahead(&self) -> $crate::interval::Horizon {
                $crate::interval::Interval::upper_of(self.interval.as_ref())
            }
        }

        impl<V: ::std::fmt::Display> ::std::fmt::Display for $name<V> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "({} {}", $crate::expr::Operand(self.lhs()), $symbol)?;
                if let Some(interval) = &self.interval {
                    write!(f, "{interval}")?;
                }
                write!(f, " {})", $crate::expr::Operand(self.rhs()))
            }
        }
    };
}

/// Boolean skeleton: literals, variables, junctions and derived connectives.
pub mod base;
/// Temporal operators: next, always, eventually, until.
pub mod ltl;
/// Graph operators over typed incoming/outgoing edges.
pub mod stl_go;
/// Spatial operators: everywhere, somewhere, reach, escape.
pub mod strel;

pub use base::{Equiv, Implies, Junction, Not, Xor};
pub use ltl::{Always, Eventually, Next, Until};
pub use stl_go::{GraphIncoming, GraphOutgoing};
pub use strel::{Escape, Everywhere, Reach, Somewhere};

/// A formula of any layer, over variables keyed by `V`.
///
/// Equality and hashing are structural. Every node owns its children; transformations build
/// new trees and never mutate.
///
/// The `Operator` tag enum is generated from the variants and reports the name of each node
/// kind and the layer introducing it (see [`Operator::layer`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(Operator), derive(Hash, EnumIter, IntoStaticStr, strum::Display))]
pub enum Expr<V = String> {
    Literal(bool),
    Variable(V),
    Not(Not<V>),
    And(Junction<V>),
    Or(Junction<V>),
    Implies(Implies<V>),
    Equiv(Equiv<V>),
    Xor(Xor<V>),

    Next(Next<V>),
    Always(Always<V>),
    Eventually(Eventually<V>),
    Until(Until<V>),

    Everywhere(Everywhere<V>),
    Somewhere(Somewhere<V>),
    Reach(Reach<V>),
    Escape(Escape<V>),

    GraphIncoming(GraphIncoming<V>),
    GraphOutgoing(GraphOutgoing<V>),
}

/// Borrowed shape of the outer node of an [`Expr`].
///
/// Every modal operator, whatever its layer, is exposed through [`View::Modal`].
pub enum View<'a, V> {
    Literal(bool),
    Variable(&'a V),
    Not(&'a Expr<V>),
    And(&'a [Expr<V>]),
    Or(&'a [Expr<V>]),
    Implies(&'a Expr<V>, &'a Expr<V>),
    Equiv(&'a Expr<V>, &'a Expr<V>),
    Xor(&'a Expr<V>, &'a Expr<V>),
    Modal(&'a dyn Modal<V>),
}

/// Behaviour a layer supplies for each of its modal operators.
///
/// The engine never names a concrete modal operator; it only asks for the operands, rebuilds
/// with mapped operands, reads the look-ahead and asks for a negation dual.
pub trait Modal<V> {
    fn operator(&self) -> Operator;

    /// Operands in source order.
    fn operands(&self) -> SmallVec<&Expr<V>, 2>;

    /// The same operator, bounds and labels, over `f` applied to each operand in order.
    fn map_operands(&self, f: &mut dyn FnMut(&Expr<V>) -> Expr<V>) -> Expr<V>;

    /// Look-ahead added by the operator itself on top of its operands.
    fn lookahead(&self) -> Horizon;

    /// The dual operator over `f` applied to each operand, when the family has one.
    ///
    /// With `f` negating its argument this yields a formula equivalent to the negation of
    /// `self`: `!G[a,b] p` becomes `F[a,b] !p`.
    fn dual(&self, f: &mut dyn FnMut(&Expr<V>) -> Expr<V>) -> Option<Expr<V>> {
        let _ = f;
        None
    }
}

impl<V> Expr<V> {
    /// Describe the outer node and borrow its children.
    pub fn view(&self) -> View<'_, V> {
        match self {
            Expr::Literal(value) => View::Literal(*value),
            Expr::Variable(name) => View::Variable(name),
            Expr::Not(node) => View::Not(node.arg()),
            Expr::And(node) => {
                debug_assert!(node.len() >= 2, "And with fewer than two operands");
                View::And(node.args())
            }
            Expr::Or(node) => {
                debug_assert!(node.len() >= 2, "Or with fewer than two operands");
                View::Or(node.args())
            }
            Expr::Implies(node) => View::Implies(node.lhs(), node.rhs()),
            Expr::Equiv(node) => View::Equiv(node.lhs(), node.rhs()),
            Expr::Xor(node) => View::Xor(node.lhs(), node.rhs()),
            Expr::Next(node) => View::Modal(node),
            Expr::Always(node) => View::Modal(node),
            Expr::Eventually(node) => View::Modal(node),
            Expr::Until(node) => View::Modal(node),
            Expr::Everywhere(node) => View::Modal(node),
            Expr::Somewhere(node) => View::Modal(node),
            Expr::Reach(node) => View::Modal(node),
            Expr::Escape(node) => View::Modal(node),
            Expr::GraphIncoming(node) => View::Modal(node),
            Expr::GraphOutgoing(node) => View::Modal(node),
        }
    }

    /// Tag of the outer node.
    #[inline]
    pub fn operator(&self) -> Operator {
        Operator::from(self)
    }

    /// The modal operator at the root, if any.
    pub fn as_modal(&self) -> Option<&dyn Modal<V>> {
        match self.view() {
            View::Modal(modal) => Some(modal),
            _ => None,
        }
    }
}

impl<V> From<bool> for Expr<V> {
    fn from(value: bool) -> Self {
        Expr::Literal(value)
    }
}

fn write_joined<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    args: &[Expr<V>],
    separator: &str,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", Operand(arg))?;
    }
    f.write_str(")")
}

/// A sub-formula in operand position: derived connectives get parentheses there, every other
/// node already renders as one unit.
pub(crate) struct Operand<'a, V>(pub(crate) &'a Expr<V>);

impl<V: fmt::Display> fmt::Display for Operand<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Implies(_) | Expr::Equiv(_) | Expr::Xor(_) => write!(f, "({})", self.0),
            expr => fmt::Display::fmt(expr, f),
        }
    }
}

/// Canonical text form.
///
/// Re-parseable by the grammar of the tree's layer as long as the tree holds no literal:
/// `t` and `f` read back as variables.
impl<V: fmt::Display> fmt::Display for Expr<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(true) => f.write_str("t"),
            Expr::Literal(false) => f.write_str("f"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Not(node) => write!(f, "!{}", Operand(node.arg())),
            Expr::And(node) => write_joined(f, node.args(), " & "),
            Expr::Or(node) => write_joined(f, node.args(), " | "),
            Expr::Implies(node) => {
                write!(f, "{} -> {}", Operand(node.lhs()), Operand(node.rhs()))
            }
            Expr::Equiv(node) => {
                write!(f, "{} <-> {}", Operand(node.lhs()), Operand(node.rhs()))
            }
            Expr::Xor(node) => write!(f, "{} ^ {}", Operand(node.lhs()), Operand(node.rhs())),
            Expr::Next(node) => fmt::Display::fmt(node, f),
            Expr::Always(node) => fmt::Display::fmt(node, f),
            Expr::Eventually(node) => fmt::Display::fmt(node, f),
            Expr::Until(node) => fmt::Display::fmt(node, f),
            Expr::Everywhere(node) => fmt::Display::fmt(node, f),
            Expr::Somewhere(node) => fmt::Display::fmt(node, f),
            Expr::Reach(node) => fmt::Display::fmt(node, f),
            Expr::Escape(node) => fmt::Display::fmt(node, f),
            Expr::GraphIncoming(node) => fmt::Display::fmt(node, f),
            Expr::GraphOutgoing(node) => fmt::Display::fmt(node, f),
        }
    }
}
