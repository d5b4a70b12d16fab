//! Graph operators of STL-GO.
//!
//! Both operators quantify over the edges of the typed graphs named in their label set: `in` looks
//! at incoming edges, `out` at outgoing ones, and the optional interval bounds how many
//! qualifying edges must exist. They carry no temporal bound, so they add nothing to a horizon.
use std::collections::BTreeSet;
use std::fmt;

use smallvec::SmallVec;

use crate::error::ConstructionError;
use crate::expr::{Expr, Modal, Operand, Operator};
use crate::interval::{Horizon, Interval};

macro_rules! graph_operator {
    ($(#[$meta:meta])* $name:ident, keyword = $keyword:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<V> {
            arg: Box<Expr<V>>,
            graphs: BTreeSet<String>,
            edges: Option<Interval>,
        }

        impl<V> $name<V> {
            #[inline]
            pub fn arg(&self) -> &Expr<V> {
                &self.arg
            }

            /// Graph-type labels, never empty.
            #[inline]
            pub fn graphs(&self) -> &BTreeSet<String> {
                &self.graphs
            }

            /// Bounds on the number of qualifying edges.
            #[inline]
            pub fn edges(&self) -> Option<&Interval> {
                self.edges.as_ref()
            }

            fn rebuild(&self, arg: Expr<V>) -> Expr<V> {
                Expr::$name($name {
                    arg: Box::new(arg),
                    graphs: self.graphs.clone(),
                    edges: self.edges,
                })
            }
        }

        impl<V> Modal<V> for $name<V> {
            #[inline]
            fn operator(&self) -> Operator {
                Operator::$name
            }

            fn operands(&self) -> SmallVec<&Expr<V>, 2> {
                SmallVec::from_iter([self.arg()])
            }

            fn map_operands(&self, f: &mut dyn FnMut(&Expr<V>) -> Expr<V>) -> Expr<V> {
                self.rebuild(f(self.arg()))
            }

            #[inline]
            fn lookahead(&self) -> Horizon {
                Horizon::ZERO
            }
        }

        impl<V: fmt::Display> fmt::Display for $name<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{{", $keyword)?;
                for (i, graph) in self.graphs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(graph)?;
                }
                f.write_str("}")?;
                if let Some(edges) = &self.edges {
                    write!(f, "{edges}")?;
                }
                write!(f, " {}", Operand(self.arg()))
            }
        }
    };
}

graph_operator!(
    /// `in{g1,..}[a,b] arg`: the number of incoming edges of the listed graph types whose
    /// source satisfies `arg` lies within the bounds.
    GraphIncoming,
    keyword = "in"
);

graph_operator!(
    /// `out{g1,..}[a,b] arg`: the number of outgoing edges of the listed graph types whose
    /// target satisfies `arg` lies within the bounds.
    GraphOutgoing,
    keyword = "out"
);

fn graph_set<S: Into<String>>(
    operator: Operator,
    graphs: impl IntoIterator<Item = S>,
) -> Result<BTreeSet<String>, ConstructionError> {
    let graphs: BTreeSet<String> = graphs.into_iter().map(Into::into).collect();
    if graphs.is_empty() {
        return Err(ConstructionError::EmptyGraphSet { operator });
    }
    Ok(graphs)
}

impl<V> Expr<V> {
    /// `in{graphs}[edges] arg`; fails when `graphs` is empty.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    ///
    /// let e: Expr = Expr::graph_incoming(Expr::var("p"), ["c", "s"], None).unwrap();
    /// assert_eq!(e.to_string(), "in{c,s} p");
    /// assert!(Expr::<String>::graph_incoming(Expr::var("p"), Vec::<String>::new(), None).is_err());
    /// ```
    pub fn graph_incoming<S: Into<String>>(
        arg: Self,
        graphs: impl IntoIterator<Item = S>,
        edges: Option<Interval>,
    ) -> Result<Self, ConstructionError> {
        Ok(Expr::GraphIncoming(GraphIncoming {
            arg: Box::new(arg),
            graphs: graph_set(Operator::GraphIncoming, graphs)?,
            edges,
        }))
    }

    /// `out{graphs}[edges] arg`; fails when `graphs` is empty.
    pub fn graph_outgoing<S: Into<String>>(
        arg: Self,
        graphs: impl IntoIterator<Item = S>,
        edges: Option<Interval>,
    ) -> Result<Self, ConstructionError> {
        Ok(Expr::GraphOutgoing(GraphOutgoing {
            arg: Box::new(arg),
            graphs: graph_set(Operator::GraphOutgoing, graphs)?,
            edges,
        }))
    }
}
