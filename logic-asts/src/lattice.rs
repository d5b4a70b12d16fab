//! Classification of formulas into the nested logic layers.
//!
//! Every node kind is introduced by exactly one [`Layer`]; a node belongs to a layer when the
//! layer includes the one introducing it. The `is_*` predicates look at the root node only.
//! Trees produced by a single grammar never mix layers, so for parsed formulas the root check
//! is enough; for hand-built trees [`Expr::fits`] checks every node.
use logic_asts_grammar::Layer;

use crate::expr::{Expr, Operator};

impl Operator {
    /// The layer introducing this node kind.
    pub fn layer(self) -> Layer {
        match self {
            Operator::Literal
            | Operator::Variable
            | Operator::Not
            | Operator::And
            | Operator::Or
            | Operator::Implies
            | Operator::Equiv
            | Operator::Xor => Layer::Base,
            Operator::Next | Operator::Always | Operator::Eventually | Operator::Until => {
                Layer::Ltl
            }
            Operator::Everywhere | Operator::Somewhere | Operator::Reach | Operator::Escape => {
                Layer::Strel
            }
            Operator::GraphIncoming | Operator::GraphOutgoing => Layer::StlGo,
        }
    }

    /// Whether the operator quantifies over time, space or graph edges.
    #[inline]
    pub fn is_modal(self) -> bool {
        self.layer() != Layer::Base
    }
}

impl<V> Expr<V> {
    /// Whether the root node is an operator of `layer` (or of a layer it extends).
    #[inline]
    pub fn belongs_to(&self, layer: Layer) -> bool {
        layer.includes(self.operator().layer())
    }

    /// Root is a propositional node.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    ///
    /// let p: Expr = Expr::var("p");
    /// assert!(p.is_propositional());
    /// assert!(!Expr::always(p.clone(), None).is_propositional());
    /// assert!(Expr::always(p, None).is_ltl());
    /// ```
    #[inline]
    pub fn is_propositional(&self) -> bool {
        self.belongs_to(Layer::Base)
    }

    /// Root is a propositional or temporal node.
    #[inline]
    pub fn is_ltl(&self) -> bool {
        self.belongs_to(Layer::Ltl)
    }

    /// Root is a propositional, temporal or spatial node.
    #[inline]
    pub fn is_strel(&self) -> bool {
        self.belongs_to(Layer::Strel)
    }

    /// Root is a propositional, temporal or graph node.
    #[inline]
    pub fn is_stl_go(&self) -> bool {
        self.belongs_to(Layer::StlGo)
    }

    /// Whether every node of the tree belongs to `layer`.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    /// use logic_asts_grammar::Layer;
    ///
    /// let p: Expr = Expr::var("p");
    /// let e = p.clone() & Expr::somewhere(p, None);
    /// assert!(e.is_propositional());
    /// assert!(!e.fits(Layer::Ltl));
    /// assert!(e.fits(Layer::Strel));
    /// ```
    pub fn fits(&self, layer: Layer) -> bool {
        self.iter().all(|node| node.belongs_to(layer))
    }

    /// The smallest layer containing every node of the tree.
    ///
    /// `None` when the tree mixes spatial and graph operators, which no single layer allows.
    pub fn layer(&self) -> Option<Layer> {
        [Layer::Base, Layer::Ltl, Layer::Strel, Layer::StlGo]
            .into_iter()
            .find(|layer| self.fits(*layer))
    }
}
