//! Structural rewrites shared by every layer: expansion of derived connectives, negation normal
//! form and horizon computation.
//!
//! Each function is one recursion over [`Expr::view`]. Modal operators are handled through the
//! [`Modal`](crate::expr::Modal) trait only, so these functions work unchanged for any layer.
//! All three are total and pure.
use crate::expr::{Expr, View};
use crate::interval::Horizon;

impl<V: Clone> Expr<V> {
    /// Rewrite `->`, `<->` and `^` into `!`, `&` and `|`.
    ///
    /// - `a -> b` becomes `!a | b`
    /// - `a <-> b` becomes `(a | !b) & (!a | b)`
    /// - `a ^ b` becomes `(a & !b) | (!a & b)`
    ///
    /// Operands are expanded first and every node is rebuilt through the smart constructors,
    /// so the result is semi-reduced and free of derived connectives.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    ///
    /// let e: Expr = Expr::implies(Expr::var("p"), Expr::var("q"));
    /// assert_eq!(e.expand(), Expr::or(!Expr::var("p"), Expr::var("q")));
    /// ```
    pub fn expand(&self) -> Self {
        match self.view() {
            View::Literal(_) | View::Variable(_) => self.clone(),
            View::Not(arg) => Expr::not(arg.expand()),
            View::And(args) => Expr::and_all(args.iter().map(Expr::expand)),
            View::Or(args) => Expr::or_all(args.iter().map(Expr::expand)),
            View::Implies(lhs, rhs) => Expr::or(Expr::not(lhs.expand()), rhs.expand()),
            View::Equiv(lhs, rhs) => {
                let (lhs, rhs) = (lhs.expand(), rhs.expand());
                Expr::and(
                    Expr::or(lhs.clone(), Expr::not(rhs.clone())),
                    Expr::or(Expr::not(lhs), rhs),
                )
            }
            View::Xor(lhs, rhs) => {
                let (lhs, rhs) = (lhs.expand(), rhs.expand());
                Expr::or(
                    Expr::and(lhs.clone(), Expr::not(rhs.clone())),
                    Expr::and(Expr::not(lhs), rhs),
                )
            }
            View::Modal(op) => op.map_operands(&mut |arg: &Expr<V>| arg.expand()),
        }
    }

    /// Negation normal form.
    ///
    /// Negations are pushed down to variables with De Morgan's laws and the negation duals of
    /// the modal operators (`!X p` to `X !p`, `!G p` to `F !p`, `!everywhere p` to
    /// `somewhere !p`, and back). Operators without a dual (`U`, `reach`, `escape` and the
    /// graph operators) stop the descent: the negation stays right above them and they are
    /// treated as atoms. Derived connectives are expanded on the way.
    ///
    /// The result contains no `->`, `<->` or `^`, and `e.to_nnf().to_nnf() == e.to_nnf()`.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    ///
    /// let (p, q): (Expr, Expr) = (Expr::var("p"), Expr::var("q"));
    /// let e = !(p.clone() & q.clone());
    /// assert_eq!(e.to_nnf(), !p.clone() | !q.clone());
    ///
    /// let e = !Expr::always(p.clone(), None);
    /// assert_eq!(e.to_nnf(), Expr::eventually(!p, None));
    /// ```
    pub fn to_nnf(&self) -> Self {
        match self.view() {
            View::Literal(_) | View::Variable(_) => self.clone(),
            View::Not(arg) => arg.negated_nnf(),
            View::And(args) => Expr::and_all(args.iter().map(Expr::to_nnf)),
            View::Or(args) => Expr::or_all(args.iter().map(Expr::to_nnf)),
            View::Implies(..) | View::Equiv(..) | View::Xor(..) => self.expand().to_nnf(),
            View::Modal(op) => op.map_operands(&mut |arg: &Expr<V>| arg.to_nnf()),
        }
    }

    /// Negation normal form of `!self`.
    fn negated_nnf(&self) -> Self {
        match self.view() {
            View::Literal(value) => Expr::Literal(!value),
            View::Variable(_) => Expr::not(self.clone()),
            View::Not(arg) => arg.to_nnf(),
            View::And(args) => Expr::or_all(args.iter().map(Expr::negated_nnf)),
            View::Or(args) => Expr::and_all(args.iter().map(Expr::negated_nnf)),
            View::Implies(..) | View::Equiv(..) | View::Xor(..) => self.expand().negated_nnf(),
            View::Modal(op) => op
                .dual(&mut |arg: &Expr<V>| arg.negated_nnf())
                .unwrap_or_else(|| Expr::not(op.map_operands(&mut |arg: &Expr<V>| arg.to_nnf()))),
        }
    }
}

impl<V> Expr<V> {
    /// How far into the future (or, for spatial operators, how far away) the formula looks.
    ///
    /// Connectives take the maximum over their operands. A modal operator adds its own upper
    /// bound to that maximum; an operator declaring no upper bound makes the whole formula
    /// [`Horizon::Unbounded`]. Graph operators add nothing.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    /// use logic_asts::interval::{Horizon, Interval};
    ///
    /// let p: Expr = Expr::var("p");
    /// let e = Expr::always(Expr::next(p.clone(), Some(2)), Some(Interval::new(Some(0), Some(5)).unwrap()));
    /// assert_eq!(e.horizon(), Horizon::Bounded(7));
    /// assert_eq!(Expr::eventually(p, None).horizon(), Horizon::Unbounded);
    /// ```
    pub fn horizon(&self) -> Horizon {
        match self.view() {
            View::Literal(_) | View::Variable(_) => Horizon::ZERO,
            View::Not(arg) => arg.horizon(),
            View::And(args) | View::Or(args) => Self::max_horizon(args.iter()),
            View::Implies(lhs, rhs) | View::Equiv(lhs, rhs) | View::Xor(lhs, rhs) => {
                lhs.horizon().max(rhs.horizon())
            }
            View::Modal(op) => op.lookahead() + Self::max_horizon(op.operands()),
        }
    }

    fn max_horizon<'a>(args: impl IntoIterator<Item = &'a Expr<V>>) -> Horizon
    where
        V: 'a,
    {
        args.into_iter()
            .map(Expr::horizon)
            .max()
            .unwrap_or(Horizon::ZERO)
    }
}
