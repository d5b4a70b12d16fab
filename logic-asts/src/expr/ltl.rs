use smallvec::SmallVec;

use crate::expr::{Expr, Modal, Operand, Operator};
use crate::interval::{Horizon, Interval};

/// `X[n] arg`: `arg` holds `n` steps from now.
///
/// Without a step count the operator declares no upper bound and its horizon is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Next<V> {
    pub(crate) arg: Box<Expr<V>>,
    pub(crate) steps: Option<u64>,
}

impl<V> Next<V> {
    #[inline]
    pub fn arg(&self) -> &Expr<V> {
        &self.arg
    }

    #[inline]
    pub fn steps(&self) -> Option<u64> {
        self.steps
    }
}

impl<V> Modal<V> for Next<V> {
    #[inline]
    fn operator(&self) -> Operator {
        Operator::Next
    }

    fn operands(&self) -> SmallVec<&Expr<V>, 2> {
        SmallVec::from_iter([self.arg()])
    }

    fn map_operands(&self, f: &mut dyn FnMut(&Expr<V>) -> Expr<V>) -> Expr<V> {
        Expr::next(f(self.arg()), self.steps)
    }

    #[inline]
    fn lookahead(&self) -> Horizon {
        self.steps.map_or(Horizon::Unbounded, Horizon::Bounded)
    }

    // Next is self-dual
    fn dual(&self, f: &mut dyn FnMut(&Expr<V>) -> Expr<V>) -> Option<Expr<V>> {
        Some(self.map_operands(f))
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Next<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("X")?;
        if let Some(steps) = self.steps {
            write!(f, "[{steps}]")?;
        }
        write!(f, " {}", Operand(self.arg()))
    }
}

bounded_unary!(
    /// `G[a,b] arg`: `arg` holds at every instant of the interval.
    Always,
    symbol = "G",
    build = always,
    dual = eventually
);

bounded_unary!(
    /// `F[a,b] arg`: `arg` holds at some instant of the interval.
    Eventually,
    symbol = "F",
    build = eventually,
    dual = always
);

bounded_binary!(
    /// `lhs U[a,b] rhs`: `rhs` eventually holds within the interval and `lhs` holds until then.
    Until,
    symbol = "U",
    build = until
);

impl<V> Expr<V> {
    /// `X[steps] arg`.
    #[inline]
    pub fn next(arg: Self, steps: Option<u64>) -> Self {
        Expr::Next(Next {
            arg: Box::new(arg),
            steps,
        })
    }

    /// `G[interval] arg`.
    #[inline]
    pub fn always(arg: Self, interval: Option<Interval>) -> Self {
        Expr::Always(Always {
            arg: Box::new(arg),
            interval,
        })
    }

    /// `F[interval] arg`.
    #[inline]
    pub fn eventually(arg: Self, interval: Option<Interval>) -> Self {
        Expr::Eventually(Eventually {
            arg: Box::new(arg),
            interval,
        })
    }

    /// `lhs U[interval] rhs`.
    #[inline]
    pub fn until(lhs: Self, rhs: Self, interval: Option<Interval>) -> Self {
        Expr::Until(Until {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            interval,
        })
    }
}
