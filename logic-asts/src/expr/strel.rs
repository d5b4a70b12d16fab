//! Spatial operators of STREL. Intervals here bound the distance travelled in the space graph.
use crate::expr::Expr;
use crate::interval::Interval;

bounded_unary!(
    /// `everywhere[a,b] arg`: `arg` holds at every location within the distance bounds.
    Everywhere,
    symbol = "everywhere",
    build = everywhere,
    dual = somewhere
);

bounded_unary!(
    /// `somewhere[a,b] arg`: `arg` holds at some location within the distance bounds.
    Somewhere,
    symbol = "somewhere",
    build = somewhere,
    dual = everywhere
);

bounded_unary!(
    /// `escape[a,b] arg`: a route leaving the current location through `arg` locations reaches
    /// a distance within the bounds.
    Escape,
    symbol = "escape",
    build = escape
);

bounded_binary!(
    /// `lhs reach[a,b] rhs`: a location satisfying `rhs` is reachable within the bounds through
    /// locations satisfying `lhs`.
    Reach,
    symbol = "reach",
    build = reach
);

impl<V> Expr<V> {
    #[inline]
    pub fn everywhere(arg: Self, interval: Option<Interval>) -> Self {
        Expr::Everywhere(Everywhere {
            arg: Box::new(arg),
            interval,
        })
    }

    #[inline]
    pub fn somewhere(arg: Self, interval: Option<Interval>) -> Self {
        Expr::Somewhere(Somewhere {
            arg: Box::new(arg),
            interval,
        })
    }

    #[inline]
    pub fn escape(arg: Self, interval: Option<Interval>) -> Self {
        Expr::Escape(Escape {
            arg: Box::new(arg),
            interval,
        })
    }

    #[inline]
    pub fn reach(lhs: Self, rhs: Self, interval: Option<Interval>) -> Self {
        Expr::Reach(Reach {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            interval,
        })
    }
}
