//! Boolean skeleton shared by every layer.
//!
//! `Not` and the junctions (`And`/`Or`) keep their fields private: the only way to build them
//! is through [`Expr::not`], [`Expr::and`], [`Expr::or`] and their n-ary forms, which fold
//! literals and flatten nested junctions on the fly. The derived connectives (`->`, `<->`, `^`)
//! are plain records; only [`Expr::expand`] and [`Expr::to_nnf`] rewrite them.
use crate::error::ConstructionError;
use crate::expr::{Expr, Operator};

/// Negation. Never wraps a literal or another negation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Not<V> {
    arg: Box<Expr<V>>,
}

impl<V> Not<V> {
    #[inline]
    pub fn arg(&self) -> &Expr<V> {
        &self.arg
    }
}

/// Operand list of an `And` or an `Or`: at least two operands, none of them a literal or a
/// junction of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Junction<V> {
    args: Vec<Expr<V>>,
}

impl<V> Junction<V> {
    fn pair(lhs: Expr<V>, rhs: Expr<V>) -> Self {
        Self {
            args: vec![lhs, rhs],
        }
    }

    #[inline]
    pub fn args(&self) -> &[Expr<V>] {
        &self.args
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Always false for a junction built through the smart constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Expr<V>> {
        self.args.iter()
    }
}

impl<'a, V> IntoIterator for &'a Junction<V> {
    type Item = &'a Expr<V>;
    type IntoIter = std::slice::Iter<'a, Expr<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

macro_rules! derived_connective {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<V> {
            lhs: Box<Expr<V>>,
            rhs: Box<Expr<V>>,
        }

        impl<V> $name<V> {
            #[inline]
            pub fn lhs(&self) -> &Expr<V> {
                &self.lhs
            }

            #[inline]
            pub fn rhs(&self) -> &Expr<V> {
                &self.rhs
            }
        }
    };
}

derived_connective!(
    /// `lhs -> rhs`.
    Implies
);
derived_connective!(
    /// `lhs <-> rhs`.
    Equiv
);
derived_connective!(
    /// `lhs ^ rhs`, exclusive or.
    Xor
);

/// Binary junction constructor folding literals and flattening same-kind operands.
///
/// `$absorbing` is the literal that swallows the whole junction (`false` for `And`); the other
/// literal is the identity and disappears.
macro_rules! junction_constructor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, absorbing = $absorbing:literal) => {
        $(#[$meta])*
        pub fn $name(lhs: Self, rhs: Self) -> Self {
            match (lhs, rhs) {
                (Expr::Literal($absorbing), _) | (_, Expr::Literal($absorbing)) => {
                    Expr::Literal($absorbing)
                }
                (Expr::Literal(_), other) | (other, Expr::Literal(_)) => other,
                (Expr::$variant(mut lhs), Expr::$variant(rhs)) => {
                    lhs.args.extend(rhs.args);
                    Expr::$variant(lhs)
                }
                (Expr::$variant(mut lhs), rhs) => {
                    lhs.args.push(rhs);
                    Expr::$variant(lhs)
                }
                (lhs, Expr::$variant(mut rhs)) => {
                    rhs.args.insert(0, lhs);
                    Expr::$variant(rhs)
                }
                (lhs, rhs) => Expr::$variant(Junction::pair(lhs, rhs)),
            }
        }
    };
}

impl<V> Expr<V> {
    /// Boolean constant.
    #[inline]
    pub fn literal(value: bool) -> Self {
        Expr::Literal(value)
    }

    /// `true`.
    #[inline]
    pub fn top() -> Self {
        Expr::Literal(true)
    }

    /// `false`.
    #[inline]
    pub fn bottom() -> Self {
        Expr::Literal(false)
    }

    #[inline]
    pub fn var(name: impl Into<V>) -> Self {
        Expr::Variable(name.into())
    }

    /// Negation: flips literals and cancels double negation.
    ///
    /// ```
    /// use logic_asts::expr::Expr;
    ///
    /// let p: Expr = Expr::var("p");
    /// assert_eq!(Expr::not(Expr::not(p.clone())), p);
    /// assert_eq!(Expr::<String>::not(Expr::top()), Expr::bottom());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn not(arg: Self) -> Self {
        match arg {
            Expr::Literal(value) => Expr::Literal(!value),
            Expr::Not(inner) => *inner.arg,
            arg => Expr::Not(Not { arg: Box::new(arg) }),
        }
    }

    junction_constructor!(
        /// Conjunction of two formulas.
        ///
        /// `false` absorbs, `true` vanishes, and operands that are already conjunctions are
        /// spliced in place so that `(a & b) & c` has the three operands `a, b, c` in order.
        and,
        And,
        absorbing = false
    );

    junction_constructor!(
        /// Disjunction of two formulas; the exact dual of [`Expr::and`].
        or,
        Or,
        absorbing = true
    );

    /// Conjunction of any number of formulas, `true` when there are none.
    pub fn and_all(args: impl IntoIterator<Item = Self>) -> Self {
        args.into_iter().fold(Expr::top(), Expr::and)
    }

    /// Disjunction of any number of formulas, `false` when there are none.
    pub fn or_all(args: impl IntoIterator<Item = Self>) -> Self {
        args.into_iter().fold(Expr::bottom(), Expr::or)
    }

    /// Conjunction of an explicit operand list, which must hold at least two formulas.
    ///
    /// The result is still folded and flattened, so it is not necessarily an `And`.
    pub fn try_and(args: impl IntoIterator<Item = Self>) -> Result<Self, ConstructionError> {
        let args = Self::at_least_two(Operator::And, args)?;
        Ok(Self::and_all(args))
    }

    /// Disjunction of an explicit operand list, which must hold at least two formulas.
    pub fn try_or(args: impl IntoIterator<Item = Self>) -> Result<Self, ConstructionError> {
        let args = Self::at_least_two(Operator::Or, args)?;
        Ok(Self::or_all(args))
    }

    fn at_least_two(
        operator: Operator,
        args: impl IntoIterator<Item = Self>,
    ) -> Result<Vec<Self>, ConstructionError> {
        let args: Vec<Self> = args.into_iter().collect();
        if args.len() < 2 {
            return Err(ConstructionError::TooFewOperands {
                operator,
                count: args.len(),
            });
        }
        Ok(args)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Implies {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Equiv(Equiv {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Xor {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}

impl<V> std::ops::Not for Expr<V> {
    type Output = Expr<V>;

    #[inline]
    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl<V> std::ops::BitAnd for Expr<V> {
    type Output = Expr<V>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl<V> std::ops::BitOr for Expr<V> {
    type Output = Expr<V>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}
