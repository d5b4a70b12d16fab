//! Iterative traversals over expression trees.
//!
//! - [`Expr::iter`] visits every node in pre-order.
//! - [`walk`] hands each node to a visitor which decides which children are visited next and
//!   with which input, so partial traversals and state threading need no recursion.
//!
//! Both use an explicit stack: memory is O(depth) for [`Expr::iter`] and O(scheduled nodes) for
//! [`walk`], and neither grows the call stack with the tree.
//!
//! Example: height of a tree
//! ```
//! use logic_asts::expr::Expr;
//! use logic_asts::walker::walk;
//!
//! let p: Expr = Expr::var("p");
//! let e = Expr::always(p.clone() & Expr::next(p, None), None);
//! let mut height = 0;
//! walk(&e, 1usize, |depth, node| {
//!     height = height.max(depth);
//!     node.schedule_children(depth + 1);
//! });
//! assert_eq!(height, 4);
//! ```
use std::collections::VecDeque;
use std::ops::Deref;

use smallvec::SmallVec;

use crate::expr::{Expr, View};

/// Pending visits: (node, parent, input).
type WalkerStack<'a, I, V> = VecDeque<(&'a Expr<V>, Option<&'a Expr<V>>, I)>;

/// The node being visited plus control over what is visited next.
///
/// Dereferences to the visited [`Expr`].
pub struct WalkerHandle<'s, 'a, I, V> {
    stack: &'s mut WalkerStack<'a, I, V>,
    node: &'a Expr<V>,
    parent: Option<&'a Expr<V>>,
}

impl<'s, 'a, I, V> WalkerHandle<'s, 'a, I, V> {
    /// The visited node, with the lifetime of the whole tree.
    #[inline]
    pub fn expr(&self) -> &'a Expr<V> {
        self.node
    }

    #[inline]
    pub fn parent(&self) -> Option<&'a Expr<V>> {
        self.parent
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Visit `child` next (LIFO), i.e. depth-first.
    #[inline]
    pub fn schedule_visit(&mut self, child: &'a Expr<V>, input: I) {
        self.stack.push_front((child, Some(self.node), input));
    }

    /// Visit `child` after everything already scheduled (FIFO), i.e. breadth-first.
    #[inline]
    pub fn schedule_deferred(&mut self, child: &'a Expr<V>, input: I) {
        self.stack.push_back((child, Some(self.node), input));
    }

    /// Visit every child next, leftmost first.
    pub fn schedule_children(mut self, input: I)
    where
        I: Clone,
    {
        for child in self.node.children().into_iter().rev() {
            self.schedule_visit(child, input.clone());
        }
    }

    /// Drop every pending visit. Nodes scheduled afterwards are still visited.
    #[inline]
    pub fn break_(&mut self) {
        self.stack.clear();
    }
}

impl<I, V> Deref for WalkerHandle<'_, '_, I, V> {
    type Target = Expr<V>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Walk `expr` depth-first, visiting only the nodes the visitor schedules.
///
/// The root is visited with `input`; every other node with the input it was scheduled with.
pub fn walk<'a, I, V, F>(expr: &'a Expr<V>, input: I, mut visitor: F)
where
    F: FnMut(I, WalkerHandle<'_, 'a, I, V>),
{
    let mut stack: WalkerStack<'a, I, V> = VecDeque::new();
    stack.push_front((expr, None, input));

    while let Some((node, parent, input)) = stack.pop_front() {
        visitor(
            input,
            WalkerHandle {
                stack: &mut stack,
                node,
                parent,
            },
        );
    }
}

/// Pre-order iterator over every node of a tree.
pub struct Iter<'a, V> {
    stack: Vec<&'a Expr<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Expr<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

impl<V> Expr<V> {
    /// Immediate children in source order.
    pub fn children(&self) -> SmallVec<&Expr<V>, 2> {
        match self.view() {
            View::Literal(_) | View::Variable(_) => SmallVec::new(),
            View::Not(arg) => SmallVec::from_iter([arg]),
            View::And(args) | View::Or(args) => args.iter().collect(),
            View::Implies(lhs, rhs) | View::Equiv(lhs, rhs) | View::Xor(lhs, rhs) => {
                SmallVec::from_iter([lhs, rhs])
            }
            View::Modal(op) => op.operands(),
        }
    }

    /// Every node of the tree in pre-order, starting with `self`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { stack: vec![self] }
    }

    /// Variable keys in pre-order, repetitions included.
    pub fn variables(&self) -> impl Iterator<Item = &V> {
        self.iter().filter_map(|node| match node {
            Expr::Variable(name) => Some(name),
            _ => None,
        })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        walk(self, 1usize, |level, node| {
            depth = depth.max(level);
            node.schedule_children(level + 1);
        });
        depth
    }
}

impl<'a, V> IntoIterator for &'a Expr<V> {
    type Item = &'a Expr<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
