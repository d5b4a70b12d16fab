#![allow(dead_code)]

use std::collections::HashMap;

use logic_asts::prelude::*;
use rand::Rng;

pub const NAMES: [&str; 4] = ["p", "q", "r", "s"];

pub fn var(name: &str) -> Expr {
    Expr::var(name)
}

pub fn interval(start: i64, end: i64) -> Option<Interval> {
    Some(Interval::new(Some(start), Some(end)).unwrap())
}

pub fn random_interval(rng: &mut impl Rng) -> Option<Interval> {
    match rng.random_range(0..4) {
        0 => None,
        1 => Some(Interval::new(None, Some(rng.random_range(1..10))).unwrap()),
        2 => Some(Interval::new(Some(rng.random_range(0..10)), None).unwrap()),
        _ => {
            let start = rng.random_range(0..10);
            let end = start + rng.random_range(1..10);
            Some(Interval::new(Some(start), Some(end)).unwrap())
        }
    }
}

/// Random formula over the operators of `layer`.
///
/// With `literals` unset the leaves are variables only, which keeps the canonical text of the
/// result re-parseable.
pub fn random_expr(rng: &mut impl Rng, budget: usize, layer: Layer, literals: bool) -> Expr {
    if budget == 0 || rng.random_bool(0.2) {
        if literals && rng.random_bool(0.15) {
            return Expr::literal(rng.random_bool(0.5));
        }
        return var(NAMES[rng.random_range(0..NAMES.len())]);
    }

    let mut operators = vec![
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Equiv,
        Operator::Xor,
    ];
    if layer.includes(Layer::Ltl) {
        operators.extend([
            Operator::Next,
            Operator::Always,
            Operator::Eventually,
            Operator::Until,
        ]);
    }
    if layer.includes(Layer::Strel) {
        operators.extend([
            Operator::Everywhere,
            Operator::Somewhere,
            Operator::Reach,
            Operator::Escape,
        ]);
    }
    if layer.includes(Layer::StlGo) {
        operators.extend([Operator::GraphIncoming, Operator::GraphOutgoing]);
    }

    let operator = operators[rng.random_range(0..operators.len())];
    let budget = budget - 1;
    match operator {
        Operator::Not => !random_expr(rng, budget, layer, literals),
        Operator::And => {
            let lhs = random_expr(rng, budget, layer, literals);
            lhs & random_expr(rng, budget, layer, literals)
        }
        Operator::Or => {
            let lhs = random_expr(rng, budget, layer, literals);
            lhs | random_expr(rng, budget, layer, literals)
        }
        Operator::Implies => {
            let lhs = random_expr(rng, budget, layer, literals);
            Expr::implies(lhs, random_expr(rng, budget, layer, literals))
        }
        Operator::Equiv => {
            let lhs = random_expr(rng, budget, layer, literals);
            Expr::equiv(lhs, random_expr(rng, budget, layer, literals))
        }
        Operator::Xor => {
            let lhs = random_expr(rng, budget, layer, literals);
            Expr::xor(lhs, random_expr(rng, budget, layer, literals))
        }
        Operator::Next => {
            let steps = rng.random_bool(0.5).then(|| rng.random_range(0..5));
            Expr::next(random_expr(rng, budget, layer, literals), steps)
        }
        Operator::Always => {
            let bounds = random_interval(rng);
            Expr::always(random_expr(rng, budget, layer, literals), bounds)
        }
        Operator::Eventually => {
            let bounds = random_interval(rng);
            Expr::eventually(random_expr(rng, budget, layer, literals), bounds)
        }
        Operator::Until => {
            let lhs = random_expr(rng, budget, layer, literals);
            let rhs = random_expr(rng, budget, layer, literals);
            Expr::until(lhs, rhs, random_interval(rng))
        }
        Operator::Everywhere => {
            let bounds = random_interval(rng);
            Expr::everywhere(random_expr(rng, budget, layer, literals), bounds)
        }
        Operator::Somewhere => {
            let bounds = random_interval(rng);
            Expr::somewhere(random_expr(rng, budget, layer, literals), bounds)
        }
        Operator::Reach => {
            let lhs = random_expr(rng, budget, layer, literals);
            let rhs = random_expr(rng, budget, layer, literals);
            Expr::reach(lhs, rhs, random_interval(rng))
        }
        Operator::Escape => {
            let bounds = random_interval(rng);
            Expr::escape(random_expr(rng, budget, layer, literals), bounds)
        }
        Operator::GraphIncoming | Operator::GraphOutgoing => {
            let graphs: Vec<&str> = ["c", "s", "u"]
                .into_iter()
                .filter(|_| rng.random_bool(0.5))
                .collect();
            let graphs = if graphs.is_empty() { vec!["c"] } else { graphs };
            let edges = random_interval(rng);
            let arg = random_expr(rng, budget, layer, literals);
            if operator == Operator::GraphIncoming {
                Expr::graph_incoming(arg, graphs, edges).unwrap()
            } else {
                Expr::graph_outgoing(arg, graphs, edges).unwrap()
            }
        }
        Operator::Literal | Operator::Variable => unreachable!("leaves are built above"),
    }
}

/// Truth value of a propositional formula under `env`.
pub fn eval(expr: &Expr, env: &HashMap<String, bool>) -> bool {
    match expr.view() {
        View::Literal(value) => value,
        View::Variable(name) => env[name],
        View::Not(arg) => !eval(arg, env),
        View::And(args) => args.iter().all(|arg| eval(arg, env)),
        View::Or(args) => args.iter().any(|arg| eval(arg, env)),
        View::Implies(lhs, rhs) => !eval(lhs, env) || eval(rhs, env),
        View::Equiv(lhs, rhs) => eval(lhs, env) == eval(rhs, env),
        View::Xor(lhs, rhs) => eval(lhs, env) != eval(rhs, env),
        View::Modal(op) => panic!("`{}` is not propositional", op.operator()),
    }
}

/// Every assignment of [`NAMES`].
pub fn assignments() -> impl Iterator<Item = HashMap<String, bool>> {
    (0..1u32 << NAMES.len()).map(|bits| {
        NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), bits & (1 << i) != 0))
            .collect()
    })
}

/// No double negation, no negated literal, no literal or same-kind junction inside a junction,
/// and at least two operands per junction.
pub fn is_semi_reduced(expr: &Expr) -> bool {
    expr.iter().all(|node| match node.view() {
        View::Not(arg) => !arg.is_not() && !arg.is_literal(),
        View::And(args) => args.len() >= 2 && args.iter().all(|a| !a.is_literal() && !a.is_and()),
        View::Or(args) => args.len() >= 2 && args.iter().all(|a| !a.is_literal() && !a.is_or()),
        _ => true,
    })
}

/// Modal operators for which negation cannot be pushed inside.
pub fn is_dual_less(expr: &Expr) -> bool {
    matches!(
        expr.operator(),
        Operator::Until
            | Operator::Reach
            | Operator::Escape
            | Operator::GraphIncoming
            | Operator::GraphOutgoing
    )
}

pub fn is_nnf(expr: &Expr) -> bool {
    expr.iter().all(|node| match node.view() {
        View::Not(arg) => arg.is_variable() || is_dual_less(arg),
        View::Implies(..) | View::Equiv(..) | View::Xor(..) => false,
        _ => true,
    })
}

pub fn has_derived(expr: &Expr) -> bool {
    expr.iter()
        .any(|node| node.is_implies() || node.is_equiv() || node.is_xor())
}
