use logic_asts::prelude::*;

fn main() {
    let (p, q, r) = (Expr::var("p"), Expr::var("q"), Expr::var("r"));
    let bounds = |start, end| Interval::new(Some(start), Some(end)).ok();

    // Request/response with a deadline, guarded by a spatial condition
    let expr: Expr = Expr::always(
        Expr::implies(
            p.clone(),
            Expr::eventually(q.clone() & Expr::somewhere(r.clone(), bounds(0, 2)), bounds(1, 5)),
        ),
        bounds(0, 10),
    );

    println!("formula  {expr}");
    println!("nnf      {}", expr.to_nnf());
    println!("negated  {}", (!expr.clone()).to_nnf());
    println!("horizon  {}", expr.horizon());
    println!("layer    {:?}", expr.layer());

    let names: Vec<&String> = expr.variables().collect();
    println!("vars     {names:?}");
    println!("size     {} nodes, depth {}", expr.size(), expr.depth());
}
