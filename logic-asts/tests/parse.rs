mod common;

use common::{interval, var};
use logic_asts::prelude::*;

fn ltl(text: &str) -> Expr {
    parse(text, "ltl").unwrap_or_else(|err| panic!("`{text}` failed: {err}"))
}

#[test]
fn next_of_until() {
    let p2 = var("p2");
    let expected = Expr::next(
        Expr::until(
            Expr::always(p2.clone(), None),
            Expr::eventually(p2, None),
            None,
        ),
        None,
    );
    assert_eq!(ltl("X(Gp2 U Fp2)"), expected);
}

#[test]
fn negated_eventually() {
    assert_eq!(ltl("!Fp2"), Expr::not(Expr::eventually(var("p2"), None)));
}

#[test]
fn response_pattern() {
    let expected = Expr::always(
        Expr::implies(var("p"), Expr::eventually(var("q"), None)),
        None,
    );
    assert_eq!(ltl("G(p -> F q)"), expected);
}

#[test]
fn bounded_somewhere() {
    let e = parse("somewhere[0,10] p", "strel").unwrap();
    assert_eq!(e, Expr::somewhere(var("p"), interval(0, 10)));
}

#[test]
fn precedence_and_associativity() {
    let (a, b, c) = (var("a"), var("b"), var("c"));
    let base = |text: &str| parse(text, "base").unwrap();

    assert_eq!(base("a | b & c"), a.clone() | (b.clone() & c.clone()));
    assert_eq!(base("!a & b"), !a.clone() & b.clone());
    assert_eq!(base("a ^ b | c"), Expr::xor(a.clone(), b.clone() | c.clone()));
    assert_eq!(
        base("a -> b -> c"),
        Expr::implies(a.clone(), Expr::implies(b.clone(), c.clone()))
    );
    assert_eq!(
        base("a <-> b <-> c"),
        Expr::equiv(Expr::equiv(a.clone(), b.clone()), c.clone())
    );
    assert_eq!(
        base("a -> b <-> c"),
        Expr::equiv(Expr::implies(a.clone(), b.clone()), c.clone())
    );
    assert_eq!(base("~~a"), a);
}

#[test]
fn junction_chains_flatten() {
    let e = parse("p & q & r & s", "base").unwrap();
    let View::And(args) = e.view() else {
        panic!("expected a conjunction");
    };
    assert_eq!(args, &[var("p"), var("q"), var("r"), var("s")]);
}

#[test]
fn literals_fold_while_parsing() {
    assert_eq!(parse("TRUE & p", "base").unwrap(), var("p"));
    assert_eq!(parse("0 | p", "base").unwrap(), var("p"));
    assert_eq!(parse("p & false", "base").unwrap(), Expr::bottom());
    assert_eq!(parse("!1", "base").unwrap(), Expr::bottom());
    // `FALSE` is a literal, not `F ALSE`
    assert_eq!(ltl("FALSE | q"), var("q"));
    assert_eq!(ltl("TRUE"), Expr::top());
}

#[test]
fn modal_operators_bind_tighter_than_connectives() {
    let e = ltl("p U q & r");
    assert_eq!(e, Expr::until(var("p"), var("q"), None) & var("r"));

    let e = ltl("p U q U r");
    assert_eq!(
        e,
        Expr::until(Expr::until(var("p"), var("q"), None), var("r"), None)
    );

    let e = ltl("!p U[1,3] X[2] q");
    assert_eq!(
        e,
        Expr::until(!var("p"), Expr::next(var("q"), Some(2)), interval(1, 3))
    );
}

#[test]
fn temporal_operator_letters() {
    assert_eq!(parse("Gp", "base").unwrap(), var("Gp"));
    assert_eq!(ltl("Gp"), Expr::always(var("p"), None));
    assert_eq!(ltl("GFp"), Expr::always(Expr::eventually(var("p"), None), None));
    assert_eq!(ltl("X X p"), Expr::next(Expr::next(var("p"), None), None));
}

#[test]
fn open_interval_bounds() {
    assert_eq!(
        ltl("F[,5] p"),
        Expr::eventually(var("p"), Some(Interval::new(None, Some(5)).unwrap()))
    );
    assert_eq!(
        ltl("G[2,] p"),
        Expr::always(var("p"), Some(Interval::new(Some(2), None).unwrap()))
    );
    assert_eq!(
        ltl("G[,] p"),
        Expr::always(var("p"), Some(Interval::UNBOUNDED))
    );
    assert_eq!(ltl("G [ 0 , 5 ] p"), Expr::always(var("p"), interval(0, 5)));
}

#[test]
fn quoted_names_are_unescaped() {
    let e = parse(r#""my var" & q"#, "base").unwrap();
    assert_eq!(e, var("my var") & var("q"));

    let e = parse(r#""say \"hi\"""#, "base").unwrap();
    assert_eq!(e, var("say \"hi\""));
}

#[test]
fn spatial_layer() {
    let strel = |text: &str| parse(text, "spatial").unwrap();
    assert_eq!(
        strel("(p reach[0,3] q)"),
        Expr::reach(var("p"), var("q"), interval(0, 3))
    );
    assert_eq!(strel("escape[1,2] p"), Expr::escape(var("p"), interval(1, 2)));
    assert_eq!(
        strel("everywhere G p"),
        Expr::everywhere(Expr::always(var("p"), None), None)
    );
    // Temporal operators stay available
    assert_eq!(strel("p U q"), Expr::until(var("p"), var("q"), None));
}

#[test]
fn graph_layer() {
    let graph = |text: &str| parse(text, "stl_go").unwrap();
    assert_eq!(
        graph("in{c,s}[1,3] p"),
        Expr::graph_incoming(var("p"), ["c", "s"], interval(1, 3)).unwrap()
    );
    assert_eq!(
        graph("out{s, c, s} (p U q)"),
        Expr::graph_outgoing(Expr::until(var("p"), var("q"), None), ["c", "s"], None).unwrap()
    );
    assert!(parse("in{} p", "stl_go").unwrap_err().is_syntax());
}

#[test]
fn operators_outside_their_layer_are_syntax_errors() {
    for (text, layer) in [
        ("G p", "base"),
        ("p U q", "base"),
        ("somewhere p", "ltl"),
        ("in{c} p", "strel"),
        ("p reach q", "stl_go"),
    ] {
        let err = parse(text, layer).unwrap_err();
        assert!(err.is_syntax(), "`{text}` in {layer}: {err:?}");
    }
}

#[test]
fn reserved_words_cannot_name_variables() {
    assert!(parse("everywhere", "strel").is_err());
    assert!(parse("reach & p", "strel").is_err());
    assert!(parse("in", "stl_go").is_err());
    // Only reserved in the layers that use them
    assert_eq!(parse("everywhere", "base").unwrap(), var("everywhere"));
    assert_eq!(parse("in & out", "ltl").unwrap(), var("in") & var("out"));
}

#[test]
fn invalid_intervals_are_validation_errors() {
    assert_eq!(
        ltl_err("G[5,5] p"),
        ParseError::Validation(ValidationError::PointInterval { bound: 5 })
    );
    assert_eq!(
        ltl_err("F[5,2] p"),
        ParseError::Validation(ValidationError::ReversedInterval { start: 5, end: 2 })
    );
    assert_eq!(
        ltl_err("G[-1,2] p"),
        ParseError::Validation(ValidationError::NegativeBound { bound: -1 })
    );
    assert_eq!(
        ltl_err("X[-3] p"),
        ParseError::Validation(ValidationError::NegativeBound { bound: -3 })
    );
}

fn ltl_err(text: &str) -> ParseError {
    parse(text, "ltl").unwrap_err()
}

#[test]
fn oversized_integers_are_construction_errors() {
    let err = ltl_err("G[0,99999999999999999999] p");
    assert!(
        matches!(
            err,
            ParseError::Construction(ConstructionError::InvalidNumber { .. })
        ),
        "{err:?}"
    );
}

#[test]
fn unknown_layer_is_rejected_before_parsing() {
    // The text is not valid in any layer; the layer name is checked first
    let err = parse("p &", "modal").unwrap_err();
    assert_eq!(
        err,
        ParseError::Configuration(ConfigurationError::UnknownLayer {
            name: "modal".to_string()
        })
    );
    assert!(err.to_string().contains("stl_go"));
}

#[test]
fn layer_aliases() {
    for (name, layer) in [
        ("propositional", Layer::Base),
        ("temporal", Layer::Ltl),
        ("spatial", Layer::Strel),
        ("graph", Layer::StlGo),
    ] {
        assert_eq!(
            parse("p", name).unwrap(),
            parse_expr("p", layer).unwrap()
        );
    }
}

#[test]
fn syntax_errors_carry_locations() {
    let text = "\n\n  )";
    let ParseError::Syntax(err) = parse(text, "base").unwrap_err() else {
        panic!("expected a syntax error");
    };
    assert_eq!((err.line, err.column), (3, 3));
    assert_eq!(err.span.start, 4);

    let report = err.report(text);
    assert!(report.contains(&err.message), "{report}");
}

#[test]
fn incomplete_input_is_rejected() {
    for text in ["", "p &", "(p", "p q", "!", "G[0,5]"] {
        let err = parse(text, "ltl").unwrap_err();
        assert!(err.is_syntax(), "`{text}`: {err:?}");
    }
}

#[test]
fn canonical_text_round_trips() {
    let cases = [
        ("(p & !q & (r | s))", "base"),
        ("X[2] (p U[1,3] !q)", "ltl"),
        ("G[0,5] F[,2] (p | X q)", "ltl"),
        ("!(p U q)", "ltl"),
        ("((p reach[0,2] q) U somewhere[1,4] !r)", "strel"),
        ("!escape[,3] everywhere p", "strel"),
        ("(in{c,s}[1,3] p & !out{u} G q)", "stl_go"),
        ("G[0,5] (p -> X[2] q)", "ltl"),
        ("((p <-> q) & r)", "base"),
        ("(p -> q) -> r", "base"),
        ("p -> (q -> r)", "base"),
        ("!(p ^ q) <-> (r | s)", "base"),
        ("((p -> q) U[1,3] (r <-> s))", "ltl"),
        ("out{c} (p ^ q)", "stl_go"),
    ];
    for (text, layer) in cases {
        let e = parse(text, layer).unwrap();
        assert_eq!(e.to_string(), text);
        assert_eq!(parse(&e.to_string(), layer).unwrap(), e);
    }
}

#[test]
fn nested_derived_connectives_keep_their_grouping() {
    let (p, q, r) = (var("p"), var("q"), var("r"));

    let e = Expr::equiv(p.clone(), q.clone()) & r.clone();
    assert_eq!(e.to_string(), "((p <-> q) & r)");
    assert_eq!(parse(&e.to_string(), "base").unwrap(), e);

    let e = Expr::always(Expr::implies(p.clone(), Expr::next(q.clone(), Some(2))), interval(0, 5));
    assert_eq!(parse(&e.to_string(), "ltl").unwrap(), e);

    let e = !Expr::xor(p.clone(), q.clone());
    assert_eq!(e.to_string(), "!(p ^ q)");
    assert_eq!(parse(&e.to_string(), "base").unwrap(), e);
}

#[test]
fn nesting_limit_is_a_syntax_error() {
    let text = format!("{}p", "!".repeat(5000));
    let err = parse(&text, "base").unwrap_err();
    assert!(err.is_syntax(), "{err:?}");

    let text = format!("{}p", "X ".repeat(5000));
    assert!(parse(&text, "ltl").unwrap_err().is_syntax());

    // Even negations cancel, so moderate depth parses to a small tree
    let text = format!("{}p", "!".repeat(100));
    assert_eq!(parse(&text, "base").unwrap(), var("p"));
}

#[test]
fn long_junction_chains_parse() {
    let names: Vec<String> = (0..5000).map(|i| format!("p{i}")).collect();
    let e = parse(&names.join(" & "), "base").unwrap();
    let View::And(args) = e.view() else {
        panic!("expected a conjunction, got {e}");
    };
    assert_eq!(args.len(), 5000);
}
