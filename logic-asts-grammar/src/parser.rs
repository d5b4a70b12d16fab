//! Layered formula grammars built with chumsky.
//!
//! Role
//! - Turn formula text into a generic [`SyntaxTree`] for a chosen [`Layer`].
//! - Each layer only adds operator alternatives on top of the layers it extends; the boolean
//!   skeleton (precedence levels, atoms, literals) is shared.
//!
//! Accepted syntax, loosest to tightest:
//! - `a <-> b` (left fold), `a -> b` (right-associative), `a ^ b`, `a | b`, `a & b`. A whole
//!   `&` or `|` chain is one n-ary node.
//! - Binary modal operators, left fold: `a U b`, `a U[s,e] b`; `a reach[s,e] b` (strel).
//! - Prefix operators: `!a` / `~a`; `X a`, `X[n] a`, `G[s,e] a`, `F[s,e] a` (ltl);
//!   `everywhere[s,e] a`, `somewhere[s,e] a`, `escape[s,e] a` (strel);
//!   `in{g1,g2}[s,e] a`, `out{g1,g2}[s,e] a` (stl_go). Intervals are optional everywhere and
//!   either bound may be left empty (`[,5]`).
//! - Atoms: `( expr )`, boolean literals `0 1 TRUE FALSE true false`, identifiers, and
//!   double-quoted names (`"my var"`).
//!
//! Input nested deeper than [`MAX_NESTING`] is rejected before parsing.
//!
//! Note: the single-letter temporal operators bind without whitespace, so `Gp2` reads as
//! `G p2` in the temporal layers while it is a plain identifier in the base layer.
use chumsky::input::MapExtra;
use chumsky::prelude::*;
use log::debug;

use crate::error::SyntaxError;
use crate::layer::Layer;
use crate::tree::{Child, SyntaxTree, Token, rule, token};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Deepest nesting [`parse_tree`] accepts; deeper input is rejected before parsing.
pub const MAX_NESTING: usize = 256;

/// Words that can never name a variable in `layer`.
fn is_reserved(layer: Layer, word: &str) -> bool {
    matches!(word, "TRUE" | "FALSE" | "true" | "false")
        || (layer.includes(Layer::Strel)
            && matches!(word, "everywhere" | "somewhere" | "escape" | "reach"))
        || (layer.includes(Layer::StlGo) && matches!(word, "in" | "out"))
}

fn binary(rule: &'static str, lhs: SyntaxTree, rhs: SyntaxTree) -> SyntaxTree {
    let span = lhs.span.start..rhs.span.end;
    SyntaxTree::new(rule, vec![lhs.into(), rhs.into()], span)
}

/// One n-ary node for a whole `&` or `|` chain; a single operand passes through.
fn junction(rule: &'static str, mut operands: Vec<SyntaxTree>) -> SyntaxTree {
    if operands.len() == 1 {
        if let Some(operand) = operands.pop() {
            return operand;
        }
    }
    let start = operands.first().map_or(0, |first| first.span.start);
    let end = operands.last().map_or(start, |last| last.span.end);
    SyntaxTree::new(rule, operands.into_iter().map(Child::Tree).collect(), start..end)
}

fn binary_modal(
    rule: &'static str,
    lhs: SyntaxTree,
    interval: Option<SyntaxTree>,
    rhs: SyntaxTree,
) -> SyntaxTree {
    let span = lhs.span.start..rhs.span.end;
    SyntaxTree::new(rule, vec![lhs.into(), interval.into(), rhs.into()], span)
}

fn symbol<'src>(s: &'static str) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    just(s).padded().ignored()
}

fn word<'src>(kw: &'static str) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    text::ascii::keyword(kw).ignored().padded()
}

fn lexeme<'src>(
    kind: &'static str,
    slice: impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone,
) -> impl Parser<'src, &'src str, Token, Extra<'src>> + Clone {
    slice
        .map_with(move |text: &str, e| Token {
            kind,
            text: text.to_string(),
            span: e.span().into_range(),
        })
        .padded()
}

fn integer<'src>() -> impl Parser<'src, &'src str, Token, Extra<'src>> + Clone {
    lexeme(
        token::INT,
        just('-').or_not().then(text::int(10)).to_slice(),
    )
    .labelled("integer")
}

/// `[start, end]` with both bounds optional.
fn interval<'src>() -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone {
    just('[')
        .padded()
        .ignore_then(integer().or_not())
        .then_ignore(symbol(","))
        .then(integer().or_not())
        .then_ignore(symbol("]"))
        .map_with(|(start, end), e| {
            SyntaxTree::new(
                rule::INTERVAL,
                vec![start.into(), end.into()],
                e.span().into_range(),
            )
        })
        .labelled("interval")
}

fn literal<'src>() -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone {
    let words = choice((
        text::ascii::keyword("TRUE"),
        text::ascii::keyword("FALSE"),
        text::ascii::keyword("true"),
        text::ascii::keyword("false"),
    ))
    .to_slice();
    let digits = text::int(10).try_map(|digits: &str, span| match digits {
        "0" | "1" => Ok(digits),
        _ => Err(Rich::custom(
            span,
            format!("`{digits}` is not a boolean literal, expected 0 or 1"),
        )),
    });

    lexeme(token::LITERAL, words.or(digits))
        .map_with(|tok, e| SyntaxTree::new(rule::LITERAL, vec![tok.into()], e.span().into_range()))
        .labelled("literal")
}

fn variable<'src>(layer: Layer) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone {
    let name = text::ascii::ident().try_map(move |name: &str, span| {
        if is_reserved(layer, name) {
            Err(Rich::custom(
                span,
                format!("`{name}` is a reserved word and cannot name a variable"),
            ))
        } else {
            Ok(name)
        }
    });
    let quoted = just('"')
        .then(
            choice((
                just('\\').then(any()).ignored(),
                none_of("\\\"").ignored(),
            ))
            .repeated(),
        )
        .then(just('"'))
        .to_slice();

    lexeme(token::CNAME, name)
        .or(lexeme(token::ESCAPED_STRING, quoted))
        .map_with(|tok, e| SyntaxTree::new(rule::VAR, vec![tok.into()], e.span().into_range()))
        .labelled("variable")
}

/// `op [interval] operand`
fn prefixed<'src, O, P>(
    op: O,
    rule: &'static str,
    operand: P,
) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone
where
    O: Parser<'src, &'src str, (), Extra<'src>> + Clone,
    P: Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone,
{
    op.ignore_then(interval().or_not())
        .then(operand)
        .map_with(move |(interval, arg), e| {
            SyntaxTree::new(rule, vec![interval.into(), arg.into()], e.span().into_range())
        })
}

fn temporal_prefix<'src, P>(operand: P) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone,
{
    let steps = just('[')
        .padded()
        .ignore_then(integer())
        .then_ignore(symbol("]"));
    let next = just('X')
        .padded()
        .ignore_then(steps.or_not())
        .then(operand.clone())
        .map_with(|(steps, arg), e| {
            SyntaxTree::new(rule::NEXT, vec![steps.into(), arg.into()], e.span().into_range())
        });

    choice((
        next,
        prefixed(just('G').padded().ignored(), rule::ALWAYS, operand.clone()),
        prefixed(just('F').padded().ignored(), rule::EVENTUALLY, operand),
    ))
    .labelled("temporal operator")
}

fn spatial_prefix<'src, P>(operand: P) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone,
{
    choice((
        prefixed(word("everywhere"), rule::EVERYWHERE, operand.clone()),
        prefixed(word("somewhere"), rule::SOMEWHERE, operand.clone()),
        prefixed(word("escape"), rule::ESCAPE, operand),
    ))
    .labelled("spatial operator")
}

fn graph_prefix<'src, P>(operand: P) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone
where
    P: Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone,
{
    let graphs = lexeme(token::CNAME, text::ascii::ident())
        .separated_by(symbol(","))
        .at_least(1)
        .collect::<Vec<_>>()
        .delimited_by(symbol("{"), symbol("}"))
        .map_with(|names, e| {
            SyntaxTree::new(
                rule::GRAPH_LIST,
                names.into_iter().map(Child::Token).collect(),
                e.span().into_range(),
            )
        })
        .labelled("graph list");

    let operator = |kw: &'static str, rule: &'static str| {
        word(kw)
            .ignore_then(graphs.clone())
            .then(interval().or_not())
            .then(operand.clone())
            .map_with(move |((graphs, edges), arg), e| {
                SyntaxTree::new(
                    rule,
                    vec![graphs.into(), edges.into(), arg.into()],
                    e.span().into_range(),
                )
            })
    };

    choice((
        operator("in", rule::GRAPH_INCOMING),
        operator("out", rule::GRAPH_OUTGOING),
    ))
    .labelled("graph operator")
}

/// Full formula grammar for `layer`.
pub(crate) fn formula<'src>(
    layer: Layer,
) -> impl Parser<'src, &'src str, SyntaxTree, Extra<'src>> + Clone {
    recursive(move |expr| {
        let parens = expr
            .delimited_by(symbol("("), symbol(")"))
            .labelled("parentheses");
        let atom = choice((parens, literal(), variable(layer))).labelled("atom");

        // Prefix operators, right-nested: `!G p` is `!(G p)`
        let unary = recursive(move |unary| {
            let negation = one_of("!~")
                .padded()
                .ignore_then(unary.clone())
                .map_with(
                    |arg: SyntaxTree, e: &mut MapExtra<'src, '_, &'src str, Extra<'src>>| {
                        SyntaxTree::new(rule::NOT, vec![arg.into()], e.span().into_range())
                    },
                );

            let mut prefix = negation.boxed();
            if layer.includes(Layer::Ltl) {
                prefix = prefix.or(temporal_prefix(unary.clone())).boxed();
            }
            if layer.includes(Layer::Strel) {
                prefix = prefix.or(spatial_prefix(unary.clone())).boxed();
            }
            if layer.includes(Layer::StlGo) {
                prefix = prefix.or(graph_prefix(unary)).boxed();
            }
            // Literals first so `FALSE` is not read as `F ALSE`
            literal().or(prefix).or(atom).labelled("unary")
        });

        // Binary modal operators bind tighter than every boolean connective
        let modal = if layer.includes(Layer::Ltl) {
            let op = if layer.includes(Layer::Strel) {
                just('U')
                    .padded()
                    .to(rule::UNTIL)
                    .or(word("reach").to(rule::REACH))
                    .boxed()
            } else {
                just('U').padded().to(rule::UNTIL).boxed()
            };
            unary
                .clone()
                .foldl(
                    op.then(interval().or_not()).then(unary).repeated(),
                    |lhs, ((rule, interval), rhs)| binary_modal(rule, lhs, interval, rhs),
                )
                .boxed()
        } else {
            unary.boxed()
        };

        let and = modal
            .separated_by(symbol("&"))
            .at_least(1)
            .collect::<Vec<_>>()
            .map(|operands: Vec<SyntaxTree>| junction(rule::AND, operands))
            .labelled("conjunction");
        let or = and
            .separated_by(symbol("|"))
            .at_least(1)
            .collect::<Vec<_>>()
            .map(|operands: Vec<SyntaxTree>| junction(rule::OR, operands))
            .labelled("disjunction");
        let xor = or
            .clone()
            .foldl(symbol("^").ignore_then(or).repeated(), |lhs, rhs| {
                binary(rule::XOR, lhs, rhs)
            })
            .labelled("exclusive disjunction");

        // Implication is right-associative
        let implies = recursive(move |implies| {
            xor.then(symbol("->").ignore_then(implies).or_not())
                .map(|(lhs, rhs)| match rhs {
                    Some(rhs) => binary(rule::IMPLIES, lhs, rhs),
                    None => lhs,
                })
                .labelled("implication")
        });

        implies
            .clone()
            .foldl(symbol("<->").ignore_then(implies).repeated(), |lhs, rhs| {
                binary(rule::EQUIV, lhs, rhs)
            })
            .labelled("formula")
    })
}

/// Weight of one word towards the nesting estimate.
fn word_nesting(layer: Layer, word: &str) -> usize {
    let keyword = (layer.includes(Layer::Strel)
        && matches!(word, "everywhere" | "somewhere" | "escape" | "reach"))
        || (layer.includes(Layer::StlGo) && matches!(word, "in" | "out"));
    if keyword {
        1
    } else if layer.includes(Layer::Ltl) {
        // `GFXp` opens three operators
        word.chars()
            .take_while(|c| matches!(c, 'X' | 'G' | 'F' | 'U'))
            .count()
    } else {
        0
    }
}

/// Rejects `text` if the tree it parses to could nest deeper than [`MAX_NESTING`].
///
/// The estimate is an upper bound: every open parenthesis counts, plus every prefix,
/// implication, equivalence, xor or modal operator seen so far inside it. `&` and `|` chains
/// become a single node and do not count.
fn check_nesting(text: &str, layer: Layer) -> Result<(), SyntaxError> {
    let mut levels = vec![0usize];
    let mut chars = text.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        let mut end = at + c.len_utf8();
        match c {
            '(' => levels.push(0),
            ')' => {
                if levels.len() > 1 {
                    levels.pop();
                }
            }
            '[' | '{' | '"' => {
                let close = match c {
                    '[' => ']',
                    '{' => '}',
                    _ => '"',
                };
                let mut escaped = false;
                for (_, next) in chars.by_ref() {
                    match next {
                        _ if escaped => escaped = false,
                        '\\' if close == '"' => escaped = true,
                        next if next == close => break,
                        _ => {}
                    }
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                while let Some(&(next_at, next)) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || next == '_') {
                        break;
                    }
                    end = next_at + next.len_utf8();
                    chars.next();
                }
                if let Some(top) = levels.last_mut() {
                    *top += word_nesting(layer, &text[at..end]);
                }
            }
            '!' | '~' | '^' => {
                if let Some(top) = levels.last_mut() {
                    *top += 1;
                }
            }
            // Counts both `->` and `<->`
            '-' if text[end..].starts_with('>') => {
                if let Some(top) = levels.last_mut() {
                    *top += 1;
                }
            }
            _ => {}
        }

        let depth = levels.len() - 1 + levels.iter().sum::<usize>();
        if depth > MAX_NESTING {
            return Err(SyntaxError::new(
                text,
                at..end,
                format!("formula nests deeper than {MAX_NESTING} levels"),
            ));
        }
    }
    Ok(())
}

/// Parse `text` with the grammar of `layer` into a generic syntax tree.
///
/// Only the first diagnostic is reported; the remaining ones are logged at debug level.
/// Input nesting deeper than [`MAX_NESTING`] is rejected up front.
///
/// The grammar is rebuilt on every call. Building it is cheap next to parsing and keeps
/// `parse_tree` free of shared state, so it can be called from any thread.
///
/// Example
/// ```
/// use logic_asts_grammar::{Layer, parse_tree, rule};
///
/// let tree = parse_tree("X(Gp2 U Fp2)", Layer::Ltl).unwrap();
/// assert_eq!(tree.rule, rule::NEXT);
/// assert!(parse_tree("p &", Layer::Base).is_err());
/// ```
pub fn parse_tree(text: &str, layer: Layer) -> Result<SyntaxTree, SyntaxError> {
    debug!("parsing {} bytes with the `{layer}` grammar", text.len());
    check_nesting(text, layer)?;
    let result = formula(layer)
        .padded()
        .then_ignore(end())
        .parse(text)
        .into_result();

    result.map_err(|errors| {
        for extra in errors.iter().skip(1) {
            debug!("additional syntax error: {extra}");
        }
        match errors.first() {
            Some(error) => SyntaxError::new(text, error.span().into_range(), error.to_string()),
            None => SyntaxError::new(text, 0..text.len(), "input rejected by the grammar"),
        }
    })
}
