//! Assembly of generic syntax trees into [`Expr`] values.
//!
//! Role
//! - A [`RuleTable`] maps rule names (and token kinds) of one grammar layer to handlers.
//! - Tables chain: a name the table does not know is looked up in the table it extends, and so
//!   on down to the base layer. A new layer only registers its own operators.
//! - The four tables are process-wide statics built lazily on first use and read-only after.
//!
//! Handlers receive the already-assembled values of their children through [`Args`], in order,
//! and consume exactly as many as the rule produces. Absent optional parts (`G p` has no
//! interval) arrive as [`Value::Absent`].
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use log::trace;
use logic_asts_grammar::{Child, Layer, SyntaxTree, Token, rule, token};
use once_cell::sync::Lazy;

use crate::error::{ConstructionError, ParseResult, ValidationError};
use crate::expr::Expr;
use crate::interval::Interval;

/// Intermediate result of assembling one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Expr(Expr<String>),
    Interval(Interval),
    Int(i64),
    Text(String),
    Graphs(BTreeSet<String>),
    Absent,
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Expr(_) => "a formula",
            Value::Interval(_) => "an interval",
            Value::Int(_) => "an integer",
            Value::Text(_) => "a name",
            Value::Graphs(_) => "a graph list",
            Value::Absent => "nothing",
        }
    }
}

/// Handler of a rule: consumes the children values, produces the node value.
pub type Rule = fn(&mut Args) -> ParseResult<Value>;

/// Handler of a token kind: turns the raw lexeme into a value.
pub type TokenRule = fn(&str) -> ParseResult<Value>;

/// Ordered children values of one rule application.
pub struct Args {
    rule: &'static str,
    values: std::vec::IntoIter<Value>,
    taken: usize,
}

impl Args {
    pub fn new(rule: &'static str, values: Vec<Value>) -> Self {
        Self {
            rule,
            values: values.into_iter(),
            taken: 0,
        }
    }

    fn take(&mut self, expected: &'static str) -> Result<Value, ConstructionError> {
        let index = self.taken;
        self.taken += 1;
        self.values
            .next()
            .ok_or(ConstructionError::MissingChild {
                rule: self.rule,
                index,
                expected,
            })
    }

    fn unexpected(&self, expected: &'static str, found: &Value) -> ConstructionError {
        ConstructionError::UnexpectedChild {
            rule: self.rule,
            index: self.taken - 1,
            expected,
            found: found.kind(),
        }
    }

    pub fn expr(&mut self) -> Result<Expr<String>, ConstructionError> {
        match self.take("a formula")? {
            Value::Expr(expr) => Ok(expr),
            other => Err(self.unexpected("a formula", &other)),
        }
    }

    /// An optional interval.
    pub fn interval(&mut self) -> Result<Option<Interval>, ConstructionError> {
        match self.take("an interval")? {
            Value::Interval(interval) => Ok(Some(interval)),
            Value::Absent => Ok(None),
            other => Err(self.unexpected("an interval", &other)),
        }
    }

    /// An optional integer.
    pub fn int(&mut self) -> Result<Option<i64>, ConstructionError> {
        match self.take("an integer")? {
            Value::Int(value) => Ok(Some(value)),
            Value::Absent => Ok(None),
            other => Err(self.unexpected("an integer", &other)),
        }
    }

    pub fn text(&mut self) -> Result<String, ConstructionError> {
        match self.take("a name")? {
            Value::Text(text) => Ok(text),
            other => Err(self.unexpected("a name", &other)),
        }
    }

    pub fn graphs(&mut self) -> Result<BTreeSet<String>, ConstructionError> {
        match self.take("a graph list")? {
            Value::Graphs(graphs) => Ok(graphs),
            other => Err(self.unexpected("a graph list", &other)),
        }
    }

    /// Every remaining child, as formulas.
    pub fn remaining_exprs(&mut self) -> Result<Vec<Expr<String>>, ConstructionError> {
        let mut exprs = Vec::with_capacity(self.values.len());
        while !self.values.as_slice().is_empty() {
            exprs.push(self.expr()?);
        }
        Ok(exprs)
    }

    /// Every remaining child, as names.
    pub fn remaining_texts(&mut self) -> Result<Vec<String>, ConstructionError> {
        let mut texts = Vec::with_capacity(self.values.len());
        while !self.values.as_slice().is_empty() {
            texts.push(self.text()?);
        }
        Ok(texts)
    }

    /// Fails if any child was left unconsumed.
    pub fn finish(self) -> Result<(), ConstructionError> {
        match self.values.len() {
            0 => Ok(()),
            extra => Err(ConstructionError::TrailingChildren {
                rule: self.rule,
                count: self.taken + extra,
            }),
        }
    }
}

/// Handlers of one grammar layer, with the table it falls back to.
pub struct RuleTable {
    layer: Layer,
    rules: HashMap<&'static str, Rule>,
    tokens: HashMap<&'static str, TokenRule>,
    fallback: Option<&'static RuleTable>,
}

impl RuleTable {
    /// An empty table resolving nothing beyond itself.
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            rules: HashMap::new(),
            tokens: HashMap::new(),
            fallback: None,
        }
    }

    /// An empty table deferring unknown names to `fallback`.
    pub fn extending(layer: Layer, fallback: &'static RuleTable) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::new(layer)
        }
    }

    pub fn rule(mut self, name: &'static str, handler: Rule) -> Self {
        self.rules.insert(name, handler);
        self
    }

    pub fn token(mut self, kind: &'static str, handler: TokenRule) -> Self {
        self.tokens.insert(kind, handler);
        self
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// This table followed by the tables it extends, nearest first.
    pub fn chain(&self) -> impl Iterator<Item = &RuleTable> {
        std::iter::successors(Some(self), |table| table.fallback)
    }

    /// Handler of rule `name` and the layer of the table that provided it.
    pub fn resolve(&self, name: &str) -> Option<(Layer, Rule)> {
        self.chain()
            .find_map(|table| table.rules.get(name).map(|rule| (table.layer, *rule)))
    }

    /// Handler of token kind `kind`, if any table in the chain has one.
    pub fn resolve_token(&self, kind: &str) -> Option<(Layer, TokenRule)> {
        self.chain()
            .find_map(|table| table.tokens.get(kind).map(|rule| (table.layer, *rule)))
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rules: Vec<_> = self.rules.keys().collect();
        rules.sort();
        let mut tokens: Vec<_> = self.tokens.keys().collect();
        tokens.sort();
        f.debug_struct("RuleTable")
            .field("layer", &self.layer)
            .field("rules", &rules)
            .field("tokens", &tokens)
            .field("fallback", &self.fallback.map(RuleTable::layer))
            .finish()
    }
}

/// Strip the quotes of a double-quoted lexeme and resolve its backslash escapes.
fn unescape(lexeme: &str) -> String {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn steps(value: Option<i64>) -> Result<Option<u64>, ValidationError> {
    value
        .map(|steps| u64::try_from(steps).map_err(|_| ValidationError::NegativeBound { bound: steps }))
        .transpose()
}

fn binary(args: &mut Args, build: fn(Expr<String>, Expr<String>) -> Expr<String>) -> ParseResult<Value> {
    let lhs = args.expr()?;
    let rhs = args.expr()?;
    Ok(Value::Expr(build(lhs, rhs)))
}

fn bounded_unary(
    args: &mut Args,
    build: fn(Expr<String>, Option<Interval>) -> Expr<String>,
) -> ParseResult<Value> {
    let interval = args.interval()?;
    let arg = args.expr()?;
    Ok(Value::Expr(build(arg, interval)))
}

fn bounded_binary(
    args: &mut Args,
    build: fn(Expr<String>, Expr<String>, Option<Interval>) -> Expr<String>,
) -> ParseResult<Value> {
    let lhs = args.expr()?;
    let interval = args.interval()?;
    let rhs = args.expr()?;
    Ok(Value::Expr(build(lhs, rhs, interval)))
}

type GraphBuilder = fn(
    Expr<String>,
    BTreeSet<String>,
    Option<Interval>,
) -> Result<Expr<String>, ConstructionError>;

fn graph(args: &mut Args, build: GraphBuilder) -> ParseResult<Value> {
    let graphs = args.graphs()?;
    let edges = args.interval()?;
    let arg = args.expr()?;
    Ok(Value::Expr(build(arg, graphs, edges)?))
}

/// Propositional rules and the token kinds shared by every layer.
pub static BASE: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::new(Layer::Base)
        .rule(rule::NOT, |args| Ok(Value::Expr(Expr::not(args.expr()?))))
        .rule(rule::AND, |args| Ok(Value::Expr(Expr::try_and(args.remaining_exprs()?)?)))
        .rule(rule::OR, |args| Ok(Value::Expr(Expr::try_or(args.remaining_exprs()?)?)))
        .rule(rule::IMPLIES, |args| binary(args, Expr::implies))
        .rule(rule::EQUIV, |args| binary(args, Expr::equiv))
        .rule(rule::XOR, |args| binary(args, Expr::xor))
        .rule(rule::VAR, |args| Ok(Value::Expr(Expr::Variable(args.text()?))))
        .rule(rule::LITERAL, |args| {
            let value = matches!(args.text()?.as_str(), "1" | "TRUE" | "true");
            Ok(Value::Expr(Expr::Literal(value)))
        })
        .rule(rule::INTERVAL, |args| {
            let start = args.int()?;
            let end = args.int()?;
            Ok(Value::Interval(Interval::new(start, end)?))
        })
        .token(token::CNAME, |text| Ok(Value::Text(text.to_string())))
        .token(token::LITERAL, |text| Ok(Value::Text(text.to_string())))
        .token(token::ESCAPED_STRING, |text| Ok(Value::Text(unescape(text))))
        .token(token::INT, |text| {
            text.parse::<i64>().map(Value::Int).map_err(|err| {
                ConstructionError::InvalidNumber {
                    text: text.to_string(),
                    reason: err.to_string(),
                }
                .into()
            })
        })
});

/// Temporal operators on top of [`BASE`].
pub static LTL: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::extending(Layer::Ltl, Lazy::force(&BASE))
        .rule(rule::NEXT, |args| {
            let steps = steps(args.int()?)?;
            let arg = args.expr()?;
            Ok(Value::Expr(Expr::next(arg, steps)))
        })
        .rule(rule::ALWAYS, |args| bounded_unary(args, Expr::always))
        .rule(rule::EVENTUALLY, |args| bounded_unary(args, Expr::eventually))
        .rule(rule::UNTIL, |args| bounded_binary(args, Expr::until))
});

/// Spatial operators on top of [`LTL`].
pub static STREL: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::extending(Layer::Strel, Lazy::force(&LTL))
        .rule(rule::EVERYWHERE, |args| bounded_unary(args, Expr::everywhere))
        .rule(rule::SOMEWHERE, |args| bounded_unary(args, Expr::somewhere))
        .rule(rule::ESCAPE, |args| bounded_unary(args, Expr::escape))
        .rule(rule::REACH, |args| bounded_binary(args, Expr::reach))
});

/// Graph operators on top of [`LTL`].
pub static STL_GO: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::extending(Layer::StlGo, Lazy::force(&LTL))
        .rule(rule::GRAPH_LIST, |args| {
            Ok(Value::Graphs(args.remaining_texts()?.into_iter().collect()))
        })
        .rule(rule::GRAPH_INCOMING, |args| graph(args, Expr::graph_incoming))
        .rule(rule::GRAPH_OUTGOING, |args| graph(args, Expr::graph_outgoing))
});

/// The rule table of `layer`.
pub fn rules_for(layer: Layer) -> &'static RuleTable {
    match layer {
        Layer::Base => &BASE,
        Layer::Ltl => &LTL,
        Layer::Strel => &STREL,
        Layer::StlGo => &STL_GO,
    }
}

/// Turns syntax trees of one layer into expressions.
#[derive(Debug, Clone, Copy)]
pub struct Transformer {
    table: &'static RuleTable,
}

impl Transformer {
    pub fn new(layer: Layer) -> Self {
        Self::with_table(rules_for(layer))
    }

    /// Use a custom table, typically one extending a built-in table.
    pub fn with_table(table: &'static RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static RuleTable {
        self.table
    }

    /// Assemble `tree` bottom-up; the root must produce a formula.
    pub fn transform(&self, tree: &SyntaxTree) -> ParseResult<Expr<String>> {
        match self.tree(tree)? {
            Value::Expr(expr) => Ok(expr),
            other => Err(ConstructionError::NotAFormula {
                rule: tree.rule,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn tree(&self, tree: &SyntaxTree) -> ParseResult<Value> {
        let values = tree
            .children
            .iter()
            .map(|child| self.child(child))
            .collect::<ParseResult<Vec<_>>>()?;

        let (layer, rule) =
            self.table
                .resolve(tree.rule)
                .ok_or(ConstructionError::UnknownRule {
                    rule: tree.rule,
                    layer: self.table.layer,
                })?;
        trace!(
            "rule `{}` resolved by the `{layer}` table ({} children)",
            tree.rule,
            values.len()
        );

        let mut args = Args::new(tree.rule, values);
        let value = rule(&mut args)?;
        args.finish()?;
        Ok(value)
    }

    fn child(&self, child: &Child) -> ParseResult<Value> {
        match child {
            Child::Tree(tree) => self.tree(tree),
            Child::Token(token) => self.token(token),
            Child::Absent => Ok(Value::Absent),
        }
    }

    fn token(&self, token: &Token) -> ParseResult<Value> {
        match self.table.resolve_token(token.kind) {
            Some((layer, handler)) => {
                trace!("token `{}` resolved by the `{layer}` table", token.kind);
                handler(&token.text)
            }
            None => Ok(Value::Text(token.text.clone())),
        }
    }
}
