//! Text to [`Expr`]: the grammar of a layer followed by that layer's rule table.
use log::debug;
use logic_asts_grammar::{Layer, parse_tree};

use crate::error::{ConfigurationError, ParseResult};
use crate::expr::Expr;
use crate::transformer::Transformer;

/// Parse `text` with the grammar named `layer`.
///
/// Layer names are `base`, `ltl`, `strel` and `stl_go` (aliases `propositional`, `temporal`,
/// `spatial` and `graph`). An unknown name fails before any parsing happens.
///
/// ```
/// use logic_asts::prelude::*;
///
/// let e = parse("X(Gp2 U Fp2)", "ltl").unwrap();
/// let p2: Expr = Expr::var("p2");
/// assert_eq!(
///     e,
///     Expr::next(
///         Expr::until(Expr::always(p2.clone(), None), Expr::eventually(p2, None), None),
///         None,
///     )
/// );
/// assert!(parse("p", "modal").unwrap_err().is_configuration());
/// ```
pub fn parse(text: &str, layer: &str) -> ParseResult<Expr<String>> {
    let layer: Layer = layer
        .parse()
        .map_err(|_| ConfigurationError::UnknownLayer {
            name: layer.to_string(),
        })?;
    parse_expr(text, layer)
}

/// Parse `text` with the grammar of `layer`.
pub fn parse_expr(text: &str, layer: Layer) -> ParseResult<Expr<String>> {
    let tree = parse_tree(text, layer)?;
    let expr = Transformer::new(layer).transform(&tree)?;
    debug!(
        "parsed a `{layer}` formula: {} syntax nodes, {} expression nodes",
        tree.size(),
        expr.size()
    );
    Ok(expr)
}
