//! Thin surface over the external algebra engine.
//!
//! Everything the pipeline needs from symbolic algebra funnels through
//! these four operations; no other module talks to the engine crate
//! directly, and no expression tree is ever built by hand outside it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::context::Symbol;

pub use RustedSciThe::symbolic::symbolic_engine::Expr;

/// Parse a textual expression into an engine expression.
///
/// The engine's parser aborts on invalid syntax; the abort is caught
/// here so a malformed section body surfaces as a plain error value
/// instead of tearing down the caller.
pub fn parse_expression(text: &str) -> Result<Expr, String> {
    panic::catch_unwind(AssertUnwindSafe(|| Expr::parse_expression(text)))
        .map_err(|payload| panic_text(payload.as_ref()))
}

/// Partial derivative with respect to a single named symbol.
pub fn differentiate(expr: &Expr, symbol: &Symbol) -> Expr {
    expr.diff(symbol.as_str())
}

pub fn simplify(expr: &Expr) -> Expr {
    expr.simplify()
}

/// Canonical textual form, as written to output artifacts.
pub fn to_text(expr: &Expr) -> String {
    expr.to_string()
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine parser rejected the expression".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_polynomial() {
        let expr = parse_expression("x^2 + 2*x + 1").unwrap();
        let text = to_text(&expr);
        assert!(text.contains('x'), "serialized form should mention x: {text}");
    }

    #[test]
    fn test_parse_invalid_syntax_is_an_error() {
        assert!(parse_expression("))((").is_err());
    }

    #[test]
    fn test_differentiate_against_one_symbol() {
        let expr = parse_expression("a*x^2").unwrap();
        let x = Symbol::new("x");
        let a = Symbol::new("a");
        let d_dx = simplify(&differentiate(&expr, &x));
        let d_da = simplify(&differentiate(&expr, &a));
        // d(a*x^2)/dx = 2*a*x, d(a*x^2)/da = x^2
        let vars = vec!["a", "x"];
        let values = [3.0, 5.0];
        assert_eq!(d_dx.eval_expression(&vars, &values), 30.0);
        assert_eq!(d_da.eval_expression(&vars, &values), 25.0);
    }
}
