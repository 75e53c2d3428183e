//! Euler-Lagrange derivation for a single generalized coordinate.

use crate::context::{Coordinate, SymbolContext};
use crate::engine::{self, Expr};

/// A derived equation of motion. The expression is the left-hand side
/// of `d/dt(dL/dq_dot) - dL/dq = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    pub index: usize,
    pub coordinate: String,
    pub expr: Expr,
}

impl Equation {
    /// Canonical serialization, as persisted to the output artifact.
    pub fn to_text(&self) -> String {
        engine::to_text(&self.expr)
    }
}

/// Total derivative with respect to time.
///
/// The engine treats every symbol as independent, so the time
/// dependence of the coordinates is reintroduced here by the chain
/// rule: `d/dt X = dX/dt + sum_s (dX/ds) * s_dot` over every declared
/// time-dependent symbol `s` in the context.
pub fn total_time_derivative(expr: &Expr, ctx: &SymbolContext) -> Expr {
    let mut result = engine::differentiate(expr, &ctx.time);
    for (symbol, derivative) in ctx.chain_pairs() {
        result = result + engine::differentiate(expr, symbol) * derivative.expr();
    }
    result
}

/// Derive the equation of motion for one coordinate.
///
/// `q` and `q_dot` are differentiated against as independent symbols,
/// per the Euler-Lagrange convention; the total time derivative then
/// reconnects them. Pure: structurally equal inputs give structurally
/// equal output.
pub fn derive(lagrangian: &Expr, coordinate: &Coordinate, ctx: &SymbolContext) -> Equation {
    let dl_dq = engine::differentiate(lagrangian, &coordinate.q);
    let dl_dq_dot = engine::differentiate(lagrangian, &coordinate.q_dot);
    let momentum_rate = total_time_derivative(&dl_dq_dot, ctx);
    let expr = engine::simplify(&(momentum_rate - dl_dq));
    Equation {
        index: coordinate.index,
        coordinate: coordinate.q.as_str().to_string(),
        expr,
    }
}
