//! Symbolic variable declarations for one mechanical system.
//!
//! The original formulation of this tool kept coordinates and physical
//! parameters as process-wide globals; here they live in an explicit
//! [`SymbolContext`] built once at startup and passed read-only through
//! the loader, the deriver, and the dispatcher.
//!
//! The engine knows plain named variables, not functions of time, so a
//! time-dependent quantity is declared as a family of independent
//! symbols: `q`, `q_dot`, `q_ddot`. The deriver's chain rule is what
//! ties them back together as one function of time.

use std::fmt;

use crate::engine::Expr;

/// An opaque algebraic atom. Identity is by name; equality is
/// structural, never referential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lift into an engine expression.
    pub fn expr(&self) -> Expr {
        Expr::Var(self.0.clone())
    }

    /// First time derivative, by naming convention.
    fn dot(&self) -> Symbol {
        Symbol(format!("{}_dot", self.0))
    }

    /// Second time derivative.
    fn ddot(&self) -> Symbol {
        Symbol(format!("{}_ddot", self.0))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generalized coordinate with its derivative symbols and its
/// stable output index.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub index: usize,
    pub q: Symbol,
    pub q_dot: Symbol,
    pub q_ddot: Symbol,
}

/// Extra time-dependent angle referenced inside the energy expressions
/// but not differentiated against in the Euler-Lagrange step.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxiliaryAngle {
    pub angle: Symbol,
    pub dot: Symbol,
    pub ddot: Symbol,
}

/// One entry of the placeholder-to-symbol substitution table.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub token: String,
    pub symbol: Symbol,
}

/// Every symbol of one system, plus the placeholder table its input
/// files use. Immutable for the life of the process.
#[derive(Clone, Debug)]
pub struct SymbolContext {
    pub time: Symbol,
    pub parameters: Vec<Symbol>,
    pub coordinates: Vec<Coordinate>,
    pub auxiliary: Option<AuxiliaryAngle>,
    pub placeholders: Vec<Placeholder>,
}

impl SymbolContext {
    /// Build a context from symbol names. Derivative symbols follow the
    /// `{name}_dot` / `{name}_ddot` convention. The default placeholder
    /// table maps `{q}(t)` and `{q}_dot` for each coordinate, plus
    /// `{angle}_dot` for the auxiliary angle.
    pub fn new(
        time: &str,
        parameters: &[&str],
        coordinates: &[&str],
        auxiliary: Option<&str>,
    ) -> Self {
        let coordinates: Vec<Coordinate> = coordinates
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let q = Symbol::new(*name);
                Coordinate {
                    index,
                    q_dot: q.dot(),
                    q_ddot: q.ddot(),
                    q,
                }
            })
            .collect();

        let auxiliary = auxiliary.map(|name| {
            let angle = Symbol::new(name);
            AuxiliaryAngle {
                dot: angle.dot(),
                ddot: angle.ddot(),
                angle,
            }
        });

        let mut placeholders = Vec::new();
        for coordinate in &coordinates {
            placeholders.push(Placeholder {
                token: format!("{}(t)", coordinate.q),
                symbol: coordinate.q.clone(),
            });
            placeholders.push(Placeholder {
                token: format!("{}_dot", coordinate.q),
                symbol: coordinate.q_dot.clone(),
            });
        }
        if let Some(aux) = &auxiliary {
            placeholders.push(Placeholder {
                token: format!("{}_dot", aux.angle),
                symbol: aux.dot.clone(),
            });
        }

        SymbolContext {
            time: Symbol::new(time),
            parameters: parameters.iter().map(|p| Symbol::new(*p)).collect(),
            coordinates,
            auxiliary,
            placeholders,
        }
    }

    /// The planar two-link arm this pipeline was written for: four
    /// generalized coordinates `q0..q3`, an auxiliary rotor angle
    /// `theta2`, and the gravity/link/mass/inertia parameters.
    ///
    /// Input files for this model carry joint-numbered tokens
    /// `q10(t)..q13(t)` and `q10_dot..q13_dot`, which map onto
    /// `q0..q3`; the table below enumerates that mapping explicitly.
    pub fn two_link_arm() -> Self {
        let mut ctx = Self::new(
            "t",
            &["g", "l1", "lg1", "lg2", "m1", "m2", "I1", "Iyy2"],
            &["q0", "q1", "q2", "q3"],
            Some("theta2"),
        );

        let mut placeholders = Vec::new();
        for (joint, coordinate) in ctx.coordinates.iter().enumerate() {
            placeholders.push(Placeholder {
                token: format!("q1{joint}(t)"),
                symbol: coordinate.q.clone(),
            });
            placeholders.push(Placeholder {
                token: format!("q1{joint}_dot"),
                symbol: coordinate.q_dot.clone(),
            });
        }
        if let Some(aux) = &ctx.auxiliary {
            placeholders.push(Placeholder {
                token: format!("{}_dot", aux.angle),
                symbol: aux.dot.clone(),
            });
        }
        ctx.placeholders = placeholders;
        ctx
    }

    /// The `(symbol, d symbol/dt)` pairs the total time derivative
    /// sums over.
    pub fn chain_pairs(&self) -> Vec<(&Symbol, &Symbol)> {
        let mut pairs = Vec::new();
        for coordinate in &self.coordinates {
            pairs.push((&coordinate.q, &coordinate.q_dot));
            pairs.push((&coordinate.q_dot, &coordinate.q_ddot));
        }
        if let Some(aux) = &self.auxiliary {
            pairs.push((&aux.angle, &aux.dot));
            pairs.push((&aux.dot, &aux.ddot));
        }
        pairs
    }
}
