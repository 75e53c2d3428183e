//! Euler-Lagrange equation-of-motion derivation core.
//!
//! Takes a textual description of a mechanical system's potential and
//! kinetic energies, substitutes placeholder tokens with declared
//! symbols, builds the Lagrangian `L = T - U`, and derives one symbolic
//! equation of motion per generalized coordinate via
//! `d/dt(dL/dq_dot) - dL/dq`.
//!
//! Zero I/O — pure symbolic work with no opinions about transport or
//! persistence. The algebra itself (expression parsing,
//! differentiation, simplification) is delegated to the external engine
//! behind the [`engine`] surface.

pub mod context;
pub mod deriver;
pub mod engine;
pub mod error;
pub mod loader;

pub use context::{AuxiliaryAngle, Coordinate, Placeholder, Symbol, SymbolContext};
pub use deriver::{Equation, derive, total_time_derivative};
pub use engine::Expr;
pub use error::{LoadError, Section};
pub use loader::{LoadedEnergies, PlaceholderWarning, load_energies};
