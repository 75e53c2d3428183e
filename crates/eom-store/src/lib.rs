//! Persistence layer for derived equations of motion.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::EquationStore;
