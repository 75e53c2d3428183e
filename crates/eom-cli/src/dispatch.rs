//! Parallel fan-out of coordinate derivations.
//!
//! One blocking worker per generalized coordinate. Each worker owns
//! its own copies of the Lagrangian and coordinate data, derives,
//! persists, and reports back; nothing is shared mutably between
//! workers and no worker talks to another. Every handle is joined
//! before the batch is declared complete, so a failing coordinate is
//! reported against its identity instead of being silently dropped.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use eom_core::engine::Expr;
use eom_core::{Coordinate, SymbolContext, derive};
use eom_store::{EquationStore, StoreError};
use futures_util::future::join_all;
use tracing::{error, info};

/// Why one coordinate's task failed. A failure here never aborts the
/// sibling tasks.
#[derive(Debug)]
pub enum TaskError {
    /// The worker aborted mid-derivation, e.g. inside the algebra
    /// engine.
    Derivation(String),
    /// The equation was derived but its artifact could not be written.
    Persistence(StoreError),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Derivation(message) => write!(f, "derivation failed: {message}"),
            TaskError::Persistence(err) => write!(f, "persistence failed: {err}"),
        }
    }
}

/// Outcome of one coordinate's derive-and-persist task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub index: usize,
    pub coordinate: String,
    pub result: Result<PathBuf, TaskError>,
}

/// Derive and persist every coordinate's equation in parallel.
///
/// Outcomes come back in coordinate order regardless of completion
/// order, one per coordinate, only after every worker has finished.
pub async fn dispatch(
    lagrangian: Expr,
    ctx: Arc<SymbolContext>,
    store: EquationStore,
) -> Vec<TaskOutcome> {
    dispatch_with(lagrangian, ctx, store, run_task).await
}

/// Fan `worker` out over every coordinate. The worker body is a
/// parameter so tests can stand in a worker that aborts
/// mid-derivation.
async fn dispatch_with<F>(
    lagrangian: Expr,
    ctx: Arc<SymbolContext>,
    store: EquationStore,
    worker: F,
) -> Vec<TaskOutcome>
where
    F: Fn(&Expr, &Coordinate, &SymbolContext, &EquationStore) -> Result<PathBuf, StoreError>
        + Send
        + Sync
        + 'static,
{
    let worker = Arc::new(worker);
    let handles: Vec<_> = ctx
        .coordinates
        .iter()
        .cloned()
        .map(|coordinate| {
            let lagrangian = lagrangian.clone();
            let ctx = Arc::clone(&ctx);
            let store = store.clone();
            let worker = Arc::clone(&worker);
            tokio::task::spawn_blocking(move || worker(&lagrangian, &coordinate, &ctx, &store))
        })
        .collect();

    let joined = join_all(handles).await;
    ctx.coordinates
        .iter()
        .zip(joined)
        .map(|(coordinate, joined)| {
            let result = match joined {
                Ok(result) => result.map_err(TaskError::Persistence),
                // The worker panicked; surface it for this coordinate
                // only.
                Err(join_error) => Err(TaskError::Derivation(join_error.to_string())),
            };
            if let Err(err) = &result {
                error!(coordinate = %coordinate.q, %err, "coordinate task failed");
            }
            TaskOutcome {
                index: coordinate.index,
                coordinate: coordinate.q.as_str().to_string(),
                result,
            }
        })
        .collect()
}

fn run_task(
    lagrangian: &Expr,
    coordinate: &Coordinate,
    ctx: &SymbolContext,
    store: &EquationStore,
) -> Result<PathBuf, StoreError> {
    let started = Instant::now();
    let equation = derive(lagrangian, coordinate, ctx);
    let path = store.persist(&equation)?;
    info!(
        coordinate = %equation.coordinate,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "derived and persisted"
    );
    Ok(path)
}
