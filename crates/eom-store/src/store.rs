//! Filesystem persistence for derived equations.
//!
//! One plain-text artifact per coordinate, named from the coordinate's
//! index and symbol, so names never collide across the fixed set.
//! Writes are truncating writes: re-deriving a coordinate overwrites
//! its artifact in place.

use std::fs;
use std::path::{Path, PathBuf};

use eom_core::Equation;
use tracing::info;

use crate::error::{Result, StoreError};

/// Handle on the directory all equation artifacts live in.
#[derive(Clone, Debug)]
pub struct EquationStore {
    out_dir: PathBuf,
}

impl EquationStore {
    /// Open the output directory, creating it if absent.
    pub fn open(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|source| StoreError::Io {
            path: out_dir.clone(),
            source,
        })?;
        Ok(EquationStore { out_dir })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Deterministic artifact name for one coordinate.
    pub fn artifact_name(index: usize, coordinate: &str) -> String {
        format!("lagrange_equation_{index}_{coordinate}.txt")
    }

    /// Serialize one equation and write it out, replacing any previous
    /// artifact for the same coordinate.
    pub fn persist(&self, equation: &Equation) -> Result<PathBuf> {
        let path = self
            .out_dir
            .join(Self::artifact_name(equation.index, &equation.coordinate));
        fs::write(&path, equation.to_text()).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            coordinate = %equation.coordinate,
            artifact = %path.display(),
            "persisted equation"
        );
        Ok(path)
    }
}
