//! Semicolon-delimited output streams.
//!
//! Survivors: `z;seedIndex;k;p;n;isPPrime`, one row per surviving candidate,
//! written while the sieve runs.
//! Surface:   `p1;n;z`, one row per surface point, written once at the end.

use num_bigint::BigInt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SieveError};

pub const SURVIVORS_HEADER: &str = "z;seedIndex;k;p;n;isPPrime";
pub const SURFACE_HEADER: &str = "p1;n;z";

/// A candidate that passed every filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survivor {
    pub z: u64,
    /// Index of the seed within this z's canonical seed list.
    pub seed_index: usize,
    /// Orbit step, 0 for the seed itself.
    pub k: u32,
    pub p: BigInt,
    pub n: BigInt,
    pub is_p_prime: bool,
}

impl Survivor {
    pub fn surface_point(&self) -> SurfacePoint {
        SurfacePoint {
            p1: self.p.clone(),
            n: self.n.clone(),
            z: self.z,
        }
    }

    pub fn to_row(&self) -> String {
        format!(
            "{};{};{};{};{};{}",
            self.z, self.seed_index, self.k, self.p, self.n, self.is_p_prime
        )
    }
}

/// A survivor projected onto the global surface F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfacePoint {
    pub p1: BigInt,
    pub n: BigInt,
    pub z: u64,
}

impl SurfacePoint {
    pub fn to_row(&self) -> String {
        format!("{};{};{}", self.p1, self.n, self.z)
    }
}

/// Streaming writer for the survivors table. The header is written on
/// construction; rows follow in emission order.
pub struct SurvivorWriter<W: Write> {
    inner: W,
    label: PathBuf,
    rows: usize,
}

impl SurvivorWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SieveError::io(path, e))?;
        SurvivorWriter::new(BufWriter::new(file), path)
    }
}

impl<W: Write> SurvivorWriter<W> {
    /// Wrap any writer; `label` names it in error messages.
    pub fn new(mut inner: W, label: impl Into<PathBuf>) -> Result<Self> {
        let label = label.into();
        writeln!(inner, "{}", SURVIVORS_HEADER).map_err(|e| SieveError::io(&label, e))?;
        Ok(SurvivorWriter {
            inner,
            label,
            rows: 0,
        })
    }

    pub fn write(&mut self, survivor: &Survivor) -> Result<()> {
        writeln!(self.inner, "{}", survivor.to_row()).map_err(|e| SieveError::io(&self.label, e))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(|e| SieveError::io(&self.label, e))?;
        Ok(self.inner)
    }
}

/// Write the full surface table to `out`.
pub fn write_surface<W: Write>(mut out: W, label: &Path, points: &[SurfacePoint]) -> Result<W> {
    let io_err = |e| SieveError::io(label, e);
    writeln!(out, "{}", SURFACE_HEADER).map_err(io_err)?;
    for point in points {
        writeln!(out, "{}", point.to_row()).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(out)
}

pub fn write_surface_file(path: impl AsRef<Path>, points: &[SurfacePoint]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SieveError::io(path, e))?;
    write_surface(BufWriter::new(file), path, points)?;
    Ok(())
}
