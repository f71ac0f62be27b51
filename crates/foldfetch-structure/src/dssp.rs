//! Secondary structure assignment using DSSP.
//!
//! DSSP writes a fixed-width text report. Everything up to and including the
//! first line containing `#` is header; each following line is one residue
//! record, or a chain break marked with `!` in the amino acid column.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, warn};

use foldfetch_common::{FoldError, Result};

use crate::secstruct::{SecondaryStructure, SsCode};

/// Name of the report DSSP is asked to write. Fixed, so concurrent runs
/// sharing a scratch directory overwrite each other.
pub const SCRATCH_FILE_NAME: &str = "result.dssp";

/// Byte that marks the end of the report header.
const HEADER_DELIMITER: u8 = b'#';
/// Amino acid column; `!` here marks a chain break (`!*` for a break between chains).
const CHAIN_BREAK_COLUMN: usize = 13;
const CHAIN_BREAK_MARKER: u8 = b'!';
/// Secondary structure column.
const SS_COLUMN: usize = 16;

/// Wrapper for DSSP execution.
pub struct DsspRunner {
    executable_path: PathBuf,
    scratch_dir: PathBuf,
}

impl DsspRunner {
    /// Create a new DsspRunner writing its report into the current working directory.
    pub fn new<P: AsRef<Path>>(executable_path: P) -> Self {
        Self {
            executable_path: executable_path.as_ref().to_path_buf(),
            scratch_dir: PathBuf::from("."),
        }
    }

    /// Write the report into `dir` instead of the current working directory.
    pub fn with_scratch_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.scratch_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn scratch_path(&self) -> PathBuf {
        self.scratch_dir.join(SCRATCH_FILE_NAME)
    }

    /// Run DSSP on a structure file, returning the path of the report.
    pub async fn run(&self, structure_path: &Path) -> Result<PathBuf> {
        let out = self.scratch_path();
        info!("Running DSSP on {:?}", structure_path);
        debug!(executable = ?self.executable_path, output = ?out, "Invoking DSSP");

        let output = Command::new(&self.executable_path)
            .arg(structure_path)
            .arg("-o")
            .arg(&out)
            .output()
            .await
            .map_err(|e| {
                FoldError::dssp(format!("failed to run {:?}: {}", self.executable_path, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FoldError::dssp(format!(
                "DSSP failed with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        debug!("DSSP completed successfully. Output in {:?}", out);
        Ok(out)
    }

    /// Run DSSP on a structure file and return one code per residue.
    ///
    /// The report is deleted after parsing, whether parsing succeeded or not.
    pub async fn secondary_structure(&self, structure_path: &Path) -> Result<SecondaryStructure> {
        let report = self.run(structure_path).await?;

        let parsed = tokio::fs::read(&report)
            .await
            .map_err(|e| FoldError::dssp(format!("cannot read {:?}: {}", report, e)))
            .and_then(|bytes| parse_dssp(bytes.as_slice()).map_err(FoldError::from));

        if let Err(e) = tokio::fs::remove_file(&report).await {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Failed to remove DSSP report {:?}: {}", report, e);
            }
        }

        let ss = parsed?;
        info!(residues = ss.len(), "Parsed secondary structure of {:?}", structure_path);
        Ok(ss)
    }
}

/// Run `dssp_path` on `structure_path` with the report in the current directory.
pub async fn secondary_structure<P, Q>(structure_path: P, dssp_path: Q) -> Result<SecondaryStructure>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    DsspRunner::new(dssp_path)
        .secondary_structure(structure_path.as_ref())
        .await
}

/// Parse a DSSP report into per-residue codes.
///
/// Reading starts on the line after the first line containing `#` and is
/// never switched off again. Chain breaks and lines too short to hold the
/// structure column are skipped.
pub fn parse_dssp<R: BufRead>(reader: R) -> io::Result<SecondaryStructure> {
    let mut reading = false;
    let mut ss = SecondaryStructure::new();

    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if reading {
            if let Some(code) = residue_code(&line) {
                ss.push(code);
            }
        }

        if line.contains(&HEADER_DELIMITER) {
            reading = true;
        }
    }

    Ok(ss)
}

fn residue_code(line: &[u8]) -> Option<SsCode> {
    if line.get(CHAIN_BREAK_COLUMN) == Some(&CHAIN_BREAK_MARKER) {
        return None;
    }
    line.get(SS_COLUMN).map(|&b| SsCode::from_dssp_byte(b))
}
