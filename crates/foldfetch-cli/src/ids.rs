//! Identifier lists from the command line and from files.

use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Read identifiers one per line. Blank lines and `#` comments are ignored.
pub fn read_ids<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line.context("Error reading identifier list")?;
        let id = line.trim();
        if id.is_empty() || id.starts_with('#') {
            continue;
        }
        ids.push(id.to_string());
    }
    Ok(ids)
}

/// Positional identifiers followed by those listed in `ids_file`, in order.
pub fn collect_ids(positional: Vec<String>, ids_file: Option<&Path>) -> Result<Vec<String>> {
    let mut ids = positional;
    if let Some(path) = ids_file {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file \"{}\" for reading", path.display()))?;
        ids.extend(read_ids(std::io::BufReader::new(file))?);
    }
    if ids.is_empty() {
        anyhow::bail!("No identifiers given");
    }
    Ok(ids)
}
