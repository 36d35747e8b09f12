// Infrastructure implementations for Taintrace: file input and runtime setup.

pub mod concurrency;
pub mod demangler;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Read a text file into lines, line endings stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.with_context(|| format!("Failed to read {}", path.display()))?);
    }
    Ok(lines)
}

/// Read the seed (taint) list: one label per line, `#` lines are comments.
pub fn read_seed_labels(path: &Path) -> Result<HashSet<String>> {
    let lines = read_lines(path)?;
    Ok(lines
        .into_iter()
        .filter(|line| !line.starts_with('#'))
        .collect())
}
