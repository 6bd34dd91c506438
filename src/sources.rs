//! Input path resolution and source reading.
//!
//! Paths are order-significant: implementation sources first, then the
//! interface source, then (unless availability checking is skipped) the
//! interface header.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// Which relationships a run validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Declarations, dispatch entries and the availability table.
    Full,
    /// Declarations and dispatch entries only; no header is given.
    SkipAvailability,
}

impl Mode {
    pub fn min_paths(self) -> usize {
        match self {
            Mode::Full => 3,
            Mode::SkipAvailability => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub implementations: Vec<PathBuf>,
    pub interface: PathBuf,
    pub header: Option<PathBuf>,
}

impl SourcePaths {
    /// Split positional paths into their roles.
    ///
    /// Returns `None` when there are too few paths for the mode.
    pub fn partition(paths: &[PathBuf], mode: Mode) -> Option<Self> {
        if paths.len() < mode.min_paths() {
            return None;
        }

        let (rest, header) = match mode {
            Mode::Full => {
                let (header, rest) = paths.split_last()?;
                (rest, Some(header.clone()))
            }
            Mode::SkipAvailability => (paths, None),
        };
        let (interface, implementations) = rest.split_last()?;

        Some(Self {
            implementations: implementations.to_vec(),
            interface: interface.clone(),
            header,
        })
    }

    /// Expand glob patterns among the implementation paths.
    ///
    /// Literal paths are kept as-is; each pattern is replaced by its matches
    /// in sorted order. A pattern without matches is an error.
    pub fn expand_implementations(self) -> Result<Self> {
        let mut implementations = Vec::with_capacity(self.implementations.len());
        for path in &self.implementations {
            implementations.extend(expand_path(path)?);
        }
        Ok(Self {
            implementations,
            ..self
        })
    }
}

fn is_glob_pattern(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}

fn expand_path(path: &Path) -> Result<Vec<PathBuf>> {
    let pattern = path.to_string_lossy();
    if !is_glob_pattern(&pattern) || path.exists() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut matches = glob::glob(&pattern)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to expand glob pattern: \"{}\"", pattern))?;
    if matches.is_empty() {
        bail!("Pattern matched no files: \"{}\"", pattern);
    }
    matches.sort();
    Ok(matches)
}

/// Read a source file in full.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read source file: {:?}", path))
}
