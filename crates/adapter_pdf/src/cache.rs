//! Text cache walk.
//!
//! Mirrors every `*.pdf` under a root directory into
//! `<root>/output/text_cache/<relative-path>.txt`, strictly sequentially.
//! A file that fails to extract gets a placeholder artifact recording the
//! reason in-band; the walk continues to the next file. Filesystem errors
//! outside per-file extraction propagate and end the run.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::extract::{extract_text, ExtractError};

/// Recursive PDF-to-text cache under a root directory.
#[derive(Debug, Clone)]
pub struct TextCache {
    root: PathBuf,
    cache_dir: PathBuf,
}

/// Outcome counts of one cache run.
#[derive(Debug, Clone, Default)]
pub struct CacheReport {
    /// Files extracted successfully
    pub extracted: usize,
    /// Files recorded as placeholder artifacts
    pub failed: usize,
    /// Every artifact written, in visit order
    pub written: Vec<PathBuf>,
}

impl TextCache {
    /// Create a cache rooted at `root`, writing under
    /// `<root>/output/text_cache`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let cache_dir = root.join("output").join("text_cache");
        Self { root, cache_dir }
    }

    /// The directory artifacts are written under.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Walk the root and write one `.txt` artifact per PDF found.
    ///
    /// Files are visited in sorted order so runs are deterministic. The
    /// extension match is exact (`.pdf`), as with the original letters.
    pub fn run(&self) -> Result<CacheReport, ExtractError> {
        fs::create_dir_all(&self.cache_dir)?;

        let mut report = CacheReport::default();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("pdf") {
                continue;
            }

            let rel = path.strip_prefix(&self.root).unwrap_or(path);
            let dest = self.cache_dir.join(rel).with_extension("txt");
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            match extract_text(path) {
                Ok(text) => {
                    fs::write(&dest, text)?;
                    report.extracted += 1;
                    info!(pdf = %path.display(), dest = %dest.display(), "Extracted");
                }
                Err(err) => {
                    // Failure is recorded in the artifact itself; the run
                    // moves on to the next file.
                    fs::write(&dest, format!("ERROR extracting {}: {}\n", path.display(), err))?;
                    report.failed += 1;
                    warn!(pdf = %path.display(), error = %err, "Extraction failed");
                }
            }
            report.written.push(dest);
        }

        Ok(report)
    }
}
