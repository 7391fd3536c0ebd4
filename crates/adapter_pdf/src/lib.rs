//! # PDF Text Adapter
//!
//! Walks a directory tree for PDF files and extracts their text into a
//! mirrored cache of `.txt` files.
//!
//! Extraction is delegated to the `pdf-extract` crate. Each file produces a
//! typed per-file outcome; a failed file is recorded in-band as a
//! placeholder artifact and never aborts the run.

pub mod cache;
pub mod extract;

pub use cache::{CacheReport, TextCache};
pub use extract::{extract_text, ExtractError};
