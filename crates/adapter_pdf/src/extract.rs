//! Single-file text extraction.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use thiserror::Error;

/// Extraction error
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The PDF parser rejected the file
    #[error("{0}")]
    Parse(String),

    /// The PDF parser aborted on the file
    #[error("malformed PDF: {0}")]
    Malformed(String),

    /// IO error outside the parser
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the plain text of one PDF file.
///
/// The parser aborts on some malformed files rather than returning an
/// error, so the call is isolated behind `catch_unwind`; an abort surfaces
/// as [`ExtractError::Malformed`] and the process keeps running.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(ExtractError::Parse(err.to_string())),
        Err(payload) => Err(ExtractError::Malformed(panic_message(payload))),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown parser failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_garbage_bytes_fail_without_panicking() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let result = extract_text(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let result = extract_text(Path::new("/nonexistent/letter.pdf"));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages_are_displayable() {
        let err = ExtractError::Parse("unexpected token".to_string());
        assert_eq!(err.to_string(), "unexpected token");

        let err = ExtractError::Malformed("stack overflow".to_string());
        assert!(err.to_string().contains("malformed PDF"));
    }
}
