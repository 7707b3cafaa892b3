use std::fs;

use crate::app::infrastructure::error::{AppError, Result};

/// Read a whole file as text.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so any
/// text file the platform can open also opens here.
pub fn read_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| AppError::Read {
        path: path.to_string(),
        source,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!("{} is not valid UTF-8; invalid bytes were replaced", path);
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Overwrite `path` with `text` in one write.
pub fn write_text_file(path: &str, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_string(),
        source,
    })
}
