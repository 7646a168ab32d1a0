use std::fs;
use std::path::Path;

use crate::error::ParseError;

/// Reads the whole file; the handle is closed before any decoding starts.
pub fn read(path: &Path, max_file_size: u64) -> Result<Vec<u8>, ParseError> {
    let io_error = |source: std::io::Error| ParseError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > max_file_size {
        return Err(ParseError::FileTooLarge {
            size,
            limit: max_file_size,
        });
    }

    fs::read(path).map_err(io_error)
}
