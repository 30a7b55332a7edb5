//! Asset error types
//!
//! Provides error handling for model loading.

use std::io;
use std::fmt;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (malformed model file)
    Parse(String),
    /// Asset file does not exist
    NotFound(String),
    /// The file parsed but contains no triangles
    Empty(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Asset parse error: {}", msg),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::Empty(path) => write!(f, "Asset has no geometry: {}", path),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) => None,
            AssetError::NotFound(_) => None,
            AssetError::Empty(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<tobj::LoadError> for AssetError {
    fn from(err: tobj::LoadError) -> Self {
        match err {
            tobj::LoadError::OpenFileFailed | tobj::LoadError::ReadError => {
                AssetError::Io(io::Error::other(err))
            }
            _ => AssetError::Parse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let asset_err = AssetError::Io(io_err);
        let msg = format!("{}", asset_err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = AssetError::NotFound("models/ring.obj".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("models/ring.obj"));
    }

    #[test]
    fn test_empty_error_display() {
        let err = AssetError::Empty("models/blank.obj".to_string());
        assert_eq!(format!("{}", err), "Asset has no geometry: models/blank.obj");
    }

    #[test]
    fn test_from_tobj_error() {
        let asset_err: AssetError = tobj::LoadError::PositionParseError.into();
        assert!(matches!(asset_err, AssetError::Parse(_)));
    }

    #[test]
    fn test_tobj_file_errors_become_io() {
        let open: AssetError = tobj::LoadError::OpenFileFailed.into();
        assert!(matches!(open, AssetError::Io(_)));

        let read: AssetError = tobj::LoadError::ReadError.into();
        assert!(matches!(read, AssetError::Io(_)));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let asset_err = AssetError::Io(io_err);
        assert!(asset_err.source().is_some());

        let parse_err = AssetError::Parse("bad".to_string());
        assert!(parse_err.source().is_none());
    }
}
