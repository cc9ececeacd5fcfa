use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {} at line {line}, column {column}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl CompareError {
    /// The document the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    pub(crate) fn parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Parse {
            path,
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_location() {
        let source = serde_json::from_str::<serde_json::Value>("[1,\n 2,]").unwrap_err();
        let err = CompareError::parse(PathBuf::from("a.json"), source);

        match &err {
            CompareError::Parse { line, column, .. } => {
                assert_eq!(*line, 2);
                assert!(*column > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.path(), std::path::Path::new("a.json"));
        assert!(err.to_string().starts_with("Failed to parse a.json at line 2"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CompareError::Io {
            path: PathBuf::from("/nowhere/java-embeddings.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err
            .to_string()
            .starts_with("Failed to read /nowhere/java-embeddings.json"));
    }
}
