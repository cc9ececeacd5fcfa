use std::path::{Path, PathBuf};

/// Directory the python pipeline writes into, relative to the repository root.
pub const PYTHON_DIR: &str = "python";
/// Directory the java pipeline writes into, relative to the repository root.
pub const JAVA_DIR: &str = "java";

/// File names of the two embedding dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingFiles {
    pub python: &'static str,
    pub java: &'static str,
}

impl EmbeddingFiles {
    /// The naming scheme the binary compares.
    pub const CANONICAL: Self = Self {
        python: "python-embeddings.json",
        java: "java-embeddings.json",
    };

    /// Singular names written by older versions of both pipelines.
    pub const LEGACY: Self = Self {
        python: "python-embedding.json",
        java: "java-embedding.json",
    };
}

impl Default for EmbeddingFiles {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// The pair of documents to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePaths {
    pub left: PathBuf,
    pub right: PathBuf,
}

impl ComparePaths {
    pub fn new(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Resolves the dumps relative to `base_dir`: one directory up, then into
    /// the sibling `python/` and `java/` directories.
    ///
    /// # Arguments
    /// * `base_dir` - the comparator's own directory.
    /// * `files` - the file names to look for.
    pub fn resolve(base_dir: &Path, files: &EmbeddingFiles) -> Self {
        let root = match base_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => base_dir.join(".."),
        };
        Self {
            left: root.join(PYTHON_DIR).join(files.python),
            right: root.join(JAVA_DIR).join(files.java),
        }
    }
}

impl Default for ComparePaths {
    /// Paths relative to this crate's directory, using the canonical names.
    fn default() -> Self {
        Self::resolve(Path::new(env!("CARGO_MANIFEST_DIR")), &EmbeddingFiles::CANONICAL)
    }
}
