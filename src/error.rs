use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MpgrepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("{}: No such file or directory", .path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("pattern error")]
    PatternSet,

    #[error("usage: mpgrep [-chilnosv] [-e pattern] [-f file] [pattern] [file ...]")]
    Usage,

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MpgrepError>;
