pub mod cli;
pub mod error;
pub mod matcher;
pub mod options;
pub mod output;
pub mod patterns;
pub mod reader;
pub mod scanner;

pub use crate::error::{MpgrepError, Result};
pub use clap::Parser;
pub use cli::Cli;
pub use matcher::{MatchSpan, line_matches, matched_spans};
pub use options::{Invocation, Options};
pub use patterns::PatternSet;
pub use reader::LineReader;
pub use scanner::{STDIN_NAME, ScanSummary, Scanner};
