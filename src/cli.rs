use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Raw flag surface. `-h` is taken by the no-filename flag, so the
/// automatic help flag is disabled and `--help` is re-added long-only.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Ignore case distinctions in patterns and input
    #[clap(short = 'i', action = ArgAction::SetTrue)]
    pub ignore_case: bool,

    /// Select lines that match none of the patterns
    #[clap(short = 'v', action = ArgAction::SetTrue)]
    pub invert_match: bool,

    /// Print only a count of matching lines per file
    #[clap(short = 'c', action = ArgAction::SetTrue)]
    pub count: bool,

    /// Print only the names of files containing a match
    #[clap(short = 'l', action = ArgAction::SetTrue)]
    pub files_with_matches: bool,

    /// Prefix each output line with its 1-based line number
    #[clap(short = 'n', action = ArgAction::SetTrue)]
    pub line_number: bool,

    /// Never print filename prefixes
    #[clap(short = 'h', action = ArgAction::SetTrue)]
    pub no_filename: bool,

    /// Suppress diagnostics about missing or unreadable files
    #[clap(short = 's', action = ArgAction::SetTrue)]
    pub no_messages: bool,

    /// Print only the matched parts of matching lines
    #[clap(short = 'o', action = ArgAction::SetTrue)]
    pub only_matching: bool,

    /// Add a search pattern (repeatable)
    #[clap(short = 'e', value_name = "PATTERN", action = ArgAction::Append)]
    pub patterns: Vec<String>,

    /// Read patterns from a file, one per line (repeatable)
    #[clap(short = 'f', value_name = "FILE", action = ArgAction::Append)]
    pub pattern_files: Vec<PathBuf>,

    /// Write log output to a file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    /// Generate shell completions and exit
    #[clap(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Print help
    #[clap(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Pattern (unless -e or -f was given) followed by input files
    #[clap(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// True when at least one pattern arrived via `-e` or `-f`, which
    /// turns every positional argument into a filename.
    pub fn has_explicit_patterns(&self) -> bool {
        !self.patterns.is_empty() || !self.pattern_files.is_empty()
    }
}
