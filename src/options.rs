//! Resolved option model consumed by the scan orchestrator.
use crate::cli::Cli;
use crate::error::{MpgrepError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Behavior flags after the mutual-override rules have been applied.
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub ignore_case: bool,
    pub invert_match: bool,
    pub count: bool,
    pub files_with_matches: bool,
    pub line_number: bool,
    pub no_filename: bool,
    pub no_messages: bool,
    pub only_matching: bool,
}

impl Options {
    /// Applies the flag-interaction table in one place: counting and file
    /// listing suppress line numbers; counting and inversion suppress
    /// only-matching.
    pub fn resolve(cli: &Cli) -> Self {
        Options {
            ignore_case: cli.ignore_case,
            invert_match: cli.invert_match,
            count: cli.count,
            files_with_matches: cli.files_with_matches,
            line_number: cli.line_number && !cli.count && !cli.files_with_matches,
            no_filename: cli.no_filename,
            no_messages: cli.no_messages,
            only_matching: cli.only_matching && !cli.count && !cli.invert_match,
        }
    }
}

/// One resolved invocation: options plus the ordered pattern and filename
/// lists. An empty filename list means the implicit stdin stream.
#[derive(Debug)]
pub struct Invocation {
    pub options: Options,
    pub patterns: Vec<String>,
    pub filenames: Vec<String>,
}

impl Invocation {
    /// Resolves the CLI into an immutable invocation. `-e` patterns come
    /// first, then pattern-file contents in file order; without either,
    /// the first positional argument is the sole pattern.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let options = Options::resolve(cli);
        let mut patterns = cli.patterns.clone();
        for path in &cli.pattern_files {
            read_pattern_file(path, &mut patterns)?;
        }

        let mut positionals = cli.args.iter();
        if !cli.has_explicit_patterns() {
            match positionals.next() {
                Some(pattern) => patterns.push(pattern.clone()),
                None => return Err(MpgrepError::Usage),
            }
        }
        if patterns.is_empty() {
            return Err(MpgrepError::Usage);
        }
        let filenames = positionals.cloned().collect();

        Ok(Invocation {
            options,
            patterns,
            filenames,
        })
    }
}

/// Appends each line of `path` (terminator stripped) as one pattern.
/// An unreadable pattern file is fatal to the invocation.
fn read_pattern_file(path: &Path, patterns: &mut Vec<String>) -> Result<()> {
    let file = File::open(path).map_err(|source| MpgrepError::PatternFile {
        path: path.to_path_buf(),
        source,
    })?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| MpgrepError::PatternFile {
            path: path.to_path_buf(),
            source,
        })?;
        patterns.push(line);
    }
    Ok(())
}
