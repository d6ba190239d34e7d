//! Scan orchestration: pattern-set setup, the per-file open/scan/close
//! cycle and the overall outcome.
use crate::error::{MpgrepError, Result};
use crate::options::Invocation;
use crate::output::{self, FileContext, Flow};
use crate::patterns::PatternSet;
use crate::reader::LineReader;
use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Name reported for the implicit stream when no files were given.
pub const STDIN_NAME: &str = "(standard input)";

/// Per-run aggregate. The run succeeds only when every file opened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
}

impl ScanSummary {
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }
}

/// Drives the line source, match evaluator and the selected output
/// strategy over every input stream, in the order given.
#[derive(Debug)]
pub struct Scanner<'a> {
    invocation: &'a Invocation,
    patterns: PatternSet,
}

impl<'a> Scanner<'a> {
    /// Compiles the pattern set once for the whole run. Fails without
    /// scanning when the only requested pattern did not compile.
    pub fn new(invocation: &'a Invocation) -> Result<Self> {
        let patterns = PatternSet::compile(&invocation.patterns, invocation.options.ignore_case);
        if patterns.is_fatal() {
            return Err(MpgrepError::PatternSet);
        }
        Ok(Scanner {
            invocation,
            patterns,
        })
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Scans every named file, or stdin when none were named. Results go
    /// to `out`, per-file diagnostics to `err`. A file that fails to open
    /// is reported (unless `-s`) and the run continues.
    pub fn run(&self, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let filenames = &self.invocation.filenames;

        if filenames.is_empty() {
            let stdin = io::stdin();
            self.scan_stream(stdin.lock(), STDIN_NAME, false, out)?;
            summary.files_scanned = 1;
            return Ok(summary);
        }

        let multi_file = filenames.len() > 1;
        for filename in filenames {
            match File::open(filename) {
                Ok(file) => {
                    self.scan_stream(BufReader::new(file), filename, multi_file, out)?;
                    summary.files_scanned += 1;
                }
                Err(e) => {
                    summary.files_failed += 1;
                    warn!("failed to open {filename}: {e}");
                    if !self.invocation.options.no_messages {
                        writeln!(err, "mpgrep: {filename}: No such file or directory")?;
                    }
                }
            }
        }
        Ok(summary)
    }

    /// One stream: pull lines until end of stream, or earlier when the
    /// strategy has seen all it needs. Line numbers count every line read.
    pub fn scan_stream<R: BufRead>(
        &self,
        stream: R,
        filename: &str,
        multi_file: bool,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let options = &self.invocation.options;
        let ctx = FileContext {
            filename,
            multi_file,
            options,
        };
        let mut strategy = output::select_strategy(options);
        let mut reader = LineReader::new(stream);
        let mut line_number: u64 = 0;
        while let Some(line) = reader.next_line() {
            line_number += 1;
            if strategy.on_line(&ctx, line_number, &line, &self.patterns, out)? == Flow::Stop {
                break;
            }
        }
        strategy.finish(&ctx, out)
    }
}
