//! Output strategies: one per output mode, sharing per-file context and
//! the match evaluator.
use crate::matcher;
use crate::options::Options;
use crate::patterns::PatternSet;
use std::io::{self, Write};

/// Whether the scan of the current file should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Per-file context shared by every strategy. The filename prefix is
/// emitted only when more than one file was named and `-h` is absent.
pub struct FileContext<'a> {
    pub filename: &'a str,
    pub multi_file: bool,
    pub options: &'a Options,
}

impl FileContext<'_> {
    fn filename_prefix(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.multi_file && !self.options.no_filename {
            write!(out, "{}:", self.filename)?;
        }
        Ok(())
    }

    fn line_prefix(&self, out: &mut dyn Write, line_number: u64) -> io::Result<()> {
        self.filename_prefix(out)?;
        if self.options.line_number {
            write!(out, "{line_number}:")?;
        }
        Ok(())
    }
}

/// One scan pass over one file: a per-line action plus a per-file summary.
pub trait OutputStrategy {
    fn on_line(
        &mut self,
        ctx: &FileContext<'_>,
        line_number: u64,
        line: &str,
        set: &PatternSet,
        out: &mut dyn Write,
    ) -> io::Result<Flow>;

    fn finish(&mut self, ctx: &FileContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        let _ = (ctx, out);
        Ok(())
    }
}

/// Picks the strategy for the active output mode; file listing wins over
/// counting, which wins over only-matching.
pub fn select_strategy(options: &Options) -> Box<dyn OutputStrategy> {
    if options.files_with_matches {
        Box::new(FileLister::default())
    } else if options.count {
        Box::new(Counter::default())
    } else if options.only_matching {
        Box::new(MatchExtractor)
    } else {
        Box::new(LinePrinter)
    }
}

/// Emits every matching line with optional prefixes, always terminated.
pub struct LinePrinter;

impl OutputStrategy for LinePrinter {
    fn on_line(
        &mut self,
        ctx: &FileContext<'_>,
        line_number: u64,
        line: &str,
        set: &PatternSet,
        out: &mut dyn Write,
    ) -> io::Result<Flow> {
        if matcher::line_matches(line, set, ctx.options.invert_match) {
            ctx.line_prefix(out, line_number)?;
            writeln!(out, "{line}")?;
        }
        Ok(Flow::Continue)
    }
}

/// Accumulates the number of matching lines, reported once per file.
#[derive(Default)]
pub struct Counter {
    matched: u64,
}

impl OutputStrategy for Counter {
    fn on_line(
        &mut self,
        ctx: &FileContext<'_>,
        _line_number: u64,
        line: &str,
        set: &PatternSet,
        _out: &mut dyn Write,
    ) -> io::Result<Flow> {
        if matcher::line_matches(line, set, ctx.options.invert_match) {
            self.matched += 1;
        }
        Ok(Flow::Continue)
    }

    fn finish(&mut self, ctx: &FileContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        ctx.filename_prefix(out)?;
        writeln!(out, "{}", self.matched)
    }
}

/// Stops reading at the first matching line. Reports the bare filename on
/// match, or the combined 1/0 form when `-c` is also set.
#[derive(Default)]
pub struct FileLister {
    found: bool,
}

impl OutputStrategy for FileLister {
    fn on_line(
        &mut self,
        ctx: &FileContext<'_>,
        _line_number: u64,
        line: &str,
        set: &PatternSet,
        _out: &mut dyn Write,
    ) -> io::Result<Flow> {
        if matcher::line_matches(line, set, ctx.options.invert_match) {
            self.found = true;
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }

    fn finish(&mut self, ctx: &FileContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        if ctx.options.count {
            ctx.filename_prefix(out)?;
            writeln!(out, "{}", u8::from(self.found))
        } else if self.found {
            writeln!(out, "{}", ctx.filename)
        } else {
            Ok(())
        }
    }
}

/// Emits each matched substring on its own line, prefixes included.
/// Inversion never reaches this strategy (cleared during resolution).
pub struct MatchExtractor;

impl OutputStrategy for MatchExtractor {
    fn on_line(
        &mut self,
        ctx: &FileContext<'_>,
        line_number: u64,
        line: &str,
        set: &PatternSet,
        out: &mut dyn Write,
    ) -> io::Result<Flow> {
        for span in matcher::matched_spans(line, set) {
            ctx.line_prefix(out, line_number)?;
            writeln!(out, "{}", &line[span.start..span.end])?;
        }
        Ok(Flow::Continue)
    }
}
