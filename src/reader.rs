//! Line source: one blocking read per line, bounded memory.
use std::io::BufRead;

/// Lazily yields lines from a stream, one read per call. The sequence is
/// finite and non-restartable; the stream is never closed here.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            buf: Vec::new(),
        }
    }

    /// Reads up to and including the next terminator and returns the line
    /// with the terminator stripped (a `\r` before it is kept as content).
    /// The final unterminated fragment is still a line. Returns `None` at
    /// end of stream; read errors end the stream the same way.
    pub fn next_line(&mut self) -> Option<String> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_line()
    }
}
