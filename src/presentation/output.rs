//! Output modes: write a fragment to a sink, or hand it back to the caller.

use std::io;

use tracing::warn;

/// Destination for fragments rendered in echo mode.
pub trait OutputSink {
    fn emit(&mut self, fragment: &str);
}

impl OutputSink for String {
    fn emit(&mut self, fragment: &str) {
        self.push_str(fragment);
    }
}

/// Adapts any `io::Write` into a sink. Write failures are logged and dropped.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) {
        if let Err(err) = self.writer.flush() {
            warn!(error = %err, "failed to flush output sink");
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, fragment: &str) {
        if let Err(err) = self.writer.write_all(fragment.as_bytes()) {
            warn!(error = %err, bytes = fragment.len(), "failed to write fragment");
        }
    }
}

/// Selects where a render operation delivers its fragment.
pub enum OutputMode<'a> {
    /// Write the fragment to the sink; the operation returns `None`.
    Echo(&'a mut dyn OutputSink),
    /// Return the fragment; nothing is written.
    Capture,
}

impl<'a> OutputMode<'a> {
    pub fn echo(sink: &'a mut dyn OutputSink) -> Self {
        Self::Echo(sink)
    }

    pub(crate) fn deliver(self, fragment: String) -> Option<String> {
        match self {
            Self::Echo(sink) => {
                sink.emit(&fragment);
                None
            }
            Self::Capture => Some(fragment),
        }
    }
}
