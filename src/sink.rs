use crate::sync::Mutex;
use std::fmt;
use std::io::{Result, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use termcolor::ColorChoice::Auto;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Shared append-only output stream.
///
/// All demonstration threads write through one `Sink`. Its internal lock is
/// held only around each individual write, so single characters are never
/// torn, but nothing here prevents two threads' writes from interleaving —
/// block ordering is the job of a [`Signal`](crate::Signal), not the sink.
///
/// Use the standard library `write!` or `writeln!` macros for writing to a
/// sink. Additionally this type provides some methods for setting the color
/// of subsequent output.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<dyn WriteColor + Send>>,
}

#[cfg(test)]
struct _Test
where
    Sink: Send + Sync;

impl Sink {
    /// Makes a sink over any colored writer, e.g. a capture buffer in tests.
    pub fn new(writer: impl WriteColor + Send + 'static) -> Self {
        Sink {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Makes a sink that writes to stdout.
    pub fn stdout() -> Self {
        Self::new(StandardStream::stdout(Auto))
    }

    /// Makes a sink that writes to stderr.
    pub fn stderr() -> Self {
        Self::new(StandardStream::stderr(Auto))
    }

    /// Set output to appear in bold uncolored.
    pub fn bold(&self) {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        let _ = self.apply(|w| w.set_color(&spec));
    }

    /// Set output to appear in color (not bold).
    pub fn color(&self, color: Color) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        let _ = self.apply(|w| w.set_color(&spec));
    }

    /// Set output to non-bold uncolored.
    pub fn reset_color(&self) {
        let _ = self.apply(|w| w.reset());
    }

    /// Writes `text` one character at a time, flushing after each character
    /// and pausing for `delay` between them.
    ///
    /// The sink's lock is released during every pause, which is what lets a
    /// second uncoordinated thread slip its own characters in between — the
    /// effect the unsynchronized demonstration exists to show.
    pub fn spell_out(&self, text: &str, delay: Duration) {
        let mut utf8 = [0u8; 4];
        for ch in text.chars() {
            let bytes = ch.encode_utf8(&mut utf8).as_bytes();
            let _ = self.apply(|w| {
                w.write_all(bytes)?;
                w.flush()
            });
            thread::sleep(delay);
        }
    }

    #[doc(hidden)]
    pub fn write_fmt(&self, args: fmt::Arguments) {
        let _ = self.apply(|w| w.write_fmt(args));
    }

    fn apply<T>(&self, f: impl FnOnce(&mut dyn WriteColor) -> T) -> T {
        f(&mut *self.inner.lock())
    }
}

impl Write for Sink {
    fn write(&mut self, b: &[u8]) -> Result<usize> {
        self.apply(|w| w.write(b))
    }

    fn flush(&mut self) -> Result<()> {
        self.apply(|w| w.flush())
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.apply(|w| w.write_all(buf))
    }

    fn write_fmt(&mut self, args: fmt::Arguments) -> Result<()> {
        self.apply(|w| w.write_fmt(args))
    }
}
