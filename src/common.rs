// Licensed under the Apache-2.0 license

//! Crate-wide logging capability.
//!
//! Drivers in this crate take a [`Logger`] type parameter defaulting to
//! [`NoOpLogger`], so logging costs nothing unless a sink is wired in.
//! [`WriteLogger`] adapts any [`embedded_io::Write`] target (typically a
//! UART) into a line-oriented log sink.

/// Sink for driver diagnostics.
///
/// Implementations must not panic; a logger that cannot deliver a message
/// should drop it.
pub trait Logger {
    /// Log one pre-formatted message.
    fn log(&mut self, args: core::fmt::Arguments<'_>);
}

/// Logger that discards every message. The default for all drivers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&mut self, _args: core::fmt::Arguments<'_>) {}
}

/// Logger writing one `\r\n`-terminated line per message to an
/// [`embedded_io::Write`] sink.
#[derive(Debug)]
pub struct WriteLogger<W: embedded_io::Write> {
    sink: W,
}

impl<W: embedded_io::Write> WriteLogger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Consume the logger and return the underlying sink.
    pub fn release(self) -> W {
        self.sink
    }
}

impl<W: embedded_io::Write> Logger for WriteLogger<W> {
    fn log(&mut self, args: core::fmt::Arguments<'_>) {
        // Sink failures have nowhere to be reported; drop the message.
        let _ = self.sink.write_fmt(args);
        let _ = self.sink.write_all(b"\r\n");
    }
}
