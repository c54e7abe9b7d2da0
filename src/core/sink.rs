//! Output destinations for encoded records

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// A lock-protected writer shared by every clone of the handle.
///
/// Each record is written and flushed under the lock, so concurrent records
/// never interleave within a line.
#[derive(Clone)]
pub struct Sink {
    name: &'static str,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self::named("writer", writer)
    }

    pub fn stdout() -> Self {
        Self::named("stdout", Box::new(io::stdout()))
    }

    fn named(name: &'static str, writer: Box<dyn Write + Send>) -> Self {
        Self {
            name,
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Write one encoded record followed by a newline, then flush
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        writer
            .write_all(buf.as_bytes())
            .map_err(|e| LoggerError::io_operation(format!("writing to {}", self.name), e))?;
        writer
            .flush()
            .map_err(|e| LoggerError::io_operation(format!("flushing {}", self.name), e))?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

/// In-memory writer whose contents can be read back through any clone.
///
/// # Example
///
/// ```
/// use fawa::core::SharedBuffer;
/// use std::io::Write;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
