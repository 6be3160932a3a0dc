//! Zeroizing buffered writer for password output.

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_CAP: usize = 4096;

/// Buffered writer that scrubs its buffer after every flush and on drop,
/// so password bytes do not linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        SecureBufWriter {
            inner,
            buf: Vec::with_capacity(BUF_CAP),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let result = self.inner.write_all(&self.buf);
            self.buf.zeroize();
            result?;
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAP {
            self.flush_buf()?;
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}
