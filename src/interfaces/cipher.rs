use std::io::{self, Read, Write};

const ROTATION: u8 = 128;

/// Decrypting adapter over any byte source.
///
/// Every byte is rotated by 128, which is its own inverse, so the same
/// adapter decrypts an obfuscated ledger and re-obfuscates plaintext.
/// Length, EOF and I/O errors of the inner reader pass through untouched.
pub struct Rot128Reader<R> {
    inner: R,
}

impl<R: Read> Rot128Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Rot128Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for byte in &mut buf[..n] {
            *byte = byte.wrapping_add(ROTATION);
        }
        Ok(n)
    }
}

/// Encrypting converse of [`Rot128Reader`].
pub struct Rot128Writer<W> {
    inner: W,
}

impl<W: Write> Rot128Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Rot128Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let rotated: Vec<u8> = buf.iter().map(|b| b.wrapping_add(ROTATION)).collect();
        self.inner.write(&rotated)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
