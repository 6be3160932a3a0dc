use std::fmt;
use std::fs::File;
use std::io::Read;

const RAND_SOURCE: &str = "/dev/urandom";

#[derive(Debug)]
pub enum EntropyError {
    Open { path: String, source: std::io::Error },
    Read { path: String, source: std::io::Error },
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::Open { path, source } => write!(f, "{}: {}", path, source),
            EntropyError::Read { path, source } => write!(f, "{}: read failed: {}", path, source),
        }
    }
}

/// Entropy source backed by the kernel CSPRNG.
///
/// Every draw reads fresh bytes from the device; nothing is pooled or
/// carried over between calls. Any open, read, or short-read failure is
/// surfaced as an `EntropyError` and the caller is expected to abort --
/// there is no fallback source.
#[derive(Debug)]
pub struct Entropy {
    dev: File,
    path: String,
}

impl Entropy {
    pub fn open() -> Result<Self, EntropyError> {
        Self::open_path(RAND_SOURCE)
    }

    pub fn open_path(path: &str) -> Result<Self, EntropyError> {
        let dev = File::open(path).map_err(|source| EntropyError::Open {
            path: path.to_string(),
            source,
        })?;
        Ok(Entropy {
            dev,
            path: path.to_string(),
        })
    }

    /// Fresh 32-bit read from the entropy device.
    pub fn next_u32(&mut self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];
        self.dev
            .read_exact(&mut buf)
            .map_err(|source| EntropyError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(u32::from_ne_bytes(buf))
    }

    /// Uniform draw over [0, n) without modulo bias.
    ///
    /// Raw 32-bit draws below `2^32 mod n` are rejected so that the
    /// remaining range is an exact multiple of n, then reduced. Rejection
    /// discards at most half the draws for any n, so the loop terminates
    /// quickly in practice.
    pub fn uniform(&mut self, n: u32) -> Result<u32, EntropyError> {
        assert!(n > 0, "uniform: n must be positive");
        if n < 2 {
            return Ok(0);
        }

        // 2^32 mod n, computed in u32 arithmetic
        let min = n.wrapping_neg() % n;

        loop {
            let r = self.next_u32()?;
            if r >= min {
                return Ok(r % n);
            }
        }
    }
}
