//! Password generation.

use std::fmt;
use std::io::{self, Write};

use super::charset::Selection;
use crate::rand::{Entropy, EntropyError};

/// Minimum password length.
pub const MIN_LEN: usize = 20;
/// Maximum password length.
pub const MAX_LEN: usize = 1024;

#[derive(Debug)]
pub enum RequestError {
    EmptySelection,
    LengthOutOfRange(usize),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EmptySelection => write!(f, "no character classes selected"),
            RequestError::LengthOutOfRange(n) => {
                write!(f, "length {} not in [{}, {}]", n, MIN_LEN, MAX_LEN)
            }
        }
    }
}

#[derive(Debug)]
pub enum GenerateError {
    Entropy(EntropyError),
    Io(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Entropy(e) => write!(f, "{}", e),
            GenerateError::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl From<EntropyError> for GenerateError {
    fn from(e: EntropyError) -> Self {
        GenerateError::Entropy(e)
    }
}

impl From<io::Error> for GenerateError {
    fn from(e: io::Error) -> Self {
        GenerateError::Io(e)
    }
}

/// A validated request: non-empty selection, length within [MIN_LEN, MAX_LEN].
pub struct GenerationRequest {
    selection: Selection,
    length: usize,
}

impl GenerationRequest {
    /// Validate a selection and optional length (`None` defaults to
    /// `MIN_LEN`). The single length-validation point for the whole program.
    pub fn new(selection: Selection, length: Option<usize>) -> Result<Self, RequestError> {
        if selection.is_empty() {
            return Err(RequestError::EmptySelection);
        }
        let length = length.unwrap_or(MIN_LEN);
        if !(MIN_LEN..=MAX_LEN).contains(&length) {
            return Err(RequestError::LengthOutOfRange(length));
        }
        Ok(GenerationRequest { selection, length })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Stream one password to `out`, character by character.
///
/// Each position picks a class uniformly (skipping the draw when only one
/// class is selected), then a character uniformly from that class's span.
/// Entropy failure aborts the rest of the password; bytes already flushed
/// stay flushed.
pub fn generate<W: Write>(
    request: &GenerationRequest,
    entropy: &mut Entropy,
    out: &mut W,
) -> Result<(), GenerateError> {
    let selection = request.selection();

    for _ in 0..request.length() {
        let class = if selection.len() == 1 {
            selection.get(0)
        } else {
            selection.get(entropy.uniform(selection.len() as u32)? as usize)
        };
        let byte = class.start() + entropy.uniform(class.size())? as u8;
        out.write_all(&[byte])?;
    }

    Ok(())
}
