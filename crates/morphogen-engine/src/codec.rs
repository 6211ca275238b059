//! Flat little-endian encoding of a single field.
//!
//! The format has no header: `width * height` IEEE-754 `f32` values in
//! row-major order, 4 bytes each, little-endian. Dimensions travel out of
//! band (the caller knows the grid it asked for). Intended for golden
//! output files in tests.

use std::error::Error;
use std::fmt;

use morphogen_core::{Field, FieldError};

/// Errors from [`decode_field`].
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
    /// Byte length is not `width * height * 4`.
    ByteLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        actual: usize,
    },
    /// The decoded values do not form a valid field.
    Field(FieldError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteLength { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            Self::Field(e) => write!(f, "decoded field invalid: {e}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            Self::ByteLength { .. } => None,
        }
    }
}

impl From<FieldError> for CodecError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

/// Encode `field` as row-major little-endian `f32`s.
pub fn encode_field(field: &Field) -> Vec<u8> {
    let mut out = Vec::with_capacity(field.len() * 4);
    for &v in field.as_slice() {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Decode a field written by [`encode_field`].
///
/// Values go through [`Field::from_row_major`], so NaN or out-of-range
/// data is rejected.
pub fn decode_field(width: u32, height: u32, bytes: &[u8]) -> Result<Field, CodecError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(FieldError::TooLarge { width, height })?;
    if bytes.len() != expected {
        return Err(CodecError::ByteLength {
            expected,
            actual: bytes.len(),
        });
    }
    let data = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok(Field::from_row_major(width, height, data)?)
}
