//! Error types for field construction and parameter validation.
//!
//! Both are construction-time errors: once a field or parameter set
//! exists, every operation on it is infallible.

use std::error::Error;
use std::fmt;

/// Errors detected by [`SimulationParameters::validate()`](crate::SimulationParameters::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A grid dimension is zero.
    InvalidDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A grid dimension exceeds [`Field::MAX_DIM`](crate::Field::MAX_DIM).
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// A rate or time increment is zero, negative, NaN, or infinite.
    NonPositive {
        /// Which parameter (`"du"`, `"dv"`, `"feed"`, `"kill"`, `"dt"`).
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// `substeps_per_tick` is zero.
    ZeroSubsteps,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be at least 1, got {value}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "grid {width}x{height} overflows the cell count")
            }
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be finite and strictly positive, got {value}")
            }
            Self::ZeroSubsteps => write!(f, "substeps_per_tick must be at least 1"),
        }
    }
}

impl Error for ParamError {}

/// Errors from building a [`Field`](crate::Field) or [`FieldPair`](crate::FieldPair).
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// Width or height is zero.
    EmptyField,
    /// A dimension exceeds [`Field::MAX_DIM`](crate::Field::MAX_DIM) or the
    /// cell count overflows.
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A flat buffer does not hold exactly `width * height` values.
    LengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A value is NaN or infinite.
    NonFinite {
        /// Row-major index of the first offending cell.
        index: usize,
    },
    /// A value lies outside `[0, 1]`.
    OutOfRange {
        /// Row-major index of the first offending cell.
        index: usize,
        /// The offending value.
        value: f32,
    },
    /// The two species of a pair have different dimensions.
    ShapeMismatch {
        /// `(width, height)` of U.
        u: (u32, u32),
        /// `(width, height)` of V.
        v: (u32, u32),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field must have at least one cell"),
            Self::TooLarge { width, height } => {
                write!(f, "field {width}x{height} is too large")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::NonFinite { index } => write!(f, "non-finite value at cell {index}"),
            Self::OutOfRange { index, value } => {
                write!(f, "value {value} at cell {index} outside [0, 1]")
            }
            Self::ShapeMismatch { u, v } => write!(
                f,
                "species shapes differ: U is {}x{}, V is {}x{}",
                u.0, u.1, v.0, v.1
            ),
        }
    }
}

impl Error for FieldError {}
