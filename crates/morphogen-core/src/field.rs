//! Toroidal concentration grids: [`Field`] and [`FieldPair`].
//!
//! A [`Field`] stores one species' concentrations in row-major order.
//! Every coordinate-taking accessor wraps its arguments modulo the grid
//! dimensions, so the domain is topologically a torus and no coordinate
//! is ever out of bounds.

use crate::error::FieldError;

/// Clamp a concentration to `[0, 1]`.
///
/// Evaluated as `min(1, max(0, v))`, so a NaN input collapses to `0.0`.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.max(0.0).min(1.0)
}

/// Wrap a signed coordinate onto `[0, len)`.
///
/// `len` must be non-zero; [`Field`] construction guarantees this for
/// every dimension it hands out.
#[inline]
pub fn wrap_axis(val: i64, len: u32) -> usize {
    let n = i64::from(len);
    if (0..n).contains(&val) {
        return val as usize;
    }
    val.rem_euclid(n) as usize
}

/// A dense `width x height` grid of `f32` concentrations with periodic
/// (toroidal) addressing.
///
/// Dimensions are fixed for the lifetime of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Field {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a field with every cell set to `value`.
    ///
    /// Returns `Err(FieldError::EmptyField)` if either dimension is 0 and
    /// `Err(FieldError::TooLarge)` if a dimension exceeds [`Self::MAX_DIM`]
    /// or the cell count overflows `usize`.
    pub fn filled(width: u32, height: u32, value: f32) -> Result<Self, FieldError> {
        let len = Self::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Rebuild a field from a flat row-major buffer.
    ///
    /// Used to load golden outputs and caller-supplied initial states. The
    /// buffer must hold exactly `width * height` finite values in `[0, 1]`.
    pub fn from_row_major(width: u32, height: u32, data: Vec<f32>) -> Result<Self, FieldError> {
        let expected = Self::cell_count(width, height)?;
        if data.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        let field = Self {
            width,
            height,
            data,
        };
        field.validate_bounded()?;
        Ok(field)
    }

    /// Check that every value is finite and inside `[0, 1]`.
    ///
    /// Reports the first offending cell in row-major order.
    pub fn validate_bounded(&self) -> Result<(), FieldError> {
        for (index, &value) in self.data.iter().enumerate() {
            if !value.is_finite() {
                return Err(FieldError::NonFinite { index });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(FieldError::OutOfRange { index, value });
            }
        }
        Ok(())
    }

    fn cell_count(width: u32, height: u32) -> Result<usize, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyField);
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(FieldError::TooLarge { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(FieldError::TooLarge { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major index of the (wrapped) coordinate `(x, y)`.
    #[inline]
    pub fn index(&self, x: i64, y: i64) -> usize {
        wrap_axis(y, self.height) * self.width as usize + wrap_axis(x, self.width)
    }

    /// Read the cell at `(x, y)`, wrapping both coordinates.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`, wrapping both coordinates.
    ///
    /// Touches exactly one cell.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, value: f32) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Row `y` (wrapped) as a slice of `width` values.
    pub fn row(&self, y: i64) -> &[f32] {
        let start = wrap_axis(y, self.height) * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major access for whole-grid writers such as the stepper.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape(&self, other: &Field) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// The two reacting species `(U, V)`, always of identical dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPair {
    u: Field,
    v: Field,
}

impl FieldPair {
    /// Pair two fields, rejecting mismatched shapes.
    pub fn new(u: Field, v: Field) -> Result<Self, FieldError> {
        if !u.same_shape(&v) {
            return Err(FieldError::ShapeMismatch {
                u: (u.width, u.height),
                v: (v.width, v.height),
            });
        }
        Ok(Self { u, v })
    }

    /// The steady background state: `U = 1` and `V = 0` everywhere.
    pub fn background(width: u32, height: u32) -> Result<Self, FieldError> {
        Ok(Self {
            u: Field::filled(width, height, 1.0)?,
            v: Field::filled(width, height, 0.0)?,
        })
    }

    /// Reset both species to the background state.
    pub fn reset_background(&mut self) {
        self.u.fill(1.0);
        self.v.fill(0.0);
    }

    /// Species U.
    pub fn u(&self) -> &Field {
        &self.u
    }

    /// Species V.
    pub fn v(&self) -> &Field {
        &self.v
    }

    /// Both species, mutably.
    pub fn split_mut(&mut self) -> (&mut Field, &mut Field) {
        (&mut self.u, &mut self.v)
    }

    /// Grid width shared by both species.
    pub fn width(&self) -> u32 {
        self.u.width
    }

    /// Grid height shared by both species.
    pub fn height(&self) -> u32 {
        self.u.height
    }

    /// Check both species with [`Field::validate_bounded`], U first.
    pub fn validate_bounded(&self) -> Result<(), FieldError> {
        self.u.validate_bounded()?;
        self.v.validate_bounded()
    }

    /// Whether every value of both species lies in `[0, 1]`.
    pub fn is_bounded(&self) -> bool {
        self.u
            .as_slice()
            .iter()
            .chain(self.v.as_slice())
            .all(|v| (0.0..=1.0).contains(v))
    }
}
