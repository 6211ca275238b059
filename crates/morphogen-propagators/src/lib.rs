//! Numerical kernels for the Morphogen reaction-diffusion engine.
//!
//! - [`laplacian`]: 9-point weighted stencil on a toroidal [`Field`](morphogen_core::Field)
//! - [`GrayScott`]: explicit Euler stepper for the Gray-Scott kinetics
//!
//! Both are stateless with respect to the fields they touch: they borrow
//! inputs for one call and never retain references.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod gray_scott;
pub mod laplacian;

pub use gray_scott::GrayScott;
pub use laplacian::{laplacian, stencil_sum};
