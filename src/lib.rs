//! Address the LEDs of a hand-built LED cube by `(x, y, z)`.
//!
//! An LED cube is a stack of square panels wired as one serial strand, so the
//! driver only knows a linear index. This crate maps cube coordinates onto that
//! index for the two wirings used when cubes are built from LED strip:
//!
//! - [`Topology::UniformPanel`](geometry::Topology::UniformPanel): each layer is one
//!   serpentine panel (3×3 up to 8×8), layers alternating direction.
//! - [`Topology::CompositeQuadrant`](geometry::Topology::CompositeQuadrant): each
//!   8×8 layer is four 4×4 panels chained together.
//!
//! Start with [`geometry::CubeGeometry`], then drive a strand with [`cube::Cube`].
//!
//! # Glossary
//!
//! - **Strand:** the serial chain of addressable LEDs, indexed from 0.
//! - **Serpentine wiring:** consecutive rows (and layers) alternate direction
//!   because the strip snakes back and forth.
//! - **Sentinel index:** `side² × height`, one past the last LED. Returned for
//!   coordinates off the cube; writes to it are discarded.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod cube;
mod error;
pub mod frame;
pub mod geometry;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
