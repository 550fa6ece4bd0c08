//! Cube dimensions and wiring topology, with the coordinate mapper (with examples).
//!
//! See [`CubeGeometry`] for the dimensions and [`CubeGeometry::map`] for the
//! `(x, y, z)` to strand-index mapping. [`config::CubeConfig`] offers the
//! "configure once, then use" flow for a process-wide cube.
//!
//! Coordinates: `x` runs left to right, `y` front to back, `z` bottom to top.
//! All three start at `0`.

pub mod config;
pub mod mapping;

use core::ops::RangeInclusive;

use itertools::iproduct;

use crate::{Error, Result};

/// Smallest supported side length.
pub const SIDE_MIN: u8 = 3;

/// Largest supported side length.
pub const SIDE_MAX: u8 = 8;

/// Supported side lengths, inclusive.
pub const SIDE_RANGE: RangeInclusive<u8> = SIDE_MIN..=SIDE_MAX;

/// Side length of a cube whose layers are built from four 4×4 panels.
pub const COMPOSITE_SIDE: u8 = 8;

/// Side value that older cube firmware used to request the 8×8 composite cube.
///
/// Only [`CubeGeometry::from_legacy_side`] interprets it.
pub const LEGACY_COMPOSITE_SIDE: u8 = 9;

/// How each horizontal layer of the cube is wired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topology {
    /// One continuous serpentine panel per layer, any supported side.
    #[default]
    UniformPanel,
    /// An 8×8 layer made of four independently wired 4×4 panels chained together.
    CompositeQuadrant,
}

/// Orientation of a plane of LEDs, named by the two axes it spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal layer; the plane number is `z`.
    Xy,
    /// Vertical slice facing the front; the plane number is `y`.
    Xz,
    /// Vertical slice facing the side; the plane number is `x`.
    Yz,
}

/// Validated dimensions and topology of an LED cube.
///
/// A `CubeGeometry` is a small `Copy` value. Once built it never changes, so it
/// can be handed to the mapper, the frame and the strand driver freely.
///
/// The LED count, [`linear_size`](Self::linear_size), is always `side² × height`.
/// It is also the sentinel index returned for coordinates outside the cube.
///
/// # Example
///
/// ```
/// use cube_kit::geometry::{CubeGeometry, Topology};
///
/// let tower = CubeGeometry::new(4, Some(6), Topology::UniformPanel)?;
/// assert_eq!(tower.linear_size(), 96);
/// assert_eq!(tower.map(0, 0, 0), 0);
/// assert_eq!(tower.map(0, 0, 6), tower.sentinel()); // above the top layer
/// # Ok::<(), cube_kit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubeGeometry {
    side: u8,
    height: u8,
    topology: Topology,
}

impl CubeGeometry {
    /// Validate and build a geometry. `height` defaults to `side`.
    ///
    /// # Errors
    ///
    /// * [`Error::SideOutOfRange`] if `side` is not in [`SIDE_RANGE`].
    /// * [`Error::InvalidHeight`] if `height` is `Some(0)`.
    /// * [`Error::CompositeSide`] if `topology` is [`Topology::CompositeQuadrant`]
    ///   and `side` is not [`COMPOSITE_SIDE`].
    pub const fn new(side: u8, height: Option<u8>, topology: Topology) -> Result<Self> {
        if side < SIDE_MIN || side > SIDE_MAX {
            return Err(Error::SideOutOfRange { side });
        }
        if matches!(topology, Topology::CompositeQuadrant) && side != COMPOSITE_SIDE {
            return Err(Error::CompositeSide { side });
        }
        let height = match height {
            Some(height) => height,
            None => side,
        };
        if height == 0 {
            return Err(Error::InvalidHeight { height });
        }
        Ok(Self {
            side,
            height,
            topology,
        })
    }

    /// Cube of `side × side × side` LEDs wired as one serpentine panel per layer.
    ///
    /// # Errors
    ///
    /// [`Error::SideOutOfRange`] if `side` is not in [`SIDE_RANGE`].
    pub const fn uniform(side: u8) -> Result<Self> {
        Self::new(side, None, Topology::UniformPanel)
    }

    /// 8×8 cube whose layers are built from four 4×4 panels. `height` defaults to 8.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHeight`] if `height` is `Some(0)`.
    pub const fn composite(height: Option<u8>) -> Result<Self> {
        Self::new(COMPOSITE_SIDE, height, Topology::CompositeQuadrant)
    }

    /// Like [`new`](Self::new), but first clamps `side` into [`SIDE_RANGE`]
    /// the way older cube firmware did.
    ///
    /// ```
    /// use cube_kit::geometry::{CubeGeometry, Topology};
    ///
    /// let geometry = CubeGeometry::new_clamped(12, None, Topology::UniformPanel)?;
    /// assert_eq!((geometry.side(), geometry.height()), (8, 8));
    /// # Ok::<(), cube_kit::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new), except that the side is never out of range.
    pub const fn new_clamped(side: u8, height: Option<u8>, topology: Topology) -> Result<Self> {
        Self::new(clamp_side(side), height, topology)
    }

    /// Interpret a side value from older cube firmware, where `9` meant
    /// "8×8 made of 4×4 panels" and every other value meant a uniform cube.
    ///
    /// ```
    /// use cube_kit::geometry::{CubeGeometry, Topology};
    ///
    /// let geometry = CubeGeometry::from_legacy_side(9, None)?;
    /// assert_eq!(geometry.topology(), Topology::CompositeQuadrant);
    /// assert_eq!(geometry.side(), 8);
    /// # Ok::<(), cube_kit::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub const fn from_legacy_side(side: u8, height: Option<u8>) -> Result<Self> {
        if side == LEGACY_COMPOSITE_SIDE {
            Self::composite(height)
        } else {
            Self::new(side, height, Topology::UniformPanel)
        }
    }

    /// LEDs along one horizontal edge.
    #[must_use]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// Number of stacked layers.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Wiring topology of each layer.
    #[must_use]
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// LEDs in one horizontal layer (`side²`).
    #[must_use]
    pub const fn layer_len(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Total LED count (`side² × height`).
    #[must_use]
    pub const fn linear_size(&self) -> usize {
        self.layer_len() * self.height as usize
    }

    /// Index returned for coordinates outside the cube. Equal to [`linear_size`](Self::linear_size).
    #[must_use]
    pub const fn sentinel(&self) -> usize {
        self.linear_size()
    }

    /// Whether `(x, y, z)` lies inside the cube.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        let side = self.side as i32;
        x >= 0 && x < side && y >= 0 && y < side && z >= 0 && z < self.height as i32
    }

    /// Strand indices of one plane. The first in-plane axis (`x`, or `y` for
    /// [`Axis::Yz`]) varies slowest.
    ///
    /// A plane outside the cube yields only sentinel indices.
    ///
    /// ```
    /// use cube_kit::geometry::{Axis, CubeGeometry};
    ///
    /// let geometry = CubeGeometry::uniform(3)?;
    /// let bottom: Vec<usize> = geometry.plane_indices(0, Axis::Xy).collect();
    /// assert_eq!(bottom, [0, 5, 6, 1, 4, 7, 2, 3, 8]);
    /// # Ok::<(), cube_kit::Error>(())
    /// ```
    pub fn plane_indices(self, plane: i32, axis: Axis) -> impl Iterator<Item = usize> {
        let side = i32::from(self.side);
        let depth = match axis {
            Axis::Xy => side,
            Axis::Xz | Axis::Yz => i32::from(self.height),
        };
        iproduct!(0..side, 0..depth).map(move |(u, v)| match axis {
            Axis::Yz => self.map(plane, u, v),
            Axis::Xz => self.map(u, plane, v),
            Axis::Xy => self.map(u, v, plane),
        })
    }

    /// Inverse of [`map`](Self::map): the `(x, y, z)` wired to strand `index`.
    ///
    /// Returns `None` for the sentinel and anything past it.
    #[must_use]
    pub fn coordinates(&self, index: usize) -> Option<(u8, u8, u8)> {
        if index >= self.linear_size() {
            return None;
        }
        iproduct!(0..self.side, 0..self.side, 0..self.height).find(|&(x, y, z)| {
            self.map(i32::from(x), i32::from(y), i32::from(z)) == index
        })
    }
}

/// Clamp a requested side length into [`SIDE_RANGE`].
#[must_use]
pub const fn clamp_side(side: u8) -> u8 {
    if side < SIDE_MIN {
        SIDE_MIN
    } else if side > SIDE_MAX {
        SIDE_MAX
    } else {
        side
    }
}
