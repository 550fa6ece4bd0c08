//! A device abstraction for an LED cube driven over one serial strand.
//!
//! See [`Cube`] for usage. The strand itself is any [`SmartLedsWrite`] driver
//! (WS2812, APA102, ...) that accepts [`RGB8`] colors.
//!
//! # Example
//!
//! Light the bottom layer of a 3×3×3 cube red, then a vertical slice blue,
//! sending a single frame to the strand.
//!
//! ```
//! use core::convert::Infallible;
//! use cube_kit::{
//!     cube::{Cube, UpdateMode},
//!     frame::colors,
//!     geometry::{Axis, CubeGeometry},
//! };
//! use smart_leds::{RGB8, SmartLedsWrite};
//!
//! # struct Ws2812;
//! # impl SmartLedsWrite for Ws2812 {
//! #     type Error = Infallible;
//! #     type Color = RGB8;
//! #     fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
//! #     where
//! #         T: IntoIterator<Item = I>,
//! #         I: Into<Self::Color>,
//! #     {
//! #         Ok(())
//! #     }
//! # }
//! # fn example(strand: Ws2812) -> cube_kit::Result<()> {
//! let mut cube = Cube::<_, 27>::new(CubeGeometry::uniform(3)?, strand)?;
//! cube.set_update_mode(UpdateMode::Manual);
//!
//! cube.set_plane(0, Axis::Xy, colors::RED)?;
//! cube.set_plane(2, Axis::Yz, colors::BLUE)?;
//! cube.set_xyz(9, 9, 9, colors::WHITE)?; // off the cube: discarded
//! cube.show()?;
//! # Ok(())
//! # }
//! # example(Ws2812).unwrap();
//! ```

use smart_leds::{RGB8, SmartLedsWrite, colors};

use crate::{
    Error, Result,
    frame::CubeFrame,
    geometry::{Axis, CubeGeometry},
};

/// When pixel changes reach the strand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateMode {
    /// Changes are buffered until [`Cube::show`].
    Manual,
    /// Every pixel-changing call ends by writing the frame to the strand.
    #[default]
    Auto,
}

/// An LED cube: geometry, a frame of `N` LEDs and the strand driver.
///
/// `N` must equal the geometry's [`linear_size`](CubeGeometry::linear_size).
pub struct Cube<S, const N: usize> {
    geometry: CubeGeometry,
    frame: CubeFrame<N>,
    strand: S,
    update_mode: UpdateMode,
}

impl<S, const N: usize> Cube<S, N>
where
    S: SmartLedsWrite,
    S::Color: From<RGB8>,
{
    /// Create a dark cube in [`UpdateMode::Auto`]. Nothing is written to the strand yet.
    ///
    /// # Errors
    ///
    /// [`Error::FrameLength`] if `N` is not `geometry.linear_size()`.
    pub fn new(geometry: CubeGeometry, strand: S) -> Result<Self> {
        if geometry.linear_size() != N {
            return Err(Error::FrameLength {
                expected: geometry.linear_size(),
                actual: N,
            });
        }
        info!(
            "Cube::new: {}x{}x{} cube on a {}-LED strand",
            geometry.side(),
            geometry.side(),
            geometry.height(),
            N
        );
        Ok(Self {
            geometry,
            frame: CubeFrame::new(),
            strand,
            update_mode: UpdateMode::default(),
        })
    }

    /// The cube's geometry.
    #[must_use]
    pub const fn geometry(&self) -> CubeGeometry {
        self.geometry
    }

    /// The buffered frame, which may differ from the strand in [`UpdateMode::Manual`].
    #[must_use]
    pub const fn frame(&self) -> &CubeFrame<N> {
        &self.frame
    }

    /// The strand driver.
    #[must_use]
    pub const fn strand(&self) -> &S {
        &self.strand
    }

    /// Give back the strand driver.
    #[must_use]
    pub fn into_strand(self) -> S {
        self.strand
    }

    /// Buffered color of the LED at strand index `id`.
    #[must_use]
    pub fn pixel(&self, id: usize) -> Option<RGB8> {
        self.frame.get(id)
    }

    /// Strand index of `(x, y, z)`, or the sentinel `N` off the cube.
    #[must_use]
    pub const fn map_pixel(&self, x: i32, y: i32, z: i32) -> usize {
        self.geometry.map(x, y, z)
    }

    /// Current update mode.
    #[must_use]
    pub const fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Choose between automatic and manual [`show`](Self::show).
    pub fn set_update_mode(&mut self, update_mode: UpdateMode) {
        debug!("Cube::set_update_mode: {}", update_mode);
        self.update_mode = update_mode;
    }

    /// Set every LED to `color`.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if an automatic update fails.
    pub fn set_all(&mut self, color: RGB8) -> Result<()> {
        self.frame.fill(color);
        self.refresh()
    }

    /// Turn every LED off.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if an automatic update fails.
    pub fn clear(&mut self) -> Result<()> {
        self.set_all(colors::BLACK)
    }

    /// Set the LED at strand index `id`. Indices at or past `N` are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if an automatic update fails.
    pub fn set_pixel(&mut self, id: usize, color: RGB8) -> Result<()> {
        if !self.frame.set(id, color) {
            debug!("Cube::set_pixel: index {} is off the strand", id);
        }
        self.refresh()
    }

    /// Set the LED at `(x, y, z)`. Coordinates off the cube are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if an automatic update fails.
    pub fn set_xyz(&mut self, x: i32, y: i32, z: i32, color: RGB8) -> Result<()> {
        self.set_pixel(self.geometry.map(x, y, z), color)
    }

    /// Set every LED of one plane. A plane off the cube changes nothing.
    ///
    /// See [`CubeGeometry::plane_indices`] for the LEDs touched.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if an automatic update fails.
    pub fn set_plane(&mut self, plane: i32, axis: Axis, color: RGB8) -> Result<()> {
        for index in self.geometry.plane_indices(plane, axis) {
            self.frame.set(index, color);
        }
        self.refresh()
    }

    /// Write the buffered frame to the strand.
    ///
    /// # Errors
    ///
    /// [`Error::StrandWrite`] if the driver rejects the write.
    pub fn show(&mut self) -> Result<()> {
        self.strand
            .write(self.frame.iter().copied())
            .map_err(|_| {
                warn!("Cube::show: strand write failed");
                Error::StrandWrite
            })
    }

    fn refresh(&mut self) -> Result<()> {
        match self.update_mode {
            UpdateMode::Auto => self.show(),
            UpdateMode::Manual => Ok(()),
        }
    }
}
