//! Strand buffer for a whole cube, with a discarded slot for off-cube writes.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// One color per LED, in strand order.
///
/// Index `N` is the sentinel that [`CubeGeometry::map`](crate::geometry::CubeGeometry::map)
/// returns for coordinates outside the cube. [`set`](Self::set) silently drops
/// writes there (and anywhere past it), so callers never need bounds checks.
///
/// ```
/// use cube_kit::frame::{CubeFrame, colors};
///
/// let mut frame = CubeFrame::<27>::new();
/// assert!(frame.set(26, colors::RED));
/// assert!(!frame.set(27, colors::RED)); // sentinel: discarded
/// assert_eq!(frame.get(26), Some(colors::RED));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeFrame<const N: usize>(pub [RGB8; N]);

impl<const N: usize> CubeFrame<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }

    /// Set the LED at strand `index`. Returns `false` when the write was discarded.
    pub fn set(&mut self, index: usize, color: RGB8) -> bool {
        self.0.get_mut(index).map(|led| *led = color).is_some()
    }

    /// Color of the LED at strand `index`, or `None` past the end of the strand.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.0.get(index).copied()
    }
}

impl<const N: usize> Deref for CubeFrame<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for CubeFrame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[RGB8; N]> for CubeFrame<N> {
    fn from(array: [RGB8; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<CubeFrame<N>> for [RGB8; N] {
    fn from(frame: CubeFrame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for CubeFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}
