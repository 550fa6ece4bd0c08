/// Errors reported by `cube-kit`.
///
/// Out-of-range coordinates are not errors; they map to the sentinel index
/// (see [`CubeGeometry::map`](crate::geometry::CubeGeometry::map)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The side length is outside [`SIDE_RANGE`](crate::geometry::SIDE_RANGE).
    #[display("cube side {side} is outside the supported range 3..=8")]
    SideOutOfRange {
        /// Requested side length.
        side: u8,
    },

    /// A cube must have at least one layer.
    #[display("cube height {height} is invalid; it must be at least 1")]
    InvalidHeight {
        /// Requested height.
        height: u8,
    },

    /// The composite-quadrant topology only exists for an 8×8 layer.
    #[display("composite-quadrant topology requires side 8, got {side}")]
    CompositeSide {
        /// Requested side length.
        side: u8,
    },

    /// The geometry was requested before the cube was configured.
    #[display("cube geometry has not been configured")]
    NotConfigured,

    /// The frame buffer length does not equal the cube's LED count.
    #[display("frame holds {actual} LEDs but the cube has {expected}")]
    FrameLength {
        /// LED count of the geometry.
        expected: usize,
        /// Length of the frame buffer.
        actual: usize,
    },

    /// The LED strand driver rejected a write.
    #[display("LED strand write failed")]
    StrandWrite,
}

/// Result type used throughout `cube-kit`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
