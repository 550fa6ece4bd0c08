//! Coordinate-to-strand mapping for serpentine-wired cubes.
//!
//! A cube is a stack of horizontal layers wired as one strand. Within a layer the
//! strand snakes along rows (odd rows run backward). Odd layers snake along
//! columns instead, in the mirrored direction, so the strand climbs to the next
//! layer without a long return wire.
//!
//! ```text
//! 3×3 cube, layer z = 0 (y down, x right):    layer z = 1:
//!   LED0  LED1  LED2                            LED17 LED12 LED11
//!   LED5  LED4  LED3                            LED16 LED13 LED10
//!   LED6  LED7  LED8                            LED15 LED14 LED9
//! ```

use super::{CubeGeometry, Topology};

/// Side length of one panel in a composite-quadrant layer.
pub const QUADRANT_SIDE: usize = 4;

/// LEDs in one layer of one quadrant panel.
const QUADRANT_LAYER_LEN: usize = QUADRANT_SIDE * QUADRANT_SIDE;

/// Strand index of `(x, y, z)` in a stack of uniform serpentine panels of edge `side`.
///
/// `x` and `y` must be less than `side`. The layer count does not enter the formula.
///
/// ```
/// use cube_kit::geometry::mapping::serpentine_index;
///
/// assert_eq!(serpentine_index(0, 1, 0, 3), 5); // row 1 runs right to left
/// assert_eq!(serpentine_index(0, 0, 1, 3), 17); // layer 1 starts at the far corner
/// ```
#[must_use]
pub const fn serpentine_index(x: usize, y: usize, z: usize, side: usize) -> usize {
    debug_assert!(x < side && y < side, "coordinate outside panel");
    let offset = if z % 2 == 0 {
        if y % 2 == 0 {
            y * side + x
        } else {
            y * side + (side - 1 - x)
        }
    } else {
        // Even-sided layers end on the back row, so the column walk is mirrored front to back.
        let y = if side % 2 == 0 { side - 1 - y } else { y };
        if x % 2 == 0 {
            side * (side - x) - 1 - y
        } else {
            (side - 1 - x) * side + y
        }
    };
    z * side * side + offset
}

/// Strand index of `(x, y, z)` in an 8×8 cube whose layers are four 4×4 panels.
///
/// Each quadrant is a column of 4×4 panels wired as its own serpentine stack of
/// `16 × height` LEDs. The columns are spliced back-right, front-right,
/// front-left, back-left, and the front-right and back-left columns are
/// traversed in reverse. For `height == 8` this gives the bases 255, 256 and 511.
///
/// `x` and `y` must be less than 8.
///
/// ```
/// use cube_kit::geometry::mapping::composite_index;
///
/// assert_eq!(composite_index(3, 3, 0, 8), 256);
/// assert_eq!(composite_index(7, 3, 0, 8), 243);
/// assert_eq!(composite_index(4, 4, 0, 8), 0);
/// ```
#[must_use]
pub const fn composite_index(x: usize, y: usize, z: usize, height: usize) -> usize {
    let column_len = QUADRANT_LAYER_LEN * height;
    let even_layer = z % 2 == 0;
    match (x < QUADRANT_SIDE, y < QUADRANT_SIDE) {
        // front left
        (true, true) => 2 * column_len + serpentine_index(3 - x, 3 - y, z, QUADRANT_SIDE),
        // front right
        (false, true) => {
            let local = if even_layer {
                serpentine_index(y, x - 4, z, QUADRANT_SIDE)
            } else {
                serpentine_index(3 - y, 7 - x, z, QUADRANT_SIDE)
            };
            2 * column_len - 1 - local
        }
        // back left
        (true, false) => {
            let local = if even_layer {
                serpentine_index(7 - y, 3 - x, z, QUADRANT_SIDE)
            } else {
                serpentine_index(y - 4, x, z, QUADRANT_SIDE)
            };
            4 * column_len - 1 - local
        }
        // back right
        (false, false) => serpentine_index(x - 4, y - 4, z, QUADRANT_SIDE),
    }
}

impl CubeGeometry {
    /// Strand index of the LED at `(x, y, z)`.
    ///
    /// Coordinates outside the cube return [`sentinel`](Self::sentinel) rather
    /// than failing, so plane and line loops need no bounds checks. The strand
    /// frame discards writes to the sentinel.
    ///
    /// ```
    /// use cube_kit::geometry::CubeGeometry;
    ///
    /// let cube = CubeGeometry::uniform(3)?;
    /// assert_eq!(cube.map(0, 0, 0), 0);
    /// assert_eq!(cube.map(2, 0, 0), 2);
    /// assert_eq!(cube.map(0, 1, 0), 5);
    /// assert_eq!(cube.map(-1, 0, 0), 27);
    ///
    /// let composite = CubeGeometry::composite(None)?;
    /// assert_eq!(composite.map(3, 3, 0), 256);
    /// assert_eq!(composite.map(8, 0, 0), 512);
    /// # Ok::<(), cube_kit::Error>(())
    /// ```
    #[must_use]
    pub const fn map(&self, x: i32, y: i32, z: i32) -> usize {
        if !self.contains(x, y, z) {
            return self.sentinel();
        }
        let (x, y, z) = (
            x.unsigned_abs() as usize,
            y.unsigned_abs() as usize,
            z.unsigned_abs() as usize,
        );
        match self.topology() {
            Topology::UniformPanel => serpentine_index(x, y, z, self.side() as usize),
            Topology::CompositeQuadrant => composite_index(x, y, z, self.height() as usize),
        }
    }
}
