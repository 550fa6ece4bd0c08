//! One-time cube configuration shared across a program.
//!
//! Most code should build a [`CubeGeometry`] directly and pass it around.
//! [`CubeConfig`] is for firmware that wants a single `static` cube set up
//! from several places: the first `configure` wins and the height may be
//! chosen once, before that.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use super::{CubeGeometry, Topology};
use crate::{Error, Result};

#[derive(Clone, Copy)]
struct ConfigState {
    height: Option<u8>,
    geometry: Option<CubeGeometry>,
}

/// Configure-once cell holding the process-wide [`CubeGeometry`].
///
/// # Example
///
/// ```
/// use cube_kit::geometry::{Topology, config::CubeConfig};
///
/// static CUBE_CONFIG: CubeConfig = CubeConfig::new();
///
/// CUBE_CONFIG.set_height(4)?; // must come before configure
/// let geometry = CUBE_CONFIG.configure(5, Topology::UniformPanel, None)?;
/// assert_eq!((geometry.side(), geometry.height()), (5, 4));
///
/// // Later calls keep the first geometry.
/// let again = CUBE_CONFIG.configure(3, Topology::UniformPanel, Some(9))?;
/// assert_eq!(again, geometry);
/// # Ok::<(), cube_kit::Error>(())
/// ```
pub struct CubeConfig {
    state: Mutex<CriticalSectionRawMutex, Cell<ConfigState>>,
}

impl CubeConfig {
    /// Create an unconfigured cell, usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(ConfigState {
                height: None,
                geometry: None,
            })),
        }
    }

    /// Choose the number of layers. Ignored if a height is already set,
    /// including the default height chosen by [`configure`](Self::configure).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHeight`] if `height` is 0 and no height is set yet.
    pub fn set_height(&self, height: u8) -> Result<()> {
        self.state.lock(|cell| {
            let mut state = cell.get();
            if let Some(current) = state.height {
                warn!(
                    "CubeConfig::set_height: height already {}, ignoring {}",
                    current, height
                );
                return Ok(());
            }
            if height == 0 {
                return Err(Error::InvalidHeight { height });
            }
            state.height = Some(height);
            cell.set(state);
            debug!("CubeConfig::set_height: height set to {}", height);
            Ok(())
        })
    }

    /// Create the geometry if none exists yet, and return it.
    ///
    /// The height is the one given to [`set_height`](Self::set_height) if any,
    /// then `height`, then `side`. Once a geometry exists every call returns it
    /// unchanged and its arguments are ignored.
    ///
    /// # Errors
    ///
    /// While unconfigured, any error from [`CubeGeometry::new`]. A failed call
    /// leaves the cell unconfigured.
    pub fn configure(
        &self,
        side: u8,
        topology: Topology,
        height: Option<u8>,
    ) -> Result<CubeGeometry> {
        self.state.lock(|cell| {
            let mut state = cell.get();
            if let Some(geometry) = state.geometry {
                debug!("CubeConfig::configure: already configured, ignoring side {}", side);
                return Ok(geometry);
            }
            let geometry = CubeGeometry::new(side, state.height.or(height), topology)?;
            state.height = Some(geometry.height());
            state.geometry = Some(geometry);
            cell.set(state);
            info!(
                "CubeConfig::configure: {}x{}x{} cube, {} LEDs",
                geometry.side(),
                geometry.side(),
                geometry.height(),
                geometry.linear_size()
            );
            Ok(geometry)
        })
    }

    /// The configured geometry.
    ///
    /// # Errors
    ///
    /// [`Error::NotConfigured`] before the first successful [`configure`](Self::configure).
    pub fn geometry(&self) -> Result<CubeGeometry> {
        self.state
            .lock(|cell| cell.get().geometry)
            .ok_or(Error::NotConfigured)
    }

    /// Whether [`configure`](Self::configure) has succeeded.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.state.lock(|cell| cell.get().geometry.is_some())
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self::new()
    }
}
