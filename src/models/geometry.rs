//! Disk geometry model.

use serde::{Deserialize, Serialize};

use super::Track;

/// Conventional disk size used when none is given (tracks `0..=199`).
pub const DEFAULT_DISK_SIZE: u32 = 200;

/// Shape of the simulated disk surface.
///
/// Valid track positions are `0..size`. The innermost boundary is track `0`
/// and the outermost is [`max_track`](Self::max_track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskGeometry {
    /// Number of addressable tracks.
    pub size: u32,
}

impl DiskGeometry {
    /// Creates a geometry with the given number of tracks.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Lowest addressable track (always 0).
    #[inline]
    pub fn min_track(&self) -> Track {
        0
    }

    /// Highest addressable track (`size - 1`).
    ///
    /// Saturates to 0 for an empty geometry; validation rejects that case
    /// before any policy runs.
    #[inline]
    pub fn max_track(&self) -> Track {
        self.size.saturating_sub(1)
    }

    /// Whether `track` lies on this disk.
    #[inline]
    pub fn contains(&self, track: Track) -> bool {
        track < self.size
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_DISK_SIZE)
    }
}
