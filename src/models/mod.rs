//! Disk scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Track` | Addressable position on the disk surface |
//! | `DiskGeometry` | Number of tracks, hence the boundaries |
//! | `Direction` | Initial sweep direction of the arm |
//! | `ScheduleRequest` | Pending queue + head + geometry + direction |
//! | `ScheduleResult` | Visitation order + total seek time |

mod direction;
mod geometry;
mod request;
mod schedule;

pub use direction::Direction;
pub use geometry::{DiskGeometry, DEFAULT_DISK_SIZE};
pub use request::ScheduleRequest;
pub use schedule::ScheduleResult;

/// A track (cylinder) number.
pub type Track = u32;
