//! Schedule request model.

use serde::{Deserialize, Serialize};

use super::{Direction, DiskGeometry, Track};
use crate::error::ScheduleError;
use crate::validation::validate_request;

/// Input to a policy: the pending queue, the head, and the disk shape.
///
/// Policies only ever borrow a request. The queue keeps its arrival order
/// and duplicates; each policy works on its own copy when it needs to sort
/// or consume entries.
///
/// # Example
/// ```
/// use u_disksched::models::{Direction, ScheduleRequest};
///
/// let request = ScheduleRequest::new(vec![98, 183, 37], 53)
///     .with_disk_size(200)
///     .with_direction(Direction::Decreasing);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Pending track requests in arrival order.
    pub requests: Vec<Track>,
    /// Current head position.
    pub head: Track,
    /// Disk geometry.
    #[serde(default)]
    pub geometry: DiskGeometry,
    /// Initial sweep direction (sweep policies only).
    #[serde(default)]
    pub direction: Direction,
}

impl ScheduleRequest {
    /// Creates a request on the default 200-track disk, sweeping upward.
    pub fn new(requests: Vec<Track>, head: Track) -> Self {
        Self {
            requests,
            head,
            geometry: DiskGeometry::default(),
            direction: Direction::default(),
        }
    }

    /// Sets the disk geometry.
    pub fn with_geometry(mut self, geometry: DiskGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the disk size (number of tracks).
    pub fn with_disk_size(mut self, size: u32) -> Self {
        self.geometry = DiskGeometry::new(size);
        self
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Whether there is nothing to service.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Checks that the head and every track lie on the disk.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        validate_request(self).map_err(ScheduleError::InvalidInput)
    }

    /// Requests sorted ascending (a fresh copy; the queue is untouched).
    pub(crate) fn sorted_requests(&self) -> Vec<Track> {
        let mut sorted = self.requests.clone();
        sorted.sort_unstable();
        sorted
    }
}
