//! Schedule result model.
//!
//! A schedule result is the order in which the head visits tracks,
//! starting at its initial position, together with the total head
//! movement that order costs.

use serde::Serialize;

use super::Track;
use crate::seek::seek_distance;

/// Outcome of running one policy on one request queue.
///
/// `sequence[0]` is the starting head position. The remaining entries are
/// every requested track in service order, plus any synthetic boundary
/// positions inserted by SCAN and C-SCAN.
///
/// The total seek time is always derived from the sequence; there is no
/// way to construct a result whose cost disagrees with its order.
///
/// # Example
/// ```
/// use u_disksched::models::ScheduleResult;
///
/// let result = ScheduleResult::new(50, [60, 40]);
/// assert_eq!(result.total_seek_time(), 30);
/// assert_eq!(result.head(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    sequence: Vec<Track>,
    total_seek_time: u64,
}

impl ScheduleResult {
    /// Builds a result from the head position and the positions visited
    /// after it, computing the seek time.
    pub fn new(head: Track, visits: impl IntoIterator<Item = Track>) -> Self {
        let mut sequence = vec![head];
        sequence.extend(visits);
        let total_seek_time = seek_distance(&sequence);
        Self {
            sequence,
            total_seek_time,
        }
    }

    /// Full visitation order, starting with the head position.
    pub fn sequence(&self) -> &[Track] {
        &self.sequence
    }

    /// Total head movement across the sequence.
    pub fn total_seek_time(&self) -> u64 {
        self.total_seek_time
    }

    /// Starting head position.
    pub fn head(&self) -> Track {
        self.sequence[0]
    }

    /// Positions visited after the start (requests and boundary touches).
    pub fn visits(&self) -> &[Track] {
        &self.sequence[1..]
    }

    /// Mean movement per visit after the start. `0.0` when nothing was visited.
    pub fn average_seek_time(&self) -> f64 {
        let visits = self.visits().len();
        if visits == 0 {
            0.0
        } else {
            self.total_seek_time as f64 / visits as f64
        }
    }

    /// Consumes the result, returning the sequence.
    pub fn into_sequence(self) -> Vec<Track> {
        self.sequence
    }
}
