//! Disk scheduling policies.
//!
//! Six classical policies deciding the order in which pending track
//! requests are serviced:
//!
//! - **Queue order**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep**: SCAN, C-SCAN, LOOK, C-LOOK
//!
//! # Usage
//!
//! ```
//! use u_disksched::models::ScheduleRequest;
//! use u_disksched::policies::{DiskPolicy, Look};
//!
//! let request = ScheduleRequest::new(vec![98, 183, 37, 122], 53);
//! let result = Look.schedule(&request);
//! assert_eq!(result.sequence(), &[53, 98, 122, 183, 37]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod greedy;
mod sweep;

pub use greedy::{Fcfs, Sstf};
pub use sweep::{CLook, CScan, Look, Scan};

use crate::models::{ScheduleRequest, ScheduleResult};
use std::fmt::Debug;

/// A disk scheduling policy.
///
/// Policies are stateless: the same request always yields the same result,
/// and the request is only borrowed. They assume a validated request (head
/// and tracks on the disk); [`crate::registry`] validates before dispatch.
pub trait DiskPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "SSTF", "C-LOOK").
    fn name(&self) -> &'static str;

    /// Computes the service order for `request`.
    ///
    /// The returned sequence starts with `request.head`. An empty queue
    /// yields `[head]` with zero seek time.
    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether the initial sweep direction affects the result.
    fn uses_direction(&self) -> bool {
        false
    }
}
