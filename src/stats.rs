//! Seek statistics.
//!
//! Summarizes the head movement of a computed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek time | Sum of `|next - current|` over the sequence |
//! | Visits | Positions visited after the start (boundary touches included) |
//! | Average seek time | Total / visits |
//! | Longest seek | Largest single movement |
//! | Reversals | Times the arm changes direction |

use serde::Serialize;

use crate::models::ScheduleResult;

/// Head-movement indicators for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekStats {
    /// Total head movement (tracks).
    pub total_seek_time: u64,
    /// Number of positions visited after the start.
    pub visits: usize,
    /// Mean movement per visit (0.0 with no visits).
    pub average_seek_time: f64,
    /// Largest single movement (tracks).
    pub longest_seek: u64,
    /// Number of direction changes.
    pub reversals: usize,
}

impl SeekStats {
    /// Computes statistics from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let mut longest_seek: u64 = 0;
        let mut reversals: usize = 0;
        // +1 moving up, -1 moving down, 0 before the first movement
        let mut heading: i8 = 0;

        for pair in result.sequence().windows(2) {
            let (from, to) = (pair[0], pair[1]);
            longest_seek = longest_seek.max(u64::from(from.abs_diff(to)));

            let step = match to.cmp(&from) {
                std::cmp::Ordering::Greater => 1,
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => continue,
            };
            if heading != 0 && step != heading {
                reversals += 1;
            }
            heading = step;
        }

        Self {
            total_seek_time: result.total_seek_time(),
            visits: result.visits().len(),
            average_seek_time: result.average_seek_time(),
            longest_seek,
            reversals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleRequest;
    use crate::policies::{CScan, DiskPolicy, Fcfs, Look, Scan};

    fn textbook() -> ScheduleRequest {
        ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53)
    }

    #[test]
    fn test_stats_look() {
        let stats = SeekStats::calculate(&Look.schedule(&textbook()));
        assert_eq!(stats.total_seek_time, 299);
        assert_eq!(stats.visits, 8);
        assert!((stats.average_seek_time - 299.0 / 8.0).abs() < 1e-10);
        assert_eq!(stats.longest_seek, 146); // 183 -> 37
        assert_eq!(stats.reversals, 1);
    }

    #[test]
    fn test_stats_cscan_jump_is_longest() {
        let stats = SeekStats::calculate(&CScan.schedule(&textbook()));
        assert_eq!(stats.longest_seek, 199);
        assert_eq!(stats.visits, 10); // 8 requests + 199 + 0
    }

    #[test]
    fn test_boundary_touch_counts_as_visit() {
        // 65 67 98 122 124 183 199 37 14
        let stats = SeekStats::calculate(&Scan.schedule(&textbook()));
        assert_eq!(stats.visits, 9);
        assert!((stats.average_seek_time - 331.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_fcfs_reversals() {
        // 53 -> 98 -> 183 -> 37 -> 122 -> 14 -> 124 -> 65 -> 67
        let stats = SeekStats::calculate(&Fcfs.schedule(&textbook()));
        assert_eq!(stats.reversals, 6);
        assert_eq!(stats.longest_seek, 146);
    }

    #[test]
    fn test_stats_empty() {
        let stats = SeekStats::calculate(&ScheduleResult::new(10, Vec::new()));
        assert_eq!(stats.total_seek_time, 0);
        assert_eq!(stats.visits, 0);
        assert_eq!(stats.longest_seek, 0);
        assert_eq!(stats.reversals, 0);
        assert!((stats.average_seek_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_stationary_steps_do_not_reverse() {
        let stats = SeekStats::calculate(&ScheduleResult::new(10, vec![20, 20, 30, 5]));
        assert_eq!(stats.reversals, 1);
    }
}
