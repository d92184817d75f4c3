//! Position-agnostic and greedy policies.

use super::DiskPolicy;
use crate::models::{ScheduleRequest, ScheduleResult, Track};

/// First Come First Serve.
///
/// Services requests in arrival order, duplicates included, ignoring
/// where they lie.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DiskPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        ScheduleResult::new(request.head, request.requests.iter().copied())
    }

    fn description(&self) -> &'static str {
        "First Come First Serve"
    }
}

/// Shortest Seek Time First.
///
/// Repeatedly moves to the nearest unvisited request. Equidistant
/// candidates resolve to the lower track. Each queue entry is visited
/// once, so duplicates are visited once per occurrence.
///
/// # Complexity
/// O(n²): one linear scan of the remaining requests per step.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl DiskPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        let mut remaining: Vec<Track> = request.requests.clone();
        let mut visits = Vec::with_capacity(remaining.len());
        let mut current = request.head;

        while let Some(index) = nearest(&remaining, current) {
            current = remaining.swap_remove(index);
            visits.push(current);
        }

        ScheduleResult::new(request.head, visits)
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

/// Index of the track closest to `current`, lower track on ties.
fn nearest(remaining: &[Track], current: Track) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|&(_, &track)| (track.abs_diff(current), track))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seek::seek_distance;

    fn textbook() -> ScheduleRequest {
        ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53)
    }

    #[test]
    fn test_fcfs_preserves_arrival_order() {
        let result = Fcfs.schedule(&textbook());
        assert_eq!(result.sequence(), &[53, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(result.total_seek_time(), 640);
    }

    #[test]
    fn test_fcfs_keeps_duplicates() {
        let req = ScheduleRequest::new(vec![10, 10, 5, 10], 7);
        let result = Fcfs.schedule(&req);
        assert_eq!(result.sequence(), &[7, 10, 10, 5, 10]);
    }

    #[test]
    fn test_sstf_textbook() {
        let result = Sstf.schedule(&textbook());
        assert_eq!(result.sequence(), &[53, 65, 67, 37, 14, 98, 122, 124, 183]);
        assert_eq!(result.total_seek_time(), 236);
    }

    #[test]
    fn test_sstf_tie_goes_to_lower_track() {
        let req = ScheduleRequest::new(vec![60, 40], 50);
        let result = Sstf.schedule(&req);
        assert_eq!(result.sequence(), &[50, 40, 60]);
    }

    #[test]
    fn test_sstf_schedules_duplicates_each_time() {
        let req = ScheduleRequest::new(vec![20, 80, 20], 25);
        let result = Sstf.schedule(&req);
        assert_eq!(result.sequence(), &[25, 20, 20, 80]);
    }

    #[test]
    fn test_sstf_request_at_head() {
        let req = ScheduleRequest::new(vec![90, 50], 50);
        let result = Sstf.schedule(&req);
        assert_eq!(result.sequence(), &[50, 50, 90]);
        assert_eq!(result.total_seek_time(), 40);
    }

    #[test]
    fn test_sstf_greedy_step_property() {
        let req = ScheduleRequest::new(vec![3, 180, 42, 42, 99, 0, 150, 61, 7], 70);
        let result = Sstf.schedule(&req);
        let seq = result.sequence();

        let mut unvisited = req.requests.clone();
        for window in seq.windows(2) {
            let (current, chosen) = (window[0], window[1]);
            let best = unvisited.iter().map(|t| t.abs_diff(current)).min().unwrap();
            assert_eq!(chosen.abs_diff(current), best);
            let pos = unvisited.iter().position(|&t| t == chosen).unwrap();
            unvisited.remove(pos);
        }
        assert!(unvisited.is_empty());
        assert_eq!(result.total_seek_time(), seek_distance(seq));
    }

    #[test]
    fn test_sstf_does_not_mutate_queue() {
        let req = textbook();
        let before = req.requests.clone();
        let _ = Sstf.schedule(&req);
        assert_eq!(req.requests, before);
    }

    #[test]
    fn test_empty_queue() {
        let req = ScheduleRequest::new(Vec::new(), 42);
        for result in [Fcfs.schedule(&req), Sstf.schedule(&req)] {
            assert_eq!(result.sequence(), &[42]);
            assert_eq!(result.total_seek_time(), 0);
        }
    }
}
