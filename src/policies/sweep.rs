//! Sweep (elevator) family: SCAN, C-SCAN, LOOK, C-LOOK.
//!
//! All four split the queue around the head. Tracks on the side the arm
//! is already moving toward are "ahead" (including any at the head
//! itself); the rest are "behind". They differ only in whether the arm
//! runs out to the disk boundary and in how it treats the behind group.
//!
//! | Policy | Ahead | Boundary | Behind |
//! |--------|-------|----------|--------|
//! | SCAN | sweep order | far end | reverse sweep |
//! | C-SCAN | sweep order | far end, jump to near end | sweep order |
//! | LOOK | sweep order | none | reverse sweep |
//! | C-LOOK | sweep order | none | sweep order |

use super::DiskPolicy;
use crate::models::{Direction, ScheduleRequest, ScheduleResult, Track};

/// Requests split around the head.
struct Split {
    /// Tracks on the sweep side, in sweep order.
    ahead: Vec<Track>,
    /// Remaining tracks, nearest to the head first.
    behind: Vec<Track>,
}

impl Split {
    fn new(request: &ScheduleRequest) -> Self {
        let sorted = request.sorted_requests();
        let head = request.head;

        match request.direction {
            Direction::Increasing => {
                let pivot = sorted.partition_point(|&t| t < head);
                let ahead = sorted[pivot..].to_vec();
                let behind = sorted[..pivot].iter().rev().copied().collect();
                Self { ahead, behind }
            }
            Direction::Decreasing => {
                let pivot = sorted.partition_point(|&t| t <= head);
                let ahead = sorted[..pivot].iter().rev().copied().collect();
                let behind = sorted[pivot..].to_vec();
                Self { ahead, behind }
            }
        }
    }

    /// Last position reached by the first sweep (the head if nothing is ahead).
    fn sweep_end(&self, head: Track) -> Track {
        self.ahead.last().copied().unwrap_or(head)
    }
}

/// Boundary the arm runs toward in `direction`.
fn far_boundary(request: &ScheduleRequest, direction: Direction) -> Track {
    match direction {
        Direction::Increasing => request.geometry.max_track(),
        Direction::Decreasing => request.geometry.min_track(),
    }
}

// ======================== Elevator ========================

/// SCAN (elevator).
///
/// Sweeps toward the far end servicing requests, always touches the disk
/// boundary (once, unless a request already sits there), then reverses and
/// services the remaining requests on the way back. The return sweep stops
/// at the last request; it does not run out to the opposite boundary.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl DiskPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        if request.is_empty() {
            return ScheduleResult::new(request.head, Vec::new());
        }

        let split = Split::new(request);
        let boundary = far_boundary(request, request.direction);
        let sweep_end = split.sweep_end(request.head);

        let Split { mut ahead, behind } = split;
        if sweep_end != boundary {
            ahead.push(boundary);
        }
        ahead.extend(behind);

        ScheduleResult::new(request.head, ahead)
    }

    fn description(&self) -> &'static str {
        "SCAN (Elevator)"
    }

    fn uses_direction(&self) -> bool {
        true
    }
}

/// Circular SCAN.
///
/// Sweeps to the far boundary like SCAN, then jumps straight to the
/// opposite boundary without servicing and resumes in the original
/// direction. The jump is a real movement and counts toward seek time.
/// When nothing is left behind the head, the arm stops at the far
/// boundary and does not jump.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl DiskPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        if request.is_empty() {
            return ScheduleResult::new(request.head, Vec::new());
        }

        let split = Split::new(request);
        let far = far_boundary(request, request.direction);
        let near = far_boundary(request, request.direction.reversed());
        let sweep_end = split.sweep_end(request.head);

        let Split { mut ahead, behind } = split;
        if sweep_end != far {
            ahead.push(far);
        }

        // Behind is nearest-first; after the jump it is serviced from the
        // opposite end, i.e. farthest-first.
        let wrapped: Vec<Track> = behind.into_iter().rev().collect();
        if let Some(&first) = wrapped.first() {
            if first != near {
                ahead.push(near);
            }
        }
        ahead.extend(wrapped);

        ScheduleResult::new(request.head, ahead)
    }

    fn description(&self) -> &'static str {
        "Circular SCAN"
    }

    fn uses_direction(&self) -> bool {
        true
    }
}

// ======================== Look-ahead ========================

/// LOOK.
///
/// SCAN without the boundary touch: reverses at the last request in the
/// sweep direction.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl DiskPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        let Split { mut ahead, behind } = Split::new(request);
        ahead.extend(behind);
        ScheduleResult::new(request.head, ahead)
    }

    fn uses_direction(&self) -> bool {
        true
    }
}

/// Circular LOOK.
///
/// Services the requests ahead in sweep order, then moves to the farthest
/// remaining request behind the head and continues in the same direction.
/// No boundary is touched; the wrap-around is the plain distance between
/// the two requests.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl DiskPolicy for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn schedule(&self, request: &ScheduleRequest) -> ScheduleResult {
        let Split { mut ahead, behind } = Split::new(request);
        ahead.extend(behind.into_iter().rev());
        ScheduleResult::new(request.head, ahead)
    }

    fn description(&self) -> &'static str {
        "Circular LOOK"
    }

    fn uses_direction(&self) -> bool {
        true
    }
}
