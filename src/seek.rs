//! Seek-distance metric.
//!
//! Seek time here is the cumulative absolute distance the head travels
//! across an ordered sequence of track positions.

use crate::models::Track;

/// Total head displacement over `sequence`.
///
/// Sums `|sequence[i] - sequence[i - 1]|` over consecutive pairs. Sequences
/// of length 0 or 1 cost nothing.
///
/// # Example
/// ```
/// use u_disksched::seek::seek_distance;
///
/// assert_eq!(seek_distance(&[53, 98, 37]), 45 + 61);
/// assert_eq!(seek_distance(&[53]), 0);
/// ```
pub fn seek_distance(sequence: &[Track]) -> u64 {
    sequence
        .windows(2)
        .map(|pair| u64::from(pair[0].abs_diff(pair[1])))
        .sum()
}
