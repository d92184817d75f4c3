//! Synthetic workload generation.
//!
//! Produces random request queues for policy comparisons and a synthetic
//! per-request trace (arrival time, cylinder, burst, head movement) for
//! offline analysis. Nothing here feeds back into the policies; the trace
//! models a head that moves straight to each cylinder in arrival order.
//!
//! All generators take the RNG explicitly so runs are reproducible with a
//! seeded `StdRng`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::models::{DiskGeometry, ScheduleRequest, Track};

/// Seek cost per cylinder crossed in the synthetic trace (ms).
pub const SEEK_MS_PER_CYLINDER: f64 = 0.1;

/// CSV header written by [`write_trace_csv`].
pub const TRACE_CSV_HEADER: &str =
    "Request_ID,Arrival_Time,Cylinder_No,Burst_Time,Prev_Head,Curr_Head,Request_Type,Queue_Len,Seek_Time";

/// Kind of disk access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Read,
    Write,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Read => f.write_str("Read"),
            RequestKind::Write => f.write_str("Write"),
        }
    }
}

/// One row of the synthetic trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// 1-based request number.
    pub request_id: u32,
    /// Arrival time (s), rounded to 2 decimals.
    pub arrival_time: f64,
    /// Requested cylinder.
    pub cylinder: Track,
    /// Service time (ms), 1..=10.
    pub burst_time_ms: u32,
    /// Head position before servicing.
    pub prev_head: Track,
    /// Head position after servicing (equals `cylinder`).
    pub curr_head: Track,
    /// Read or write.
    pub kind: RequestKind,
    /// Queue length observed at arrival, 1..=10.
    pub queue_len: u32,
    /// `|curr_head - prev_head| * 0.1` ms, rounded to 2 decimals.
    pub seek_time: f64,
}

/// Random workload generator over a disk geometry.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_disksched::models::DiskGeometry;
/// use u_disksched::workload::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let generator = WorkloadGenerator::new(DiskGeometry::default());
/// let queue = generator.queue(10, &mut rng);
/// assert_eq!(queue.len(), 10);
/// assert!(queue.iter().all(|&t| t < 200));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadGenerator {
    geometry: DiskGeometry,
}

impl WorkloadGenerator {
    /// Creates a generator for the given geometry.
    ///
    /// An empty geometry is treated as a single-track disk.
    pub fn new(geometry: DiskGeometry) -> Self {
        Self {
            geometry: DiskGeometry::new(geometry.size.max(1)),
        }
    }

    /// Uniformly random track.
    pub fn track<R: Rng>(&self, rng: &mut R) -> Track {
        rng.random_range(0..self.geometry.size)
    }

    /// Random request queue of `len` tracks (duplicates possible).
    pub fn queue<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<Track> {
        (0..len).map(|_| self.track(rng)).collect()
    }

    /// Random scheduling scenario: random head and a queue whose length is
    /// uniform in `min_len..=max_len`.
    pub fn scenario<R: Rng>(&self, min_len: usize, max_len: usize, rng: &mut R) -> ScheduleRequest {
        let len = if max_len <= min_len {
            min_len
        } else {
            rng.random_range(min_len..=max_len)
        };
        let requests = self.queue(len, rng);
        let head = self.track(rng);
        ScheduleRequest::new(requests, head).with_geometry(self.geometry)
    }

    /// Synthetic trace of `count` requests.
    ///
    /// Arrival gaps are uniform in `[0.1, 2.0)` seconds. The head starts at
    /// a random cylinder and moves to each requested cylinder in turn.
    pub fn trace<R: Rng>(&self, count: u32, rng: &mut R) -> Vec<TraceRecord> {
        let mut records = Vec::with_capacity(count as usize);
        let mut prev_head = self.track(rng);
        let mut arrival_time = 0.0;

        for request_id in 1..=count {
            arrival_time = round2(arrival_time + rng.random_range(0.1..2.0));
            let cylinder = self.track(rng);
            let burst_time_ms = rng.random_range(1..=10);
            let kind = if rng.random_bool(0.5) {
                RequestKind::Read
            } else {
                RequestKind::Write
            };
            let queue_len = rng.random_range(1..=10);
            let seek_time = round2(f64::from(cylinder.abs_diff(prev_head)) * SEEK_MS_PER_CYLINDER);

            records.push(TraceRecord {
                request_id,
                arrival_time,
                cylinder,
                burst_time_ms,
                prev_head,
                curr_head: cylinder,
                kind,
                queue_len,
                seek_time,
            });
            prev_head = cylinder;
        }

        records
    }
}

/// Writes trace records as CSV (header first).
///
/// Floats use the shortest form that round-trips, keeping one decimal on
/// whole numbers (`0.5`, `2.0`, `1.25`).
pub fn write_trace_csv<W: Write>(records: &[TraceRecord], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{TRACE_CSV_HEADER}")?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            r.request_id,
            CsvFloat(r.arrival_time),
            r.cylinder,
            r.burst_time_ms,
            r.prev_head,
            r.curr_head,
            r.kind,
            r.queue_len,
            CsvFloat(r.seek_time)
        )?;
    }
    writer.flush()
}

struct CsvFloat(f64);

impl fmt::Display for CsvFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
