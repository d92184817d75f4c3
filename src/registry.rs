//! Policy registry.
//!
//! Maps the closed set of policy identifiers to their implementations and
//! runs one policy, or all six side by side, on a validated request.
//!
//! # Usage
//!
//! ```
//! use u_disksched::models::ScheduleRequest;
//! use u_disksched::registry::{self, Policy};
//!
//! let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
//!
//! let sstf = registry::run(Policy::Sstf, &request).unwrap();
//! assert_eq!(sstf.total_seek_time(), 236);
//!
//! let comparison = registry::run_all(&request).unwrap();
//! assert_eq!(comparison.best().0, Policy::Sstf);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{ScheduleRequest, ScheduleResult};
use crate::policies::{CLook, CScan, DiskPolicy, Fcfs, Look, Scan, Sstf};

/// Identifier of a scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First Come First Serve.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator.
    Scan,
    /// Circular SCAN.
    CScan,
    /// LOOK.
    Look,
    /// Circular LOOK.
    CLook,
}

impl Policy {
    /// All policies in canonical order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Canonical identifier (`fcfs`, `sstf`, `scan`, `cscan`, `look`, `clook`).
    pub fn id(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sstf => "sstf",
            Policy::Scan => "scan",
            Policy::CScan => "cscan",
            Policy::Look => "look",
            Policy::CLook => "clook",
        }
    }

    /// Human-readable name used as the key in comparison output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Serve (FCFS)",
            Policy::Sstf => "Shortest Seek Time First (SSTF)",
            Policy::Scan => "SCAN (Elevator)",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// The policy implementation.
    pub fn implementation(&self) -> &'static dyn DiskPolicy {
        match self {
            Policy::Fcfs => &Fcfs,
            Policy::Sstf => &Sstf,
            Policy::Scan => &Scan,
            Policy::CScan => &CScan,
            Policy::Look => &Look,
            Policy::CLook => &CLook,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    /// Parses an identifier. Case and `-`/`_` separators are ignored, so
    /// `C-SCAN` and `c_look` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Policy::ALL
            .into_iter()
            .find(|p| p.id() == normalized)
            .ok_or_else(|| ScheduleError::UnknownPolicy(s.to_string()))
    }
}

/// Runs one policy after validating the request.
pub fn run(policy: Policy, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
    request.validate()?;
    Ok(execute(policy, request))
}

/// Runs the policy named `name` (see [`Policy::from_str`]).
pub fn run_named(name: &str, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
    let policy: Policy = name.parse()?;
    run(policy, request)
}

/// Runs every policy on the same request.
///
/// The request is validated once; each policy then borrows the identical,
/// unmodified input.
pub fn run_all(request: &ScheduleRequest) -> Result<Comparison, ScheduleError> {
    request.validate()?;
    let results = Policy::ALL
        .into_iter()
        .map(|policy| (policy, execute(policy, request)))
        .collect();
    Ok(Comparison { results })
}

fn execute(policy: Policy, request: &ScheduleRequest) -> ScheduleResult {
    let result = policy.implementation().schedule(request);
    debug!(
        policy = policy.id(),
        requests = request.requests.len(),
        head = request.head,
        direction = %request.direction,
        total_seek_time = result.total_seek_time(),
        "policy scheduled"
    );
    result
}

/// Results of all six policies on one request, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    results: Vec<(Policy, ScheduleResult)>,
}

impl Comparison {
    /// Result of a given policy.
    pub fn get(&self, policy: Policy) -> Option<&ScheduleResult> {
        self.results
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, r)| r)
    }

    /// Iterates `(policy, result)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &ScheduleResult)> {
        self.results.iter().map(|(p, r)| (*p, r))
    }

    /// Policy with the lowest total seek time. Ties go to the policy that
    /// comes first in canonical order.
    pub fn best(&self) -> (Policy, &ScheduleResult) {
        self.ranking()[0]
    }

    /// Policies ordered by total seek time, ascending (stable on ties).
    pub fn ranking(&self) -> Vec<(Policy, &ScheduleResult)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by_key(|(_, r)| r.total_seek_time());
        ranked
    }
}
