//! Disk-arm scheduling for the U-Engine ecosystem.
//!
//! Computes the order in which pending track requests are serviced under
//! six classical policies, and the total head movement ("seek time") each
//! order costs. Used for teaching and comparing scheduling trade-offs, and
//! behind a small HTTP API for a front end.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Track`, `DiskGeometry`, `Direction`,
//!   `ScheduleRequest`, `ScheduleResult`
//! - **`seek`**: The seek-distance metric every result is priced with
//! - **`policies`**: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK
//! - **`registry`**: Closed policy set, single runs and side-by-side comparison
//! - **`validation`**: Bounds checks on head and tracks
//! - **`stats`**: Average/longest seek and direction reversals
//! - **`workload`**: Random queues and synthetic request traces
//! - **`api`** / **`server`** / **`config`**: JSON adapter, HTTP front end, settings
//!
//! # Example
//!
//! ```
//! use u_disksched::models::ScheduleRequest;
//! use u_disksched::registry::{self, Policy};
//!
//! let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
//! let scan = registry::run(Policy::Scan, &request).unwrap();
//! assert_eq!(scan.sequence(), &[53, 65, 67, 98, 122, 124, 183, 199, 37, 14]);
//! assert_eq!(scan.total_seek_time(), 331);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod policies;
pub mod registry;
pub mod seek;
pub mod server;
pub mod stats;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
