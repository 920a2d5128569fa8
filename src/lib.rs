//! Seat-allocation engine for a small fixed fleet of trains.
//!
//! Models per-train seat inventory with a FIFO waiting list and provides
//! three fleet-level placement strategies (first-fit, best-fit, worst-fit)
//! for routing booking requests to trains, plus cancellation with automatic
//! waiting-list discharge.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Train`, `Fleet`, `WaitingEntry`,
//!   `TrainStatus`, `WaitlistAssignment`
//! - **`placement`**: The `PlacementStrategy` trait and the built-in
//!   `FirstFit`, `BestFit`, `WorstFit` rules
//! - **`validation`**: Fleet integrity checks (duplicate IDs, zero capacity)
//! - **`report`**: Fleet-wide occupancy metrics
//!
//! # Architecture
//!
//! The engine is a plain synchronous object graph: a `Fleet` owns an ordered
//! `Vec<Train>` and every operation runs to completion before the next
//! begins. The crate performs no I/O of its own — presentation layers call
//! operations and read the returned snapshots and notifications. Callers that
//! share a `Fleet` across threads must add their own synchronization.
//!
//! # References
//!
//! - Knuth (1997), "The Art of Computer Programming", Vol. 1, Ch. 2.5
//!   (first-fit / best-fit placement policies)
//! - Wilson et al. (1995), "Dynamic Storage Allocation: A Survey and
//!   Critical Review"

pub mod models;
pub mod placement;
pub mod report;
pub mod validation;
