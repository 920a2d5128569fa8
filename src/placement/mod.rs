//! Placement strategies for routing booking requests to trains.
//!
//! A strategy only *selects* a train from the fleet; the booking itself is
//! always delegated to the chosen train. Selection is deterministic: ties
//! on availability resolve to the earliest train in fleet order.
//!
//! # Usage
//!
//! ```
//! use seat_alloc::models::Fleet;
//! use seat_alloc::placement::BestFit;
//!
//! let mut fleet = Fleet::default_fleet();
//! let outcome = fleet.place(&BestFit, "alice", 2);
//! ```
//!
//! # References
//!
//! - Knuth (1997), "The Art of Computer Programming", Vol. 1, Ch. 2.5
//! - Wilson et al. (1995), "Dynamic Storage Allocation: A Survey"

mod strategies;

pub use strategies::{BestFit, FirstFit, WorstFit};

use crate::models::Train;
use std::fmt::Debug;

/// A fleet-level train-selection policy.
///
/// `select` must be side-effect free: it returns the index of the chosen
/// train, or `None` when no train qualifies (in which case the fleet reports
/// failure without touching any train).
pub trait PlacementStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "first-fit").
    fn name(&self) -> &'static str;

    /// Picks the index of the train that should receive the request,
    /// or `None` if no train qualifies.
    fn select(&self, trains: &[Train], seats: u32) -> Option<usize>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
