//! Seat-allocation domain models.
//!
//! Two aggregates, composed top-down: a [`Fleet`] owns an ordered collection
//! of [`Train`]s; each train owns its seat counters and its own FIFO waiting
//! list. All state lives in this object graph — there is no ambient or
//! static instance; callers construct a `Fleet` and pass it where needed.

mod fleet;
mod train;

pub use fleet::{Fleet, PlacementError, TrainWaitlist};
pub use train::{BookOutcome, SeatState, Train, TrainStatus, WaitingEntry, WaitlistAssignment};
