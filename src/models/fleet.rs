//! Fleet model.
//!
//! A fleet is an ordered collection of trains. Order is significant: it
//! defines first-fit priority and breaks ties in best/worst-fit selection,
//! and it is fixed at construction (the interface permits appending, but
//! trains are never removed).
//!
//! Placement delegates train selection to a [`PlacementStrategy`] and then
//! books on the chosen train, so "no qualifying train" is distinguishable
//! from "waiting-listed on the chosen train".

use log::debug;
use serde::{Deserialize, Serialize};

use super::train::{BookOutcome, Train, TrainStatus, WaitingEntry, WaitlistAssignment};
use crate::placement::{BestFit, FirstFit, PlacementStrategy, WorstFit};

/// Why a fleet-level operation could not proceed.
///
/// Domain outcomes that are not errors (a request joining a waiting list,
/// for instance) are carried in [`BookOutcome`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    /// The seat count was zero.
    InvalidCount,
    /// The fleet has no trains.
    EmptyFleet,
    /// No train qualified for the request (placement), or no train could
    /// cover the cancellation.
    NoMatchingTrain,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::InvalidCount => write!(f, "seat count must be positive"),
            PlacementError::EmptyFleet => write!(f, "fleet has no trains"),
            PlacementError::NoMatchingTrain => write!(f, "no train matched the request"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Per-train waiting-list snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainWaitlist {
    /// Train identifier.
    pub train_id: String,
    /// Queued entries, head first.
    pub entries: Vec<WaitingEntry>,
}

/// An ordered collection of trains with strategy-driven placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fleet {
    trains: Vec<Train>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self { trains: Vec::new() }
    }

    /// Appends a train (builder form).
    pub fn with_train(mut self, train: Train) -> Self {
        self.trains.push(train);
        self
    }

    /// Appends a train.
    pub fn add_train(&mut self, train: Train) {
        self.trains.push(train);
    }

    /// The stock three-train configuration used at startup:
    /// Train1 (5 seats), Train2 (3), Train3 (10), in that order.
    pub fn default_fleet() -> Self {
        Self::new()
            .with_train(Train::new("Train1", 5))
            .with_train(Train::new("Train2", 3))
            .with_train(Train::new("Train3", 10))
    }

    /// Trains in fleet order.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Number of trains.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Whether the fleet has no trains.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Routes a booking request through a placement strategy.
    ///
    /// The strategy only selects a train; the booking itself is delegated to
    /// that train's [`Train::book`], so the request may still end up on its
    /// waiting list (`Ok(WaitingListed)`). `Err` means nothing changed.
    pub fn place(
        &mut self,
        strategy: &dyn PlacementStrategy,
        passenger_id: &str,
        seats: u32,
    ) -> Result<BookOutcome, PlacementError> {
        if seats == 0 {
            return Err(PlacementError::InvalidCount);
        }
        if self.trains.is_empty() {
            return Err(PlacementError::EmptyFleet);
        }
        let index = strategy
            .select(&self.trains, seats)
            .ok_or(PlacementError::NoMatchingTrain)?;
        debug!(
            "{}: selected {} for {passenger_id} ({seats} seat(s))",
            strategy.name(),
            self.trains[index].id()
        );
        Ok(self.trains[index].book(passenger_id, seats))
    }

    /// Places via [`FirstFit`]: the request always lands on the head train.
    pub fn first_fit(
        &mut self,
        passenger_id: &str,
        seats: u32,
    ) -> Result<BookOutcome, PlacementError> {
        self.place(&FirstFit, passenger_id, seats)
    }

    /// Places via [`BestFit`]: tightest qualifying train.
    pub fn best_fit(
        &mut self,
        passenger_id: &str,
        seats: u32,
    ) -> Result<BookOutcome, PlacementError> {
        self.place(&BestFit, passenger_id, seats)
    }

    /// Places via [`WorstFit`]: roomiest qualifying train.
    pub fn worst_fit(
        &mut self,
        passenger_id: &str,
        seats: u32,
    ) -> Result<BookOutcome, PlacementError> {
        self.place(&WorstFit, passenger_id, seats)
    }

    /// Cancels `seats` seats on the first train (in fleet order) whose
    /// booked count covers the request.
    ///
    /// Returns that train's discharge notifications. Unlike placement, the
    /// scan does fall through to later trains.
    pub fn cancel(
        &mut self,
        passenger_id: &str,
        seats: u32,
    ) -> Result<Vec<WaitlistAssignment>, PlacementError> {
        if seats == 0 {
            return Err(PlacementError::InvalidCount);
        }
        for train in &mut self.trains {
            if let Some(assignments) = train.cancel(passenger_id, seats) {
                return Ok(assignments);
            }
        }
        Err(PlacementError::NoMatchingTrain)
    }

    /// Per-train waiting-list contents, fleet order preserved.
    pub fn waiting_report(&self) -> Vec<TrainWaitlist> {
        self.trains
            .iter()
            .map(|t| TrainWaitlist {
                train_id: t.id().to_string(),
                entries: t.waiting_list().iter().cloned().collect(),
            })
            .collect()
    }

    /// Per-train status snapshots, fleet order preserved.
    pub fn status_report(&self) -> Vec<TrainStatus> {
        self.trains.iter().map(Train::status).collect()
    }
}
