//! Train model.
//!
//! A train owns a seat-inventory counter and its own FIFO waiting list.
//! Seats are fungible — the inventory is a count, not a map of numbered
//! seats — so a booking reserves capacity, never specific positions.
//!
//! Requests that do not fit outright join the waiting list whole; there is
//! no partial booking. Cancellation frees capacity and immediately discharges
//! as many waiting parties as fit, strictly in arrival order.

use std::collections::{BTreeSet, VecDeque};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Result of a booking attempt on a single train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookOutcome {
    /// All requested seats were committed.
    Booked,
    /// The request did not fit and was appended to the train's waiting list.
    WaitingListed,
}

impl BookOutcome {
    /// Whether the booking was committed outright.
    #[inline]
    pub fn is_booked(self) -> bool {
        matches!(self, BookOutcome::Booked)
    }
}

/// A queued booking request awaiting capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingEntry {
    /// Opaque passenger identifier supplied by the caller.
    pub passenger_id: String,
    /// Number of seats the party needs. The whole party seats together
    /// or keeps waiting.
    pub seats: u32,
}

/// Notification that a waiting party was seated during discharge.
///
/// Emitted in discharge order so a presentation layer can surface each
/// reassignment to the affected passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistAssignment {
    /// Train the party was seated on.
    pub train_id: String,
    /// The discharged passenger.
    pub passenger_id: String,
    /// Seats granted.
    pub seats: u32,
}

/// Point-in-time inventory snapshot of one train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainStatus {
    /// Train identifier.
    pub train_id: String,
    /// Seats currently committed.
    pub booked_seats: u32,
    /// Seats still open.
    pub available_seats: u32,
}

/// Reporting classification of a single seat index.
///
/// `WaitlistAssigned` is a coloring label, not a reservation: it marks seats
/// whose counter increment happened while the waiting list was non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    /// Filled while the waiting list was non-empty.
    WaitlistAssigned,
    /// Filled by an ordinary booking.
    Booked,
    /// Still open.
    Available,
}

/// A train with a fixed seat capacity and a FIFO waiting list.
///
/// Invariant: `booked_seats <= total_seats` at all times. Capacity and
/// identifier are fixed at construction; all mutation goes through
/// [`book`](Train::book) and [`cancel`](Train::cancel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Train {
    id: String,
    total_seats: u32,
    booked_seats: u32,
    waiting_list: VecDeque<WaitingEntry>,
    /// Seat indices filled while the waiting list was non-empty.
    /// Reporting label only — seats stay fungible.
    waiting_assigned_seats: BTreeSet<u32>,
}

impl Train {
    /// Creates an empty train with the given capacity.
    pub fn new(id: impl Into<String>, total_seats: u32) -> Self {
        Self {
            id: id.into(),
            total_seats,
            booked_seats: 0,
            waiting_list: VecDeque::new(),
            waiting_assigned_seats: BTreeSet::new(),
        }
    }

    /// Train identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fixed seat capacity.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Seats currently committed.
    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    /// Seats still open: `total_seats - booked_seats`.
    #[inline]
    pub fn available_seats(&self) -> u32 {
        self.total_seats - self.booked_seats
    }

    /// The waiting list in queue order (head first).
    pub fn waiting_list(&self) -> &VecDeque<WaitingEntry> {
        &self.waiting_list
    }

    /// Seat indices labeled as waiting-list-assigned for reporting.
    pub fn waiting_assigned_seats(&self) -> &BTreeSet<u32> {
        &self.waiting_assigned_seats
    }

    /// Attempts to book `seats` seats for a passenger.
    ///
    /// If the whole party fits, the seats are committed and `Booked` is
    /// returned. Otherwise the request joins the back of the waiting list
    /// unchanged and `WaitingListed` is returned — all-or-nothing, no
    /// partial booking.
    ///
    /// `seats` must be positive; the fleet layer rejects zero counts before
    /// delegating here.
    pub fn book(&mut self, passenger_id: &str, seats: u32) -> BookOutcome {
        if seats <= self.available_seats() {
            self.commit(seats);
            debug!("{}: booked {seats} seat(s) for {passenger_id}", self.id);
            BookOutcome::Booked
        } else {
            self.waiting_list.push_back(WaitingEntry {
                passenger_id: passenger_id.to_string(),
                seats,
            });
            debug!(
                "{}: waitlisted {passenger_id} ({seats} seat(s), {} available)",
                self.id,
                self.available_seats()
            );
            BookOutcome::WaitingListed
        }
    }

    /// Commits `seats` seats, marking each seat index filled while the
    /// waiting list is non-empty at that moment.
    ///
    /// The per-unit check is deliberate: an ordinary booking that lands
    /// while another party is waiting gets its seats labeled too. The label
    /// feeds reporting only (see [`SeatState`]).
    fn commit(&mut self, seats: u32) {
        for _ in 0..seats {
            if !self.waiting_list.is_empty() {
                self.waiting_assigned_seats.insert(self.booked_seats);
            }
            self.booked_seats += 1;
        }
    }

    /// Cancels `seats` booked seats and discharges the waiting list.
    ///
    /// Succeeds whenever the aggregate booked count covers the request —
    /// no per-passenger ledger is kept, so any caller may cancel any count
    /// (documented behavior). Returns the discharge notifications on
    /// success, `None` (state untouched) if fewer than `seats` seats are
    /// booked.
    pub fn cancel(&mut self, passenger_id: &str, seats: u32) -> Option<Vec<WaitlistAssignment>> {
        if self.booked_seats < seats {
            trace!(
                "{}: cancel of {seats} seat(s) for {passenger_id} refused ({} booked)",
                self.id,
                self.booked_seats
            );
            return None;
        }
        self.booked_seats -= seats;
        debug!("{}: cancelled {seats} seat(s) for {passenger_id}", self.id);
        Some(self.discharge())
    }

    /// Seats waiting parties from the head of the queue while they fit.
    ///
    /// Strictly FIFO: when the head party does not fit, discharge stops —
    /// smaller parties behind it are never seated ahead of it. Each seated
    /// party's commit runs while its entry is still queued, so its seats
    /// carry the waiting-assigned label.
    pub fn discharge(&mut self) -> Vec<WaitlistAssignment> {
        let mut assignments = Vec::new();
        while self.available_seats() > 0 {
            let (passenger_id, seats) = match self.waiting_list.front() {
                Some(entry) => (entry.passenger_id.clone(), entry.seats),
                None => break,
            };
            if seats > self.available_seats() {
                break;
            }
            self.commit(seats);
            self.waiting_list.pop_front();
            debug!("{}: discharged {passenger_id} ({seats} seat(s))", self.id);
            assignments.push(WaitlistAssignment {
                train_id: self.id.clone(),
                passenger_id,
                seats,
            });
        }
        assignments
    }

    /// Inventory snapshot. No side effects.
    pub fn status(&self) -> TrainStatus {
        TrainStatus {
            train_id: self.id.clone(),
            booked_seats: self.booked_seats,
            available_seats: self.available_seats(),
        }
    }

    /// Per-seat reporting classification, indices `0..total_seats`.
    ///
    /// The waiting-assigned label takes precedence over the booked/available
    /// split, matching the seat-map coloring of the reporting layer.
    pub fn seat_states(&self) -> Vec<SeatState> {
        (0..self.total_seats)
            .map(|i| {
                if self.waiting_assigned_seats.contains(&i) {
                    SeatState::WaitlistAssigned
                } else if i < self.booked_seats {
                    SeatState::Booked
                } else {
                    SeatState::Available
                }
            })
            .collect()
    }
}
